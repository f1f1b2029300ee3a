// Copies the static site into `dist/` after the wasm-pack build.
use std::process::Command;
use std::{env, fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    // Only run the heavy wasm-pack build when targeting wasm32.
    // wasm-pack re-enters this script through its own cargo build.
    let target = env::var("TARGET").unwrap_or_default();
    let nested = env::var_os("HORIZON_FOLIO_WASM_PACK").is_some();
    if target == "wasm32-unknown-unknown" && !nested {
        // wasm-pack is assumed available. If not, emit warning.
        let status = Command::new("wasm-pack")
            .env("HORIZON_FOLIO_WASM_PACK", "1")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status();

        match status {
            Ok(st) if !st.success() => println!("cargo:warning=wasm-pack build failed"),
            Ok(_) => {}
            Err(_) => println!("cargo:warning=wasm-pack not installed – skipping"),
        }
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let options = CopyOptions::new().overwrite(true).content_only(true);
        if let Err(e) = copy(static_dir, out_dir, &options) {
            println!("cargo:warning=failed to copy static/ into dist/: {e}");
        }
    }
}
