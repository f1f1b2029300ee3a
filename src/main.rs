//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` locally. Pass a port as the first argument
//! (default 8000).

use std::process::{Command, ExitCode};
use std::{env, io};

fn build_bundle() -> io::Result<bool> {
    println!("Building WASM pkg …");
    let status = Command::new("wasm-pack")
        .env("HORIZON_FOLIO_WASM_PACK", "1")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()?;
    Ok(status.success())
}

fn serve(port: u16) -> io::Result<()> {
    println!("Serving static/ at http://127.0.0.1:{port} (Ctrl-C to stop)");
    let status = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .status()?;
    if !status.success() {
        eprintln!("http server exited with {status}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let port = match env::args().nth(1).map(|p| p.parse::<u16>()) {
        None => 8000,
        Some(Ok(p)) => p,
        Some(Err(e)) => {
            eprintln!("invalid port: {e}");
            return ExitCode::FAILURE;
        }
    };

    match build_bundle() {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("wasm-pack finished with errors.");
            return ExitCode::FAILURE;
        }
        Err(_) => {
            eprintln!(
                "wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/). \
                 Serving whatever is already in static/pkg."
            );
        }
    }

    match serve(port) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("failed to start http server (is python3 installed?): {e}");
            ExitCode::FAILURE
        }
    }
}
