#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Single-page portfolio site rendered from static data, with a WebGL2
//! black-hole backdrop driven by scroll position.
//!
//! Everything except the browser layer is plain Rust and builds (and is
//! tested) on the host.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod gallery;
pub mod scene;
pub mod skills;
pub mod theme;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    mod contact;
    mod dom;
    mod handles;
    mod page;
    mod projects;
    mod render;
    mod sections;
    mod testimonials;

    pub use page::{load_config, scroll_fraction, Page};

    thread_local! {
        static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let config = page::load_config(&document);
        // A second init (e.g. a test harness mounting twice) keeps the first logger.
        console_log::init_with_level(config.log_level()).ok();

        let Some(mount) = document.get_element_by_id("app") else {
            // Test harnesses load the module without the site's markup.
            log::warn!("no #app element; nothing mounted");
            return Ok(());
        };
        let page = Page::mount(&window, &mount, config)?;
        PAGE.with(|slot| slot.replace(Some(page)));
        Ok(())
    }

    /// Tear the page down, releasing the style sheet, listeners, timers and
    /// the animation loop.
    #[wasm_bindgen]
    pub fn unmount() {
        if let Some(page) = PAGE.with(|slot| slot.borrow_mut().take()) {
            drop(page);
            log::info!("page unmounted");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{load_config, scroll_fraction, Page};

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
