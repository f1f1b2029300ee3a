//! Page shell: style sheet, section order, scene canvas and the handles
//! that keep the page alive.

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlCanvasElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use super::contact::ContactView;
use super::dom::{closest, Dom};
use super::handles::{Listener, StyleSheet};
use super::projects::GalleryView;
use super::render::{self, SceneHandle};
use super::sections;
use super::testimonials::TestimonialsView;
use crate::config::SiteConfig;

const SITE_CSS: &str = include_str!("site.css");

/// Read the optional `#site-config` JSON block, falling back to defaults.
pub fn load_config(document: &Document) -> SiteConfig {
    let Some(text) = document
        .get_element_by_id("site-config")
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            // Logger is not up yet; the console is.
            web_sys::console::warn_1(&JsValue::from_str(&format!("{e}; using defaults")));
            SiteConfig::default()
        }
    }
}

/// How far the viewport has scrolled through the page, 0 at the top and 1
/// at the bottom. Overscroll may push it slightly outside that range.
pub fn scroll_fraction(window: &Window) -> f32 {
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let range = f64::from(root.scroll_height()) - viewport;
    if range <= 0.0 {
        return 0.0;
    }
    let y = window.scroll_y().unwrap_or(0.0);
    (y / range) as f32
}

pub fn scroll_to_top(window: &Window) {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn scroll_to_section(document: &Document, id: &str) {
    if let Some(target) = document.get_element_by_id(id) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Adds `revealed` to each `.reveal` element the first time it enters the
/// viewport.
struct Reveal {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl Reveal {
    fn watch(root: &Element) -> Result<Self, JsValue> {
        let targets = root.query_selector_all(".reveal")?;

        let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                if entry.is_intersecting() {
                    let target = entry.target();
                    target.class_list().add_1("revealed").ok();
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(0.1));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(o) => o,
            Err(e) => {
                // No observer support: show everything straight away.
                log::debug!("IntersectionObserver unavailable ({e:?}); revealing all sections");
                for i in 0..targets.length() {
                    if let Some(el) = targets.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                        el.class_list().add_1("revealed")?;
                    }
                }
                return Ok(Self {
                    observer: None,
                    _callback: None,
                });
            }
        };

        for i in 0..targets.length() {
            if let Some(el) = targets.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&el);
            }
        }
        Ok(Self {
            observer: Some(observer),
            _callback: Some(callback),
        })
    }
}

impl Drop for Reveal {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

pub struct Page {
    root: Element,
    canvas: Element,
    _scene: Option<SceneHandle>,
    _reveal: Reveal,
    _gallery: GalleryView,
    _testimonials: TestimonialsView,
    _contact: ContactView,
    _listeners: Vec<Listener>,
    _style: StyleSheet,
}

impl Page {
    /// Build the page inside `mount`. The scene is optional: if WebGL2 is
    /// missing the canvas is removed and the rest of the page works as is.
    pub fn mount(window: &Window, mount: &Element, config: SiteConfig) -> Result<Self, JsValue> {
        let document = window.document().ok_or("no document")?;
        let style = StyleSheet::inject(&document, SITE_CSS)?;
        let dom = Dom::new(document.clone());

        let canvas = dom.el("canvas", "scene-canvas")?;
        canvas.set_attribute("aria-hidden", "true")?;
        mount.append_child(&canvas)?;

        let root = dom.el("div", "page")?;
        let header = sections::header(&dom, &config)?;
        root.append_child(&header)?;

        let main = dom.el("main", "")?;
        main.append_child(&sections::hero(&dom, &config)?)?;
        let content = dom.el("div", "content")?;
        content.append_child(&sections::about(&dom)?)?;
        content.append_child(&sections::skills(&dom)?)?;
        let gallery = GalleryView::mount(&dom, &content)?;
        content.append_child(&sections::experience(&dom)?)?;
        content.append_child(&sections::services(&dom)?)?;
        let testimonials = TestimonialsView::mount(&dom, &content)?;
        content.append_child(&sections::achievements(&dom)?)?;
        content.append_child(&sections::blog(&dom)?)?;
        let contact = ContactView::mount(&dom, &content, &config)?;
        main.append_child(&content)?;
        root.append_child(&main)?;
        root.append_child(&sections::footer(&dom, &config)?)?;
        root.append_child(&sections::floating_social(&dom, &config)?)?;
        mount.append_child(&root)?;

        let listeners = Self::wire(window, &root, &header)?;
        let reveal = Reveal::watch(&root)?;

        let scene = match canvas.clone().dyn_into::<HtmlCanvasElement>() {
            Ok(c) => match render::start(c, config.scene.clone()) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::warn!("background scene disabled: {e}");
                    canvas.remove();
                    None
                }
            },
            Err(_) => None,
        };

        log::info!("page mounted for {}", config.owner);
        Ok(Self {
            root,
            canvas,
            _scene: scene,
            _reveal: reveal,
            _gallery: gallery,
            _testimonials: testimonials,
            _contact: contact,
            _listeners: listeners,
            _style: style,
        })
    }

    /// Page-wide behaviour: in-page navigation buttons and the header's
    /// scrolled state.
    fn wire(window: &Window, root: &Element, header: &Element) -> Result<Vec<Listener>, JsValue> {
        let win = window.clone();
        let nav = Listener::new(root, "click", move |event| {
            let Some(el) = closest(&event, "[data-scroll]") else { return };
            event.prevent_default();
            match el.get_attribute("data-scroll").as_deref() {
                Some("top") => scroll_to_top(&win),
                Some(id) => {
                    if let Some(doc) = win.document() {
                        scroll_to_section(&doc, id);
                    }
                }
                None => {}
            }
        })?;

        let win = window.clone();
        let header = header.clone();
        let scrolled = Listener::new(window, "scroll", move |_| {
            let y = win.scroll_y().unwrap_or(0.0);
            header.class_list().toggle_with_force("scrolled", y > 50.0).ok();
        })?;

        Ok(vec![nav, scrolled])
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.root.remove();
        self.canvas.remove();
    }
}
