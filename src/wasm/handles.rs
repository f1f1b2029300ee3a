//! Scoped browser resources. Each handle registers something with the
//! browser on creation and unregisters it when dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Element, Event, EventTarget};

/// Event listener removed from its target on drop.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
            .ok();
    }
}

/// One-shot timer cleared on drop. Dropping it after it fired is a no-op.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: u32, callback: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let window = window().ok_or("no window")?;
        let closure = Closure::once(callback);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay,
        )?;
        Ok(Self { id, _closure: closure })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop calling `frame` with the frame timestamp
/// (ms) until dropped.
pub struct AnimationLoop {
    callback: FrameSlot,
    request: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn start(mut frame: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        // The closure reschedules itself, so it needs a handle to its own
        // slot. Storing it inside an `Option` lets us create the `Closure`
        // first and fill the slot afterwards; `Drop` empties the slot to
        // break the cycle.
        let callback: FrameSlot = Rc::new(RefCell::new(None));
        let request = Rc::new(Cell::new(None));

        let slot = callback.clone();
        let pending = request.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            frame(now);

            // schedule next
            let next = match (window(), slot.borrow().as_ref()) {
                (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
                _ => None,
            };
            pending.set(next);
        }) as Box<dyn FnMut(f64)>));

        let first = match callback.borrow().as_ref() {
            Some(cb) => window()
                .ok_or("no window")?
                .request_animation_frame(cb.as_ref().unchecked_ref())?,
            None => return Err("animation callback missing".into()),
        };
        request.set(Some(first));

        Ok(Self { callback, request })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(window), Some(id)) = (window(), self.request.take()) {
            window.cancel_animation_frame(id).ok();
        }
        self.callback.borrow_mut().take();
    }
}

/// `<style>` element in the document head, removed on drop.
pub struct StyleSheet {
    element: Element,
}

impl StyleSheet {
    pub fn inject(document: &Document, css: &str) -> Result<Self, JsValue> {
        let head = document.head().ok_or("document has no <head>")?;
        let element = document.create_element("style")?;
        element.set_attribute("data-owner", env!("CARGO_PKG_NAME"))?;
        element.set_text_content(Some(css));
        head.append_child(&element)?;
        Ok(Self { element })
    }
}

impl Drop for StyleSheet {
    fn drop(&mut self) {
        self.element.remove();
    }
}
