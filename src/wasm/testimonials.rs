use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Element;

use super::dom::{append, clear, closest, Dom};
use super::handles::Listener;
use crate::carousel::{Carousel, Direction};
use crate::catalog::{Testimonial, TESTIMONIALS};

struct State {
    dom: Dom,
    carousel: Carousel,
    stage: Element,
    dots: Element,
}

impl State {
    fn render(&self, direction: Option<Direction>) -> Result<(), JsValue> {
        clear(&self.stage);
        if let Some(t) = TESTIMONIALS.get(self.carousel.index()) {
            let card = quote_card(&self.dom, t)?;
            if let Some(d) = direction {
                card.class_list().add_1(d.class())?;
            }
            self.stage.append_child(&card)?;
        }

        clear(&self.dots);
        for i in 0..self.carousel.len() {
            let class = if i == self.carousel.index() { "dot active" } else { "dot" };
            let dot = self.dom.button(class, "")?;
            dot.set_attribute("data-index", &i.to_string())?;
            dot.set_attribute("aria-label", &format!("Show testimonial {}", i + 1))?;
            self.dots.append_child(&dot)?;
        }
        Ok(())
    }
}

fn quote_card(dom: &Dom, t: &Testimonial) -> Result<Element, JsValue> {
    let card = dom.el("blockquote", "card quote")?;
    card.append_child(&dom.text("span", "quote-mark", "“")?)?;
    let stars = "★".repeat(usize::from(t.rating.min(5)));
    card.append_child(&dom.text("div", "stars", &stars)?)?;
    card.append_child(&dom.text("p", "", t.content)?)?;

    let who = dom.el("footer", "who")?;
    who.append_child(&dom.img("avatar", t.avatar, t.name)?)?;
    let name = dom.el("div", "")?;
    name.append_child(&dom.text("strong", "", t.name)?)?;
    name.append_child(&dom.text("span", "muted", &format!("{}, {}", t.role, t.company))?)?;
    if let Some(kind) = t.project_type {
        name.append_child(&dom.text("span", "pill", kind)?)?;
    }
    who.append_child(&name)?;
    card.append_child(&who)?;
    Ok(card)
}

pub struct TestimonialsView {
    _state: Rc<RefCell<State>>,
    _listener: Listener,
}

impl TestimonialsView {
    pub fn mount(dom: &Dom, parent: &Element) -> Result<Self, JsValue> {
        let (section, inner) = dom.section(
            "testimonials",
            "Client Testimonials",
            Some("What my clients say about working with me"),
        )?;

        let carousel = dom.el("div", "carousel reveal")?;
        let prev = dom.button("nav-arrow", "‹")?;
        prev.set_attribute("data-step", "prev")?;
        prev.set_attribute("aria-label", "Previous testimonial")?;
        let stage = dom.el("div", "stage")?;
        let next = dom.button("nav-arrow", "›")?;
        next.set_attribute("data-step", "next")?;
        next.set_attribute("aria-label", "Next testimonial")?;
        append(&carousel, &[&prev, &stage, &next])?;
        let dots = dom.el("div", "dots")?;
        append(&inner, &[&carousel, &dots])?;
        parent.append_child(&section)?;

        let state = State {
            dom: Dom::new(dom.document().clone()),
            carousel: Carousel::new(TESTIMONIALS.len()),
            stage,
            dots,
        };
        state.render(None)?;
        let state = Rc::new(RefCell::new(state));

        let listener = {
            let state = state.clone();
            Listener::new(&section, "click", move |event| {
                let mut s = state.borrow_mut();
                let direction = if let Some(el) = closest(&event, "[data-step]") {
                    match el.get_attribute("data-step").as_deref() {
                        Some("prev") => Some(s.carousel.previous()),
                        Some("next") => Some(s.carousel.next()),
                        _ => None,
                    }
                } else if let Some(el) = closest(&event, "[data-index]") {
                    el.get_attribute("data-index")
                        .and_then(|v| v.parse().ok())
                        .and_then(|i| s.carousel.jump(i))
                } else {
                    None
                };
                if direction.is_some() {
                    if let Err(e) = s.render(direction) {
                        log::warn!("testimonial update failed: {e:?}");
                    }
                }
            })?
        };

        Ok(Self {
            _state: state,
            _listener: listener,
        })
    }
}
