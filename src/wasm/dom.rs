//! Thin element builders over `web_sys::Document`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::config::is_external;

pub struct Dom {
    document: Document,
}

impl Dom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn el(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        Ok(el)
    }

    pub fn text(&self, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
        let el = self.el(tag, class)?;
        el.set_text_content(Some(text));
        Ok(el)
    }

    /// Anchor; links leaving the site open in a new tab.
    pub fn link(&self, class: &str, href: &str, text: &str) -> Result<Element, JsValue> {
        let a = self.text("a", class, text)?;
        a.set_attribute("href", href)?;
        if is_external(href) {
            a.set_attribute("target", "_blank")?;
            a.set_attribute("rel", "noopener noreferrer")?;
        }
        Ok(a)
    }

    pub fn img(&self, class: &str, src: &str, alt: &str) -> Result<Element, JsValue> {
        let img = self.el("img", class)?;
        img.set_attribute("src", src)?;
        img.set_attribute("alt", alt)?;
        img.set_attribute("loading", "lazy")?;
        Ok(img)
    }

    pub fn button(&self, class: &str, text: &str) -> Result<Element, JsValue> {
        let b = self.text("button", class, text)?;
        b.set_attribute("type", "button")?;
        Ok(b)
    }

    /// Row of small labels.
    pub fn chips(&self, class: &str, items: &[&str]) -> Result<Element, JsValue> {
        let row = self.el("div", class)?;
        for item in items {
            row.append_child(&self.text("span", "chip", item)?)?;
        }
        Ok(row)
    }

    /// Bulleted list.
    pub fn list(&self, class: &str, items: &[&str]) -> Result<Element, JsValue> {
        let ul = self.el("ul", class)?;
        for item in items {
            ul.append_child(&self.text("li", "", item)?)?;
        }
        Ok(ul)
    }

    /// `<section id=…>` with the standard heading block. Returns the
    /// section and the inner container content goes into.
    pub fn section(
        &self,
        id: &str,
        title: &str,
        subtitle: Option<&str>,
    ) -> Result<(Element, Element), JsValue> {
        let section = self.el("section", "section")?;
        section.set_id(id);
        let inner = self.el("div", "container")?;
        let heading = self.el("div", "section-heading reveal")?;
        heading.append_child(&self.text("h2", "", title)?)?;
        heading.append_child(&self.el("div", "rule")?)?;
        if let Some(subtitle) = subtitle {
            heading.append_child(&self.text("p", "subtitle", subtitle)?)?;
        }
        inner.append_child(&heading)?;
        section.append_child(&inner)?;
        Ok((section, inner))
    }
}

pub fn append(parent: &Element, children: &[&Element]) -> Result<(), JsValue> {
    for child in children {
        parent.append_child(child)?;
    }
    Ok(())
}

pub fn clear(el: &Element) {
    while let Some(child) = el.first_child() {
        el.remove_child(&child).ok();
    }
}

pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    el.dyn_ref::<HtmlElement>()
        .ok_or("not an HTML element")?
        .style()
        .set_property(property, value)
}

/// Nearest ancestor of the event target (inclusive) matching `selector`.
pub fn closest(event: &web_sys::Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}
