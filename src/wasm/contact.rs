//! Contact section: form bound to [`ContactForm`], plus contact details.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};

use super::dom::{append, Dom};
use super::handles::{Listener, Timeout};
use crate::config::SiteConfig;
use crate::contact::{ContactForm, ContactMessage, DeliveryError, Field, Outbox, Status, Ticket};
use crate::theme;

/// Stand-in for a mail backend: reports success after a fixed delay.
/// Swap in a real [`Outbox`] to actually deliver messages.
pub struct SimulatedOutbox {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl SimulatedOutbox {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }
}

impl Outbox for SimulatedOutbox {
    fn send(&self, message: ContactMessage, done: Box<dyn FnOnce(Result<(), DeliveryError>)>) {
        log::info!(
            "simulating delivery of {:?} from {}",
            message.fields.subject,
            message.fields.email
        );
        // `done` must survive a failed timer setup so it can report it.
        let done = Rc::new(RefCell::new(Some(done)));
        let fire = done.clone();
        let timer = Timeout::new(self.delay_ms, move || {
            if let Some(done) = fire.borrow_mut().take() {
                done(Ok(()));
            }
        });
        match timer {
            Ok(t) => {
                self.pending.replace(Some(t));
            }
            Err(e) => {
                if let Some(done) = done.borrow_mut().take() {
                    done(Err(DeliveryError::Unavailable(format!("{e:?}"))));
                }
            }
        }
    }
}

struct Widgets {
    inputs: Vec<(Field, Element)>,
    submit: HtmlButtonElement,
    banner: Element,
    failure: Element,
}

struct Shared {
    form: ContactForm,
    widgets: Widgets,
    banner_timer: Option<Timeout>,
    success_window_ms: u32,
}

impl Shared {
    fn render(&self) {
        let w = &self.widgets;
        let status = self.form.status();
        w.submit.set_disabled(self.form.is_locked());
        w.submit.set_text_content(Some(if status == Status::Submitting {
            "Sending..."
        } else {
            "➤ Send Message"
        }));
        w.banner.class_list().toggle_with_force("hidden", status != Status::Success).ok();

        match self.form.last_failure() {
            Some(e) => {
                w.failure.set_text_content(Some(&format!("Your message could not be sent: {e}")));
                w.failure.class_list().remove_1("hidden").ok();
            }
            None => {
                w.failure.class_list().add_1("hidden").ok();
            }
        }

        for (field, el) in &w.inputs {
            let value = self.form.fields().get(*field);
            if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                if input.value() != value {
                    input.set_value(value);
                }
            } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
                if area.value() != value {
                    area.set_value(value);
                }
            }
        }
    }
}

fn finish(shared: &Weak<RefCell<Shared>>, ticket: Ticket, result: Result<(), DeliveryError>) {
    // The section may have been torn down while the outbox was busy.
    let Some(shared) = shared.upgrade() else { return };
    let mut s = shared.borrow_mut();
    let ok = result.is_ok();
    if !s.form.finish(ticket, result) {
        return;
    }
    s.render();
    if !ok {
        log::warn!("contact delivery failed");
        return;
    }
    log::info!("contact message sent");

    let weak = Rc::downgrade(&shared);
    match Timeout::new(s.success_window_ms, move || {
        if let Some(shared) = weak.upgrade() {
            let mut s = shared.borrow_mut();
            if s.form.dismiss(ticket) {
                s.render();
            }
        }
    }) {
        Ok(t) => s.banner_timer = Some(t),
        Err(e) => log::warn!("could not schedule banner dismissal: {e:?}"),
    }
}

fn field(
    dom: &Dom,
    field: Field,
    label: &str,
    kind: &str,
    placeholder: &str,
) -> Result<(Element, Element), JsValue> {
    let wrap = dom.el("div", "field")?;
    let l = dom.text("label", "", label)?;
    l.set_attribute("for", field.key())?;
    let input = if kind == "textarea" {
        let t = dom.el("textarea", "")?;
        t.set_attribute("rows", "6")?;
        t
    } else {
        let i = dom.el("input", "")?;
        i.set_attribute("type", kind)?;
        i
    };
    input.set_id(field.key());
    input.set_attribute("name", field.key())?;
    input.set_attribute("placeholder", placeholder)?;
    input.set_attribute("required", "")?;
    append(&wrap, &[&l, &input])?;
    Ok((wrap, input))
}

fn info_column(dom: &Dom, config: &SiteConfig) -> Result<Element, JsValue> {
    let col = dom.el("div", "contact-info reveal")?;
    col.append_child(&dom.text("h3", "", "Get In Touch")?)?;
    col.append_child(&dom.text(
        "p",
        "muted",
        "I'm always open to new projects and collaborations. Reach out through the form or any channel below.",
    )?)?;

    let rows = [
        ("Mail", "Email", config.email.clone(), format!("mailto:{}", config.email)),
        ("Phone", "Phone", config.phone.clone(), config.phone_href()),
        ("MapPin", "Location", config.location.clone(), String::from("#")),
    ];
    for (icon, label, value, href) in rows {
        let row = dom.el("a", "info-row")?;
        row.set_attribute("href", &href)?;
        row.append_child(&dom.text("span", "glyph", theme::icon(icon))?)?;
        let text = dom.el("div", "")?;
        text.append_child(&dom.text("span", "muted", label)?)?;
        text.append_child(&dom.text("strong", "", &value)?)?;
        row.append_child(&text)?;
        col.append_child(&row)?;
    }

    col.append_child(&dom.text("h3", "", "Follow Me")?)?;
    let socials = dom.el("div", "socials")?;
    for s in &config.socials {
        let a = dom.link("social", &s.href, &s.glyph)?;
        a.set_attribute("aria-label", &s.label)?;
        socials.append_child(&a)?;
    }
    col.append_child(&socials)?;
    Ok(col)
}

pub struct ContactView {
    _shared: Rc<RefCell<Shared>>,
    _outbox: Rc<SimulatedOutbox>,
    _listeners: Vec<Listener>,
}

impl ContactView {
    pub fn mount(dom: &Dom, parent: &Element, config: &SiteConfig) -> Result<Self, JsValue> {
        let (section, inner) = dom.section(
            "contact",
            "Let's Work Together",
            Some("Have a project in mind? I'd love to hear about it. Let's discuss how we can bring your ideas to life."),
        )?;

        let grid = dom.el("div", "two-col")?;
        let panel = dom.el("div", "card reveal")?;
        panel.append_child(&dom.text("h3", "", "Send Message")?)?;
        let banner = dom.text(
            "div",
            "banner success hidden",
            "Thank you! Your message has been sent successfully. I'll get back to you soon.",
        )?;
        let failure = dom.el("div", "banner failure hidden")?;
        append(&panel, &[&banner, &failure])?;

        let form = dom.el("form", "contact-form")?;
        let row = dom.el("div", "field-row")?;
        let (name_wrap, name) = field(dom, Field::Name, "Name *", "text", "Your full name")?;
        let (email_wrap, email) =
            field(dom, Field::Email, "Email *", "email", "your.email@example.com")?;
        append(&row, &[&name_wrap, &email_wrap])?;
        let (subject_wrap, subject) =
            field(dom, Field::Subject, "Subject *", "text", "What's this about?")?;
        let (message_wrap, message) = field(
            dom,
            Field::Message,
            "Message *",
            "textarea",
            "Tell me about your project...",
        )?;
        let submit = dom.text("button", "btn primary wide", "➤ Send Message")?;
        submit.set_attribute("type", "submit")?;
        append(&form, &[&row, &subject_wrap, &message_wrap, &submit])?;
        panel.append_child(&form)?;

        append(&grid, &[&panel, &info_column(dom, config)?])?;
        inner.append_child(&grid)?;
        parent.append_child(&section)?;

        let shared = Rc::new(RefCell::new(Shared {
            form: ContactForm::new(),
            widgets: Widgets {
                inputs: vec![
                    (Field::Name, name),
                    (Field::Email, email),
                    (Field::Subject, subject),
                    (Field::Message, message),
                ],
                submit: submit.dyn_into()?,
                banner,
                failure,
            },
            banner_timer: None,
            success_window_ms: config.success_window_ms,
        }));
        shared.borrow().render();
        let outbox = Rc::new(SimulatedOutbox::new(config.submit_delay_ms));

        let input = {
            let shared = shared.clone();
            Listener::new(&form, "input", move |event| {
                let Some(target) = event.target() else { return };
                let (name, value) = if let Some(i) = target.dyn_ref::<HtmlInputElement>() {
                    (i.name(), i.value())
                } else if let Some(t) = target.dyn_ref::<HtmlTextAreaElement>() {
                    (t.name(), t.value())
                } else {
                    return;
                };
                if let Some(field) = Field::from_key(&name) {
                    shared.borrow_mut().form.set(field, value);
                }
            })?
        };

        let submit = {
            let shared = shared.clone();
            let outbox = outbox.clone();
            Listener::new(&form, "submit", move |event| {
                event.prevent_default();
                let message = {
                    let mut s = shared.borrow_mut();
                    match s.form.begin_submit() {
                        Ok(m) => {
                            s.banner_timer = None;
                            s.render();
                            m
                        }
                        Err(e) => {
                            log::debug!("submit ignored: {e}");
                            return;
                        }
                    }
                };
                let ticket = message.ticket;
                let weak = Rc::downgrade(&shared);
                // Borrow released above: a synchronous outbox may call back immediately.
                outbox.send(message, Box::new(move |result| finish(&weak, ticket, result)));
            })?
        };

        Ok(Self {
            _shared: shared,
            _outbox: outbox,
            _listeners: vec![input, submit],
        })
    }
}
