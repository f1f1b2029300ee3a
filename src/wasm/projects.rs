//! Project gallery: filter bar, card grid and the detail overlay.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, KeyboardEvent};

use super::dom::{append, clear, closest, Dom};
use super::handles::Listener;
use crate::catalog::{Project, PROJECTS};
use crate::gallery::{Gallery, ProjectFilter};

struct State {
    dom: Dom,
    gallery: Gallery<'static>,
    filters: Element,
    grid: Element,
    overlay: Option<Element>,
    section: Element,
}

impl State {
    fn render_filters(&self) -> Result<(), JsValue> {
        clear(&self.filters);
        for filter in ProjectFilter::ALL {
            let class = if filter == self.gallery.filter() {
                "filter active"
            } else {
                "filter"
            };
            let b = self.dom.button(class, filter.label())?;
            b.set_attribute("data-filter", filter.key())?;
            self.filters.append_child(&b)?;
        }
        Ok(())
    }

    fn render_grid(&self) -> Result<(), JsValue> {
        clear(&self.grid);
        let visible = self.gallery.visible();
        if visible.is_empty() {
            let empty = self.dom.text("p", "empty muted", "No projects found in this category.")?;
            self.grid.append_child(&empty)?;
            return Ok(());
        }
        for project in visible {
            self.grid.append_child(&card(&self.dom, project)?)?;
        }
        Ok(())
    }

    fn open(&mut self, id: u32) -> Result<(), JsValue> {
        let Some(project) = self.gallery.open(id) else {
            return Ok(());
        };
        log::debug!("opened project {id}");
        self.close_overlay();
        let overlay = overlay(&self.dom, project)?;
        self.section.append_child(&overlay)?;
        self.overlay = Some(overlay);
        Ok(())
    }

    fn close(&mut self) {
        if self.gallery.is_open() {
            log::debug!("closed project overlay");
        }
        self.gallery.close();
        self.close_overlay();
    }

    fn close_overlay(&mut self) {
        if let Some(el) = self.overlay.take() {
            el.remove();
        }
    }
}

fn card(dom: &Dom, project: &Project) -> Result<Element, JsValue> {
    let card = dom.el("article", "card project")?;
    card.set_attribute("data-project", &project.id.to_string())?;

    let media = dom.el("div", "media")?;
    media.append_child(&dom.img("cover", project.image, project.title)?)?;
    if project.featured {
        media.append_child(&dom.text("span", "pill featured", "Featured")?)?;
    }
    let details = dom.button("btn small view", "👁 View Details")?;
    details.set_attribute("data-open", &project.id.to_string())?;
    media.append_child(&details)?;
    card.append_child(&media)?;

    card.append_child(&dom.text("h3", "", project.title)?)?;
    card.append_child(&dom.text("p", "muted clamp-3", project.description)?)?;

    if let Some(stats) = &project.stats {
        let row = dom.el("div", "project-stats")?;
        for (label, value) in stats.entries() {
            let stat = dom.el("div", "")?;
            stat.append_child(&dom.text("strong", "", value)?)?;
            stat.append_child(&dom.text("span", "muted", label)?)?;
            row.append_child(&stat)?;
        }
        card.append_child(&row)?;
    }

    card.append_child(&dom.chips("chips", project.technologies)?)?;
    card.append_child(&links(dom, project, "Live Demo", "Code")?)?;
    Ok(card)
}

fn links(dom: &Dom, project: &Project, live: &str, code: &str) -> Result<Element, JsValue> {
    let row = dom.el("div", "links")?;
    if let Some(url) = project.live_url {
        row.append_child(&dom.link("btn small primary", url, &format!("↗ {live}"))?)?;
    }
    if let Some(url) = project.repo_url {
        row.append_child(&dom.link("btn small ghost", url, &format!("⌥ {code}"))?)?;
    }
    Ok(row)
}

fn overlay(dom: &Dom, project: &Project) -> Result<Element, JsValue> {
    let backdrop = dom.el("div", "overlay")?;
    backdrop.set_attribute("data-close", "")?;
    backdrop.set_attribute("role", "dialog")?;
    backdrop.set_attribute("aria-modal", "true")?;

    let panel = dom.el("div", "overlay-panel")?;
    let close = dom.button("overlay-close", "✕")?;
    close.set_attribute("data-close", "")?;
    close.set_attribute("aria-label", "Close")?;

    let body = dom.el("div", "overlay-body")?;
    body.append_child(&dom.img("cover", project.image, project.title)?)?;
    body.append_child(&dom.text("h2", "", project.title)?)?;
    body.append_child(&dom.text("h4", "", "Project Overview")?)?;
    body.append_child(&dom.text("p", "", project.description)?)?;
    body.append_child(&dom.text("h4", "", "Technologies Used")?)?;
    body.append_child(&dom.chips("chips", project.technologies)?)?;

    if let Some(stats) = &project.stats {
        let row = dom.el("div", "project-stats")?;
        for (label, value) in stats.entries() {
            let stat = dom.el("div", "")?;
            stat.append_child(&dom.text("strong", "", value)?)?;
            stat.append_child(&dom.text("span", "muted", label)?)?;
            row.append_child(&stat)?;
        }
        body.append_child(&row)?;
    }

    if !project.challenges.is_empty() || !project.solutions.is_empty() {
        let cols = dom.el("div", "two-col")?;
        if !project.challenges.is_empty() {
            let c = dom.el("div", "")?;
            let heading = dom.text("h4", "", "Challenges")?;
            append(&c, &[&heading, &dom.list("ticks", project.challenges)?])?;
            cols.append_child(&c)?;
        }
        if !project.solutions.is_empty() {
            let s = dom.el("div", "")?;
            let heading = dom.text("h4", "", "Solutions")?;
            append(&s, &[&heading, &dom.list("ticks", project.solutions)?])?;
            cols.append_child(&s)?;
        }
        body.append_child(&cols)?;
    }
    body.append_child(&links(dom, project, "View Live Project", "View Code")?)?;

    append(&panel, &[&close, &body])?;
    backdrop.append_child(&panel)?;
    Ok(backdrop)
}

pub struct GalleryView {
    _state: Rc<RefCell<State>>,
    _listeners: Vec<Listener>,
}

impl GalleryView {
    pub fn mount(dom: &Dom, parent: &Element) -> Result<Self, JsValue> {
        let (section, inner) = dom.section(
            "projects",
            "Featured Projects",
            Some("A selection of client work across business sites, web apps and online stores"),
        )?;
        let filters = dom.el("div", "filters reveal")?;
        let grid = dom.el("div", "grid three projects")?;
        append(&inner, &[&filters, &grid])?;
        parent.append_child(&section)?;

        let state = State {
            dom: Dom::new(dom.document().clone()),
            gallery: Gallery::new(&PROJECTS),
            filters,
            grid,
            overlay: None,
            section: section.clone(),
        };
        state.render_filters()?;
        state.render_grid()?;
        let state = Rc::new(RefCell::new(state));

        let clicks = {
            let state = state.clone();
            Listener::new(&section, "click", move |event| {
                let mut s = state.borrow_mut();
                let result = if let Some(el) = closest(&event, "[data-filter]") {
                    match el.get_attribute("data-filter").as_deref().and_then(ProjectFilter::from_key) {
                        Some(filter) => {
                            log::debug!("project filter -> {}", filter.key());
                            s.gallery.set_filter(filter);
                            s.render_filters().and_then(|_| s.render_grid())
                        }
                        None => Ok(()),
                    }
                } else if let Some(el) = closest(&event, "[data-close]") {
                    // Clicks inside the panel bubble up to the backdrop; only
                    // the backdrop itself or the close button dismiss.
                    let on_backdrop = event
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .is_some_and(|t| t == el);
                    if on_backdrop {
                        s.close();
                    }
                    Ok(())
                } else if let Some(el) = closest(&event, "[data-open]") {
                    match el.get_attribute("data-open").and_then(|v| v.parse().ok()) {
                        Some(id) => s.open(id),
                        None => Ok(()),
                    }
                } else {
                    Ok(())
                };
                if let Err(e) = result {
                    log::warn!("gallery update failed: {e:?}");
                }
            })?
        };

        let escape = {
            let state = state.clone();
            let document = dom.document().clone();
            Listener::new(&document, "keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|k| k.key() == "Escape");
                if is_escape {
                    state.borrow_mut().close();
                }
            })?
        };

        Ok(Self {
            _state: state,
            _listeners: vec![clicks, escape],
        })
    }
}
