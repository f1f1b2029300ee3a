#![cfg(target_arch = "wasm32")]

use horizon_folio::catalog::{ProjectCategory, PROJECTS};
use horizon_folio::config::SiteConfig;
use horizon_folio::{scroll_fraction, Page};
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, EventInit, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, KeyboardEvent, KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount() -> (Element, Page) {
    mount_with(SiteConfig::default())
}

fn mount_with(config: SiteConfig) -> (Element, Page) {
    let window = web_sys::window().unwrap();
    let doc = document();
    let host = doc.create_element("div").unwrap();
    doc.body().unwrap().append_child(&host).unwrap();
    let page = Page::mount(&window, &host, config).unwrap();
    (host, page)
}

/// Config with short timers so the whole submit cycle fits in a test.
fn quick_config() -> SiteConfig {
    SiteConfig {
        submit_delay_ms: 10,
        success_window_ms: 200,
        ..SiteConfig::default()
    }
}

async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn input(form: &Element, name: &str) -> HtmlInputElement {
    form.query_selector(&format!("input[name=\"{name}\"]"))
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn textarea(form: &Element) -> HtmlTextAreaElement {
    form.query_selector("textarea").unwrap().unwrap().dyn_into().unwrap()
}

fn submit_button(form: &Element) -> HtmlButtonElement {
    form.query_selector("button").unwrap().unwrap().dyn_into().unwrap()
}

/// Type into every field the way a user would, then submit.
fn fill_and_submit(host: &Element) -> Element {
    let form = host.query_selector(".contact-form").unwrap().unwrap();
    for (name, value) in [("name", "Ada"), ("email", "ada@example.com"), ("subject", "Hello")] {
        let field = input(&form, name);
        field.set_value(value);
        field.dispatch_event(&bubbling("input")).unwrap();
    }
    let message = textarea(&form);
    message.set_value("A new site, please.");
    message.dispatch_event(&bubbling("input")).unwrap();
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
    form
}

fn is_hidden(el: &Element) -> bool {
    el.class_list().contains("hidden")
}

fn click(host: &Element, selector: &str) {
    host.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} not found"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn count(host: &Element, selector: &str) -> u32 {
    host.query_selector_all(selector).unwrap().length()
}

fn bubbling(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

#[wasm_bindgen_test]
fn sections_render_in_page_order() {
    let (host, page) = mount();
    let ids: Vec<String> = {
        let list = host.query_selector_all("main section").unwrap();
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| n.dyn_into::<Element>().ok())
            .map(|el| el.id())
            .collect()
    };
    assert_eq!(
        ids,
        [
            "home",
            "about",
            "skills",
            "projects",
            "experience",
            "services",
            "testimonials",
            "achievements",
            "blog",
            "contact"
        ]
    );
    assert_eq!(count(&host, "header.site-header"), 1);
    assert_eq!(count(&host, "footer.site-footer"), 1);
    drop(page);
    host.remove();
}

#[wasm_bindgen_test]
fn style_sheet_and_markup_are_removed_on_drop() {
    let doc = document();
    let owned = "style[data-owner=\"horizon_folio\"]";
    let (host, page) = mount();
    assert_eq!(doc.query_selector_all(owned).unwrap().length(), 1);
    assert!(host.child_element_count() > 0);

    drop(page);
    assert_eq!(doc.query_selector_all(owned).unwrap().length(), 0);
    assert_eq!(host.child_element_count(), 0);
    host.remove();
}

#[wasm_bindgen_test]
fn scene_canvas_is_first_or_absent() {
    let (host, page) = mount();
    // Headless browsers may lack WebGL2; then the canvas is dropped and the
    // page carries on without it.
    if let Some(canvas) = host.query_selector(".scene-canvas").unwrap() {
        let first = host.first_element_child().unwrap();
        assert_eq!(first, canvas);
        assert_eq!(canvas.get_attribute("aria-hidden").as_deref(), Some("true"));
    }
    assert_eq!(count(&host, "main section"), 10);
    drop(page);
    host.remove();
}

#[wasm_bindgen_test]
fn filter_buttons_narrow_the_grid() {
    let (host, page) = mount();
    assert_eq!(count(&host, "#projects [data-project]"), PROJECTS.len() as u32);
    assert_eq!(count(&host, "#projects [data-filter]"), 8);

    click(&host, "[data-filter=\"business\"]");
    let expected = PROJECTS
        .iter()
        .filter(|p| p.category == ProjectCategory::Business)
        .count();
    assert_eq!(count(&host, "#projects [data-project]"), expected as u32);
    let active = host.query_selector(".filter.active").unwrap().unwrap();
    assert_eq!(active.get_attribute("data-filter").as_deref(), Some("business"));

    click(&host, "[data-filter=\"all\"]");
    assert_eq!(count(&host, "#projects [data-project]"), PROJECTS.len() as u32);
    drop(page);
    host.remove();
}

#[wasm_bindgen_test]
fn overlay_opens_and_closes() {
    let (host, page) = mount();
    let id = PROJECTS[0].id;
    click(&host, &format!("[data-open=\"{id}\"]"));
    assert_eq!(count(&host, ".overlay"), 1);
    let title = host.query_selector(".overlay h2").unwrap().unwrap();
    assert_eq!(title.text_content().as_deref(), Some(PROJECTS[0].title));

    // Clicks inside the panel keep it open.
    click(&host, ".overlay-body h2");
    assert_eq!(count(&host, ".overlay"), 1);

    click(&host, ".overlay-close");
    assert_eq!(count(&host, ".overlay"), 0);

    click(&host, &format!("[data-open=\"{id}\"]"));
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&escape).unwrap();
    assert_eq!(count(&host, ".overlay"), 0);
    drop(page);
    host.remove();
}

#[wasm_bindgen_test]
fn testimonial_arrows_wrap_around() {
    let (host, page) = mount();
    let active_dot = |host: &Element| {
        host.query_selector(".dot.active")
            .unwrap()
            .unwrap()
            .get_attribute("data-index")
    };
    assert_eq!(active_dot(&host).as_deref(), Some("0"));

    click(&host, "[data-step=\"prev\"]");
    assert_eq!(active_dot(&host).as_deref(), Some("3"));
    assert_eq!(count(&host, ".stage .slide-backward"), 1);

    click(&host, "[data-step=\"next\"]");
    assert_eq!(active_dot(&host).as_deref(), Some("0"));

    click(&host, "[data-index=\"2\"]");
    assert_eq!(active_dot(&host).as_deref(), Some("2"));
    drop(page);
    host.remove();
}

#[wasm_bindgen_test]
fn incomplete_contact_form_is_not_sent() {
    let (host, page) = mount();
    let form = host.query_selector(".contact-form").unwrap().unwrap();
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    assert!(!submit_button(&form).disabled());
    drop(page);
    host.remove();
}

#[wasm_bindgen_test]
fn complete_contact_form_locks_while_sending() {
    let (host, page) = mount();
    let form = fill_and_submit(&host);
    let button = submit_button(&form);
    assert!(button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("Sending..."));

    // A second submit while sending changes nothing.
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
    assert!(button.disabled());
    drop(page);
    host.remove();
}

#[wasm_bindgen_test(async)]
async fn contact_cycle_runs_on_real_timers() {
    let (host, page) = mount_with(quick_config());
    let banner = host.query_selector(".banner.success").unwrap().unwrap();
    assert!(is_hidden(&banner));

    let form = fill_and_submit(&host);
    assert!(submit_button(&form).disabled());
    assert!(is_hidden(&banner));

    // Delivery completes: banner shown, fields cleared, form usable again.
    sleep(80).await;
    assert!(!is_hidden(&banner));
    assert!(!submit_button(&form).disabled());
    assert_eq!(input(&form, "name").value(), "");
    assert_eq!(input(&form, "email").value(), "");
    assert_eq!(input(&form, "subject").value(), "");
    assert_eq!(textarea(&form).value(), "");

    // The success window elapses and the banner goes away.
    sleep(300).await;
    assert!(is_hidden(&banner));
    drop(page);
    host.remove();
}

#[wasm_bindgen_test(async)]
async fn unmount_mid_send_is_quiet() {
    let (host, page) = mount_with(quick_config());
    fill_and_submit(&host);
    drop(page);

    sleep(80).await;
    assert_eq!(host.child_element_count(), 0);
    assert!(document().query_selector(".banner.success").unwrap().is_none());
    host.remove();
}

#[wasm_bindgen_test]
fn footer_links_point_at_sections() {
    let (host, page) = mount();
    let links = host.query_selector_all(".footer-links [data-scroll]").unwrap();
    assert_eq!(links.length(), 6);
    for i in 0..links.length() {
        let link: Element = links.item(i).unwrap().dyn_into().unwrap();
        let id = link.get_attribute("data-scroll").unwrap();
        assert!(host.query_selector(&format!("#{id}")).unwrap().is_some(), "{id}");
    }
    assert_eq!(count(&host, ".footer-services li"), 4);
    drop(page);
    host.remove();
}

#[wasm_bindgen_test]
fn scroll_fraction_stays_finite() {
    let window = web_sys::window().unwrap();
    let s = scroll_fraction(&window);
    assert!(s.is_finite());
    assert!(s >= 0.0);
}
