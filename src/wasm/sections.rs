//! Static sections: pure renderings of catalog slices.

use wasm_bindgen::JsValue;
use web_sys::Element;

use super::dom::{append, set_style, Dom};
use crate::catalog::{
    ABOUT_IMAGE, ACHIEVEMENTS, BLOG_POSTS, EXPERIENCES, HEADLINES, HIGHLIGHTS, SERVICES, SKILLS,
};
use crate::config::SiteConfig;
use crate::skills::group_by_category;
use crate::theme;

const NAV: [(&str, &str); 8] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("services", "Services"),
    ("blog", "Blog"),
    ("contact", "Contact"),
];

/// Footer shortcut list: a subset of [`NAV`].
const QUICK_LINKS: [&str; 6] = ["home", "about", "skills", "projects", "experience", "contact"];

fn nav_link(dom: &Dom, class: &str, id: &str, label: &str) -> Result<Element, JsValue> {
    let a = dom.link(class, &format!("#{id}"), label)?;
    a.set_attribute("data-scroll", id)?;
    Ok(a)
}

pub fn header(dom: &Dom, config: &SiteConfig) -> Result<Element, JsValue> {
    let header = dom.el("header", "site-header")?;
    let bar = dom.el("div", "container bar")?;
    let brand = nav_link(dom, "brand", "home", &config.owner.replace(' ', "."))?;
    let nav = dom.el("nav", "nav")?;
    for (id, label) in NAV {
        nav.append_child(&nav_link(dom, "nav-link", id, label)?)?;
    }
    append(&bar, &[&brand, &nav])?;
    header.append_child(&bar)?;
    Ok(header)
}

fn social_row(dom: &Dom, class: &str, config: &SiteConfig) -> Result<Element, JsValue> {
    let row = dom.el("div", class)?;
    let mail = dom.link("social", &format!("mailto:{}", config.email), theme::icon("Mail"))?;
    mail.set_attribute("aria-label", "Email")?;
    row.append_child(&mail)?;
    for social in &config.socials {
        let a = dom.link("social", &social.href, &social.glyph)?;
        a.set_attribute("aria-label", &social.label)?;
        row.append_child(&a)?;
    }
    Ok(row)
}

pub fn hero(dom: &Dom, config: &SiteConfig) -> Result<Element, JsValue> {
    let section = dom.el("section", "hero")?;
    section.set_id("home");
    let inner = dom.el("div", "container hero-inner")?;

    let badge = dom.text("div", "badge", "✦ Available for Freelance Projects ✦")?;
    let title = dom.el("h1", "")?;
    title.append_child(&dom.document().create_text_node("Hi, I'm "))?;
    title.append_child(&dom.text("span", "gradient-text", &config.owner)?)?;
    let tagline = dom.text("p", "tagline", &config.tagline)?;
    let summary = dom.text("p", "summary", &config.summary)?;

    let actions = dom.el("div", "actions")?;
    let resume = dom.link("btn primary", &config.resume_path, "⤓ Download Resume")?;
    resume.set_attribute("download", &config.resume_file_name)?;
    let more = dom.button("btn ghost", "Learn More ↓")?;
    more.set_attribute("data-scroll", "about")?;
    append(&actions, &[&resume, &more])?;

    let socials = social_row(dom, "socials", config)?;
    let cue = dom.el("div", "scroll-cue")?;
    cue.append_child(&dom.el("span", "")?)?;

    append(&inner, &[&badge, &title, &tagline, &summary, &actions, &socials, &cue])?;
    section.append_child(&inner)?;
    Ok(section)
}

pub fn about(dom: &Dom) -> Result<Element, JsValue> {
    let (section, inner) = dom.section("about", "About Me", None)?;

    let grid = dom.el("div", "two-col")?;
    let figure = dom.el("div", "about-figure reveal")?;
    figure.append_child(&dom.img("", ABOUT_IMAGE, "Coding workspace")?)?;
    figure.append_child(&dom.text("div", "orbit-badge", "3+ Years")?)?;

    let text = dom.el("div", "about-text reveal")?;
    text.append_child(&dom.text("h3", "", "Passionate Web Developer from India")?)?;
    text.append_child(&dom.text(
        "p",
        "",
        "I'm a Computer Science student and freelance web developer based in Delhi, India. \
         With a passion for creating digital experiences that make a difference, I specialize \
         in building modern, responsive websites and web applications that help businesses grow.",
    )?)?;

    let highlights = dom.el("div", "highlights")?;
    for h in &HIGHLIGHTS {
        let card = dom.el("div", "card highlight")?;
        card.append_child(&dom.text("span", "glyph", theme::icon(h.icon))?)?;
        card.append_child(&dom.text("h4", "", h.title)?)?;
        card.append_child(&dom.text("p", "muted", h.description)?)?;
        highlights.append_child(&card)?;
    }
    text.append_child(&highlights)?;
    append(&grid, &[&figure, &text])?;

    let stats = dom.el("div", "stats reveal")?;
    for s in &HEADLINES {
        let stat = dom.el("div", "stat")?;
        stat.append_child(&dom.text("span", "glyph", theme::icon(s.icon))?)?;
        stat.append_child(&dom.text("strong", "", s.number)?)?;
        stat.append_child(&dom.text("span", "muted", s.label)?)?;
        stats.append_child(&stat)?;
    }

    append(&inner, &[&grid, &stats])?;
    Ok(section)
}

pub fn skills(dom: &Dom) -> Result<Element, JsValue> {
    let (section, inner) = dom.section(
        "skills",
        "Skills & Technologies",
        Some("Here are the technologies and tools I work with to bring ideas to life"),
    )?;

    let grid = dom.el("div", "grid three")?;
    for group in group_by_category(&SKILLS) {
        let look = theme::skill(group.category);
        let card = dom.el("div", "card reveal")?;
        let head = dom.el("div", "card-head")?;
        head.append_child(&dom.text("span", &format!("glyph grad-{}", look.accent), look.glyph)?)?;
        head.append_child(&dom.text("h3", "", look.label)?)?;
        head.append_child(&dom.text("span", "muted", &format!("avg {}%", group.average_level()))?)?;
        card.append_child(&head)?;

        for skill in &group.skills {
            let row = dom.el("div", "skill")?;
            let label = dom.el("div", "skill-label")?;
            label.append_child(&dom.text("span", "", skill.name)?)?;
            let detail = match skill.years {
                Some(y) => format!("{}% · {y}y", skill.level),
                None => format!("{}%", skill.level),
            };
            label.append_child(&dom.text("span", "muted", &detail)?)?;
            let track = dom.el("div", "track")?;
            let fill = dom.el("div", &format!("fill grad-{}", look.accent))?;
            set_style(&fill, "--level", &format!("{}%", skill.level.min(100)))?;
            track.append_child(&fill)?;
            append(&row, &[&label, &track])?;
            card.append_child(&row)?;
        }
        grid.append_child(&card)?;
    }

    let learning = dom.el("div", "callout reveal")?;
    learning.append_child(&dom.text("h3", "", "Always Learning & Growing")?)?;
    learning.append_child(&dom.text(
        "p",
        "muted",
        "Technology evolves quickly, and so do I. I'm currently exploring new frameworks and tools to keep delivering modern solutions.",
    )?)?;
    append(&inner, &[&grid, &learning])?;
    Ok(section)
}

pub fn experience(dom: &Dom) -> Result<Element, JsValue> {
    let (section, inner) = dom.section(
        "experience",
        "Experience & Education",
        Some("My journey in web development and the experiences that have shaped my skills"),
    )?;

    let timeline = dom.el("div", "timeline")?;
    for e in &EXPERIENCES {
        let look = theme::experience(e.kind);
        let item = dom.el("article", "card timeline-item reveal")?;
        item.append_child(&dom.text("span", &format!("marker grad-{}", look.accent), look.glyph)?)?;
        item.append_child(&dom.text("h3", "", e.title)?)?;
        let meta = dom.el("div", "meta muted")?;
        meta.append_child(&dom.text("span", "", e.company)?)?;
        meta.append_child(&dom.text("span", "", &format!("📅 {}", e.period))?)?;
        meta.append_child(&dom.text("span", &format!("pill grad-{}", look.accent), look.label)?)?;
        item.append_child(&meta)?;
        item.append_child(&dom.text("p", "", e.description)?)?;
        if !e.achievements.is_empty() {
            item.append_child(&dom.text("h4", "", "Key Achievements")?)?;
            item.append_child(&dom.list("ticks", e.achievements)?)?;
        }
        item.append_child(&dom.chips("chips", e.technologies)?)?;
        timeline.append_child(&item)?;
    }
    inner.append_child(&timeline)?;
    Ok(section)
}

pub fn services(dom: &Dom) -> Result<Element, JsValue> {
    let (section, inner) = dom.section(
        "services",
        "Services I Offer",
        Some("Comprehensive web development services to help your business grow online"),
    )?;

    let grid = dom.el("div", "grid two")?;
    for s in &SERVICES {
        let card = dom.el("div", "card service reveal")?;
        card.append_child(&dom.text("span", "glyph", theme::icon(s.icon))?)?;
        card.append_child(&dom.text("h3", "", s.title)?)?;
        card.append_child(&dom.text("p", "muted", s.description)?)?;
        card.append_child(&dom.list("ticks", s.features)?)?;
        let foot = dom.el("div", "service-foot")?;
        foot.append_child(&dom.text("strong", "", s.price)?)?;
        foot.append_child(&dom.text("span", "muted", &format!("⏱ {}", s.duration))?)?;
        card.append_child(&foot)?;
        grid.append_child(&card)?;
    }

    let quote = dom.link("btn primary reveal", "#contact", "Get a Custom Quote")?;
    quote.set_attribute("data-scroll", "contact")?;
    append(&inner, &[&grid, &quote])?;
    Ok(section)
}

pub fn achievements(dom: &Dom) -> Result<Element, JsValue> {
    let (section, inner) = dom.section(
        "achievements",
        "Achievements & Certifications",
        Some("Recognition and milestones that mark my journey in web development"),
    )?;

    let grid = dom.el("div", "grid four")?;
    for a in &ACHIEVEMENTS {
        let look = theme::achievement(a.category);
        let card = dom.el("div", "card achievement reveal")?;
        card.append_child(&dom.text("span", &format!("glyph grad-{}", look.accent), theme::icon(a.icon))?)?;
        card.append_child(&dom.text("span", "pill", look.label)?)?;
        card.append_child(&dom.text("h3", "", a.title)?)?;
        card.append_child(&dom.text("p", "muted", a.description)?)?;
        card.append_child(&dom.text("time", "muted", a.date)?)?;
        grid.append_child(&card)?;
    }
    inner.append_child(&grid)?;
    Ok(section)
}

pub fn blog(dom: &Dom) -> Result<Element, JsValue> {
    let (section, inner) = dom.section(
        "blog",
        "Latest Blog Posts",
        Some("Insights, tutorials, and thoughts on web development and technology"),
    )?;

    let grid = dom.el("div", "grid three")?;
    for post in &BLOG_POSTS {
        let card = dom.el("article", "card post reveal")?;
        card.append_child(&dom.img("cover", post.image, post.title)?)?;
        let meta = dom.el("div", "meta muted")?;
        meta.append_child(&dom.text("span", "pill", post.category)?)?;
        meta.append_child(&dom.text("time", "", post.date)?)?;
        meta.append_child(&dom.text("span", "", post.read_time)?)?;
        card.append_child(&meta)?;
        card.append_child(&dom.text("h3", "", post.title)?)?;
        card.append_child(&dom.text("p", "muted clamp-3", post.excerpt)?)?;
        card.append_child(&dom.chips("chips", post.tags)?)?;
        card.append_child(&dom.text("span", "read-more", "Read More →")?)?;
        grid.append_child(&card)?;
    }
    let all = dom.button("btn ghost reveal", "View All Posts")?;
    append(&inner, &[&grid, &all])?;
    Ok(section)
}

pub fn footer(dom: &Dom, config: &SiteConfig) -> Result<Element, JsValue> {
    let footer = dom.el("footer", "site-footer")?;
    let container = dom.el("div", "container")?;

    let columns = dom.el("div", "footer-grid")?;
    let about = dom.el("div", "")?;
    about.append_child(&dom.text("span", "brand", &config.owner.replace(' ', "."))?)?;
    about.append_child(&dom.text("p", "muted", &config.tagline)?)?;
    about.append_child(&dom.text("p", "muted", &format!("Based in {}.", config.location))?)?;

    let quick = dom.el("div", "")?;
    quick.append_child(&dom.text("h4", "", "Quick Links")?)?;
    let links = dom.el("nav", "footer-links")?;
    for (id, label) in NAV.iter().filter(|(id, _)| QUICK_LINKS.contains(id)) {
        links.append_child(&nav_link(dom, "nav-link", id, label)?)?;
    }
    quick.append_child(&links)?;

    let services = dom.el("div", "")?;
    services.append_child(&dom.text("h4", "", "Services")?)?;
    let list = dom.el("ul", "footer-services muted")?;
    for s in &SERVICES {
        list.append_child(&dom.text("li", "", s.title)?)?;
    }
    services.append_child(&list)?;
    append(&columns, &[&about, &quick, &services])?;

    let bottom = dom.el("div", "footer-inner")?;
    bottom.append_child(&dom.text(
        "p",
        "muted",
        &format!("© {} · Built with Rust and WebGL", config.owner),
    )?)?;
    let top = dom.button("btn ghost", "↑ Back to Top")?;
    top.set_attribute("data-scroll", "top")?;
    bottom.append_child(&top)?;

    append(&container, &[&columns, &bottom])?;
    footer.append_child(&container)?;
    Ok(footer)
}

pub fn floating_social(dom: &Dom, config: &SiteConfig) -> Result<Element, JsValue> {
    let bar = social_row(dom, "floating-social", config)?;
    let phone = dom.link("social", &config.phone_href(), theme::icon("Phone"))?;
    phone.set_attribute("aria-label", "Phone")?;
    bar.append_child(&phone)?;
    Ok(bar)
}
