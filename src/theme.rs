//! Closed lookup tables mapping content categories to their visual
//! treatment: label, glyph and accent gradient (CSS class suffix).

use crate::catalog::{AchievementCategory, ExperienceKind, SkillCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Treatment {
    pub label: &'static str,
    pub glyph: &'static str,
    /// Suffix of the `grad-*` class carrying the accent gradient.
    pub accent: &'static str,
}

static SKILL_TREATMENTS: [(SkillCategory, Treatment); 6] = [
    (SkillCategory::Frontend, Treatment { label: "Frontend", glyph: "🖥", accent: "blue" }),
    (SkillCategory::Backend, Treatment { label: "Backend", glyph: "⚙", accent: "green" }),
    (SkillCategory::Database, Treatment { label: "Database", glyph: "🗄", accent: "purple" }),
    (SkillCategory::Tools, Treatment { label: "Tools & Platforms", glyph: "🛠", accent: "orange" }),
    (SkillCategory::Design, Treatment { label: "Design", glyph: "🎨", accent: "pink" }),
    (SkillCategory::Mobile, Treatment { label: "Mobile", glyph: "📱", accent: "indigo" }),
];

static EXPERIENCE_TREATMENTS: [(ExperienceKind, Treatment); 3] = [
    (ExperienceKind::Work, Treatment { label: "Work", glyph: "💼", accent: "blue" }),
    (ExperienceKind::Education, Treatment { label: "Education", glyph: "🎓", accent: "green" }),
    (ExperienceKind::Freelance, Treatment { label: "Freelance", glyph: "👤", accent: "purple" }),
];

static ACHIEVEMENT_TREATMENTS: [(AchievementCategory, Treatment); 3] = [
    (AchievementCategory::Certification, Treatment { label: "Certification", glyph: "📜", accent: "blue" }),
    (AchievementCategory::Award, Treatment { label: "Award", glyph: "🏆", accent: "orange" }),
    (AchievementCategory::Milestone, Treatment { label: "Milestone", glyph: "🎯", accent: "green" }),
];

/// Icon names used by the catalog, rendered as text glyphs.
static ICONS: [(&str, &str); 14] = [
    ("Code", "</>"),
    ("Wordpress", "Ⓦ"),
    ("ShoppingCart", "🛒"),
    ("Smartphone", "📱"),
    ("Award", "🏅"),
    ("Trophy", "🏆"),
    ("Target", "🎯"),
    ("Palette", "🎨"),
    ("Rocket", "🚀"),
    ("Users", "👥"),
    ("Coffee", "☕"),
    ("Mail", "✉"),
    ("Phone", "☎"),
    ("MapPin", "📍"),
];

const FALLBACK_GLYPH: &str = "•";

fn lookup<K: PartialEq + Copy>(table: &[(K, Treatment)], key: K) -> Treatment {
    // Tables are exhaustive over their enums; see the tests below.
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, t)| *t)
        .unwrap_or(Treatment { label: "", glyph: FALLBACK_GLYPH, accent: "purple" })
}

pub fn skill(category: SkillCategory) -> Treatment {
    lookup(&SKILL_TREATMENTS, category)
}

pub fn experience(kind: ExperienceKind) -> Treatment {
    lookup(&EXPERIENCE_TREATMENTS, kind)
}

pub fn achievement(category: AchievementCategory) -> Treatment {
    lookup(&ACHIEVEMENT_TREATMENTS, category)
}

pub fn icon(name: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(n, _)| *n == name)
        .map_or(FALLBACK_GLYPH, |(_, g)| g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_every_variant() {
        for c in SkillCategory::ALL {
            assert!(!skill(c).label.is_empty());
        }
        for k in [ExperienceKind::Work, ExperienceKind::Education, ExperienceKind::Freelance] {
            assert!(!experience(k).label.is_empty());
        }
        for a in [
            AchievementCategory::Certification,
            AchievementCategory::Award,
            AchievementCategory::Milestone,
        ] {
            assert!(!achievement(a).label.is_empty());
        }
    }

    #[test]
    fn catalog_icons_resolve() {
        use crate::catalog::{ACHIEVEMENTS, HEADLINES, HIGHLIGHTS, SERVICES};
        let names = SERVICES
            .iter()
            .map(|s| s.icon)
            .chain(ACHIEVEMENTS.iter().map(|a| a.icon))
            .chain(HIGHLIGHTS.iter().map(|h| h.icon))
            .chain(HEADLINES.iter().map(|h| h.icon));
        for name in names {
            assert_ne!(icon(name), FALLBACK_GLYPH, "no glyph for {name}");
        }
        assert_eq!(icon("Nope"), FALLBACK_GLYPH);
    }
}
