//! Page sections. Each renderer is a pure function of the content slice
//! it displays plus the page context, and keys repeated units by id.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod nav;
pub mod projects;
pub mod skeleton;
pub mod skills;

use crate::render::html_escape;

/// Two-part brand mark: the first name's initial plus the rest of the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandMark {
    pub initial: String,
    pub rest: String,
}

impl BrandMark {
    pub fn from_name(name: &str) -> Self {
        let mut parts = name.split_whitespace();
        let initial = parts
            .next()
            .and_then(|first| first.chars().next())
            .map(String::from)
            .unwrap_or_default();
        let rest = parts.collect::<Vec<_>>().join(" ");
        BrandMark { initial, rest }
    }

    pub fn html(&self) -> String {
        format!(
            r#"<span class="brand-initial">{}</span><span class="brand-dot">.</span><span class="brand-rest">{}</span>"#,
            html_escape(&self.initial),
            html_escape(&self.rest)
        )
    }
}

/// Opening tag shared by every anchor section.
pub(crate) fn section_open(anchor: &str, extra_class: &str) -> String {
    format!(
        r#"<section id="{}" class="section {}" data-reveal="once">"#,
        anchor, extra_class
    )
}

pub(crate) fn section_heading(subtitle: &str, title: &str) -> String {
    format!(
        r#"<header class="section-heading"><p class="section-subtitle">{}</p><h2 class="section-title">{}</h2></header>"#,
        html_escape(subtitle),
        html_escape(title)
    )
}

pub(crate) fn tech_badges(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<ul class="tech-list">"#);
    for t in items {
        html.push_str(&format!(r#"<li class="tech-badge">{}</li>"#, html_escape(t)));
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_mark_from_full_name() {
        let m = BrandMark::from_name("Grace Hopper");
        assert_eq!(m.initial, "G");
        assert_eq!(m.rest, "Hopper");
    }

    #[test]
    fn brand_mark_joins_remaining_tokens() {
        let m = BrandMark::from_name("  Ada  King Lovelace ");
        assert_eq!(m.initial, "A");
        assert_eq!(m.rest, "King Lovelace");
    }

    #[test]
    fn brand_mark_single_and_empty_name() {
        assert_eq!(
            BrandMark::from_name("Prince"),
            BrandMark { initial: "P".into(), rest: String::new() }
        );
        assert_eq!(
            BrandMark::from_name(""),
            BrandMark { initial: String::new(), rest: String::new() }
        );
    }

    #[test]
    fn badges_are_escaped() {
        assert_eq!(
            tech_badges(&["C<>".to_string()]),
            r#"<ul class="tech-list"><li class="tech-badge">C&lt;&gt;</li></ul>"#
        );
    }
}
