use crate::models::content::{ProjectCategory, StatIcon};

const SVG_OPEN: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#;

pub const GITHUB: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/></svg>"#;

pub const LINKEDIN: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/></svg>"#;

const BRIEFCASE: &str = r#"<rect x="2" y="7" width="20" height="14" rx="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#;
const CODE: &str = r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#;
const GRADUATION: &str = r#"<path d="M22 10 12 5 2 10l10 5 10-5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#;
const GAMEPAD: &str = r#"<line x1="6" y1="12" x2="10" y2="12"/><line x1="8" y1="10" x2="8" y2="14"/><rect x="2" y="6" width="20" height="12" rx="2"/><circle cx="15" cy="13" r="1"/><circle cx="18" cy="11" r="1"/>"#;
const WRENCH: &str = r#"<path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/>"#;
const CPU: &str = r#"<rect x="4" y="4" width="16" height="16" rx="2"/><rect x="9" y="9" width="6" height="6"/><path d="M9 1v3M15 1v3M9 20v3M15 20v3M20 9h3M20 14h3M1 9h3M1 14h3"/>"#;
const LAYOUT: &str = r#"<rect x="3" y="3" width="18" height="18" rx="2"/><line x1="3" y1="9" x2="21" y2="9"/><line x1="9" y1="21" x2="9" y2="9"/>"#;
const SERVER: &str = r#"<rect x="2" y="2" width="20" height="8" rx="2"/><rect x="2" y="14" width="20" height="8" rx="2"/><line x1="6" y1="6" x2="6.01" y2="6"/><line x1="6" y1="18" x2="6.01" y2="18"/>"#;
const MAIL: &str = r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 5L2 7"/>"#;
const MAP_PIN: &str = r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"/><circle cx="12" cy="10" r="3"/>"#;
const COPY: &str = r#"<rect x="9" y="9" width="13" height="13" rx="2"/><path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/>"#;
const EXTERNAL: &str = r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/><polyline points="15 3 21 3 21 9"/><line x1="10" y1="14" x2="21" y2="3"/>"#;
const MONITOR: &str = r#"<rect x="2" y="3" width="20" height="14" rx="2"/><line x1="8" y1="21" x2="16" y2="21"/><line x1="12" y1="17" x2="12" y2="21"/>"#;
const SUN_MOON: &str = r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2"/>"#;

fn wrap(body: &str) -> String {
    format!("{}{}</svg>", SVG_OPEN, body)
}

pub fn stat(icon: StatIcon) -> String {
    wrap(match icon {
        StatIcon::Briefcase => BRIEFCASE,
        StatIcon::Code => CODE,
        StatIcon::Graduation => GRADUATION,
    })
}

pub fn project_category(category: ProjectCategory) -> String {
    wrap(match category {
        ProjectCategory::Web => CODE,
        ProjectCategory::Game => GAMEPAD,
        ProjectCategory::Tool => WRENCH,
        ProjectCategory::Systems => CPU,
    })
}

/// Skill categories are free-form ids; the well-known ones get their own glyph.
pub fn skill_category(id: &str) -> String {
    wrap(match id {
        "languages" => CODE,
        "frontend" => LAYOUT,
        "backend" => SERVER,
        "tools" => WRENCH,
        _ => CPU,
    })
}

pub fn mail() -> String {
    wrap(MAIL)
}

pub fn map_pin() -> String {
    wrap(MAP_PIN)
}

pub fn copy() -> String {
    wrap(COPY)
}

pub fn external() -> String {
    wrap(EXTERNAL)
}

pub fn monitor() -> String {
    wrap(MONITOR)
}

pub fn theme_toggle() -> String {
    wrap(SUN_MOON)
}
