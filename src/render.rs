use crate::config::SiteConfig;
use crate::context::Portfolio;
use crate::kiosk;
use crate::models::content::NavItem;
use crate::models::section::Section;
use crate::sections::{
    about, contact, education, experience, footer, hero, nav, projects, skills,
};
use crate::source::{self, with_base_path, ExecContext};
use crate::theme::{self, Theme};
use crate::viewport;

/// Per-request rendering inputs that are not content.
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub theme: Theme,
    pub kiosk: bool,
    pub year: i32,
}

impl<'a> PageContext<'a> {
    pub fn base_path(&self) -> &str {
        self.config.base_path()
    }

    pub fn asset(&self, path: &str) -> String {
        with_base_path(self.config.base_path(), path)
    }

    pub fn section_enabled(&self, section: Section) -> bool {
        section
            .feature()
            .map(|f| self.config.is_feature_enabled(f))
            .unwrap_or(true)
    }

    pub fn kiosk_enabled(&self) -> bool {
        self.config.is_feature_enabled("kiosk")
    }

    pub fn theme_toggle_enabled(&self) -> bool {
        self.config.is_feature_enabled("theme-toggle")
    }
}

/// Nav items whose section is rendered on this page.
pub fn visible_nav_items(items: &[NavItem], ctx: &PageContext) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| {
            Section::from_anchor(&item.id)
                .map(|s| ctx.section_enabled(s))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Render the full single-page document.
pub fn render_page(portfolio: &Portfolio, ctx: &PageContext, filter: projects::ProjectFilter) -> String {
    let info = portfolio.personal_info();
    let nav_items = visible_nav_items(portfolio.nav_items(), ctx);
    let kiosk_on = ctx.kiosk && ctx.kiosk_enabled();

    let mut main = String::new();
    main.push_str(&hero::render(info, portfolio.is_loading(), ctx));
    if ctx.section_enabled(Section::About) {
        main.push_str(&about::render(portfolio.about_content(), info, ctx));
    }
    if ctx.section_enabled(Section::Experience) {
        main.push_str(&experience::render(portfolio.experiences()));
    }
    if ctx.section_enabled(Section::Education) {
        main.push_str(&education::render(portfolio.education()));
    }
    if ctx.section_enabled(Section::Projects) {
        main.push_str(&projects::render(portfolio.projects(), filter, ctx));
    }
    if ctx.section_enabled(Section::Skills) {
        main.push_str(&skills::render(
            portfolio.skills_content(),
            portfolio.skill_categories(),
        ));
    }
    if ctx.section_enabled(Section::Contact) {
        main.push_str(&contact::render(portfolio.contact_content(), info, ctx));
    }

    let kiosk_indicator = if kiosk_on {
        r#"<div class="kiosk-indicator">Kiosk Mode Active &bull; Press ESC to exit</div>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="{theme}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{head}
</head>
<body class="{body_class}" data-base-path="{base}" data-theme-key="{theme_key}" data-loading="{loading}" data-active-offset="{active_offset}" data-scrolled-offset="{scrolled_offset}" data-kiosk-enabled="{kiosk_enabled}" data-kiosk-tick="{tick}" data-kiosk-step="{step}" data-kiosk-pause="{pause}" data-kiosk-return="{ret}" data-kiosk-slack="{slack}">
{kiosk_indicator}
{nav}
<main>
{main}
</main>
{footer}
<script src="{js}" defer></script>
</body>
</html>"#,
        theme = ctx.theme.as_str(),
        head = render_head(portfolio, ctx),
        body_class = if kiosk_on { "kiosk-mode" } else { "" },
        base = html_escape(ctx.base_path()),
        theme_key = html_escape(&ctx.config.theme.storage_key),
        loading = portfolio.is_loading(),
        active_offset = viewport::ACTIVE_OFFSET,
        scrolled_offset = viewport::SCROLLED_OFFSET,
        kiosk_enabled = ctx.kiosk_enabled(),
        tick = kiosk::TICK_MS,
        step = kiosk::STEP,
        pause = kiosk::PAUSE_MS,
        ret = kiosk::RETURN_DELAY_MS,
        slack = kiosk::BOTTOM_SLACK,
        kiosk_indicator = kiosk_indicator,
        nav = nav::render(&nav_items, info, ctx),
        main = main,
        footer = footer::render(portfolio.footer_content(), info, &nav_items, ctx),
        js = ctx.asset("/static/js/portfolio.js"),
    )
}

fn render_head(portfolio: &Portfolio, ctx: &PageContext) -> String {
    let seo = portfolio.seo();
    let mut head = format!(
        r#"<title>{title}</title>
<meta name="description" content="{desc}">"#,
        title = html_escape(&seo.title),
        desc = html_escape(&seo.description),
    );
    if !seo.keywords.is_empty() {
        head.push_str(&format!(
            r#"
<meta name="keywords" content="{}">"#,
            html_escape(&seo.keywords.join(", "))
        ));
    }
    if !seo.url.is_empty() {
        head.push_str(&format!(
            r#"
<link rel="canonical" href="{}">
<meta property="og:url" content="{}">"#,
            html_escape(&seo.url),
            html_escape(&seo.url)
        ));
    }
    head.push_str(&format!(
        r#"
<meta property="og:type" content="website">
<meta property="og:title" content="{}">
<meta property="og:locale" content="{}">"#,
        html_escape(&seo.title),
        html_escape(&seo.locale)
    ));
    if let Some(doc) = source::resolve(&ctx.config.source, ExecContext::Browser) {
        head.push_str(&format!(
            r#"
<link rel="alternate" type="application/json" href="{}">"#,
            html_escape(&doc)
        ));
    }
    head.push_str(&format!(
        r#"
<link rel="stylesheet" href="{}">
{}"#,
        ctx.asset("/static/css/portfolio.css"),
        theme::init_script(&ctx.config.theme.storage_key)
    ));
    head
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Minimal standalone page for the error catchers.
pub fn render_status_page(code: u16, message: &str, home: &str) -> String {
    format!(
        "<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>{}</h1><p>{}</p><a href='{}'>← Home</a></body></html>",
        code,
        html_escape(message),
        html_escape(home)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn escapes_markup() {
        assert_eq!(html_escape(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }

    fn page(config: &SiteConfig, kiosk: bool) -> String {
        let portfolio = Portfolio(crate::context::Snapshot {
            content: std::sync::Arc::new(crate::models::content::PortfolioContent::default()),
            phase: crate::context::Phase::Ready,
            is_loading: false,
            error: None,
        });
        let ctx = PageContext { config, theme: Theme::Dark, kiosk, year: 2026 };
        render_page(&portfolio, &ctx, projects::ProjectFilter::All)
    }

    #[test]
    fn body_exposes_script_timings() {
        let config = SiteConfig::from_sources(None, &HashMap::new()).unwrap();
        let html = page(&config, false);
        assert!(html.contains(r#"data-active-offset="150""#));
        assert!(html.contains(r#"data-scrolled-offset="50""#));
        assert!(html.contains(r#"data-kiosk-tick="50""#));
        assert!(html.contains(r#"data-kiosk-step="1""#));
        assert!(html.contains(r#"data-kiosk-pause="5000""#));
        assert!(html.contains(r#"data-kiosk-return="3000""#));
        assert!(html.contains(r#"data-kiosk-slack="10""#));
        assert!(html.contains(r#"data-reveal="once""#));
        assert!(!html.contains("kiosk-indicator"));
    }

    #[test]
    fn kiosk_query_needs_feature_enabled() {
        let config = SiteConfig::from_sources(None, &HashMap::new()).unwrap();
        let html = page(&config, true);
        assert!(html.contains(r#"<body class="kiosk-mode""#));
        assert!(html.contains("kiosk-indicator"));

        let env: HashMap<String, String> =
            [("FOLIO_ENABLE_KIOSK".to_string(), "false".to_string())].into();
        let config = SiteConfig::from_sources(None, &env).unwrap();
        let html = page(&config, true);
        assert!(!html.contains("kiosk-indicator"));
        assert!(html.contains(r#"data-kiosk-enabled="false""#));
    }

    #[test]
    fn disabled_sections_drop_their_nav_items() {
        let env: HashMap<String, String> =
            [("FOLIO_ENABLE_ABOUT".to_string(), "false".to_string())].into();
        let config = SiteConfig::from_sources(None, &env).unwrap();
        let ctx = PageContext { config: &config, theme: Theme::Dark, kiosk: false, year: 2026 };
        let items = crate::models::content::PortfolioContent::default().nav_items;
        let ids: Vec<String> = visible_nav_items(&items, &ctx).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["home", "contact"]);
    }
}
