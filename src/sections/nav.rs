use crate::models::content::{NavItem, PersonalInfo};
use crate::render::{html_escape, PageContext};
use crate::sections::{icons, BrandMark};

/// Fixed header. The first item starts active; the browser script keeps
/// `active` in sync with the scroll position.
pub fn render(items: &[NavItem], info: &PersonalInfo, ctx: &PageContext) -> String {
    let brand = BrandMark::from_name(&info.name);

    let mut links = String::new();
    for (i, item) in items.iter().enumerate() {
        links.push_str(&format!(
            r#"<a class="nav-link{active}" href="{href}" data-section="{id}">{label}</a>"#,
            active = if i == 0 { " active" } else { "" },
            href = html_escape(&item.href),
            id = html_escape(&item.id),
            label = html_escape(&item.label),
        ));
    }

    let mut actions = String::new();
    if ctx.theme_toggle_enabled() {
        actions.push_str(&format!(
            r#"<button type="button" class="icon-btn" data-theme-toggle title="Toggle theme" aria-label="Toggle theme">{}</button>"#,
            icons::theme_toggle()
        ));
    }
    if ctx.kiosk_enabled() {
        let (title, pressed) = if ctx.kiosk {
            ("Exit Kiosk Mode", "true")
        } else {
            ("Enter Kiosk Mode (Ctrl+K)", "false")
        };
        actions.push_str(&format!(
            r#"<button type="button" class="icon-btn" data-kiosk-toggle aria-pressed="{}" title="{}" aria-label="{}">{}</button>"#,
            pressed,
            title,
            title,
            icons::monitor()
        ));
    }
    if !info.resume_url.is_empty() {
        actions.push_str(&format!(
            r#"<a class="btn btn-small" href="{}" target="_blank" rel="noopener">Resume</a>"#,
            html_escape(&ctx.asset(&info.resume_url))
        ));
    }

    format!(
        r##"<header class="site-header" data-nav>
<nav class="nav container">
<a class="brand" href="#home">{brand}</a>
<div class="nav-links">{links}</div>
<div class="nav-actions">{actions}</div>
<button type="button" class="icon-btn nav-menu-toggle" data-menu-toggle aria-label="Toggle menu" aria-expanded="false">&#9776;</button>
</nav>
<div class="nav-mobile" data-menu hidden>{links}</div>
</header>"##,
        brand = brand.html(),
        links = links,
        actions = actions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::models::content::PortfolioContent;
    use crate::theme::Theme;
    use std::collections::HashMap;

    #[test]
    fn one_link_per_item_in_order() {
        let config = SiteConfig::from_sources(None, &HashMap::new()).unwrap();
        let ctx = PageContext { config: &config, theme: Theme::Dark, kiosk: false, year: 2026 };
        let content = PortfolioContent::default();
        let html = render(&content.nav_items, &content.personal_info, &ctx);

        let home = html.find(r#"data-section="home""#).unwrap();
        let about = html.find(r#"data-section="about""#).unwrap();
        let contact = html.find(r#"data-section="contact""#).unwrap();
        assert!(home < about && about < contact);
        assert!(html.contains(r##"class="nav-link active" href="#home""##));
        assert!(html.contains(r#"href="/resume.pdf""#));
        assert!(html.contains("data-kiosk-toggle"));
    }
}
