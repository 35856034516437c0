use crate::models::content::{FooterContent, NavItem, PersonalInfo};
use crate::render::{html_escape, PageContext};
use crate::sections::{icons, BrandMark};

pub fn render(
    footer: &FooterContent,
    info: &PersonalInfo,
    nav_items: &[NavItem],
    ctx: &PageContext,
) -> String {
    let brand = BrandMark::from_name(&info.name);

    let mut links = String::new();
    for item in nav_items {
        links.push_str(&format!(
            r#"<li data-key="{}"><a href="{}">{}</a></li>"#,
            html_escape(&item.id),
            html_escape(&item.href),
            html_escape(&item.label)
        ));
    }

    let mut social = String::new();
    if !info.github.is_empty() {
        social.push_str(&format!(
            r#"<a class="social-link" href="{}" target="_blank" rel="noopener" aria-label="GitHub">{}</a>"#,
            html_escape(&info.github),
            icons::GITHUB
        ));
    }
    if !info.linkedin.is_empty() {
        social.push_str(&format!(
            r#"<a class="social-link" href="{}" target="_blank" rel="noopener" aria-label="LinkedIn">{}</a>"#,
            html_escape(&info.linkedin),
            icons::LINKEDIN
        ));
    }

    format!(
        r##"<footer class="site-footer">
<div class="container footer-grid">
<div><a class="brand" href="#home">{brand}</a><p class="tagline">{tagline}</p></div>
<nav aria-label="Quick links"><h4>Quick Links</h4><ul class="footer-links">{links}</ul></nav>
<div><h4>Connect</h4><div class="footer-social">{social}</div></div>
</div>
<div class="container footer-bottom">
<p>&copy; {year} {name}. All rights reserved.</p>
<p class="built-with">{built_with}</p>
<a class="back-to-top" href="#home" aria-label="Back to top">&uarr;</a>
</div>
</footer>"##,
        brand = brand.html(),
        tagline = html_escape(&footer.tagline),
        links = links,
        social = social,
        year = ctx.year,
        name = html_escape(&info.name),
        built_with = html_escape(&footer.built_with),
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
    fn footer_brand_and_year() {
        let config = SiteConfig::from_sources(None, &HashMap::new()).unwrap();
        let ctx = PageContext { config: &config, theme: Theme::Light, kiosk: false, year: 2031 };
        let mut content = PortfolioContent::default();
        content.personal_info.name = "Grace Hopper".into();
        let html = render(
            &content.footer_content,
            &content.personal_info,
            &content.nav_items,
            &ctx,
        );
        assert!(html.contains(r#"<span class="brand-initial">G</span>"#));
        assert!(html.contains(r#"<span class="brand-rest">Hopper</span>"#));
        assert!(html.contains("&copy; 2031 Grace Hopper"));
        assert_eq!(html.matches("<li data-key=").count(), 3);
    }
}
