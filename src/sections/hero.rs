use crate::models::content::PersonalInfo;
use crate::render::{html_escape, PageContext};
use crate::sections::{icons, skeleton};

/// First token and the rest of the display name, for two-tone styling.
pub fn split_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or("").to_string();
    let rest = parts.collect::<Vec<_>>().join(" ");
    (first, rest)
}

pub fn render(info: &PersonalInfo, loading: bool, ctx: &PageContext) -> String {
    if loading {
        return skeleton::hero();
    }

    let (first, rest) = split_name(&info.name);

    let badge = if info.available {
        format!(
            r#"<div class="availability"><span class="availability-dot"></span>{}</div>"#,
            html_escape(&info.available_text)
        )
    } else {
        String::new()
    };

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
    social.push_str(&format!(
        r#"<a class="social-link" href="mailto:{}" aria-label="Email">{}</a>"#,
        html_escape(&info.email),
        icons::mail()
    ));

    let projects_cta = if ctx.section_enabled(crate::models::section::Section::Projects) {
        r##"<a class="btn btn-primary" href="#projects">View My Work</a>"##
    } else {
        ""
    };
    let contact_cta = if ctx.section_enabled(crate::models::section::Section::Contact) {
        r##"<a class="btn btn-outline" href="#contact">Get In Touch</a>"##
    } else {
        ""
    };

    format!(
        r#"<section id="home" class="section hero">
<div class="container hero-inner">
{badge}
<p class="hero-eyebrow">Hello, I'm</p>
<h1 class="hero-name"><span class="name-first">{first}</span> <span class="name-rest">{rest}</span></h1>
<p class="hero-title">{title}</p>
<p class="hero-bio">{bio}</p>
<div class="hero-cta">{projects_cta}{contact_cta}</div>
<div class="hero-social">{social}</div>
</div>
</section>"#,
        badge = badge,
        first = html_escape(&first),
        rest = html_escape(&rest),
        title = html_escape(&info.title),
        bio = html_escape(&info.bio),
        projects_cta = projects_cta,
        contact_cta = contact_cta,
        social = social,
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
    fn name_split_keeps_remaining_tokens() {
        assert_eq!(split_name("Grace Hopper"), ("Grace".into(), "Hopper".into()));
        assert_eq!(
            split_name("Mary Jane Watson"),
            ("Mary".into(), "Jane Watson".into())
        );
        assert_eq!(split_name("Cher"), ("Cher".into(), String::new()));
    }

    #[test]
    fn loading_renders_skeleton_with_same_anchor() {
        let config = SiteConfig::from_sources(None, &HashMap::new()).unwrap();
        let ctx = PageContext { config: &config, theme: Theme::Dark, kiosk: false, year: 2026 };
        let info = PortfolioContent::default().personal_info;

        let loading = render(&info, true, &ctx);
        assert!(loading.contains(r#"id="home""#));
        assert!(loading.contains("hero-loading"));
        assert!(!loading.contains("Your"));

        let ready = render(&info, false, &ctx);
        assert!(ready.contains(r#"<span class="name-first">Your</span>"#));
        assert!(ready.contains(r#"<span class="name-rest">Name</span>"#));
        assert!(ready.contains("Available for opportunities"));
    }
}
