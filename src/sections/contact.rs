use std::time::Duration;

use crate::models::content::{ContactContent, PersonalInfo};
use crate::render::{html_escape, PageContext};
use crate::sections::{icons, section_heading, section_open};

/// How long the "copied" confirmation stays up.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

pub fn render(contact: &ContactContent, info: &PersonalInfo, ctx: &PageContext) -> String {
    let email = html_escape(&info.email);

    let mut methods = format!(
        r#"<div class="contact-method">
<div class="card-icon">{mail}</div>
<div><p class="contact-label">Email</p><a href="mailto:{email}">{email}</a></div>
<button type="button" class="icon-btn copy-btn" data-copy-email="{email}" data-copy-feedback-ms="{feedback}" title="Copy to clipboard" aria-label="Copy email">{copy}<span class="copy-done" hidden>Copied!</span></button>
</div>
<div class="contact-method">
<div class="card-icon">{pin}</div>
<div><p class="contact-label">Location</p><span>{location}</span></div>
</div>"#,
        mail = icons::mail(),
        email = email,
        feedback = COPY_FEEDBACK.as_millis(),
        copy = icons::copy(),
        pin = icons::map_pin(),
        location = html_escape(&info.location),
    );

    if !info.github.is_empty() {
        methods.push_str(&format!(
            r#"<a class="contact-method" href="{}" target="_blank" rel="noopener"><div class="card-icon">{}</div><div><p class="contact-label">GitHub</p><span>{}</span></div></a>"#,
            html_escape(&info.github),
            icons::GITHUB,
            html_escape(&info.github_username)
        ));
    }
    if !info.linkedin.is_empty() {
        methods.push_str(&format!(
            r#"<a class="contact-method" href="{}" target="_blank" rel="noopener"><div class="card-icon">{}</div><div><p class="contact-label">LinkedIn</p><span>{}</span></div></a>"#,
            html_escape(&info.linkedin),
            icons::LINKEDIN,
            html_escape(&info.linkedin_name)
        ));
    }

    let resume = if info.resume_url.is_empty() {
        String::new()
    } else {
        format!(
            r#"<a class="btn btn-outline" href="{}" target="_blank" rel="noopener">Download Resume</a>"#,
            html_escape(&ctx.asset(&info.resume_url))
        )
    };

    format!(
        r#"{open}
<div class="container">
{heading}
<p class="section-description">{description}</p>
<div class="contact-grid">
<div class="contact-methods">{methods}</div>
<div class="cta-card">
<h3>{cta_title}</h3>
<p>{cta_description}</p>
<a class="btn btn-primary" href="mailto:{email}">{cta_button}</a>
{resume}
</div>
</div>
</div>
</section>"#,
        open = section_open("contact", "contact"),
        heading = section_heading(&contact.section_subtitle, &contact.section_title),
        description = html_escape(&contact.section_description),
        methods = methods,
        cta_title = html_escape(&contact.cta_title),
        cta_description = html_escape(&contact.cta_description),
        email = email,
        cta_button = html_escape(&contact.cta_button_text),
        resume = resume,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::models::content::PortfolioContent;
    use crate::theme::Theme;
    use std::collections::HashMap;

    fn rendered(email: &str) -> String {
        let config = SiteConfig::from_sources(None, &HashMap::new()).unwrap();
        let ctx = PageContext { config: &config, theme: Theme::Dark, kiosk: false, year: 2026 };
        let mut content = PortfolioContent::default();
        content.personal_info.email = email.into();
        render(&content.contact_content, &content.personal_info, &ctx)
    }

    #[test]
    fn copy_control_carries_exact_email_and_two_second_feedback() {
        let html = rendered("alex@example.com");
        assert!(html.contains(r#"data-copy-email="alex@example.com""#));
        assert!(html.contains(r#"data-copy-feedback-ms="2000""#));
        assert!(html.contains(r#"<span class="copy-done" hidden>"#));
    }

    #[test]
    fn copy_email_is_escaped() {
        let html = rendered(r#"a"b@example.com"#);
        assert!(html.contains(r#"data-copy-email="a&quot;b@example.com""#));
    }
}
