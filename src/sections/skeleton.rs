//! Loading placeholders with the same outline as the real sections.

pub fn block(class: &str) -> String {
    format!(r#"<div class="skeleton {}" aria-hidden="true"></div>"#, class)
}

pub fn hero() -> String {
    format!(
        r#"<section id="home" class="section hero hero-loading" aria-busy="true">
<div class="container hero-inner">
{badge}
{eyebrow}
<div class="hero-name">{first}{last}</div>
{title}
<div class="hero-bio">{bio1}{bio2}</div>
<div class="hero-cta">{cta1}{cta2}</div>
<div class="hero-social">{s1}{s2}{s3}</div>
</div>
</section>"#,
        badge = block("skeleton-badge"),
        eyebrow = block("skeleton-line skeleton-short"),
        first = block("skeleton-heading"),
        last = block("skeleton-heading"),
        title = block("skeleton-line skeleton-medium"),
        bio1 = block("skeleton-line"),
        bio2 = block("skeleton-line skeleton-medium"),
        cta1 = block("skeleton-button"),
        cta2 = block("skeleton-button"),
        s1 = block("skeleton-icon"),
        s2 = block("skeleton-icon"),
        s3 = block("skeleton-icon"),
    )
}
