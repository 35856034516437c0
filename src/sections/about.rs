use crate::models::content::{AboutContent, PersonalInfo};
use crate::render::{html_escape, PageContext};
use crate::sections::{icons, section_heading, section_open};

pub fn render(about: &AboutContent, info: &PersonalInfo, ctx: &PageContext) -> String {
    let portrait = if info.profile_image.is_empty() {
        format!(
            r#"<div class="portrait portrait-initials">{}</div>"#,
            html_escape(&info.initials)
        )
    } else {
        format!(
            r#"<div class="portrait"><img src="{}" alt="{}" loading="lazy"></div>"#,
            html_escape(&ctx.asset(&info.profile_image)),
            html_escape(&info.name)
        )
    };

    let mut paragraphs = String::new();
    for p in &about.paragraphs {
        paragraphs.push_str(&format!("<p>{}</p>", html_escape(p)));
    }

    let mut stats = String::new();
    for stat in &about.stats {
        stats.push_str(&format!(
            r#"<div class="stat">{}<div class="stat-value">{}</div><div class="stat-label">{}</div></div>"#,
            icons::stat(stat.icon),
            html_escape(&stat.value),
            html_escape(&stat.label)
        ));
    }

    format!(
        r#"{open}
<div class="container">
{heading}
<div class="about-grid">
{portrait}
<div class="about-body">{paragraphs}<div class="stats">{stats}</div></div>
</div>
</div>
</section>"#,
        open = section_open("about", "about"),
        heading = section_heading(&about.section_subtitle, &about.section_title),
        portrait = portrait,
        paragraphs = paragraphs,
        stats = stats,
    )
}
