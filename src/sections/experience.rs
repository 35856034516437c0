use crate::models::content::Experience;
use crate::render::html_escape;
use crate::sections::{section_heading, section_open, tech_badges};

pub fn render(items: &[Experience]) -> String {
    let mut html = section_open("experience", "experience");
    html.push_str(r#"<div class="container">"#);
    html.push_str(&section_heading("Career Path", "Work Experience"));
    html.push_str(r#"<ol class="timeline">"#);

    for exp in items {
        let mut bullets = String::new();
        for line in &exp.description {
            bullets.push_str(&format!("<li>{}</li>", html_escape(line)));
        }
        html.push_str(&format!(
            r#"<li class="timeline-item" data-key="{id}">
<div class="timeline-card">
<div class="timeline-head"><h3>{role}</h3><span class="period">{period}</span></div>
<p class="timeline-org">{company} &middot; {location}</p>
<ul class="bullets">{bullets}</ul>
{tech}
</div>
</li>"#,
            id = html_escape(&exp.id),
            role = html_escape(&exp.role),
            period = html_escape(&exp.period),
            company = html_escape(&exp.company),
            location = html_escape(&exp.location),
            bullets = bullets,
            tech = tech_badges(&exp.technologies),
        ));
    }

    html.push_str("</ol></div></section>");
    html
}
