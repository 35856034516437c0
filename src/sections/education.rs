use crate::models::content::Education;
use crate::render::html_escape;
use crate::sections::{icons, section_heading, section_open};

pub fn render(items: &[Education]) -> String {
    let mut html = section_open("education", "education");
    html.push_str(r#"<div class="container">"#);
    html.push_str(&section_heading("Academic Background", "Education"));
    html.push_str(r#"<div class="card-grid">"#);

    for edu in items {
        let mut details = String::new();
        for d in &edu.details {
            details.push_str(&format!("<li>{}</li>", html_escape(d)));
        }
        html.push_str(&format!(
            r#"<article class="card education-card" data-key="{id}">
<div class="card-icon">{icon}</div>
<h3>{degree}</h3>
<p class="card-org">{school}</p>
<p class="card-meta">{location} &middot; {period}</p>
<ul class="bullets">{details}</ul>
</article>"#,
            id = html_escape(&edu.id),
            icon = icons::stat(crate::models::content::StatIcon::Graduation),
            degree = html_escape(&edu.degree),
            school = html_escape(&edu.school),
            location = html_escape(&edu.location),
            period = html_escape(&edu.period),
            details = details,
        ));
    }

    html.push_str("</div></div></section>");
    html
}
