use crate::models::content::{SkillCategory, SkillsContent};
use crate::render::html_escape;
use crate::sections::{icons, section_heading, section_open};

pub fn render(content: &SkillsContent, categories: &[SkillCategory]) -> String {
    let mut html = section_open("skills", "skills");
    html.push_str(r#"<div class="container">"#);
    html.push_str(&section_heading(&content.section_subtitle, &content.section_title));
    html.push_str(r#"<div class="card-grid">"#);

    for cat in categories {
        let mut skills = String::new();
        for skill in &cat.skills {
            skills.push_str(&format!(r#"<li class="skill">{}</li>"#, html_escape(skill)));
        }
        html.push_str(&format!(
            r#"<article class="card skill-card skill-{id}" data-key="{id}">
<div class="card-icon">{icon}</div>
<h3>{name}</h3>
<ul class="skill-list">{skills}</ul>
</article>"#,
            id = html_escape(&cat.id),
            icon = icons::skill_category(&cat.id),
            name = html_escape(&cat.name),
            skills = skills,
        ));
    }
    html.push_str("</div>");

    if !content.currently_learning.is_empty() {
        let mut learning = String::new();
        for tech in &content.currently_learning {
            learning.push_str(&format!(r#"<li class="tech-badge">{}</li>"#, html_escape(tech)));
        }
        html.push_str(&format!(
            r#"<div class="learning-banner"><p>{}</p><ul class="tech-list">{}</ul></div>"#,
            html_escape(&content.learning_title),
            learning
        ));
    }

    html.push_str("</div></section>");
    html
}
