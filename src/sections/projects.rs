use crate::models::content::{Project, ProjectCategory};
use crate::render::{html_escape, PageContext};
use crate::sections::{icons, section_heading, section_open, tech_badges};

/// Category filter for the projects grid. Only affects this section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    /// Filters offered in the filter bar, in display order.
    pub const OPTIONS: [(ProjectFilter, &'static str); 4] = [
        (ProjectFilter::All, "All Projects"),
        (ProjectFilter::Only(ProjectCategory::Web), "Web"),
        (ProjectFilter::Only(ProjectCategory::Game), "Games"),
        (ProjectFilter::Only(ProjectCategory::Tool), "Tools"),
    ];

    /// Unknown or missing values select everything.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("web") => Self::Only(ProjectCategory::Web),
            Some("game") => Self::Only(ProjectCategory::Game),
            Some("tool") => Self::Only(ProjectCategory::Tool),
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(c) => c.as_str(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => project.category == *c,
        }
    }
}

/// Projects passing the filter, in their original order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

pub fn render(projects: &[Project], filter: ProjectFilter, ctx: &PageContext) -> String {
    let mut html = section_open("projects", "projects");
    html.push_str(r#"<div class="container">"#);
    html.push_str(&section_heading("Portfolio", "Featured Projects"));

    html.push_str(r#"<div class="filter-bar" role="tablist">"#);
    for (option, label) in ProjectFilter::OPTIONS {
        let selected = option == filter;
        html.push_str(&format!(
            r##"<a class="filter-btn{}" role="tab" aria-selected="{}" href="?category={}#projects" data-filter="{}">{}</a>"##,
            if selected { " active" } else { "" },
            selected,
            option.as_str(),
            option.as_str(),
            label
        ));
    }
    html.push_str("</div>");

    let visible = filter_projects(projects, filter);
    if visible.is_empty() {
        html.push_str(r#"<p class="empty-state">No projects in this category yet.</p>"#);
    } else {
        html.push_str(r#"<div class="project-grid">"#);
        for project in visible {
            html.push_str(&render_card(project, ctx));
        }
        html.push_str("</div>");
    }

    html.push_str("</div></section>");
    html
}

fn render_card(project: &Project, ctx: &PageContext) -> String {
    let media = match project.image.as_deref().filter(|s| !s.is_empty()) {
        Some(img) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            html_escape(&ctx.asset(img)),
            html_escape(&project.title)
        ),
        None => format!(
            r#"<div class="project-placeholder">{}</div>"#,
            icons::project_category(project.category)
        ),
    };

    let mut links = String::new();
    if let Some(gh) = project.github.as_deref().filter(|s| !s.is_empty()) {
        links.push_str(&format!(
            r#"<a class="project-link" href="{}" target="_blank" rel="noopener" aria-label="Source code">{}</a>"#,
            html_escape(gh),
            icons::GITHUB
        ));
    }
    if let Some(demo) = project.demo.as_deref().filter(|s| !s.is_empty()) {
        links.push_str(&format!(
            r#"<a class="project-link" href="{}" target="_blank" rel="noopener" aria-label="Live demo">{}</a>"#,
            html_escape(demo),
            icons::external()
        ));
    }

    format!(
        r#"<article class="project-card" data-key="{id}" data-category="{category}">
<div class="project-media">{media}{featured}</div>
<div class="project-body">
<p class="project-category">{category_icon}<span>{category_label}</span></p>
<h3>{title}</h3>
<p class="project-summary">{description}</p>
<p class="project-detail">{long}</p>
{tech}
<div class="project-links">{links}</div>
</div>
</article>"#,
        id = html_escape(&project.id),
        category = project.category.as_str(),
        media = media,
        featured = if project.featured {
            r#"<span class="featured-badge">Featured</span>"#
        } else {
            ""
        },
        category_icon = icons::project_category(project.category),
        category_label = project.category.label(),
        title = html_escape(&project.title),
        description = html_escape(&project.description),
        long = html_escape(&project.long_description),
        tech = tech_badges(&project.technologies),
        links = links,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: ProjectCategory) -> Project {
        Project {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            long_description: String::new(),
            technologies: vec![],
            github: None,
            demo: None,
            image: None,
            featured: false,
            category,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("invaders", ProjectCategory::Game),
            project("showcase", ProjectCategory::Web),
            project("scanner", ProjectCategory::Tool),
            project("souls", ProjectCategory::Game),
        ]
    }

    #[test]
    fn game_filter_keeps_order() {
        let all = sample();
        let ids: Vec<&str> = filter_projects(&all, ProjectFilter::Only(ProjectCategory::Game))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["invaders", "souls"]);
    }

    #[test]
    fn all_filter_returns_everything() {
        let all = sample();
        assert_eq!(filter_projects(&all, ProjectFilter::All).len(), 4);
    }

    #[test]
    fn parse_filter_values() {
        assert_eq!(ProjectFilter::parse(Some("game")), ProjectFilter::Only(ProjectCategory::Game));
        assert_eq!(ProjectFilter::parse(Some(" Web ")), ProjectFilter::Only(ProjectCategory::Web));
        assert_eq!(ProjectFilter::parse(Some("all")), ProjectFilter::All);
        assert_eq!(ProjectFilter::parse(Some("systems")), ProjectFilter::All);
        assert_eq!(ProjectFilter::parse(None), ProjectFilter::All);
    }
}
