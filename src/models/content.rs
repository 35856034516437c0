use serde::{Deserialize, Serialize};

// ── Content document ──────────────────────────────────
// Field names follow the JSON document (camelCase); every field is
// required except the optional project links.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub personal_info: PersonalInfo,
    pub about_content: AboutContent,
    pub contact_content: ContactContent,
    pub skills_content: SkillsContent,
    pub footer_content: FooterContent,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub nav_items: Vec<NavItem>,
    pub seo: SeoData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub linkedin: String,
    pub github: String,
    pub profile_image: String,
    pub available: bool,
    pub available_text: String,
    pub initials: String,
    pub github_username: String,
    pub linkedin_name: String,
    pub resume_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub icon: StatIcon,
}

/// Closed set of stat icons. Unknown names are rejected while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatIcon {
    Briefcase,
    Code,
    Graduation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub section_description: String,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub learning_title: String,
    pub currently_learning: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub tagline: String,
    pub built_with: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub period: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub featured: bool,
    pub category: ProjectCategory,
}

/// `Systems` is accepted in documents but has no filter of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Game,
    Tool,
    Systems,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Game => "game",
            Self::Tool => "tool",
            Self::Systems => "systems",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web Application",
            Self::Game => "Game Development",
            Self::Tool => "Developer Tool",
            Self::Systems => "Systems",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoData {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub url: String,
    pub locale: String,
}

// ── Default instance ──────────────────────────────────

impl Default for PortfolioContent {
    /// Placeholder copy used whenever no document could be loaded.
    fn default() -> Self {
        PortfolioContent {
            personal_info: PersonalInfo {
                name: "Your Name".into(),
                title: "Your Title".into(),
                email: "email@example.com".into(),
                location: "Location".into(),
                bio: "Your bio goes here.".into(),
                linkedin: "#".into(),
                github: "#".into(),
                profile_image: "/images/profile.png".into(),
                available: true,
                available_text: "Available for opportunities".into(),
                initials: "YN".into(),
                github_username: "@username".into(),
                linkedin_name: "Your Name".into(),
                resume_url: "/resume.pdf".into(),
            },
            about_content: AboutContent {
                section_title: "About Me".into(),
                section_subtitle: "Who Am I?".into(),
                paragraphs: vec!["Tell your story here.".into()],
                stats: vec![
                    Stat {
                        label: "Years Experience".into(),
                        value: "0+".into(),
                        icon: StatIcon::Briefcase,
                    },
                    Stat {
                        label: "Projects".into(),
                        value: "0+".into(),
                        icon: StatIcon::Code,
                    },
                    Stat {
                        label: "Technologies".into(),
                        value: "0+".into(),
                        icon: StatIcon::Graduation,
                    },
                ],
            },
            contact_content: ContactContent {
                section_title: "Get In Touch".into(),
                section_subtitle: "Let's Work Together".into(),
                section_description: "I'm always open to new opportunities.".into(),
                cta_title: "Ready to Start a Project?".into(),
                cta_description: "Feel free to reach out!".into(),
                cta_button_text: "Send Me an Email".into(),
            },
            skills_content: SkillsContent {
                section_title: "Expertise".into(),
                section_subtitle: "Skills & Technologies".into(),
                learning_title:
                    "Always learning and exploring new technologies. Currently interested in:"
                        .into(),
                currently_learning: vec![],
            },
            footer_content: FooterContent {
                tagline: "Developer passionate about creating digital experiences.".into(),
                built_with: "Built with Rust & Rocket".into(),
            },
            experiences: vec![],
            education: vec![],
            projects: vec![],
            skill_categories: vec![],
            nav_items: vec![
                nav("home", "Home"),
                nav("about", "About"),
                nav("contact", "Contact"),
            ],
            seo: SeoData {
                title: "Portfolio".into(),
                description: "My personal portfolio".into(),
                keywords: vec![],
                url: String::new(),
                locale: "en_US".into(),
            },
        }
    }
}

fn nav(id: &str, label: &str) -> NavItem {
    NavItem {
        id: id.into(),
        label: label.into(),
        href: format!("#{}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stat_icon_is_a_parse_error() {
        let raw = r#"{"label":"x","value":"1","icon":"rocket"}"#;
        assert!(serde_json::from_str::<Stat>(raw).is_err());
    }

    #[test]
    fn project_links_may_be_null_or_missing() {
        let raw = r#"{
            "id": "p", "title": "P", "description": "d", "longDescription": "l",
            "technologies": [], "github": null, "featured": false, "category": "systems"
        }"#;
        let p: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(p.github, None);
        assert_eq!(p.demo, None);
        assert_eq!(p.category, ProjectCategory::Systems);
    }

    #[test]
    fn default_serializes_with_document_field_names() {
        let v = serde_json::to_value(PortfolioContent::default()).unwrap();
        assert!(v.get("personalInfo").is_some());
        assert_eq!(v["personalInfo"]["availableText"], "Available for opportunities");
        assert_eq!(v["navItems"][1]["href"], "#about");
    }
}
