use std::collections::HashSet;
use std::fmt;

use super::content::PortfolioContent;
use super::section::Section;

/// A document that parsed but breaks one of the content invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    DuplicateId { collection: &'static str, id: String },
    UnknownSection { id: String },
    NavHrefMismatch { id: String, href: String },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate id '{}' in {}", id, collection)
            }
            Self::UnknownSection { id } => {
                write!(f, "nav item '{}' does not match any page section", id)
            }
            Self::NavHrefMismatch { id, href } => {
                write!(f, "nav item '{}' links to '{}' instead of its anchor", id, href)
            }
        }
    }
}

impl std::error::Error for ContentError {}

impl PortfolioContent {
    /// Check id uniqueness per collection and that every nav item
    /// points at a section the page actually renders.
    pub fn validate(&self) -> Result<(), ContentError> {
        unique_ids("experiences", self.experiences.iter().map(|e| e.id.as_str()))?;
        unique_ids("education", self.education.iter().map(|e| e.id.as_str()))?;
        unique_ids("projects", self.projects.iter().map(|p| p.id.as_str()))?;
        unique_ids(
            "skillCategories",
            self.skill_categories.iter().map(|c| c.id.as_str()),
        )?;
        unique_ids("navItems", self.nav_items.iter().map(|n| n.id.as_str()))?;

        for item in &self.nav_items {
            if Section::from_anchor(&item.id).is_none() {
                return Err(ContentError::UnknownSection { id: item.id.clone() });
            }
            if !item.href.ends_with(&format!("#{}", item.id)) {
                return Err(ContentError::NavHrefMismatch {
                    id: item.id.clone(),
                    href: item.href.clone(),
                });
            }
        }
        Ok(())
    }
}

fn unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::{NavItem, SkillCategory};

    #[test]
    fn default_instance_is_valid() {
        assert_eq!(PortfolioContent::default().validate(), Ok(()));
    }

    #[test]
    fn duplicate_skill_category_rejected() {
        let mut c = PortfolioContent::default();
        for _ in 0..2 {
            c.skill_categories.push(SkillCategory {
                id: "tools".into(),
                name: "Tools".into(),
                skills: vec![],
            });
        }
        assert_eq!(
            c.validate(),
            Err(ContentError::DuplicateId {
                collection: "skillCategories",
                id: "tools".into()
            })
        );
    }

    #[test]
    fn dangling_nav_item_rejected() {
        let mut c = PortfolioContent::default();
        c.nav_items.push(NavItem {
            id: "blog".into(),
            label: "Blog".into(),
            href: "#blog".into(),
        });
        assert!(matches!(c.validate(), Err(ContentError::UnknownSection { .. })));
    }

    #[test]
    fn nav_href_must_target_its_anchor() {
        let mut c = PortfolioContent::default();
        c.nav_items[1].href = "#contact".into();
        assert!(matches!(c.validate(), Err(ContentError::NavHrefMismatch { .. })));

        c.nav_items[1].href = "/#about".into();
        assert_eq!(c.validate(), Ok(()));
    }
}
