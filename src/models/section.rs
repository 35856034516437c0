/// Anchor-addressable regions of the page, in top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Education,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.anchor() == anchor)
    }

    /// Feature flag gating this section. The hero is always rendered.
    pub fn feature(&self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            other => Some(other.anchor()),
        }
    }
}
