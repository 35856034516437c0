use rocket::http::{Cookie, CookieJar, SameSite};
use rocket::request::{FromRequest, Outcome, Request};
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Persisted preference first, then the system color scheme, then the
/// configured default.
pub fn initial_theme(persisted: Option<&str>, system_prefers_dark: Option<bool>, fallback: Theme) -> Theme {
    if let Some(theme) = persisted.and_then(Theme::parse) {
        return theme;
    }
    match system_prefers_dark {
        Some(true) => Theme::Dark,
        Some(false) => Theme::Light,
        None => fallback,
    }
}

/// Client hint carrying the browser's color-scheme preference.
pub const COLOR_SCHEME_HINT: &str = "Sec-CH-Prefers-Color-Scheme";

/// Theme resolved for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChoice(pub Theme);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ThemeChoice {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let (key, fallback) = match request.rocket().state::<SiteConfig>() {
            Some(cfg) => (cfg.theme.storage_key.clone(), cfg.theme.default),
            None => ("portfolio-theme".to_string(), Theme::Dark),
        };
        let persisted = request.cookies().get(&key).map(|c| c.value().to_string());
        let system = request
            .headers()
            .get_one(COLOR_SCHEME_HINT)
            .map(|v| v.trim_matches('"').eq_ignore_ascii_case("dark"));
        Outcome::Success(ThemeChoice(initial_theme(persisted.as_deref(), system, fallback)))
    }
}

/// Store the preference so the next render starts in the same theme.
pub fn persist(cookies: &CookieJar<'_>, storage_key: &str, theme: Theme) {
    cookies.add(
        Cookie::build((storage_key.to_string(), theme.as_str()))
            .path("/")
            .same_site(SameSite::Lax)
            .permanent(),
    );
}

/// Inline head script applying the stored preference before first paint.
pub fn init_script(storage_key: &str) -> String {
    format!(
        r#"<script>(function(){{try{{var t=localStorage.getItem('{key}');var r=document.documentElement;if(t==='light'){{r.classList.remove('dark');r.classList.add('light');}}else if(t==='dark'){{r.classList.remove('light');r.classList.add('dark');}}}}catch(e){{}}}})();</script>"#,
        key = storage_key.replace('\'', "")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_light_beats_system_dark() {
        assert_eq!(initial_theme(Some("light"), Some(true), Theme::Dark), Theme::Light);
    }

    #[test]
    fn system_dark_used_without_persisted_value() {
        assert_eq!(initial_theme(None, Some(true), Theme::Light), Theme::Dark);
        assert_eq!(initial_theme(None, Some(false), Theme::Dark), Theme::Light);
    }

    #[test]
    fn garbage_persisted_value_falls_through() {
        assert_eq!(initial_theme(Some("sepia"), None, Theme::Dark), Theme::Dark);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn init_script_reads_storage_key() {
        let s = init_script("portfolio-theme");
        assert!(s.contains("localStorage.getItem('portfolio-theme')"));
        assert!(s.starts_with("<script>"));
    }
}
