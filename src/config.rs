use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

use crate::theme::Theme;

/// Where page content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Local,
    #[serde(alias = "github")]
    Remote,
    Custom,
}

impl DataSource {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Some(Self::Local),
            "remote" | "github" => Some(Self::Remote),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: DataSource,
    pub remote_url: String,
    pub custom_url: String,
    pub site_url: String,
    pub base_path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            kind: DataSource::Local,
            remote_url: String::new(),
            custom_url: String::new(),
            site_url: "http://localhost:8000".to_string(),
            base_path: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub data_file: String,
    pub preload: bool,
    pub revalidate_secs: u64,
    pub timeout_secs: u64,
    pub refresh_interval_minutes: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            data_file: "website/data/portfolio.json".to_string(),
            preload: true,
            revalidate_secs: 3600,
            timeout_secs: 10,
            refresh_interval_minutes: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub default: Theme,
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            default: Theme::Dark,
            storage_key: "portfolio-theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RefetchConfig {
    pub max_per_window: u64,
    pub window_secs: u64,
}

impl Default for RefetchConfig {
    fn default() -> Self {
        RefetchConfig {
            max_per_window: 5,
            window_secs: 60,
        }
    }
}

/// Site configuration: `folio.toml` overlaid with `FOLIO_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub source: SourceConfig,
    pub content: ContentConfig,
    pub theme: ThemeConfig,
    pub refetch: RefetchConfig,
    /// Keyed by normalized feature name (`KIOSK`, `THEME_TOGGLE`, ...).
    pub features: HashMap<String, bool>,
}

#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}

pub const CONFIG_FILE: &str = "folio.toml";

impl SiteConfig {
    /// Read `folio.toml` and the process environment. Invalid files are
    /// logged and replaced by defaults.
    pub fn load() -> Self {
        let file = std::fs::read_to_string(CONFIG_FILE).ok();
        let env: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("FOLIO_"))
            .collect();
        match Self::from_sources(file.as_deref(), &env) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("[config] {} is invalid, using defaults: {}", CONFIG_FILE, e);
                Self::from_sources(None, &env).unwrap_or_default()
            }
        }
    }

    pub fn from_sources(
        file: Option<&str>,
        env: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut cfg: SiteConfig = match file {
            Some(text) => toml::from_str(text).map_err(|e| ConfigError(e.to_string()))?,
            None => SiteConfig::default(),
        };

        cfg.features = cfg
            .features
            .into_iter()
            .map(|(k, v)| (normalize_feature(&k), v))
            .collect();

        if let Some(v) = env.get("FOLIO_DATA_SOURCE") {
            match DataSource::parse(v) {
                Some(kind) => cfg.source.kind = kind,
                None => log::warn!("[config] Unknown FOLIO_DATA_SOURCE '{}', keeping {:?}", v, cfg.source.kind),
            }
        }
        if let Some(v) = env.get("FOLIO_REMOTE_DATA_URL") {
            cfg.source.remote_url = v.clone();
        }
        if let Some(v) = env.get("FOLIO_CUSTOM_API_URL") {
            cfg.source.custom_url = v.clone();
        }
        if let Some(v) = env.get("FOLIO_SITE_URL") {
            cfg.source.site_url = v.clone();
        }
        if let Some(v) = env.get("FOLIO_BASE_PATH") {
            cfg.source.base_path = v.clone();
        }
        for (key, value) in env {
            if let Some(name) = key.strip_prefix("FOLIO_ENABLE_") {
                cfg.features
                    .insert(normalize_feature(name), value.trim() != "false");
            }
        }

        cfg.source.base_path = normalize_base_path(&cfg.source.base_path);
        cfg.source.site_url = cfg.source.site_url.trim_end_matches('/').to_string();
        Ok(cfg)
    }

    /// Features are on unless explicitly switched off.
    pub fn is_feature_enabled(&self, feature: &str) -> bool {
        self.features
            .get(&normalize_feature(feature))
            .copied()
            .unwrap_or(true)
    }

    pub fn base_path(&self) -> &str {
        &self.source.base_path
    }

    /// Rocket mount point for the site routes.
    pub fn mount_point(&self, sub: &str) -> String {
        let joined = format!("{}{}", self.source.base_path, sub);
        if joined.is_empty() {
            "/".to_string()
        } else {
            joined
        }
    }
}

fn normalize_feature(name: &str) -> String {
    name.to_uppercase().replace('-', "_")
}

/// `Portfolio/` → `/Portfolio`; `/` and empty → empty.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_without_file_or_env() {
        let cfg = SiteConfig::from_sources(None, &HashMap::new()).unwrap();
        assert_eq!(cfg.source.kind, DataSource::Local);
        assert_eq!(cfg.source.site_url, "http://localhost:8000");
        assert_eq!(cfg.base_path(), "");
        assert_eq!(cfg.content.revalidate_secs, 3600);
        assert_eq!(cfg.theme.storage_key, "portfolio-theme");
        assert_eq!(cfg.mount_point(""), "/");
    }

    #[test]
    fn file_values_and_env_overrides() {
        let file = r#"
            [source]
            kind = "github"
            remote_url = "https://raw.example.com/portfolio.json"
            base_path = "Portfolio/"

            [features]
            kiosk = false
            theme-toggle = true
        "#;
        let cfg = SiteConfig::from_sources(
            Some(file),
            &env(&[
                ("FOLIO_DATA_SOURCE", "custom"),
                ("FOLIO_CUSTOM_API_URL", "https://api.example.com/me"),
                ("FOLIO_ENABLE_THEME_TOGGLE", "false"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.source.kind, DataSource::Custom);
        assert_eq!(cfg.source.remote_url, "https://raw.example.com/portfolio.json");
        assert_eq!(cfg.source.custom_url, "https://api.example.com/me");
        assert_eq!(cfg.base_path(), "/Portfolio");
        assert_eq!(cfg.mount_point("/api"), "/Portfolio/api");
        assert!(!cfg.is_feature_enabled("kiosk"));
        assert!(!cfg.is_feature_enabled("theme-toggle"));
        assert!(cfg.is_feature_enabled("projects"));
    }

    #[test]
    fn feature_flag_only_false_disables() {
        let cfg = SiteConfig::from_sources(
            None,
            &env(&[("FOLIO_ENABLE_SKILLS", "0"), ("FOLIO_ENABLE_ABOUT", "false")]),
        )
        .unwrap();
        assert!(cfg.is_feature_enabled("skills"));
        assert!(!cfg.is_feature_enabled("about"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(SiteConfig::from_sources(Some("[source"), &HashMap::new()).is_err());
    }
}
