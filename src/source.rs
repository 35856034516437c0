//! Content source resolution and asset path prefixing.
//! Pure functions of configuration and execution context.

use url::Url;

use crate::config::{DataSource, SourceConfig};

/// Path of the bundled content document below the base path.
pub const LOCAL_DOCUMENT: &str = "/data/portfolio.json";

/// Where the URL will be fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecContext {
    /// The visitor's browser; relative URLs resolve against the page.
    Browser,
    /// This process; needs a fully-qualified URL.
    Server,
}

/// Resolve the content document URL. `None` means no source is configured.
pub fn resolve(source: &SourceConfig, ctx: ExecContext) -> Option<String> {
    let url = match source.kind {
        DataSource::Remote => source.remote_url.trim().to_string(),
        DataSource::Custom => source.custom_url.trim().to_string(),
        DataSource::Local => match ctx {
            ExecContext::Browser => format!("{}{}", source.base_path, LOCAL_DOCUMENT),
            ExecContext::Server => {
                if source.site_url.trim().is_empty() {
                    String::new()
                } else {
                    format!(
                        "{}{}{}",
                        source.site_url.trim_end_matches('/'),
                        source.base_path,
                        LOCAL_DOCUMENT
                    )
                }
            }
        },
    };

    if url.is_empty() {
        return None;
    }
    if ctx == ExecContext::Server && Url::parse(&url).is_err() {
        log::warn!("[content] Ignoring non-absolute content URL '{}'", url);
        return None;
    }
    Some(url)
}

/// Prefix an asset path with the base path. Absolute URLs, paths that
/// already carry the prefix and any path under an empty base are returned
/// as-is.
pub fn with_base_path(base_path: &str, path: &str) -> String {
    if path.is_empty()
        || base_path.is_empty()
        || path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with('#')
        || path.starts_with("mailto:")
    {
        return path.to_string();
    }
    if path.starts_with(base_path) {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base_path, path)
    } else {
        format!("{}/{}", base_path, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(kind: DataSource, base: &str) -> SourceConfig {
        SourceConfig {
            kind,
            remote_url: "https://raw.example.com/me/portfolio.json".into(),
            custom_url: "https://api.example.com/portfolio".into(),
            site_url: "https://me.example.com".into(),
            base_path: base.into(),
        }
    }

    #[test]
    fn local_browser_is_relative_under_base_path() {
        let s = source(DataSource::Local, "/Portfolio");
        assert_eq!(
            resolve(&s, ExecContext::Browser).as_deref(),
            Some("/Portfolio/data/portfolio.json")
        );
    }

    #[test]
    fn local_server_is_fully_qualified() {
        let s = source(DataSource::Local, "/Portfolio");
        assert_eq!(
            resolve(&s, ExecContext::Server).as_deref(),
            Some("https://me.example.com/Portfolio/data/portfolio.json")
        );
        let root = source(DataSource::Local, "");
        assert_eq!(
            resolve(&root, ExecContext::Server).as_deref(),
            Some("https://me.example.com/data/portfolio.json")
        );
    }

    #[test]
    fn remote_and_custom_ignore_context() {
        for ctx in [ExecContext::Browser, ExecContext::Server] {
            assert_eq!(
                resolve(&source(DataSource::Remote, "/x"), ctx).as_deref(),
                Some("https://raw.example.com/me/portfolio.json")
            );
            assert_eq!(
                resolve(&source(DataSource::Custom, "/x"), ctx).as_deref(),
                Some("https://api.example.com/portfolio")
            );
        }
    }

    #[test]
    fn empty_url_is_unconfigured() {
        let mut s = source(DataSource::Remote, "");
        s.remote_url = "  ".into();
        assert_eq!(resolve(&s, ExecContext::Server), None);

        let mut s = source(DataSource::Local, "");
        s.site_url = String::new();
        assert_eq!(resolve(&s, ExecContext::Server), None);
    }

    #[test]
    fn relative_custom_url_rejected_on_server() {
        let mut s = source(DataSource::Custom, "");
        s.custom_url = "/api/portfolio".into();
        assert_eq!(resolve(&s, ExecContext::Server), None);
        assert_eq!(
            resolve(&s, ExecContext::Browser).as_deref(),
            Some("/api/portfolio")
        );
    }

    #[test]
    fn asset_prefixing() {
        assert_eq!(with_base_path("/Portfolio", "/resume.pdf"), "/Portfolio/resume.pdf");
        assert_eq!(with_base_path("/Portfolio", "images/me.png"), "/Portfolio/images/me.png");
        assert_eq!(
            with_base_path("/Portfolio", "/Portfolio/resume.pdf"),
            "/Portfolio/resume.pdf"
        );
        assert_eq!(
            with_base_path("/Portfolio", "https://cdn.example.com/me.png"),
            "https://cdn.example.com/me.png"
        );
        assert_eq!(with_base_path("", "/resume.pdf"), "/resume.pdf");
        assert_eq!(with_base_path("/Portfolio", ""), "");
    }

    #[test]
    fn empty_base_leaves_relative_paths_alone() {
        assert_eq!(with_base_path("", "resume.pdf"), "resume.pdf");
        assert_eq!(with_base_path("", "images/me.png"), "images/me.png");
    }
}
