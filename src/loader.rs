use std::fmt;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};

use crate::config::{ContentConfig, SourceConfig};
use crate::models::content::PortfolioContent;
use crate::models::validate::ContentError;
use crate::source::{self, ExecContext};

/// How fresh the fetched document has to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Render-time fetch; a document fetched within the revalidate
    /// window is reused.
    Server,
    /// Always goes to the source and asks intermediaries not to cache.
    Client,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    NotConfigured,
    Transport(String),
    Status(u16, String),
    Parse(String),
    Invalid(ContentError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "no content source configured"),
            Self::Transport(e) => write!(f, "request failed: {}", e),
            Self::Status(code, reason) => write!(f, "source returned {} {}", code, reason),
            Self::Parse(e) => write!(f, "malformed content document: {}", e),
            Self::Invalid(e) => write!(f, "invalid content document: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

/// Result of one load. `content` is always complete; `error` records why
/// the defaults were used, if they were.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub content: PortfolioContent,
    pub error: Option<LoadError>,
}

impl LoadOutcome {
    fn fallback(error: LoadError) -> Self {
        LoadOutcome {
            content: PortfolioContent::default(),
            error: Some(error),
        }
    }
}

struct CachedDocument {
    url: String,
    fetched_at: Instant,
    content: PortfolioContent,
}

pub struct Loader {
    client: reqwest::Client,
    source: SourceConfig,
    revalidate: Duration,
    cache: Mutex<Option<CachedDocument>>,
}

impl Loader {
    pub fn new(source: SourceConfig, content: &ContentConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(content.timeout_secs.max(1)))
            .build()
            .map_err(|e| format!("HTTP client error: {}", e))?;
        Ok(Loader {
            client,
            source,
            revalidate: Duration::from_secs(content.revalidate_secs),
            cache: Mutex::new(None),
        })
    }

    /// Load the content document. Never fails: any problem is logged and
    /// the default instance returned.
    pub async fn load(&self, mode: FetchMode) -> PortfolioContent {
        self.load_outcome(mode).await.content
    }

    pub async fn load_outcome(&self, mode: FetchMode) -> LoadOutcome {
        // The loader always runs in this process, so the URL must be absolute.
        let url = match source::resolve(&self.source, ExecContext::Server) {
            Some(url) => url,
            None => {
                log::warn!("[content] No data URL configured, using default content");
                return LoadOutcome::fallback(LoadError::NotConfigured);
            }
        };

        if mode == FetchMode::Server {
            if let Some(content) = self.cached(&url) {
                log::debug!("[content] Serving cached document for {}", url);
                return LoadOutcome { content, error: None };
            }
        }

        match self.fetch(&url, mode).await {
            Ok(content) => {
                log::info!("[content] Loaded content document from {}", url);
                self.store(&url, &content);
                LoadOutcome { content, error: None }
            }
            Err(e) => {
                log::error!("[content] Error fetching {}: {}", url, e);
                LoadOutcome::fallback(e)
            }
        }
    }

    async fn fetch(&self, url: &str, mode: FetchMode) -> Result<PortfolioContent, LoadError> {
        let mut req = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        req = match mode {
            FetchMode::Server => req.header(
                CACHE_CONTROL,
                format!("max-age={}", self.revalidate.as_secs()),
            ),
            FetchMode::Client => req.header(CACHE_CONTROL, "no-store"),
        };

        let resp = req
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("").to_string(),
            ));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        parse_document(&body)
    }

    fn cached(&self, url: &str) -> Option<PortfolioContent> {
        let guard = self.cache.lock().ok()?;
        let doc = guard.as_ref()?;
        if doc.url == url && doc.fetched_at.elapsed() < self.revalidate {
            Some(doc.content.clone())
        } else {
            None
        }
    }

    fn store(&self, url: &str, content: &PortfolioContent) {
        if let Ok(mut guard) = self.cache.lock() {
            *guard = Some(CachedDocument {
                url: url.to_string(),
                fetched_at: Instant::now(),
                content: content.clone(),
            });
        }
    }
}

/// Parse and validate a content document.
pub fn parse_document(body: &str) -> Result<PortfolioContent, LoadError> {
    let content: PortfolioContent =
        serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;
    content.validate().map_err(LoadError::Invalid)?;
    Ok(content)
}

/// Read the bundled document from disk, for preloading before launch.
pub fn load_bundled(path: &str) -> LoadOutcome {
    let body = match std::fs::read_to_string(path) {
        Ok(body) => body,
        Err(e) => {
            log::error!("[content] Cannot read bundled document {}: {}", path, e);
            return LoadOutcome::fallback(LoadError::Transport(e.to_string()));
        }
    };
    match parse_document(&body) {
        Ok(content) => {
            log::info!("[content] Loaded bundled document {}", path);
            LoadOutcome { content, error: None }
        }
        Err(e) => {
            log::error!("[content] Bundled document {} rejected: {}", path, e);
            LoadOutcome::fallback(e)
        }
    }
}
