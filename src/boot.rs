use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::config::{DataSource, SiteConfig, CONFIG_FILE};
use crate::loader;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &[
    "website",
    "website/data",
    "website/static",
    "website/static/css",
    "website/static/js",
];

/// Page assets; the site renders without them but unstyled and static
const STATIC_ASSETS: &[&str] = &[
    "website/static/css/portfolio.css",
    "website/static/js/portfolio.js",
];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories, warns about missing assets and a broken
/// bundled document, and aborts if the site directory cannot be prepared.
pub fn run(config: &SiteConfig) {
    info!("[boot] Folio boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("[boot]   Created directory: {}", dir),
                Err(e) => {
                    error!("[boot]   FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Static assets ───────────────────────────────
    for file in STATIC_ASSETS {
        if !Path::new(file).exists() {
            warn!("[boot]   Missing static asset: {}", file);
            warnings += 1;
        }
    }

    // ── 3. Bundled content document ────────────────────
    let data_file = &config.content.data_file;
    if Path::new(data_file).exists() {
        if let Some(e) = loader::load_bundled(data_file).error {
            warn!("[boot]   Bundled document {} will be replaced by defaults: {}", data_file, e);
            warnings += 1;
        }
    } else if config.source.kind == DataSource::Local {
        warn!("[boot]   Local source selected but {} is missing (default content will be shown)", data_file);
        warnings += 1;
    }

    // ── 4. Remote source configured ────────────────────
    let remote = match config.source.kind {
        DataSource::Remote => Some(&config.source.remote_url),
        DataSource::Custom => Some(&config.source.custom_url),
        DataSource::Local => None,
    };
    if remote.map(|u| u.trim().is_empty()).unwrap_or(false) {
        warn!("[boot]   {:?} source selected but no URL set", config.source.kind);
        warnings += 1;
    }

    // ── 5. Config files exist ──────────────────────────
    if !Path::new(CONFIG_FILE).exists() {
        warn!("[boot]   {} not found, using defaults and FOLIO_* environment", CONFIG_FILE);
        warnings += 1;
    }
    if !Path::new("Rocket.toml").exists() {
        warn!("[boot]   Rocket.toml not found, using default server config");
        warnings += 1;
    }

    // ── Summary ─────────────────────────────────────────
    if errors > 0 {
        error!(
            "[boot] Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "[boot] Boot check passed with {} warning(s). Some features may not work correctly.",
            warnings
        );
    } else {
        info!("[boot] Boot check passed. All systems go.");
    }
}
