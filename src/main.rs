#[macro_use]
extern crate rocket;

use std::sync::Arc;
use std::time::Duration;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::fs::{FileServer, Options};
use rocket::http::{ContentType, Header};
use rocket::response::content::RawHtml;
use rocket::{Build, Request, Rocket};

mod boot;
mod config;
mod context;
mod kiosk;
mod loader;
mod models;
mod rate_limit;
mod render;
mod routes;
mod sections;
mod source;
mod tasks;
mod theme;
mod viewport;


use config::{DataSource, SiteConfig};
use context::ContentStore;
use loader::{FetchMode, Loader};
use models::content::PortfolioContent;
use rate_limit::RateLimiter;

const STATIC_DIR: &str = "website/static";

/// Response headers: API responses and the content document are never
/// cached; pages ask for the color-scheme client hint.
pub struct ResponseHeaders {
    api_prefix: String,
    document_path: String,
}

#[rocket::async_trait]
impl Fairing for ResponseHeaders {
    fn info(&self) -> Info {
        Info { name: "Response Headers", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut rocket::Response<'r>) {
        let path = req.uri().path();
        if path.starts_with(&*self.api_prefix) || path == self.document_path.as_str() {
            res.set_header(Header::new("Cache-Control", "no-store, no-cache, must-revalidate, max-age=0"));
            res.set_header(Header::new("Pragma", "no-cache"));
        }
        if res.content_type() == Some(ContentType::HTML) {
            res.set_header(Header::new("Accept-CH", theme::COLOR_SCHEME_HINT));
            res.set_header(Header::new("Vary", theme::COLOR_SCHEME_HINT));
        }
    }
}

fn home_link(req: &Request<'_>) -> String {
    req.rocket()
        .state::<SiteConfig>()
        .map(|c| c.mount_point("/"))
        .unwrap_or_else(|| "/".to_string())
}

#[catch(404)]
fn not_found(req: &Request<'_>) -> RawHtml<String> {
    RawHtml(render::render_status_page(404, "Page not found.", &home_link(req)))
}

#[catch(500)]
fn server_error(req: &Request<'_>) -> RawHtml<String> {
    RawHtml(render::render_status_page(500, "Internal server error.", &home_link(req)))
}

/// Assemble the server around an already-constructed content store.
pub fn build(config: SiteConfig, store: ContentStore) -> Rocket<Build> {
    let limiter = Arc::new(RateLimiter::new(
        config.refetch.max_per_window,
        Duration::from_secs(config.refetch.window_secs),
    ));
    let site_mount = config.mount_point("");
    let api_mount = config.mount_point("/api");
    let static_mount = config.mount_point("/static");
    let headers = ResponseHeaders {
        api_prefix: api_mount.clone(),
        document_path: config.mount_point(source::LOCAL_DOCUMENT),
    };

    rocket::build()
        .manage(store)
        .manage(limiter)
        .manage(config)
        .attach(headers)
        .mount(&static_mount, FileServer::new(STATIC_DIR, Options::Index | Options::Missing))
        .mount(&site_mount, routes::public::routes())
        .mount(&api_mount, routes::api::routes())
        .register(&site_mount, catchers![not_found, server_error])
}

/// Content handed to the store before launch, when preloading is on.
async fn preload(config: &SiteConfig, loader: &Loader) -> PortfolioContent {
    match config.source.kind {
        DataSource::Local => loader::load_bundled(&config.content.data_file).content,
        DataSource::Remote | DataSource::Custom => loader.load(FetchMode::Server).await,
    }
}

#[launch]
async fn rocket() -> _ {
    env_logger::init();

    let config = SiteConfig::load();

    // Boot check: create directories, validate the bundled document
    boot::run(&config);

    let loader = Loader::new(config.source.clone(), &config.content)
        .expect("Failed to initialize HTTP client");
    let initial = if config.content.preload {
        Some(preload(&config, &loader).await)
    } else {
        None
    };

    eprintln!(
        "Portfolio mounted at: {} (source: {:?})",
        config.mount_point("/"),
        config.source.kind
    );

    build(config, ContentStore::new(loader, initial)).attach(tasks::ContentLifecycle)
}
