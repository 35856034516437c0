use chrono::Datelike;
use rocket::fs::NamedFile;
use rocket::http::{CookieJar, Status};
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::context::Portfolio;
use crate::render::{self, PageContext};
use crate::sections::projects::ProjectFilter;
use crate::theme::{self, Theme, ThemeChoice};

// ── Page ───────────────────────────────────────────────

#[get("/?<category>&<kiosk>")]
pub fn index(
    portfolio: Portfolio,
    theme: ThemeChoice,
    config: &State<SiteConfig>,
    category: Option<&str>,
    kiosk: Option<bool>,
) -> RawHtml<String> {
    let ctx = PageContext {
        config: config.inner(),
        theme: theme.0,
        kiosk: kiosk.unwrap_or(false),
        year: chrono::Utc::now().year(),
    };
    RawHtml(render::render_page(
        &portfolio,
        &ctx,
        ProjectFilter::parse(category),
    ))
}

// ── Bundled content document ───────────────────────────

#[get("/data/portfolio.json")]
pub async fn content_document(config: &State<SiteConfig>) -> Option<NamedFile> {
    match NamedFile::open(&config.content.data_file).await {
        Ok(file) => Some(file),
        Err(e) => {
            log::warn!(
                "[content] Bundled document {} unavailable: {}",
                config.content.data_file,
                e
            );
            None
        }
    }
}

// ── Theme preference ───────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// `?set=light|dark` stores that theme; without `set` the current one flips.
#[post("/theme?<set>")]
pub fn set_theme(
    set: Option<&str>,
    current: ThemeChoice,
    config: &State<SiteConfig>,
    cookies: &CookieJar<'_>,
) -> Result<Json<ThemeResponse>, Status> {
    let theme = match set {
        None => current.0.toggled(),
        Some(raw) => Theme::parse(raw).ok_or(Status::BadRequest)?,
    };
    theme::persist(cookies, &config.theme.storage_key, theme);
    Ok(Json(ThemeResponse { theme }))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![index, content_document, set_theme]
}
