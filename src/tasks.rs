use rocket::fairing::{Fairing, Info, Kind};
use rocket::tokio;
use rocket::{Orbit, Rocket};
use std::sync::Arc;
use std::time::Duration;

use crate::config::SiteConfig;
use crate::context::ContentStore;
use crate::rate_limit::RateLimiter;

/// Ties the content store to the server's lifetime: initial load once the
/// server is listening, optional periodic refresh, close on shutdown.
pub struct ContentLifecycle;

#[rocket::async_trait]
impl Fairing for ContentLifecycle {
    fn info(&self) -> Info {
        Info {
            name: "Content Lifecycle",
            kind: Kind::Liftoff | Kind::Shutdown,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let store = match rocket.state::<ContentStore>() {
            Some(s) => s.clone(),
            None => {
                log::error!("[task] No ContentStore managed; content will never load");
                return;
            }
        };
        let refresh_minutes = rocket
            .state::<SiteConfig>()
            .map(|c| c.content.refresh_interval_minutes)
            .unwrap_or(0);

        // Initial load; a no-op when content was preloaded.
        let s = store.clone();
        tokio::spawn(async move {
            s.start().await;
        });

        if refresh_minutes > 0 {
            let s = store.clone();
            tokio::spawn(async move {
                loop {
                    tokio::time::sleep(Duration::from_secs(refresh_minutes * 60)).await;
                    if s.is_closed() {
                        break;
                    }
                    let snap = s.refetch().await;
                    match snap.error {
                        Some(e) => log::warn!("[task] Scheduled content refresh fell back to defaults: {}", e),
                        None => log::info!("[task] Scheduled content refresh complete"),
                    }
                }
            });
        }

        if let Some(limiter) = rocket.state::<Arc<RateLimiter>>() {
            let limiter = limiter.clone();
            let closed = store.clone();
            tokio::spawn(async move {
                loop {
                    tokio::time::sleep(Duration::from_secs(600)).await;
                    if closed.is_closed() {
                        break;
                    }
                    limiter.cleanup();
                }
            });
        }
    }

    async fn on_shutdown(&self, rocket: &Rocket<Orbit>) {
        if let Some(store) = rocket.state::<ContentStore>() {
            store.close();
            log::info!("[task] Content store closed");
        }
    }
}
