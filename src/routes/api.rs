use std::net::IpAddr;
use std::sync::Arc;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use serde_json::{json, Value};

use crate::context::{ContentStore, Portfolio};
use crate::rate_limit::RateLimiter;

// ── Current content ────────────────────────────────────

#[get("/content")]
pub fn content(portfolio: Portfolio) -> Json<Value> {
    Json(json!({
        "isLoading": portfolio.is_loading(),
        "error": portfolio.error(),
        "content": portfolio.content(),
    }))
}

// ── Manual refetch ─────────────────────────────────────

#[post("/refetch")]
pub async fn refetch(
    store: &State<ContentStore>,
    limiter: &State<Arc<RateLimiter>>,
    client_ip: Option<IpAddr>,
) -> (Status, Json<Value>) {
    let key = format!(
        "refetch:{}",
        client_ip.map(|ip| ip.to_string()).unwrap_or_else(|| "unknown".into())
    );
    if !limiter.check_and_record(&key) {
        return (
            Status::TooManyRequests,
            Json(json!({
                "ok": false,
                "error": "Too many refetch requests, try again later",
                "remaining": 0,
            })),
        );
    }

    let snapshot = store.refetch().await;
    (
        Status::Ok,
        Json(json!({
            "ok": snapshot.error.is_none(),
            "isLoading": snapshot.is_loading,
            "error": snapshot.error,
            "remaining": limiter.remaining(&key),
        })),
    )
}

pub fn routes() -> Vec<rocket::Route> {
    routes![content, refetch]
}
