//! REST API module.
//!
//! Client side of the backend contract: endpoint paths, the response
//! envelope and the HTTP client itself.

mod client;

pub use client::*;

use serde::Deserialize;

/// Endpoint paths, relative to the configured base URL.
pub mod paths {
    pub const LOGIN: &str = "/api/admin/login";
    pub const DASHBOARD_STATS: &str = "/api/dashboard/stats";
    pub const DISASTERS: &str = "/api/disasters";
    pub const DANGER_ZONE_STATS: &str = "/api/danger-zone/stats";
    pub const DANGER_ZONE_EXPORT: &str = "/api/danger-zone/export";
    pub const DANGER_ZONE_COLLECTION: &str = "/api/danger-zone/collection";
    pub const DANGER_ZONE_RESET: &str = "/api/danger-zone/reset";
}

/// Response body: either the `{ success, data }` envelope or the bare payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Envelope { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        match self {
            Payload::Envelope { data } => data,
            Payload::Bare(data) => data,
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{ "message": .. }`, `{ "error": ".." }` and
/// `{ "error": { "message": .. } }`; anything else yields an empty string.
pub fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return String::new();
    };

    value
        .get("message")
        .and_then(|m| m.as_str())
        .or_else(|| value.get("error").and_then(|e| e.as_str()))
        .or_else(|| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
        })
        .unwrap_or_default()
        .to_string()
}
