//! Collection loaders.
//!
//! The disaster list comes from the backend and falls back to the sample
//! set when the call fails. The other collections have no endpoint and are
//! served from the samples directly.

use serde::Serialize;

use crate::api::ApiClient;
use crate::errors::ConsoleError;
use crate::models::{
    Alert, DangerZone, DashboardStats, Disaster, Resource, SafeRoute, SosRequest, Volunteer,
};
use crate::samples;

/// Where a loaded collection came from.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", content = "notice", rename_all = "lowercase")]
pub enum Source {
    Live,
    Sample,
    /// Backend call failed; the notice explains why.
    Fallback(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct Loaded<T> {
    pub source: Source,
    pub records: Vec<T>,
}

impl<T> Loaded<T> {
    fn sample(records: Vec<T>) -> Self {
        Self {
            source: Source::Sample,
            records,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match &self.source {
            Source::Fallback(notice) => Some(notice),
            _ => None,
        }
    }
}

pub async fn disasters(client: &ApiClient) -> Loaded<Disaster> {
    match client.list_disasters().await {
        Ok(records) => Loaded {
            source: Source::Live,
            records,
        },
        Err(e) => {
            tracing::warn!("Falling back to sample disasters: {}", e);
            Loaded {
                source: Source::Fallback(e.message()),
                records: samples::disasters(),
            }
        }
    }
}

pub fn volunteers() -> Loaded<Volunteer> {
    Loaded::sample(samples::volunteers())
}

pub fn sos_requests() -> Loaded<SosRequest> {
    Loaded::sample(samples::sos_requests())
}

pub fn resources() -> Loaded<Resource> {
    Loaded::sample(samples::resources())
}

pub fn danger_zones() -> Loaded<DangerZone> {
    Loaded::sample(samples::danger_zones())
}

pub fn alerts() -> Loaded<Alert> {
    Loaded::sample(samples::alerts())
}

pub fn safe_routes() -> Loaded<SafeRoute> {
    Loaded::sample(samples::safe_routes())
}

/// Dashboard headline numbers plus the disaster list.
pub struct Overview {
    pub stats: Result<DashboardStats, ConsoleError>,
    pub disasters: Loaded<Disaster>,
}

/// Fetch stats and disasters concurrently; neither waits on the other.
pub async fn overview(client: &ApiClient) -> Overview {
    let (stats, disasters) = tokio::join!(client.dashboard_stats(), disasters(client));
    if let Err(e) = &stats {
        tracing::warn!("Dashboard stats unavailable: {}", e);
    }
    Overview { stats, disasters }
}
