//! Evacuation route model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Open,
    Congested,
    Closed,
}

impl RouteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStatus::Open => "open",
            RouteStatus::Congested => "congested",
            RouteStatus::Closed => "closed",
        }
    }
}

/// A route people can take out of an affected area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeRoute {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub status: RouteStatus,
    /// People per hour
    pub capacity: u32,
}
