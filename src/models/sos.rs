//! SOS request model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Severity;

/// Progress of an SOS request. The console does not enforce ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SosStatus {
    Pending,
    Assigned,
    EnRoute,
    Resolved,
}

impl SosStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SosStatus::Pending => "pending",
            SosStatus::Assigned => "assigned",
            SosStatus::EnRoute => "en-route",
            SosStatus::Resolved => "resolved",
        }
    }
}

/// An emergency help request submitted by an end user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SosRequest {
    pub id: String,
    pub requester: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub message: String,
    pub status: SosStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_volunteer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
