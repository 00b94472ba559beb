//! Broadcast alert model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Severity;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Draft,
    Scheduled,
    Sent,
    Cancelled,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Draft => "draft",
            AlertStatus::Scheduled => "scheduled",
            AlertStatus::Sent => "sent",
            AlertStatus::Cancelled => "cancelled",
        }
    }
}

/// A notification broadcast to people in a target area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub target_area: String,
    pub status: AlertStatus,
    pub recipients: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
