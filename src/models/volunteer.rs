//! Volunteer model.

use serde::{Deserialize, Serialize};

/// Volunteer availability. No transition rules are enforced here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    Available,
    Busy,
    Training,
    Offline,
}

impl VolunteerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolunteerStatus::Available => "available",
            VolunteerStatus::Busy => "busy",
            VolunteerStatus::Training => "training",
            VolunteerStatus::Offline => "offline",
        }
    }
}

/// A registered volunteer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub specialization: String,
    pub location: String,
    pub status: VolunteerStatus,
    pub rating: f32,
    pub completed_missions: u32,
}
