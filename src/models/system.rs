//! Dashboard and system-panel models.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConsoleError;

/// Headline counters from `GET /api/dashboard/stats`.
///
/// `totalDisasters` is required so an unrelated body fails to decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_disasters: u64,
    #[serde(default)]
    pub active_disasters: u64,
    #[serde(default)]
    pub total_sos: u64,
    #[serde(default)]
    pub pending_sos: u64,
    #[serde(default)]
    pub total_volunteers: u64,
    #[serde(default)]
    pub available_volunteers: u64,
    #[serde(default)]
    pub total_resources: u64,
}

/// Document counts per backend collection, from `GET /api/danger-zone/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SystemStats {
    pub counts: BTreeMap<String, u64>,
}

impl SystemStats {
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn count(&self, collection: CollectionType) -> u64 {
        self.counts.get(collection.as_str()).copied().unwrap_or(0)
    }
}

/// Backend collections the system panel may wipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionType {
    Disasters,
    Sos,
    Volunteers,
    Resources,
    Alerts,
    DangerZones,
    Users,
}

impl CollectionType {
    pub const ALL: [CollectionType; 7] = [
        CollectionType::Disasters,
        CollectionType::Sos,
        CollectionType::Volunteers,
        CollectionType::Resources,
        CollectionType::Alerts,
        CollectionType::DangerZones,
        CollectionType::Users,
    ];

    /// Path segment used by `DELETE /api/danger-zone/collection/:type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionType::Disasters => "disasters",
            CollectionType::Sos => "sos",
            CollectionType::Volunteers => "volunteers",
            CollectionType::Resources => "resources",
            CollectionType::Alerts => "alerts",
            CollectionType::DangerZones => "dangerzones",
            CollectionType::Users => "users",
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionType {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CollectionType::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                ConsoleError::Validation(format!(
                    "Unknown collection '{}'. Expected one of: {}",
                    s,
                    CollectionType::ALL.map(|c| c.as_str()).join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_type_parse() {
        assert_eq!("SOS".parse::<CollectionType>().unwrap(), CollectionType::Sos);
        assert_eq!(
            "dangerzones".parse::<CollectionType>().unwrap(),
            CollectionType::DangerZones
        );
        assert!("everything".parse::<CollectionType>().is_err());
    }

    #[test]
    fn test_system_stats_from_flat_map() {
        let stats: SystemStats =
            serde_json::from_str(r#"{"disasters": 4, "sos": 11, "users": 2}"#).unwrap();
        assert_eq!(stats.count(CollectionType::Sos), 11);
        assert_eq!(stats.count(CollectionType::Alerts), 0);
        assert_eq!(stats.total(), 17);
    }
}
