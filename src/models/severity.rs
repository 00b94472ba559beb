//! Severity scale shared by disasters, SOS requests, danger zones and alerts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Four-step severity scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Radius thresholds in kilometres, checked from the top.
    pub const CRITICAL_RADIUS_KM: f64 = 10.0;
    pub const HIGH_RADIUS_KM: f64 = 5.0;
    pub const MEDIUM_RADIUS_KM: f64 = 2.0;

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Classify an affected radius.
    pub fn from_radius(radius_km: f64) -> Self {
        if radius_km >= Self::CRITICAL_RADIUS_KM {
            Severity::Critical
        } else if radius_km >= Self::HIGH_RADIUS_KM {
            Severity::High
        } else if radius_km >= Self::MEDIUM_RADIUS_KM {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-severity tally.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl SeverityCounts {
    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
            Severity::Critical => self.critical += 1,
        }
    }
}
