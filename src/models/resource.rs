//! Relief resource inventory model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stock health bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Critical,
    Low,
    Medium,
    Good,
}

impl StockLevel {
    /// Percentage thresholds for the buckets above critical.
    pub const CRITICAL_PCT: f64 = 10.0;
    pub const LOW_PCT: f64 = 30.0;
    pub const MEDIUM_PCT: f64 = 60.0;

    pub fn as_str(&self) -> &'static str {
        match self {
            StockLevel::Critical => "critical",
            StockLevel::Low => "low",
            StockLevel::Medium => "medium",
            StockLevel::Good => "good",
        }
    }
}

/// An inventory line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub location: String,
    pub total_stock: u32,
    pub available_stock: u32,
    pub allocated_stock: u32,
    pub critical_level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<NaiveDate>,
}

impl Resource {
    /// Available stock as a percentage of total stock.
    pub fn available_pct(&self) -> f64 {
        if self.total_stock == 0 {
            return 0.0;
        }
        f64::from(self.available_stock) / f64::from(self.total_stock) * 100.0
    }

    pub fn stock_level(&self) -> StockLevel {
        let pct = self.available_pct();
        if self.total_stock == 0
            || self.available_stock <= self.critical_level
            || pct < StockLevel::CRITICAL_PCT
        {
            StockLevel::Critical
        } else if pct < StockLevel::LOW_PCT {
            StockLevel::Low
        } else if pct < StockLevel::MEDIUM_PCT {
            StockLevel::Medium
        } else {
            StockLevel::Good
        }
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry.is_some_and(|expiry| expiry < today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(total: u32, available: u32, critical_level: u32) -> Resource {
        Resource {
            id: "r".to_string(),
            name: "Water bottles".to_string(),
            category: "water".to_string(),
            location: String::new(),
            total_stock: total,
            available_stock: available,
            allocated_stock: total - available,
            critical_level,
            expiry: None,
        }
    }

    #[test]
    fn test_stock_level_buckets() {
        assert_eq!(stock(1000, 50, 10).stock_level(), StockLevel::Critical);
        assert_eq!(stock(1000, 200, 10).stock_level(), StockLevel::Low);
        assert_eq!(stock(1000, 450, 10).stock_level(), StockLevel::Medium);
        assert_eq!(stock(1000, 600, 10).stock_level(), StockLevel::Good);
    }

    #[test]
    fn test_critical_level_overrides_percentage() {
        assert_eq!(stock(100, 80, 80).stock_level(), StockLevel::Critical);
    }

    #[test]
    fn test_empty_inventory_is_critical() {
        assert_eq!(stock(0, 0, 0).stock_level(), StockLevel::Critical);
        assert_eq!(stock(0, 0, 0).available_pct(), 0.0);
    }

    #[test]
    fn test_expiry() {
        let mut r = stock(10, 10, 0);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(!r.is_expired(today));
        r.expiry = NaiveDate::from_ymd_opt(2024, 5, 31);
        assert!(r.is_expired(today));
    }
}
