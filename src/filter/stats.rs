//! Summary counts over whole collections.

use std::fmt::Debug;

use serde::Serialize;

use crate::models::{
    Alert, AlertStatus, DangerZone, Disaster, Resource, RouteStatus, SafeRoute, Severity,
    SeverityCounts, SosRequest, SosStatus, StockLevel, Volunteer, VolunteerStatus,
};

/// Reduces a full collection to its headline counts.
pub trait Summarize: Sized {
    type Summary: Serialize + Debug + PartialEq;

    fn summarize(all: &[Self]) -> Self::Summary;
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DisasterSummary {
    pub total: usize,
    pub active: usize,
    pub by_severity: SeverityCounts,
}

impl Summarize for Disaster {
    type Summary = DisasterSummary;

    fn summarize(all: &[Self]) -> DisasterSummary {
        all.iter().fold(DisasterSummary::default(), |mut acc, d| {
            acc.total += 1;
            if d.active {
                acc.active += 1;
            }
            acc.by_severity.add(d.severity());
            acc
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct VolunteerSummary {
    pub total: usize,
    pub available: usize,
    pub busy: usize,
    pub training: usize,
    pub offline: usize,
    pub average_rating: f32,
    pub completed_missions: u64,
}

impl Summarize for Volunteer {
    type Summary = VolunteerSummary;

    fn summarize(all: &[Self]) -> VolunteerSummary {
        let mut summary = VolunteerSummary::default();
        let mut rating_sum = 0.0f32;
        for v in all {
            summary.total += 1;
            match v.status {
                VolunteerStatus::Available => summary.available += 1,
                VolunteerStatus::Busy => summary.busy += 1,
                VolunteerStatus::Training => summary.training += 1,
                VolunteerStatus::Offline => summary.offline += 1,
            }
            rating_sum += v.rating;
            summary.completed_missions += u64::from(v.completed_missions);
        }
        if summary.total > 0 {
            summary.average_rating = rating_sum / summary.total as f32;
        }
        summary
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SosSummary {
    pub total: usize,
    pub pending: usize,
    pub assigned: usize,
    pub en_route: usize,
    pub resolved: usize,
    pub critical: usize,
}

impl Summarize for SosRequest {
    type Summary = SosSummary;

    fn summarize(all: &[Self]) -> SosSummary {
        all.iter().fold(SosSummary::default(), |mut acc, s| {
            acc.total += 1;
            match s.status {
                SosStatus::Pending => acc.pending += 1,
                SosStatus::Assigned => acc.assigned += 1,
                SosStatus::EnRoute => acc.en_route += 1,
                SosStatus::Resolved => acc.resolved += 1,
            }
            if s.severity == Severity::Critical {
                acc.critical += 1;
            }
            acc
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ResourceSummary {
    pub items: usize,
    pub critical: usize,
    pub low: usize,
    pub medium: usize,
    pub good: usize,
    pub total_stock: u64,
    pub available_stock: u64,
    pub allocated_stock: u64,
}

impl Summarize for Resource {
    type Summary = ResourceSummary;

    fn summarize(all: &[Self]) -> ResourceSummary {
        all.iter().fold(ResourceSummary::default(), |mut acc, r| {
            acc.items += 1;
            match r.stock_level() {
                StockLevel::Critical => acc.critical += 1,
                StockLevel::Low => acc.low += 1,
                StockLevel::Medium => acc.medium += 1,
                StockLevel::Good => acc.good += 1,
            }
            acc.total_stock += u64::from(r.total_stock);
            acc.available_stock += u64::from(r.available_stock);
            acc.allocated_stock += u64::from(r.allocated_stock);
            acc
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DangerZoneSummary {
    pub total: usize,
    pub active: usize,
    pub by_severity: SeverityCounts,
}

impl Summarize for DangerZone {
    type Summary = DangerZoneSummary;

    fn summarize(all: &[Self]) -> DangerZoneSummary {
        all.iter().fold(DangerZoneSummary::default(), |mut acc, z| {
            acc.total += 1;
            if z.active {
                acc.active += 1;
            }
            acc.by_severity.add(z.severity);
            acc
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AlertSummary {
    pub total: usize,
    pub draft: usize,
    pub scheduled: usize,
    pub sent: usize,
    pub cancelled: usize,
    /// Recipients of sent alerts only
    pub recipients_reached: u64,
}

impl Summarize for Alert {
    type Summary = AlertSummary;

    fn summarize(all: &[Self]) -> AlertSummary {
        all.iter().fold(AlertSummary::default(), |mut acc, a| {
            acc.total += 1;
            match a.status {
                AlertStatus::Draft => acc.draft += 1,
                AlertStatus::Scheduled => acc.scheduled += 1,
                AlertStatus::Sent => {
                    acc.sent += 1;
                    acc.recipients_reached += u64::from(a.recipients);
                }
                AlertStatus::Cancelled => acc.cancelled += 1,
            }
            acc
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RouteSummary {
    pub total: usize,
    pub open: usize,
    pub congested: usize,
    pub closed: usize,
    /// Combined capacity of open routes
    pub open_capacity: u64,
}

impl Summarize for SafeRoute {
    type Summary = RouteSummary;

    fn summarize(all: &[Self]) -> RouteSummary {
        all.iter().fold(RouteSummary::default(), |mut acc, r| {
            acc.total += 1;
            match r.status {
                RouteStatus::Open => {
                    acc.open += 1;
                    acc.open_capacity += u64::from(r.capacity);
                }
                RouteStatus::Congested => acc.congested += 1,
                RouteStatus::Closed => acc.closed += 1,
            }
            acc
        })
    }
}
