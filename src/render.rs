//! Terminal output: text tables, JSON, and notices.

use chrono::Utc;
use serde::Serialize;

use crate::errors::ConsoleError;
use crate::models::{Alert, DangerZone, Disaster, Resource, SafeRoute, SosRequest, Volunteer};

/// A record that renders as one table row.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Render rows as a left-aligned text table.
pub fn table<T: TableRow>(rows: &[&T]) -> String {
    let body: Vec<Vec<String>> = rows.iter().map(|r| r.cells()).collect();

    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format_line(T::HEADERS.iter().map(|h| h.to_string()).collect()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(body.into_iter().map(format_line));
    lines.join("\n")
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, ConsoleError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Flatten a summary into `key=value` pairs, nested keys joined with dots.
pub fn summary_line<T: Serialize>(summary: &T) -> Result<String, ConsoleError> {
    fn walk(prefix: &str, value: &serde_json::Value, out: &mut Vec<String>) {
        match value {
            serde_json::Value::Object(map) => {
                for (key, inner) in map {
                    let key = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    walk(&key, inner, out);
                }
            }
            serde_json::Value::Number(n) if n.is_f64() => {
                out.push(format!("{}={:.2}", prefix, n.as_f64().unwrap_or_default()))
            }
            other => out.push(format!("{}={}", prefix, other)),
        }
    }

    let mut parts = Vec::new();
    walk("", &serde_json::to_value(summary)?, &mut parts);
    Ok(parts.join(", "))
}

/// Print a notice on stderr, the console's equivalent of a toast.
pub fn notice(message: &str) {
    eprintln!("! {}", message);
}

pub fn error_notice(err: &ConsoleError) {
    eprintln!("error: {}", err.message());
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

impl TableRow for Disaster {
    const HEADERS: &'static [&'static str] = &[
        "ID", "TYPE", "SEVERITY", "RADIUS", "LAT", "LON", "RESOURCES", "STATUS", "DESCRIPTION",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.kind.clone(),
            self.severity().to_string(),
            format!("{:.1}km", self.radius),
            format!("{:.4}", self.location.latitude()),
            format!("{:.4}", self.location.longitude()),
            self.resources.total().to_string(),
            self.status_label().to_string(),
            truncate(&self.description, 40),
        ]
    }
}

impl TableRow for Volunteer {
    const HEADERS: &'static [&'static str] = &[
        "ID", "NAME", "SPECIALIZATION", "LOCATION", "STATUS", "RATING", "MISSIONS",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.specialization.clone(),
            self.location.clone(),
            self.status.as_str().to_string(),
            format!("{:.1}", self.rating),
            self.completed_missions.to_string(),
        ]
    }
}

impl TableRow for SosRequest {
    const HEADERS: &'static [&'static str] = &[
        "ID", "REQUESTER", "TYPE", "SEVERITY", "STATUS", "LOCATION", "ASSIGNED", "MESSAGE",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.requester.clone(),
            self.kind.clone(),
            self.severity.to_string(),
            self.status.as_str().to_string(),
            self.location.clone(),
            self.assigned_volunteer.clone().unwrap_or_else(|| "-".to_string()),
            truncate(&self.message, 40),
        ]
    }
}

impl TableRow for Resource {
    const HEADERS: &'static [&'static str] = &[
        "ID", "NAME", "CATEGORY", "AVAILABLE", "ALLOCATED", "TOTAL", "LEVEL", "EXPIRY",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            format!("{} ({:.0}%)", self.available_stock, self.available_pct()),
            self.allocated_stock.to_string(),
            self.total_stock.to_string(),
            self.stock_level().as_str().to_string(),
            match self.expiry {
                Some(date) if self.is_expired(Utc::now().date_naive()) => {
                    format!("{} (expired)", date)
                }
                Some(date) => date.to_string(),
                None => "-".to_string(),
            },
        ]
    }
}

impl TableRow for DangerZone {
    const HEADERS: &'static [&'static str] =
        &["ID", "NAME", "TYPE", "SEVERITY", "LOCATION", "RADIUS", "ACTIVE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.kind.clone(),
            self.severity.to_string(),
            self.location.clone(),
            format!("{:.1}km", self.radius),
            if self.active { "yes" } else { "no" }.to_string(),
        ]
    }
}

impl TableRow for Alert {
    const HEADERS: &'static [&'static str] =
        &["ID", "TITLE", "SEVERITY", "AREA", "STATUS", "RECIPIENTS"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            truncate(&self.title, 32),
            self.severity.to_string(),
            self.target_area.clone(),
            self.status.as_str().to_string(),
            self.recipients.to_string(),
        ]
    }
}

impl TableRow for SafeRoute {
    const HEADERS: &'static [&'static str] = &[
        "ID", "NAME", "ORIGIN", "DESTINATION", "DISTANCE", "STATUS", "CAPACITY",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.origin.clone(),
            self.destination.clone(),
            format!("{:.1}km", self.distance_km),
            self.status.as_str().to_string(),
            format!("{}/h", self.capacity),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    #[test]
    fn test_table_aligns_columns() {
        let volunteers = samples::volunteers();
        let rows: Vec<&Volunteer> = volunteers.iter().take(2).collect();
        let out = table(&rows);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("--"));
        let status_col = lines[0].find("STATUS").unwrap();
        assert_eq!(&lines[2][status_col..status_col + 9], "available");
    }

    #[test]
    fn test_empty_table_keeps_headers() {
        let out = table::<Alert>(&[]);
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_summary_line_flattens_nested_counts() {
        let disasters = samples::disasters();
        let summary = <Disaster as crate::filter::Summarize>::summarize(&disasters);
        let line = summary_line(&summary).unwrap();
        assert!(line.contains("total=5"));
        assert!(line.contains("by_severity.critical="));
    }

    #[test]
    fn test_disaster_row_totals_resources() {
        let disaster = &samples::disasters()[0];
        let cells = disaster.cells();
        let column = Disaster::HEADERS
            .iter()
            .position(|h| *h == "RESOURCES")
            .unwrap();

        assert_eq!(cells.len(), Disaster::HEADERS.len());
        assert_eq!(cells[column], disaster.resources.total().to_string());
    }

    #[test]
    fn test_resource_row_marks_expired_stock() {
        let mut resource = samples::resources().remove(0);
        let column = Resource::HEADERS.iter().position(|h| *h == "EXPIRY").unwrap();

        resource.expiry = chrono::NaiveDate::from_ymd_opt(2020, 1, 31);
        assert_eq!(resource.cells()[column], "2020-01-31 (expired)");

        resource.expiry = chrono::NaiveDate::from_ymd_opt(2999, 12, 31);
        assert_eq!(resource.cells()[column], "2999-12-31");

        resource.expiry = None;
        assert_eq!(resource.cells()[column], "-");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Überschwemmung", 5), "Über…");
    }
}
