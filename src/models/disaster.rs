//! Disaster model matching the backend disaster document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Severity;
use crate::errors::ConsoleError;

/// GeoJSON point, coordinates ordered `[longitude, latitude]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    #[serde(rename = "type", default = "point_kind")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

fn point_kind() -> String {
    "Point".to_string()
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            kind: point_kind(),
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    /// Reject coordinates outside [-90, 90] latitude or [-180, 180] longitude.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if !(-90.0..=90.0).contains(&self.latitude()) {
            return Err(ConsoleError::Validation(format!(
                "Latitude must be between -90 and 90 (got {})",
                self.latitude()
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude()) {
            return Err(ConsoleError::Validation(format!(
                "Longitude must be between -180 and 180 (got {})",
                self.longitude()
            )));
        }
        Ok(())
    }
}

/// Resource counts committed to a disaster, by category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCounts {
    #[serde(default)]
    pub food: u32,
    #[serde(default)]
    pub water: u32,
    #[serde(default)]
    pub medical: u32,
    #[serde(default)]
    pub shelter: u32,
}

impl ResourceCounts {
    pub fn total(&self) -> u64 {
        u64::from(self.food) + u64::from(self.water) + u64::from(self.medical) + u64::from(self.shelter)
    }
}

/// A disaster reported to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "DisasterDocument")]
pub struct Disaster {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub location: GeoPoint,
    /// Affected radius in kilometres
    pub radius: f64,
    pub resources: ResourceCounts,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Disaster as it arrives on the wire, with the id under `_id`, `id` or both.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisasterDocument {
    #[serde(rename = "_id")]
    object_id: Option<String>,
    id: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    description: String,
    location: GeoPoint,
    radius: f64,
    #[serde(default)]
    resources: ResourceCounts,
    #[serde(default = "default_active", alias = "isActive")]
    active: bool,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl TryFrom<DisasterDocument> for Disaster {
    type Error = String;

    fn try_from(doc: DisasterDocument) -> Result<Self, Self::Error> {
        Ok(Disaster {
            id: super::document_id(doc.object_id, doc.id)?,
            kind: doc.kind,
            description: doc.description,
            location: doc.location,
            radius: doc.radius,
            resources: doc.resources,
            active: doc.active,
            created_at: doc.created_at,
        })
    }
}

impl Disaster {
    /// Severity derived from the affected radius.
    pub fn severity(&self) -> Severity {
        Severity::from_radius(self.radius)
    }

    pub fn status_label(&self) -> &'static str {
        if self.active {
            "active"
        } else {
            "inactive"
        }
    }
}

/// Request body for creating a new disaster.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDisasterRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub location: GeoPoint,
    pub radius: f64,
    pub resources: ResourceCounts,
}

impl CreateDisasterRequest {
    /// Check required fields and coordinate ranges before anything is sent.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.kind.trim().is_empty() {
            return Err(ConsoleError::Validation(
                "Disaster type is required".to_string(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(ConsoleError::Validation(
                "Description is required".to_string(),
            ));
        }
        self.location.validate()?;
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ConsoleError::Validation(format!(
                "Radius must be a non-negative number of kilometres (got {})",
                self.radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(lat: f64, lon: f64) -> CreateDisasterRequest {
        CreateDisasterRequest {
            kind: "flood".to_string(),
            description: "River overflow".to_string(),
            location: GeoPoint::new(lat, lon),
            radius: 3.0,
            resources: ResourceCounts::default(),
        }
    }

    #[test]
    fn test_coordinate_bounds_are_inclusive() {
        assert!(request(90.0, 180.0).validate().is_ok());
        assert!(request(-90.0, -180.0).validate().is_ok());
        assert!(request(28.61, 77.21).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        assert!(request(90.01, 0.0).validate().is_err());
        assert!(request(-91.0, 0.0).validate().is_err());
        assert!(request(0.0, 180.5).validate().is_err());
        assert!(request(0.0, -200.0).validate().is_err());
        assert!(request(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn test_required_fields() {
        let mut req = request(10.0, 10.0);
        req.kind = "  ".to_string();
        assert!(matches!(req.validate(), Err(ConsoleError::Validation(_))));

        let mut req = request(10.0, 10.0);
        req.description.clear();
        assert!(matches!(req.validate(), Err(ConsoleError::Validation(_))));
    }

    #[test]
    fn test_negative_radius_rejected() {
        let mut req = request(10.0, 10.0);
        req.radius = -1.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_deserialize_backend_document() {
        let raw = r#"{
            "_id": "665f1c2e9b1e8a0012ab34cd",
            "type": "earthquake",
            "description": "Magnitude 6.1 near Shimla",
            "location": { "type": "Point", "coordinates": [77.17, 31.10] },
            "radius": 12,
            "resources": { "food": 40, "water": 120 },
            "createdAt": "2024-06-04T10:15:00Z"
        }"#;

        let disaster: Disaster = serde_json::from_str(raw).unwrap();
        assert_eq!(disaster.id, "665f1c2e9b1e8a0012ab34cd");
        assert_eq!(disaster.kind, "earthquake");
        assert_eq!(disaster.location.latitude(), 31.10);
        assert_eq!(disaster.location.longitude(), 77.17);
        assert_eq!(disaster.resources.water, 120);
        assert_eq!(disaster.resources.medical, 0);
        assert!(disaster.active);
        assert_eq!(disaster.severity(), Severity::Critical);
    }

    #[test]
    fn test_document_with_both_id_keys() {
        let raw = r#"[{
            "_id": "665f1c2e9b1e8a0012ab34cd",
            "id": "665f1c2e9b1e8a0012ab34cd",
            "type": "flood",
            "location": { "type": "Point", "coordinates": [77.2, 28.6] },
            "radius": 3
        }, {
            "id": "plain-id",
            "type": "fire",
            "location": { "type": "Point", "coordinates": [72.8, 19.0] },
            "radius": 1
        }]"#;

        let disasters: Vec<Disaster> = serde_json::from_str(raw).unwrap();
        assert_eq!(disasters[0].id, "665f1c2e9b1e8a0012ab34cd");
        assert_eq!(disasters[1].id, "plain-id");
    }

    #[test]
    fn test_document_without_id_rejected() {
        let raw = r#"{
            "type": "flood",
            "location": { "type": "Point", "coordinates": [77.2, 28.6] },
            "radius": 3
        }"#;

        let err = serde_json::from_str::<Disaster>(raw).unwrap_err();
        assert!(err.to_string().contains("`_id` or `id`"));
    }

    #[test]
    fn test_serialized_disaster_reads_back() {
        let raw = r#"{
            "_id": "d-1",
            "type": "cyclone",
            "location": { "type": "Point", "coordinates": [85.8, 20.3] },
            "radius": 15,
            "isActive": false
        }"#;
        let disaster: Disaster = serde_json::from_str(raw).unwrap();
        let again: Disaster = serde_json::to_string(&disaster)
            .and_then(|json| serde_json::from_str(&json))
            .unwrap();

        assert_eq!(again.id, "d-1");
        assert!(!again.active);
    }

    #[test]
    fn test_create_request_wire_shape() {
        let value = serde_json::to_value(request(28.6, 77.2)).unwrap();
        assert_eq!(value["type"], "flood");
        assert_eq!(value["location"]["type"], "Point");
        assert_eq!(value["location"]["coordinates"][0], 77.2);
        assert_eq!(value["location"]["coordinates"][1], 28.6);
    }
}
