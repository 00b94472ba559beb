//! Admin profile and session models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The logged-in administrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "AdminDocument")]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
struct AdminDocument {
    #[serde(rename = "_id")]
    object_id: Option<String>,
    id: Option<String>,
    name: String,
    email: String,
}

impl TryFrom<AdminDocument> for Admin {
    type Error = String;

    fn try_from(doc: AdminDocument) -> Result<Self, Self::Error> {
        Ok(Admin {
            id: super::document_id(doc.object_id, doc.id)?,
            name: doc.name,
            email: doc.email,
        })
    }
}

impl Admin {
    /// Profile used when the login response carries only a token.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: email.to_string(),
            name,
            email: email.to_string(),
        }
    }
}

/// Bearer token plus the profile it belongs to.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(skip_serializing)]
    pub token: String,
    pub admin: Admin,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/admin/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body. Every field is optional so a 2xx without a token
/// can be told apart from a malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub admin: Option<Admin>,
    #[serde(default)]
    pub message: Option<String>,
}
