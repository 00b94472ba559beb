//! Data models for the relief console.
//!
//! These models follow the backend's JSON documents (camelCase fields).

mod admin;
mod alert;
mod danger_zone;
mod disaster;
mod resource;
mod route;
mod severity;
mod sos;
mod system;
mod volunteer;

pub use admin::*;
pub use alert::*;
pub use danger_zone::*;
pub use disaster::*;
pub use resource::*;
pub use route::*;
pub use severity::*;
pub use sos::*;
pub use system::*;
pub use volunteer::*;

/// Resolve a document id sent as `_id`, `id` or both. `_id` wins.
fn document_id(object_id: Option<String>, id: Option<String>) -> Result<String, String> {
    object_id
        .into_iter()
        .chain(id)
        .find(|value| !value.trim().is_empty())
        .ok_or_else(|| "missing field `_id` or `id`".to_string())
}
