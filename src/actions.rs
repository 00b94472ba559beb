//! Mutation actions.
//!
//! Destructive actions ask for confirmation first and send nothing when it
//! is declined. After any successful mutation the affected data is fetched
//! again from the backend; nothing is updated optimistically.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::api::ApiClient;
use crate::errors::ConsoleError;
use crate::models::{CollectionType, CreateDisasterRequest, Disaster, SystemStats};

/// Confirmation step in front of destructive actions.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Accepts every prompt (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Asks on the terminal; only `y` or `yes` confirms.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        if write!(stderr, "{} [y/N] ", prompt).and_then(|_| stderr.flush()).is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Result of a mutation: what happened, and the state re-read afterwards.
#[derive(Debug)]
pub struct Mutation<T> {
    pub summary: String,
    pub refreshed: Result<T, ConsoleError>,
}

fn require_confirmation(confirm: &mut dyn Confirm, prompt: &str) -> Result<(), ConsoleError> {
    if confirm.confirm(prompt) {
        Ok(())
    } else {
        tracing::warn!("Declined: {}", prompt);
        Err(ConsoleError::Declined("Cancelled, nothing was changed".to_string()))
    }
}

pub async fn create_disaster(
    client: &ApiClient,
    request: &CreateDisasterRequest,
) -> Result<Mutation<Vec<Disaster>>, ConsoleError> {
    request.validate()?;

    let created = client.create_disaster(request).await?;
    tracing::info!("Created disaster {}", created.id);

    Ok(Mutation {
        summary: format!(
            "Disaster {} created ({}, {} severity)",
            created.id,
            created.kind,
            created.severity()
        ),
        refreshed: client.list_disasters().await,
    })
}

pub async fn delete_disaster(
    client: &ApiClient,
    confirm: &mut dyn Confirm,
    id: &str,
) -> Result<Mutation<Vec<Disaster>>, ConsoleError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ConsoleError::Validation("Disaster id is required".to_string()));
    }
    require_confirmation(
        confirm,
        &format!("Delete disaster {}? This cannot be undone.", id),
    )?;

    client.delete_disaster(id).await?;
    tracing::info!("Deleted disaster {}", id);

    Ok(Mutation {
        summary: format!("Disaster {} deleted", id),
        refreshed: client.list_disasters().await,
    })
}

pub async fn delete_collection(
    client: &ApiClient,
    confirm: &mut dyn Confirm,
    collection: CollectionType,
) -> Result<Mutation<SystemStats>, ConsoleError> {
    require_confirmation(
        confirm,
        &format!("Delete ALL documents in '{}'? This cannot be undone.", collection),
    )?;

    client.delete_collection(collection).await?;
    tracing::info!("Deleted collection {}", collection);

    Ok(Mutation {
        summary: format!("Collection '{}' deleted", collection),
        refreshed: client.system_stats().await,
    })
}

pub async fn reset_system(
    client: &ApiClient,
    confirm: &mut dyn Confirm,
) -> Result<Mutation<SystemStats>, ConsoleError> {
    require_confirmation(
        confirm,
        "Reset the whole system? Every collection will be wiped.",
    )?;

    client.reset_system().await?;
    tracing::info!("System reset");

    Ok(Mutation {
        summary: "System reset complete".to_string(),
        refreshed: client.system_stats().await,
    })
}

/// Download the system export and write it to `path` as pretty JSON.
pub async fn export_system(client: &ApiClient, path: &Path) -> Result<usize, ConsoleError> {
    let document = client.export_system().await?;
    let bytes = serde_json::to_vec_pretty(&document)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, &bytes).await?;
    tracing::info!("Exported {} bytes to {}", bytes.len(), path.display());

    Ok(bytes.len())
}
