//! System panel: collection counts, export, collection wipe and full reset.

use super::{confirmer, generic_failure, report_refresh, Console};
use crate::actions;
use crate::cli::SystemCommand;
use crate::errors::ConsoleError;
use crate::models::{CollectionType, SystemStats};
use crate::render;

pub async fn run(console: &mut Console, command: SystemCommand) -> Result<(), ConsoleError> {
    match command {
        SystemCommand::Stats => {
            let stats = console.client.system_stats().await?;
            print_stats(console, &stats)
        }
        SystemCommand::Export { out } => {
            let bytes = actions::export_system(&console.client, &out)
                .await
                .map_err(|e| generic_failure("export data", e))?;
            println!("Exported {} bytes to {}", bytes, out.display());
            Ok(())
        }
        SystemCommand::DeleteCollection { collection, yes } => {
            let collection: CollectionType = collection.parse()?;
            let mut confirm = confirmer(yes);
            let mutation =
                actions::delete_collection(&console.client, confirm.as_mut(), collection)
                    .await
                    .map_err(|e| generic_failure("delete collection", e))?;
            println!("{}", mutation.summary);
            report_refresh(&mutation.refreshed, stats_line);
            Ok(())
        }
        SystemCommand::Reset { yes } => {
            let mut confirm = confirmer(yes);
            let mutation = actions::reset_system(&console.client, confirm.as_mut())
                .await
                .map_err(|e| generic_failure("reset system", e))?;
            println!("{}", mutation.summary);
            report_refresh(&mutation.refreshed, stats_line);
            Ok(())
        }
    }
}

fn stats_line(stats: &SystemStats) -> String {
    format!(
        "{} documents remain across {} collections",
        stats.total(),
        stats.counts.len()
    )
}

fn print_stats(console: &Console, stats: &SystemStats) -> Result<(), ConsoleError> {
    if console.json {
        println!("{}", render::json(stats)?);
        return Ok(());
    }

    println!("{}", stats_table(stats));
    println!("{}", stats_line(stats));
    Ok(())
}

/// Known collections first, in a fixed order, then anything else the backend reports.
fn stats_table(stats: &SystemStats) -> String {
    let mut rows: Vec<(&str, u64)> = CollectionType::ALL
        .iter()
        .map(|c| (c.as_str(), stats.count(*c)))
        .collect();
    rows.extend(
        stats
            .counts
            .iter()
            .filter(|(name, _)| name.parse::<CollectionType>().is_err())
            .map(|(name, count)| (name.as_str(), *count)),
    );

    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(name, count)| format!("{:<width$}  {}", name, count, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
