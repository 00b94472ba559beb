//! Disaster commands and the overview screen.

use super::{confirmer, generic_failure, report_refresh, show, Console};
use crate::actions;
use crate::cli::DisasterCommand;
use crate::errors::ConsoleError;
use crate::fetch;
use crate::filter::{CollectionView, FilterQuery, Selection};
use crate::models::{CreateDisasterRequest, Disaster};
use crate::render;

pub async fn run(console: &mut Console, command: DisasterCommand) -> Result<(), ConsoleError> {
    match command {
        DisasterCommand::List(args) => {
            let loaded = fetch::disasters(&console.client).await;
            show(console, &loaded, &args.query())
        }
        DisasterCommand::Show { id } => show_one(console, &id).await,
        DisasterCommand::Create(args) => {
            let request = CreateDisasterRequest::from(args);
            let mutation = actions::create_disaster(&console.client, &request)
                .await
                .map_err(|e| generic_failure("create disaster", e))?;
            println!("{}", mutation.summary);
            report_refresh(&mutation.refreshed, |d| refreshed_line(d));
            Ok(())
        }
        DisasterCommand::Delete { id, yes } => {
            let mut confirm = confirmer(yes);
            let mutation = actions::delete_disaster(&console.client, confirm.as_mut(), &id)
                .await
                .map_err(|e| generic_failure("delete disaster", e))?;
            println!("{}", mutation.summary);
            report_refresh(&mutation.refreshed, |d| refreshed_line(d));
            Ok(())
        }
    }
}

async fn show_one(console: &Console, id: &str) -> Result<(), ConsoleError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ConsoleError::Validation("Disaster id is required".to_string()));
    }
    let disaster = console.client.get_disaster(id).await?;

    if console.json {
        println!("{}", render::json(&disaster)?);
    } else {
        println!("{}", render::table(&[&disaster]));
    }
    Ok(())
}

fn refreshed_line(disasters: &[Disaster]) -> String {
    let active = disasters.iter().filter(|d| d.active).count();
    format!("{} disasters on record, {} active", disasters.len(), active)
}

pub async fn overview(console: &Console) -> Result<(), ConsoleError> {
    let overview = fetch::overview(&console.client).await;
    let active_only = FilterQuery::new("", Selection::All, Selection::Only("active".to_string()));
    let view = CollectionView::new(&overview.disasters.records, &active_only);

    if console.json {
        let stats = overview.stats.as_ref().ok();
        let body = serde_json::json!({
            "stats": stats,
            "statsError": overview.stats.as_ref().err().map(|e| e.message()),
            "disasters": {
                "source": overview.disasters.source,
                "summary": view.summary,
                "active": view.visible,
            },
        });
        println!("{}", render::json(&body)?);
        return Ok(());
    }

    match &overview.stats {
        Ok(stats) => {
            println!("Dashboard | {}", render::summary_line(stats)?);
        }
        Err(e) => render::notice(&format!("Dashboard stats unavailable: {}", e.message())),
    }
    if let Some(notice) = overview.disasters.notice() {
        render::notice(&format!("{} Showing sample disasters.", notice));
    }

    println!("Disasters | {}", render::summary_line(&view.summary)?);
    println!();
    println!("{}", render::table(&view.visible));
    Ok(())
}
