//! Command handlers.
//!
//! Each handler runs one CLI command against the shared [`Console`] state.

mod disasters;
mod session;
mod system;

use serde::Serialize;

use crate::actions::{AssumeYes, Confirm, TerminalConfirm};
use crate::api::ApiClient;
use crate::cli::{Command, ListCommand};
use crate::errors::ConsoleError;
use crate::fetch;
use crate::filter::{CollectionView, FilterQuery, Filterable, Summarize};
use crate::render::{self, TableRow};
use crate::session::SessionStore;

/// State shared by every command.
pub struct Console {
    pub client: ApiClient,
    pub session: SessionStore,
    pub json: bool,
}

impl Console {
    pub fn new(client: ApiClient, session: SessionStore, json: bool) -> Self {
        let client = client.with_token(session.token().map(str::to_string));
        Self {
            client,
            session,
            json,
        }
    }
}

pub async fn dispatch(console: &mut Console, command: Command) -> Result<(), ConsoleError> {
    match command {
        Command::Login { email, password } => session::login(console, &email, &password).await,
        Command::Logout => session::logout(console).await,
        Command::Whoami => session::whoami(console),
        Command::Overview => disasters::overview(console).await,
        Command::Disasters { command } => disasters::run(console, command).await,
        Command::Volunteers {
            command: ListCommand::List(args),
        } => show(console, &fetch::volunteers(), &args.query()),
        Command::Sos {
            command: ListCommand::List(args),
        } => show(console, &fetch::sos_requests(), &args.query()),
        Command::Resources {
            command: ListCommand::List(args),
        } => show(console, &fetch::resources(), &args.query()),
        Command::Zones {
            command: ListCommand::List(args),
        } => show(console, &fetch::danger_zones(), &args.query()),
        Command::Alerts {
            command: ListCommand::List(args),
        } => show(console, &fetch::alerts(), &args.query()),
        Command::Routes {
            command: ListCommand::List(args),
        } => show(console, &fetch::safe_routes(), &args.query()),
        Command::System { command } => system::run(console, command).await,
    }
}

/// Print a filtered collection with the totals of the whole collection.
fn show<T>(console: &Console, loaded: &fetch::Loaded<T>, query: &FilterQuery) -> Result<(), ConsoleError>
where
    T: Filterable + Summarize + TableRow + Serialize,
{
    if let Some(notice) = loaded.notice() {
        render::notice(&format!("{} Showing sample data.", notice));
    }
    println!("{}", render_view(loaded, query, console.json)?);
    Ok(())
}

fn render_view<T>(loaded: &fetch::Loaded<T>, query: &FilterQuery, json: bool) -> Result<String, ConsoleError>
where
    T: Filterable + Summarize + TableRow + Serialize,
{
    let view = CollectionView::new(&loaded.records, query);

    if json {
        let body = serde_json::json!({
            "source": loaded.source,
            "summary": view.summary,
            "records": view.visible,
        });
        return render::json(&body);
    }

    Ok(format!(
        "{}\n\n{} of {} shown | {}",
        render::table(&view.visible),
        view.visible.len(),
        loaded.records.len(),
        render::summary_line(&view.summary)?
    ))
}

/// Report the re-fetch that follows a mutation.
fn report_refresh<T, F>(refreshed: &Result<T, ConsoleError>, describe: F)
where
    F: FnOnce(&T) -> String,
{
    match refreshed {
        Ok(value) => println!("{}", describe(value)),
        Err(e) => render::notice(&format!("Could not refresh: {}", e.message())),
    }
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalConfirm)
    }
}

/// Collapse backend failures of mutations into one generic notice.
fn generic_failure(action: &str, err: ConsoleError) -> ConsoleError {
    match err {
        ConsoleError::Server { status, .. } => ConsoleError::Server {
            status,
            message: format!("Failed to {}", action),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Selection;
    use serde_json::Value;

    fn delhi_available() -> FilterQuery {
        FilterQuery::new(
            "Delhi",
            Selection::All,
            Selection::Only("available".to_string()),
        )
    }

    #[test]
    fn test_mutation_server_failure_becomes_generic() {
        let err = generic_failure(
            "delete disaster",
            ConsoleError::Server {
                status: 500,
                message: "E11000 duplicate key".to_string(),
            },
        );

        match err {
            ConsoleError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to delete disaster");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_mutation_auth_and_network_failures_keep_their_message() {
        let unauthorized = generic_failure(
            "reset system",
            ConsoleError::from_status(401, "jwt expired"),
        );
        assert!(matches!(unauthorized, ConsoleError::Unauthorized(_)));
        assert!(unauthorized.message().contains("log in again"));

        let network = generic_failure(
            "create disaster",
            ConsoleError::Network("connection refused".to_string()),
        );
        assert!(network.message().starts_with("Unable to connect to server"));
        assert!(network.message().contains("connection refused"));

        let declined = generic_failure(
            "delete collection",
            ConsoleError::Declined("Cancelled, nothing was changed".to_string()),
        );
        assert!(matches!(declined, ConsoleError::Declined(_)));
    }

    #[test]
    fn test_json_view_summarizes_whole_collection() {
        let loaded = fetch::volunteers();

        let out = render_view(&loaded, &delhi_available(), true).unwrap();
        let body: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(body["source"]["kind"], "sample");
        let ids: Vec<&str> = body["records"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["v1", "v3"]);
        assert_eq!(body["summary"]["total"], 5);
    }

    #[test]
    fn test_text_view_summarizes_whole_collection() {
        let loaded = fetch::volunteers();

        let out = render_view(&loaded, &delhi_available(), false).unwrap();
        let footer = out.lines().last().unwrap();

        assert!(footer.starts_with("2 of 5 shown | "));
        assert!(footer.contains("total=5"));
        assert_eq!(out.lines().filter(|l| l.starts_with("v")).count(), 2);
    }

    #[test]
    fn test_view_with_no_matches_keeps_totals() {
        let loaded = fetch::volunteers();
        let query = FilterQuery::new("Atlantis", Selection::All, Selection::All);

        let out = render_view(&loaded, &query, false).unwrap();
        let footer = out.lines().last().unwrap();
        assert!(footer.starts_with("0 of 5 shown | "));
        assert!(footer.contains("available=2"));
        assert!(footer.contains("total=5"));
    }
}
