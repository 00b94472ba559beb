//! Relief Console
//!
//! Command-line admin console for the disaster-management REST backend:
//! session handling, collection views with client-side filtering, and the
//! create/delete/reset actions of the admin dashboard.

mod actions;
mod api;
mod cli;
mod commands;
mod config;
mod db;
mod errors;
mod fetch;
mod filter;
mod models;
mod render;
mod samples;
mod session;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::ApiClient;
use cli::Cli;
use commands::Console;
use config::Config;
use db::SessionRepository;
use errors::ConsoleError;
use session::SessionStore;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            render::error_notice(&e);
            return ExitCode::from(2);
        }
    };

    // Initialize logging
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Backend: {}", config.api_base_url);
    tracing::debug!("Session store: {:?}", config.session_path);

    match run(cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(ConsoleError::Declined(message)) => {
            render::notice(&message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            render::error_notice(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: &Config) -> Result<(), ConsoleError> {
    let pool = db::init_database(&config.session_path).await?;
    let session = SessionStore::restore(SessionRepository::new(pool)).await?;
    let client = ApiClient::new(config)?;

    let mut console = Console::new(client, session, cli.json);
    commands::dispatch(&mut console, cli.command).await
}
