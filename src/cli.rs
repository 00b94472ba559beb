//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::filter::{FilterQuery, Selection};
use crate::models::{CreateDisasterRequest, GeoPoint, ResourceCounts};

#[derive(Debug, Parser)]
#[command(name = "relief-console")]
#[command(about = "Admin console for the disaster-management backend", version)]
pub struct Cli {
    /// Print JSON instead of text tables
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,
    /// Debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session token locally
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "RELIEF_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in admin
    Whoami,
    /// Dashboard counters and active disasters
    Overview,
    Disasters {
        #[command(subcommand)]
        command: DisasterCommand,
    },
    Volunteers {
        #[command(subcommand)]
        command: ListCommand,
    },
    Sos {
        #[command(subcommand)]
        command: ListCommand,
    },
    Resources {
        #[command(subcommand)]
        command: ListCommand,
    },
    /// Geographic danger zones
    Zones {
        #[command(subcommand)]
        command: ListCommand,
    },
    Alerts {
        #[command(subcommand)]
        command: ListCommand,
    },
    /// Evacuation routes
    Routes {
        #[command(subcommand)]
        command: ListCommand,
    },
    /// Destructive system operations
    System {
        #[command(subcommand)]
        command: SystemCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    List(FilterArgs),
}

#[derive(Debug, Subcommand)]
pub enum DisasterCommand {
    List(FilterArgs),
    /// Show one disaster by id
    Show {
        id: String,
    },
    Create(CreateDisasterArgs),
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum SystemCommand {
    /// Document counts per collection
    Stats,
    /// Write the full system export to a file
    Export {
        #[arg(long)]
        out: PathBuf,
    },
    /// Delete every document in one collection
    DeleteCollection {
        collection: String,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
    /// Wipe every collection
    Reset {
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive text search
    #[arg(long, default_value = "")]
    pub search: String,
    /// Category (type, specialization, ...); `all` for no restriction
    #[arg(long, alias = "type")]
    pub category: Option<String>,
    /// Status tab; `all` for no restriction
    #[arg(long, alias = "status")]
    pub tab: Option<String>,
}

impl FilterArgs {
    pub fn query(&self) -> FilterQuery {
        FilterQuery::new(
            self.search.clone(),
            Selection::from(self.category.clone()),
            Selection::from(self.tab.clone()),
        )
    }
}

#[derive(Debug, Clone, Args)]
pub struct CreateDisasterArgs {
    #[arg(long = "type")]
    pub kind: String,
    #[arg(long)]
    pub description: String,
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
    /// Affected radius in kilometres
    #[arg(long)]
    pub radius: f64,
    #[arg(long, default_value_t = 0)]
    pub food: u32,
    #[arg(long, default_value_t = 0)]
    pub water: u32,
    #[arg(long, default_value_t = 0)]
    pub medical: u32,
    #[arg(long, default_value_t = 0)]
    pub shelter: u32,
}

impl From<CreateDisasterArgs> for CreateDisasterRequest {
    fn from(args: CreateDisasterArgs) -> Self {
        CreateDisasterRequest {
            kind: args.kind,
            description: args.description,
            location: GeoPoint::new(args.lat, args.lon),
            radius: args.radius,
            resources: ResourceCounts {
                food: args.food,
                water: args.water,
                medical: args.medical,
                shelter: args.shelter,
            },
        }
    }
}
