mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chiconnect_core::Store;
use chiconnect_core::config::ChiconnectConfig;
use chiconnect_core::kv::DirStore;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::profile::ProfileCommand;
use crate::commands::settings::Visibility;

#[derive(Parser)]
#[command(name = "chiconnect")]
#[command(about = "Browse community events, RSVP, and keep track of the people you meet")]
struct Cli {
    /// Store data here instead of the configured data_dir
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events
    Feed,
    /// Respond to an event (interested, not-interested, going, clear)
    Rsvp { event_id: String, status: String },
    /// Mark an event as attended
    Attend { event_id: String },
    /// Show upcoming and past events you committed to
    Timeline,
    /// Dashboard: events attended, connections made, next RSVPs
    Home,
    /// List connections
    Connections {
        /// Filter by name, role, company or event
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Record someone you met at an event
    Connect {
        event_id: String,

        #[arg(short, long)]
        name: String,

        /// Role or title
        #[arg(short, long)]
        role: String,

        /// Social media handle (leading @ optional)
        #[arg(long)]
        handle: String,

        #[arg(short, long)]
        company: Option<String>,
    },
    /// Delete a connection
    Disconnect {
        connection_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// View or edit your profile
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommand>,
    },
    /// Show or change whether your profile is visible to other attendees
    Visibility { visibility: Option<Visibility> },
    /// Mark onboarding as done (or start over with --reset)
    Onboard {
        #[arg(long)]
        reset: bool,
    },
    /// Write all data to a JSON file
    Export {
        /// Output file (defaults to chiconnect-data-<date>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete all stored data
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut store = open_store(cli.data_dir)?;

    match cli.command {
        Commands::Feed => commands::feed::run(&store),
        Commands::Rsvp { event_id, status } => {
            commands::rsvp::run(&mut store, &event_id, &status)
        }
        Commands::Attend { event_id } => commands::rsvp::attend(&mut store, &event_id),
        Commands::Timeline => commands::timeline::run(&store),
        Commands::Home => commands::home::run(&store),
        Commands::Connections { search } => {
            commands::connections::list(&store, search.as_deref())
        }
        Commands::Connect {
            event_id,
            name,
            role,
            handle,
            company,
        } => commands::connections::add(&mut store, &event_id, name, role, handle, company),
        Commands::Disconnect { connection_id, yes } => {
            commands::connections::delete(&mut store, &connection_id, yes)
        }
        Commands::Profile { command } => commands::profile::run(&mut store, command),
        Commands::Visibility { visibility } => {
            commands::settings::visibility(&mut store, visibility)
        }
        Commands::Onboard { reset } => commands::settings::onboard(&mut store, reset),
        Commands::Export { output } => commands::data::export(&store, output),
        Commands::Clear { yes } => commands::data::clear(&mut store, yes),
    }
}

fn open_store(data_dir: Option<PathBuf>) -> Result<Store<DirStore>> {
    let store = match data_dir {
        Some(dir) => Store::new(DirStore::open(dir)?),
        None => ChiconnectConfig::load()?.open_store()?,
    };
    tracing::debug!(data_dir = %store.backend().dir().display(), "Opened store");
    Ok(store)
}
