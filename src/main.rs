mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use appointments_core::AppointmentBook;
use appointments_core::config::AppConfig;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(name = "appointments")]
#[command(about = "Keep track of your appointments")]
struct Cli {
    /// Store appointments in this directory instead of the configured one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive screen (default)
    Open,
    /// Print all appointments
    List,
    /// Add an appointment, prompting for anything not given
    Add {
        /// Date of the appointment, as free text (e.g. "10/10")
        #[arg(short, long)]
        date: Option<String>,

        /// What the appointment is about
        #[arg(short, long)]
        item: Option<String>,
    },
    /// Delete the appointment at a position shown by `list`
    Delete {
        /// 1-based position in the list
        index: usize,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    utils::logging::init();

    let cli = Cli::parse();
    let config = load_config(cli.data_dir);
    let mut book = AppointmentBook::open(config.store()).await;

    match cli.command {
        None | Some(Commands::Open) => commands::screen::run(&config, &mut book).await,
        Some(Commands::List) => commands::list::run(&config, &book),
        Some(Commands::Add { date, item }) => commands::add::run(&mut book, date, item).await,
        Some(Commands::Delete { index, yes }) => commands::delete::run(&mut book, index, yes).await,
    }
}

fn load_config(data_dir: Option<PathBuf>) -> AppConfig {
    let mut config = AppConfig::load();

    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }

    debug!(
        data_dir = %config.data_path().display(),
        key = %config.storage_key,
        "Using data directory"
    );

    config
}
