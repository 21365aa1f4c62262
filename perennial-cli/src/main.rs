mod commands;
mod link;
mod render;
mod state;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "perennial")]
#[command(about = "Keep a small calendar of annually recurring events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import events from a CSV file (month,day,title)
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },
    /// Export the current events to a CSV file
    Export {
        /// Output path (defaults to calendar.csv)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Add a single event
    Add {
        /// Month number, 1-12
        month: u32,

        /// Day of month
        day: u32,

        /// Event title
        title: String,
    },
    /// Remove an event by id (a unique prefix is enough)
    Remove { id: String },
    /// Show a month grid with event markers
    Show {
        /// Month number 1-12 (defaults to the current month)
        month: Option<u32>,
    },
    /// List all events with their ids
    List,
    /// Print a share link carrying the current events
    Share {
        /// Base address for the link
        #[arg(long, default_value = "https://perennial.app/")]
        base: String,
    },
    /// Load events from a share link or bare token
    Open {
        /// A share link, or the token itself
        link: String,
    },
    /// Start over with an empty calendar
    New,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Import { file } => commands::import::run(&file),
        Commands::Export { out } => commands::export::run(out.as_deref()),
        Commands::Add { month, day, title } => commands::add::run(month, day, &title),
        Commands::Remove { id } => commands::remove::run(&id),
        Commands::Show { month } => commands::show::run(month),
        Commands::List => commands::list::run(),
        Commands::Share { base } => commands::share::run(&base),
        Commands::Open { link } => commands::open::run(&link),
        Commands::New => commands::new::run(),
    }
}
