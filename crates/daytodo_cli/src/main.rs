//! Terminal view over the day todo store.
//!
//! # Responsibility
//! - Resolve the selected date and database location from flags.
//! - Dispatch one user intent, then render the selected day.

mod config;
mod render;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use daytodo_core::db::open_db;
use daytodo_core::{
    init_logging, DateSelector, DayTodoService, SqliteBlobRepository, TodoId, TodoStore,
};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daytodo")]
#[command(version)]
#[command(about = "Keep a todo list for each calendar day")]
struct Cli {
    /// SQLite database file (defaults to the platform data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Day to act on, as YYYY-MM-DD (defaults to today)
    #[arg(short, long, global = true, value_parser = config::parse_date)]
    date: Option<NaiveDate>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show todos for the selected day
    List,
    /// Add a todo to the selected day
    Add {
        /// Todo text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Mark a todo of the selected day done, or open again
    Toggle {
        #[arg(value_parser = config::parse_todo_id)]
        id: TodoId,
    },
    /// Remove a todo from the selected day
    Delete {
        #[arg(value_parser = config::parse_todo_id)]
        id: TodoId,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = config::log_level(cli.log_level.as_deref());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let db_path = config::resolve_db_path(cli.db)?;
    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open todo database at {}", db_path.display()))?;

    let selector = cli.date.map_or_else(DateSelector::today, DateSelector::new);
    let store = TodoStore::initialize(SqliteBlobRepository::new(&conn));
    let mut service = DayTodoService::new(store, selector);

    let outcome = match cli.command.unwrap_or(Commands::List) {
        Commands::List => None,
        Commands::Add { text } => Some(match service.add(&text.join(" ")) {
            Some(id) => format!("Added {id}"),
            None => "Nothing to add: todo text is empty".to_string(),
        }),
        Commands::Toggle { id } => Some(if service.toggle(id) {
            format!("Toggled {id}")
        } else {
            format!("No todo {id} on this date")
        }),
        Commands::Delete { id } => Some(if service.delete(id) {
            format!("Deleted {id}")
        } else {
            format!("No todo {id} on this date")
        }),
    };

    info!(
        "event=cli_command module=cli status=ok date={} todos={}",
        service.selected_date(),
        service.todos().len()
    );

    if let Some(outcome) = outcome {
        println!("{outcome}");
    }
    print!("{}", render::render_day(&service.heading(), service.todos()));
    Ok(())
}
