use chrono::Utc;
use clap::Subcommand;

use crate::app::api::{self, HistoryQuery};
use crate::domain::history::format_relative;
use crate::domain::variables::preview;
use crate::domain::{AppError, HistoryFilter};

const SUMMARY_CHARS: usize = 60;

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recorded prompts, newest first
    #[clap(visible_alias = "ls")]
    List {
        /// all, general or coding
        #[arg(short, long, default_value = "all")]
        mode: HistoryFilter,
        /// Only items whose prompt, topic, persona or use case contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Print a recorded prompt
    Show { id: String },
    /// Delete one recorded prompt
    #[clap(visible_alias = "rm")]
    Delete { id: String },
    /// Delete all recorded prompts
    Clear,
    /// Show history counts
    Stats,
}

pub fn run(command: HistoryCommands) -> Result<(), AppError> {
    match command {
        HistoryCommands::List { mode, search } => list(HistoryQuery { filter: mode, search }),
        HistoryCommands::Show { id } => {
            let item = api::history_show(&id)?;
            println!("{}", item.prompt);
            Ok(())
        }
        HistoryCommands::Delete { id } => {
            api::history_delete(&id)?;
            println!("✅ Deleted history item {}", id);
            Ok(())
        }
        HistoryCommands::Clear => {
            let count = api::history_clear()?;
            println!("✅ Cleared {} history item(s)", count);
            Ok(())
        }
        HistoryCommands::Stats => {
            let stats = api::history_stats()?;
            println!("Total:     {}", stats.total);
            println!("General:   {}", stats.general);
            println!("Coding:    {}", stats.coding);
            println!("Today:     {}", stats.today);
            println!("This week: {}", stats.this_week);
            Ok(())
        }
    }
}

fn list(query: HistoryQuery) -> Result<(), AppError> {
    let items = api::history_list(&query)?;
    if items.is_empty() {
        println!("No history yet");
        return Ok(());
    }

    let now = Utc::now();
    for item in items {
        let first_line = item.prompt.lines().next().unwrap_or_default();
        println!(
            "{}  [{}]  {}  {}",
            item.id,
            item.mode,
            format_relative(item.timestamp, now),
            preview(first_line, SUMMARY_CHARS)
        );
    }
    Ok(())
}
