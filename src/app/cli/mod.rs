//! CLI Adapter.

mod fields;
mod generate;
mod history;
mod template;
mod vars;

use std::fs;
use std::io::{self, Read};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PROMPTFORGE_LOG";

#[derive(Parser)]
#[command(name = "promptforge")]
#[command(version)]
#[command(
    about = "Assemble structured AI prompts from form fields, with history and templates",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a prompt from fields or a template
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Browse and manage generated prompt history
    #[clap(visible_alias = "h")]
    History {
        #[command(subcommand)]
        command: history::HistoryCommands,
    },
    /// Browse and manage prompt templates
    #[clap(visible_alias = "t")]
    Template {
        #[command(subcommand)]
        command: template::TemplateCommands,
    },
    /// Fill `{variable}` placeholders in text templates
    #[clap(visible_alias = "v")]
    Vars {
        #[command(subcommand)]
        command: vars::VarsCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Generate(args) => generate::run(args).map(|_| 0),
        Commands::History { command } => history::run(command).map(|_| 0),
        Commands::Template { command } => template::run(command).map(|_| 0),
        Commands::Vars { command } => vars::run(command),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Read a file, or stdin when `path` is `-`.
fn read_input(path: &str) -> Result<String, AppError> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    fs::read_to_string(path)
        .map_err(|e| AppError::config_error(format!("Failed to read {}: {}", path, e)))
}
