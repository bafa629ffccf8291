use clap::Subcommand;

use crate::app::api::{self, FillRequest};
use crate::app::commands::vars;
use crate::domain::AppError;

use super::read_input;

#[derive(Subcommand)]
pub enum VarsCommands {
    /// List `{variable}` names in order of first appearance
    Extract {
        /// Template file (`-` for stdin)
        file: String,
    },
    /// Substitute variables and print the result
    Fill {
        /// Template file (`-` for stdin)
        file: String,
        /// Variable value as name=value (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
        /// Example appended to the result (repeatable)
        #[arg(short, long = "example")]
        examples: Vec<String>,
        /// Truncate to the configured preview length
        #[arg(short, long)]
        preview: bool,
        /// Wrap the result in a named display block
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Exit 1 when any variable lacks a value
    Check {
        /// Template file (`-` for stdin)
        file: String,
        /// Variable value as name=value (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },
}

pub fn run(command: VarsCommands) -> Result<i32, AppError> {
    match command {
        VarsCommands::Extract { file } => {
            for name in vars::extract(&read_input(&file)?) {
                println!("{}", name);
            }
            Ok(0)
        }
        VarsCommands::Fill { file, set, examples, preview, name } => {
            let request = FillRequest {
                text: read_input(&file)?,
                values: vars::parse_assignments(&set)?,
                examples,
                preview: if preview { Some(api::preview_length()?) } else { None },
                name,
            };
            let outcome = vars::fill(request);
            println!("{}", outcome.text);
            if !outcome.report.is_valid {
                eprintln!("⚠️  Missing variables: {}", outcome.report.missing.join(", "));
            }
            Ok(0)
        }
        VarsCommands::Check { file, set } => {
            let report = vars::check(&read_input(&file)?, &vars::parse_assignments(&set)?);
            if report.is_valid {
                println!("✅ All variables provided");
                Ok(0)
            } else {
                println!("Missing variables: {}", report.missing.join(", "));
                Ok(1)
            }
        }
    }
}
