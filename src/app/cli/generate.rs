use clap::Args;

use crate::app::api::{self, GenerateRequest};
use crate::domain::{AppError, Mode};

use super::fields::FieldArgs;

#[derive(Args)]
pub struct GenerateArgs {
    /// general or coding (defaults to the template's mode, then general)
    #[arg(short, long)]
    mode: Option<Mode>,
    /// Pre-fill fields from a template id
    #[arg(short, long)]
    template: Option<String>,
    /// Copy the prompt to the clipboard
    #[arg(short, long)]
    copy: bool,
    /// Do not record this prompt in history
    #[arg(long)]
    no_history: bool,
    #[command(flatten)]
    fields: FieldArgs,
}

pub fn run(args: GenerateArgs) -> Result<(), AppError> {
    let request = GenerateRequest {
        mode: args.mode,
        fields: args.fields.into_fields()?,
        template: args.template,
        copy: args.copy.then_some(true),
        skip_history: args.no_history,
    };
    let outcome = api::generate(request)?;

    if outcome.is_empty() {
        eprintln!("Nothing to generate: provide a topic, persona or use case");
        return Ok(());
    }

    println!("{}", outcome.prompt);
    if outcome.copied {
        eprintln!("✅ Copied prompt to clipboard");
    }
    Ok(())
}
