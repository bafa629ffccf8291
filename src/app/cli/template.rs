use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::app::api::{self, NewTemplate, Template, TemplatePatch, TemplateQuery};
use crate::domain::{AppError, Mode, TemplateCategory, TemplateSort};

use super::fields::FieldArgs;
use super::read_input;

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List built-in and saved templates
    #[clap(visible_alias = "ls")]
    List {
        /// study, viva, coding, writing or custom
        #[arg(short, long)]
        category: Option<TemplateCategory>,
        /// Only templates whose name or description contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// alphabetical (alias popular) or recent
        #[arg(long)]
        sort: Option<TemplateSort>,
    },
    /// Show a template's fields
    Show { id: String },
    /// Save a new template
    Save(TemplateArgs),
    /// Update a saved template (built-ins are read-only)
    Update {
        id: String,
        #[command(flatten)]
        args: TemplateArgs,
    },
    /// Delete a saved template
    #[clap(visible_alias = "rm")]
    Delete { id: String },
    /// Copy any template into a new saved template
    Duplicate { id: String },
    /// Print a template as JSON
    Export {
        id: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Save a template from exported JSON (`-` reads stdin)
    Import { file: String },
}

#[derive(Args)]
pub struct TemplateArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// study, viva, coding, writing or custom
    #[arg(long)]
    category: Option<TemplateCategory>,
    /// general or coding
    #[arg(short, long)]
    mode: Option<Mode>,
    #[command(flatten)]
    fields: FieldArgs,
}

pub fn run(command: TemplateCommands) -> Result<(), AppError> {
    match command {
        TemplateCommands::List { category, search, sort } => {
            list(TemplateQuery { category, search, sort })
        }
        TemplateCommands::Show { id } => {
            print_template(&api::template_show(&id)?);
            Ok(())
        }
        TemplateCommands::Save(args) => {
            let new = NewTemplate {
                name: args.name.unwrap_or_default(),
                description: args.description.unwrap_or_default(),
                category: args.category.unwrap_or_default(),
                mode: args.mode.unwrap_or_default(),
                data: args.fields.into_fields()?,
            };
            let saved = api::template_save(new)?;
            println!("✅ Saved template '{}' as {}", saved.name, saved.id);
            Ok(())
        }
        TemplateCommands::Update { id, args } => {
            let patch = TemplatePatch {
                name: args.name,
                description: args.description,
                category: args.category,
                mode: args.mode,
                data: Some(args.fields.into_fields()?),
            };
            let updated = api::template_update(&id, patch)?;
            println!("✅ Updated template '{}'", updated.name);
            Ok(())
        }
        TemplateCommands::Delete { id } => {
            api::template_delete(&id)?;
            println!("✅ Deleted template {}", id);
            Ok(())
        }
        TemplateCommands::Duplicate { id } => {
            let copy = api::template_duplicate(&id)?;
            println!("✅ Created '{}' as {}", copy.name, copy.id);
            Ok(())
        }
        TemplateCommands::Export { id, output } => {
            let json = api::template_export(&id)?;
            match output {
                Some(path) => {
                    fs::write(&path, format!("{}\n", json))?;
                    println!("✅ Exported {} to {}", id, path.display());
                }
                None => println!("{}", json),
            }
            Ok(())
        }
        TemplateCommands::Import { file } => {
            let imported = api::template_import(&read_input(&file)?)?;
            println!("✅ Imported template '{}' as {}", imported.name, imported.id);
            Ok(())
        }
    }
}

fn list(query: TemplateQuery) -> Result<(), AppError> {
    let templates = api::template_list(&query)?;
    if templates.is_empty() {
        println!("No templates found");
        return Ok(());
    }

    let mut current: Option<TemplateCategory> = None;
    for template in &templates {
        if query.sort.is_none() && current != Some(template.category) {
            current = Some(template.category);
            println!("{} - {}", template.category, template.category.description());
        }
        let origin = if template.is_built_in { "" } else { " (saved)" };
        println!("  {}  {}{}", template.id, template.name, origin);
    }
    Ok(())
}

fn print_template(template: &Template) {
    println!("{} ({})", template.name, template.id);
    if !template.description.is_empty() {
        println!("{}", template.description);
    }
    println!();
    println!("Category: {}", template.category);
    println!("Mode:     {}", template.mode);
    println!("Built-in: {}", if template.is_built_in { "yes" } else { "no" });

    let data = &template.data;
    let fields = [
        ("Persona", data.persona()),
        ("Use case", data.use_case()),
        ("Tone", data.tone()),
        ("Format", data.output_format()),
        ("Topic", data.topic()),
        ("Constraints", data.constraints()),
        ("Language", data.language()),
        ("Code", data.code_snippet()),
        ("Error", data.error_message()),
    ];
    let present: Vec<_> = fields.iter().filter_map(|(label, v)| v.map(|v| (label, v))).collect();
    if !present.is_empty() {
        println!("\nFields:");
        for (label, value) in present {
            println!("  • {}: {}", label, value);
        }
    }
}
