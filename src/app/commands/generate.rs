use crate::app::AppContext;
use crate::domain::{AppError, HistoryItem, HistoryMetadata, Mode, PromptFields, assemble_prompt};
use crate::ports::{ClipboardWriter, KeyValueStore};

/// Inputs for one prompt generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Explicit mode. Falls back to the template's mode, then general.
    pub mode: Option<Mode>,
    pub fields: PromptFields,
    /// Template whose fields pre-fill the form; explicit fields win.
    pub template: Option<String>,
    /// Copy to the clipboard. `None` defers to configuration.
    pub copy: Option<bool>,
    /// Set to skip history recording for this run.
    pub skip_history: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub mode: Mode,
    /// Empty when the fields carry no subject.
    pub prompt: String,
    pub recorded: Option<HistoryItem>,
    pub copied: bool,
}

impl GenerateOutcome {
    pub fn is_empty(&self) -> bool {
        self.prompt.is_empty()
    }
}

/// Execute the generate command.
pub fn execute<S, C>(
    ctx: &mut AppContext<S, C>,
    request: GenerateRequest,
) -> Result<GenerateOutcome, AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    let copy = request.copy.unwrap_or(ctx.config().copy_to_clipboard);
    let record = !request.skip_history && ctx.config().record_history;

    let (mut fields, template_mode) = match request.template.as_deref() {
        Some(id) => {
            let template = ctx.templates().get(id)?;
            (template.data, Some(template.mode))
        }
        None => (PromptFields::default(), None),
    };
    fields.merge(request.fields);
    let mode = request.mode.or(template_mode).unwrap_or_default();

    if !fields.has_subject() {
        tracing::debug!(%mode, "no topic, persona or use case; nothing generated");
        return Ok(GenerateOutcome { mode, prompt: String::new(), recorded: None, copied: false });
    }

    let prompt = assemble_prompt(mode, &fields);
    tracing::debug!(%mode, chars = prompt.chars().count(), "assembled prompt");

    let recorded = if record {
        let mut metadata = HistoryMetadata::from(&fields);
        // General prompts never render the language.
        if mode == Mode::General {
            metadata.language = None;
        }
        Some(ctx.history().record(mode, &prompt, metadata)?)
    } else {
        None
    };

    if copy {
        ctx.clipboard_mut().write_text(&prompt)?;
    }

    Ok(GenerateOutcome { mode, prompt, recorded, copied: copy })
}
