//! General-mode assembly: optional tone, persona inferred from the use case.

use crate::domain::fields::PromptFields;
use crate::domain::output_format::OutputFormat;
use crate::domain::persona::{DEFAULT_PERSONA, infer_persona_from_use_case};
use crate::domain::tone::{Tone, TonePattern};

use super::section::{Section, SectionKind, SectionRule, join_sections, render_sections};

const DEFAULT_LEAD_IN: &str = "Please help me with";
const DEFAULT_TASK: &str = "Provide assistance as requested";

struct GeneralContext<'a> {
    fields: &'a PromptFields,
    persona: &'a str,
    tone: Option<TonePattern>,
    format: Option<OutputFormat>,
}

fn rules<'a>() -> [SectionRule<GeneralContext<'a>>; 7] {
    [
        (SectionKind::Persona, persona),
        (SectionKind::CommunicationStyle, communication_style),
        (SectionKind::Request, request),
        (SectionKind::Context, context),
        (SectionKind::FormatRequirements, format_requirements),
        (SectionKind::AdditionalRequirements, additional_requirements),
        (SectionKind::Closing, closing),
    ]
}

fn persona(ctx: &GeneralContext<'_>) -> Option<String> {
    Some(format!("You are {}.", ctx.persona))
}

fn communication_style(ctx: &GeneralContext<'_>) -> Option<String> {
    ctx.tone.map(|tone| format!("Communication Style: {}.", tone.style))
}

fn request(ctx: &GeneralContext<'_>) -> Option<String> {
    Some(match ctx.fields.topic() {
        Some(topic) => {
            let lead_in = ctx.tone.map_or(DEFAULT_LEAD_IN, |tone| tone.prefix);
            format!("{}:\n{}", lead_in, topic)
        }
        None => format!("Task: {}", ctx.fields.use_case().unwrap_or(DEFAULT_TASK)),
    })
}

fn context(ctx: &GeneralContext<'_>) -> Option<String> {
    ctx.fields.topic()?;
    ctx.fields.use_case().map(|use_case| format!("Context: This is for {}.", use_case.to_lowercase()))
}

fn format_requirements(ctx: &GeneralContext<'_>) -> Option<String> {
    ctx.format.map(|format| format!("Format Requirements:\n{}", format.instruction()))
}

fn additional_requirements(ctx: &GeneralContext<'_>) -> Option<String> {
    ctx.fields.constraints().map(|constraints| format!("Additional Requirements:\n{}", constraints))
}

fn closing(ctx: &GeneralContext<'_>) -> Option<String> {
    ctx.tone.map(|tone| tone.suffix.to_string()).filter(|suffix| !suffix.is_empty())
}

/// Resolve the persona for general mode.
fn effective_persona(fields: &PromptFields) -> &str {
    match (fields.persona(), fields.use_case()) {
        (Some(persona), _) => persona,
        (None, Some(use_case)) => infer_persona_from_use_case(use_case),
        (None, None) => DEFAULT_PERSONA,
    }
}

/// Render the sections of a general-mode prompt in order.
pub fn general_sections(fields: &PromptFields) -> Vec<Section> {
    let ctx = GeneralContext {
        fields,
        persona: effective_persona(fields),
        tone: fields.tone().and_then(Tone::from_name).map(|tone| tone.pattern()),
        format: fields.output_format().and_then(OutputFormat::from_name),
    };
    render_sections(&ctx, &rules())
}

/// Assemble a general-mode prompt.
pub fn assemble_general_prompt(fields: &PromptFields) -> String {
    join_sections(&general_sections(fields))
}
