//! Coding-mode assembly: language, code and error sections, technical tone by default.

use crate::domain::fields::PromptFields;
use crate::domain::output_format::OutputFormat;
use crate::domain::tone::{Tone, TonePattern};

use super::section::{Section, SectionKind, SectionRule, join_sections, render_sections};

const DEFAULT_TASK: &str = "Provide coding assistance";
const DEFAULT_EXPERTISE: &str = "multiple programming languages";

const DEBUG_STEPS: &str = "Please:\n\
    1. Identify the root cause of this error\n\
    2. Explain what's happening\n\
    3. Provide a corrected version of the code\n\
    4. Suggest best practices to avoid similar issues";

struct CodingContext<'a> {
    fields: &'a PromptFields,
    tone: TonePattern,
}

fn rules<'a>() -> [SectionRule<CodingContext<'a>>; 10] {
    [
        (SectionKind::Persona, persona),
        (SectionKind::CommunicationStyle, communication_style),
        (SectionKind::Request, request),
        (SectionKind::ProgrammingLanguage, programming_language),
        (SectionKind::ExistingCode, existing_code),
        (SectionKind::ErrorMessage, error_message),
        (SectionKind::DebugSteps, debug_steps),
        (SectionKind::CodingGuidance, coding_guidance),
        (SectionKind::AdditionalRequirements, additional_requirements),
        (SectionKind::Closing, closing),
    ]
}

fn persona(ctx: &CodingContext<'_>) -> Option<String> {
    Some(match ctx.fields.persona() {
        Some(persona) => format!("You are {}.", persona),
        None => format!(
            "You are senior software engineer with expertise in {}.",
            ctx.fields.language().unwrap_or(DEFAULT_EXPERTISE)
        ),
    })
}

fn communication_style(ctx: &CodingContext<'_>) -> Option<String> {
    Some(format!("Communication Style: {}.", ctx.tone.style))
}

fn request(ctx: &CodingContext<'_>) -> Option<String> {
    Some(match ctx.fields.topic() {
        Some(topic) => format!("{}:\n{}", ctx.tone.prefix, topic),
        None => format!("Task: {}", ctx.fields.use_case().unwrap_or(DEFAULT_TASK)),
    })
}

fn programming_language(ctx: &CodingContext<'_>) -> Option<String> {
    ctx.fields.language().map(|language| format!("Programming Language: {}", language))
}

fn existing_code(ctx: &CodingContext<'_>) -> Option<String> {
    ctx.fields.code_snippet().map(|code| {
        format!("Existing Code:\n```{}\n{}\n```", ctx.fields.language().unwrap_or(""), code)
    })
}

fn error_message(ctx: &CodingContext<'_>) -> Option<String> {
    ctx.fields.error_message().map(|error| format!("Error Message:\n```\n{}\n```", error))
}

fn debug_steps(ctx: &CodingContext<'_>) -> Option<String> {
    ctx.fields.error_message().map(|_| DEBUG_STEPS.to_string())
}

fn coding_guidance(ctx: &CodingContext<'_>) -> Option<String> {
    ctx.fields
        .output_format()
        .and_then(OutputFormat::from_name)
        .and_then(|format| format.coding_guidance())
        .map(str::to_string)
}

fn additional_requirements(ctx: &CodingContext<'_>) -> Option<String> {
    ctx.fields.constraints().map(|constraints| format!("Additional Requirements:\n{}", constraints))
}

fn closing(ctx: &CodingContext<'_>) -> Option<String> {
    Some(ctx.tone.suffix.to_string())
}

/// Render the sections of a coding-mode prompt in order.
///
/// An empty or unrecognized tone falls back to the technical pattern, so the
/// style line and closing sentence are always present.
pub fn coding_sections(fields: &PromptFields) -> Vec<Section> {
    let tone = fields.tone().and_then(Tone::from_name).unwrap_or(Tone::Technical);
    let ctx = CodingContext { fields, tone: tone.pattern() };
    render_sections(&ctx, &rules())
}

/// Assemble a coding-mode prompt.
pub fn assemble_coding_prompt(fields: &PromptFields) -> String {
    join_sections(&coding_sections(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> PromptFields {
        PromptFields::default()
    }

    fn kinds(fields: &PromptFields) -> Vec<SectionKind> {
        coding_sections(fields).into_iter().map(|s| s.kind).collect()
    }

    #[test]
    fn empty_fields_use_technical_defaults() {
        assert_eq!(
            assemble_coding_prompt(&fields()),
            "You are senior software engineer with expertise in multiple programming languages.\n\n\
             Communication Style: precise and technically detailed.\n\n\
             Task: Provide coding assistance\n\n\
             Include relevant technical details and specifications."
        );
    }

    #[test]
    fn unrecognized_tone_falls_back_to_technical() {
        let input = PromptFields { tone: Some("grumpy".into()), ..fields() };
        assert!(
            assemble_coding_prompt(&input)
                .contains("Communication Style: precise and technically detailed.")
        );
    }

    #[test]
    fn recognized_tone_drives_prefix_and_suffix() {
        let input = PromptFields {
            tone: Some("friendly".into()),
            topic: Some("a flaky test".into()),
            ..fields()
        };
        let prompt = assemble_coding_prompt(&input);
        assert!(prompt.contains("I'd love your help with:\na flaky test"));
        assert!(prompt.ends_with("Thanks for your assistance!"));
    }

    #[test]
    fn persona_defaults_to_language_expertise() {
        let input = PromptFields { language: Some("Go".into()), ..fields() };
        let prompt = assemble_coding_prompt(&input);
        assert!(prompt.starts_with("You are senior software engineer with expertise in Go."));
        assert!(prompt.contains("\n\nProgramming Language: Go\n\n"));
    }

    #[test]
    fn code_block_is_fenced_with_language_tag_and_trimmed() {
        let input = PromptFields {
            language: Some("python".into()),
            code_snippet: Some("\n  print(1)  \n".into()),
            ..fields()
        };
        assert!(assemble_coding_prompt(&input).contains("Existing Code:\n```python\nprint(1)\n```"));
    }

    #[test]
    fn code_block_without_language_has_bare_fence() {
        let input = PromptFields { code_snippet: Some("x = 1".into()), ..fields() };
        assert!(assemble_coding_prompt(&input).contains("Existing Code:\n```\nx = 1\n```"));
    }

    #[test]
    fn blank_code_and_error_are_omitted() {
        let input = PromptFields {
            code_snippet: Some("   ".into()),
            error_message: Some("\n".into()),
            ..fields()
        };
        let sections = kinds(&input);
        assert!(!sections.contains(&SectionKind::ExistingCode));
        assert!(!sections.contains(&SectionKind::ErrorMessage));
        assert!(!sections.contains(&SectionKind::DebugSteps));
    }

    #[test]
    fn error_message_adds_fence_and_debug_steps() {
        let input = PromptFields {
            error_message: Some(" TypeError: x is undefined ".into()),
            ..fields()
        };
        let prompt = assemble_coding_prompt(&input);
        assert!(prompt.contains("Error Message:\n```\nTypeError: x is undefined\n```\n\nPlease:\n1. Identify"));
        assert!(prompt.contains("4. Suggest best practices to avoid similar issues"));
    }

    #[test]
    fn format_guidance_only_for_code_and_lists() {
        for (format, expected) in [
            ("code", true),
            ("numbered-list", true),
            ("bullet-points", true),
            ("paragraph", false),
            ("json", false),
            ("", false),
        ] {
            let input = PromptFields { output_format: Some(format.into()), ..fields() };
            assert_eq!(kinds(&input).contains(&SectionKind::CodingGuidance), expected, "{format}");
        }
    }

    #[test]
    fn sections_follow_fixed_order() {
        let input = PromptFields {
            persona: Some("Rust reviewer".into()),
            topic: Some("review this".into()),
            language: Some("rust".into()),
            code_snippet: Some("fn main() {}".into()),
            error_message: Some("E0382".into()),
            output_format: Some("code".into()),
            constraints: Some("no unsafe".into()),
            ..fields()
        };
        assert_eq!(
            kinds(&input),
            vec![
                SectionKind::Persona,
                SectionKind::CommunicationStyle,
                SectionKind::Request,
                SectionKind::ProgrammingLanguage,
                SectionKind::ExistingCode,
                SectionKind::ErrorMessage,
                SectionKind::DebugSteps,
                SectionKind::CodingGuidance,
                SectionKind::AdditionalRequirements,
                SectionKind::Closing,
            ]
        );
    }
}
