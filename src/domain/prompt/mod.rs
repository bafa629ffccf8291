//! Deterministic prompt assembly from structured fields.
//!
//! Assembly is a pure function of its input: each mode evaluates an ordered
//! list of section rules, keeps the sections whose source data is present, and
//! joins them with blank lines. Every input yields a non-empty prompt.

mod coding;
mod general;
mod section;

pub use coding::{assemble_coding_prompt, coding_sections};
pub use general::{assemble_general_prompt, general_sections};
pub use section::{SECTION_SEPARATOR, Section, SectionKind, join_sections};

use super::fields::PromptFields;
use super::mode::Mode;

/// Assemble a prompt using the rules of `mode`.
pub fn assemble_prompt(mode: Mode, fields: &PromptFields) -> String {
    match mode {
        Mode::General => assemble_general_prompt(fields),
        Mode::Coding => assemble_coding_prompt(fields),
    }
}

/// Render the ordered sections for `mode` without joining them.
pub fn prompt_sections(mode: Mode, fields: &PromptFields) -> Vec<Section> {
    match mode {
        Mode::General => general_sections(fields),
        Mode::Coding => coding_sections(fields),
    }
}
