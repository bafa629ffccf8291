/// Separator placed between rendered sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Identifies one block of an assembled prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Persona,
    CommunicationStyle,
    Request,
    Context,
    FormatRequirements,
    ProgrammingLanguage,
    ExistingCode,
    ErrorMessage,
    DebugSteps,
    CodingGuidance,
    AdditionalRequirements,
    Closing,
}

/// A rendered section of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub text: String,
}

/// A section producer: returns `None` when its source data is absent.
pub(crate) type SectionRule<C> = (SectionKind, fn(&C) -> Option<String>);

/// Evaluate rules in order, keeping only the sections that render.
pub(crate) fn render_sections<C>(ctx: &C, rules: &[SectionRule<C>]) -> Vec<Section> {
    rules
        .iter()
        .filter_map(|(kind, render)| render(ctx).map(|text| Section { kind: *kind, text }))
        .collect()
}

/// Join sections with blank lines and trim the result.
pub fn join_sections(sections: &[Section]) -> String {
    let joined =
        sections.iter().map(|section| section.text.as_str()).collect::<Vec<_>>().join(SECTION_SEPARATOR);
    joined.trim().to_string()
}
