use std::sync::OnceLock;

use chrono::{SecondsFormat, Utc};

use super::{Template, TemplateCategory};
use crate::domain::{Mode, PromptFields};

struct BuiltIn {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: TemplateCategory,
    mode: Mode,
    persona: &'static str,
    use_case: &'static str,
    tone: &'static str,
    output_format: &'static str,
    topic: &'static str,
    constraints: &'static str,
}

const BUILT_INS: &[BuiltIn] = &[
    BuiltIn {
        id: "study-research-paper",
        name: "Research Paper Analysis",
        description: "Analyze academic papers and extract key insights",
        category: TemplateCategory::Study,
        mode: Mode::General,
        persona: "academic research specialist",
        use_case: "research analysis",
        tone: "formal",
        output_format: "numbered-list",
        topic: "",
        constraints: "Focus on methodology, findings, and implications. Include citations where relevant.",
    },
    BuiltIn {
        id: "study-essay-writing",
        name: "Essay Writing Assistant",
        description: "Help structure and write academic essays",
        category: TemplateCategory::Study,
        mode: Mode::General,
        persona: "experienced academic writing tutor",
        use_case: "essay writing",
        tone: "professional",
        output_format: "paragraph",
        topic: "",
        constraints: "Include introduction, body paragraphs with evidence, and conclusion. Follow academic writing standards.",
    },
    BuiltIn {
        id: "study-exam-prep",
        name: "Exam Preparation",
        description: "Create comprehensive study guides and practice questions",
        category: TemplateCategory::Study,
        mode: Mode::General,
        persona: "experienced exam preparation coach",
        use_case: "exam preparation",
        tone: "professional",
        output_format: "bullet-points",
        topic: "",
        constraints: "Include key concepts, practice questions, and memory techniques. Break down complex topics into manageable sections.",
    },
    BuiltIn {
        id: "viva-defense",
        name: "Thesis Defense Preparation",
        description: "Prepare for thesis or dissertation defense questions",
        category: TemplateCategory::Viva,
        mode: Mode::General,
        persona: "experienced thesis advisor",
        use_case: "thesis defense",
        tone: "formal",
        output_format: "numbered-list",
        topic: "",
        constraints: "Generate potential questions, strong answers, and ways to defend methodology. Include follow-up questions examiners might ask.",
    },
    BuiltIn {
        id: "viva-technical-interview",
        name: "Technical Interview Prep",
        description: "Practice for technical job interviews",
        category: TemplateCategory::Viva,
        mode: Mode::General,
        persona: "senior technical interviewer",
        use_case: "interview preparation",
        tone: "professional",
        output_format: "bullet-points",
        topic: "",
        constraints: "Include common questions, optimal answers, and follow-up scenarios. Cover both technical and behavioral aspects.",
    },
    BuiltIn {
        id: "coding-bug-fix",
        name: "Bug Fixing Assistant",
        description: "Debug code and identify root causes",
        category: TemplateCategory::Coding,
        mode: Mode::Coding,
        persona: "senior debugging specialist",
        use_case: "debugging",
        tone: "technical",
        output_format: "numbered-list",
        topic: "Identify and fix the bug in the provided code",
        constraints: "Explain the root cause, provide corrected code, and suggest prevention strategies.",
    },
    BuiltIn {
        id: "coding-code-review",
        name: "Code Review",
        description: "Get comprehensive code review and suggestions",
        category: TemplateCategory::Coding,
        mode: Mode::Coding,
        persona: "experienced code reviewer",
        use_case: "code review",
        tone: "professional",
        output_format: "bullet-points",
        topic: "Review the code for quality, performance, and best practices",
        constraints: "Check for bugs, security issues, performance problems, and style violations. Suggest improvements.",
    },
    BuiltIn {
        id: "coding-refactoring",
        name: "Code Refactoring",
        description: "Improve code structure and maintainability",
        category: TemplateCategory::Coding,
        mode: Mode::Coding,
        persona: "software architecture expert",
        use_case: "code refactoring",
        tone: "technical",
        output_format: "code",
        topic: "Refactor the code to improve readability and maintainability",
        constraints: "Apply SOLID principles, DRY, and design patterns where appropriate. Maintain functionality.",
    },
    BuiltIn {
        id: "writing-blog-post",
        name: "Blog Post Creator",
        description: "Write engaging blog posts",
        category: TemplateCategory::Writing,
        mode: Mode::General,
        persona: "professional content writer",
        use_case: "blog writing",
        tone: "friendly",
        output_format: "paragraph",
        topic: "",
        constraints: "Create an engaging introduction, informative body, and compelling conclusion. Use storytelling and examples.",
    },
    BuiltIn {
        id: "writing-technical-docs",
        name: "Technical Documentation",
        description: "Create clear technical documentation",
        category: TemplateCategory::Writing,
        mode: Mode::General,
        persona: "technical documentation specialist",
        use_case: "documentation",
        tone: "technical",
        output_format: "numbered-list",
        topic: "",
        constraints: "Be clear, concise, and precise. Include examples, code snippets if relevant, and follow documentation best practices.",
    },
    BuiltIn {
        id: "writing-creative-story",
        name: "Creative Story Writing",
        description: "Write creative fiction and narratives",
        category: TemplateCategory::Writing,
        mode: Mode::General,
        persona: "creative writing coach",
        use_case: "creative writing",
        tone: "creative",
        output_format: "paragraph",
        topic: "",
        constraints: "Focus on character development, plot structure, and engaging narrative. Use vivid descriptions and dialogue.",
    },
];

static TEMPLATES: OnceLock<Vec<Template>> = OnceLock::new();

fn field(value: &str) -> Option<String> {
    Some(value.to_string())
}

impl BuiltIn {
    fn to_template(&self, stamp: &str) -> Template {
        let coding = self.mode == Mode::Coding;
        let coding_field = || coding.then(String::new);
        Template {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category,
            is_built_in: true,
            mode: self.mode,
            data: PromptFields {
                persona: field(self.persona),
                use_case: field(self.use_case),
                tone: field(self.tone),
                output_format: field(self.output_format),
                topic: field(self.topic),
                constraints: field(self.constraints),
                language: coding_field(),
                code_snippet: coding_field(),
                error_message: coding_field(),
            },
            created_at: stamp.to_string(),
            updated_at: stamp.to_string(),
        }
    }
}

/// Built-in templates, stamped once per process and never mutated.
pub fn builtin_templates() -> &'static [Template] {
    TEMPLATES.get_or_init(|| {
        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        BUILT_INS.iter().map(|b| b.to_template(&stamp)).collect()
    })
}
