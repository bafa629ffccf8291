use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Grouping shown in the template library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Study,
    Viva,
    Coding,
    Writing,
    #[default]
    Custom,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 5] = [
        TemplateCategory::Study,
        TemplateCategory::Viva,
        TemplateCategory::Coding,
        TemplateCategory::Writing,
        TemplateCategory::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Study => "study",
            TemplateCategory::Viva => "viva",
            TemplateCategory::Coding => "coding",
            TemplateCategory::Writing => "writing",
            TemplateCategory::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateCategory::Study => "Study",
            TemplateCategory::Viva => "Viva/Interview",
            TemplateCategory::Coding => "Coding",
            TemplateCategory::Writing => "Writing",
            TemplateCategory::Custom => "Custom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateCategory::Study => "Research, essays, and exam preparation",
            TemplateCategory::Viva => "Defense and interview preparation",
            TemplateCategory::Coding => "Debugging, review, and refactoring",
            TemplateCategory::Writing => "Blog posts, docs, and creative writing",
            TemplateCategory::Custom => "Your saved templates",
        }
    }

    pub fn from_name(name: &str) -> Option<TemplateCategory> {
        match name.to_lowercase().as_str() {
            "study" => Some(TemplateCategory::Study),
            "viva" | "interview" => Some(TemplateCategory::Viva),
            "coding" => Some(TemplateCategory::Coding),
            "writing" => Some(TemplateCategory::Writing),
            "custom" => Some(TemplateCategory::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for TemplateCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateCategory::from_name(s).ok_or_else(|| AppError::InvalidCategory(s.to_string()))
    }
}
