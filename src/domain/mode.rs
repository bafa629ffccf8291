use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Assembly rules applied to a set of prompt fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// General-purpose prompts: optional tone, inferred persona.
    #[default]
    General,
    /// Coding prompts: language, code and error sections, technical tone by default.
    Coding,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Mode; 2] = [Mode::General, Mode::Coding];

    /// Lowercase identifier used in storage and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::General => "general",
            Mode::Coding => "coding",
        }
    }

    /// Parse a mode from its identifier.
    pub fn from_name(name: &str) -> Option<Mode> {
        match name.to_lowercase().as_str() {
            "general" => Some(Mode::General),
            "coding" | "code" => Some(Mode::Coding),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_name(s).ok_or_else(|| AppError::InvalidMode(s.to_string()))
    }
}
