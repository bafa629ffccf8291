use std::fmt;

/// Communication tone selectable for a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Professional,
    Casual,
    Friendly,
    Formal,
    Technical,
    Creative,
}

/// Fixed phrasing associated with a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonePattern {
    /// Lead-in placed before the topic.
    pub prefix: &'static str,
    /// Closing sentence.
    pub suffix: &'static str,
    /// Style description used in the "Communication Style" line.
    pub style: &'static str,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Formal,
        Tone::Technical,
        Tone::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Technical => "technical",
            Tone::Creative => "creative",
        }
    }

    /// Resolve a tone from its exact key. Empty or unknown keys resolve to `None`.
    pub fn from_name(name: &str) -> Option<Tone> {
        Tone::ALL.into_iter().find(|tone| tone.as_str() == name)
    }

    pub fn pattern(&self) -> TonePattern {
        match self {
            Tone::Professional => TonePattern {
                prefix: "Please provide",
                suffix: "with attention to detail and accuracy.",
                style: "formal and structured",
            },
            Tone::Casual => TonePattern {
                prefix: "Hey, can you help me",
                suffix: "Keep it simple and easy to understand.",
                style: "conversational and relaxed",
            },
            Tone::Friendly => TonePattern {
                prefix: "I'd love your help with",
                suffix: "Thanks for your assistance!",
                style: "warm and approachable",
            },
            Tone::Formal => TonePattern {
                prefix: "I request assistance with",
                suffix: "Your expertise is greatly appreciated.",
                style: "highly professional and respectful",
            },
            Tone::Technical => TonePattern {
                prefix: "Provide technical analysis for",
                suffix: "Include relevant technical details and specifications.",
                style: "precise and technically detailed",
            },
            Tone::Creative => TonePattern {
                prefix: "Let's explore",
                suffix: "Feel free to be innovative and think outside the box!",
                style: "imaginative and exploratory",
            },
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
