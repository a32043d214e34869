//! Provider identity

use serde::{Deserialize, Serialize};

/// Identity of an external text-generation service.
///
/// Outcomes are keyed by this value, never by arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// OpenAI Chat Completions
    ChatGpt,
    /// Google Gemini `generateContent`
    Gemini,
}

impl ProviderId {
    /// Every provider a request is fanned out to.
    pub const ALL: [ProviderId; 2] = [ProviderId::ChatGpt, ProviderId::Gemini];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::ChatGpt => "chatgpt",
            ProviderId::Gemini => "gemini",
        }
    }

    /// Human-readable service name used in log lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::ChatGpt => "ChatGPT",
            ProviderId::Gemini => "Gemini",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ProviderId::ChatGpt.to_string(), "chatgpt");
        assert_eq!(ProviderId::Gemini.to_string(), "gemini");
    }

    #[test]
    fn test_all_is_distinct() {
        assert_ne!(ProviderId::ALL[0], ProviderId::ALL[1]);
    }
}
