/*!
 * Post Suggestion Engine
 *
 * Turns a raw post into a fixed checklist of writing suggestions. The input
 * is normalized first; an empty post short-circuits with a single `empty`
 * suggestion, otherwise every rule in `rules::RULES` runs once, in order.
 */

pub mod normalize;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub use normalize::normalize_text;

pub const EMPTY_MESSAGE: &str = "No text found. Upload a file or type a post.";

/// Which check produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Empty,
    Length,
    Hashtags,
    Cta,
    Emoji,
    Question,
    Sentiment,
    Readability,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Empty => "empty",
            SuggestionKind::Length => "length",
            SuggestionKind::Hashtags => "hashtags",
            SuggestionKind::Cta => "cta",
            SuggestionKind::Emoji => "emoji",
            SuggestionKind::Question => "question",
            SuggestionKind::Sentiment => "sentiment",
            SuggestionKind::Readability => "readability",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the checklist. Serialized as `{"type": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub message: String,
}

impl Suggestion {
    pub fn new(kind: SuggestionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Analyze a post and return its suggestions in rule order.
pub fn analyze(text: &str) -> Vec<Suggestion> {
    let cleaned = normalize_text(text);

    if cleaned.is_empty() {
        return vec![Suggestion::new(SuggestionKind::Empty, EMPTY_MESSAGE)];
    }

    let lowered = cleaned.to_lowercase();
    let post = rules::Post {
        text: &cleaned,
        lowercase: &lowered,
    };

    rules::RULES.iter().map(|rule| rule(&post)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULE_ORDER: [SuggestionKind; 7] = [
        SuggestionKind::Length,
        SuggestionKind::Hashtags,
        SuggestionKind::Cta,
        SuggestionKind::Emoji,
        SuggestionKind::Question,
        SuggestionKind::Sentiment,
        SuggestionKind::Readability,
    ];

    fn kinds(suggestions: &[Suggestion]) -> Vec<SuggestionKind> {
        suggestions.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_empty_inputs_yield_single_empty_suggestion() {
        for input in ["", " ", "\n\n", "\t \r\n "] {
            let result = analyze(input);
            assert_eq!(result.len(), 1, "input {:?}", input);
            assert_eq!(result[0].kind, SuggestionKind::Empty);
            assert_eq!(result[0].message, EMPTY_MESSAGE);
        }
    }

    #[test]
    fn test_non_empty_input_yields_seven_in_order() {
        for input in ["x", "hello world", "Love this! #a #b 🚀 what do you think?"] {
            let result = analyze(input);
            assert_eq!(kinds(&result), RULE_ORDER.to_vec(), "input {:?}", input);
        }
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let input = "Excited to share our tool! 🚀 Have you tried it? #tool #launch";
        assert_eq!(analyze(input), analyze(input));
    }

    #[test]
    fn test_end_to_end_sample_post() {
        let result = analyze("Excited to share our tool! 🚀 Have you tried it? #tool #launch");
        let messages: Vec<&str> = result.iter().map(|s| s.message.as_str()).collect();

        assert_eq!(messages[0], "Post length looks good.");
        assert_eq!(messages[1], "Hashtags found (2) — looks fine.");
        assert_eq!(messages[2], "CTA detected — good job!");
        assert_eq!(messages[3], "Emojis present — good for engagement.");
        assert_eq!(messages[4], "Question detected — good for engagement.");
        assert_eq!(messages[5], "Overall tone is positive — good for shares.");
        assert_eq!(messages[6], "Language complexity looks OK.");
    }

    #[test]
    fn test_rules_see_normalized_text() {
        // 28 visible characters padded with whitespace that must not count
        let padded = format!("{}{}{}", " \n ".repeat(10), "a".repeat(28), "\t".repeat(10));
        let result = analyze(&padded);
        assert_eq!(result[0].kind, SuggestionKind::Length);
        assert!(result[0].message.starts_with("Post is short"));
    }

    #[test]
    fn test_byte_order_mark_does_not_count() {
        let result = analyze("\u{FEFF}");
        assert_eq!(result, vec![Suggestion::new(SuggestionKind::Empty, EMPTY_MESSAGE)]);

        // a BOM-prefixed text file with 29 visible characters is still short
        let result = analyze(&format!("\u{FEFF}{}", "a".repeat(29)));
        assert_eq!(result.len(), 7);
        assert!(result[0].message.starts_with("Post is short"), "{:?}", result[0]);
    }

    #[test]
    fn test_serializes_with_type_field() {
        let json = serde_json::to_value(Suggestion::new(SuggestionKind::Cta, "CTA detected — good job!"))
            .unwrap();
        assert_eq!(json["type"], "cta");
        assert_eq!(json["message"], "CTA detected — good job!");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_kind_display_matches_wire_name() {
        for kind in RULE_ORDER {
            let wire = serde_json::to_value(kind).unwrap();
            assert_eq!(wire, kind.to_string());
        }
    }
}
