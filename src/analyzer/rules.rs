//! The individual checks run by [`crate::analyzer::analyze`].
//!
//! Every rule sees the normalized post and always returns exactly one
//! suggestion, so the checklist has a fixed shape.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Suggestion, SuggestionKind};

pub const MIN_POST_CHARS: usize = 30;
pub const MAX_POST_CHARS: usize = 300;
pub const MAX_HASHTAGS: usize = 6;
pub const LONG_WORD_CHARS: usize = 12;
pub const MAX_LONG_WORDS: usize = 3;

pub const POSITIVE_WORDS: [&str; 7] = ["good", "great", "awesome", "love", "excited", "happy", "best"];
pub const NEGATIVE_WORDS: [&str; 7] = ["bad", "sad", "hate", "worst", "angry", "problem", "issue"];

static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());

static CTA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:comment|share|like|follow|tag|subscribe|dm|message)\b").unwrap()
});

// Regional indicators are not Extended_Pictographic but pair up into flags
static EMOJI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Extended_Pictographic}\p{Regional_Indicator}]").unwrap());

/// A normalized post plus its lowercase form, shared by all rules.
#[derive(Debug, Clone, Copy)]
pub struct Post<'a> {
    pub text: &'a str,
    pub lowercase: &'a str,
}

pub type Rule = fn(&Post<'_>) -> Suggestion;

/// Rules in output order.
pub const RULES: [Rule; 7] = [
    check_length,
    check_hashtags,
    check_cta,
    check_emoji,
    check_question,
    check_sentiment,
    check_readability,
];

pub fn check_length(post: &Post<'_>) -> Suggestion {
    let chars = post.text.chars().count();
    let message = if chars < MIN_POST_CHARS {
        "Post is short — consider adding more context (30+ characters)."
    } else if chars > MAX_POST_CHARS {
        "Post is long — consider summarizing to keep readers engaged."
    } else {
        "Post length looks good."
    };
    Suggestion::new(SuggestionKind::Length, message)
}

pub fn count_hashtags(text: &str) -> usize {
    HASHTAG_RE.find_iter(text).count()
}

pub fn check_hashtags(post: &Post<'_>) -> Suggestion {
    let count = count_hashtags(post.text);
    let message = if count == 0 {
        "No hashtags found — add 2-4 relevant hashtags to increase reach.".to_string()
    } else if count > MAX_HASHTAGS {
        format!("Found {} hashtags — try to limit to 2-4.", count)
    } else {
        format!("Hashtags found ({}) — looks fine.", count)
    };
    Suggestion::new(SuggestionKind::Hashtags, message)
}

pub fn check_cta(post: &Post<'_>) -> Suggestion {
    let message = if CTA_RE.is_match(post.text) {
        "CTA detected — good job!"
    } else {
        "No call-to-action detected — add a CTA like \"Share your thoughts\" or \"Comment below\"."
    };
    Suggestion::new(SuggestionKind::Cta, message)
}

/// Whether `text` contains at least one emoji or pictograph.
///
/// Uses the Unicode `Extended_Pictographic` property, so text-style
/// symbols that render as emoji with a variation selector (↔️, ©️, ㊗️)
/// count too. Digits, `#` and `*` are excluded even though they have
/// keycap emoji forms.
pub fn contains_emoji(text: &str) -> bool {
    EMOJI_RE.is_match(text)
}

pub fn check_emoji(post: &Post<'_>) -> Suggestion {
    let message = if contains_emoji(post.text) {
        "Emojis present — good for engagement."
    } else {
        "No emojis detected — add 1-2 emojis to increase engagement (where appropriate)."
    };
    Suggestion::new(SuggestionKind::Emoji, message)
}

pub fn check_question(post: &Post<'_>) -> Suggestion {
    let message = if post.text.contains('?') {
        "Question detected — good for engagement."
    } else {
        "No question found — asking a question can increase comments."
    };
    Suggestion::new(SuggestionKind::Question, message)
}

/// Number of words from `words` that occur anywhere in `haystack`.
/// Repeats of the same word count once.
fn count_present(haystack: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| haystack.contains(*w)).count()
}

pub fn check_sentiment(post: &Post<'_>) -> Suggestion {
    let positive = count_present(post.lowercase, &POSITIVE_WORDS);
    let negative = count_present(post.lowercase, &NEGATIVE_WORDS);

    let message = if positive > negative {
        "Overall tone is positive — good for shares."
    } else if negative > positive {
        "Tone is negative — be careful, negative posts may reduce engagement."
    } else {
        "Neutral tone."
    };
    Suggestion::new(SuggestionKind::Sentiment, message)
}

pub fn check_readability(post: &Post<'_>) -> Suggestion {
    let long_words = post
        .text
        .split_whitespace()
        .filter(|w| w.chars().count() > LONG_WORD_CHARS)
        .count();

    let message = if long_words > MAX_LONG_WORDS {
        "Some long words detected — consider simplifying language."
    } else {
        "Language complexity looks OK."
    };
    Suggestion::new(SuggestionKind::Readability, message)
}
