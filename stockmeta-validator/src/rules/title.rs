//! Title length and word count
//!
//! Three independent checks on the trimmed title; any combination may fire.

use super::{char_len, word_count, Rule, RuleId, RuleOutcome};
use crate::types::{ImageMetadata, MetadataField, Severity};

/// Longest title accepted by every marketplace without truncation
pub const TITLE_MAX_CHARS: usize = 70;
/// Shortest title considered useful for search
pub const TITLE_MIN_CHARS: usize = 20;
pub const TITLE_MIN_WORDS: usize = 5;

const TOO_LONG_PENALTY: f64 = 15.0;
const TOO_SHORT_PENALTY: f64 = 5.0;
const FEW_WORDS_PENALTY: f64 = 5.0;

pub struct TitleRule;

impl Rule for TitleRule {
    fn id(&self) -> RuleId {
        RuleId::Title
    }

    fn check(&self, metadata: &ImageMetadata) -> RuleOutcome {
        let mut outcome = RuleOutcome::pass();
        let length = char_len(&metadata.title);
        let words = word_count(&metadata.title);

        if length > TITLE_MAX_CHARS {
            outcome.flag(
                Severity::Error,
                Some(MetadataField::Title),
                format!(
                    "Title is too long ({} characters, max {}); it will be truncated on at least one marketplace",
                    length, TITLE_MAX_CHARS
                ),
                TOO_LONG_PENALTY,
            );
        }

        if length < TITLE_MIN_CHARS {
            outcome.flag(
                Severity::Warning,
                Some(MetadataField::Title),
                format!(
                    "Title is too short for SEO ({} characters, min {})",
                    length, TITLE_MIN_CHARS
                ),
                TOO_SHORT_PENALTY,
            );
        }

        if words < TITLE_MIN_WORDS {
            outcome.flag(
                Severity::Warning,
                Some(MetadataField::Title),
                format!(
                    "Title word count is low ({} words, min {})",
                    words, TITLE_MIN_WORDS
                ),
                FEW_WORDS_PENALTY,
            );
        }

        outcome
    }
}
