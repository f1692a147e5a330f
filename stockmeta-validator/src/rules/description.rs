//! Description word count

use super::{word_count, Rule, RuleId, RuleOutcome};
use crate::types::{ImageMetadata, MetadataField, Severity};

pub const DESCRIPTION_MIN_WORDS: usize = 10;

const SPARSE_PENALTY: f64 = 10.0;

pub struct DescriptionRule;

impl Rule for DescriptionRule {
    fn id(&self) -> RuleId {
        RuleId::Description
    }

    fn check(&self, metadata: &ImageMetadata) -> RuleOutcome {
        let mut outcome = RuleOutcome::pass();
        let words = word_count(&metadata.description);

        if words < DESCRIPTION_MIN_WORDS {
            outcome.flag(
                Severity::Warning,
                Some(MetadataField::Description),
                format!(
                    "Description is too sparse ({} words, min {})",
                    words, DESCRIPTION_MIN_WORDS
                ),
                SPARSE_PENALTY,
            );
        }

        outcome
    }
}
