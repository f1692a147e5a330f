//! Technical submission checks
//!
//! - **AiDisclosureRule**: AI-generated content must be flagged as such
//! - **AuthorPlaceholderRule**: author credit should carry the `{{author}}`
//!   placeholder that is substituted at submission time (no penalty)

use super::{Rule, RuleId, RuleOutcome};
use crate::types::{ImageMetadata, MetadataField, Severity};

/// Dynamic placeholder replaced with the contributor name on submission
pub const AUTHOR_PLACEHOLDER: &str = "{{author}}";

const AI_DISCLOSURE_PENALTY: f64 = 10.0;

pub struct AiDisclosureRule;

impl Rule for AiDisclosureRule {
    fn id(&self) -> RuleId {
        RuleId::AiDisclosure
    }

    fn check(&self, metadata: &ImageMetadata) -> RuleOutcome {
        let mut outcome = RuleOutcome::pass();

        if !metadata.is_ai {
            outcome.flag(
                Severity::Warning,
                Some(MetadataField::IsAi),
                "Content is not marked as AI-generated; AI disclosure is required by most marketplaces",
                AI_DISCLOSURE_PENALTY,
            );
        }

        outcome
    }
}

pub struct AuthorPlaceholderRule;

impl Rule for AuthorPlaceholderRule {
    fn id(&self) -> RuleId {
        RuleId::AuthorPlaceholder
    }

    fn check(&self, metadata: &ImageMetadata) -> RuleOutcome {
        let mut outcome = RuleOutcome::pass();

        if !metadata.author.contains(AUTHOR_PLACEHOLDER) {
            outcome.flag(
                Severity::Info,
                Some(MetadataField::Author),
                format!(
                    "Author is missing the dynamic placeholder {}",
                    AUTHOR_PLACEHOLDER
                ),
                0.0,
            );
        }

        outcome
    }
}
