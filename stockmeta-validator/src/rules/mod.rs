//! Scoring Rules
//!
//! Each rule is an independent, pure check over `ImageMetadata` producing a
//! `RuleOutcome` (issues, recommendations, penalty). The validator runs them in
//! a fixed order and folds the penalties into a single score.
//!
//! # Rules (evaluation order)
//! 1. **title** - length and word count
//! 2. **description** - word count
//! 3. **keyword_count** - 30-50 keywords
//! 4. **duplicate_keywords** - case/whitespace-insensitive duplicates
//! 5. **short_keywords** - degenerate keywords under 3 characters
//! 6. **brand_compliance** - denylisted brand/trademark terms
//! 7. **ai_disclosure** - AI-generated content flag
//! 8. **author_placeholder** - `{{author}}` token in the author credit

pub mod compliance;
pub mod description;
pub mod keywords;
pub mod technical;
pub mod title;

pub use compliance::BrandComplianceRule;
pub use description::DescriptionRule;
pub use keywords::{DuplicateKeywordsRule, KeywordCountRule, ShortKeywordsRule};
pub use technical::{AiDisclosureRule, AuthorPlaceholderRule};
pub use title::TitleRule;

use crate::types::{ImageMetadata, MetadataField, Severity, ValidationIssue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Title,
    Description,
    KeywordCount,
    DuplicateKeywords,
    ShortKeywords,
    BrandCompliance,
    AiDisclosure,
    AuthorPlaceholder,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::Title => "title",
            RuleId::Description => "description",
            RuleId::KeywordCount => "keyword_count",
            RuleId::DuplicateKeywords => "duplicate_keywords",
            RuleId::ShortKeywords => "short_keywords",
            RuleId::BrandCompliance => "brand_compliance",
            RuleId::AiDisclosure => "ai_disclosure",
            RuleId::AuthorPlaceholder => "author_placeholder",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring rule
///
/// Implementations must be pure: the same metadata always yields the same
/// outcome, with no I/O and no interior state.
pub trait Rule: Send + Sync {
    /// Rule identifier for reports
    fn id(&self) -> RuleId;

    /// Evaluate the rule against one metadata record
    fn check(&self, metadata: &ImageMetadata) -> RuleOutcome;
}

/// Result of a single rule
///
/// `penalty` is kept unrounded; rounding happens once on the final score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub issues: Vec<ValidationIssue>,
    pub recommendations: Vec<String>,
    pub penalty: f64,
}

impl RuleOutcome {
    /// Outcome with no findings
    pub fn pass() -> Self {
        Self::default()
    }

    /// Record an issue and add its penalty
    pub fn flag(
        &mut self,
        severity: Severity,
        field: Option<MetadataField>,
        message: impl Into<String>,
        penalty: f64,
    ) -> &mut Self {
        self.issues.push(ValidationIssue::new(severity, field, message));
        self.penalty += penalty;
        self
    }

    pub fn recommend(&mut self, recommendation: impl Into<String>) -> &mut Self {
        self.recommendations.push(recommendation.into());
        self
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Outcome of one rule, tagged with the rule that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleReport {
    pub rule: RuleId,
    #[serde(flatten)]
    pub outcome: RuleOutcome,
}

/// Trimmed character count (Unicode scalar values)
pub(crate) fn char_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// Whitespace-separated word count
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
