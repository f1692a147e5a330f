//! Metadata Validator
//!
//! Runs the scoring rules in a fixed order over one `ImageMetadata` record and
//! folds their outcomes into a `ValidationResult`.
//!
//! # Scoring Algorithm
//! - Start with score = 100
//! - Each rule contributes an independent, additive penalty
//! - Final score = round(clamp(100 - sum(penalties), 0, 100))
//! - Rounding happens once, after all penalties are summed
//!
//! # Evaluation Order
//! title → description → keywords → compliance → technical. Issues and
//! recommendations are appended in that order.
//!
//! # Example
//! ```rust,ignore
//! use stockmeta_validator::{ImageMetadata, MetadataValidator};
//!
//! let validator = MetadataValidator::new();
//! let result = validator.validate(&metadata);
//!
//! println!("Score: {} ({})", result.score, result.band());
//! for issue in &result.issues {
//!     println!("[{}] {}", issue.severity, issue.message);
//! }
//! ```

use crate::denylist::BrandDenylist;
use crate::rules::{
    AiDisclosureRule, AuthorPlaceholderRule, BrandComplianceRule, DescriptionRule,
    DuplicateKeywordsRule, KeywordCountRule, Rule, RuleId, RuleReport, ShortKeywordsRule,
    TitleRule,
};
use crate::types::{ImageMetadata, Severity, ValidationResult};
use std::sync::Arc;
use tracing::{debug, trace};

const MAX_SCORE: f64 = 100.0;

/// Metadata Validator
///
/// Stateless after construction; safe to share across threads and to call
/// concurrently.
pub struct MetadataValidator {
    rules: Vec<Box<dyn Rule>>,
}

impl MetadataValidator {
    /// Create validator with the built-in brand denylist
    pub fn new() -> Self {
        Self::with_denylist(BrandDenylist::standard())
    }

    /// Create validator with a substitute brand denylist
    pub fn with_denylist(denylist: Arc<BrandDenylist>) -> Self {
        Self {
            rules: vec![
                Box::new(TitleRule),
                Box::new(DescriptionRule),
                Box::new(KeywordCountRule),
                Box::new(DuplicateKeywordsRule),
                Box::new(ShortKeywordsRule),
                Box::new(BrandComplianceRule::new(denylist)),
                Box::new(AiDisclosureRule),
                Box::new(AuthorPlaceholderRule),
            ],
        }
    }

    /// Active rules in evaluation order
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    /// Run every rule and return the per-rule outcomes
    pub fn evaluate(&self, metadata: &ImageMetadata) -> Vec<RuleReport> {
        self.rules
            .iter()
            .map(|rule| {
                let outcome = rule.check(metadata);
                trace!(
                    rule = %rule.id(),
                    issues = outcome.issues.len(),
                    penalty = outcome.penalty,
                    "Rule evaluated"
                );
                RuleReport {
                    rule: rule.id(),
                    outcome,
                }
            })
            .collect()
    }

    /// Score and critique one metadata record
    pub fn validate(&self, metadata: &ImageMetadata) -> ValidationResult {
        let reports = self.evaluate(metadata);

        let mut issues = Vec::new();
        let mut recommendations = Vec::new();
        let mut total_penalty = 0.0_f64;

        for report in reports {
            total_penalty += report.outcome.penalty;
            issues.extend(report.outcome.issues);
            recommendations.extend(report.outcome.recommendations);
        }

        let result = ValidationResult {
            score: final_score(total_penalty),
            issues,
            recommendations,
        };

        debug!(
            score = result.score,
            penalty = total_penalty,
            errors = result.count(Severity::Error),
            warnings = result.count(Severity::Warning),
            infos = result.count(Severity::Info),
            "Metadata validation complete"
        );

        result
    }
}

impl Default for MetadataValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp, then round once
fn final_score(total_penalty: f64) -> u8 {
    let raw = MAX_SCORE - total_penalty;
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, MAX_SCORE).round() as u8
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denylist::BrandCategory;
    use crate::types::MetadataField;

    fn clean_metadata() -> ImageMetadata {
        ImageMetadata {
            title: "Misty pine forest at sunrise in the valley".to_string(),
            description: "Morning fog drifts between tall pine trees on a quiet hillside".to_string(),
            keywords: (0..35).map(|i| format!("term{:02}", i)).collect(),
            category: "Nature".to_string(),
            is_ai: true,
            author: "{{author}}".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_rule_order() {
        let validator = MetadataValidator::new();
        assert_eq!(
            validator.rule_ids(),
            vec![
                RuleId::Title,
                RuleId::Description,
                RuleId::KeywordCount,
                RuleId::DuplicateKeywords,
                RuleId::ShortKeywords,
                RuleId::BrandCompliance,
                RuleId::AiDisclosure,
                RuleId::AuthorPlaceholder,
            ]
        );
    }

    #[test]
    fn test_clean_metadata_scores_100() {
        let result = MetadataValidator::new().validate(&clean_metadata());
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_evaluate_reports_every_rule() {
        let mut metadata = clean_metadata();
        metadata.keywords.truncate(29);

        let reports = MetadataValidator::new().evaluate(&metadata);
        assert_eq!(reports.len(), 8);

        let keyword_report = reports
            .iter()
            .find(|r| r.rule == RuleId::KeywordCount)
            .unwrap();
        assert_eq!(keyword_report.outcome.penalty, 1.5);
        assert!(reports
            .iter()
            .filter(|r| r.rule != RuleId::KeywordCount)
            .all(|r| r.outcome.is_clean()));
    }

    #[test]
    fn test_issue_order_follows_rules() {
        let metadata = ImageMetadata {
            title: "Nike".to_string(),
            ..Default::default()
        };
        let result = MetadataValidator::new().validate(&metadata);
        let fields: Vec<Option<MetadataField>> = result.issues.iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![
                Some(MetadataField::Title),
                Some(MetadataField::Title),
                Some(MetadataField::Description),
                Some(MetadataField::Keywords),
                None,
                Some(MetadataField::IsAi),
                Some(MetadataField::Author),
            ]
        );
        // 5 + 5 + 10 + 45 + 25 + 10
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_rounding_happens_once() {
        // shortfall of 3 keywords: 4.5 -> 95.5 -> 96
        let mut metadata = clean_metadata();
        metadata.keywords.truncate(27);
        assert_eq!(MetadataValidator::new().validate(&metadata).score, 96);
    }

    #[test]
    fn test_final_score_clamps() {
        assert_eq!(final_score(0.0), 100);
        assert_eq!(final_score(-50.0), 100);
        assert_eq!(final_score(1_000.0), 0);
        assert_eq!(final_score(32.5), 68);
        assert_eq!(final_score(f64::NAN), 0);
    }

    #[test]
    fn test_custom_denylist_replaces_standard() {
        let validator = MetadataValidator::with_denylist(Arc::new(BrandDenylist::new([(
            BrandCategory::Fashion,
            "pine",
        )])));
        let result = validator.validate(&clean_metadata());
        assert_eq!(result.score, 75);
        assert!(result.issues[0].message.contains("pine"));
    }
}
