//! Brand / trademark compliance
//!
//! Looks for denylisted terms in the title, the description, and every
//! keyword. One error lists all distinct terms found; the penalty scales with
//! the number of distinct terms, not with occurrences.

use super::{Rule, RuleId, RuleOutcome};
use crate::denylist::BrandDenylist;
use crate::types::{ImageMetadata, Severity};
use std::sync::Arc;

const PENALTY_PER_TERM: f64 = 25.0;

pub struct BrandComplianceRule {
    denylist: Arc<BrandDenylist>,
}

impl BrandComplianceRule {
    pub fn new(denylist: Arc<BrandDenylist>) -> Self {
        Self { denylist }
    }
}

impl Default for BrandComplianceRule {
    fn default() -> Self {
        Self::new(BrandDenylist::standard())
    }
}

impl Rule for BrandComplianceRule {
    fn id(&self) -> RuleId {
        RuleId::BrandCompliance
    }

    fn check(&self, metadata: &ImageMetadata) -> RuleOutcome {
        let mut outcome = RuleOutcome::pass();
        let texts = [metadata.title.as_str(), metadata.description.as_str()]
            .into_iter()
            .chain(metadata.keywords.iter().map(String::as_str));
        let found = self.denylist.find_in(texts);

        if !found.is_empty() {
            let listed = found.join(", ");
            outcome
                .flag(
                    Severity::Error,
                    None,
                    format!("Trademarked or brand terms detected: {}", listed),
                    PENALTY_PER_TERM * found.len() as f64,
                )
                .recommend(format!(
                    "Remove every instance of these terms from title, description and keywords: {}",
                    listed
                ));
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denylist::BrandCategory;

    fn metadata(title: &str, description: &str, keywords: &[&str]) -> ImageMetadata {
        ImageMetadata {
            title: title.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_brand_in_title() {
        let outcome = BrandComplianceRule::default().check(&metadata("Amazing iPhone photo", "", &[]));
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].severity, Severity::Error);
        assert!(outcome.issues[0].message.ends_with(": iphone"));
        assert_eq!(outcome.penalty, 25.0);
    }

    #[test]
    fn test_two_brands_single_issue() {
        let outcome = BrandComplianceRule::default()
            .check(&metadata("Runner in Nike shoes beside a Tesla", "", &[]));
        assert_eq!(outcome.issues.len(), 1);
        assert!(outcome.issues[0].message.contains("tesla"));
        assert!(outcome.issues[0].message.contains("nike"));
        assert_eq!(outcome.penalty, 50.0);
    }

    #[test]
    fn test_terms_counted_once_across_fields() {
        let outcome = BrandComplianceRule::default().check(&metadata(
            "Disney castle",
            "A disney themed party",
            &["DISNEY", "castle", "disneyland"],
        ));
        assert_eq!(outcome.penalty, 25.0);
    }

    #[test]
    fn test_brand_in_keyword_only() {
        let outcome =
            BrandComplianceRule::default().check(&metadata("Quiet lake", "Calm water", &["lake", "Canon"]));
        assert_eq!(outcome.penalty, 25.0);
        assert!(outcome.recommendations[0].ends_with("canon"));
    }

    #[test]
    fn test_substring_false_positive_is_kept() {
        let outcome = BrandComplianceRule::default()
            .check(&metadata("Families who can afford a house", "", &[]));
        assert_eq!(outcome.penalty, 25.0);
        assert!(outcome.issues[0].message.contains("ford"));
    }

    #[test]
    fn test_custom_denylist() {
        let rule = BrandComplianceRule::new(Arc::new(BrandDenylist::new([(
            BrandCategory::Technology,
            "acme",
        )])));
        assert!(rule.check(&metadata("Amazing iPhone photo", "", &[])).is_clean());
        assert_eq!(rule.check(&metadata("Acme anvil", "", &[])).penalty, 25.0);
    }
}
