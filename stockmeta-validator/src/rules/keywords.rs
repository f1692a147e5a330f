//! Keyword checks
//!
//! - **KeywordCountRule**: 30-50 keywords, penalty proportional to the gap
//! - **DuplicateKeywordsRule**: duplicates after trimming and lower-casing
//! - **ShortKeywordsRule**: more than 3 keywords under 3 characters (no penalty)

use super::{Rule, RuleId, RuleOutcome};
use crate::types::{ImageMetadata, MetadataField, Severity};
use std::collections::HashSet;

pub const KEYWORDS_MIN: usize = 30;
pub const KEYWORDS_MAX: usize = 50;
/// Keywords shorter than this (trimmed) are considered degenerate
pub const KEYWORD_MIN_CHARS: usize = 3;
/// Degenerate keywords tolerated before an info issue is raised
pub const SHORT_KEYWORDS_TOLERATED: usize = 3;

const SHORTFALL_PENALTY_EACH: f64 = 1.5;
const EXCESS_PENALTY_EACH: f64 = 2.0;
const DUPLICATE_PENALTY_EACH: f64 = 3.0;

pub struct KeywordCountRule;

impl Rule for KeywordCountRule {
    fn id(&self) -> RuleId {
        RuleId::KeywordCount
    }

    fn check(&self, metadata: &ImageMetadata) -> RuleOutcome {
        let mut outcome = RuleOutcome::pass();
        let count = metadata.keywords.len();

        if count < KEYWORDS_MIN {
            let shortfall = KEYWORDS_MIN - count;
            outcome
                .flag(
                    Severity::Error,
                    Some(MetadataField::Keywords),
                    format!(
                        "Not enough keywords: {} of {} minimum ({} missing)",
                        count, KEYWORDS_MIN, shortfall
                    ),
                    shortfall as f64 * SHORTFALL_PENALTY_EACH,
                )
                .recommend(format!("Add {} more relevant keywords", shortfall));
        } else if count > KEYWORDS_MAX {
            let excess = count - KEYWORDS_MAX;
            outcome
                .flag(
                    Severity::Error,
                    Some(MetadataField::Keywords),
                    format!(
                        "Too many keywords: {} exceeds the {} maximum by {}",
                        count, KEYWORDS_MAX, excess
                    ),
                    excess as f64 * EXCESS_PENALTY_EACH,
                )
                .recommend(format!("Remove the {} least relevant keywords", excess));
        }

        outcome
    }
}

pub struct DuplicateKeywordsRule;

impl DuplicateKeywordsRule {
    /// Number of keywords that repeat an earlier one (case/whitespace-insensitive)
    pub fn duplicate_count(keywords: &[String]) -> usize {
        let unique: HashSet<String> = keywords
            .iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .collect();
        keywords.len() - unique.len()
    }
}

impl Rule for DuplicateKeywordsRule {
    fn id(&self) -> RuleId {
        RuleId::DuplicateKeywords
    }

    fn check(&self, metadata: &ImageMetadata) -> RuleOutcome {
        let mut outcome = RuleOutcome::pass();
        let duplicates = Self::duplicate_count(&metadata.keywords);

        if duplicates > 0 {
            outcome
                .flag(
                    Severity::Warning,
                    Some(MetadataField::Keywords),
                    format!(
                        "{} duplicate keyword(s) found (ignoring case and surrounding spaces)",
                        duplicates
                    ),
                    duplicates as f64 * DUPLICATE_PENALTY_EACH,
                )
                .recommend("Remove duplicate keywords so each term appears once");
        }

        outcome
    }
}

pub struct ShortKeywordsRule;

impl Rule for ShortKeywordsRule {
    fn id(&self) -> RuleId {
        RuleId::ShortKeywords
    }

    fn check(&self, metadata: &ImageMetadata) -> RuleOutcome {
        let mut outcome = RuleOutcome::pass();
        let short: Vec<&str> = metadata
            .keywords
            .iter()
            .map(|keyword| keyword.trim())
            .filter(|keyword| keyword.chars().count() < KEYWORD_MIN_CHARS)
            .collect();

        if short.len() > SHORT_KEYWORDS_TOLERATED {
            outcome
                .flag(
                    Severity::Info,
                    Some(MetadataField::Keywords),
                    format!(
                        "{} keywords are shorter than {} characters (e.g. \"{}\")",
                        short.len(),
                        KEYWORD_MIN_CHARS,
                        short[0]
                    ),
                    0.0,
                )
                .recommend("Replace short or generic keywords with specific, descriptive terms");
        }

        outcome
    }
}
