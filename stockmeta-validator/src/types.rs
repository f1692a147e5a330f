//! Core Types for the Metadata Validator
//!
//! Defines the input record produced by the metadata generation step and the
//! result record consumed by the presentation layer:
//! - **Input:** `ImageMetadata`
//! - **Output:** `ValidationResult` made of `ValidationIssue`s and recommendations
//!
//! JSON field names follow the producer's camelCase shape (`contentType`, `isAI`).
//! Every input field has a serde default, so a partially filled record is
//! normalized to empty values at the deserialization boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Input
// ============================================================================

/// Content classification of a generated image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    Photography,
    Illustration,
    #[serde(rename = "3D Render")]
    Render3d,
    Vector,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentType::Photography => "Photography",
            ContentType::Illustration => "Illustration",
            ContentType::Render3d => "3D Render",
            ContentType::Vector => "Vector",
        };
        f.write_str(name)
    }
}

/// Candidate listing metadata for one image
///
/// Owned by the caller; the validator only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageMetadata {
    /// Candidate listing title
    pub title: String,
    /// Candidate listing description
    pub description: String,
    /// Candidate search keywords (may contain duplicates or mixed case)
    pub keywords: Vec<String>,
    /// Marketplace category
    pub category: String,
    /// Content classification
    pub content_type: ContentType,
    /// AI-generated content disclosure flag
    #[serde(rename = "isAI")]
    pub is_ai: bool,
    /// Author credit, expected to carry the `{{author}}` placeholder
    pub author: String,
}

/// Attribute of `ImageMetadata` an issue refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetadataField {
    Title,
    Description,
    Keywords,
    Category,
    ContentType,
    #[serde(rename = "isAI")]
    IsAi,
    Author,
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetadataField::Title => "title",
            MetadataField::Description => "description",
            MetadataField::Keywords => "keywords",
            MetadataField::Category => "category",
            MetadataField::ContentType => "contentType",
            MetadataField::IsAi => "isAI",
            MetadataField::Author => "author",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Output
// ============================================================================

/// Issue severity
///
/// Ordered from most to least serious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Submission-blocking
    Error,
    /// Advisory
    Warning,
    /// Cosmetic
    Info,
}

impl Severity {
    /// Whether issues of this severity block submission
    pub fn is_blocking(self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        f.write_str(name)
    }
}

/// One compliance finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<MetadataField>,
}

impl ValidationIssue {
    pub fn new(severity: Severity, field: Option<MetadataField>, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            field,
        }
    }
}

/// Coarse score grade used for the colored indicator next to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Score 80-100
    Excellent,
    /// Score 50-79
    Fair,
    /// Score 0-49
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Excellent,
            50..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        };
        f.write_str(name)
    }
}

/// Validation result
///
/// Built fresh on every call; identical input yields an identical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Compliance score (0-100)
    pub score: u8,
    /// Issues in rule evaluation order
    pub issues: Vec<ValidationIssue>,
    /// Actionable recommendations (not one-to-one with issues)
    pub recommendations: Vec<String>,
}

impl ValidationResult {
    /// Any submission-blocking issue present
    pub fn has_blocking_issues(&self) -> bool {
        self.issues.iter().any(|issue| issue.severity.is_blocking())
    }

    /// Number of issues with the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|issue| issue.severity == severity).count()
    }

    /// Issues referring to one metadata field
    pub fn issues_for(&self, field: MetadataField) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |issue| issue.field == Some(field))
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

// ============================================================================
// Tests
// ============================================================================
