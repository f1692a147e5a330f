//! stockmeta-validator library interface
//!
//! Microstock metadata compliance engine: scores AI-produced listing metadata
//! (title, description, keywords, classification) against marketplace
//! submission policy and explains what to fix.
//!
//! The engine (`validator`, `rules`, `denylist`, `types`) is pure and
//! synchronous. The `host` module holds the input boundary and report
//! rendering used by the `stockmeta-check` binary.

pub mod denylist;
pub mod host;
pub mod rules;
pub mod types;
pub mod validator;

pub use crate::denylist::{BrandCategory, BrandDenylist};
pub use crate::types::{
    ContentType, ImageMetadata, MetadataField, ScoreBand, Severity, ValidationIssue,
    ValidationResult,
};
pub use crate::validator::MetadataValidator;

use once_cell::sync::Lazy;

static DEFAULT_VALIDATOR: Lazy<MetadataValidator> = Lazy::new(MetadataValidator::new);

/// Validate one metadata record with the built-in rules and denylist
pub fn validate(metadata: &ImageMetadata) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(metadata)
}
