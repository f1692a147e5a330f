//! # Stockmeta Common Library
//!
//! Shared code for the stockmeta crates:
//! - Error and result types
//! - Configuration loading (logging, output, submission policy)

pub mod config;
pub mod error;

pub use error::{Error, Result};
