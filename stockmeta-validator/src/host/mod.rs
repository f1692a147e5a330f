//! Host-side boundary for the validator
//!
//! - **input**: decoding metadata documents (files or stdin)
//! - **report**: per-record reports and their text/JSON rendering

pub mod input;
pub mod report;

pub use input::{parse_document, read_source, MetadataRecord};
pub use report::{
    exit_status, CliFormatter, RecordReport, EXIT_ACCEPTED, EXIT_FAILURE, EXIT_REJECTED,
};
