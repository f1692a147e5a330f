//! Metadata document decoding
//!
//! A document is either a single metadata object or an array of them. Missing
//! fields are normalized to empty defaults by serde; malformed JSON or a field
//! of the wrong type fails the whole document.

use crate::types::ImageMetadata;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use stockmeta_common::{Error, Result};
use tracing::debug;

/// Path value meaning "read from stdin"
pub const STDIN_SOURCE: &str = "-";

/// One decoded metadata record with its origin
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    /// File path or `<stdin>`
    pub source: String,
    /// Position within the source document (0 for single-object documents)
    pub index: usize,
    pub metadata: ImageMetadata,
}

/// Decode a JSON document into metadata records
///
/// Each record must be a JSON object. Arrays are never read positionally
/// into a record.
pub fn parse_document(source: &str, content: &str) -> Result<Vec<MetadataRecord>> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    let records = match value {
        Value::Object(_) => vec![decode_record(source, 0, value)?],
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| decode_record(source, index, item))
            .collect::<Result<Vec<_>>>()?,
        _ => {
            return Err(Error::InvalidInput(format!(
                "{}: expected a metadata object or an array of objects",
                source
            )))
        }
    };

    debug!(source, records = records.len(), "Decoded metadata document");
    Ok(records)
}

fn decode_record(source: &str, index: usize, value: Value) -> Result<MetadataRecord> {
    if !value.is_object() {
        return Err(Error::InvalidInput(format!(
            "{}: record {} is not a metadata object",
            source, index
        )));
    }
    let metadata: ImageMetadata = serde_json::from_value(value)
        .map_err(|e| Error::InvalidInput(format!("{}: record {}: {}", source, index, e)))?;
    Ok(MetadataRecord {
        source: source.to_string(),
        index,
        metadata,
    })
}

/// Read and decode one source (`-` for stdin)
pub fn read_source(path: &Path) -> Result<Vec<MetadataRecord>> {
    if path.as_os_str() == STDIN_SOURCE {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return parse_document("<stdin>", &content);
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_document(&path.display().to_string(), &content)
}
