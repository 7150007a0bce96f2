//! JSON dump writing

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::formats::mapping::document_to_value;
use crate::model::DumpDocument;

/// Serialize and write a document to a JSON dump file.
pub fn write_json_dump<P: AsRef<Path>>(path: P, document: &DumpDocument) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, serialize_json_dump(document)?)?;
    debug!("Wrote JSON dump to {}", path.display());
    Ok(())
}

/// Serialize a document into pretty-printed JSON dump text.
///
/// Two-space indentation, canonical field order, no trailing newline.
pub fn serialize_json_dump(document: &DumpDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(&document_to_value(document))?)
}
