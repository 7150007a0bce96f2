//! TXT dump reading

use std::fs;
use std::path::Path;

use tracing::debug;

use super::tree::DumpTree;
use crate::error::Result;
use crate::formats::mapping::document_from_value;
use crate::model::DumpDocument;

/// Read and parse a TXT dump file.
pub fn read_txt_dump<P: AsRef<Path>>(path: P) -> Result<DumpDocument> {
    let path = path.as_ref();
    debug!("Reading TXT dump from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_txt_dump(&text)
}

/// Parse TXT dump text into a document.
///
/// Runs in two stages: the indentation tree is rebuilt first (syntax
/// errors carry a line number), then the tree is checked and extracted
/// as a `LanguageSourceData` asset (content errors carry a field path).
pub fn parse_txt_dump(text: &str) -> Result<DumpDocument> {
    let tree = DumpTree::parse(text)?;
    document_from_value(&tree.to_json())
}
