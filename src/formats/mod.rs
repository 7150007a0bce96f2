//! Dump format support
//!
//! Two encodings of the same asset: [`txt`] for UABEA's plain-text dump
//! and [`json`] for its JSON dump. Both converge on
//! [`DumpDocument`](crate::model::DumpDocument), so a file opened in one
//! format can be saved in the other.

pub mod json;
mod mapping;
pub mod txt;
pub mod value;

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::DumpDocument;

pub use json::{parse_json_dump, read_json_dump, serialize_json_dump, write_json_dump};
pub use txt::{parse_txt_dump, read_txt_dump, serialize_txt_dump, write_txt_dump};

/// A supported dump encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    /// UABEA plain-text dump (`.txt`).
    Txt,
    /// UABEA JSON dump (`.json`).
    Json,
}

impl DumpFormat {
    /// Determine the format from a file extension, case-insensitively.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "txt" => Ok(Self::Txt),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnsupportedExtension(extension)),
        }
    }
}

impl fmt::Display for DumpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Txt => write!(f, "TXT"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// Read a dump file, choosing the format from its extension.
pub fn read_dump<P: AsRef<Path>>(path: P) -> Result<DumpDocument> {
    let path = path.as_ref();
    match DumpFormat::from_path(path)? {
        DumpFormat::Txt => read_txt_dump(path),
        DumpFormat::Json => read_json_dump(path),
    }
}

/// Write a dump file, choosing the format from its extension.
pub fn write_dump<P: AsRef<Path>>(path: P, document: &DumpDocument) -> Result<()> {
    let path = path.as_ref();
    match DumpFormat::from_path(path)? {
        DumpFormat::Txt => write_txt_dump(path, document),
        DumpFormat::Json => write_json_dump(path, document),
    }
}

/// Serialize a document in the given format.
pub fn serialize_dump(document: &DumpDocument, format: DumpFormat) -> Result<String> {
    match format {
        DumpFormat::Txt => Ok(serialize_txt_dump(document)),
        DumpFormat::Json => serialize_json_dump(document),
    }
}

/// Parse dump text in the given format.
pub fn parse_dump(text: &str, format: DumpFormat) -> Result<DumpDocument> {
    match format {
        DumpFormat::Txt => parse_txt_dump(text),
        DumpFormat::Json => parse_json_dump(text),
    }
}
