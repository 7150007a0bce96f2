//! Error types for `i2loc`

use thiserror::Error;

/// The error type for `i2loc` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON text in a JSON dump file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ==================== TXT Dump Syntax Errors ====================
    /// A TXT dump line did not match any recognized shape.
    #[error("syntax error at line {line}: {message}: {content:?}")]
    Syntax {
        /// 1-based line number in the dump file.
        line: usize,
        /// What was expected or missing.
        message: String,
        /// The offending line, trimmed.
        content: String,
    },

    // ==================== Content Errors ====================
    /// The document is structurally valid but is not an I2 Localization dump.
    #[error("not an I2Localization dump: {0}")]
    NotLocalizationDump(String),

    /// The dump parsed but holds no terms or no languages.
    #[error("dump has no usable data: {terms} terms, {languages} languages")]
    EmptyDump {
        /// Number of term entries found.
        terms: usize,
        /// Number of language entries found.
        languages: usize,
    },

    /// A required field is absent from the dump.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A field holds a value of the wrong type.
    #[error("field '{field}' is not a valid {expected}")]
    FieldType {
        /// Dotted path of the offending field.
        field: String,
        /// The type the field was expected to coerce to.
        expected: &'static str,
    },

    /// An integer falls outside its enumeration's domain.
    #[error("field '{field}' holds {value}, which is out of range for {domain}")]
    EnumRange {
        /// Dotted path of the offending field.
        field: String,
        /// The raw integer value.
        value: i64,
        /// Name of the enumeration.
        domain: &'static str,
    },

    // ==================== Manager Errors ====================
    /// The file extension maps to no supported dump format.
    #[error("unsupported file extension: {0:?} (expected .txt or .json)")]
    UnsupportedExtension(String),

    /// No document has been opened yet.
    #[error("no document loaded")]
    NoDocument,

    /// A term index is out of range.
    #[error("term index {index} out of range (term count: {count})")]
    TermIndex {
        /// The requested index.
        index: usize,
        /// Number of terms in the document.
        count: usize,
    },

    /// A language index is out of range.
    #[error("language index {index} out of range (language count: {count})")]
    LanguageIndex {
        /// The requested index.
        index: usize,
        /// Number of languages in the document.
        count: usize,
    },

    /// A non-empty language code is already in use.
    #[error("duplicate language code: {0:?}")]
    DuplicateLanguageCode(String),

    /// Another open operation is already in flight on this manager.
    #[error("a file operation is already pending")]
    OperationPending,
}

pub type Result<T> = std::result::Result<T, Error>;
