//! # i2loc
//!
//! A pure-Rust library for working with Unity I2 Localization dump files.
//!
//! UABEA exports a `LanguageSourceData` `MonoBehaviour` either as an
//! indented TXT dump or as a JSON dump. Both encodings carry the same
//! data; i2loc parses either into one [`model::DumpDocument`], lets you
//! edit terms and languages, and writes back whichever encoding the
//! target extension names.
//!
//! ## Supported Formats
//!
//! - **TXT dumps** - UABEA's indented `0 MonoBehaviour Base` text export
//! - **JSON dumps** - UABEA's JSON export of the same asset
//!
//! ## Quick Start
//!
//! ### Editing a Dump
//!
//! ```no_run
//! use i2loc::manager::DumpManager;
//!
//! let mut manager = DumpManager::new();
//! manager.open("I2Languages-dump.txt")?;
//!
//! if let Some(term) = manager.find_term("UI/StartButton")? {
//!     if let Some(language) = manager.find_language("fr")? {
//!         manager.set_translation(term, language, "Démarrer")?;
//!     }
//! }
//! manager.save()?;
//! # Ok::<(), i2loc::Error>(())
//! ```
//!
//! ### Converting Between Encodings
//!
//! ```no_run
//! use i2loc::converter::convert_txt_to_json;
//!
//! // Convert a TXT dump to the equivalent JSON dump
//! convert_txt_to_json("I2Languages-dump.txt", "I2Languages-dump.json")?;
//! # Ok::<(), i2loc::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! The prelude provides convenient access to commonly used types:
//!
//! ```
//! use i2loc::prelude::*;
//!
//! // Now you have access to:
//! // - DumpManager, DumpDocument, Term, Language
//! // - DumpFormat, read_dump, write_dump
//! // - Error, Result, and more
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `i2loc` command-line binary

pub mod converter;
pub mod error;
pub mod formats;
pub mod manager;
pub mod model;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::{DumpFormat, parse_dump, read_dump, serialize_dump, write_dump};
    pub use crate::manager::{DumpManager, OpenTicket};
    pub use crate::model::{
        DumpDocument, Language, LanguageDataFlags, MissingTranslationAction, Term, TermType,
    };

    pub use crate::converter;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
