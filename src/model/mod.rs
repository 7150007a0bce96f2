//! Normalized dump model and its editing operations

mod document;
mod editor;
mod enums;

pub use document::{AssetEnvelope, DumpDocument, Language, PPtr, SourceMetadata, Term};
pub use enums::{
    AllowUnloadLanguages, GoogleUpdateFrequency, GoogleUpdateSynchronization,
    LanguageDataFlags, MissingTranslationAction, TermType,
};
