//! Normalized in-memory model of an I2 Localization dump
//!
//! `DumpDocument` is the fixed point of the codec: both the TXT and the JSON
//! reader produce it, both writers consume it, and round-tripping a file
//! through the model preserves every field UABEA re-imports.

use super::enums::{
    AllowUnloadLanguages, GoogleUpdateFrequency, GoogleUpdateSynchronization,
    LanguageDataFlags, MissingTranslationAction, TermType,
};

/// A `{m_FileID, m_PathID}` asset reference pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PPtr {
    pub file_id: i64,
    pub path_id: i64,
}

/// Top-level asset fields outside `mSource`, preserved verbatim.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetEnvelope {
    /// `m_GameObject` reference.
    pub game_object: PPtr,
    /// `m_Enabled` byte (UABEA emits 0/1).
    pub enabled: u8,
    /// `m_Script` reference.
    pub script: PPtr,
    /// `m_Name` of the `MonoBehaviour`, usually `I2Languages`.
    pub name: String,
}

/// The fixed bag of `LanguageSourceData` settings, mirrored 1:1 from the dump.
///
/// Opaque pass-through except where a caller explicitly edits a field. Every
/// field here is required in the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMetadata {
    pub user_agrees_to_have_it_on_the_scene: bool,
    pub user_agrees_to_have_it_inside_the_plugins_folder: bool,
    pub google_live_sync_is_upto_date: bool,
    pub case_insensitive_terms: bool,
    pub on_missing_translation: MissingTranslationAction,
    /// `mTerm_AppName` in the dump.
    pub term_app_name: String,
    pub ignore_device_language: bool,
    /// `_AllowUnloadingLanguages` in the dump.
    pub allow_unloading_languages: AllowUnloadLanguages,
    pub google_web_service_url: String,
    pub google_spreadsheet_key: String,
    pub google_spreadsheet_name: String,
    pub google_last_updated_version: String,
    pub google_update_frequency: GoogleUpdateFrequency,
    pub google_in_editor_check_frequency: GoogleUpdateFrequency,
    pub google_update_synchronization: GoogleUpdateSynchronization,
    pub google_update_delay: f64,
    /// Pass-through `{m_FileID, m_PathID}` references.
    pub assets: Vec<PPtr>,
}

impl Default for SourceMetadata {
    /// Inert defaults: toggles off, no-op enum members, empty text fields.
    fn default() -> Self {
        Self {
            user_agrees_to_have_it_on_the_scene: false,
            user_agrees_to_have_it_inside_the_plugins_folder: false,
            google_live_sync_is_upto_date: false,
            case_insensitive_terms: false,
            on_missing_translation: MissingTranslationAction::Empty,
            term_app_name: String::new(),
            ignore_device_language: false,
            allow_unloading_languages: AllowUnloadLanguages::Never,
            google_web_service_url: String::new(),
            google_spreadsheet_key: String::new(),
            google_spreadsheet_name: String::new(),
            google_last_updated_version: String::new(),
            google_update_frequency: GoogleUpdateFrequency::Never,
            google_in_editor_check_frequency: GoogleUpdateFrequency::Never,
            google_update_synchronization: GoogleUpdateSynchronization::Manual,
            google_update_delay: 0.0,
            assets: Vec::new(),
        }
    }
}

/// One translation target.
#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    pub name: String,
    /// Short identifier such as `en` or `pt-BR`. May be empty; kept verbatim.
    pub code: String,
    pub flags: LanguageDataFlags,
}

impl Language {
    /// Create an enabled language.
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            flags: LanguageDataFlags::Enabled,
        }
    }

    /// `"Name [code]"` when a code is present, bare name otherwise.
    ///
    /// Formatting only; the stored `code` is never rewritten.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.code.is_empty() {
            self.name.clone()
        } else {
            format!("{} [{}]", self.name, self.code)
        }
    }
}

/// One localizable entry.
///
/// `translations` and `flags` are index-aligned with the document's language
/// list; the editing operations in [`crate::model::editor`] keep all three the
/// same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    /// Term key. Collisions are possible in the wild and are not deduplicated.
    pub name: String,
    pub term_type: TermType,
    /// Empty when the source file carried no description for this term.
    pub description: String,
    /// One entry per language, positionally aligned.
    pub translations: Vec<String>,
    /// One opaque metadata byte per language, positionally aligned.
    pub flags: Vec<u8>,
    /// Never interpreted; preserved verbatim in position.
    pub languages_touch: Vec<String>,
}

impl Term {
    /// Create a term with no per-language data yet.
    #[must_use]
    pub fn new(name: impl Into<String>, term_type: TermType) -> Self {
        Self {
            name: name.into(),
            term_type,
            description: String::new(),
            translations: Vec::new(),
            flags: Vec::new(),
            languages_touch: Vec::new(),
        }
    }
}

/// A complete parsed dump: envelope, settings, terms and languages.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DumpDocument {
    pub structure: AssetEnvelope,
    pub metadata: SourceMetadata,
    pub terms: Vec<Term>,
    pub languages: Vec<Language>,
    /// True when any source term carried a `Description` field, even an empty
    /// one; when set, every term emits a `Description` field on save.
    pub has_descriptions: bool,
}

impl DumpDocument {
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    /// Translation text at `(term, language)`, if both indices are in range.
    #[must_use]
    pub fn translation(&self, term: usize, language: usize) -> Option<&str> {
        self.terms
            .get(term)
            .and_then(|t| t.translations.get(language))
            .map(String::as_str)
    }

    /// Per-translation flag byte at `(term, language)`.
    #[must_use]
    pub fn translation_flag(&self, term: usize, language: usize) -> Option<u8> {
        self.terms
            .get(term)
            .and_then(|t| t.flags.get(language))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let with_code = Language::new("English", "en");
        assert_eq!(with_code.display_name(), "English [en]");

        let without_code = Language::new("Klingon", "");
        assert_eq!(without_code.display_name(), "Klingon");
    }

    #[test]
    fn test_translation_lookup() {
        let mut doc = DumpDocument::default();
        doc.languages.push(Language::new("English", "en"));
        let mut term = Term::new("GREETING", TermType::Text);
        term.translations.push("Hi".into());
        term.flags.push(0);
        doc.terms.push(term);

        assert_eq!(doc.translation(0, 0), Some("Hi"));
        assert_eq!(doc.translation(0, 1), None);
        assert_eq!(doc.translation(1, 0), None);
        assert_eq!(doc.translation_flag(0, 0), Some(0));
    }
}
