//! Document editing operations
//!
//! Mutations that keep the model invariant intact: every term's
//! `translations` and `flags` vectors stay exactly as long as the language
//! list, resized in the same step that changes the language list. Validation
//! (index checks, code uniqueness) lives in the manager; these operations are
//! the mechanical layer under it.

use super::document::{DumpDocument, Language, Term};
use super::enums::TermType;

// ============================================================================
// DumpDocument editing methods
// ============================================================================

impl DumpDocument {
    /// Append a language and grow every term's per-language vectors in lockstep.
    ///
    /// When `copy_from` names an existing language index, the new column is
    /// seeded with that language's translations and flags; otherwise with
    /// `""` / `0`. An out-of-range `copy_from` is treated as none.
    ///
    /// # Returns
    /// The index of the new language.
    pub fn add_language(&mut self, language: Language, copy_from: Option<usize>) -> usize {
        let source = copy_from.filter(|&i| i < self.languages.len());
        for term in &mut self.terms {
            let translation = source
                .and_then(|i| term.translations.get(i).cloned())
                .unwrap_or_default();
            let flag = source.and_then(|i| term.flags.get(i).copied()).unwrap_or(0);
            term.translations.push(translation);
            term.flags.push(flag);
        }
        self.languages.push(language);
        self.languages.len() - 1
    }

    /// Remove a language and every term's column at that index in one step.
    ///
    /// `languages_touch` is opaque pass-through data and is not resized.
    ///
    /// # Returns
    /// `true` if the index was in range and the language was removed.
    pub fn remove_language(&mut self, index: usize) -> bool {
        if index >= self.languages.len() {
            return false;
        }
        for term in &mut self.terms {
            if index < term.translations.len() {
                term.translations.remove(index);
            }
            if index < term.flags.len() {
                term.flags.remove(index);
            }
        }
        self.languages.remove(index);
        true
    }

    /// Append a term, backfilled with one empty translation and zero flag per
    /// language. A non-empty description turns the file-wide description flag
    /// on so the text survives a save.
    ///
    /// # Returns
    /// The index of the new term.
    pub fn add_term(
        &mut self,
        name: impl Into<String>,
        term_type: TermType,
        description: impl Into<String>,
    ) -> usize {
        let mut term = Term::new(name, term_type);
        term.description = description.into();
        term.translations = vec![String::new(); self.languages.len()];
        term.flags = vec![0; self.languages.len()];
        if !term.description.is_empty() {
            self.has_descriptions = true;
        }
        self.terms.push(term);
        self.terms.len() - 1
    }

    /// Remove a term by index.
    ///
    /// # Returns
    /// `true` if the index was in range and the term was removed.
    pub fn remove_term(&mut self, index: usize) -> bool {
        if index >= self.terms.len() {
            return false;
        }
        self.terms.remove(index);
        true
    }

    /// Replace the translation at `(term, language)`.
    ///
    /// # Returns
    /// `true` if both indices were in range.
    pub fn set_translation(
        &mut self,
        term: usize,
        language: usize,
        text: impl Into<String>,
    ) -> bool {
        match self
            .terms
            .get_mut(term)
            .and_then(|t| t.translations.get_mut(language))
        {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    /// Replace the flag byte at `(term, language)`.
    ///
    /// # Returns
    /// `true` if both indices were in range.
    pub fn set_flag(&mut self, term: usize, language: usize, flag: u8) -> bool {
        match self.terms.get_mut(term).and_then(|t| t.flags.get_mut(language)) {
            Some(slot) => {
                *slot = flag;
                true
            }
            None => false,
        }
    }

    /// Rename a term.
    pub fn set_term_name(&mut self, term: usize, name: impl Into<String>) -> bool {
        match self.terms.get_mut(term) {
            Some(t) => {
                t.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Replace a term's description. Non-empty text turns the file-wide
    /// description flag on; it is never auto-cleared.
    pub fn set_term_description(&mut self, term: usize, description: impl Into<String>) -> bool {
        match self.terms.get_mut(term) {
            Some(t) => {
                t.description = description.into();
                if !t.description.is_empty() {
                    self.has_descriptions = true;
                }
                true
            }
            None => false,
        }
    }

    /// Change a term's asset type.
    pub fn set_term_type(&mut self, term: usize, term_type: TermType) -> bool {
        match self.terms.get_mut(term) {
            Some(t) => {
                t.term_type = term_type;
                true
            }
            None => false,
        }
    }

    /// Index of the first term with this exact name.
    #[must_use]
    pub fn find_term(&self, name: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.name == name)
    }

    /// Index of the first language with this exact code.
    #[must_use]
    pub fn find_language(&self, code: &str) -> Option<usize> {
        self.languages.iter().position(|l| l.code == code)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::document::{DumpDocument, Language};
    use crate::model::enums::TermType;

    fn two_language_doc() -> DumpDocument {
        let mut doc = DumpDocument::default();
        doc.add_language(Language::new("English", "en"), None);
        doc.add_language(Language::new("French", "fr"), None);
        let term = doc.add_term("GREETING", TermType::Text, "");
        doc.set_translation(term, 0, "Hi");
        doc.set_translation(term, 1, "Salut");
        doc
    }

    #[test]
    fn test_add_language_backfills_terms() {
        let mut doc = two_language_doc();
        let idx = doc.add_language(Language::new("German", "de"), None);

        assert_eq!(idx, 2);
        assert_eq!(doc.language_count(), 3);
        for term in &doc.terms {
            assert_eq!(term.translations.len(), 3);
            assert_eq!(term.flags.len(), 3);
        }
        assert_eq!(doc.translation(0, 2), Some(""));
    }

    #[test]
    fn test_add_language_copy_from() {
        let mut doc = two_language_doc();
        doc.set_flag(0, 1, 7);
        let idx = doc.add_language(Language::new("Quebecois", "fr-CA"), Some(1));

        assert_eq!(doc.translation(0, idx), Some("Salut"));
        assert_eq!(doc.translation_flag(0, idx), Some(7));
    }

    #[test]
    fn test_add_language_copy_from_out_of_range() {
        let mut doc = two_language_doc();
        let idx = doc.add_language(Language::new("German", "de"), Some(99));
        assert_eq!(doc.translation(0, idx), Some(""));
    }

    #[test]
    fn test_remove_language_shifts_columns() {
        let mut doc = two_language_doc();
        assert!(doc.remove_language(0));

        assert_eq!(doc.language_count(), 1);
        assert_eq!(doc.languages[0].code, "fr");
        for term in &doc.terms {
            assert_eq!(term.translations.len(), 1);
            assert_eq!(term.flags.len(), 1);
        }
        assert_eq!(doc.translation(0, 0), Some("Salut"));
        assert!(!doc.remove_language(5));
    }

    #[test]
    fn test_add_term_backfill_and_description_flag() {
        let mut doc = two_language_doc();
        assert!(!doc.has_descriptions);

        let idx = doc.add_term("FAREWELL", TermType::Text, "shown on exit");
        assert_eq!(doc.terms[idx].translations.len(), 2);
        assert_eq!(doc.terms[idx].flags.len(), 2);
        assert!(doc.has_descriptions);
    }

    #[test]
    fn test_set_term_description_flips_flag() {
        let mut doc = two_language_doc();
        assert!(doc.set_term_description(0, "greeting text"));
        assert!(doc.has_descriptions);

        // clearing the text never clears the file-wide flag
        assert!(doc.set_term_description(0, ""));
        assert!(doc.has_descriptions);
    }

    #[test]
    fn test_out_of_range_edits_return_false() {
        let mut doc = two_language_doc();
        assert!(!doc.set_translation(9, 0, "x"));
        assert!(!doc.set_translation(0, 9, "x"));
        assert!(!doc.set_flag(0, 9, 1));
        assert!(!doc.set_term_name(9, "x"));
        assert!(!doc.remove_term(9));
    }

    #[test]
    fn test_find_helpers() {
        let doc = two_language_doc();
        assert_eq!(doc.find_term("GREETING"), Some(0));
        assert_eq!(doc.find_term("MISSING"), None);
        assert_eq!(doc.find_language("fr"), Some(1));
        assert_eq!(doc.find_language("xx"), None);
    }

    #[test]
    fn test_length_invariant_over_random_edits() {
        let mut doc = two_language_doc();
        doc.add_language(Language::new("German", "de"), Some(0));
        doc.add_term("SECOND", TermType::Font, "");
        doc.remove_language(1);
        doc.add_language(Language::new("Polish", "pl"), None);
        doc.remove_language(0);

        for term in &doc.terms {
            assert_eq!(term.translations.len(), doc.languages.len());
            assert_eq!(term.flags.len(), doc.languages.len());
        }
    }
}
