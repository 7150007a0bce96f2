//! Dump file lifecycle
//!
//! [`DumpManager`] owns one open dump at a time: it loads a file into a
//! [`DumpDocument`], tracks whether edits have diverged from the file on
//! disk, and saves back in whichever format the target extension names.
//!
//! Opens can run off-thread. [`DumpManager::begin_open`] hands out a
//! generation-stamped [`OpenTicket`]; the blocking read happens wherever
//! the caller likes, and [`DumpManager::finish_open`] installs the result
//! only if no newer open or cancel superseded it in the meantime.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::formats::{DumpFormat, read_dump, write_dump};
use crate::model::{DumpDocument, Language, LanguageDataFlags, Term, TermType};

/// Handle for an in-flight open. See [`DumpManager::begin_open`].
#[derive(Debug)]
pub struct OpenTicket {
    path: PathBuf,
    generation: u64,
}

impl OpenTicket {
    /// The file this ticket will load.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the blocking read half of the open. Safe to call off-thread;
    /// the ticket holds no reference to the manager.
    pub fn load(&self) -> Result<DumpDocument> {
        read_dump(&self.path)
    }
}

/// Owns the currently open dump document and its file identity.
#[derive(Debug, Default)]
pub struct DumpManager {
    file_path: Option<PathBuf>,
    content: Option<DumpDocument>,
    /// Snapshot of `content` as of the last successful open or save.
    saved: Option<DumpDocument>,
    /// Generation of the open currently in flight, if any.
    pending: Option<u64>,
    generation: u64,
}

impl DumpManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Open and save ====================

    /// Open a dump file synchronously, replacing any current document.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let ticket = self.begin_open(path)?;
        let outcome = ticket.load();
        self.finish_open(ticket, outcome).map(|_| ())
    }

    /// Start an open without blocking on the read.
    ///
    /// Fails fast if the extension is unsupported or another open is
    /// already pending. The returned ticket is what [`Self::finish_open`]
    /// checks against: only the most recently issued ticket can install.
    pub fn begin_open<P: AsRef<Path>>(&mut self, path: P) -> Result<OpenTicket> {
        if self.pending.is_some() {
            return Err(Error::OperationPending);
        }
        let path = path.as_ref();
        DumpFormat::from_path(path)?;
        self.generation += 1;
        self.pending = Some(self.generation);
        debug!("Opening {} (ticket {})", path.display(), self.generation);
        Ok(OpenTicket {
            path: path.to_path_buf(),
            generation: self.generation,
        })
    }

    /// Complete an open started with [`Self::begin_open`].
    ///
    /// A stale ticket (cancelled or superseded) is discarded without
    /// touching the current document, and even its errors are swallowed.
    ///
    /// # Returns
    /// `true` if the document was installed, `false` if the ticket was
    /// stale.
    pub fn finish_open(
        &mut self,
        ticket: OpenTicket,
        outcome: Result<DumpDocument>,
    ) -> Result<bool> {
        if self.pending != Some(ticket.generation) {
            debug!(
                "Discarding stale open result for {} (ticket {})",
                ticket.path.display(),
                ticket.generation
            );
            return Ok(false);
        }
        self.pending = None;
        let document = outcome?;
        info!(
            "Opened {}: {} terms, {} languages",
            ticket.path.display(),
            document.terms.len(),
            document.languages.len()
        );
        self.saved = Some(document.clone());
        self.content = Some(document);
        self.file_path = Some(ticket.path);
        Ok(true)
    }

    /// Abandon any in-flight open. Its eventual result will be discarded.
    pub fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            debug!("Cancelled pending open");
        }
    }

    /// Save the document back to the file it was opened from.
    pub fn save(&mut self) -> Result<()> {
        let path = self.file_path.clone().ok_or(Error::NoDocument)?;
        self.save_as(path)
    }

    /// Save the document to `path`, in the format its extension names,
    /// and adopt that path as the document's file identity.
    ///
    /// The snapshot used for [`Self::is_modified`] is only refreshed after
    /// the write succeeds, so a failed save leaves the document dirty.
    pub fn save_as<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        if self.pending.is_some() {
            return Err(Error::OperationPending);
        }
        let path = path.as_ref();
        let document = self.content.as_ref().ok_or(Error::NoDocument)?;
        write_dump(path, document)?;
        info!("Saved {}", path.display());
        self.saved = self.content.clone();
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    // ==================== Document identity ====================

    /// Whether the document has unsaved changes.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        match (&self.content, &self.saved) {
            (Some(current), Some(snapshot)) => current != snapshot,
            (None, _) => false,
            _ => true,
        }
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// File name component of the open file, for titles and logs.
    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    #[must_use]
    pub fn document(&self) -> Option<&DumpDocument> {
        self.content.as_ref()
    }

    // ==================== Read access ====================

    pub fn terms(&self) -> Result<&[Term]> {
        Ok(&self.require()?.terms)
    }

    pub fn languages(&self) -> Result<&[Language]> {
        Ok(&self.require()?.languages)
    }

    pub fn term_count(&self) -> Result<usize> {
        Ok(self.require()?.terms.len())
    }

    pub fn language_count(&self) -> Result<usize> {
        Ok(self.require()?.languages.len())
    }

    /// Display names of all languages, `"Name [code]"` where a code exists.
    pub fn displayed_languages(&self) -> Result<Vec<String>> {
        Ok(self
            .require()?
            .languages
            .iter()
            .map(Language::display_name)
            .collect())
    }

    /// Index of the first term with this exact name.
    pub fn find_term(&self, name: &str) -> Result<Option<usize>> {
        Ok(self.require()?.find_term(name))
    }

    /// Index of the first language with this exact code.
    pub fn find_language(&self, code: &str) -> Result<Option<usize>> {
        Ok(self.require()?.find_language(code))
    }

    pub fn translation(&self, term: usize, language: usize) -> Result<&str> {
        self.check_term(term)?;
        self.check_language(language)?;
        Ok(self.require()?.translation(term, language).unwrap_or(""))
    }

    pub fn translation_flag(&self, term: usize, language: usize) -> Result<u8> {
        self.check_term(term)?;
        self.check_language(language)?;
        Ok(self.require()?.translation_flag(term, language).unwrap_or(0))
    }

    // ==================== Edits ====================

    pub fn set_translation(&mut self, term: usize, language: usize, text: &str) -> Result<()> {
        self.check_term(term)?;
        self.check_language(language)?;
        self.require_mut()?.set_translation(term, language, text);
        Ok(())
    }

    pub fn set_translation_flag(&mut self, term: usize, language: usize, flag: u8) -> Result<()> {
        self.check_term(term)?;
        self.check_language(language)?;
        self.require_mut()?.set_flag(term, language, flag);
        Ok(())
    }

    /// Append a term.
    ///
    /// # Returns
    /// The index of the new term.
    pub fn add_term(
        &mut self,
        name: &str,
        term_type: TermType,
        description: &str,
    ) -> Result<usize> {
        let index = self.require_mut()?.add_term(name, term_type, description);
        debug!("Added term {name:?} at index {index}");
        Ok(index)
    }

    pub fn remove_term(&mut self, term: usize) -> Result<()> {
        self.check_term(term)?;
        self.require_mut()?.remove_term(term);
        Ok(())
    }

    pub fn set_term_name(&mut self, term: usize, name: &str) -> Result<()> {
        self.check_term(term)?;
        self.require_mut()?.set_term_name(term, name);
        Ok(())
    }

    pub fn set_term_description(&mut self, term: usize, description: &str) -> Result<()> {
        self.check_term(term)?;
        self.require_mut()?.set_term_description(term, description);
        Ok(())
    }

    pub fn set_term_type(&mut self, term: usize, term_type: TermType) -> Result<()> {
        self.check_term(term)?;
        self.require_mut()?.set_term_type(term, term_type);
        Ok(())
    }

    /// Add a language column, optionally copying translations and flags
    /// from an existing language.
    ///
    /// A non-empty `code` must not collide with another language's code.
    ///
    /// # Returns
    /// The index of the new language.
    pub fn add_language(
        &mut self,
        name: &str,
        code: &str,
        flags: LanguageDataFlags,
        copy_from: Option<usize>,
    ) -> Result<usize> {
        self.check_unique_code(code, None)?;
        if let Some(source) = copy_from {
            self.check_language(source)?;
        }
        let language = Language {
            name: name.to_string(),
            code: code.to_string(),
            flags,
        };
        let index = self.require_mut()?.add_language(language, copy_from);
        debug!("Added language {name:?} at index {index}");
        Ok(index)
    }

    /// Remove a language column from the document and from every term.
    pub fn remove_language(&mut self, language: usize) -> Result<()> {
        self.check_language(language)?;
        self.require_mut()?.remove_language(language);
        debug!("Removed language at index {language}");
        Ok(())
    }

    pub fn set_language_name(&mut self, language: usize, name: &str) -> Result<()> {
        self.check_language(language)?;
        self.require_mut()?.languages[language].name = name.to_string();
        Ok(())
    }

    /// Change a language's code. Non-empty codes stay unique per document.
    pub fn set_language_code(&mut self, language: usize, code: &str) -> Result<()> {
        self.check_language(language)?;
        self.check_unique_code(code, Some(language))?;
        self.require_mut()?.languages[language].code = code.to_string();
        Ok(())
    }

    pub fn set_language_flags(&mut self, language: usize, flags: LanguageDataFlags) -> Result<()> {
        self.check_language(language)?;
        self.require_mut()?.languages[language].flags = flags;
        Ok(())
    }

    // ==================== Internal ====================

    fn require(&self) -> Result<&DumpDocument> {
        self.content.as_ref().ok_or(Error::NoDocument)
    }

    fn require_mut(&mut self) -> Result<&mut DumpDocument> {
        self.content.as_mut().ok_or(Error::NoDocument)
    }

    fn check_term(&self, index: usize) -> Result<()> {
        let count = self.require()?.terms.len();
        if index < count {
            Ok(())
        } else {
            Err(Error::TermIndex { index, count })
        }
    }

    fn check_language(&self, index: usize) -> Result<()> {
        let count = self.require()?.languages.len();
        if index < count {
            Ok(())
        } else {
            Err(Error::LanguageIndex { index, count })
        }
    }

    fn check_unique_code(&self, code: &str, skip: Option<usize>) -> Result<()> {
        if code.is_empty() {
            return Ok(());
        }
        for (index, language) in self.require()?.languages.iter().enumerate() {
            if Some(index) != skip && language.code == code {
                return Err(Error::DuplicateLanguageCode(code.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::write_txt_dump;
    use crate::model::{AssetEnvelope, SourceMetadata};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample() -> DumpDocument {
        DumpDocument {
            structure: AssetEnvelope {
                name: "I2Languages".to_string(),
                enabled: 1,
                ..AssetEnvelope::default()
            },
            metadata: SourceMetadata::default(),
            terms: vec![Term {
                translations: vec!["Hello".to_string(), "Bonjour".to_string()],
                flags: vec![0, 0],
                ..Term::new("greeting", TermType::Text)
            }],
            languages: vec![Language::new("English", "en"), Language::new("French", "fr")],
            has_descriptions: false,
        }
    }

    fn sample_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("I2Languages-dump.txt");
        write_txt_dump(&path, &sample()).unwrap();
        path
    }

    #[test]
    fn test_open_and_read() {
        let dir = TempDir::new().unwrap();
        let path = sample_file(&dir);

        let mut manager = DumpManager::new();
        manager.open(&path).unwrap();

        assert_eq!(manager.term_count().unwrap(), 1);
        assert_eq!(
            manager.displayed_languages().unwrap(),
            vec!["English [en]", "French [fr]"]
        );
        assert_eq!(manager.translation(0, 1).unwrap(), "Bonjour");
        assert_eq!(manager.file_name().unwrap(), "I2Languages-dump.txt");
        assert!(!manager.is_modified());
    }

    #[test]
    fn test_no_document_errors() {
        let manager = DumpManager::new();
        assert!(matches!(manager.term_count(), Err(Error::NoDocument)));
        assert!(!manager.is_modified());
    }

    #[test]
    fn test_unsupported_extension_rejected_before_read() {
        let mut manager = DumpManager::new();
        let err = manager.open("dump.csv").unwrap_err();
        assert!(matches!(err, Error::UnsupportedExtension(ref e) if e == "csv"));
        // The failed open leaves nothing pending.
        assert!(manager.begin_open("dump.txt").is_ok());
    }

    #[test]
    fn test_dirty_tracking_across_edit_and_save() {
        let dir = TempDir::new().unwrap();
        let path = sample_file(&dir);

        let mut manager = DumpManager::new();
        manager.open(&path).unwrap();
        manager.set_translation(0, 0, "Hi").unwrap();
        assert!(manager.is_modified());

        manager.save().unwrap();
        assert!(!manager.is_modified());

        let mut reopened = DumpManager::new();
        reopened.open(&path).unwrap();
        assert_eq!(reopened.translation(0, 0).unwrap(), "Hi");
    }

    #[test]
    fn test_revert_clears_dirty() {
        let dir = TempDir::new().unwrap();
        let path = sample_file(&dir);

        let mut manager = DumpManager::new();
        manager.open(&path).unwrap();
        manager.set_translation(0, 0, "Hi").unwrap();
        manager.set_translation(0, 0, "Hello").unwrap();
        assert!(!manager.is_modified());
    }

    #[test]
    fn test_second_open_rejected_while_pending() {
        let mut manager = DumpManager::new();
        let _ticket = manager.begin_open("a.txt").unwrap();
        let err = manager.begin_open("b.txt").unwrap_err();
        assert!(matches!(err, Error::OperationPending));
        let err = manager.save_as("c.txt").unwrap_err();
        assert!(matches!(err, Error::OperationPending));
    }

    #[test]
    fn test_cancelled_ticket_result_discarded() {
        let dir = TempDir::new().unwrap();
        let path = sample_file(&dir);

        let mut manager = DumpManager::new();
        let stale = manager.begin_open(&path).unwrap();
        let outcome = stale.load();
        manager.cancel_pending();

        let installed = manager.finish_open(stale, outcome).unwrap();
        assert!(!installed);
        assert!(manager.document().is_none());
    }

    #[test]
    fn test_superseded_ticket_loses_to_newer_open() {
        let dir = TempDir::new().unwrap();
        let old_path = sample_file(&dir);
        let new_path = dir.path().join("newer.txt");
        let mut newer_doc = sample();
        newer_doc.terms[0].translations[0] = "Newer".to_string();
        write_txt_dump(&new_path, &newer_doc).unwrap();

        let mut manager = DumpManager::new();
        let stale = manager.begin_open(&old_path).unwrap();
        let stale_outcome = stale.load();
        manager.cancel_pending();
        let current = manager.begin_open(&new_path).unwrap();
        let current_outcome = current.load();

        assert!(!manager.finish_open(stale, stale_outcome).unwrap());
        assert!(manager.finish_open(current, current_outcome).unwrap());
        assert_eq!(manager.translation(0, 0).unwrap(), "Newer");
    }

    #[test]
    fn test_failed_open_clears_pending_and_keeps_document() {
        let dir = TempDir::new().unwrap();
        let path = sample_file(&dir);

        let mut manager = DumpManager::new();
        manager.open(&path).unwrap();

        let missing = dir.path().join("missing.txt");
        let err = manager.open(&missing).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        // Previous document survives and new opens are possible.
        assert_eq!(manager.term_count().unwrap(), 1);
        assert!(manager.begin_open(&path).is_ok());
    }

    #[test]
    fn test_language_management() {
        let dir = TempDir::new().unwrap();
        let path = sample_file(&dir);

        let mut manager = DumpManager::new();
        manager.open(&path).unwrap();

        let err = manager
            .add_language("Anglais", "en", LanguageDataFlags::Enabled, None)
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateLanguageCode(ref c) if c == "en"));

        let index = manager
            .add_language("German", "de", LanguageDataFlags::Enabled, Some(0))
            .unwrap();
        assert_eq!(index, 2);
        assert_eq!(manager.translation(0, 2).unwrap(), "Hello");

        let err = manager.set_language_code(2, "fr").unwrap_err();
        assert!(matches!(err, Error::DuplicateLanguageCode(_)));
        manager.set_language_code(2, "de-DE").unwrap();

        manager.remove_language(1).unwrap();
        assert_eq!(manager.language_count().unwrap(), 2);
        assert_eq!(manager.translation(0, 1).unwrap(), "Hello");
    }

    #[test]
    fn test_index_errors_name_the_offending_axis() {
        let dir = TempDir::new().unwrap();
        let path = sample_file(&dir);

        let mut manager = DumpManager::new();
        manager.open(&path).unwrap();

        let err = manager.set_translation(5, 0, "x").unwrap_err();
        assert!(matches!(err, Error::TermIndex { index: 5, count: 1 }));
        let err = manager.set_translation(0, 9, "x").unwrap_err();
        assert!(matches!(err, Error::LanguageIndex { index: 9, count: 2 }));
    }

    #[test]
    fn test_save_as_switches_format_and_identity() {
        let dir = TempDir::new().unwrap();
        let path = sample_file(&dir);
        let json_path = dir.path().join("dump.json");

        let mut manager = DumpManager::new();
        manager.open(&path).unwrap();
        manager.save_as(&json_path).unwrap();
        assert_eq!(manager.file_path().unwrap(), json_path.as_path());

        let mut reopened = DumpManager::new();
        reopened.open(&json_path).unwrap();
        assert_eq!(reopened.document(), manager.document());
    }
}
