use std::fs;

use i2loc::model::{AssetEnvelope, SourceMetadata};
use i2loc::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn sample_document() -> DumpDocument {
    DumpDocument {
        structure: AssetEnvelope {
            name: "I2Languages".to_string(),
            enabled: 1,
            ..AssetEnvelope::default()
        },
        metadata: SourceMetadata::default(),
        terms: vec![
            Term {
                translations: vec!["Start".to_string(), "Démarrer".to_string()],
                flags: vec![0, 0],
                ..Term::new("UI/StartButton", TermType::Text)
            },
            Term {
                translations: vec!["Quit".to_string(), "Quitter".to_string()],
                flags: vec![0, 0],
                ..Term::new("UI/QuitButton", TermType::Text)
            },
        ],
        languages: vec![
            Language::new("English", "en"),
            Language::new("French", "fr"),
        ],
        has_descriptions: false,
    }
}

#[test]
fn test_txt_edit_lifecycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("I2Languages-dump.txt");
    write_dump(&path, &sample_document()).unwrap();

    let mut manager = DumpManager::new();
    manager.open(&path).unwrap();

    let term = manager.find_term("UI/StartButton").unwrap().unwrap();
    let french = manager.find_language("fr").unwrap().unwrap();
    manager.set_translation(term, french, "Commencer").unwrap();

    let german = manager
        .add_language("German", "de", LanguageDataFlags::Enabled, Some(0))
        .unwrap();
    let options = manager
        .add_term("UI/OptionsButton", TermType::Text, "")
        .unwrap();
    manager.set_translation(options, german, "Optionen").unwrap();

    assert!(manager.is_modified());
    manager.save().unwrap();
    assert!(!manager.is_modified());

    let reloaded = read_dump(&path).unwrap();
    assert_eq!(reloaded.languages.len(), 3);
    assert_eq!(reloaded.terms.len(), 3);
    assert_eq!(reloaded.translation(0, 1), Some("Commencer"));
    // The new column was seeded from English.
    assert_eq!(reloaded.translation(0, 2), Some("Start"));
    assert_eq!(reloaded.translation(2, 2), Some("Optionen"));
}

#[test]
fn test_cross_format_save_round_trips() {
    let dir = tempdir().unwrap();
    let txt_path = dir.path().join("dump.txt");
    let json_path = dir.path().join("dump.json");
    write_dump(&txt_path, &sample_document()).unwrap();

    let mut manager = DumpManager::new();
    manager.open(&txt_path).unwrap();
    manager.save_as(&json_path).unwrap();
    assert_eq!(manager.file_path(), Some(json_path.as_path()));

    assert_eq!(
        read_dump(&json_path).unwrap(),
        read_dump(&txt_path).unwrap()
    );
}

#[test]
fn test_conversion_round_trip_is_byte_identical() {
    let dir = tempdir().unwrap();
    let txt_path = dir.path().join("dump.txt");
    let json_path = dir.path().join("dump.json");
    let back_path = dir.path().join("back.txt");
    write_dump(&txt_path, &sample_document()).unwrap();

    converter::convert_txt_to_json(&txt_path, &json_path).unwrap();
    converter::convert_json_to_txt(&json_path, &back_path).unwrap();

    assert_eq!(
        fs::read_to_string(&txt_path).unwrap(),
        fs::read_to_string(&back_path).unwrap()
    );
}

#[test]
fn test_parse_failures_are_classified() {
    let dir = tempdir().unwrap();

    let garbage = dir.path().join("garbage.txt");
    fs::write(&garbage, "0 MonoBehaviour Base\ngarbage\n").unwrap();
    assert!(matches!(
        read_dump(&garbage).unwrap_err(),
        Error::Syntax { line: 2, .. }
    ));

    let unrelated = dir.path().join("unrelated.json");
    fs::write(&unrelated, r#"{"m_Name": "Settings"}"#).unwrap();
    assert!(matches!(
        read_dump(&unrelated).unwrap_err(),
        Error::NotLocalizationDump(_)
    ));

    let empty = dir.path().join("empty.txt");
    let document = DumpDocument {
        terms: Vec::new(),
        languages: Vec::new(),
        ..sample_document()
    };
    write_dump(&empty, &document).unwrap();
    assert!(matches!(
        read_dump(&empty).unwrap_err(),
        Error::EmptyDump {
            terms: 0,
            languages: 0
        }
    ));

    assert!(matches!(
        read_dump("dump.tsv").unwrap_err(),
        Error::UnsupportedExtension(_)
    ));
}

#[test]
fn test_background_open_installs_only_current_ticket() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dump.txt");
    write_dump(&path, &sample_document()).unwrap();

    let mut manager = DumpManager::new();
    let ticket = manager.begin_open(&path).unwrap();
    // The read half can run on another thread; the ticket is self-contained.
    let outcome = ticket.load();
    assert!(manager.finish_open(ticket, outcome).unwrap());
    assert_eq!(manager.term_count().unwrap(), 2);
    assert!(!manager.is_modified());
}
