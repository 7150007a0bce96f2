//! Dump inspection commands

use std::path::Path;

use crate::formats::read_dump;
use crate::model::LanguageDataFlags;

/// Show a dump's envelope, counts, and sync settings.
pub fn info(path: &Path) -> anyhow::Result<()> {
    let document = read_dump(path)?;
    let meta = &document.metadata;

    let enabled = document
        .languages
        .iter()
        .filter(|language| language.flags == LanguageDataFlags::Enabled)
        .count();

    println!("{}:", path.display());
    println!("  Asset name: {}", document.structure.name);
    println!("  Terms: {}", document.terms.len());
    println!(
        "  Languages: {} ({} enabled)",
        document.languages.len(),
        enabled
    );
    println!(
        "  Per-term descriptions: {}",
        yes_no(document.has_descriptions)
    );
    println!(
        "  Case-insensitive terms: {}",
        yes_no(meta.case_insensitive_terms)
    );
    println!("  On missing translation: {}", meta.on_missing_translation);
    if !meta.term_app_name.is_empty() {
        println!("  App name term: {}", meta.term_app_name);
    }
    if meta.google_spreadsheet_key.is_empty() && meta.google_spreadsheet_name.is_empty() {
        println!("  Google Sheets: not linked");
    } else {
        println!("  Google spreadsheet: {}", meta.google_spreadsheet_name);
        println!(
            "  Google update frequency: {}",
            meta.google_update_frequency
        );
    }
    if !meta.assets.is_empty() {
        println!("  Referenced assets: {}", meta.assets.len());
    }

    Ok(())
}

/// List languages with per-language translation coverage.
pub fn languages(path: &Path) -> anyhow::Result<()> {
    let document = read_dump(path)?;
    let total = document.terms.len();

    for (index, language) in document.languages.iter().enumerate() {
        let translated = document
            .terms
            .iter()
            .filter(|term| {
                term.translations
                    .get(index)
                    .is_some_and(|text| !text.is_empty())
            })
            .count();
        let marker = if language.flags == LanguageDataFlags::Disabled {
            " (disabled)"
        } else {
            ""
        };
        println!(
            "{index}: {} - {translated}/{total} translated{marker}",
            language.display_name()
        );
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
