//! Term-level CLI commands

use std::path::Path;

use crate::formats::read_dump;
use crate::formats::value::normalize_newlines;
use crate::manager::DumpManager;

/// List terms, optionally filtered by a name fragment.
pub fn list(path: &Path, filter: Option<&str>, limit: usize, quiet: bool) -> anyhow::Result<()> {
    let document = read_dump(path)?;
    let filter_lower = filter.map(str::to_lowercase);

    let matches: Vec<_> = document
        .terms
        .iter()
        .filter(|term| {
            filter_lower
                .as_deref()
                .is_none_or(|fragment| term.name.to_lowercase().contains(fragment))
        })
        .take(limit)
        .collect();

    if matches.is_empty() {
        if !quiet {
            match filter {
                Some(fragment) => println!("No terms matching '{fragment}'"),
                None => println!("No terms"),
            }
        }
        return Ok(());
    }

    for term in &matches {
        println!("{}", term.name);
        if !quiet {
            let preview = term.translations.first().map_or("", String::as_str);
            println!("  [{}] {}", term.term_type, truncate_text(preview, 80));
        }
    }
    if !quiet && matches.len() == limit {
        println!();
        println!("(showing first {limit}; raise --limit for more)");
    }

    Ok(())
}

/// Print one term's translations.
///
/// With a language code, prints just that translation. Without one,
/// prints the term's details and every language.
pub fn get(path: &Path, term: &str, language: Option<&str>) -> anyhow::Result<()> {
    let document = read_dump(path)?;

    let Some(term_index) = document.find_term(term) else {
        anyhow::bail!("Term not found: {term}");
    };
    let data = &document.terms[term_index];

    match language {
        Some(code) => {
            let Some(language_index) = document.find_language(code) else {
                anyhow::bail!("Language not found: {code}");
            };
            println!(
                "{}",
                document
                    .translation(term_index, language_index)
                    .unwrap_or("")
            );
        }
        None => {
            println!("Term: {}", data.name);
            println!("Type: {}", data.term_type);
            if !data.description.is_empty() {
                println!("Description: {}", data.description);
            }
            for (index, entry) in document.languages.iter().enumerate() {
                println!(
                    "{}: {}",
                    entry.display_name(),
                    document.translation(term_index, index).unwrap_or("")
                );
            }
        }
    }

    Ok(())
}

/// Replace a translation and save the dump.
pub fn set(
    path: &Path,
    term: &str,
    language: &str,
    text: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let mut manager = DumpManager::new();
    manager.open(path)?;

    let Some(term_index) = manager.find_term(term)? else {
        anyhow::bail!("Term not found: {term}");
    };
    let Some(language_index) = manager.find_language(language)? else {
        anyhow::bail!("Language not found: {language}");
    };

    let previous = manager.translation(term_index, language_index)?.to_string();
    manager.set_translation(term_index, language_index, &normalize_newlines(text))?;

    match output {
        Some(destination) => manager.save_as(destination)?,
        None => manager.save()?,
    }

    println!("Updated {term} [{language}]");
    if !previous.is_empty() {
        println!("  Previous text: {}", truncate_text(&previous, 80));
    }
    if let Some(destination) = output {
        println!("  Saved to {}", destination.display());
    }

    Ok(())
}

/// Truncate text for display
fn truncate_text(text: &str, max_len: usize) -> String {
    let text = text.replace('\n', "\\n");
    if text.chars().count() > max_len {
        let cut: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text
    }
}
