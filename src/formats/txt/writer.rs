//! TXT dump writing
//!
//! Emits the exact field layout UABEA expects for a `LanguageSourceData`
//! `MonoBehaviour`, alignment tags and type tokens included. Import in the
//! tool is positional, so the layout here is fixed and not configurable.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::PREAMBLE;
use crate::error::Result;
use crate::formats::value::escape;
use crate::model::{DumpDocument, PPtr};

/// Serialize and write a document to a TXT dump file.
pub fn write_txt_dump<P: AsRef<Path>>(path: P, document: &DumpDocument) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, serialize_txt_dump(document))?;
    debug!("Wrote TXT dump to {}", path.display());
    Ok(())
}

/// Serialize a document into canonical TXT dump text.
///
/// Lines are joined with `\n` and the output always ends with one
/// trailing newline.
#[must_use]
pub fn serialize_txt_dump(document: &DumpDocument) -> String {
    let meta = &document.metadata;
    let mut lines: Vec<String> = Vec::new();

    lines.push(PREAMBLE.to_string());
    push_pptr(&mut lines, 1, "PPtr<GameObject> m_GameObject", &document.structure.game_object);
    lines.push(format!(" 1 UInt8 m_Enabled = {}", document.structure.enabled));
    push_pptr(&mut lines, 1, "PPtr<MonoScript> m_Script", &document.structure.script);
    lines.push(format!(" 1 string m_Name = \"{}\"", escape(&document.structure.name)));
    lines.push(" 0 LanguageSourceData mSource".to_string());
    lines.push(format!(
        "  1 UInt8 UserAgreesToHaveItOnTheScene = {}",
        u8::from(meta.user_agrees_to_have_it_on_the_scene)
    ));
    lines.push(format!(
        "  1 UInt8 UserAgreesToHaveItInsideThePluginsFolder = {}",
        u8::from(meta.user_agrees_to_have_it_inside_the_plugins_folder)
    ));
    lines.push(format!(
        "  1 UInt8 GoogleLiveSyncIsUptoDate = {}",
        u8::from(meta.google_live_sync_is_upto_date)
    ));

    lines.push("  0 TermData mTerms".to_string());
    push_array_header(&mut lines, 3, document.terms.len());
    for (index, term) in document.terms.iter().enumerate() {
        lines.push(format!("    [{index}]"));
        lines.push("     0 TermData data".to_string());
        lines.push(format!("      1 string Term = \"{}\"", escape(&term.name)));
        lines.push(format!("      0 int TermType = {}", term.term_type.value()));
        if document.has_descriptions {
            lines.push(format!(
                "      1 string Description = \"{}\"",
                escape(&term.description)
            ));
        }
        push_string_vector(&mut lines, 6, "string Languages", &term.translations);
        lines.push("      0 vector Flags".to_string());
        push_array_header(&mut lines, 7, term.flags.len());
        for (flag_index, flag) in term.flags.iter().enumerate() {
            lines.push(format!("        [{flag_index}]"));
            lines.push(format!("         0 UInt8 data = {flag}"));
        }
        push_string_vector(&mut lines, 6, "string Languages_Touch", &term.languages_touch);
    }

    lines.push(format!(
        "  1 UInt8 CaseInsensitiveTerms = {}",
        u8::from(meta.case_insensitive_terms)
    ));
    lines.push(format!(
        "  0 int OnMissingTranslation = {}",
        meta.on_missing_translation.value()
    ));
    lines.push(format!("  1 string mTerm_AppName = \"{}\"", escape(&meta.term_app_name)));

    lines.push("  0 LanguageData mLanguages".to_string());
    push_array_header(&mut lines, 3, document.languages.len());
    for (index, language) in document.languages.iter().enumerate() {
        lines.push(format!("    [{index}]"));
        lines.push("     0 LanguageData data".to_string());
        lines.push(format!("      1 string Name = \"{}\"", escape(&language.name)));
        lines.push(format!("      1 string Code = \"{}\"", escape(&language.code)));
        lines.push(format!("      1 UInt8 Flags = {}", language.flags.value()));
    }

    lines.push(format!(
        "  1 UInt8 IgnoreDeviceLanguage = {}",
        u8::from(meta.ignore_device_language)
    ));
    lines.push(format!(
        "  0 int _AllowUnloadingLanguages = {}",
        meta.allow_unloading_languages.value()
    ));
    lines.push(format!(
        "  1 string Google_WebServiceURL = \"{}\"",
        escape(&meta.google_web_service_url)
    ));
    lines.push(format!(
        "  1 string Google_SpreadsheetKey = \"{}\"",
        escape(&meta.google_spreadsheet_key)
    ));
    lines.push(format!(
        "  1 string Google_SpreadsheetName = \"{}\"",
        escape(&meta.google_spreadsheet_name)
    ));
    lines.push(format!(
        "  1 string Google_LastUpdatedVersion = \"{}\"",
        escape(&meta.google_last_updated_version)
    ));
    lines.push(format!(
        "  0 int GoogleUpdateFrequency = {}",
        meta.google_update_frequency.value()
    ));
    lines.push(format!(
        "  0 int GoogleInEditorCheckFrequency = {}",
        meta.google_in_editor_check_frequency.value()
    ));
    lines.push(format!(
        "  0 int GoogleUpdateSynchronization = {}",
        meta.google_update_synchronization.value()
    ));
    lines.push(format!("  0 float GoogleUpdateDelay = {}", meta.google_update_delay));

    lines.push("  0 vector Assets".to_string());
    push_array_header(&mut lines, 3, meta.assets.len());
    for (index, asset) in meta.assets.iter().enumerate() {
        lines.push(format!("    [{index}]"));
        push_pptr(&mut lines, 5, "PPtr<$Object> data", asset);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_pptr(lines: &mut Vec<String>, indent: usize, decl: &str, pptr: &PPtr) {
    let pad = " ".repeat(indent);
    lines.push(format!("{pad}0 {decl}"));
    lines.push(format!("{pad} 0 int m_FileID = {}", pptr.file_id));
    lines.push(format!("{pad} 0 SInt64 m_PathID = {}", pptr.path_id));
}

fn push_array_header(lines: &mut Vec<String>, indent: usize, count: usize) {
    let pad = " ".repeat(indent);
    lines.push(format!("{pad}1 Array Array ({count} items)"));
    lines.push(format!("{pad} 0 int size = {count}"));
}

fn push_string_vector(lines: &mut Vec<String>, indent: usize, decl: &str, items: &[String]) {
    let pad = " ".repeat(indent);
    lines.push(format!("{pad}0 {decl}"));
    push_array_header(lines, indent + 1, items.len());
    for (index, item) in items.iter().enumerate() {
        lines.push(format!("{pad}  [{index}]"));
        lines.push(format!("{pad}   1 string data = \"{}\"", escape(item)));
    }
}
