//! Mapping between dump JSON values and the document model
//!
//! Both dump formats converge on one JSON shape: the TXT reader builds it
//! from the indentation tree and the JSON reader parses it directly. This
//! module extracts a [`DumpDocument`] from that shape and rebuilds the shape
//! in canonical field order for the writers.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::{
    AllowUnloadLanguages, AssetEnvelope, DumpDocument, GoogleUpdateFrequency,
    GoogleUpdateSynchronization, Language, LanguageDataFlags, MissingTranslationAction, PPtr,
    SourceMetadata, Term, TermType,
};

/// Extract a document from a parsed dump value.
///
/// Field lookup is by name, so JSON key order does not matter on input.
/// Unknown `mSource` fields are ignored. Term translation and flag arrays
/// are padded or cut to the language count.
pub fn document_from_value(root: &Value) -> Result<DumpDocument> {
    let Value::Object(top) = root else {
        return Err(Error::NotLocalizationDump(
            "root is not an object".to_string(),
        ));
    };

    let Some(Value::Object(source)) = top.get("mSource") else {
        return Err(Error::NotLocalizationDump(
            "no mSource object".to_string(),
        ));
    };
    let Some(terms_raw) = source
        .get("mTerms")
        .and_then(|v| v.get("Array"))
        .and_then(Value::as_array)
    else {
        return Err(Error::NotLocalizationDump(
            "no mTerms array in mSource".to_string(),
        ));
    };
    let Some(languages_raw) = source
        .get("mLanguages")
        .and_then(|v| v.get("Array"))
        .and_then(Value::as_array)
    else {
        return Err(Error::NotLocalizationDump(
            "no mLanguages array in mSource".to_string(),
        ));
    };
    if terms_raw.is_empty() || languages_raw.is_empty() {
        return Err(Error::EmptyDump {
            terms: terms_raw.len(),
            languages: languages_raw.len(),
        });
    }

    let structure = AssetEnvelope {
        game_object: pptr_field(top, "m_GameObject", "")?,
        enabled: byte_field(top, "m_Enabled", "")?,
        script: pptr_field(top, "m_Script", "")?,
        name: string_field(top, "m_Name", "")?,
    };

    let mut languages = Vec::with_capacity(languages_raw.len());
    for (index, entry) in languages_raw.iter().enumerate() {
        languages.push(language_from_value(entry, index)?);
    }

    let mut terms = Vec::with_capacity(terms_raw.len());
    let mut has_descriptions = false;
    for (index, entry) in terms_raw.iter().enumerate() {
        let (term, described) = term_from_value(entry, index, languages.len())?;
        has_descriptions |= described;
        terms.push(term);
    }

    Ok(DumpDocument {
        structure,
        metadata: metadata_from_source(source)?,
        terms,
        languages,
        has_descriptions,
    })
}

/// Rebuild the dump value in canonical field order.
///
/// The order matches what UABEA emits for a `LanguageSourceData` asset, so
/// serializing it yields a dump the tool will re-import cleanly.
#[must_use]
pub fn document_to_value(doc: &DumpDocument) -> Value {
    let mut source = Map::new();
    let meta = &doc.metadata;
    source.insert(
        "UserAgreesToHaveItOnTheScene".to_string(),
        bool_to_int(meta.user_agrees_to_have_it_on_the_scene),
    );
    source.insert(
        "UserAgreesToHaveItInsideThePluginsFolder".to_string(),
        bool_to_int(meta.user_agrees_to_have_it_inside_the_plugins_folder),
    );
    source.insert(
        "GoogleLiveSyncIsUptoDate".to_string(),
        bool_to_int(meta.google_live_sync_is_upto_date),
    );
    source.insert(
        "mTerms".to_string(),
        wrap_array(
            doc.terms
                .iter()
                .map(|term| term_to_value(term, doc.has_descriptions))
                .collect(),
        ),
    );
    source.insert(
        "CaseInsensitiveTerms".to_string(),
        bool_to_int(meta.case_insensitive_terms),
    );
    source.insert(
        "OnMissingTranslation".to_string(),
        Value::from(meta.on_missing_translation.value()),
    );
    source.insert(
        "mTerm_AppName".to_string(),
        Value::String(meta.term_app_name.clone()),
    );
    source.insert(
        "mLanguages".to_string(),
        wrap_array(doc.languages.iter().map(language_to_value).collect()),
    );
    source.insert(
        "IgnoreDeviceLanguage".to_string(),
        bool_to_int(meta.ignore_device_language),
    );
    source.insert(
        "_AllowUnloadingLanguages".to_string(),
        Value::from(meta.allow_unloading_languages.value()),
    );
    source.insert(
        "Google_WebServiceURL".to_string(),
        Value::String(meta.google_web_service_url.clone()),
    );
    source.insert(
        "Google_SpreadsheetKey".to_string(),
        Value::String(meta.google_spreadsheet_key.clone()),
    );
    source.insert(
        "Google_SpreadsheetName".to_string(),
        Value::String(meta.google_spreadsheet_name.clone()),
    );
    source.insert(
        "Google_LastUpdatedVersion".to_string(),
        Value::String(meta.google_last_updated_version.clone()),
    );
    source.insert(
        "GoogleUpdateFrequency".to_string(),
        Value::from(meta.google_update_frequency.value()),
    );
    source.insert(
        "GoogleInEditorCheckFrequency".to_string(),
        Value::from(meta.google_in_editor_check_frequency.value()),
    );
    source.insert(
        "GoogleUpdateSynchronization".to_string(),
        Value::from(meta.google_update_synchronization.value()),
    );
    source.insert(
        "GoogleUpdateDelay".to_string(),
        Value::from(meta.google_update_delay),
    );
    source.insert(
        "Assets".to_string(),
        wrap_array(meta.assets.iter().map(pptr_to_value).collect()),
    );

    let mut root = Map::new();
    root.insert(
        "m_GameObject".to_string(),
        pptr_to_value(&doc.structure.game_object),
    );
    root.insert(
        "m_Enabled".to_string(),
        Value::from(i64::from(doc.structure.enabled)),
    );
    root.insert("m_Script".to_string(), pptr_to_value(&doc.structure.script));
    root.insert("m_Name".to_string(), Value::String(doc.structure.name.clone()));
    root.insert("mSource".to_string(), Value::Object(source));
    Value::Object(root)
}

impl serde::Serialize for DumpDocument {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        document_to_value(self).serialize(serializer)
    }
}

// Per-entry extraction

fn language_from_value(value: &Value, index: usize) -> Result<Language> {
    let path = format!("mSource.mLanguages.Array[{index}]");
    let Value::Object(map) = value else {
        return Err(Error::FieldType {
            field: path,
            expected: "object",
        });
    };
    Ok(Language {
        name: string_field(map, "Name", &path)?,
        code: string_field(map, "Code", &path)?,
        flags: enum_field(map, "Flags", &path, "LanguageDataFlags", LanguageDataFlags::from_value)?,
    })
}

fn term_from_value(value: &Value, index: usize, language_count: usize) -> Result<(Term, bool)> {
    let path = format!("mSource.mTerms.Array[{index}]");
    let Value::Object(map) = value else {
        return Err(Error::FieldType {
            field: path,
            expected: "object",
        });
    };

    let described = map.contains_key("Description");
    let description = if described {
        string_field(map, "Description", &path)?
    } else {
        String::new()
    };

    let mut translations =
        string_items(array_field(map, "Languages", &path)?, &join(&path, "Languages"))?;
    translations.resize(language_count, String::new());
    let mut flags = byte_items(array_field(map, "Flags", &path)?, &join(&path, "Flags"))?;
    flags.resize(language_count, 0);
    let languages_touch = string_items(
        array_field(map, "Languages_Touch", &path)?,
        &join(&path, "Languages_Touch"),
    )?;

    let term = Term {
        name: string_field(map, "Term", &path)?,
        term_type: enum_field(map, "TermType", &path, "TermType", TermType::from_value)?,
        description,
        translations,
        flags,
        languages_touch,
    };
    Ok((term, described))
}

fn metadata_from_source(source: &Map<String, Value>) -> Result<SourceMetadata> {
    let path = "mSource";
    Ok(SourceMetadata {
        user_agrees_to_have_it_on_the_scene: bool_field(
            source,
            "UserAgreesToHaveItOnTheScene",
            path,
        )?,
        user_agrees_to_have_it_inside_the_plugins_folder: bool_field(
            source,
            "UserAgreesToHaveItInsideThePluginsFolder",
            path,
        )?,
        google_live_sync_is_upto_date: bool_field(source, "GoogleLiveSyncIsUptoDate", path)?,
        case_insensitive_terms: bool_field(source, "CaseInsensitiveTerms", path)?,
        on_missing_translation: enum_field(
            source,
            "OnMissingTranslation",
            path,
            "MissingTranslationAction",
            MissingTranslationAction::from_value,
        )?,
        term_app_name: string_field(source, "mTerm_AppName", path)?,
        ignore_device_language: bool_field(source, "IgnoreDeviceLanguage", path)?,
        allow_unloading_languages: enum_field(
            source,
            "_AllowUnloadingLanguages",
            path,
            "AllowUnloadLanguages",
            AllowUnloadLanguages::from_value,
        )?,
        google_web_service_url: string_field(source, "Google_WebServiceURL", path)?,
        google_spreadsheet_key: string_field(source, "Google_SpreadsheetKey", path)?,
        google_spreadsheet_name: string_field(source, "Google_SpreadsheetName", path)?,
        google_last_updated_version: string_field(source, "Google_LastUpdatedVersion", path)?,
        google_update_frequency: enum_field(
            source,
            "GoogleUpdateFrequency",
            path,
            "GoogleUpdateFrequency",
            GoogleUpdateFrequency::from_value,
        )?,
        google_in_editor_check_frequency: enum_field(
            source,
            "GoogleInEditorCheckFrequency",
            path,
            "GoogleUpdateFrequency",
            GoogleUpdateFrequency::from_value,
        )?,
        google_update_synchronization: enum_field(
            source,
            "GoogleUpdateSynchronization",
            path,
            "GoogleUpdateSynchronization",
            GoogleUpdateSynchronization::from_value,
        )?,
        google_update_delay: float_field(source, "GoogleUpdateDelay", path)?,
        assets: assets_from_source(source)?,
    })
}

fn assets_from_source(source: &Map<String, Value>) -> Result<Vec<PPtr>> {
    let items = array_field(source, "Assets", "mSource")?;
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let path = format!("mSource.Assets.Array[{index}]");
        let Value::Object(map) = item else {
            return Err(Error::FieldType {
                field: path,
                expected: "object",
            });
        };
        out.push(PPtr {
            file_id: int_field(map, "m_FileID", &path)?,
            path_id: int_field(map, "m_PathID", &path)?,
        });
    }
    Ok(out)
}

// Per-entry construction

fn term_to_value(term: &Term, has_descriptions: bool) -> Value {
    let mut out = Map::new();
    out.insert("Term".to_string(), Value::String(term.name.clone()));
    out.insert("TermType".to_string(), Value::from(term.term_type.value()));
    if has_descriptions {
        out.insert(
            "Description".to_string(),
            Value::String(term.description.clone()),
        );
    }
    out.insert("Languages".to_string(), string_array(&term.translations));
    out.insert(
        "Flags".to_string(),
        wrap_array(term.flags.iter().map(|&f| Value::from(i64::from(f))).collect()),
    );
    out.insert(
        "Languages_Touch".to_string(),
        string_array(&term.languages_touch),
    );
    Value::Object(out)
}

fn language_to_value(language: &Language) -> Value {
    let mut out = Map::new();
    out.insert("Name".to_string(), Value::String(language.name.clone()));
    out.insert("Code".to_string(), Value::String(language.code.clone()));
    out.insert("Flags".to_string(), Value::from(language.flags.value()));
    Value::Object(out)
}

fn pptr_to_value(pptr: &PPtr) -> Value {
    let mut out = Map::new();
    out.insert("m_FileID".to_string(), Value::from(pptr.file_id));
    out.insert("m_PathID".to_string(), Value::from(pptr.path_id));
    Value::Object(out)
}

fn wrap_array(items: Vec<Value>) -> Value {
    let mut out = Map::new();
    out.insert("Array".to_string(), Value::Array(items));
    Value::Object(out)
}

fn string_array(items: &[String]) -> Value {
    wrap_array(items.iter().map(|s| Value::String(s.clone())).collect())
}

fn bool_to_int(flag: bool) -> Value {
    Value::from(i64::from(flag))
}

// Field access and coercion

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn field<'a>(obj: &'a Map<String, Value>, name: &str, path: &str) -> Result<&'a Value> {
    obj.get(name)
        .ok_or_else(|| Error::MissingField(join(path, name)))
}

fn string_field(obj: &Map<String, Value>, name: &str, path: &str) -> Result<String> {
    match field(obj, name, path)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(Error::FieldType {
            field: join(path, name),
            expected: "string",
        }),
    }
}

fn int_field(obj: &Map<String, Value>, name: &str, path: &str) -> Result<i64> {
    coerce_int(field(obj, name, path)?, &join(path, name))
}

fn bool_field(obj: &Map<String, Value>, name: &str, path: &str) -> Result<bool> {
    let value = field(obj, name, path)?;
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(_) => Ok(coerce_int(value, &join(path, name))? != 0),
        _ => Err(Error::FieldType {
            field: join(path, name),
            expected: "boolean",
        }),
    }
}

fn byte_field(obj: &Map<String, Value>, name: &str, path: &str) -> Result<u8> {
    coerce_byte(field(obj, name, path)?, &join(path, name))
}

fn pptr_field(obj: &Map<String, Value>, name: &str, path: &str) -> Result<PPtr> {
    let pptr_path = join(path, name);
    let Value::Object(map) = field(obj, name, path)? else {
        return Err(Error::FieldType {
            field: pptr_path,
            expected: "object",
        });
    };
    Ok(PPtr {
        file_id: int_field(map, "m_FileID", &pptr_path)?,
        path_id: int_field(map, "m_PathID", &pptr_path)?,
    })
}

fn float_field(obj: &Map<String, Value>, name: &str, path: &str) -> Result<f64> {
    match field(obj, name, path)? {
        Value::Number(n) => n.as_f64().ok_or_else(|| Error::FieldType {
            field: join(path, name),
            expected: "number",
        }),
        _ => Err(Error::FieldType {
            field: join(path, name),
            expected: "number",
        }),
    }
}

fn array_field<'a>(obj: &'a Map<String, Value>, name: &str, path: &str) -> Result<&'a [Value]> {
    let value = field(obj, name, path)?;
    value
        .get("Array")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| Error::FieldType {
            field: join(path, name),
            expected: "Array-wrapped list",
        })
}

fn enum_field<T>(
    obj: &Map<String, Value>,
    name: &str,
    path: &str,
    domain: &'static str,
    from_value: fn(i64) -> Option<T>,
) -> Result<T> {
    let raw = int_field(obj, name, path)?;
    from_value(raw).ok_or_else(|| Error::EnumRange {
        field: join(path, name),
        value: raw,
        domain,
    })
}

/// Integers arrive as JSON numbers or, from hand-edited dumps, as booleans.
/// Floats with no fractional part count too.
fn coerce_int(value: &Value, path: &str) -> Result<i64> {
    let wrong_type = || Error::FieldType {
        field: path.to_string(),
        expected: "integer",
    };
    match value {
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.is_finite() => Ok(f as i64),
                    _ => Err(wrong_type()),
                }
            }
        }
        _ => Err(wrong_type()),
    }
}

fn coerce_byte(value: &Value, path: &str) -> Result<u8> {
    let raw = coerce_int(value, path)?;
    u8::try_from(raw).map_err(|_| Error::FieldType {
        field: path.to_string(),
        expected: "byte",
    })
}

fn string_items(items: &[Value], path: &str) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => out.push(s.clone()),
            _ => {
                return Err(Error::FieldType {
                    field: format!("{path}.Array[{index}]"),
                    expected: "string",
                });
            }
        }
    }
    Ok(out)
}

fn byte_items(items: &[Value], path: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        out.push(coerce_byte(item, &format!("{path}.Array[{index}]"))?);
    }
    Ok(out)
}
