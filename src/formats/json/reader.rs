//! JSON dump reading

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::formats::mapping::document_from_value;
use crate::model::DumpDocument;

/// Read and parse a JSON dump file.
pub fn read_json_dump<P: AsRef<Path>>(path: P) -> Result<DumpDocument> {
    let path = path.as_ref();
    debug!("Reading JSON dump from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_json_dump(&text)
}

/// Parse JSON dump text into a document.
///
/// Malformed JSON surfaces as [`crate::Error::Json`]; a well-formed
/// document that is not a localization dump surfaces as a content error.
pub fn parse_json_dump(text: &str) -> Result<DumpDocument> {
    let value: Value = serde_json::from_str(text)?;
    document_from_value(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::formats::json::serialize_json_dump;
    use crate::model::{AssetEnvelope, Language, SourceMetadata, Term, TermType};

    fn sample() -> DumpDocument {
        DumpDocument {
            structure: AssetEnvelope {
                name: "I2Languages".to_string(),
                enabled: 1,
                ..AssetEnvelope::default()
            },
            metadata: SourceMetadata::default(),
            terms: vec![Term {
                translations: vec!["Hello".to_string()],
                flags: vec![0],
                ..Term::new("greeting", TermType::Text)
            }],
            languages: vec![Language::new("English", "en")],
            has_descriptions: false,
        }
    }

    fn reverse_keys(value: &Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut out = serde_json::Map::new();
                for (key, inner) in map.iter().rev() {
                    out.insert(key.clone(), reverse_keys(inner));
                }
                Value::Object(out)
            }
            Value::Array(items) => Value::Array(items.iter().map(reverse_keys).collect()),
            other => other.clone(),
        }
    }

    #[test]
    fn test_key_order_does_not_matter() {
        let doc = sample();
        let text = serialize_json_dump(&doc).unwrap();
        let scrambled: Value = serde_json::from_str(&text).unwrap();
        let scrambled = serde_json::to_string(&reverse_keys(&scrambled)).unwrap();
        assert_eq!(parse_json_dump(&scrambled).unwrap(), doc);
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_json_dump("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)), "got {err:?}");
    }

    #[test]
    fn test_valid_json_wrong_shape() {
        let err = parse_json_dump("{\"hello\": 1}").unwrap_err();
        assert!(matches!(err, Error::NotLocalizationDump(_)), "got {err:?}");
    }
}
