//! Dump format conversion
//!
//! One-call conversions between the TXT and JSON encodings of a dump.
//! Every direction goes through the document model, so converting also
//! validates the source file.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::formats::{
    read_dump, read_json_dump, read_txt_dump, write_dump, write_json_dump, write_txt_dump,
};

/// Convert a TXT dump to a JSON dump.
///
/// # Errors
/// Returns an error if reading or conversion fails.
pub fn convert_txt_to_json<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();
    info!("Converting TXT dump {} to JSON {}", source.display(), dest.display());
    let document = read_txt_dump(source)?;
    write_json_dump(dest, &document)
}

/// Convert a JSON dump to a TXT dump.
///
/// # Errors
/// Returns an error if reading or conversion fails.
pub fn convert_json_to_txt<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();
    info!("Converting JSON dump {} to TXT {}", source.display(), dest.display());
    let document = read_json_dump(source)?;
    write_txt_dump(dest, &document)
}

/// Convert between dump files, choosing each side's format from its
/// extension. A same-format pair re-serializes the file canonically.
///
/// # Errors
/// Returns an error if either extension is unsupported or if reading or
/// writing fails.
pub fn convert_dump<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();
    let document = read_dump(source)?;
    write_dump(dest, &document)?;
    info!("Converted {} to {}", source.display(), dest.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::formats::{read_json_dump, serialize_txt_dump};
    use crate::model::{AssetEnvelope, DumpDocument, Language, SourceMetadata, Term, TermType};
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
                translations: vec!["Hello".to_string()],
                flags: vec![0],
                ..Term::new("greeting", TermType::Text)
            }],
            languages: vec![Language::new("English", "en")],
            has_descriptions: false,
        }
    }

    #[test]
    fn test_txt_json_txt_round_trip() {
        let dir = TempDir::new().unwrap();
        let txt_a = dir.path().join("a.txt");
        let json_b = dir.path().join("b.json");
        let txt_c = dir.path().join("c.txt");

        crate::formats::write_txt_dump(&txt_a, &sample()).unwrap();
        convert_txt_to_json(&txt_a, &json_b).unwrap();
        convert_json_to_txt(&json_b, &txt_c).unwrap();

        assert_eq!(
            std::fs::read_to_string(&txt_a).unwrap(),
            std::fs::read_to_string(&txt_c).unwrap()
        );
    }

    #[test]
    fn test_convert_dump_by_extension() {
        let dir = TempDir::new().unwrap();
        let txt = dir.path().join("dump.txt");
        let json = dir.path().join("dump.json");

        crate::formats::write_txt_dump(&txt, &sample()).unwrap();
        convert_dump(&txt, &json).unwrap();
        assert_eq!(read_json_dump(&json).unwrap(), sample());

        let err = convert_dump(&txt, &dir.path().join("dump.tsv")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedExtension(ref e) if e == "tsv"));
    }

    #[test]
    fn test_same_format_pair_is_canonicalizing() {
        let dir = TempDir::new().unwrap();
        let messy = dir.path().join("messy.txt");
        let clean = dir.path().join("clean.txt");

        // CRLF endings and a blank line; conversion rewrites canonically.
        let text = serialize_txt_dump(&sample()).replace('\n', "\r\n") + "\r\n";
        std::fs::write(&messy, text).unwrap();
        convert_dump(&messy, &clean).unwrap();

        assert_eq!(
            std::fs::read_to_string(&clean).unwrap(),
            serialize_txt_dump(&sample())
        );
    }
}
