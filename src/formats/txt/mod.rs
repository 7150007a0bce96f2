//! UABEA TXT dump format
//!
//! The plain-text dump UABEA produces for a `LanguageSourceData`
//! `MonoBehaviour`: one field per line, nesting encoded by leading spaces.
//! Reading tolerates CRLF endings and stray blank lines; writing always
//! emits the canonical field layout with `\n` endings and a trailing
//! newline, which the tool re-imports cleanly.

mod reader;
mod tree;
mod writer;

pub use reader::{parse_txt_dump, read_txt_dump};
pub use writer::{serialize_txt_dump, write_txt_dump};

/// First line of every `MonoBehaviour` TXT dump.
pub const PREAMBLE: &str = "0 MonoBehaviour Base";
