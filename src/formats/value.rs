//! Scalar literal codec for dump values
//!
//! A TXT dump line's right-hand side is one literal: a double-quoted escaped
//! string, a `true`/`false` token, a bare integer, or a bare float. Parsing
//! picks the most specific reading and never fails; unrecognized tokens stay
//! strings.

use serde_json::Value;

/// A typed dump scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Lift into a JSON value. Non-finite floats have no JSON encoding and
    /// degrade to their string form.
    #[must_use]
    pub fn into_json(self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(b),
            Self::Int(i) => Value::from(i),
            Self::Float(f) => match serde_json::Number::from_f64(f) {
                Some(n) => Value::Number(n),
                None => Value::String(f.to_string()),
            },
            Self::Str(s) => Value::String(s),
        }
    }
}

/// Parse one trimmed literal token.
///
/// Precedence: `true`/`false` (case-insensitive), then a double-quoted string
/// (unescaped), then a digit run with optional leading `-` that fits `i64`,
/// then a float, and finally the raw token itself.
#[must_use]
pub fn parse_scalar(raw: &str) -> Scalar {
    if raw.eq_ignore_ascii_case("true") {
        return Scalar::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Scalar::Bool(false);
    }
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        // The literal runs to end of line, so interior quotes need no escaping.
        return Scalar::Str(unescape(&raw[1..raw.len() - 1]));
    }
    if let Some(i) = parse_integer(raw) {
        return Scalar::Int(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Scalar::Float(f);
    }
    Scalar::Str(raw.to_string())
}

fn parse_integer(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Escape a string for quoting in a TXT dump: `\` to `\\`, LF to `\n`,
/// CR to `\r`.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Invert [`escape`] with a single left-to-right pass.
///
/// Sequential whole-string replaces would corrupt a literal backslash
/// followed by `n` or `r`, so each `\` consumes exactly the character after
/// it. Unknown escape pairs are kept as written.
#[must_use]
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Collapse `\r\n` and lone `\r` to `\n`.
///
/// For text entering the model from user edits; never applied when
/// re-serializing stored values.
#[must_use]
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
