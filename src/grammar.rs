//! Shared SLIM grammar: literal forms and character classification.
//!
//! Both the encoder and the decoder read from this module, so the "needs
//! quoting" rule and the "stop consuming unquoted text" rule cannot drift
//! apart. The classification is the compatibility-sensitive heart of the wire
//! format:
//!
//! - **Structural characters** terminate unquoted text and separate values:
//!   `,` `;` newline `|` `{` `}` `[` `]`
//! - **Marker characters** select a typed parse when they lead a value:
//!   `"` `#` `?` `!` `*` `@`
//!
//! A text value containing any character from either set (or with leading or
//! trailing whitespace, or empty) must be quoted by the encoder; the decoder
//! only ever stops an unquoted run on a structural character, so anything the
//! encoder leaves raw parses back verbatim.

/// Literal form of a null value.
pub const NULL_LITERAL: &str = "!null";
/// Literal form of an undefined value.
pub const UNDEFINED_LITERAL: &str = "!undef";
/// Sentinel emitted when the encoder's depth limit truncates a subtree.
/// Decodes to null; the depth information is discarded.
pub const DEPTH_LITERAL: &str = "!DEEP";
/// Literal form of boolean true.
pub const TRUE_LITERAL: &str = "?T";
/// Literal form of boolean false.
pub const FALSE_LITERAL: &str = "?F";

/// Returns `true` for characters that terminate an unquoted text run and
/// separate values inside containers.
#[inline]
#[must_use]
pub const fn is_structural(c: char) -> bool {
    matches!(c, ',' | ';' | '\n' | '|' | '{' | '}' | '[' | ']')
}

/// Returns `true` for characters that dispatch a typed parse when they lead a
/// value.
#[inline]
#[must_use]
pub const fn is_marker(c: char) -> bool {
    matches!(c, '"' | '#' | '?' | '!' | '*' | '@')
}

/// Whether a text value must be quoted in value position.
///
/// Quoting is required for the empty string, any structural or marker
/// character anywhere in the text, and leading/trailing whitespace (which an
/// unquoted rendering could not distinguish from formatting).
///
/// # Examples
///
/// ```rust
/// use serde_slim::grammar::needs_quoting;
///
/// assert!(!needs_quoting("hello world"));
/// assert!(needs_quoting(""));
/// assert!(needs_quoting("a,b"));
/// assert!(needs_quoting("what?"));
/// assert!(needs_quoting(" padded"));
/// ```
#[must_use]
pub fn needs_quoting(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.chars().any(|c| is_structural(c) || is_marker(c)) {
        return true;
    }
    s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace)
}

/// Whether a record key must be quoted.
///
/// Keys have a narrower trigger set than values: the key parser stops at
/// `:` `,` `{` `}`, and `[` `]` would be ambiguous inside containers. Quotes
/// and newlines must be quoted so the quoted form can escape them.
#[must_use]
pub fn key_needs_quoting(key: &str) -> bool {
    key.is_empty()
        || key
            .chars()
            .any(|c| matches!(c, ':' | ',' | '{' | '}' | '[' | ']' | '"' | '\n'))
}

/// Whether a text table cell must be quoted. Cells live on comma-joined,
/// newline-separated row lines; `;` and `]` are included because a table can
/// be nested inside a mixed list, whose separators then terminate the final
/// cell of the final row.
#[must_use]
pub fn cell_needs_quoting(s: &str) -> bool {
    s.chars().any(is_cell_terminator) || s.contains('|') || s.contains('"')
}

/// Returns `true` for characters that end an unquoted table cell.
#[inline]
#[must_use]
pub const fn is_cell_terminator(c: char) -> bool {
    matches!(c, ',' | '\n' | '}' | ';' | ']')
}

/// Whether an element of a list-valued table cell must be quoted. Elements
/// are `+`-joined within the cell, which itself obeys the cell terminators.
#[must_use]
pub fn list_cell_element_needs_quoting(s: &str) -> bool {
    s.contains('+') || s.contains('"') || cell_needs_quoting(s)
}

/// Writes `s` in quoted form: internal `"` doubled, real newlines rendered as
/// the two-character `\n` escape, every other character verbatim. These are
/// the only escapes the format has.
pub fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\"\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Writes `s` as a value: quoted when [`needs_quoting`] says so, raw otherwise.
pub fn write_text(out: &mut String, s: &str) {
    if needs_quoting(s) {
        write_quoted(out, s);
    } else {
        out.push_str(s);
    }
}

/// Characters that may appear in the body of a plain numeric literal.
#[inline]
#[must_use]
pub const fn is_numeric_run_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}

/// Whether a standalone piece of text matches the SLIM numeric pattern:
/// one of the special literals, or an optionally-signed decimal with at most
/// one dot and an optional exponent.
#[must_use]
pub fn looks_numeric(s: &str) -> bool {
    if matches!(s, "NaN" | "Inf" | "-Inf") {
        return true;
    }
    let rest = s.strip_prefix('-').unwrap_or(s);
    if rest.is_empty() || !rest.as_bytes().iter().any(|b| b.is_ascii_digit()) {
        return false;
    }
    let mut has_dot = false;
    let mut has_exp = false;
    for (i, &b) in rest.as_bytes().iter().enumerate() {
        match b {
            b'0'..=b'9' => {}
            b'.' if !has_dot && !has_exp => has_dot = true,
            b'e' | b'E' if !has_exp && i > 0 => has_exp = true,
            b'+' | b'-' if has_exp => {}
            _ => return false,
        }
    }
    true
}

/// Parses a standalone numeric text into a [`Number`](crate::Number).
///
/// Integer-shaped text yields `Integer`; anything else that parses as a float
/// yields `Float`. Returns `None` when the text is not numeric.
#[must_use]
pub fn parse_number_text(s: &str) -> Option<crate::Number> {
    match s {
        "NaN" => return Some(crate::Number::NaN),
        "Inf" => return Some(crate::Number::Infinity),
        "-Inf" => return Some(crate::Number::NegativeInfinity),
        _ => {}
    }
    if !looks_numeric(s) {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(crate::Number::Integer(i));
    }
    s.parse::<f64>().ok().map(crate::Number::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    #[test]
    fn test_structural_and_marker_sets() {
        for c in [',', ';', '\n', '|', '{', '}', '[', ']'] {
            assert!(is_structural(c), "{:?} should be structural", c);
        }
        for c in ['"', '#', '?', '!', '*', '@'] {
            assert!(is_marker(c), "{:?} should be a marker", c);
        }
        assert!(!is_structural('a'));
        assert!(!is_marker(':'));
    }

    #[test]
    fn test_needs_quoting_triggers() {
        assert!(needs_quoting(""));
        assert!(needs_quoting("a;b"));
        assert!(needs_quoting("pipe|d"));
        assert!(needs_quoting("has\nnewline"));
        assert!(needs_quoting("tag@home"));
        assert!(needs_quoting("trailing "));
        assert!(!needs_quoting("plain text with spaces"));
        assert!(!needs_quoting("colon: is fine in value position"));
    }

    #[test]
    fn test_quoted_writer_escapes() {
        let mut out = String::new();
        write_quoted(&mut out, "say \"hi\"\nbye");
        assert_eq!(out, "\"say \"\"hi\"\"\\nbye\"");
    }

    #[test]
    fn test_looks_numeric() {
        assert!(looks_numeric("42"));
        assert!(looks_numeric("-3.5"));
        assert!(looks_numeric("1e-6"));
        assert!(looks_numeric("NaN"));
        assert!(looks_numeric("-Inf"));
        assert!(!looks_numeric("abc"));
        assert!(!looks_numeric("1.2.3"));
        assert!(!looks_numeric("-"));
        assert!(!looks_numeric(""));
    }

    #[test]
    fn test_parse_number_text() {
        assert_eq!(parse_number_text("42"), Some(Number::Integer(42)));
        assert_eq!(parse_number_text("-3.5"), Some(Number::Float(-3.5)));
        assert_eq!(parse_number_text("NaN"), Some(Number::NaN));
        assert_eq!(parse_number_text("Inf"), Some(Number::Infinity));
        assert_eq!(parse_number_text("x1"), None);
    }
}
