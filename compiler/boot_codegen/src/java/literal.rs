//! Source spelling of character and string literals.

use std::fmt::Write;

/// A character literal with its single quotes: `'a'`, `'\''`, `'\\'`.
///
/// `None` for characters outside the basic multilingual plane, which need
/// two UTF-16 code units and so do not fit a `char`.
pub fn char_literal(c: char) -> Option<String> {
    if c.len_utf16() > 1 {
        return None;
    }
    let mut out = String::with_capacity(4);
    out.push('\'');
    if c == '"' {
        out.push('"');
    } else {
        push_escaped(&mut out, c);
    }
    out.push('\'');
    Some(out)
}

/// A string literal with its double quotes. Single quotes stay unescaped.
pub fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\'' => out.push('\''),
            '"' => out.push_str("\\\""),
            _ => push_escaped(&mut out, c),
        }
    }
    out.push('"');
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '\u{8}' => out.push_str("\\b"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\u{c}' => out.push_str("\\f"),
        '\r' => out.push_str("\\r"),
        '\'' => out.push_str("\\'"),
        '\\' => out.push_str("\\\\"),
        c if c.is_control() => {
            let _ = write!(out, "\\u{:04x}", u32::from(c));
        }
        c => out.push(c),
    }
}
