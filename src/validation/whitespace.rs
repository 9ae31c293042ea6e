//! Form whitespace
//!
//! The whitespace set browsers use for `\s` and `String.prototype.trim`:
//! ASCII tab, line feed, vertical tab, form feed, carriage return and space,
//! NBSP, the Unicode `Zs` spaces, the line and paragraph separators, and the
//! byte order mark. Unlike `char::is_whitespace` it excludes U+0085 and
//! includes U+FEFF.

/// The same set as a regex character-class body, for use inside `[...]`.
pub const WHITESPACE_CLASS: &str = r"\t\n\x{0B}\x{0C}\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strips form whitespace from both ends.
pub fn trim_form_whitespace(input: &str) -> &str {
    input.trim_matches(is_form_whitespace)
}
