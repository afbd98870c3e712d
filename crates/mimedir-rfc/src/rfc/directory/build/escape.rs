//! Value escaping for serialization (RFC 2425 §5.8.4).

use crate::rfc::directory::core::Dialect;

/// Escapes a value for emission in a content line.
///
/// Newlines (LF, lone CR, or CRLF) become the literal `\n` sequence; `;`
/// and `\` are always escaped. `,` is escaped only for the 3.0 vCard
/// profile — vCalendar and legacy vCard treat the comma as a literal.
#[must_use]
pub fn escape_text(s: &str, dialect: Dialect) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            ';' => out.push_str("\\;"),
            ',' if dialect.is_vcard30() => out.push_str("\\,"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }

    out
}
