//! Document-level parsing.

use super::lexer::{unfold, valid_prefix};
use super::reader::{Cursor, read_attribute};
use crate::rfc::directory::core::Document;

/// Parses directory-format text into a [`Document`].
///
/// Parsing never fails: malformed lines are skipped with a diagnostic and
/// the result is the best-effort document the input supports. The leading
/// ungrouped `BEGIN` attribute is consumed as envelope structure; a
/// trailing `END` attribute is kept in the attribute list (callers see
/// `END` but never `BEGIN`).
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn parse(input: &str) -> Document {
    let unfolded = unfold(input);
    let mut cursor = Cursor::new(&unfolded);
    let mut document = Document::new();
    let mut first = true;

    while !cursor.is_at_end() {
        let Some(attribute) = read_attribute(&mut cursor) else {
            continue; // malformed line, already skipped
        };

        if first {
            first = false;
            let is_begin = attribute.name.eq_ignore_ascii_case("BEGIN");
            if attribute.group.is_some() || !is_begin {
                tracing::warn!("document does not start with an ungrouped BEGIN");
            }
            if is_begin {
                continue;
            }
        }

        document.add_attribute(attribute);
    }

    match document.attributes().last() {
        Some(last) if last.group.is_none() && last.name.eq_ignore_ascii_case("END") => {}
        _ => tracing::warn!("document does not finish with an ungrouped END"),
    }

    tracing::debug!(attributes = document.attributes().len(), "document parsed");
    document
}

/// Parses a raw byte buffer, truncating at the first invalid UTF-8 byte.
///
/// Everything before the first invalid byte is still parsed (partial
/// success, not a hard failure).
#[must_use]
pub fn parse_bytes(input: &[u8]) -> Document {
    parse(valid_prefix(input))
}
