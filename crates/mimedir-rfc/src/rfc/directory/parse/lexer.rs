//! Line unfolding (RFC 2425 §5.8.1).
//!
//! Real-world producers fold with every imaginable break sequence, so the
//! unfolder accepts `\r\n`, `\n\r`, bare `\r` and bare `\n` alike and emits
//! a buffer whose every line boundary is a canonical CRLF.

/// Unfolds `input` in a single pass.
///
/// A line-break token immediately followed by SPACE or HTAB is a fold: the
/// break and the whitespace character are both removed and the continuation
/// joins the previous line with no inserted character. Any other line-break
/// token is a real boundary, normalized to CRLF.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' || c == '\n' {
            // \r\n and \n\r are single break tokens
            if let Some(&next) = chars.peek() {
                if (next == '\r' || next == '\n') && next != c {
                    chars.next();
                }
            }
            if matches!(chars.peek(), Some(' ' | '\t')) {
                chars.next();
            } else {
                out.push_str("\r\n");
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Returns the longest prefix of `input` that is valid UTF-8.
///
/// Truncation is a diagnostic, not an error: the parser limps along on the
/// valid prefix.
#[must_use]
pub fn valid_prefix(input: &[u8]) -> &str {
    match std::str::from_utf8(input) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                valid_up_to = e.valid_up_to(),
                "input is not valid UTF-8, truncating at the first invalid byte"
            );
            std::str::from_utf8(&input[..e.valid_up_to()]).unwrap_or_default()
        }
    }
}
