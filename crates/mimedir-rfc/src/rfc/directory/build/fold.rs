//! Content line folding (RFC 2425 §5.8.1).

/// Maximum content characters per physical line.
const MAX_LINE_CHARS: usize = 75;

/// Folds a content line by inserting CRLF + one space at every
/// 75-character boundary, measured from the previous fold point, until the
/// remaining tail fits. The inserted space is consumed again by unfolding,
/// so fold then unfold round-trips exactly.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.chars().count() <= MAX_LINE_CHARS {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_CHARS * 3);
    let mut count = 0;
    for c in line.chars() {
        if count == MAX_LINE_CHARS {
            out.push_str("\r\n ");
            count = 0;
        }
        out.push(c);
        count += 1;
    }

    out
}
