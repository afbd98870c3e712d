//! The forgiving content-line reader.
//!
//! One invocation reads one attribute from the unfolded buffer. Almost
//! nothing is a fatal error here: malformed lines are skipped with a
//! diagnostic and the cursor always makes forward progress, so the document
//! loop can keep going on whatever the producer emitted.

use crate::rfc::directory::core::{Attribute, Parameter};

/// Byte cursor over an unfolded buffer (canonical CRLF boundaries only).
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            buf: input.as_bytes(),
            pos: 0,
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.buf.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// Consumes a CRLF if the cursor sits on one.
    fn eat_line_break(&mut self) {
        if self.peek() == Some(b'\r') && self.peek_at(1) == Some(b'\n') {
            self.pos += 2;
        }
    }

    /// Advances past the next real line boundary (or to end of buffer).
    fn skip_to_next_line(&mut self) {
        while let Some(byte) = self.bump() {
            if byte == b'\r' && self.peek() == Some(b'\n') {
                self.pos += 1;
                break;
            }
        }
    }
}

/// Reads one attribute starting at the cursor.
///
/// Returns `None` when the line is malformed or yields no values; the
/// cursor is always left at the start of the next line.
pub(crate) fn read_attribute(cursor: &mut Cursor<'_>) -> Option<Attribute> {
    let (group, name) = read_name(cursor)?;
    let mut attr = match group {
        Some(group) => Attribute::with_group(group, name),
        None => Attribute::new(name),
    };
    let mut quoted_printable = false;

    if cursor.peek() == Some(b';') {
        cursor.bump();
        read_params(&mut attr, cursor, &mut quoted_printable);
    }

    if cursor.peek() == Some(b':') {
        cursor.bump();
        read_values(&mut attr, cursor, quoted_printable);
    } else {
        cursor.skip_to_next_line();
    }

    if attr.values().is_empty() {
        tracing::debug!(attribute = %attr.name, "content line produced no values, dropped");
        return None;
    }
    Some(attr)
}

/// Scans the `[group.]name` section, stopping on `:` or `;`.
fn read_name(cursor: &mut Cursor<'_>) -> Option<(Option<String>, String)> {
    let mut group: Option<String> = None;
    let mut name = String::new();

    loop {
        match cursor.peek() {
            Some(b':' | b';') => break,
            Some(b'.') => {
                cursor.bump();
                if group.is_some() {
                    tracing::warn!("second group separator in attribute name, discarding fragment");
                    name.clear();
                } else {
                    group = Some(std::mem::take(&mut name));
                }
            }
            Some(byte)
                if byte.is_ascii_alphanumeric()
                    || byte == b'-'
                    || byte == b'_'
                    || byte == b'/' =>
            {
                cursor.bump();
                name.push(byte as char);
            }
            _ => {
                tracing::warn!("malformed attribute name, skipping line");
                cursor.skip_to_next_line();
                return None;
            }
        }
    }

    if name.is_empty() {
        tracing::warn!("content line with an empty attribute name, skipping line");
        cursor.skip_to_next_line();
        return None;
    }
    Some((group, name))
}

/// Scans the parameter section after the first `;`, stopping with the
/// cursor on the `:` that opens the value section (or at the line break).
fn read_params(attr: &mut Attribute, cursor: &mut Cursor<'_>, quoted_printable: &mut bool) {
    let mut acc: Vec<u8> = Vec::new();
    let mut param: Option<Parameter> = None;
    let mut in_quote = false;

    while let Some(byte) = cursor.peek() {
        if byte == b'\r' {
            break;
        }
        if byte == b'"' {
            cursor.bump();
            in_quote = !in_quote;
        } else if in_quote {
            cursor.bump();
            acc.push(byte);
        } else if byte == b'=' {
            cursor.bump();
            if acc.is_empty() {
                tracing::warn!("stray '=' in parameter section, skipping ahead");
                skip_to_param_boundary(cursor);
            } else {
                param = Some(Parameter::new(take_string(&mut acc)));
            }
        } else if byte == b';' || byte == b':' || byte == b',' {
            let colon = byte == b':';
            let comma = byte == b',';
            if !colon {
                cursor.bump();
            }
            if let Some(p) = param.as_mut() {
                if !acc.is_empty() {
                    p.add_value(take_string(&mut acc));
                }
                if !comma {
                    if let Some(done) = param.take() {
                        finish_param(attr, done, quoted_printable);
                    }
                }
            } else if !acc.is_empty() {
                finish_bare_value(attr, take_string(&mut acc), quoted_printable);
            }
            if colon {
                break;
            }
        } else {
            cursor.bump();
            acc.push(byte);
        }
    }

    // Line ended inside the parameter section: flush what accumulated.
    if let Some(mut p) = param.take() {
        if !acc.is_empty() {
            p.add_value(take_string(&mut acc));
        }
        finish_param(attr, p, quoted_printable);
    } else if !acc.is_empty() {
        finish_bare_value(attr, take_string(&mut acc), quoted_printable);
    }
}

/// Completes a parameter.
///
/// `ENCODING=QUOTED-PRINTABLE` is a parser-internal signal: it arms the
/// value reader and is not kept as data. Everything else is attached to the
/// attribute.
fn finish_param(attr: &mut Attribute, param: Parameter, quoted_printable: &mut bool) {
    if param.name.eq_ignore_ascii_case("ENCODING")
        && param
            .value()
            .is_some_and(|v| v.eq_ignore_ascii_case("quoted-printable"))
    {
        *quoted_printable = true;
        return;
    }
    attr.add_param(param);
}

/// Interprets a parameter value that arrived without a `name=` prefix.
///
/// Legacy producers emit bare `QUOTED-PRINTABLE` and (Apple) bare `BASE64`
/// as encoding markers; every other bare word is a TYPE value.
fn finish_bare_value(attr: &mut Attribute, value: String, quoted_printable: &mut bool) {
    if value.eq_ignore_ascii_case("quoted-printable") {
        finish_param(
            attr,
            Parameter::with_value("ENCODING", value),
            quoted_printable,
        );
    } else if value.eq_ignore_ascii_case("base64") {
        finish_param(attr, Parameter::with_value("ENCODING", "b"), quoted_printable);
    } else {
        attr.add_param(Parameter::with_value("TYPE", value));
    }
}

/// Scans the value section up to the end of the (logical) line.
fn read_values(attr: &mut Attribute, cursor: &mut Cursor<'_>, quoted_printable: bool) {
    let is_categories = attr.name.eq_ignore_ascii_case("CATEGORIES");
    let mut acc: Vec<u8> = Vec::new();

    while let Some(byte) = cursor.peek() {
        if byte == b'\r' {
            break;
        }
        if byte == b'=' && quoted_printable {
            read_quoted_printable_escape(cursor, &mut acc);
        } else if byte == b'\\' {
            cursor.bump();
            read_backslash_escape(cursor, &mut acc);
        } else if byte == b';' || (byte == b',' && is_categories) {
            cursor.bump();
            push_value(attr, &mut acc);
        } else {
            cursor.bump();
            acc.push(byte);
        }
    }

    // The accumulated remainder becomes the final value.
    push_value(attr, &mut acc);
    cursor.eat_line_break();
}

/// Handles `=` inside a quoted-printable value: either a soft line
/// continuation (the marker and the break are dropped, the value continues
/// on the next physical line) or an `=XX` byte escape.
fn read_quoted_printable_escape(cursor: &mut Cursor<'_>, acc: &mut Vec<u8>) {
    match cursor.peek_at(1) {
        None => {
            // trailing soft-break marker at end of buffer, dropped
            cursor.bump();
        }
        Some(b'\r') => {
            cursor.bump();
            cursor.eat_line_break();
        }
        Some(hi) => {
            cursor.bump();
            cursor.bump();
            match cursor.peek() {
                Some(lo) if lo != b'\r' => {
                    cursor.bump();
                    if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() {
                        acc.push((hex_value(hi) << 4) | hex_value(lo));
                    } else {
                        tracing::warn!("malformed quoted-printable escape, passing through");
                        acc.push(b'=');
                        acc.push(hi);
                        acc.push(lo);
                    }
                }
                _ => {
                    tracing::warn!("truncated quoted-printable escape, passing through");
                    acc.push(b'=');
                    acc.push(hi);
                }
            }
        }
    }
}

/// Handles the character after a backslash in the value section.
fn read_backslash_escape(cursor: &mut Cursor<'_>, acc: &mut Vec<u8>) {
    match cursor.peek() {
        // Trailing backslash: emit it literally, leave the break alone.
        None | Some(b'\r') => acc.push(b'\\'),
        Some(escaped) => {
            cursor.bump();
            match escaped {
                b'n' => acc.push(b'\n'),
                b'r' => acc.push(b'\r'),
                b't' => acc.push(b'\t'),
                b';' => acc.push(b';'),
                b',' => acc.push(b','),
                b'\\' => acc.push(b'\\'),
                b'"' => acc.push(b'"'),
                other => {
                    tracing::warn!("unrecognized escape in value, passing through");
                    acc.push(b'\\');
                    acc.push(other);
                }
            }
        }
    }
}

fn skip_to_param_boundary(cursor: &mut Cursor<'_>) {
    while let Some(byte) = cursor.peek() {
        if byte == b':' || byte == b';' || byte == b'\r' {
            break;
        }
        cursor.bump();
    }
}

fn take_string(acc: &mut Vec<u8>) -> String {
    String::from_utf8_lossy(&std::mem::take(acc)).into_owned()
}

fn push_value(attr: &mut Attribute, acc: &mut Vec<u8>) {
    let bytes = std::mem::take(acc);
    match String::from_utf8(bytes) {
        Ok(value) => attr.add_value(value),
        Err(e) => {
            tracing::warn!(
                attribute = %attr.name,
                "decoded value is not valid UTF-8, replacing invalid bytes"
            );
            attr.add_value(String::from_utf8_lossy(e.as_bytes()).into_owned());
        }
    }
}

fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0,
    }
}
