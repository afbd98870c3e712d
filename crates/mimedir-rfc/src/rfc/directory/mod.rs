//! MIME directory format family (RFC 2425): vCard, vCalendar, vNote.
//!
//! This module implements the text layer shared by vCard 2.1/3.0,
//! vCalendar 1.0, iCalendar 2.0 and vNote 1.1: line unfolding/folding,
//! attribute/parameter/value tokenization, Base64 and quoted-printable
//! transfer encodings, and dialect-aware serialization.
//!
//! ## Forgiveness
//!
//! The parser tries to be as forgiving as it possibly can: almost nothing
//! is a fatal error. Malformed lines are skipped, broken escapes pass
//! through literally, and a missing BEGIN/END envelope is only a
//! diagnostic. Parsing always yields a usable [`Document`].
//!
//! ## Parsing
//!
//! ```rust
//! use mimedir_rfc::rfc::directory::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL;TYPE=WORK:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let document = parse(input);
//! let name = document.find_attribute("FN").unwrap();
//! assert_eq!(name.value().as_deref(), Some("John Doe"));
//! ```
//!
//! ## Serializing
//!
//! ```rust
//! use mimedir_rfc::rfc::directory::{Attribute, Dialect, Document, serialize};
//!
//! let mut document = Document::new();
//! let mut name = Attribute::new("FN");
//! name.add_value("Jane Doe");
//! document.add_attribute(name);
//!
//! let output = serialize(&document, Dialect::Vcard30);
//! assert!(output.contains("FN:Jane Doe"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Document model (`Document`, `Attribute`, `Parameter`, …)
//! - [`parse`] - Unfolding, tokenization, document assembly
//! - [`build`] - Escaping, folding, serialization
//! - [`codec`] - Base64 and quoted-printable primitives

pub mod build;
pub mod codec;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::serialize;
pub use core::{Attribute, Dialect, Document, Encoding, Parameter};
pub use parse::{parse, parse_bytes};
