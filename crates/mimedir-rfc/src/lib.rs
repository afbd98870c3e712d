//! Parsing and serialization for the MIME directory format family
//! (RFC 2425): vCard 2.1/3.0, vCalendar 1.0, iCalendar 2.0 and vNote.
//!
//! The parser is deliberately forgiving: malformed input degrades into
//! diagnostics and partial results rather than errors, because real-world
//! producers of these formats are wildly non-compliant.

pub mod error;
pub mod rfc;
