//! Parsing for the directory formats.
//!
//! The pipeline is: [`lexer::unfold`] normalizes line breaks and merges
//! folded continuations, then the content-line reader tokenizes one
//! attribute per logical line, and [`parser::parse`] assembles the
//! document. Every stage is forgiving; diagnostics go through `tracing`.

mod lexer;
mod parser;
mod reader;
mod values;

pub use lexer::{unfold, valid_prefix};
pub use parser::{parse, parse_bytes};
pub use values::{time_to_unix, unescape_text};
