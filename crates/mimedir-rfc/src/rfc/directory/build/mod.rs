//! Serialization for the directory formats.
//!
//! - Escape: dialect-sensitive value escaping
//! - Fold: content line folding at 75 columns
//! - Serializer: full document emission with the BEGIN/END envelope

mod escape;
mod fold;
mod serializer;

pub use escape::escape_text;
pub use fold::fold_line;
pub use serializer::{serialize, serialize_attribute};
