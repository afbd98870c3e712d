//! Core document model: documents, attributes, parameters, dialects.

mod attribute;
mod dialect;
mod document;
mod parameter;

pub use attribute::{Attribute, Encoding};
pub use dialect::Dialect;
pub use document::Document;
pub use parameter::Parameter;
