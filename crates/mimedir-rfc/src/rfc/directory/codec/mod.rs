//! Transfer-encoding codec primitives.
//!
//! Pure functions over byte buffers, no knowledge of content lines. The
//! streaming Base64 state is owned by the caller and threaded explicitly,
//! so independent call chains stay reentrant.

pub mod base64;
pub mod quoted_printable;
