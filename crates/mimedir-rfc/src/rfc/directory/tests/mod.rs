//! Cross-layer tests for the directory format module.

mod forgiving;
