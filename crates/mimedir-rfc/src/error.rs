use thiserror::Error;

/// RFC parsing and conversion errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Invalid date-time literal: {0}")]
    InvalidDateTime(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
