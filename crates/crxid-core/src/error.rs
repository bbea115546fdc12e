use thiserror::Error;

pub type CrxidResult<T> = Result<T, DeriveError>;

#[derive(Debug, Error, PartialEq)]
pub enum DeriveError {
    #[error("base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("invalid extension id {value:?}: {reason}")]
    InvalidId { value: String, reason: &'static str },
}
