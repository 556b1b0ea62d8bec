use thiserror::Error;

/// Failures when converting an address between its text and binary forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// A textual address does not match its expected syntax.
    #[error("invalid address format: {input:?}")]
    InvalidFormat { input: String },
    /// A binary address buffer has the wrong number of bytes.
    #[error("invalid address length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl AddressError {
    pub(crate) fn format(input: &str) -> Self {
        AddressError::InvalidFormat {
            input: input.to_string(),
        }
    }
}
