//! Unified error type for the hue-quant public API.
//!
//! [`QuantError`] is what both [`extract`](crate::extract()) and
//! [`resolve`](crate::resolve) fail with. Callers decide whether to retry
//! with other parameters (for example a lower `k`) or give up; nothing in
//! this crate retries on its own.

use thiserror::Error;

use crate::names::TableError;

/// Error returned by palette extraction and name resolution.
///
/// # Example
///
/// ```
/// use hue_quant::{extract, ExtractOptions, QuantError};
///
/// let err = extract(&[], &ExtractOptions::new()).unwrap_err();
/// assert!(matches!(err, QuantError::InvalidArgument(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantError {
    /// A caller-supplied argument is out of range (empty samples, `k == 0`, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The reference table cannot be used (empty, duplicate names, bad values)
    #[error("configuration error: {0}")]
    Configuration(#[from] TableError),

    /// The clustering reached a state it cannot recover from
    #[error("numeric instability: {0}")]
    NumericInstability(String),
}

impl QuantError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        QuantError::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QuantError::invalid_argument("k must be at least 1").to_string(),
            "invalid argument: k must be at least 1"
        );
        assert_eq!(
            QuantError::Configuration(TableError::Empty).to_string(),
            "configuration error: reference color table is empty"
        );
        assert_eq!(
            QuantError::NumericInstability("no point to reseed from".to_string()).to_string(),
            "numeric instability: no point to reseed from"
        );
    }

    #[test]
    fn test_from_table_error() {
        let err: QuantError = TableError::Empty.into();
        assert!(matches!(err, QuantError::Configuration(TableError::Empty)));
    }
}
