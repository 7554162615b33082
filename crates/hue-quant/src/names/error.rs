//! Error types for reference table operations
//!
//! This module provides error types for color parsing and reference table
//! validation.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
    /// Character outside `0-9a-fA-F`
    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),
}

/// Error type for reference table validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table holds no colors, so no name can ever be resolved
    #[error("reference color table is empty")]
    Empty,
    /// Two entries share the same name
    #[error("duplicate color name {name:?} in reference table")]
    DuplicateName {
        /// The repeated name
        name: String,
    },
    /// An entry's color value could not be parsed
    #[error("invalid color for {name:?}: {source}")]
    ParseColor {
        /// Name of the offending entry
        name: String,
        /// Underlying parse failure
        source: ParseColorError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_error_messages() {
        assert_eq!(
            ParseColorError::InvalidLength.to_string(),
            "invalid hex color length (expected 3 or 6 characters)"
        );
        let err: ParseColorError = u8::from_str_radix("zz", 16).unwrap_err().into();
        assert!(err.to_string().starts_with("invalid hex character"));
        assert_eq!(
            ParseColorError::InvalidDigit('+').to_string(),
            "invalid hex digit: '+'"
        );
    }

    #[test]
    fn test_table_error_messages() {
        assert_eq!(TableError::Empty.to_string(), "reference color table is empty");
        assert_eq!(
            TableError::DuplicateName {
                name: "red".to_string()
            }
            .to_string(),
            "duplicate color name \"red\" in reference table"
        );
    }

    #[test]
    fn test_table_error_source_chain() {
        use std::error::Error as _;

        let err = TableError::ParseColor {
            name: "oops".to_string(),
            source: ParseColorError::InvalidLength,
        };
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "invalid color for \"oops\": invalid hex color length (expected 3 or 6 characters)"
        );
    }
}
