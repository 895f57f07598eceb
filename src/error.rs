//! Error types for leaf value construction and extraction.
//!
//! Every failure in this crate is synchronous and local to the call that
//! triggered it. A failed construction produces no value and a failed setter
//! leaves the previous payload in place.
//!
//! ## Error Categories
//!
//! - **Invalid encoding**: a byte sequence handed to a [`StringValue`] is not well-formed UTF-8
//! - **Non-finite**: a NaN or infinite number handed to a [`DoubleValue`]
//! - **Type mismatch**: a [`Value`] was extracted as the wrong variant
//! - **Out of range**: an arbitrary-precision integer does not fit a fixed-width variant
//!
//! ## Examples
//!
//! ```rust
//! use json_primitives::{DoubleValue, Error};
//!
//! let mut d = DoubleValue::new();
//! let err = d.set(f64::NAN).unwrap_err();
//! assert!(matches!(err, Error::NonFinite { .. }));
//! assert_eq!(d.value(), 0.0);
//! ```
//!
//! [`StringValue`]: crate::StringValue
//! [`DoubleValue`]: crate::DoubleValue
//! [`Value`]: crate::Value

use std::convert::Infallible;
use std::str::Utf8Error;

use thiserror::Error;

use crate::ValueType;

/// Represents all possible errors raised by the value types.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A candidate byte sequence is not well-formed UTF-8.
    #[error("invalid UTF-8 encoding: {source}")]
    InvalidEncoding {
        #[from]
        source: Utf8Error,
    },

    /// A candidate floating-point number is NaN or infinite.
    #[error("non-finite value {value} cannot be represented as a JSON number")]
    NonFinite { value: f64 },

    /// A value was extracted as a different variant than it holds.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ValueType,
        found: ValueType,
    },

    /// A number does not fit the target fixed-width representation.
    #[error("{value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },
}

impl Error {
    /// Creates a non-finite error for the rejected number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_primitives::Error;
    ///
    /// let err = Error::non_finite(f64::INFINITY);
    /// assert!(err.to_string().contains("inf"));
    /// ```
    pub fn non_finite(value: f64) -> Self {
        Error::NonFinite { value }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_primitives::{Error, ValueType};
    ///
    /// let err = Error::type_mismatch(ValueType::String, ValueType::Null);
    /// assert!(err.to_string().contains("expected string, found null"));
    /// ```
    pub fn type_mismatch(expected: ValueType, found: ValueType) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates an out-of-range error for a number that does not fit `target`.
    pub fn out_of_range<T: std::fmt::Display>(value: T, target: &'static str) -> Self {
        Error::OutOfRange {
            value: value.to_string(),
            target,
        }
    }

    /// Returns the byte offset of the first invalid byte for encoding errors.
    ///
    /// Bytes before this offset form a valid UTF-8 prefix.
    #[must_use]
    pub fn valid_up_to(&self) -> Option<usize> {
        match self {
            Error::InvalidEncoding { source } => Some(source.valid_up_to()),
            _ => None,
        }
    }
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_encoding_reports_offset() {
        let bytes = std::hint::black_box([b'a', b'b', 0xff]);
        let source = std::str::from_utf8(&bytes).unwrap_err();
        let err = Error::from(source);
        assert_eq!(err.valid_up_to(), Some(2));
        assert!(err.to_string().starts_with("invalid UTF-8 encoding"));
    }

    #[test]
    fn test_non_finite_message() {
        let err = Error::non_finite(f64::NEG_INFINITY);
        assert_eq!(
            err.to_string(),
            "non-finite value -inf cannot be represented as a JSON number"
        );
        assert_eq!(err.valid_up_to(), None);
    }

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range("99999999999999999999", "i64");
        assert_eq!(err.to_string(), "99999999999999999999 is out of range for i64");
    }
}
