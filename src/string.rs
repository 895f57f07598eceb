//! The JSON string leaf.
//!
//! [`StringValue`] owns a byte payload that is always well-formed UTF-8.
//! Byte-level construction and mutation go through one validator, so an
//! instance can never be observed holding overlong encodings, encoded
//! surrogates, truncated sequences, or stray continuation bytes.
//!
//! ```rust
//! use json_primitives::StringValue;
//!
//! let s = StringValue::from_utf8("héllo".as_bytes()).unwrap();
//! assert_eq!(s.value(), "héllo");
//!
//! let mut s = StringValue::from("kept");
//! assert!(s.set(&[0xc0, 0xaf]).is_err());
//! assert_eq!(s.value(), "kept");
//! ```

use std::str::Utf8Error;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A validated UTF-8 string value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringValue {
    value: String,
}

/// Checks that `candidate` is well-formed UTF-8 and returns it as a `&str`.
fn validate(candidate: &[u8]) -> Result<&str> {
    std::str::from_utf8(candidate).map_err(|err| rejected(err, candidate.len()))
}

fn rejected(err: Utf8Error, len: usize) -> Error {
    tracing::debug!(
        valid_up_to = err.valid_up_to(),
        len,
        "rejected string payload with invalid UTF-8"
    );
    err.into()
}

impl StringValue {
    /// Creates an empty string.
    #[must_use]
    pub const fn new() -> Self {
        StringValue {
            value: String::new(),
        }
    }

    /// Creates a string from a candidate UTF-8 byte sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEncoding`](crate::Error::InvalidEncoding) if
    /// `bytes` is not well-formed UTF-8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_primitives::StringValue;
    ///
    /// assert!(StringValue::from_utf8(vec![0xe2u8, 0x82, 0xac]).is_ok());
    /// assert!(StringValue::from_utf8(vec![0xe2u8, 0x82]).is_err());
    /// ```
    pub fn from_utf8(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        let len = bytes.len();
        let value = String::from_utf8(bytes).map_err(|err| rejected(err.utf8_error(), len))?;
        Ok(StringValue { value })
    }

    /// Returns the current payload.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the current payload as raw UTF-8 bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }

    /// Length of the payload in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replaces the payload with `candidate` if it is well-formed UTF-8.
    ///
    /// On failure the previous payload is left untouched; the candidate is
    /// never truncated or patched with replacement characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEncoding`](crate::Error::InvalidEncoding) if
    /// `candidate` is not well-formed UTF-8.
    pub fn set(&mut self, candidate: &[u8]) -> Result<()> {
        let text = validate(candidate)?;
        self.value.clear();
        self.value.push_str(text);
        Ok(())
    }

    /// Replaces the payload with an already valid Rust string.
    pub fn set_str(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Consumes the value and returns the owned payload.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

impl AsRef<str> for StringValue {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<String> for StringValue {
    fn from(value: String) -> Self {
        StringValue { value }
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        StringValue {
            value: value.to_string(),
        }
    }
}

impl From<StringValue> for String {
    fn from(value: StringValue) -> Self {
        value.value
    }
}

impl TryFrom<Vec<u8>> for StringValue {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        StringValue::from_utf8(bytes)
    }
}

impl TryFrom<&[u8]> for StringValue {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let text = validate(bytes)?;
        Ok(StringValue::from(text))
    }
}
