//! Numeric leaves: [`DoubleValue`], [`IntegerValue`] and [`BigIntegerValue`].
//!
//! JSON's number grammar only spells finite decimal and exponential
//! literals, so [`DoubleValue`] refuses NaN and both infinities at every
//! entry point. The integer leaves accept every value of their fixed width:
//!
//! - [`IntegerValue`] holds an `i32`
//! - [`BigIntegerValue`] holds an `i64`
//!
//! An [`IntegerValue`] widens into a [`BigIntegerValue`] without loss. The
//! reverse direction is deliberately missing; callers that need it decide
//! how to handle overflow themselves.
//!
//! ## Examples
//!
//! ```rust
//! use json_primitives::{BigIntegerValue, DoubleValue, IntegerValue};
//!
//! let d = DoubleValue::try_new(2.5).unwrap();
//! assert_eq!(d.value(), 2.5);
//! assert!(DoubleValue::try_new(f64::NAN).is_err());
//!
//! let small = IntegerValue::from(i32::MIN);
//! let wide = BigIntegerValue::from(small);
//! assert_eq!(wide.value(), i64::from(i32::MIN));
//! ```

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Returns `value` unchanged if it is finite.
fn ensure_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(%value, "rejected non-finite double payload");
        Err(Error::non_finite(value))
    }
}

/// A finite 64-bit floating-point value.
///
/// # Examples
///
/// ```rust
/// use json_primitives::DoubleValue;
///
/// let mut d = DoubleValue::new();
/// assert!(d.set(f64::INFINITY).is_err());
/// assert_eq!(d.value(), 0.0);
///
/// d.set(-1.5e300).unwrap();
/// assert_eq!(d.value(), -1.5e300);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DoubleValue {
    value: f64,
}

impl DoubleValue {
    /// Creates a double holding `0.0`.
    #[must_use]
    pub const fn new() -> Self {
        DoubleValue { value: 0.0 }
    }

    /// Creates a double from a candidate number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] for NaN, positive infinity and negative
    /// infinity.
    pub fn try_new(value: f64) -> Result<Self> {
        Ok(DoubleValue {
            value: ensure_finite(value)?,
        })
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Replaces the payload if `value` is finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] and keeps the previous payload when
    /// `value` is NaN or infinite.
    pub fn set(&mut self, value: f64) -> Result<()> {
        self.value = ensure_finite(value)?;
        Ok(())
    }
}

impl TryFrom<f64> for DoubleValue {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        DoubleValue::try_new(value)
    }
}

impl From<DoubleValue> for f64 {
    fn from(value: DoubleValue) -> Self {
        value.value
    }
}

// Every i32 is exactly representable as an f64.
impl From<IntegerValue> for DoubleValue {
    fn from(value: IntegerValue) -> Self {
        DoubleValue {
            value: f64::from(value.value),
        }
    }
}

/// A signed 32-bit integer value.
///
/// Any `i32` is legal, so access and mutation need no validation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct IntegerValue {
    value: i32,
}

impl IntegerValue {
    #[must_use]
    pub const fn new() -> Self {
        IntegerValue { value: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn set(&mut self, value: i32) {
        self.value = value;
    }

    /// Direct mutable access to the payload.
    #[inline]
    pub fn value_mut(&mut self) -> &mut i32 {
        &mut self.value
    }
}

impl From<i32> for IntegerValue {
    fn from(value: i32) -> Self {
        IntegerValue { value }
    }
}

impl From<i16> for IntegerValue {
    fn from(value: i16) -> Self {
        IntegerValue {
            value: i32::from(value),
        }
    }
}

impl From<i8> for IntegerValue {
    fn from(value: i8) -> Self {
        IntegerValue {
            value: i32::from(value),
        }
    }
}

impl From<u16> for IntegerValue {
    fn from(value: u16) -> Self {
        IntegerValue {
            value: i32::from(value),
        }
    }
}

impl From<u8> for IntegerValue {
    fn from(value: u8) -> Self {
        IntegerValue {
            value: i32::from(value),
        }
    }
}

impl From<IntegerValue> for i32 {
    fn from(value: IntegerValue) -> Self {
        value.value
    }
}

/// A signed 64-bit integer value.
///
/// Built directly from an `i64`, or by widening an [`IntegerValue`]:
///
/// ```rust
/// use json_primitives::{BigIntegerValue, IntegerValue};
///
/// let wide = BigIntegerValue::from(IntegerValue::from(-7));
/// assert_eq!(wide.value(), -7);
///
/// let big = wide.to_bigint();
/// assert_eq!(big.to_string(), "-7");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BigIntegerValue {
    value: i64,
}

impl BigIntegerValue {
    #[must_use]
    pub const fn new() -> Self {
        BigIntegerValue { value: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    #[inline]
    pub fn set(&mut self, value: i64) {
        self.value = value;
    }

    /// Direct mutable access to the payload.
    #[inline]
    pub fn value_mut(&mut self) -> &mut i64 {
        &mut self.value
    }

    /// Returns the payload as an arbitrary-precision integer.
    #[must_use]
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from(self.value)
    }
}

/// Lossless widening from the 32-bit integer leaf.
impl From<IntegerValue> for BigIntegerValue {
    fn from(value: IntegerValue) -> Self {
        BigIntegerValue {
            value: i64::from(value.value),
        }
    }
}

impl From<i64> for BigIntegerValue {
    fn from(value: i64) -> Self {
        BigIntegerValue { value }
    }
}

impl From<i32> for BigIntegerValue {
    fn from(value: i32) -> Self {
        BigIntegerValue {
            value: i64::from(value),
        }
    }
}

impl From<u32> for BigIntegerValue {
    fn from(value: u32) -> Self {
        BigIntegerValue {
            value: i64::from(value),
        }
    }
}

impl From<BigIntegerValue> for i64 {
    fn from(value: BigIntegerValue) -> Self {
        value.value
    }
}

impl From<BigIntegerValue> for BigInt {
    fn from(value: BigIntegerValue) -> Self {
        value.to_bigint()
    }
}

impl TryFrom<&BigInt> for BigIntegerValue {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<Self> {
        let value = i64::try_from(value).map_err(|_| Error::out_of_range(value, "i64"))?;
        Ok(BigIntegerValue { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_defaults_to_zero() {
        assert_eq!(DoubleValue::new().value(), 0.0);
        assert_eq!(DoubleValue::default().value(), 0.0);
    }

    #[test]
    fn test_double_rejects_non_finite() {
        for candidate in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                DoubleValue::try_new(candidate),
                Err(Error::NonFinite { .. })
            ));

            let mut d = DoubleValue::try_new(4.25).unwrap();
            assert!(d.set(candidate).is_err());
            assert_eq!(d.value(), 4.25);
        }
    }

    #[test]
    fn test_positive_infinity_keeps_default() {
        let mut d = DoubleValue::new();
        let err = d.set(1.0 / 0.0).unwrap_err();
        assert!(matches!(err, Error::NonFinite { value } if value == f64::INFINITY));
        assert_eq!(d.value(), 0.0);
    }

    #[test]
    fn test_double_accepts_extremes() {
        for candidate in [f64::MAX, f64::MIN, f64::MIN_POSITIVE, -0.0, 5e-324] {
            let d = DoubleValue::try_new(candidate).unwrap();
            assert_eq!(d.value().to_bits(), candidate.to_bits());
        }
    }

    #[test]
    fn test_double_from_integer_is_exact() {
        let d = DoubleValue::from(IntegerValue::from(i32::MAX));
        assert_eq!(d.value(), 2_147_483_647.0);
    }

    #[test]
    #[allow(clippy::clone_on_copy)]
    fn test_integer_clone_is_independent() {
        let original = IntegerValue::from(42);
        let mut copy = original.clone();
        copy.set(7);
        assert_eq!(original.value(), 42);
        assert_eq!(copy.value(), 7);
    }

    #[test]
    fn test_integer_value_mut() {
        let mut i = IntegerValue::new();
        *i.value_mut() += 5;
        assert_eq!(i.value(), 5);
    }

    #[test]
    fn test_widening_is_lossless() {
        for n in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(BigIntegerValue::from(IntegerValue::from(n)).value(), i64::from(n));
        }
    }

    #[test]
    fn test_big_integer_full_range() {
        let mut b = BigIntegerValue::from(i64::MAX);
        assert_eq!(b.value(), i64::MAX);
        b.set(i64::MIN);
        assert_eq!(i64::from(b), i64::MIN);
    }

    #[test]
    fn test_bigint_interop() {
        let b = BigIntegerValue::from(-123_456_789_012i64);
        let big: BigInt = b.into();
        assert_eq!(BigIntegerValue::try_from(&big).unwrap(), b);

        let too_big = BigInt::from(i64::MAX) + 1;
        let err = BigIntegerValue::try_from(&too_big).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { target: "i64", .. }));
        assert!(err.to_string().starts_with("9223372036854775808"));
    }
}
