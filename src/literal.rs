//! The literal leaves: [`BooleanValue`] and [`NullValue`].

use serde::{Deserialize, Serialize};

/// A boolean value, `false` by default.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BooleanValue {
    value: bool,
}

impl BooleanValue {
    #[must_use]
    pub const fn new() -> Self {
        BooleanValue { value: false }
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> bool {
        self.value
    }

    #[inline]
    pub fn set(&mut self, value: bool) {
        self.value = value;
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut bool {
        &mut self.value
    }
}

impl From<bool> for BooleanValue {
    fn from(value: bool) -> Self {
        BooleanValue { value }
    }
}

impl From<BooleanValue> for bool {
    fn from(value: BooleanValue) -> Self {
        value.value
    }
}

/// The JSON `null` literal.
///
/// Carries no payload, so every instance is interchangeable with every other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NullValue;

impl NullValue {
    #[must_use]
    pub const fn new() -> Self {
        NullValue
    }
}

impl From<()> for NullValue {
    fn from(_: ()) -> Self {
        NullValue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_defaults_to_false() {
        assert!(!BooleanValue::new().value());
        assert!(!BooleanValue::default().value());
    }

    #[test]
    #[allow(clippy::clone_on_copy)]
    fn test_boolean_clone_is_independent() {
        let original = BooleanValue::from(true);
        let mut copy = original.clone();
        *copy.value_mut() = false;
        assert!(original.value());
        assert!(!bool::from(copy));
    }

    #[test]
    fn test_nulls_are_interchangeable() {
        assert_eq!(NullValue::new(), NullValue::default());
        assert_eq!(NullValue::from(()), NullValue);
    }
}
