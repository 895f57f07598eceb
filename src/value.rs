//! The polymorphic leaf value.
//!
//! [`Value`] is a closed sum type over the six leaf variants. Its type tag,
//! [`ValueType`], is read off the variant itself, so it is fixed for the
//! lifetime of an instance: mutating through [`Value::as_string_mut`] and
//! friends can change a payload but never the variant.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use json_primitives::{Value, ValueType};
//!
//! let null = Value::default();
//! let flag = Value::from(true);
//! let small = Value::from(42);
//! let wide = Value::from(i64::MAX);
//! let text = Value::from("hello");
//! let number = Value::try_from(2.5).unwrap();
//!
//! assert_eq!(null.value_type(), ValueType::Null);
//! assert_eq!(small.value_type(), ValueType::Integer);
//! assert_eq!(wide.value_type(), ValueType::BigInteger);
//! assert!(Value::try_from(f64::NAN).is_err());
//! ```
//!
//! ### Cloning
//!
//! `Clone` is the deep-copy contract; it works through `Value` without
//! knowing the concrete variant.
//!
//! ```rust
//! use json_primitives::Value;
//!
//! let original = Value::from("shared");
//! let mut copy = original.clone();
//! copy.as_string_mut().unwrap().set(b"changed").unwrap();
//!
//! assert_eq!(original.as_str(), Some("shared"));
//! assert_eq!(copy.as_str(), Some("changed"));
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use json_primitives::Value;
//!
//! let n: i64 = i64::try_from(Value::from(7)).unwrap();
//! assert_eq!(n, 7);
//! assert!(String::try_from(Value::from(7)).is_err());
//! ```

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    BigIntegerValue, BooleanValue, DoubleValue, Error, IntegerValue, NullValue, StringValue,
};

/// The type tag identifying which variant a [`Value`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Double,
    Integer,
    BigInteger,
    Bool,
    Null,
}

impl ValueType {
    /// Returns the lowercase name of the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_primitives::ValueType;
    ///
    /// assert_eq!(ValueType::BigInteger.name(), "big integer");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Double => "double",
            ValueType::Integer => "integer",
            ValueType::BigInteger => "big integer",
            ValueType::Bool => "bool",
            ValueType::Null => "null",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JSON leaf value of any variant.
///
/// Each variant wraps the leaf type that owns and validates its payload.
///
/// # Examples
///
/// ```rust
/// use json_primitives::{IntegerValue, Value};
///
/// let value = Value::Integer(IntegerValue::from(42));
/// assert!(value.is_integer());
/// assert_eq!(value.as_i64(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(StringValue),
    Double(DoubleValue),
    Integer(IntegerValue),
    BigInteger(BigIntegerValue),
    Bool(BooleanValue),
    Null(NullValue),
}

impl Default for Value {
    fn default() -> Self {
        Value::Null(NullValue)
    }
}

impl Value {
    /// Returns the type tag of this value.
    #[inline]
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Double(_) => ValueType::Double,
            Value::Integer(_) => ValueType::Integer,
            Value::BigInteger(_) => ValueType::BigInteger,
            Value::Bool(_) => ValueType::Bool,
            Value::Null(_) => ValueType::Null,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_big_integer(&self) -> bool {
        matches!(self, Value::BigInteger(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null(_))
    }

    /// If the value is a string, returns its payload. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.value()),
            _ => None,
        }
    }

    /// If the value is a double, returns its payload. Integers are not
    /// converted.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(d.value()),
            _ => None,
        }
    }

    /// If the value is a 32-bit integer, returns it. Big integers are never
    /// narrowed.
    #[inline]
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(i) => Some(i.value()),
            _ => None,
        }
    }

    /// If the value is either integer variant, returns it widened to `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_primitives::Value;
    ///
    /// assert_eq!(Value::from(5).as_i64(), Some(5));
    /// assert_eq!(Value::from(i64::MIN).as_i64(), Some(i64::MIN));
    /// assert_eq!(Value::from("5").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(i64::from(i.value())),
            Value::BigInteger(i) => Some(i.value()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(b.value()),
            _ => None,
        }
    }

    /// Mutable access to a string payload; updates still go through
    /// [`StringValue::set`] validation.
    pub fn as_string_mut(&mut self) -> Option<&mut StringValue> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable access to a double payload; updates still go through
    /// [`DoubleValue::set`] validation.
    pub fn as_double_mut(&mut self) -> Option<&mut DoubleValue> {
        match self {
            Value::Double(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_integer_mut(&mut self) -> Option<&mut IntegerValue> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_big_integer_mut(&mut self) -> Option<&mut BigIntegerValue> {
        match self {
            Value::BigInteger(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_bool_mut(&mut self) -> Option<&mut BooleanValue> {
        match self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => s.serialize(serializer),
            Value::Double(d) => d.serialize(serializer),
            Value::Integer(i) => i.serialize(serializer),
            Value::BigInteger(i) => i.serialize(serializer),
            Value::Bool(b) => b.serialize(serializer),
            Value::Null(n) => n.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON string, number, boolean or null")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Value::from)
                    .map_err(|_| E::custom(Error::out_of_range(value, "i64")))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Value::try_from(value).map_err(E::custom)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Value::try_from(value).map_err(E::custom)
            }

            fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Value::try_from(value).map_err(E::custom)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::default())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::default())
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting payloads from Value
impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s.into_string()),
            other => Err(Error::type_mismatch(ValueType::String, other.value_type())),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Double(d) => Ok(d.value()),
            other => Err(Error::type_mismatch(ValueType::Double, other.value_type())),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i.value()),
            other => Err(Error::type_mismatch(ValueType::Integer, other.value_type())),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i64::from(i.value())),
            Value::BigInteger(i) => Ok(i.value()),
            other => Err(Error::type_mismatch(
                ValueType::BigInteger,
                other.value_type(),
            )),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b.value()),
            other => Err(Error::type_mismatch(ValueType::Bool, other.value_type())),
        }
    }
}

// From implementations for wrapping leaves and primitives
impl From<StringValue> for Value {
    fn from(value: StringValue) -> Self {
        Value::String(value)
    }
}

impl From<DoubleValue> for Value {
    fn from(value: DoubleValue) -> Self {
        Value::Double(value)
    }
}

impl From<IntegerValue> for Value {
    fn from(value: IntegerValue) -> Self {
        Value::Integer(value)
    }
}

impl From<BigIntegerValue> for Value {
    fn from(value: BigIntegerValue) -> Self {
        Value::BigInteger(value)
    }
}

impl From<BooleanValue> for Value {
    fn from(value: BooleanValue) -> Self {
        Value::Bool(value)
    }
}

impl From<NullValue> for Value {
    fn from(value: NullValue) -> Self {
        Value::Null(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null(NullValue)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(BooleanValue::from(value))
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(IntegerValue::from(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(IntegerValue::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(IntegerValue::from(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(IntegerValue::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(IntegerValue::from(value))
    }
}

/// Picks the narrowest integer variant that holds `value`.
impl From<i64> for Value {
    fn from(value: i64) -> Self {
        match i32::try_from(value) {
            Ok(narrow) => Value::Integer(IntegerValue::from(narrow)),
            Err(_) => Value::BigInteger(BigIntegerValue::from(value)),
        }
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::from(i64::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(StringValue::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(StringValue::from(value))
    }
}

impl TryFrom<f64> for Value {
    type Error = Error;

    fn try_from(value: f64) -> crate::Result<Self> {
        DoubleValue::try_new(value).map(Value::Double)
    }
}

impl TryFrom<Vec<u8>> for Value {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> crate::Result<Self> {
        StringValue::from_utf8(value).map(Value::String)
    }
}

impl TryFrom<&[u8]> for Value {
    type Error = Error;

    fn try_from(value: &[u8]) -> crate::Result<Self> {
        StringValue::try_from(value).map(Value::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Value> {
        vec![
            Value::from("héllo"),
            Value::try_from(-0.5).unwrap(),
            Value::from(42),
            Value::from(i64::MAX),
            Value::from(true),
            Value::default(),
        ]
    }

    #[test]
    fn test_value_type_per_variant() {
        let tags: Vec<_> = samples().iter().map(Value::value_type).collect();
        assert_eq!(
            tags,
            vec![
                ValueType::String,
                ValueType::Double,
                ValueType::Integer,
                ValueType::BigInteger,
                ValueType::Bool,
                ValueType::Null,
            ]
        );
    }

    #[test]
    fn test_clone_keeps_variant_and_payload() {
        for value in samples() {
            let copy = value.clone();
            assert_eq!(copy.value_type(), value.value_type());
            assert_eq!(copy, value);
        }
    }

    #[test]
    fn test_type_tag_survives_mutation() {
        let mut value = Value::from("text");
        assert!(value.as_string_mut().unwrap().set(&[0xff]).is_err());
        value.as_string_mut().unwrap().set_str("other");
        assert_eq!(value.value_type(), ValueType::String);

        let mut value = Value::try_from(1.0).unwrap();
        assert!(value.as_double_mut().unwrap().set(f64::NAN).is_err());
        assert_eq!(value.as_f64(), Some(1.0));
        assert_eq!(value.value_type(), ValueType::Double);
    }

    #[test]
    fn test_mut_accessors_reject_other_variants() {
        let mut value = Value::from(1);
        assert!(value.as_string_mut().is_none());
        assert!(value.as_double_mut().is_none());
        assert!(value.as_big_integer_mut().is_none());
        assert!(value.as_bool_mut().is_none());
        value.as_integer_mut().unwrap().set(9);
        assert_eq!(value.as_i32(), Some(9));
    }

    #[test]
    fn test_integer_variant_selection() {
        assert!(Value::from(i64::from(i32::MAX)).is_integer());
        assert!(Value::from(i64::from(i32::MAX) + 1).is_big_integer());
        assert!(Value::from(i64::from(i32::MIN) - 1).is_big_integer());
        assert!(Value::from(u32::MAX).is_big_integer());
        assert!(Value::from(7u8).is_integer());
    }

    #[test]
    fn test_tryfrom_extraction() {
        assert_eq!(String::try_from(Value::from("s")).unwrap(), "s");
        assert_eq!(f64::try_from(Value::try_from(2.0).unwrap()).unwrap(), 2.0);
        assert_eq!(i32::try_from(Value::from(3)).unwrap(), 3);
        assert_eq!(i64::try_from(Value::from(3)).unwrap(), 3);
        assert!(bool::try_from(Value::from(true)).unwrap());

        let err = i32::try_from(Value::from(i64::MAX)).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: ValueType::Integer,
                found: ValueType::BigInteger,
            }
        ));

        // no coercion between doubles and integers
        assert!(f64::try_from(Value::from(3)).is_err());
        assert!(i64::try_from(Value::try_from(3.0).unwrap()).is_err());
    }

    #[test]
    fn test_tryfrom_bytes() {
        assert_eq!(
            Value::try_from("ok".as_bytes().to_vec()).unwrap().as_str(),
            Some("ok")
        );
        assert!(matches!(
            Value::try_from(&b"\xed\xa0\x80"[..]),
            Err(Error::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::Double.to_string(), "double");
        assert_eq!(format!("{}", ValueType::Null), "null");
    }
}
