//! # json_primitives
//!
//! Validated leaf value types for an in-memory JSON data model.
//!
//! ## What is in here?
//!
//! A closed set of non-container JSON values unified by one sum type,
//! [`Value`]:
//!
//! - [`StringValue`]: a byte payload that is always well-formed UTF-8
//! - [`DoubleValue`]: a finite `f64` (never NaN or infinite)
//! - [`IntegerValue`]: an `i32`
//! - [`BigIntegerValue`]: an `i64`, widenable from [`IntegerValue`] without loss
//! - [`BooleanValue`]: a `bool`
//! - [`NullValue`]: no payload
//!
//! Parsers build these through the validating constructors; writers dispatch
//! on [`Value::value_type`] and read payloads back through `value()`.
//! Containers, parsing and text rendering live elsewhere.
//!
//! ## Quick Start
//!
//! ```rust
//! use json_primitives::{DoubleValue, Error, StringValue, Value, ValueType};
//!
//! // Byte input is validated as UTF-8
//! let s = StringValue::from_utf8("héllo".as_bytes()).unwrap();
//! assert_eq!(s.value(), "héllo");
//!
//! // A failed setter leaves the old payload in place
//! let mut d = DoubleValue::new();
//! assert!(matches!(d.set(1.0 / 0.0), Err(Error::NonFinite { .. })));
//! assert_eq!(d.value(), 0.0);
//!
//! // Clone through the sum type without knowing the variant
//! let value = Value::from(s);
//! let copy = value.clone();
//! assert_eq!(copy.value_type(), ValueType::String);
//! ```
//!
//! ## Invariants
//!
//! - Every constructor and setter of a validated leaf funnels through one
//!   validation function; failure is reported as an [`Error`] and the
//!   previous payload stays untouched
//! - No silent coercion: strings are never truncated or patched, doubles are
//!   never clamped
//! - A value's [`ValueType`] never changes during its lifetime
//! - `clone()` always yields a fully independent instance
//!
//! ## Concurrency
//!
//! All types are plain owned data. They are `Send + Sync` and carry no
//! internal locking; share a single instance behind the caller's own lock or
//! hand out clones.
//!
//! ## Serde
//!
//! Every leaf and [`Value`] implement `Serialize` and `Deserialize`.
//! Deserialization applies the same checks as the constructors, so a
//! deserializer cannot smuggle NaN or invalid UTF-8 into a value.
//!
//! ```rust
//! use json_primitives::Value;
//!
//! let value: Value = serde_json::from_str("\"héllo\"").unwrap();
//! assert_eq!(value.as_str(), Some("héllo"));
//! ```

pub mod error;
pub mod literal;
pub mod macros;
pub mod number;
pub mod string;
pub mod value;

pub use error::{Error, Result};
pub use literal::{BooleanValue, NullValue};
pub use number::{BigIntegerValue, DoubleValue, IntegerValue};
pub use string::StringValue;
pub use value::{Value, ValueType};
