/// Builds a leaf [`Value`](crate::Value) from a literal or expression.
///
/// Always evaluates to [`Result<Value>`](crate::Result): the infallible
/// conversions yield `Ok`, while a non-finite double or an invalid UTF-8
/// byte buffer yields the matching [`Error`](crate::Error).
///
/// # Examples
///
/// ```rust
/// use json_primitives::{json_value, ValueType};
///
/// assert!(json_value!(null).unwrap().is_null());
/// assert_eq!(json_value!(true).unwrap().as_bool(), Some(true));
/// assert_eq!(json_value!("héllo").unwrap().as_str(), Some("héllo"));
/// assert_eq!(json_value!(1.5).unwrap().value_type(), ValueType::Double);
/// assert!(json_value!(f64::INFINITY).is_err());
/// ```
#[macro_export]
macro_rules! json_value {
    (null) => {
        ::core::result::Result::<$crate::Value, $crate::Error>::Ok($crate::Value::Null(
            $crate::NullValue,
        ))
    };

    (true) => {
        ::core::result::Result::<$crate::Value, $crate::Error>::Ok($crate::Value::from(true))
    };

    (false) => {
        ::core::result::Result::<$crate::Value, $crate::Error>::Ok($crate::Value::from(false))
    };

    ($value:expr) => {
        <$crate::Value as ::core::convert::TryFrom<_>>::try_from($value)
            .map_err($crate::Error::from)
    };
}
