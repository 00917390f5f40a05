//! Conversion from [`Value`] into Rust types for argument extraction.
//!
//! ## Example
//!
//! ```ignore
//! let value = Value::Int(42);
//! let n: i32 = i32::from_value(&value)?;
//! ```

use crate::{ClassRef, ConversionError, ObjectRef, Record, Value};

/// Extract a Rust value from a [`Value`].
pub trait FromValue: Sized {
    /// Returns a `ConversionError` if the value has an incompatible type.
    fn from_value(value: &Value) -> Result<Self, ConversionError>;
}

fn mismatch(expected: &'static str, value: &Value) -> ConversionError {
    ConversionError::TypeMismatch {
        expected,
        actual: value.type_name(),
    }
}

macro_rules! impl_from_value_int {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Result<Self, ConversionError> {
                    match value {
                        Value::Int(v) => <$ty>::try_from(*v).map_err(|_| {
                            ConversionError::IntegerOverflow {
                                value: *v,
                                target_type: stringify!($ty),
                            }
                        }),
                        _ => Err(mismatch("int", value)),
                    }
                }
            }
        )*
    };
}

impl_from_value_int!(i32, i64, u32, usize);

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value.as_float().ok_or_else(|| mismatch("float", value))
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("string", value))
    }
}

impl FromValue for Vec<Value> {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value
            .as_list()
            .map(<[Value]>::to_vec)
            .ok_or_else(|| mismatch("list", value))
    }
}

impl FromValue for Record {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value
            .as_record()
            .cloned()
            .ok_or_else(|| mismatch("record", value))
    }
}

impl FromValue for ObjectRef {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value
            .as_object()
            .cloned()
            .ok_or_else(|| mismatch("object", value))
    }
}

impl FromValue for ClassRef {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value
            .as_class()
            .cloned()
            .ok_or_else(|| mismatch("class", value))
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        Ok(value.clone())
    }
}
