use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::BuildHasher;
use std::collections::HashMap;

use crate::error::MismatchError;
use crate::instance::{Class, Instance};
use crate::value::{Function, Number, Record, Value};

// -----------------------------------------------------------------------------
// FromValue

/// Converts a resolved live value into a typed field.
///
/// This is the inward counterpart of [`Walk`](super::Walk): the deserializer
/// resolves plain data into a [`Value`], and the field type takes it from
/// there. Nested instances arrive as [`Value::Instance`] whatever the declared
/// field type, so a field of class type accepts only an instance of exactly
/// that class.
///
/// # Examples
///
/// ```
/// use sc_class::walk::FromValue;
/// use sc_class::Value;
///
/// assert_eq!(i32::from_value(Value::from(7)).unwrap(), 7);
/// assert_eq!(Option::<i32>::from_value(Value::Null).unwrap(), None);
/// assert!(u8::from_value(Value::from(300)).is_err());
/// ```
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, MismatchError>;
}

/// Takes an instance of `T` out of a value.
///
/// The [`FromValue`] implementation `#[derive(Class)]` generates.
pub fn instance_from_value<T: Class>(value: Value) -> Result<T, MismatchError> {
    match value {
        Value::Instance(instance) => match instance.downcast::<T>() {
            Ok(instance) => Ok(*instance),
            Err(other) => Err(mismatch::<T>(&Value::Instance(other))),
        },
        other => Err(mismatch::<T>(&other)),
    }
}

#[inline]
fn mismatch<T: Class>(found: &Value) -> MismatchError {
    MismatchError::new(format!("instance of `{}`", T::NAME), found.describe())
}

// -----------------------------------------------------------------------------
// Primitives

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, MismatchError> {
        value
            .as_bool()
            .ok_or_else(|| MismatchError::new("bool", value.describe()))
    }
}

macro_rules! impl_from_value_int {
    ($via:ident => $($ty:ty),*) => {$(
        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, MismatchError> {
                value
                    .as_number()
                    .and_then(Number::$via)
                    .and_then(|v| <$ty>::try_from(v).ok())
                    .ok_or_else(|| MismatchError::new(stringify!($ty), value.describe()))
            }
        }
    )*};
}

impl_from_value_int!(as_i64 => i8, i16, i32, i64, isize);
impl_from_value_int!(as_u64 => u8, u16, u32, u64, usize);

macro_rules! impl_from_value_float {
    ($($ty:ty),*) => {$(
        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, MismatchError> {
                value
                    .as_number()
                    .map(|v| v.as_f64() as $ty)
                    .ok_or_else(|| MismatchError::new(stringify!($ty), value.describe()))
            }
        }
    )*};
}

impl_from_value_float!(f32, f64);

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, MismatchError> {
        match value {
            Value::String(v) => Ok(v),
            other => Err(MismatchError::new("string", other.describe())),
        }
    }
}

impl FromValue for Function {
    fn from_value(value: Value) -> Result<Self, MismatchError> {
        match value {
            Value::Function(v) => Ok(v),
            other => Err(MismatchError::new("function", other.describe())),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, MismatchError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

// -----------------------------------------------------------------------------
// Containers

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, MismatchError> {
        match value {
            Value::Sequence(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(MismatchError::new("sequence", other.describe())),
        }
    }
}

impl<T: FromValue> FromValue for Record<T> {
    fn from_value(value: Value) -> Result<Self, MismatchError> {
        match value {
            Value::Record(record) => record
                .into_iter()
                .map(|(key, value)| Ok((key, T::from_value(value)?)))
                .collect(),
            other => Err(MismatchError::new("record", other.describe())),
        }
    }
}

impl<T: FromValue, S: BuildHasher + Default> FromValue for HashMap<String, T, S> {
    fn from_value(value: Value) -> Result<Self, MismatchError> {
        match value {
            Value::Record(record) => record
                .into_iter()
                .map(|(key, value)| Ok((key, T::from_value(value)?)))
                .collect(),
            other => Err(MismatchError::new("record", other.describe())),
        }
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: Value) -> Result<Self, MismatchError> {
        match value {
            Value::Record(record) => record
                .into_iter()
                .map(|(key, value)| Ok((key, T::from_value(value)?)))
                .collect(),
            other => Err(MismatchError::new("record", other.describe())),
        }
    }
}

// -----------------------------------------------------------------------------
// Dynamic values

impl FromValue for Value {
    #[inline]
    fn from_value(value: Value) -> Result<Self, MismatchError> {
        Ok(value)
    }
}

impl FromValue for Box<dyn Instance> {
    fn from_value(value: Value) -> Result<Self, MismatchError> {
        match value {
            Value::Instance(instance) => Ok(instance),
            other => Err(MismatchError::new("instance", other.describe())),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use std::collections::HashMap;

    use crate::value::{Record, Value};
    use crate::walk::FromValue;
    use crate::{DynamicObject, Instance};

    #[test]
    fn numbers_convert_losslessly() {
        assert_eq!(u64::from_value(Value::from(5_i64)).unwrap(), 5);
        assert_eq!(i8::from_value(Value::from(-5.0)).unwrap(), -5);
        assert_eq!(f32::from_value(Value::from(2_u8)).unwrap(), 2.0);

        let err = u32::from_value(Value::from(-1)).unwrap_err();
        assert_eq!(err.expected, "u32");
        assert_eq!(err.found, "number");

        assert!(i32::from_value(Value::from(1.5)).is_err());
        assert!(i32::from_value(Value::from("1")).is_err());
    }

    #[test]
    fn containers() {
        let value = Value::Sequence(vec![Value::from(1), Value::Null, Value::from(3)]);
        let items = Vec::<Option<i32>>::from_value(value).unwrap();
        assert_eq!(items, [Some(1), None, Some(3)]);

        let record = || -> Record<Value> {
            [("b", Value::from(2)), ("a", Value::from(1))]
                .into_iter()
                .collect()
        };
        let tree = BTreeMap::<String, i64>::from_value(Value::Record(record())).unwrap();
        assert_eq!(tree.len(), 2);
        let map = HashMap::<String, u8>::from_value(Value::Record(record())).unwrap();
        assert_eq!(map["a"], 1);

        let err = Vec::<i32>::from_value(Value::from("x")).unwrap_err();
        assert_eq!(err.expected, "sequence");
    }

    #[test]
    fn instances() {
        let value = Value::from(DynamicObject::with_class("Ghost"));
        let err = String::from_value(value).unwrap_err();
        assert_eq!(err.found, "instance of `Ghost`");

        let value = Value::from(DynamicObject::with_class("Ghost"));
        let boxed = Box::<dyn Instance>::from_value(value).unwrap();
        assert_eq!(boxed.class_name(), "Ghost");

        let object = DynamicObject::from_value(Value::instance(DynamicObject::new())).unwrap();
        assert_eq!(object.class_name(), DynamicObject::CLASS_NAME);
    }
}
