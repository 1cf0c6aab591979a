use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use super::{Number, Record, ValueKind};
use crate::instance::{DynamicObject, Instance};

// -----------------------------------------------------------------------------
// Function

/// A callable field value.
///
/// Functions carry no representable data: the serializer omits any record
/// field holding one, and deserialization never produces one.
#[derive(Clone)]
pub struct Function(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl Function {
    #[inline]
    pub fn new(func: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(func))
    }

    /// A function that ignores its arguments and returns [`Value::Null`].
    #[inline]
    pub fn noop() -> Self {
        Self::new(|_| Value::Null)
    }

    #[inline]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl Default for Function {
    #[inline]
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(..)")
    }
}

// -----------------------------------------------------------------------------
// Value

/// A live, dynamically typed value.
///
/// This is what the deserializer hands to [`Instance::assign`] and what a
/// [`DynamicObject`] stores. Unlike [`PlainValue`](crate::PlainValue) it can
/// hold whole instances and functions.
#[derive(Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Record(Record<Value>),
    Instance(Box<dyn Instance>),
    Function(Function),
}

impl Value {
    /// Wraps an instance.
    #[inline]
    pub fn instance(instance: impl Instance) -> Self {
        Self::Instance(Box::new(instance))
    }

    #[inline]
    pub fn function(func: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self::Function(Function::new(func))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Record(_) => ValueKind::Record,
            Self::Instance(_) => ValueKind::Instance,
            Self::Function(_) => ValueKind::Function,
        }
    }

    /// Describes the value for error messages, naming the class of instances.
    pub fn describe(&self) -> Cow<'static, str> {
        match self {
            Self::Instance(instance) => {
                Cow::Owned(format!("instance of `{}`", instance.class_name()))
            }
            other => Cow::Borrowed(other.kind().as_str()),
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_record(&self) -> Option<&Record<Value>> {
        match self {
            Self::Record(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_instance(&self) -> Option<&dyn Instance> {
        match self {
            Self::Instance(v) => Some(&**v),
            _ => None,
        }
    }

    /// Returns the held instance if it is a `T`.
    #[inline]
    pub fn downcast_ref<T: Instance>(&self) -> Option<&T> {
        self.as_instance()?.downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Instance>(&mut self) -> Option<&mut T> {
        match self {
            Self::Instance(v) => v.downcast_mut::<T>(),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_primitive {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::Number(Number::from(value))
            }
        }
    )*};
}

impl_from_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for Value {
    #[inline]
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Self::Sequence(value)
    }
}

impl From<Record<Value>> for Value {
    #[inline]
    fn from(value: Record<Value>) -> Self {
        Self::Record(value)
    }
}

impl From<Function> for Value {
    #[inline]
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

impl From<Box<dyn Instance>> for Value {
    #[inline]
    fn from(value: Box<dyn Instance>) -> Self {
        Self::Instance(value)
    }
}

impl From<DynamicObject> for Value {
    #[inline]
    fn from(value: DynamicObject) -> Self {
        Self::Instance(Box::new(value))
    }
}
