use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;

use crate::error::{ClassError, MismatchError};
use crate::hooks::Hooks;
use crate::instance::{Class, FieldIterMut, Instance};
use crate::value::{Record, Value};
use crate::walk::{FromValue, Walk, WalkMut};

/// An instance whose class name and fields are chosen at runtime.
///
/// `DynamicObject` is the base class every [`ClassRegistry`] created with
/// [`ClassRegistry::new`] knows, and it backs the classes added with
/// [`ClassRegistry::register_dynamic`]. It accepts any field on assignment and
/// serializes its fields in insertion order.
///
/// # Examples
///
/// ```
/// use sc_class::registry::ClassRegistry;
/// use sc_class::{DynamicObject, Serializer};
///
/// let mut registry = ClassRegistry::new();
/// registry.register_dynamic("Ghost");
///
/// let mut ghost = DynamicObject::with_class("Ghost");
/// ghost.set("number", 5);
///
/// let record = Serializer::new(&registry).serialize(&mut ghost).unwrap();
/// assert_eq!(record.class_tag().unwrap(), Some("Ghost"));
/// ```
///
/// [`ClassRegistry`]: crate::registry::ClassRegistry
/// [`ClassRegistry::new`]: crate::registry::ClassRegistry::new
/// [`ClassRegistry::register_dynamic`]: crate::registry::ClassRegistry::register_dynamic
#[derive(Debug)]
pub struct DynamicObject {
    class: Cow<'static, str>,
    fields: Record<Value>,
}

impl DynamicObject {
    /// The class name of a plain `DynamicObject`.
    pub const CLASS_NAME: &'static str = "DynamicObject";

    /// Creates an empty object of class [`DynamicObject::CLASS_NAME`].
    #[inline]
    pub fn new() -> Self {
        Self::with_class(Self::CLASS_NAME)
    }

    /// Creates an empty object of the given class.
    #[inline]
    pub fn with_class(class: impl Into<Cow<'static, str>>) -> Self {
        Self {
            class: class.into(),
            fields: Record::new(),
        }
    }

    /// Sets a field, returning its previous value.
    #[inline]
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field, value)
    }

    #[inline]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    #[inline]
    pub fn get_mut(&mut self, field: &str) -> Option<&mut Value> {
        self.fields.get_mut(field)
    }

    #[inline]
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    #[inline]
    pub fn fields(&self) -> &Record<Value> {
        &self.fields
    }
}

impl Default for DynamicObject {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Hooks for DynamicObject {}

impl Class for DynamicObject {
    const NAME: &'static str = Self::CLASS_NAME;
}

impl Instance for DynamicObject {
    #[inline]
    fn class_name(&self) -> &str {
        &self.class
    }

    fn fields_mut(&mut self) -> FieldIterMut<'_> {
        Box::new(
            self.fields
                .iter_mut()
                .map(|(name, value)| (name, value as &mut dyn Walk)),
        )
    }

    #[inline]
    fn assign(&mut self, field: &str, value: Value) -> Result<(), ClassError> {
        self.fields.insert(field, value);
        Ok(())
    }
}

impl Walk for DynamicObject {
    #[inline]
    fn walk_mut(&mut self) -> WalkMut<'_> {
        WalkMut::Instance(self)
    }
}

impl FromValue for DynamicObject {
    fn from_value(value: Value) -> Result<Self, MismatchError> {
        match value {
            Value::Instance(instance) => match instance.downcast::<Self>() {
                Ok(object) => Ok(*object),
                Err(other) => Err(MismatchError::new(
                    "a dynamic object",
                    Value::Instance(other).describe(),
                )),
            },
            other => Err(MismatchError::new("a dynamic object", other.describe())),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
