//! The runtime interface of class instances.
//!
//! - [`Instance`]: object-safe access to the class name and fields of a value.
//! - [`Class`]: a statically known class with a blank constructor.
//! - [`DynamicObject`]: an instance whose class and fields are chosen at runtime.

// -----------------------------------------------------------------------------
// Modules

mod dynamic;

// -----------------------------------------------------------------------------
// Exports

pub use dynamic::DynamicObject;

// -----------------------------------------------------------------------------
// Instance

use alloc::boxed::Box;
use core::any::Any;
use core::fmt::Debug;

use crate::ClassError;
use crate::hooks::Hooks;
use crate::value::Value;
use crate::walk::Walk;

/// Iterator over the serializable fields of an instance, in declaration order.
pub type FieldIterMut<'a> = Box<dyn Iterator<Item = (&'a str, &'a mut dyn Walk)> + 'a>;

/// A value that serializes as a tagged record.
///
/// This is usually implemented by `#[derive(Class)]`. Manual implementations
/// must keep [`fields_mut`](Instance::fields_mut) and
/// [`assign`](Instance::assign) consistent: every name yielded by the former
/// should be accepted by the latter.
pub trait Instance: Hooks + Any + Debug + Send + Sync + 'static {
    /// The runtime class name, written to `_class` when serializing.
    fn class_name(&self) -> &str;

    /// Enumerates the own serializable fields.
    fn fields_mut(&mut self) -> FieldIterMut<'_>;

    /// Stores a resolved value into the named field.
    ///
    /// Fails with [`ClassError::Assign`] if the value does not fit the field
    /// and with [`ClassError::UnknownField`] if there is no such field.
    fn assign(&mut self, field: &str, value: Value) -> Result<(), ClassError>;
}

impl dyn Instance {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Instance>(&self) -> bool {
        <dyn Any>::is::<T>(self)
    }

    #[inline]
    pub fn downcast_ref<T: Instance>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Instance>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the boxed instance to `T`, handing it back on failure.
    pub fn downcast<T: Instance>(self: Box<Self>) -> Result<Box<T>, Box<Self>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type is already checked"),
        }
    }
}

// -----------------------------------------------------------------------------
// Class

/// A class with a static name and a blank constructor.
///
/// [`Default`] is the factory the registry stores for the class, so a blank
/// instance is always the default value of the type.
///
/// # Examples
///
/// ```
/// use sc_class::derive::Class;
/// use sc_class::{Class, Instance};
///
/// #[derive(Class, Default, Debug)]
/// #[class(name = "geo.Point")]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// assert_eq!(Point::NAME, "geo.Point");
/// assert_eq!(Point::default().class_name(), "geo.Point");
/// ```
pub trait Class: Instance + Default {
    const NAME: &'static str;
}
