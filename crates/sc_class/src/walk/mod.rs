//! The recursive traversal shared by serialization and deserialization.
//!
//! Outward, a live value is classified through [`Walk::walk_mut`] into a
//! [`WalkMut`]: a primitive, a sequence, a plain record, an instance or a
//! function. Inward, a [`PlainValue`] is classified by [`classify`] into a
//! [`PlainShape`], and resolved live values are turned back into typed fields
//! with [`FromValue`].
//!
//! [`Serializer`](crate::Serializer) and [`Deserializer`](crate::Deserializer)
//! drive the recursion; this module only describes the shapes.

// -----------------------------------------------------------------------------
// Modules

mod context;
mod from_value;
mod impls;
mod options;

#[cfg(all(debug_assertions, feature = "debug"))]
mod stack;

// -----------------------------------------------------------------------------
// Exports

pub(crate) use context::{Segment, WalkContext};
pub use from_value::{FromValue, instance_from_value};
pub use options::WalkOptions;

// -----------------------------------------------------------------------------
// Walk

use alloc::boxed::Box;

use crate::ClassError;
use crate::instance::Instance;
use crate::value::{PlainRecord, PlainValue};

/// The shape of a live value as seen by the serializer.
pub enum WalkMut<'a> {
    /// Copied into the output as is.
    Primitive(PlainValue),
    /// Transformed element-wise.
    Sequence(Box<dyn Iterator<Item = &'a mut dyn Walk> + 'a>),
    /// Transformed value-wise into an untagged record.
    Record(Box<dyn Iterator<Item = (&'a str, &'a mut dyn Walk)> + 'a>),
    /// Serialized recursively into its own tagged record.
    Instance(&'a mut dyn Instance),
    /// Omitted from the output.
    Function,
}

/// A live value the serializer can traverse.
///
/// Implemented for primitives, strings, options, the standard collections,
/// [`Value`](crate::Value), and every `#[derive(Class)]` type.
///
/// The receiver is mutable because reaching an instance runs its
/// [`pre_serialize`](crate::Hooks::pre_serialize) hook.
pub trait Walk {
    fn walk_mut(&mut self) -> WalkMut<'_>;
}

// -----------------------------------------------------------------------------
// PlainShape

/// The shape of a plain value as seen by the deserializer.
#[derive(Debug, Clone, Copy)]
pub enum PlainShape<'a> {
    Primitive(&'a PlainValue),
    Sequence(&'a [PlainValue]),
    /// A record without class tag.
    Record(&'a PlainRecord),
    /// A record with a class tag, reconstructed as an instance of `class`.
    Tagged {
        class: &'a str,
        record: &'a PlainRecord,
    },
}

/// Classifies a plain value.
///
/// Fails with [`ClassError::InvalidClassTag`] if a record carries a class tag
/// that is neither a string nor `null`.
///
/// # Examples
///
/// ```
/// use sc_class::walk::{PlainShape, classify};
/// use sc_class::{PlainRecord, PlainValue};
///
/// let tagged = PlainValue::from(PlainRecord::tagged("Known"));
/// assert!(matches!(classify(&tagged), Ok(PlainShape::Tagged { class: "Known", .. })));
///
/// let plain = PlainValue::from(PlainRecord::new().with("a", 1));
/// assert!(matches!(classify(&plain), Ok(PlainShape::Record(_))));
/// ```
pub fn classify(value: &PlainValue) -> Result<PlainShape<'_>, ClassError> {
    Ok(match value {
        PlainValue::Sequence(items) => PlainShape::Sequence(items),
        PlainValue::Record(record) => match record.class_tag()? {
            Some(class) => PlainShape::Tagged { class, record },
            None => PlainShape::Record(record),
        },
        primitive => PlainShape::Primitive(primitive),
    })
}
