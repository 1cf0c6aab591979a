//! Tagged class serialization.
//!
//! Converts graphs of registered class instances into a plain, JSON-compatible
//! shape ([`PlainValue`]) and back, keeping the concrete runtime class of every
//! instance in a reserved `_class` key.
//!
//! ## Menu
//!
//! - [`registry`]: [`ClassRegistry`](registry::ClassRegistry), the name → factory table,
//!   and the process-wide handle returned by [`registry::global`].
//! - [`walk`]: the traversal shared by both directions ([`Walk`](walk::Walk), [`FromValue`](walk::FromValue)).
//! - [`ser`]: [`Serializer`], instance → tagged record.
//! - [`de`]: [`Deserializer`], tagged record → instance, with the [`Factory`] and
//!   [`Contextual`] reconstruction policies.
//! - [`Hooks`]: optional lifecycle callbacks.
//! - [`derive::Class`]: generates the field schema of a struct.
//!
//! ## Example
//!
//! ```
//! use sc_class::derive::Class;
//! use sc_class::registry::ClassRegistry;
//! use sc_class::{Deserializer, Serializer};
//!
//! #[derive(Class, Default, Debug, PartialEq)]
//! struct Inner {
//!     number: i32,
//! }
//!
//! #[derive(Class, Default, Debug, PartialEq)]
//! struct Outer {
//!     inner: Inner,
//! }
//!
//! let mut registry = ClassRegistry::new();
//! registry.register_class::<Inner>();
//! registry.register_class::<Outer>();
//!
//! let mut outer = Outer { inner: Inner { number: 5 } };
//! let record = Serializer::new(&registry).serialize(&mut outer).unwrap();
//!
//! let inner = record.get("inner").unwrap().as_record().unwrap();
//! assert_eq!(inner.class_tag().unwrap(), Some("Inner"));
//!
//! let back: Outer = Deserializer::new(&registry).deserialize_as(&record).unwrap();
//! assert_eq!(back, outer);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// Usually, we need to use `crate` in the crate itself and use `sc_class` in doc testing.
// The derive macro can only emit one of them, so `sc_class` must also name this crate.
extern crate self as sc_class;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod global;
mod hooks;

pub mod de;
pub mod instance;
pub mod registry;
pub mod ser;
pub mod value;
pub mod walk;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use de::{Contextual, Deserializer, Factory, Reconstructed, Reconstruction};
pub use error::{ClassError, MismatchError};
pub use global::{create, deserialize, deserialize_into, register, serialize};
pub use hooks::{HookError, HookResult, HookStage, Hooks};
pub use instance::{Class, DynamicObject, Instance};
pub use sc_class_derive as derive;
pub use ser::Serializer;
pub use value::{CLASS_TAG, Function, Number, PlainRecord, PlainValue, Record, Value, ValueKind};
