//! The class registry: the table from class name to factory.
//!
//! ## Menu
//!
//! - [`ClassRegistry`]: the table itself.
//! - [`RegisteredClass`]: one entry, a name and a [`ClassFactory`].
//! - [`ClassRegistryArc`]: a shared, lockable registry.
//! - [`global`]: the process-wide [`ClassRegistryArc`] used by the free
//!   functions at the crate root.
//!
//! ## auto_register
//!
//! See [`ClassRegistry::auto_register`].
//!
//! Static collection is done with the [`inventory`] crate. Types opt in with
//! `#[class(auto_register)]`; registration still happens only when
//! `auto_register` is called.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod class_registry;
mod shared;

// -----------------------------------------------------------------------------
// Exports

pub use class_registry::{ClassFactory, ClassRegistry, RegisteredClass};
pub use shared::{ClassRegistryArc, global};
