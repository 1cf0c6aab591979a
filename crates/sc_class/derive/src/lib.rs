//! See [`Class`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static CLASS_ATTRIBUTE_NAME: &str = "class";

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Class Derivation
///
/// `#[derive(Class)]` on a struct with named fields implements:
///
/// - `Class`, with the struct name as class name,
/// - `Instance`, enumerating and assigning the fields in declaration order,
/// - `Walk` and `FromValue`, so the struct can be a field of another class,
/// - an empty `Hooks`.
///
/// The struct must also implement `Default` (the blank instance) and `Debug`.
/// Every field type must implement `Walk` and `FromValue`.
///
/// Unit structs are accepted as classes without fields. Tuple structs, enums,
/// unions and generic types are rejected.
///
/// ## Type Attributes
///
/// ```rust, ignore
/// #[derive(Class, Default, Debug)]
/// #[class(name = "geo.Point", hooks, ignore_unknown, auto_register)]
/// struct Point { x: f64, y: f64 }
/// ```
///
/// - `name = "..."`: the class name written to `_class`.
/// - `hooks`: do not emit `Hooks`; the type implements it by hand.
/// - `ignore_unknown`: skip record keys with no matching field instead of failing.
/// - `auto_register`: collect the class for `ClassRegistry::auto_register`.
///   A no-op when the `auto_register` feature is disabled.
///
/// ## Field Attributes
///
/// ```rust, ignore
/// #[derive(Class, Default, Debug)]
/// struct Cache {
///     #[class(rename = "key")]
///     cache_key: String,
///     #[class(skip)]
///     hits: u64,
/// }
/// ```
///
/// - `rename = "..."`: the key used in records.
/// - `skip`: never serialized; a record key of that name is ignored.
#[proc_macro_derive(Class, attributes(class))]
pub fn derive_class(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match impls::impl_class(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
