//! Paths into `sc_class` used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `sc_class` crate.
///
/// 1. For crates that depend on `sc_class`, `::sc_class` is returned.
/// 2. For crates that depend on `sc_core`, `::sc_core::class` is returned.
/// 3. For crates that depend on `sc`, `::sc::class` is returned.
/// 4. Otherwise `::sc_class` is returned, which is correct inside `sc_class`
///    itself through `extern crate self as sc_class`.
pub(crate) fn sc_class() -> syn::Path {
    sc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("sc_class"))
}

#[inline(always)]
pub(crate) fn macro_exports_(sc_class_path: &syn::Path) -> TokenStream {
    quote! {
        #sc_class_path::__macro_exports
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(sc_class_path: &syn::Path) -> TokenStream {
    quote! {
        #sc_class_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn walk_(sc_class_path: &syn::Path) -> TokenStream {
    quote! {
        #sc_class_path::walk
    }
}
