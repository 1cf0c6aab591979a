//! Parsing of `#[class(...)]` attributes.

use proc_macro2::Span;
use syn::{Attribute, LitStr};

use crate::CLASS_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes on the struct itself.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `name = "..."`
    pub name: Option<LitStr>,
    /// `hooks`
    pub hooks: bool,
    /// `ignore_unknown`
    pub ignore_unknown: bool,
    /// `auto_register`
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(CLASS_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(meta.error("class name must not be empty"));
                    }
                    this.name = Some(lit);
                } else if meta.path.is_ident("hooks") {
                    this.hooks = true;
                } else if meta.path.is_ident("ignore_unknown") {
                    this.ignore_unknown = true;
                } else if meta.path.is_ident("auto_register") {
                    this.auto_register = Some(meta.path.require_ident()?.span());
                } else {
                    return Err(meta.error(
                        "unknown class attribute, expected `name`, `hooks`, `ignore_unknown` or `auto_register`",
                    ));
                }
                Ok(())
            })?;
        }
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes on a field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `skip`
    pub skip: bool,
    /// `rename = "..."`
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(CLASS_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = true;
                } else if meta.path.is_ident("rename") {
                    this.rename = Some(meta.value()?.parse()?);
                } else {
                    return Err(meta.error("unknown field attribute, expected `skip` or `rename`"));
                }
                Ok(())
            })?;
        }
        Ok(this)
    }
}
