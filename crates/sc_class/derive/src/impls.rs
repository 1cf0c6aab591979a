//! Code generation of `#[derive(Class)]`.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

use crate::attributes::{FieldAttributes, TypeAttributes};
use crate::path;

// -----------------------------------------------------------------------------
// Parsed input

struct ClassField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    key: LitStr,
    skip: bool,
}

fn parse_fields(ast: &DeriveInput) -> syn::Result<Vec<ClassField<'_>>> {
    let data = match &ast.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "`Class` cannot be derived for enums",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "`Class` cannot be derived for unions",
            ));
        }
    };

    match &data.fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|field| {
                let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                // Named fields always have an ident.
                let ident = field.ident.as_ref().ok_or_else(|| {
                    syn::Error::new_spanned(field, "expected a named field")
                })?;
                let key = attrs
                    .rename
                    .unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span()));
                Ok(ClassField {
                    ident,
                    ty: &field.ty,
                    key,
                    skip: attrs.skip,
                })
            })
            .collect(),
        Fields::Unit => Ok(Vec::new()),
        Fields::Unnamed(unnamed) => Err(syn::Error::new_spanned(
            unnamed,
            "`Class` requires named fields",
        )),
    }
}

// -----------------------------------------------------------------------------
// Class

pub(crate) fn impl_class(ast: &DeriveInput) -> syn::Result<TokenStream> {
    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &ast.generics,
            "`Class` cannot be derived for generic types",
        ));
    }

    let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;
    let fields = parse_fields(ast)?;

    let sc_class_path = path::sc_class();
    let ident = &ast.ident;
    let name = attrs
        .name
        .clone()
        .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));

    let instance_impl = impl_instance(&sc_class_path, ident, &fields, attrs.ignore_unknown);
    let walk_ = path::walk_(&sc_class_path);

    let hooks_impl = if attrs.hooks {
        TokenStream::new()
    } else {
        quote! {
            impl #sc_class_path::Hooks for #ident {}
        }
    };

    let auto_register_impl = impl_auto_register(&sc_class_path, ident, attrs.auto_register);

    Ok(quote! {
        impl #sc_class_path::Class for #ident {
            const NAME: &'static str = #name;
        }

        #instance_impl

        impl #walk_::Walk for #ident {
            #[inline]
            fn walk_mut(&mut self) -> #walk_::WalkMut<'_> {
                #walk_::WalkMut::Instance(self)
            }
        }

        impl #walk_::FromValue for #ident {
            #[inline]
            fn from_value(
                value: #sc_class_path::Value,
            ) -> ::core::result::Result<Self, #sc_class_path::MismatchError> {
                #sc_class_path::__macro_exports::instance_from_value::<Self>(value)
            }
        }

        #hooks_impl

        #auto_register_impl
    })
}

// -----------------------------------------------------------------------------
// Instance

fn impl_instance(
    sc_class_path: &syn::Path,
    ident: &Ident,
    fields: &[ClassField<'_>],
    ignore_unknown: bool,
) -> TokenStream {
    let macro_exports_ = path::macro_exports_(sc_class_path);
    let walk_ = path::walk_(sc_class_path);

    let walked = fields.iter().filter(|field| !field.skip).map(|field| {
        let key = &field.key;
        let member = field.ident;
        quote! {
            (#key, &mut self.#member as &mut dyn #walk_::Walk)
        }
    });

    let assigned = fields.iter().filter(|field| !field.skip);
    let arms = assigned.clone().map(|field| {
        let member = field.ident;
        let key = &field.key;
        let ty = field.ty;
        quote! {
            #key => {
                self.#member = <#ty as #walk_::FromValue>::from_value(value).map_err(|source| {
                    #macro_exports_::assign_error(<Self as #sc_class_path::Class>::NAME, field, source)
                })?;
                ::core::result::Result::Ok(())
            }
        }
    });

    // Skipped fields answer to their Rust name, unless an assigned field
    // already claims that key.
    let skipped = fields
        .iter()
        .filter(|field| field.skip)
        .map(|field| LitStr::new(&field.ident.unraw().to_string(), field.ident.span()))
        .filter(|key| !assigned.clone().any(|field| field.key.value() == key.value()))
        .map(|key| quote! { #key => ::core::result::Result::Ok(()), });

    let fallback = if ignore_unknown {
        quote! {
            _ => {
                #macro_exports_::ignored_field(<Self as #sc_class_path::Class>::NAME, field);
                ::core::result::Result::Ok(())
            }
        }
    } else {
        quote! {
            _ => ::core::result::Result::Err(
                #macro_exports_::unknown_field(<Self as #sc_class_path::Class>::NAME, field),
            ),
        }
    };

    // A class without assignable fields never reads the value.
    let value = if fields.iter().any(|field| !field.skip) {
        Ident::new("value", Span::call_site())
    } else {
        Ident::new("_value", Span::call_site())
    };

    quote! {
        impl #sc_class_path::Instance for #ident {
            #[inline]
            fn class_name(&self) -> &str {
                <Self as #sc_class_path::Class>::NAME
            }

            fn fields_mut(&mut self) -> #sc_class_path::instance::FieldIterMut<'_> {
                #macro_exports_::boxed_fields([#(#walked),*])
            }

            fn assign(
                &mut self,
                field: &str,
                #value: #sc_class_path::Value,
            ) -> ::core::result::Result<(), #sc_class_path::ClassError> {
                match field {
                    #(#arms)*
                    #(#skipped)*
                    #fallback
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// auto_register

#[cfg(feature = "auto_register")]
fn impl_auto_register(
    sc_class_path: &syn::Path,
    ident: &Ident,
    auto_register: Option<Span>,
) -> TokenStream {
    let Some(span) = auto_register else {
        return TokenStream::new();
    };
    let auto_register_ = path::auto_register_(sc_class_path);
    quote::quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ident as #auto_register_::__RegisterClass>::__register
            )
        }
    }
}

#[cfg(not(feature = "auto_register"))]
fn impl_auto_register(_: &syn::Path, _: &Ident, _: Option<Span>) -> TokenStream {
    TokenStream::new()
}
