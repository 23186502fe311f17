use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Attribute, DataStruct, DeriveInput, Error, Field, GenericParam, Generics, Meta, Result,
    WherePredicate, parse_quote,
};

pub(crate) fn parse_struct<'a>(ast: &'a DeriveInput, derive_attr: &str) -> Result<&'a DataStruct> {
    if let syn::Data::Struct(s) = &ast.data {
        Ok(s)
    } else {
        Err(Error::new_spanned(ast, format!("#[derive({derive_attr})] is only defined for structs")))
    }
}

/// Returns `true` if any `#[rlp(...)]` attribute names `attr_name`.
///
/// Unknown names are rejected so typos don't silently change the encoding.
pub(crate) fn attributes_include(attrs: &[Attribute], attr_name: &str) -> Result<bool> {
    let mut found = false;
    for attr in attrs {
        if !attr.path().is_ident("rlp") {
            continue;
        }
        let Meta::List(meta) = &attr.meta else {
            return Err(Error::new_spanned(attr, "expected `#[rlp(...)]`"));
        };
        meta.parse_nested_meta(|meta| {
            if meta.path.is_ident(attr_name) {
                found = true;
                Ok(())
            } else {
                Err(meta.error("unknown rlp attribute"))
            }
        })?;
    }
    Ok(found)
}

pub(crate) fn field_ident(index: usize, field: &Field) -> TokenStream {
    field.ident.as_ref().map_or_else(
        || {
            let index = syn::Index::from(index);
            quote! { #index }
        },
        |ident| quote! { #ident },
    )
}

/// Adds a `T: trait_name` bound for every type parameter.
pub(crate) fn make_generics(generics: &Generics, trait_name: TokenStream) -> Generics {
    let mut generics = generics.clone();
    let bounds: Vec<WherePredicate> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => {
                let t = &ty.ident;
                Some(parse_quote!(#t: #trait_name))
            }
            _ => None,
        })
        .collect();
    generics.make_where_clause().predicates.extend(bounds);
    generics
}
