use crate::utils::{attributes_include, field_ident, make_generics, parse_struct};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

pub(crate) fn derive_encodable(ast: &DeriveInput) -> Result<TokenStream> {
    let body = parse_struct(ast, "RlpEncodable")?;

    let mut fields = Vec::with_capacity(body.fields.len());
    for (i, field) in body.fields.iter().enumerate() {
        if !attributes_include(&field.attrs, "skip")? {
            fields.push(field_ident(i, field));
        }
    }

    let name = &ast.ident;
    let generics = make_generics(&ast.generics, quote!(::rlp_encode::Encodable));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let list = if fields.is_empty() {
        quote! { out.list(|_| ::core::result::Result::Ok(())) }
    } else {
        quote! {
            out.list(|out| {
                #( out.append(&self.#fields)?; )*
                ::core::result::Result::Ok(())
            })
        }
    };

    Ok(quote! {
        const _: () = {
            #[automatically_derived]
            impl #impl_generics ::rlp_encode::Encodable for #name #ty_generics #where_clause {
                #[inline]
                fn encode(&self, out: &mut ::rlp_encode::Encoder<'_>) -> ::rlp_encode::Result<()> {
                    #list
                }
            }
        };
    })
}
