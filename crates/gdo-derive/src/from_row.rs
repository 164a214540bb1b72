//! FromRow derive macro implementation

use crate::attrs::{FieldAttr, named_fields};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Result};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut field_extracts = Vec::new();
    for field in named_fields(&input, "FromRow")? {
        let attr = FieldAttr::parse(field)?;
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;

        if attr.skip {
            field_extracts.push(quote! {
                #ident: ::std::default::Default::default()
            });
            continue;
        }

        let column = attr.column.unwrap_or_else(|| ident.unraw().to_string());
        field_extracts.push(quote! {
            #ident: row.try_get_column(#column)?
        });
    }

    Ok(quote! {
        impl #impl_generics gdo::FromRow for #name #ty_generics #where_clause {
            fn from_row(row: &gdo::Row) -> gdo::GdoResult<Self> {
                use gdo::RowExt;
                Ok(Self {
                    #(#field_extracts),*
                })
            }
        }
    })
}
