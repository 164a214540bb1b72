//! Record derive macro implementation

use crate::attrs::{FieldAttr, named_fields};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Result};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut field_entries = Vec::new();
    let mut map_entries = Vec::new();

    for field in named_fields(&input, "Record")? {
        let attr = FieldAttr::parse(field)?;
        if attr.skip {
            continue;
        }

        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let field_name = ident.unraw().to_string();
        let column = attr.column.unwrap_or_else(|| field_name.clone());

        field_entries.push(quote! {
            gdo::Field::new(#field_name, &self.#ident)
        });
        map_entries.push(quote! {
            .with(#field_name, #column)
        });
    }

    Ok(quote! {
        impl #impl_generics gdo::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<gdo::Field<'_>> {
                ::std::vec![#(#field_entries),*]
            }

            fn field_map() -> gdo::FieldMap {
                gdo::FieldMap::new() #(#map_entries)*
            }
        }
    })
}
