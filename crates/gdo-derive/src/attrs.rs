//! Field-level `#[gdo(...)]` attribute parsing shared by both derives.

use syn::{Data, DeriveInput, Error, Fields, LitStr, Result};

/// Parsed field attributes.
#[derive(Default)]
pub(crate) struct FieldAttr {
    pub column: Option<String>,
    pub skip: bool,
}

impl FieldAttr {
    pub(crate) fn parse(field: &syn::Field) -> Result<Self> {
        let mut out = FieldAttr::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("gdo") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("column") {
                    let lit: LitStr = meta.value()?.parse()?;
                    let column = lit.value();
                    if column.trim().is_empty() {
                        return Err(Error::new(lit.span(), "column name must not be empty"));
                    }
                    out.column = Some(column);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown gdo attribute (expected `column = \"...\"` or `skip`)"))
                }
            })?;
        }
        Ok(out)
    }
}

/// The named fields of a struct, or an error naming the derive.
pub(crate) fn named_fields<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> Result<&'a syn::punctuated::Punctuated<syn::Field, syn::Token![,]>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(Error::new_spanned(
                input,
                format!("{derive} can only be derived for structs with named fields"),
            )),
        },
        _ => Err(Error::new_spanned(
            input,
            format!("{derive} can only be derived for structs"),
        )),
    }
}
