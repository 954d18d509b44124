use quote::quote;
use quote::ToTokens;
use syn::spanned::Spanned;

use crate::symbol::*;

#[derive(Debug)]
pub struct FieldAttributes {
    pub ident: syn::Ident,
    pub kind: FieldKind,
}

#[derive(Debug)]
pub enum FieldKind {
    /// receives each value as is
    Forward,
    /// not filled
    Skip,
    /// receives `&path(value)`
    Map(syn::Path),
}

impl FieldAttributes {
    // Borrowed strategies in here from serde_derive
    pub fn from_ast(ident: syn::Ident, field: &syn::Field) -> syn::Result<Self> {
        let mut kind = None;
        for attr in &field.attrs {
            if attr.path() != FILL {
                continue;
            }
            if kind.is_some() {
                return Err(syn::Error::new(
                    attr.span(),
                    "Only one fill attribute is allowed per field",
                ));
            }

            attr.parse_nested_meta(|meta| {
                if meta.path == SKIP {
                    // #[fill(skip)]
                    kind = Some(FieldKind::Skip);
                } else if meta.path == MAP {
                    // #[fill(map = path::to::function)]
                    let path: syn::Path = meta.value()?.parse()?;
                    kind = Some(FieldKind::Map(path));
                } else {
                    let path = meta.path.to_token_stream().to_string().replace(' ', "");
                    return Err(meta.error(format_args!(
                        "unknown fill field attribute `{path}`. Expected one of skip, map"
                    )));
                }
                Ok(())
            })?;
        }
        Ok(Self {
            ident,
            kind: kind.unwrap_or(FieldKind::Forward),
        })
    }

    pub fn as_put_token_stream(&self, input_type: &syn::Type) -> proc_macro2::TokenStream {
        let ident = &self.ident;
        match &self.kind {
            FieldKind::Forward => quote! {
                histofill::fill::Fill::<#input_type>::put_one(&mut self.#ident, input);
            },
            FieldKind::Skip => quote! {},
            FieldKind::Map(path) => quote! {
                histofill::fill::Fill::put_one(&mut self.#ident, &#path(input));
            },
        }
    }
}
