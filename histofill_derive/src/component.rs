use quote::quote;
use syn::{spanned::Spanned, Field};

use crate::{symbol::*, FieldAttributes};

#[derive(Debug)]
pub struct Component {
    ident: syn::Ident,
    generics: syn::Generics,
    input_type: syn::Type,
    fields: Vec<FieldAttributes>,
}

impl Component {
    pub fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let ident = &ast.ident;
        let data_struct = match &ast.data {
            syn::Data::Struct(data_struct) => data_struct,
            _other => {
                return Err(syn::Error::new(
                    ast.span(),
                    "Only structs are supported for deriving Fill",
                ));
            }
        };

        let fields = match &data_struct.fields {
            syn::Fields::Named(fields_named) => fields_named,
            _ => {
                return Err(syn::Error::new(
                    ast.span(),
                    "Only named fields are supported for deriving Fill",
                ));
            }
        };

        let input_type = input_type(ast)?;

        let fields: syn::Result<Vec<FieldAttributes>> = fields
            .named
            .iter()
            .map(|field| {
                let Field {
                    ident: Some(ident), ..
                } = field
                else {
                    return Err(syn::Error::new(
                        ast.span(),
                        "Only named fields are supported for deriving Fill",
                    ));
                };
                FieldAttributes::from_ast(ident.clone(), field)
            })
            .collect();

        Ok(Self {
            ident: ident.clone(),
            generics: ast.generics.clone(),
            input_type,
            fields: fields?,
        })
    }

    pub fn as_token_stream(&self) -> proc_macro2::TokenStream {
        let put_implementation_token_stream: proc_macro2::TokenStream = self
            .fields
            .iter()
            .map(|field| field.as_put_token_stream(&self.input_type))
            .collect();

        let ident = &self.ident;
        let input_type = &self.input_type;
        let (impl_generics, type_generics, where_clause) = self.generics.split_for_impl();
        quote! {
            #[automatically_derived]
            impl #impl_generics histofill::fill::Fill<#input_type> for #ident #type_generics #where_clause {
                #[allow(unused_variables)]
                fn put_one(&mut self, input: &#input_type) {
                    #put_implementation_token_stream
                }
            }
        }
    }
}

/// The type named by the container's `#[fill(input = Type)]`
fn input_type(ast: &syn::DeriveInput) -> syn::Result<syn::Type> {
    let mut input_type = None;
    for attr in &ast.attrs {
        if attr.path() != FILL {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path == INPUT {
                if input_type.is_some() {
                    return Err(meta.error("duplicate fill input type"));
                }
                input_type = Some(meta.value()?.parse::<syn::Type>()?);
                Ok(())
            } else {
                Err(meta.error("unknown fill container attribute. Expected input = <type>"))
            }
        })?;
    }
    input_type.ok_or_else(|| {
        syn::Error::new(
            ast.ident.span(),
            "Deriving Fill requires #[fill(input = <type>)] on the struct",
        )
    })
}
