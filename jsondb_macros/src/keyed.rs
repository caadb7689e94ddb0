use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields};

pub fn derive_keyed(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let key_field = match extract_key_field(&input) {
        Ok(field) => field,
        Err(err) => return err.to_compile_error().into(),
    };
    let key_ident = &key_field.ident;
    let key_ty = &key_field.ty;

    let expanded = quote! {
        impl #impl_generics jsondb::Keyed for #name #ty_generics #where_clause {
            type Key = #key_ty;

            fn key(&self) -> &Self::Key {
                &self.#key_ident
            }
        }
    };

    TokenStream::from(expanded)
}

fn extract_key_field(input: &DeriveInput) -> syn::Result<&Field> {
    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Keyed derive: only structs with named fields are supported",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Keyed derive: only structs are supported",
            ))
        }
    };

    for field in fields {
        for attr in &field.attrs {
            if !attr.path().is_ident("keyed") {
                continue;
            }
            let mut is_key = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("key") {
                    is_key = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported keyed attribute, expected `key`"))
                }
            })?;
            if is_key {
                return Ok(field);
            }
        }
    }

    // Default: a field named "id"
    fields
        .iter()
        .find(|field| field.ident.as_ref().is_some_and(|ident| ident == "id"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "Keyed derive: no field marked with #[keyed(key)] and no field named `id`",
            )
        })
}
