mod keyed;

use proc_macro::TokenStream;

/// Derive macro that implements `jsondb::Keyed` for a struct with named fields.
///
/// The key is the field marked `#[keyed(key)]`, or the field named `id` when
/// no field is marked.
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Keyed)]
/// struct Account {
///     #[keyed(key)]
///     pub email: String,
///     pub name: String,
/// }
/// ```
#[proc_macro_derive(Keyed, attributes(keyed))]
pub fn derive_keyed(input: TokenStream) -> TokenStream {
    keyed::derive_keyed(input)
}
