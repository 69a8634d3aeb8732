use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input, spanned::Spanned};

use crate::attrs;

/// Generates a multi-line `key = value` `Display` impl, one tab-indented row per field.
///
/// `#[kv(name = "..")]` renames a row, `#[kv(fmt = "display|debug|len|path")]`
/// picks how the value is rendered and `#[kv(skip)]` leaves the field out.
pub fn derive_kv_display_inner(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let struct_ident = input.ident.clone();

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(input.span(), "KvDisplay can only be derived for structs")
            .to_compile_error()
            .into();
    };

    let Fields::Named(fields) = &data_struct.fields else {
        return syn::Error::new(input.span(), "KvDisplay requires named fields")
            .to_compile_error()
            .into();
    };

    let mut rows = Vec::new();

    for field in &fields.named {
        let Some(field_ident) = &field.ident else {
            continue;
        };
        let args = match attrs::parse(&field.attrs, "kv", &["name", "fmt"], &["skip"]) {
            Ok(args) => args,
            Err(err) => return err.to_compile_error().into(),
        };
        if args.has_flag("skip") {
            continue;
        }

        let key = args
            .value("name")
            .map(str::to_owned)
            .unwrap_or_else(|| field_ident.to_string());
        let value = match args.value("fmt").unwrap_or("display") {
            "display" => quote! { format!("{}", self.#field_ident) },
            "debug" => quote! { format!("{:?}", self.#field_ident) },
            "len" => quote! { self.#field_ident.len().to_string() },
            "path" => quote! { self.#field_ident.display().to_string() },
            other => {
                return syn::Error::new(field.span(), format!("unsupported kv fmt mode: {other}"))
                    .to_compile_error()
                    .into();
            }
        };
        rows.push((key, value));
    }

    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let writes = rows.iter().map(|(key, value)| {
        let key_lit = LitStr::new(&format!("{key:<width$}"), Span::call_site());
        quote! { write!(f, "\n\t{} = {}", #key_lit, #value)?; }
    });

    let expanded = quote! {
        impl std::fmt::Display for #struct_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                #(#writes)*
                Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}
