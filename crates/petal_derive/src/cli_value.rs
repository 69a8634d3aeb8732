use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input, spanned::Spanned};

use crate::{attrs, utils};

/// Generates `parse`, `VARIANTS` and `Display` for a unit-only enum.
pub fn derive_cli_value_inner(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let enum_ident = input.ident.clone();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(input.span(), "CliValue can only be derived for enums")
            .to_compile_error()
            .into();
    };

    let enum_args = match attrs::parse(&input.attrs, "cli_value", &["option"], &[]) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };
    let option_name = enum_args
        .value("option")
        .map(str::to_owned)
        .unwrap_or_else(|| utils::to_kebab_case(&enum_ident.to_string()));

    let mut parse_arms = Vec::new();
    let mut display_arms = Vec::new();
    let mut canonical_names = Vec::new();

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(variant.span(), "CliValue only supports unit variants")
                .to_compile_error()
                .into();
        }

        let variant_args = match attrs::parse(&variant.attrs, "cli", &["name", "alias"], &[]) {
            Ok(args) => args,
            Err(err) => return err.to_compile_error().into(),
        };
        let variant_ident = &variant.ident;
        let canonical = variant_args
            .value("name")
            .map(str::to_owned)
            .unwrap_or_else(|| utils::to_kebab_case(&variant_ident.to_string()));

        let accepted: Vec<LitStr> = std::iter::once(canonical.as_str())
            .chain(variant_args.all("alias"))
            .map(|v| LitStr::new(&v.to_ascii_lowercase(), Span::call_site()))
            .collect();
        let canonical_lit = LitStr::new(&canonical, Span::call_site());

        parse_arms.push(quote! { #(#accepted)|* => Ok(Self::#variant_ident), });
        display_arms.push(quote! { Self::#variant_ident => #canonical_lit, });
        canonical_names.push(canonical_lit);
    }

    let expected_lit = LitStr::new(
        &canonical_names
            .iter()
            .map(LitStr::value)
            .collect::<Vec<_>>()
            .join("|"),
        Span::call_site(),
    );
    let option_lit = LitStr::new(&option_name, Span::call_site());

    let expanded = quote! {
        impl #enum_ident {
            /// Canonical command line spellings, in declaration order.
            pub const VARIANTS: &'static [&'static str] = &[#(#canonical_names),*];

            pub fn parse(raw: &str) -> crate::Result<Self> {
                match raw.trim().to_ascii_lowercase().as_str() {
                    #(#parse_arms)*
                    _ => Err(crate::Error::invalid_input(format!(
                        "Invalid value for --{}: {} (expected {})",
                        #option_lit,
                        raw,
                        #expected_lit
                    ))),
                }
            }
        }

        impl std::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    #(#display_arms)*
                })
            }
        }
    };

    TokenStream::from(expanded)
}
