use quote::quote;
use syn::{Path, Type, TypePath};

/// Expression turning the `raw: String` value of option `name` into the field type.
pub fn build_cli_parse_expr(ty: &Type, parse_with: Option<&Path>) -> proc_macro2::TokenStream {
    if let Some(parse_with) = parse_with {
        return quote! { #parse_with(&raw)? };
    }

    if is_path_buf(ty) {
        return quote! { std::path::PathBuf::from(raw) };
    }

    quote! {
        raw.parse::<#ty>()
            .map_err(|e| crate::Error::invalid_input(format!(
                "Invalid value for --{name}: {raw} ({e})"
            )))?
    }
}

pub fn is_bool(ty: &Type) -> bool {
    last_segment_is(ty, "bool")
}

pub fn is_path_buf(ty: &Type) -> bool {
    last_segment_is(ty, "PathBuf")
}

fn last_segment_is(ty: &Type, name: &str) -> bool {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return false;
    };
    path.segments.last().is_some_and(|seg| seg.ident == name)
}

pub fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (idx, ch) in s.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if idx != 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            out.push('-');
        } else {
            out.push(ch);
        }
    }
    out
}
