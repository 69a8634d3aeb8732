use syn::{Attribute, LitStr};

/// Key/value pairs and bare flags collected from `#[name(...)]` attributes.
#[derive(Debug, Default)]
pub struct AttrArgs {
    pub values: Vec<(String, String)>,
    pub flags: Vec<String>,
}

impl AttrArgs {
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn all(&self, key: &str) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.iter().any(|f| f == key)
    }
}

/// Parses every `#[<name>(key = "lit", flag)]` attribute in `attrs`.
///
/// `keys` are the accepted `key = "..."` entries and `flags` the accepted bare
/// identifiers; anything else is reported as a compile error.
pub fn parse(
    attrs: &[Attribute],
    name: &str,
    keys: &[&str],
    flags: &[&str],
) -> syn::Result<AttrArgs> {
    let mut out = AttrArgs::default();

    for attr in attrs {
        if !attr.path().is_ident(name) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let Some(ident) = meta.path.get_ident().map(ToString::to_string) else {
                return Err(meta.error("expected a plain identifier"));
            };

            if keys.contains(&ident.as_str()) {
                let lit: LitStr = meta.value()?.parse()?;
                out.values.push((ident, lit.value()));
                return Ok(());
            }
            if flags.contains(&ident.as_str()) {
                out.flags.push(ident);
                return Ok(());
            }

            Err(meta.error(format!(
                "unsupported {name} attribute `{ident}`; expected one of: {}",
                keys.iter().chain(flags).copied().collect::<Vec<_>>().join("/")
            )))
        })?;
    }

    Ok(out)
}
