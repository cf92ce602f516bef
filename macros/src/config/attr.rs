//! Attribute parsing helpers for Config derive macro.

use syn::{Attribute, meta::ParseNestedMeta};

/// Get section name from #[config(section = "xxx")].
pub fn get_section(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "config", "section")
}

/// Get field rename from #[serde(rename = "xxx")].
pub fn get_serde_rename(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "serde", "rename")
}

/// Get struct-level rule from #[serde(rename_all = "xxx")].
pub fn get_serde_rename_all(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "serde", "rename_all")
}

/// Get string value from #[<namespace>(key = "value")].
fn get_string_attr(attrs: &[Attribute], namespace: &str, key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident(namespace) {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) && meta.input.peek(syn::Token![=]) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
                return Ok(());
            }
            skip_meta_value(&meta)
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Consume `= value` or `(...)` after a key we are not interested in,
/// so that serde attributes like `default = "..."` or `bound(...)` parse.
fn skip_meta_value(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| skip_meta_value(&nested))?;
    }
    Ok(())
}
