//! Field information structures and parsing.

use crate::config::attr::get_serde_rename;
use crate::config::types::apply_rename_rule;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    /// Key as it appears in TOML/JSON.
    pub wire_name: String,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    ///
    /// Name precedence: `serde(rename)` > struct `rename_all`.
    pub fn from_field(field: &syn::Field, rename_all: Option<&str>) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;
        let raw = ident.to_string();
        let raw = raw.strip_prefix("r#").unwrap_or(&raw);

        let wire_name = get_serde_rename(attrs).unwrap_or_else(|| match rename_all {
            Some(rule) => apply_rename_rule(raw, rule),
            None => raw.to_string(),
        });

        Some(Self {
            name: ident.clone(),
            wire_name,
        })
    }
}
