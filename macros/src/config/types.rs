//! Naming helpers for Config derive macro.

/// Convert snake_case to lowerCamelCase
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut upper_next = false;
    for c in s.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Apply a serde `rename_all` rule to a snake_case field name.
///
/// Only the rules used by the config model are supported; others leave
/// the name untouched.
pub fn apply_rename_rule(field: &str, rule: &str) -> String {
    match rule {
        "camelCase" => to_camel_case(field),
        "kebab-case" => field.replace('_', "-"),
        "lowercase" => field.to_ascii_lowercase(),
        _ => field.to_string(),
    }
}
