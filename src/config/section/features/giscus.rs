//! Giscus comment widget.
//!
//! Keys are the widget's own `data-*` script attributes so the record can
//! be copied verbatim from <https://giscus.app>.

use crate::config::util::is_repo_slug;
use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};

/// How a page is matched to its discussion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiscusMapping {
    Pathname,
    Url,
    Title,
    #[serde(rename = "og:title")]
    OgTitle,
    /// Discussion title containing `data-term`.
    Specific,
    /// Discussion number given by `data-term`.
    Number,
}

impl GiscusMapping {
    pub const fn needs_term(self) -> bool {
        matches!(self, Self::Specific | Self::Number)
    }
}

/// `"0"` / `"1"` switch as giscus spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GiscusFlag {
    #[serde(rename = "0")]
    Off,
    #[serde(rename = "1")]
    On,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiscusInputPosition {
    Top,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiscusLoading {
    Lazy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "")]
pub struct GiscusOptions {
    #[serde(rename = "data-repo")]
    pub repo: String,
    #[serde(rename = "data-repo-id")]
    pub repo_id: String,
    #[serde(rename = "data-category")]
    pub category: String,
    #[serde(rename = "data-category-id")]
    pub category_id: String,
    #[serde(rename = "data-mapping")]
    pub mapping: GiscusMapping,
    #[serde(rename = "data-term", default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(rename = "data-strict", default = "flag_off")]
    pub strict: GiscusFlag,
    #[serde(rename = "data-reactions-enabled", default = "flag_on")]
    pub reactions_enabled: GiscusFlag,
    #[serde(rename = "data-emit-metadata", default = "flag_off")]
    pub emit_metadata: GiscusFlag,
    #[serde(rename = "data-input-position", default)]
    pub input_position: GiscusInputPosition,
    #[serde(rename = "data-theme", default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(rename = "data-lang", default = "default_lang")]
    pub lang: String,
    #[serde(rename = "data-loading", default, skip_serializing_if = "Option::is_none")]
    pub loading: Option<GiscusLoading>,
}

fn flag_off() -> GiscusFlag {
    GiscusFlag::Off
}

fn flag_on() -> GiscusFlag {
    GiscusFlag::On
}

fn default_lang() -> String {
    "en".into()
}

impl GiscusOptions {
    /// `(attribute, value)` pairs for the widget's `<script>` tag, in
    /// declaration order.
    pub fn data_attributes(&self) -> Vec<(String, String)> {
        let Ok(serde_json::Value::Object(map)) = serde_json::to_value(self) else {
            return Vec::new();
        };
        map.into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect()
    }

    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if !is_repo_slug(&self.repo) {
            diag.error_with_hint(
                at.join(Self::FIELDS.repo),
                format!("'{}' is not a repository", self.repo),
                "use owner/name, e.g. \"lin-stephanie/astro-antfustyle-theme\"",
            );
        }

        let required = [
            (&self.repo_id, Self::FIELDS.repo_id),
            (&self.category, Self::FIELDS.category),
            (&self.category_id, Self::FIELDS.category_id),
            (&self.lang, Self::FIELDS.lang),
        ];
        for (value, field) in required {
            if value.trim().is_empty() {
                diag.error_with_hint(
                    at.join(field),
                    "must not be empty",
                    "copy the value generated on https://giscus.app",
                );
            }
        }

        let has_term = self.term.as_deref().is_some_and(|t| !t.trim().is_empty());
        if self.mapping.needs_term() && !has_term {
            diag.error(
                at.join(Self::FIELDS.term),
                "required when data-mapping is 'specific' or 'number'",
            );
        }
        if self.mapping == GiscusMapping::Number
            && let Some(term) = &self.term
            && term.parse::<u64>().is_err()
        {
            diag.error(
                at.join(Self::FIELDS.term),
                format!("'{term}' is not a discussion number"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
data-repo = "lin-stephanie/astro-antfustyle-theme"
data-repo-id = "R_kgDOLylKbA"
data-category = "Giscus"
data-category-id = "DIC_kwDOLylKbM4Cpugn"
data-mapping = "title"
data-strict = "0"
data-reactions-enabled = "1"
data-emit-metadata = "0"
data-input-position = "bottom"
data-lang = "en"
"#;

    fn diagnose(options: &GiscusOptions) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        options.validate(&FieldPath::new("features.giscus").at(1), &mut diag);
        diag
    }

    #[test]
    fn test_parse_sample() {
        let options: GiscusOptions = toml::from_str(SAMPLE).unwrap();
        assert_eq!(options.mapping, GiscusMapping::Title);
        assert_eq!(options.reactions_enabled, GiscusFlag::On);
        assert!(!diagnose(&options).has_errors());
    }

    #[test]
    fn test_data_attributes() {
        let options: GiscusOptions = toml::from_str(SAMPLE).unwrap();
        let attrs = options.data_attributes();
        assert_eq!(attrs.len(), 10);
        assert_eq!(
            attrs[0],
            ("data-repo".to_string(), "lin-stephanie/astro-antfustyle-theme".to_string())
        );
        assert!(attrs.contains(&("data-strict".to_string(), "0".to_string())));
    }

    #[test]
    fn test_specific_mapping_needs_term() {
        let mut options: GiscusOptions = toml::from_str(SAMPLE).unwrap();
        options.mapping = GiscusMapping::Number;
        assert!(diagnose(&options).has_error_at("features.giscus[1].data-term"));

        options.term = Some("abc".into());
        assert!(diagnose(&options).has_error_at("features.giscus[1].data-term"));

        options.term = Some("42".into());
        assert!(!diagnose(&options).has_errors());
    }

    #[test]
    fn test_invalid_flag_rejected() {
        let content = SAMPLE.replace("data-strict = \"0\"", "data-strict = \"yes\"");
        assert!(toml::from_str::<GiscusOptions>(&content).is_err());
    }

    #[test]
    fn test_empty_ids_reported() {
        let mut options: GiscusOptions = toml::from_str(SAMPLE).unwrap();
        options.repo = "astro".into();
        options.repo_id.clear();
        let diag = diagnose(&options);
        assert!(diag.has_error_at("features.giscus[1].data-repo"));
        assert!(diag.has_error_at("features.giscus[1].data-repo-id"));
    }
}
