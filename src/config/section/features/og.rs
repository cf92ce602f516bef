//! Open Graph image generation fallbacks.
//!
//! `authorOrBrand` and `fallbackTitle` default to the site title and
//! description, and may embed `${site.*}` placeholders. Both are resolved
//! to plain strings once, when the config is built.

use crate::config::section::SiteConfig;
use crate::config::util::{escape_template, interpolate};
use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Background drawn behind generated OG images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackBgType {
    #[default]
    Plum,
    Dot,
    Rose,
    Particle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "")]
pub struct OgImageOptions {
    /// Name printed on every generated image. Empty means the site title.
    #[serde(default)]
    pub author_or_brand: String,

    /// Title for pages without one. Empty means the site description.
    #[serde(default)]
    pub fallback_title: String,

    #[serde(default)]
    pub fallback_bg_type: FallbackBgType,
}

impl OgImageOptions {
    /// Options derived entirely from `site`.
    pub fn from_site(site: &SiteConfig, fallback_bg_type: FallbackBgType) -> Self {
        Self {
            author_or_brand: site.title.clone(),
            fallback_title: site.description.clone(),
            fallback_bg_type,
        }
    }

    /// Fill empty fields from `site` and substitute `${site.*}` placeholders.
    pub fn resolve(&mut self, site: &SiteConfig, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        let fields = [
            (
                &mut self.author_or_brand,
                &site.title,
                Self::FIELDS.author_or_brand,
            ),
            (
                &mut self.fallback_title,
                &site.description,
                Self::FIELDS.fallback_title,
            ),
        ];

        for (value, fallback, field) in fields {
            if value.is_empty() {
                value.clone_from(fallback);
                continue;
            }
            match interpolate(value, |name| site.lookup(name)) {
                Ok(resolved) => *value = resolved,
                Err(name) => diag.error_with_hint(
                    at.join(field),
                    format!("unknown placeholder '${{{name}}}'"),
                    "available: ${site.title}, ${site.description}, ${site.author}, ${site.website}, ${site.base}, ${site.lang}",
                ),
            }
        }
    }

    /// Resolved options written back as templates that resolve to themselves.
    pub fn escaped(&self) -> Self {
        Self {
            author_or_brand: escape_template(&self.author_or_brand),
            fallback_title: escape_template(&self.fallback_title),
            fallback_bg_type: self.fallback_bg_type,
        }
    }

    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.author_or_brand.trim().is_empty() {
            diag.error(at.join(Self::FIELDS.author_or_brand), "must not be empty");
        }
        if self.fallback_title.trim().is_empty() {
            diag.error(at.join(Self::FIELDS.fallback_title), "must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site;

    fn at() -> FieldPath {
        FieldPath::new("features.ogImage").at(1)
    }

    #[test]
    fn test_empty_fields_take_site_values() {
        let mut site = test_site();
        site.title = "良颂".into();
        let mut options: OgImageOptions = toml::from_str("fallbackBgType = \"dot\"").unwrap();
        let mut diag = ConfigDiagnostics::new();
        options.resolve(&site, &at(), &mut diag);

        assert!(!diag.has_errors());
        assert_eq!(options.author_or_brand, "良颂");
        assert_eq!(options.fallback_title, site.description);
        assert_eq!(options.fallback_bg_type, FallbackBgType::Dot);
    }

    #[test]
    fn test_placeholders_are_interpolated() {
        let site = test_site();
        let mut options = OgImageOptions {
            author_or_brand: "${site.author} · ${site.title}".into(),
            fallback_title: "Welcome".into(),
            fallback_bg_type: FallbackBgType::Plum,
        };
        let mut diag = ConfigDiagnostics::new();
        options.resolve(&site, &at(), &mut diag);

        assert_eq!(
            options.author_or_brand,
            format!("{} · {}", site.author, site.title)
        );
        assert_eq!(options.fallback_title, "Welcome");
    }

    #[test]
    fn test_unknown_placeholder_reported() {
        let site = test_site();
        let mut options = OgImageOptions {
            author_or_brand: "${site.brand}".into(),
            ..OgImageOptions::from_site(&site, FallbackBgType::Rose)
        };
        let mut diag = ConfigDiagnostics::new();
        options.resolve(&site, &at(), &mut diag);
        assert!(diag.has_error_at("features.ogImage[1].authorOrBrand"));
    }

    #[test]
    fn test_escaped_resolves_to_itself() {
        let mut site = test_site();
        site.title = "Notes on ${HOME}".into();
        let resolved = OgImageOptions::from_site(&site, FallbackBgType::Plum);

        let mut reparsed = resolved.escaped();
        let mut diag = ConfigDiagnostics::new();
        reparsed.resolve(&site, &at(), &mut diag);
        assert!(!diag.has_errors(), "{diag}");
        assert_eq!(reparsed, resolved);
    }

    #[test]
    fn test_unknown_background_rejected() {
        assert!(toml::from_str::<OgImageOptions>("fallbackBgType = \"stripes\"").is_err());
    }
}
