//! `[site]` section configuration.
//!
//! Identity of the website: where it lives, what it is called, and which
//! remote image hosts it may load from.
//!
//! # Example
//!
//! ```toml
//! [site]
//! website = "https://astro-antfustyle-theme.vercel.app/"
//! base = "/"
//! title = "良颂"
//! description = "良颂的个人网站"
//! author = "良颂"
//! lang = "en"
//! ogLocale = "en_US"
//! imageDomains = ["cdn.bsky.app", "images.unsplash.com"]
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::util::{check_hostname, check_site_path, extract_url_path};
use macros::Config;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static LANG_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(?:-[A-Za-z0-9]{2,8})*$").expect("valid language tag regex")
});

static OG_LOCALE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}_[A-Z]{2}$").expect("valid locale regex"));

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "site")]
pub struct SiteConfig {
    /// Deployed site URL (e.g., "https://example.com/").
    pub website: String,

    /// Base path the site is served under.
    #[serde(default = "default_base")]
    pub base: String,

    pub title: String,

    pub description: String,

    pub author: String,

    /// Language code (e.g., "en", "zh-Hans").
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Open Graph locale (e.g., "en_US").
    #[serde(default = "default_og_locale")]
    pub og_locale: String,

    /// Hostnames remote images may be optimized from.
    #[serde(default)]
    pub image_domains: Vec<String>,
}

fn default_base() -> String {
    "/".into()
}

fn default_lang() -> String {
    "en".into()
}

fn default_og_locale() -> String {
    "en_US".into()
}

impl SiteConfig {
    /// Resolve a `site.*` placeholder name to its value.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let value = match name {
            "site.website" => &self.website,
            "site.base" => &self.base,
            "site.title" => &self.title,
            "site.description" => &self.description,
            "site.author" => &self.author,
            "site.lang" => &self.lang,
            _ => return None,
        };
        Some(value)
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `website` is an http(s) URL with a host
    /// - `base` is a site path, ideally matching the path of `website`
    /// - `title` is not empty
    /// - `lang` / `ogLocale` are well-formed
    /// - `imageDomains` are unique bare hostnames
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.validate_website(diag);

        if let Err(reason) = check_site_path(&self.base) {
            diag.error_with_hint(Self::FIELDS.base, reason, "use \"/\" or a path like \"/blog/\"");
        } else if let Some(url_path) = extract_url_path(&self.website)
            && url_path != self.base.trim_matches('/')
        {
            diag.warn(
                Self::FIELDS.base,
                format!(
                    "does not match the path of {} (\"/{url_path}\")",
                    Self::FIELDS.website
                ),
            );
        }

        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "must not be empty");
        }
        if self.description.trim().is_empty() {
            diag.warn(
                Self::FIELDS.description,
                "empty description leaves pages without a meta description",
            );
        }

        if !LANG_TAG.is_match(&self.lang) {
            diag.error_with_hint(
                Self::FIELDS.lang,
                format!("'{}' is not a language tag", self.lang),
                "use a BCP 47 tag like \"en\" or \"zh-Hans\"",
            );
        }
        if !OG_LOCALE.is_match(&self.og_locale) {
            diag.error_with_hint(
                Self::FIELDS.og_locale,
                format!("'{}' is not an Open Graph locale", self.og_locale),
                "use language_TERRITORY like \"en_US\" or \"zh_CN\"",
            );
        }

        let mut seen = FxHashSet::default();
        for (i, domain) in self.image_domains.iter().enumerate() {
            let field = Self::FIELDS.image_domains.at(i);
            if let Err(reason) = check_hostname(domain) {
                diag.error(field, format!("'{domain}': {reason}"));
            } else if !seen.insert(domain.to_ascii_lowercase()) {
                diag.error(field, format!("'{domain}' is listed more than once"));
            }
        }
    }

    fn validate_website(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.website) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.website,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com/",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.website,
                        "URL must have a valid host",
                        "use format like https://example.com/",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.website,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com/",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site;

    fn diagnose(site: &SiteConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults_applied() {
        let site: SiteConfig = toml::from_str(
            "website = \"https://example.com/\"\ntitle = \"T\"\ndescription = \"D\"\nauthor = \"A\"",
        )
        .unwrap();
        assert_eq!(site.base, "/");
        assert_eq!(site.lang, "en");
        assert_eq!(site.og_locale, "en_US");
        assert!(site.image_domains.is_empty());
    }

    #[test]
    fn test_missing_required_field() {
        let err = toml::from_str::<SiteConfig>("website = \"https://example.com/\"").unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_valid_site() {
        let diag = diagnose(&test_site());
        assert!(!diag.has_errors(), "{diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_invalid_website() {
        let mut site = test_site();
        site.website = "example.com".into();
        assert!(diagnose(&site).has_error_at("site.website"));

        site.website = "ftp://example.com/".into();
        assert!(diagnose(&site).has_error_at("site.website"));
    }

    #[test]
    fn test_base_must_be_site_path() {
        let mut site = test_site();
        site.base = "blog".into();
        assert!(diagnose(&site).has_error_at("site.base"));
    }

    #[test]
    fn test_base_mismatch_warns() {
        let mut site = test_site();
        site.website = "https://example.github.io/blog/".into();
        let diag = diagnose(&site);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings()[0].field.as_str(), "site.base");

        site.base = "/blog/".into();
        assert!(diagnose(&site).warnings().is_empty());
    }

    #[test]
    fn test_lang_and_locale() {
        let mut site = test_site();
        site.lang = "zh-Hans".into();
        site.og_locale = "zh_CN".into();
        assert!(!diagnose(&site).has_errors());

        site.lang = "english!".into();
        site.og_locale = "en-US".into();
        let diag = diagnose(&site);
        assert!(diag.has_error_at("site.lang"));
        assert!(diag.has_error_at("site.ogLocale"));
    }

    #[test]
    fn test_image_domains() {
        let mut site = test_site();
        site.image_domains = vec![
            "cdn.bsky.app".into(),
            "https://images.unsplash.com".into(),
            "CDN.bsky.app".into(),
        ];
        let diag = diagnose(&site);
        assert_eq!(diag.errors().len(), 2);
        assert!(diag.has_error_at("site.imageDomains[1]"));
        assert!(diag.has_error_at("site.imageDomains[2]"));
    }

    #[test]
    fn test_lookup() {
        let site = test_site();
        assert_eq!(site.lookup("site.title"), Some("Test"));
        assert_eq!(site.lookup("site.unknown"), None);
    }
}
