//! `[ui.githubView]` configuration for GitHub-sourced listings.
//!
//! # Example
//!
//! ```toml
//! [ui.githubView]
//! monorepos = ["withastro/astro", "withastro/starlight"]
//! mainLogoOverrides = [["starlight", "https://starlight.astro.build/favicon.svg"]]
//! subLogoMatches = [["theme", "i-unjs-theme-colors"], ["tweet", "i-logos-twitter"]]
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::FieldPath;
use crate::config::util::{is_icon_class, is_repo_slug};
use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "ui.githubView")]
pub struct GithubViewConfig {
    /// Repositories whose release tags carry a package prefix.
    pub monorepos: Vec<String>,
    /// `[pattern, logo URL]` pairs replacing a repository's main logo.
    pub main_logo_overrides: Vec<(String, String)>,
    /// `[pattern, icon class or URL]` pairs picking a secondary logo.
    pub sub_logo_matches: Vec<(String, String)>,
}

impl GithubViewConfig {
    /// First `main_logo_overrides` entry whose pattern matches `repo`.
    pub fn main_logo_for(&self, repo: &str) -> Option<&str> {
        first_match(&self.main_logo_overrides, repo)
    }

    /// First `sub_logo_matches` entry whose pattern matches `repo`.
    pub fn sub_logo_for(&self, repo: &str) -> Option<&str> {
        first_match(&self.sub_logo_matches, repo)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, repo) in self.monorepos.iter().enumerate() {
            if !is_repo_slug(repo) {
                diag.error_with_hint(
                    Self::FIELDS.monorepos.at(i),
                    format!("'{repo}' is not a repository"),
                    "use owner/name, e.g. \"withastro/astro\"",
                );
            }
        }

        for (i, (pattern, logo)) in self.main_logo_overrides.iter().enumerate() {
            let at = Self::FIELDS.main_logo_overrides.at(i);
            check_pattern(pattern, &at, diag);
            if url::Url::parse(logo).is_err() {
                diag.error(at.at(1), format!("'{logo}' is not an absolute URL"));
            }
        }

        for (i, (pattern, logo)) in self.sub_logo_matches.iter().enumerate() {
            let at = Self::FIELDS.sub_logo_matches.at(i);
            check_pattern(pattern, &at, diag);
            if !is_icon_class(logo) && url::Url::parse(logo).is_err() {
                diag.error(
                    at.at(1),
                    format!("'{logo}' is neither an icon class nor an absolute URL"),
                );
            }
        }
    }
}

fn first_match<'a>(pairs: &'a [(String, String)], repo: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(pattern, _)| Regex::new(pattern).is_ok_and(|re| re.is_match(repo)))
        .map(|(_, logo)| logo.as_str())
}

fn check_pattern(pattern: &str, at: &FieldPath, diag: &mut ConfigDiagnostics) {
    if let Err(e) = Regex::new(pattern) {
        diag.error(at.at(0), format!("invalid pattern: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GithubViewConfig {
        toml::from_str(
            r#"
monorepos = ["withastro/astro", "lin-stephanie/astro-loaders"]
mainLogoOverrides = [["starlight", "https://starlight.astro.build/favicon.svg"]]
subLogoMatches = [
    ["theme", "i-unjs-theme-colors"],
    ["github", "https://github.githubassets.com/favicons/favicon.svg"],
]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_view() {
        let mut diag = ConfigDiagnostics::new();
        sample().validate(&mut diag);
        assert!(!diag.has_errors(), "{diag}");
    }

    #[test]
    fn test_logo_lookup() {
        let view = sample();
        assert_eq!(
            view.main_logo_for("withastro/starlight"),
            Some("https://starlight.astro.build/favicon.svg")
        );
        assert_eq!(view.main_logo_for("withastro/astro"), None);
        assert_eq!(
            view.sub_logo_for("lin-stephanie/astro-antfustyle-theme"),
            Some("i-unjs-theme-colors")
        );
    }

    #[test]
    fn test_invalid_entries() {
        let view = GithubViewConfig {
            monorepos: vec!["astro".into()],
            main_logo_overrides: vec![("(unclosed".into(), "not a url".into())],
            sub_logo_matches: vec![("ok".into(), "logo".into())],
        };
        let mut diag = ConfigDiagnostics::new();
        view.validate(&mut diag);
        assert!(diag.has_error_at("ui.githubView.monorepos[0]"));
        assert!(diag.has_error_at("ui.githubView.mainLogoOverrides[0][0]"));
        assert!(diag.has_error_at("ui.githubView.mainLogoOverrides[0][1]"));
        assert!(diag.has_error_at("ui.githubView.subLogoMatches[0][1]"));
    }
}
