//! Navigation bar slots and tabbed layout.

use crate::config::util::check_site_path;
use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Renderable element that can be placed in a navigation bar slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutToken {
    InternalNavs,
    /// Vertical separator.
    Hr,
    SocialLinks,
    SearchButton,
    ThemeButton,
    RssLink,
}

impl LayoutToken {
    /// Separators may appear any number of times; every other element once.
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Hr)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InternalNavs => "internalNavs",
            Self::Hr => "hr",
            Self::SocialLinks => "socialLinks",
            Self::SearchButton => "searchButton",
            Self::ThemeButton => "themeButton",
            Self::RssLink => "rssLink",
        }
    }
}

/// Layout of the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "ui.navBarLayout")]
pub struct NavBarLayout {
    pub left: Vec<LayoutToken>,
    pub right: Vec<LayoutToken>,
    /// Collapse both slots into one menu on small screens.
    pub merge_on_mobile: bool,
}

impl Default for NavBarLayout {
    fn default() -> Self {
        use LayoutToken::*;
        Self {
            left: Vec::new(),
            right: vec![
                InternalNavs,
                Hr,
                SocialLinks,
                Hr,
                SearchButton,
                ThemeButton,
                RssLink,
            ],
            merge_on_mobile: true,
        }
    }
}

impl NavBarLayout {
    /// All tokens, left slot first.
    pub fn tokens(&self) -> impl Iterator<Item = LayoutToken> + '_ {
        self.left.iter().chain(&self.right).copied()
    }

    pub fn contains(&self, token: LayoutToken) -> bool {
        self.tokens().any(|t| t == token)
    }

    /// Non-repeatable tokens placed more than once across both slots,
    /// reported at each repeated occurrence.
    pub fn duplicates(&self) -> Vec<(FieldPath, LayoutToken)> {
        let slots = [
            (Self::FIELDS.left, &self.left),
            (Self::FIELDS.right, &self.right),
        ];

        let mut seen = FxHashSet::default();
        let mut duplicates = Vec::new();
        for (slot, tokens) in slots {
            for (i, &token) in tokens.iter().enumerate() {
                if !token.is_repeatable() && !seen.insert(token) {
                    duplicates.push((slot.at(i), token));
                }
            }
        }
        duplicates
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (at, token) in self.duplicates() {
            diag.error_with_hint(
                at,
                format!("'{}' is already placed in the navigation bar", token.as_str()),
                "each element may appear once across left and right; only 'hr' can repeat",
            );
        }
    }
}

/// A tab in the tabbed page layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "")]
pub struct TabbedLayoutTab {
    pub title: String,
    pub path: String,
}

impl TabbedLayoutTab {
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(at.join(Self::FIELDS.title), "must not be empty");
        }
        if let Err(reason) = check_site_path(&self.path) {
            diag.error(
                at.join(Self::FIELDS.path),
                format!("'{}' {reason}", self.path),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LayoutToken::*;

    #[test]
    fn test_default_layout_is_valid() {
        let layout = NavBarLayout::default();
        assert!(layout.duplicates().is_empty());
        assert!(layout.contains(RssLink));
        assert_eq!(layout.tokens().filter(|t| *t == Hr).count(), 2);
    }

    #[test]
    fn test_duplicate_across_slots() {
        let layout = NavBarLayout {
            left: vec![InternalNavs, Hr],
            right: vec![Hr, InternalNavs, ThemeButton],
            merge_on_mobile: false,
        };
        let dups = layout.duplicates();
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].0.as_str(), "ui.navBarLayout.right[1]");
        assert_eq!(dups[0].1, InternalNavs);
    }

    #[test]
    fn test_duplicate_within_slot() {
        let layout = NavBarLayout {
            left: vec![],
            right: vec![SearchButton, SearchButton],
            merge_on_mobile: true,
        };
        let mut diag = ConfigDiagnostics::new();
        layout.validate(&mut diag);
        assert!(diag.has_error_at("ui.navBarLayout.right[1]"));
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = toml::from_str::<NavBarLayout>("right = [\"searchButton\", \"clock\"]")
            .unwrap_err();
        assert!(err.to_string().contains("clock"));
    }

    #[test]
    fn test_partial_layout_uses_defaults() {
        let layout: NavBarLayout = toml::from_str("left = [\"internalNavs\"]").unwrap();
        assert_eq!(layout.left, vec![InternalNavs]);
        assert!(layout.merge_on_mobile);
    }

    #[test]
    fn test_tab_validation() {
        let tab = TabbedLayoutTab {
            title: "".into(),
            path: "changelog".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        tab.validate(&FieldPath::new("ui.tabbedLayoutTabs").at(0), &mut diag);
        assert!(diag.has_error_at("ui.tabbedLayoutTabs[0].title"));
        assert!(diag.has_error_at("ui.tabbedLayoutTabs[0].path"));
    }
}
