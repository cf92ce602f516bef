//! `[ui]` section configuration.
//!
//! Navigation menus, navigation bar layout and display options.
//!
//! # Example
//!
//! ```toml
//! [[ui.internalNavs]]
//! path = "/blog"
//! title = "Blog"
//! displayMode = "alwaysText"
//! text = "Blog"
//!
//! [[ui.socialLinks]]
//! link = "https://github.com/user"
//! title = "GitHub"
//! displayMode = "alwaysIcon"
//! icon = "i-uil-github-alt"
//!
//! [ui.navBarLayout]
//! left = []
//! right = ["internalNavs", "hr", "socialLinks", "hr", "searchButton", "themeButton", "rssLink"]
//! mergeOnMobile = true
//!
//! [ui.groupView]
//! maxGroupColumns = 3
//! showGroupItemColorOnHover = true
//!
//! [ui.externalLink]
//! newTab = false
//! cursorType = ""
//! showNewTabIcon = false
//! ```

mod github;
mod layout;
mod link;
mod nav;

pub use github::GithubViewConfig;
pub use layout::{LayoutToken, NavBarLayout, TabbedLayoutTab};
pub use link::{CursorType, ExternalLinkConfig};
pub use nav::{DisplayMode, NavEntry, SocialLink};

use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Group view column range accepted by the layout grid.
pub const GROUP_COLUMNS: std::ops::RangeInclusive<u8> = 1..=4;

/// UI configuration: menus, layout, and display options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "ui")]
pub struct UiConfig {
    /// Menu entries linking to pages of this site, in display order.
    pub internal_navs: Vec<NavEntry>,

    /// Menu entries linking to other websites, in display order.
    pub social_links: Vec<SocialLink>,

    pub nav_bar_layout: NavBarLayout,

    /// Tabs shown by pages using the tabbed layout.
    pub tabbed_layout_tabs: Vec<TabbedLayoutTab>,

    pub group_view: GroupViewConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_view: Option<GithubViewConfig>,

    pub external_link: ExternalLinkConfig,

    pub post_meta_style: PostMetaStyle,
}

/// How post metadata (date, reading time) is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostMetaStyle {
    /// Plain text separated by dots.
    #[default]
    Minimal,
    /// Each item prefixed with an icon.
    Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "ui.groupView")]
pub struct GroupViewConfig {
    pub max_group_columns: u8,
    pub show_group_item_color_on_hover: bool,
}

impl Default for GroupViewConfig {
    fn default() -> Self {
        Self {
            max_group_columns: 3,
            show_group_item_color_on_hover: true,
        }
    }
}

impl UiConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut paths = FxHashSet::default();
        for (i, entry) in self.internal_navs.iter().enumerate() {
            let at = Self::FIELDS.internal_navs.at(i);
            entry.validate(&at, diag);
            if !paths.insert(entry.path.trim_end_matches('/')) {
                diag.warn(at, format!("'{}' is linked more than once", entry.path));
            }
        }

        for (i, link) in self.social_links.iter().enumerate() {
            link.validate(&Self::FIELDS.social_links.at(i), diag);
        }

        self.nav_bar_layout.validate(diag);
        self.validate_layout_references(diag);

        let mut tab_paths = FxHashSet::default();
        for (i, tab) in self.tabbed_layout_tabs.iter().enumerate() {
            let at = Self::FIELDS.tabbed_layout_tabs.at(i);
            tab.validate(&at, diag);
            if !tab_paths.insert(tab.path.trim_end_matches('/')) {
                diag.error(at, format!("tab path '{}' is used by another tab", tab.path));
            }
        }

        if !GROUP_COLUMNS.contains(&self.group_view.max_group_columns) {
            diag.error(
                GroupViewConfig::FIELDS.max_group_columns,
                format!(
                    "{} is out of range {}..={}",
                    self.group_view.max_group_columns,
                    GROUP_COLUMNS.start(),
                    GROUP_COLUMNS.end()
                ),
            );
        }

        if let Some(github) = &self.github_view {
            github.validate(diag);
        }

        self.external_link.validate(diag);
    }

    /// Warn about layout tokens pointing at empty menus and menus that are
    /// never placed.
    fn validate_layout_references(&self, diag: &mut ConfigDiagnostics) {
        let layout = &self.nav_bar_layout;
        let menus = [
            (
                LayoutToken::InternalNavs,
                self.internal_navs.is_empty(),
                Self::FIELDS.internal_navs,
            ),
            (
                LayoutToken::SocialLinks,
                self.social_links.is_empty(),
                Self::FIELDS.social_links,
            ),
        ];

        for (token, is_empty, field) in menus {
            match (layout.contains(token), is_empty) {
                (true, true) => diag.warn(
                    field,
                    format!("'{}' is placed in the navigation bar but empty", token.as_str()),
                ),
                (false, false) => diag.warn(
                    field,
                    format!("entries are never shown: '{}' is not in navBarLayout", token.as_str()),
                ),
                _ => {}
            }
        }
    }
}
