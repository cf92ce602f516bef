//! Behavior of links pointing outside the site.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// CSS `cursor` applied to external links.
///
/// Every keyword of CSS Basic User Interface Level 4, plus `""` to keep the
/// stylesheet's cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorType {
    #[default]
    #[serde(rename = "")]
    Inherit,
    Auto,
    #[serde(rename = "default")]
    Arrow,
    #[serde(rename = "none")]
    Hidden,
    // links & status
    ContextMenu,
    Help,
    Pointer,
    Progress,
    Wait,
    // selection
    Cell,
    Crosshair,
    Text,
    VerticalText,
    // drag & drop
    Alias,
    Copy,
    Move,
    NoDrop,
    NotAllowed,
    Grab,
    Grabbing,
    // resizing & scrolling
    AllScroll,
    ColResize,
    RowResize,
    NResize,
    EResize,
    SResize,
    WResize,
    NeResize,
    NwResize,
    SeResize,
    SwResize,
    EwResize,
    NsResize,
    NeswResize,
    NwseResize,
    // zooming
    ZoomIn,
    ZoomOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "ui.externalLink")]
pub struct ExternalLinkConfig {
    /// Open external links in a new tab.
    pub new_tab: bool,
    pub cursor_type: CursorType,
    /// Append a "new tab" icon after external links.
    pub show_new_tab_icon: bool,
}

impl Default for ExternalLinkConfig {
    fn default() -> Self {
        Self {
            new_tab: false,
            cursor_type: CursorType::Inherit,
            show_new_tab_icon: false,
        }
    }
}

impl ExternalLinkConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.show_new_tab_icon && !self.new_tab {
            diag.warn(
                Self::FIELDS.show_new_tab_icon,
                format!(
                    "new-tab icon is shown but {} is false",
                    Self::FIELDS.new_tab.as_str()
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cursor_is_inherit() {
        let config: ExternalLinkConfig =
            toml::from_str("newTab = false\ncursorType = \"\"\nshowNewTabIcon = false").unwrap();
        assert_eq!(config, ExternalLinkConfig::default());
    }

    #[test]
    fn test_cursor_keywords() {
        let config: ExternalLinkConfig = toml::from_str("cursorType = \"zoom-in\"").unwrap();
        assert_eq!(config.cursor_type, CursorType::ZoomIn);

        let config: ExternalLinkConfig = toml::from_str("cursorType = \"default\"").unwrap();
        assert_eq!(config.cursor_type, CursorType::Arrow);

        assert!(toml::from_str::<ExternalLinkConfig>("cursorType = \"hand\"").is_err());
    }

    #[test]
    fn test_every_css_cursor_keyword() {
        let keywords = [
            "auto", "default", "none", "context-menu", "help", "pointer", "progress", "wait",
            "cell", "crosshair", "text", "vertical-text", "alias", "copy", "move", "no-drop",
            "not-allowed", "grab", "grabbing", "all-scroll", "col-resize", "row-resize",
            "n-resize", "e-resize", "s-resize", "w-resize", "ne-resize", "nw-resize",
            "se-resize", "sw-resize", "ew-resize", "ns-resize", "nesw-resize", "nwse-resize",
            "zoom-in", "zoom-out",
        ];
        for keyword in keywords {
            let config: ExternalLinkConfig = toml::from_str(&format!("cursorType = {keyword:?}"))
                .unwrap_or_else(|e| panic!("{keyword}: {e}"));
            assert_ne!(config.cursor_type, CursorType::Inherit, "{keyword}");
            assert_eq!(
                serde_json::to_value(config.cursor_type).unwrap(),
                serde_json::json!(keyword)
            );
        }
        assert_eq!(
            toml::from_str::<ExternalLinkConfig>("cursorType = \"none\"")
                .unwrap()
                .cursor_type,
            CursorType::Hidden
        );
    }

    #[test]
    fn test_icon_without_new_tab_warns() {
        let config = ExternalLinkConfig {
            show_new_tab_icon: true,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(
            diag.warnings()[0].field.as_str(),
            "ui.externalLink.showNewTabIcon"
        );
    }
}
