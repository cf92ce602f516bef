//! Navigation entries: internal pages and outbound social links.

use crate::config::util::{check_site_path, is_icon_class};
use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};

/// How a navigation entry renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    /// Text label on every screen size.
    AlwaysText,
    /// Icon only on every screen size.
    AlwaysIcon,
    /// Icon on wide screens, text label once collapsed on mobile.
    IconToTextOnMobile,
}

impl DisplayMode {
    pub const fn requires_text(self) -> bool {
        matches!(self, Self::AlwaysText | Self::IconToTextOnMobile)
    }

    pub const fn requires_icon(self) -> bool {
        matches!(self, Self::AlwaysIcon | Self::IconToTextOnMobile)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlwaysText => "alwaysText",
            Self::AlwaysIcon => "alwaysIcon",
            Self::IconToTextOnMobile => "iconToTextOnMobile",
        }
    }
}

/// Link to a page of this site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "")]
pub struct NavEntry {
    /// Site-relative path, e.g. `/blog`.
    pub path: String,
    /// Tooltip / accessible title.
    pub title: String,
    pub display_mode: DisplayMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Link to another website (profile pages, mail, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "")]
pub struct SocialLink {
    /// Absolute URL, e.g. `https://github.com/user`.
    pub link: String,
    pub title: String,
    pub display_mode: DisplayMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl NavEntry {
    /// Validate an entry located at `at` (e.g. `ui.internalNavs[0]`).
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Err(reason) = check_site_path(&self.path) {
            diag.error_with_hint(
                at.join(Self::FIELDS.path),
                format!("'{}' {reason}", self.path),
                "use a site path like \"/blog\"",
            );
        }
        check_title(&self.title, at.join(Self::FIELDS.title), diag);
        check_display(
            self.display_mode,
            self.text.as_deref(),
            self.icon.as_deref(),
            (at.join(Self::FIELDS.text), at.join(Self::FIELDS.icon)),
            diag,
        );
    }
}

impl SocialLink {
    /// Validate an entry located at `at` (e.g. `ui.socialLinks[0]`).
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Err(e) = url::Url::parse(&self.link) {
            diag.error_with_hint(
                at.join(Self::FIELDS.link),
                format!("invalid URL '{}': {e}", self.link),
                "use an absolute URL like https://github.com/user or mailto:me@example.com",
            );
        }
        check_title(&self.title, at.join(Self::FIELDS.title), diag);
        check_display(
            self.display_mode,
            self.text.as_deref(),
            self.icon.as_deref(),
            (at.join(Self::FIELDS.text), at.join(Self::FIELDS.icon)),
            diag,
        );
    }
}

fn check_title(title: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if title.trim().is_empty() {
        diag.error(field, "must not be empty");
    }
}

/// Each display mode needs the parts it renders.
fn check_display(
    mode: DisplayMode,
    text: Option<&str>,
    icon: Option<&str>,
    (text_field, icon_field): (FieldPath, FieldPath),
    diag: &mut ConfigDiagnostics,
) {
    match text {
        Some(text) if text.trim().is_empty() => diag.error(text_field, "must not be empty"),
        None if mode.requires_text() => diag.error(
            text_field,
            format!("required when displayMode is '{}'", mode.as_str()),
        ),
        _ => {}
    }

    match icon {
        Some(icon) if !is_icon_class(icon) => diag.error_with_hint(
            icon_field,
            format!("'{icon}' is not an icon class"),
            "use an icon class like \"i-ri-github-line\"",
        ),
        None if mode.requires_icon() => diag.error_with_hint(
            icon_field,
            format!("required when displayMode is '{}'", mode.as_str()),
            "add an icon or switch displayMode to 'alwaysText'",
        ),
        _ => {}
    }
}
