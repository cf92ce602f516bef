//! Table of contents.

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Valid HTML heading levels.
const HEADING_LEVELS: RangeInclusive<u8> = 1..=6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TocPosition {
    #[default]
    Left,
    Right,
}

/// When the table of contents is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TocDisplayMode {
    Always,
    /// Only while the article body is in view.
    #[default]
    Content,
    /// Collapsed until hovered.
    Hover,
    HoverContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "")]
pub struct TocOptions {
    #[serde(default = "default_min_level")]
    pub min_heading_level: u8,
    #[serde(default = "default_max_level")]
    pub max_heading_level: u8,
    #[serde(default)]
    pub display_position: TocPosition,
    #[serde(default)]
    pub display_mode: TocDisplayMode,
}

fn default_min_level() -> u8 {
    2
}

fn default_max_level() -> u8 {
    4
}

impl TocOptions {
    /// Heading levels included in the table of contents.
    pub fn levels(&self) -> RangeInclusive<u8> {
        self.min_heading_level..=self.max_heading_level
    }

    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        let bounds = [
            (self.min_heading_level, Self::FIELDS.min_heading_level),
            (self.max_heading_level, Self::FIELDS.max_heading_level),
        ];
        let mut in_range = true;
        for (level, field) in bounds {
            if !HEADING_LEVELS.contains(&level) {
                in_range = false;
                diag.error(at.join(field), format!("heading level {level} is not in 1..=6"));
            }
        }

        if in_range && self.min_heading_level > self.max_heading_level {
            diag.error_with_hint(
                at.join(Self::FIELDS.min_heading_level),
                format!(
                    "{} is greater than maxHeadingLevel {}",
                    self.min_heading_level, self.max_heading_level
                ),
                "swap the two levels",
            );
        }
    }
}
