//! Theme configuration model and `theme.toml` loading.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── ui/        # [ui] menus, navigation bar, display options
//! │   └── features/  # [features] toggles and their options
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── toggle     # Toggle<T>
//! ├── builtin        # Shipped defaults
//! └── mod.rs         # ThemeConfig (this file)
//! ```
//!
//! # Lifecycle
//!
//! A [`ThemeConfig`] is parsed, resolved (`${site.*}` interpolation and
//! fallbacks) and validated in one go. Any schema violation aborts with a
//! [`ConfigDiagnostics`] naming every offending field; a successfully
//! built value is never mutated afterwards.

pub mod builtin;
pub mod section;
pub mod types;
mod util;

pub use section::{FeaturesConfig, SiteConfig, UiConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Severity, Toggle};
pub use util::find_config_file;

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Default config filename
pub const CONFIG_FILE: &str = "theme.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing theme.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Site identity (required)
    pub site: SiteConfig,

    /// Navigation and layout
    #[serde(default)]
    pub ui: UiConfig,

    /// Optional features
    #[serde(default)]
    pub features: FeaturesConfig,
}

impl ThemeConfig {
    /// Load, resolve and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Parse, resolve and validate configuration from a TOML string.
    ///
    /// Unknown keys are rejected.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            return Err(ConfigError::UnknownFields(ignored));
        }
        config.finalize()
    }

    /// Parse and validate configuration from JSON (the `dump` output).
    ///
    /// JSON carries the resolved model, so no placeholder is substituted.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let config: Self =
            serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
                ignored.push(path.to_string());
            })?;
        deserializer.end()?;
        if !ignored.is_empty() {
            return Err(ConfigError::UnknownFields(ignored));
        }
        config.validate().map_err(ConfigError::Diagnostics)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    ///
    /// No resolution or validation happens here.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Resolve derived values, then validate.
    fn finalize(mut self) -> Result<Self, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.features.resolve(&self.site, &mut diag);
        self.collect_diagnostics(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)?;
        Ok(self)
    }

    /// Collect diagnostics for every section.
    pub fn collect_diagnostics(&self, diag: &mut ConfigDiagnostics) {
        self.site.validate(diag);
        self.ui.validate(diag);
        self.features.validate(diag);
    }

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        self.collect_diagnostics(&mut diag);
        diag.into_result().map(drop)
    }

    /// Suspicious but valid values. Nothing is printed while loading;
    /// callers decide how to surface these.
    pub fn warnings(&self) -> Vec<ConfigDiagnostic> {
        let mut diag = ConfigDiagnostics::new();
        self.collect_diagnostics(&mut diag);
        diag.warnings().to_vec()
    }

    // ========================================================================
    // export
    // ========================================================================

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// TOML source that loads back to `self`: resolved template
    /// strings are escaped so they are not substituted a second time.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let source = Self {
            features: self.features.escaped(),
            ..self.clone()
        };
        Ok(toml::to_string_pretty(&source)?)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Minimal valid `[site]` section.
#[cfg(test)]
pub const TEST_SITE_TOML: &str = r#"[site]
website = "https://example.com/"
title = "Test"
description = "Test site"
author = "Tester"
"#;

/// Parse config with the minimal `[site]` section prepended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> ThemeConfig {
    let config = format!("{TEST_SITE_TOML}{extra}");
    let (parsed, ignored) = ThemeConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// The `[site]` record of [`TEST_SITE_TOML`].
#[cfg(test)]
pub fn test_site() -> SiteConfig {
    test_parse_config("").site
}

// ============================================================================
// tests
// ============================================================================
