//! Errors raised while building a theme configuration.
//!
//! Schema problems are never reported one at a time: every section pushes
//! into a shared [`ConfigDiagnostics`], and construction fails with all of
//! them once the whole model has been checked.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a [`ThemeConfig`](crate::config::ThemeConfig) could not be built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("cannot render TOML: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown config fields: {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The theme cannot render this value.
    Error,
    /// Renders, but probably not what the author meant.
    Warning,
}

/// One finding about one field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    /// Wire path, e.g. `ui.internalNavs[0].icon`.
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "{}", "error".red().bold())?,
            Severity::Warning => write!(f, "{}", "warning".yellow().bold())?,
        }
        write!(f, " {} {}", self.field, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {hint}", "= hint:".dimmed())?;
        }
        Ok(())
    }
}

/// Errors and warnings collected over a whole configuration.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(diagnostic(Severity::Error, field, message, None));
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(diagnostic(Severity::Error, field, message, Some(hint.into())));
    }

    /// Record a suspicious but renderable value.
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings
            .push(diagnostic(Severity::Warning, field, message, None));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// Whether any error was reported for exactly `field`.
    pub fn has_error_at(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field.as_str() == field)
    }

    /// `Err(self)` when anything failed, the warnings otherwise.
    pub fn into_result(self) -> Result<Vec<ConfigDiagnostic>, Self> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(self.warnings)
        }
    }
}

fn diagnostic(
    severity: Severity,
    field: FieldPath,
    message: impl Into<String>,
    hint: Option<String>,
) -> ConfigDiagnostic {
    ConfigDiagnostic {
        severity,
        field,
        message: message.into(),
        hint,
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let noun = if count == 1 { "error" } else { "errors" };
        write!(f, "theme config has {count} {noun}")?;
        for err in &self.errors {
            write!(f, "\n{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("theme.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(io_err.to_string(), "cannot read `theme.toml`");

        let unknown = ConfigError::UnknownFields(vec!["ui.foo".into(), "site.bar".into()]);
        assert!(unknown.to_string().contains("ui.foo, site.bar"));
    }

    #[test]
    fn test_diagnostics_display_names_field() {
        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(
            FieldPath::new("site.website"),
            "invalid URL",
            "use format like https://example.com",
        );
        diag.error(FieldPath::new("site.title"), "must not be empty");

        let display = format!("{diag}");
        assert!(display.starts_with("theme config has 2 errors"));
        assert!(display.contains("site.website"));
        assert!(display.contains("invalid URL"));
        assert!(display.contains("https://example.com"));
        assert_eq!(display.lines().count(), 4);
    }

    #[test]
    fn test_warnings_kept_apart() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("ui.socialLinks"), "empty");
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings()[0].severity, Severity::Warning);
        assert!(format!("{}", diag.warnings()[0]).contains("ui.socialLinks"));
    }

    #[test]
    fn test_into_result() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("ui.socialLinks"), "empty");
        let warnings = diag.into_result().unwrap();
        assert_eq!(warnings.len(), 1);

        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.title"), "must not be empty");
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert!(err.has_error_at("site.title"));
    }
}
