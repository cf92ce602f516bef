//! `check` command: load and validate the configuration.

use std::path::Path;

use anyhow::{Result, bail};

use super::common::{plural, print_warnings, resolve_config_path};
use crate::config::{ConfigError, ThemeConfig};
use crate::logger::{status_error, status_success};
use crate::{debug, log};

/// Validate the config file and print a one-line summary.
pub fn check(config: &Path) -> Result<()> {
    let path = resolve_config_path(config)?;
    let name = path.display();
    debug!("check"; "checking {}", name);

    let theme = match ThemeConfig::load(&path) {
        Ok(theme) => theme,
        Err(ConfigError::Diagnostics(diag)) => {
            status_error(
                &format!("{name}: {}", plural(diag.errors().len(), "error")),
                &diag.to_string(),
            );
            bail!("{name} is invalid");
        }
        Err(ConfigError::UnknownFields(fields)) => {
            let detail = fields
                .iter()
                .map(|f| format!("- {f}"))
                .collect::<Vec<_>>()
                .join("\n");
            status_error(&format!("{name}: unknown fields"), &detail);
            bail!("{name} is invalid");
        }
        Err(err) => return Err(err.into()),
    };

    print_warnings(&theme.warnings());
    status_success(&format!("{name} is valid ({})", summary(&theme)));
    let enabled = theme.features.enabled();
    if !enabled.is_empty() {
        log!("check"; "features: {}", enabled.join(", "));
    }
    Ok(())
}

/// Short description of what the config contains.
pub fn summary(theme: &ThemeConfig) -> String {
    let warnings = theme.warnings();
    let mut parts = vec![
        match theme.ui.internal_navs.len() {
            1 => "1 nav entry".to_string(),
            n => format!("{n} nav entries"),
        },
        plural(theme.ui.social_links.len(), "social link"),
        format!("{} features enabled", theme.features.enabled().len()),
    ];
    if !warnings.is_empty() {
        parts.push(plural(warnings.len(), "warning"));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TEST_SITE_TOML;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_summary_builtin() {
        assert_eq!(
            summary(&ThemeConfig::builtin()),
            "1 nav entry, 1 social link, 3 features enabled"
        );
    }

    #[test]
    fn test_summary_counts_warnings() {
        let theme = crate::config::test_parse_config("");
        // default layout places menus that are empty
        assert!(summary(&theme).ends_with("warnings"));
    }

    #[test]
    fn test_check_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("theme.toml");
        fs::write(&path, ThemeConfig::builtin().to_toml().unwrap()).unwrap();
        assert!(check(&path).is_ok());
    }

    #[test]
    fn test_check_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("theme.toml");
        let content = format!("{TEST_SITE_TOML}[ui.groupView]\nmaxGroupColumns = 9\n");
        fs::write(&path, content).unwrap();
        let err = check(&path).unwrap_err();
        assert!(err.to_string().contains("is invalid"));
    }

    #[test]
    fn test_check_unknown_field() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("theme.toml");
        fs::write(&path, format!("{TEST_SITE_TOML}colour = \"red\"\n")).unwrap();
        assert!(check(&path).is_err());
    }
}
