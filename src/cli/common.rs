//! Common utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::config::{ConfigDiagnostic, ThemeConfig, find_config_file};
use crate::{debug, log};

/// Locate the config file named on the command line.
pub fn resolve_config_path(config: &Path) -> Result<PathBuf> {
    match find_config_file(config) {
        Some(path) => Ok(path),
        None => bail!(
            "config file '{}' not found in this directory or any parent.\n\
             Run `antfustyle-config init` to create one.",
            config.display()
        ),
    }
}

/// Locate and load the config file, printing its warnings.
/// Validation errors are returned as-is.
pub fn load_config(config: &Path) -> Result<(PathBuf, ThemeConfig)> {
    let path = resolve_config_path(config)?;
    debug!("config"; "loading {}", path.display());
    let theme = ThemeConfig::load(&path)?;
    print_warnings(&theme.warnings());
    Ok((path, theme))
}

/// Print warnings as one grouped block.
pub fn print_warnings(warnings: &[ConfigDiagnostic]) {
    if warnings.is_empty() {
        return;
    }
    log!("warning"; "config values that are valid but probably unintended:");
    for warning in warnings {
        eprintln!("{warning}");
    }
}

/// `"1 error"`, `"2 errors"`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absolute_missing_path() {
        let temp = TempDir::new().unwrap();
        let err = resolve_config_path(&temp.path().join("theme.toml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_absolute_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("theme.toml");
        std::fs::write(&path, ThemeConfig::builtin().to_toml().unwrap()).unwrap();

        let (found, config) = load_config(&path).unwrap();
        assert_eq!(found, path);
        assert_eq!(config.site.title, "良颂");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "error"), "1 error");
        assert_eq!(plural(3, "warning"), "3 warnings");
    }
}
