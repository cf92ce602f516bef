//! `init` command: write the built-in configuration.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use crate::config::ThemeConfig;
use crate::log;

/// Generate `theme.toml` content with a header comment.
pub fn generate_config_template() -> Result<String> {
    let mut out = format!(
        "# Theme configuration file (v{})\n\
         #\n\
         # Features take `false` or `[true, {{ ... }}]`.\n\
         # Run `antfustyle-config check` after editing.\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&ThemeConfig::builtin().to_toml()?);
    Ok(out)
}

/// Write the template to `path`.
///
/// If `dry_run` is true, only prints the template to stdout.
pub fn init(path: &Path, dry_run: bool, force: bool) -> Result<()> {
    let content = generate_config_template()?;
    if dry_run {
        print!("{content}");
        return Ok(());
    }

    write_config(path, &content, force)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

fn write_config(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists.\n\
             Use `--force` to overwrite it.",
            path.display()
        );
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}
