//! `dump` command: print the resolved configuration.
//!
//! JSON output is what the site build consumes; TOML output is a
//! normalized `theme.toml` with every default spelled out.

use std::io::{Write, stdout};
use std::path::Path;

use anyhow::Result;

use super::DumpFormat;
use super::common::load_config;
use crate::config::ThemeConfig;

pub fn dump(config: &Path, format: DumpFormat, compact: bool) -> Result<()> {
    let (_, theme) = load_config(config)?;
    let mut stdout = stdout().lock();
    writeln!(stdout, "{}", render(&theme, format, compact)?)?;
    Ok(())
}

/// Serialize `theme`; `compact` only affects JSON.
pub fn render(theme: &ThemeConfig, format: DumpFormat, compact: bool) -> Result<String> {
    let out = match format {
        DumpFormat::Json if compact => theme.to_json()?,
        DumpFormat::Json => theme.to_json_pretty()?,
        DumpFormat::Toml => theme.to_toml()?,
    };
    Ok(out.trim_end().to_string())
}
