//! Typed configuration model for the antfustyle blog theme.
//!
//! The theme reads three records at build time: `site` (identity),
//! `ui` (menus and layout) and `features` (optional widgets). This crate
//! parses them from `theme.toml`, resolves `${site.*}` placeholders,
//! rejects anything the theme could not render, and hands the result to
//! the site build as JSON.
//!
//! ```no_run
//! use antfustyle_config::config::ThemeConfig;
//!
//! let theme = ThemeConfig::load("theme.toml".as_ref())?;
//! println!("{}", theme.to_json()?);
//! # Ok::<(), antfustyle_config::config::ConfigError>(())
//! ```

pub mod cli;
pub mod config;
pub mod logger;
