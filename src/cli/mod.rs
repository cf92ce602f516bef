//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod dump;
pub mod init;

pub use args::{Cli, Commands, DumpFormat};
