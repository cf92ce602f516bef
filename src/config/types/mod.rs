//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Wire-level field paths for diagnostics       |
//! | `toggle` | Disabled / enabled-with-options feature flag |

mod error;
mod field;
mod toggle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, Severity};
pub use field::FieldPath;
pub use toggle::Toggle;
