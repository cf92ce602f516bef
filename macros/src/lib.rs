//! Proc macros for antfustyle-config.
//!
//! # Config derive macro
//!
//! Generates wire-level field path accessors used in validation diagnostics.
//!
//! ```ignore
//! #[derive(Config, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! #[config(section = "site")]
//! pub struct Site {
//!     /// Deployed site URL.
//!     pub website: String,
//!
//!     /// Hostnames allowed for remote images.
//!     pub image_domains: Vec<String>,
//! }
//!
//! // Generates:
//! // - Site::FIELDS.website       -> FieldPath("site.website")
//! // - Site::FIELDS.image_domains -> FieldPath("site.imageDomains")
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - dotted section path; absent or empty
//!   for records that live inside arrays
//! - `#[serde(rename_all = "...")]` - respected when naming fields
//!
//! Field-level:
//! - `#[serde(rename = "x")]` - wins over `rename_all`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
