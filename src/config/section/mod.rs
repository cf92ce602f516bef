//! Configuration section definitions.
//!
//! Each module corresponds to a section in `theme.toml`:
//!
//! | Module     | TOML Section   | Purpose                                |
//! |------------|----------------|----------------------------------------|
//! | `site`     | `[site]`       | Site identity and image allow-list     |
//! | `ui`       | `[ui]`         | Menus, navigation bar, display options |
//! | `features` | `[features]`   | Optional widgets (toc, share, giscus)  |

pub mod features;
pub mod site;
pub mod ui;

// Re-export section configs
pub use features::FeaturesConfig;
pub use site::SiteConfig;
pub use ui::UiConfig;
