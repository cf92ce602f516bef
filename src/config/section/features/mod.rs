//! `[features]` section configuration.
//!
//! Every feature is a [`Toggle`]: `false` to disable, `[true, {...}]` to
//! enable with options. `[false, {...}]` also disables and keeps the
//! options around unparsed.
//!
//! # Example
//!
//! ```toml
//! [features]
//! slideEnterAnim = [true, { enterStep = 60 }]
//! ogImage = [true, { fallbackBgType = "plum" }]
//! toc = [true, { minHeadingLevel = 2, maxHeadingLevel = 4, displayPosition = "left", displayMode = "content" }]
//! share = false
//! giscus = false
//! ```

mod anim;
mod giscus;
mod og;
mod share;
mod toc;

pub use anim::SlideEnterAnimOptions;
pub use giscus::{GiscusFlag, GiscusInputPosition, GiscusLoading, GiscusMapping, GiscusOptions};
pub use og::{FallbackBgType, OgImageOptions};
pub use share::{ShareOptions, SharePlatform};
pub use toc::{TocDisplayMode, TocOptions, TocPosition};

use crate::config::section::SiteConfig;
use crate::config::{ConfigDiagnostics, Toggle};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Optional theme features. Missing entries are disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "features")]
pub struct FeaturesConfig {
    pub slide_enter_anim: Toggle<SlideEnterAnimOptions>,
    pub og_image: Toggle<OgImageOptions>,
    pub toc: Toggle<TocOptions>,
    pub share: Toggle<ShareOptions>,
    pub giscus: Toggle<GiscusOptions>,
}

impl FeaturesConfig {
    /// Names of enabled features, in declaration order.
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("slideEnterAnim", self.slide_enter_anim.is_enabled()),
            ("ogImage", self.og_image.is_enabled()),
            ("toc", self.toc.is_enabled()),
            ("share", self.share.is_enabled()),
            ("giscus", self.giscus.is_enabled()),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }

    /// Share platforms to render; empty whenever `share` is disabled.
    pub fn share_platforms(&self) -> Vec<(SharePlatform, Option<&str>)> {
        self.share
            .options()
            .map(ShareOptions::platforms)
            .unwrap_or_default()
    }

    /// Resolve values derived from the site record.
    pub fn resolve(&mut self, site: &SiteConfig, diag: &mut ConfigDiagnostics) {
        if let Some(og) = self.og_image.options_mut() {
            og.resolve(site, &Self::FIELDS.og_image.at(1), diag);
        }
    }

    /// Copy whose template strings reload to the current values.
    pub fn escaped(&self) -> Self {
        Self {
            og_image: self.og_image.clone().map(|og| og.escaped()),
            ..self.clone()
        }
    }

    /// Validate options of enabled features only.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(anim) = self.slide_enter_anim.options() {
            anim.validate(&Self::FIELDS.slide_enter_anim.at(1), diag);
        }
        if let Some(og) = self.og_image.options() {
            og.validate(&Self::FIELDS.og_image.at(1), diag);
        }
        if let Some(toc) = self.toc.options() {
            toc.validate(&Self::FIELDS.toc.at(1), diag);
        }
        if let Some(share) = self.share.options() {
            share.validate(&Self::FIELDS.share.at(1), diag);
        }
        if let Some(giscus) = self.giscus.options() {
            giscus.validate(&Self::FIELDS.giscus.at(1), diag);
        }
    }
}
