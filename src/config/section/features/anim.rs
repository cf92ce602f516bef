//! Slide-enter animation for page content.

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "")]
pub struct SlideEnterAnimOptions {
    /// Delay in milliseconds between consecutive elements entering.
    pub enter_step: u32,
}

impl SlideEnterAnimOptions {
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.enter_step == 0 {
            diag.error_with_hint(
                at.join(Self::FIELDS.enter_step),
                "must be greater than 0",
                "disable the feature with `slideEnterAnim = false` instead",
            );
        } else if self.enter_step > 1000 {
            diag.warn(
                at.join(Self::FIELDS.enter_step),
                format!("{}ms per element makes long pages crawl in", self.enter_step),
            );
        }
    }
}
