//! Share buttons under posts.
//!
//! Platforms that mention the author take a handle toggle
//! (`false` or `[true, "@handle"]`); the rest are plain booleans.

use crate::config::{ConfigDiagnostics, FieldPath, Toggle};
use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharePlatform {
    Twitter,
    Bluesky,
    Mastodon,
    Facebook,
    Pinterest,
    Reddit,
    Telegram,
    Whatsapp,
    Email,
}

impl SharePlatform {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Bluesky => "bluesky",
            Self::Mastodon => "mastodon",
            Self::Facebook => "facebook",
            Self::Pinterest => "pinterest",
            Self::Reddit => "reddit",
            Self::Telegram => "telegram",
            Self::Whatsapp => "whatsapp",
            Self::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct ShareOptions {
    pub twitter: Toggle<String>,
    pub bluesky: Toggle<String>,
    pub mastodon: Toggle<String>,
    pub facebook: bool,
    pub pinterest: bool,
    pub reddit: bool,
    pub telegram: bool,
    pub whatsapp: bool,
    pub email: bool,
}

impl ShareOptions {
    /// Enabled platforms in display order, with the author's handle where
    /// the platform has one.
    pub fn platforms(&self) -> Vec<(SharePlatform, Option<&str>)> {
        let handles = [
            (SharePlatform::Twitter, &self.twitter),
            (SharePlatform::Bluesky, &self.bluesky),
            (SharePlatform::Mastodon, &self.mastodon),
        ];
        let flags = [
            (SharePlatform::Facebook, self.facebook),
            (SharePlatform::Pinterest, self.pinterest),
            (SharePlatform::Reddit, self.reddit),
            (SharePlatform::Telegram, self.telegram),
            (SharePlatform::Whatsapp, self.whatsapp),
            (SharePlatform::Email, self.email),
        ];

        handles
            .into_iter()
            .filter_map(|(platform, toggle)| {
                toggle.options().map(|handle| (platform, Some(handle.as_str())))
            })
            .chain(
                flags
                    .into_iter()
                    .filter(|(_, enabled)| *enabled)
                    .map(|(platform, _)| (platform, None)),
            )
            .collect()
    }

    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        let handles = [
            (SharePlatform::Twitter, &self.twitter, Self::FIELDS.twitter),
            (SharePlatform::Bluesky, &self.bluesky, Self::FIELDS.bluesky),
            (SharePlatform::Mastodon, &self.mastodon, Self::FIELDS.mastodon),
        ];

        for (platform, toggle, field) in handles {
            let Some(handle) = toggle.options() else {
                continue;
            };
            if let Err(reason) = check_handle(platform, handle) {
                diag.error(at.join(field).at(1), format!("'{handle}': {reason}"));
            }
        }

        if self.platforms().is_empty() {
            diag.warn(
                at.clone(),
                "share is enabled but every platform is off",
            );
        }
    }
}

fn check_handle(platform: SharePlatform, handle: &str) -> Result<(), &'static str> {
    let Some(name) = handle.strip_prefix('@') else {
        return Err("handle must start with '@'");
    };
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err("handle must be a single non-empty word");
    }
    match platform {
        SharePlatform::Mastodon => match name.split_once('@') {
            Some((user, instance)) if !user.is_empty() && instance.contains('.') => Ok(()),
            _ => Err("mastodon handle must look like '@user@instance.social'"),
        },
        SharePlatform::Bluesky if !name.contains('.') => {
            Err("bluesky handle must be a domain like '@user.bsky.social'")
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShareOptions {
        toml::from_str(
            r#"
twitter = [true, "@ste7lin"]
bluesky = [true, "@ste7lin.bsky.social"]
mastodon = false
facebook = false
pinterest = false
reddit = false
telegram = false
whatsapp = false
email = true
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_platforms_in_order() {
        let options = sample();
        let platforms = options.platforms();
        assert_eq!(
            platforms,
            vec![
                (SharePlatform::Twitter, Some("@ste7lin")),
                (SharePlatform::Bluesky, Some("@ste7lin.bsky.social")),
                (SharePlatform::Email, None),
            ]
        );
    }

    #[test]
    fn test_valid_handles() {
        let mut diag = ConfigDiagnostics::new();
        sample().validate(&FieldPath::new("features.share").at(1), &mut diag);
        assert!(!diag.has_errors(), "{diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_invalid_handles() {
        let options = ShareOptions {
            twitter: Toggle::Enabled("ste7lin".into()),
            mastodon: Toggle::Enabled("@ste7lin".into()),
            ..sample()
        };
        let mut diag = ConfigDiagnostics::new();
        options.validate(&FieldPath::new("features.share").at(1), &mut diag);
        assert!(diag.has_error_at("features.share[1].twitter[1]"));
        assert!(diag.has_error_at("features.share[1].mastodon[1]"));
        assert!(!diag.has_error_at("features.share[1].bluesky[1]"));
    }

    #[test]
    fn test_all_off_warns() {
        let mut diag = ConfigDiagnostics::new();
        ShareOptions::default().validate(&FieldPath::new("features.share").at(1), &mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_bare_handle_rejected() {
        assert!(toml::from_str::<ShareOptions>("twitter = \"@ste7lin\"").is_err());
    }
}
