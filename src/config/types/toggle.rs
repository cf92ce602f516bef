//! Feature toggle: off, or on with a settings record.
//!
//! # Wire format
//!
//! ```toml
//! [features]
//! slideEnterAnim = [true, { enterStep = 60 }]   # enabled with options
//! share = false                                 # disabled
//! giscus = [false, { data-repo = "a/b" }]       # disabled, options kept for later
//! ```
//!
//! A bare `true` or a bare options table is rejected. Options next to a
//! `false` flag are consumed without being parsed.

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A feature that is either disabled or enabled with options `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle<T> {
    Disabled,
    Enabled(T),
}

impl<T> Default for Toggle<T> {
    fn default() -> Self {
        Self::Disabled
    }
}

impl<T> Toggle<T> {
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// Options of an enabled feature; `None` when disabled.
    #[inline]
    pub const fn options(&self) -> Option<&T> {
        match self {
            Self::Enabled(options) => Some(options),
            Self::Disabled => None,
        }
    }

    #[inline]
    pub fn options_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Enabled(options) => Some(options),
            Self::Disabled => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Toggle<U> {
        match self {
            Self::Enabled(options) => Toggle::Enabled(f(options)),
            Self::Disabled => Toggle::Disabled,
        }
    }
}

impl<T: Serialize> Serialize for Toggle<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Enabled(options) => (true, options).serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Toggle<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ToggleVisitor(PhantomData))
    }
}

struct ToggleVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ToggleVisitor<T> {
    type Value = Toggle<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`false` or `[true, options]`")
    }

    fn visit_bool<E: de::Error>(self, enabled: bool) -> Result<Self::Value, E> {
        if enabled {
            Err(E::custom(
                "bare `true` is not a valid toggle, use `[true, options]` to enable",
            ))
        } else {
            Ok(Toggle::Disabled)
        }
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let enabled: bool = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;

        let toggle = if enabled {
            let options = seq
                .next_element::<T>()?
                .ok_or_else(|| de::Error::invalid_length(1, &self))?;
            Toggle::Enabled(options)
        } else {
            // Parsed as an opaque value so unknown-key tracking stays quiet.
            seq.next_element::<serde_json::Value>()?;
            Toggle::Disabled
        };

        if seq.next_element::<serde_json::Value>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }
        Ok(toggle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Opts {
        step: u32,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        feature: Toggle<Opts>,
    }

    #[test]
    fn test_disabled_forms() {
        let holder: Holder = toml::from_str("feature = false").unwrap();
        assert_eq!(holder.feature, Toggle::Disabled);

        let holder: Holder = toml::from_str("feature = [false, { whatever = \"x\" }]").unwrap();
        assert_eq!(holder.feature, Toggle::Disabled);
    }

    #[test]
    fn test_enabled_form() {
        let holder: Holder = toml::from_str("feature = [true, { step = 60 }]").unwrap();
        assert_eq!(holder.feature.options(), Some(&Opts { step: 60 }));
    }

    #[test]
    fn test_bare_true_rejected() {
        let err = toml::from_str::<Holder>("feature = true").unwrap_err();
        assert!(err.to_string().contains("[true, options]"));
    }

    #[test]
    fn test_bare_options_rejected() {
        assert!(toml::from_str::<Holder>("feature = { step = 60 }").is_err());
    }

    #[test]
    fn test_enabled_without_options_rejected() {
        assert!(toml::from_str::<Holder>("feature = [true]").is_err());
        assert!(toml::from_str::<Holder>("feature = [true, { step = 1 }, 3]").is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let on = serde_json::to_value(Toggle::Enabled(Opts { step: 3 })).unwrap();
        assert_eq!(on, serde_json::json!([true, { "step": 3 }]));

        let off = serde_json::to_value(Toggle::<Opts>::Disabled).unwrap();
        assert_eq!(off, serde_json::json!(false));
    }

    #[test]
    fn test_map_keeps_state() {
        assert_eq!(Toggle::Enabled(2).map(|n| n * 10), Toggle::Enabled(20));
        assert_eq!(Toggle::<u32>::Disabled.map(|n| n * 10), Toggle::Disabled);
    }
}
