//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path of a config field as it appears on the wire.
///
/// Static paths come from `#[derive(Config)]`; entries inside arrays are
/// addressed by combining them with [`FieldPath::at`] and [`FieldPath::join`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[serde(rename_all = "camelCase")]
/// #[config(section = "ui")]
/// pub struct UiConfig {
///     pub internal_navs: Vec<NavEntry>,
/// }
///
/// // Usage:
/// let field = UiConfig::FIELDS.internal_navs.at(0).join(NavEntry::FIELDS.icon);
/// assert_eq!(field.as_str(), "ui.internalNavs[0].icon");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Address the `index`-th element of an array field.
    pub fn at(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{index}]", self.0)))
    }

    /// Append a relative child path.
    pub fn join(&self, child: FieldPath) -> Self {
        if self.0.is_empty() {
            return child;
        }
        Self(Cow::Owned(format!("{}.{}", self.0, child.0)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
