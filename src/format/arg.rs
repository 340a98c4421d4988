//! Typed arguments passed positionally into templates and cache records.

use std::fmt;

/// A single positional value for a template placeholder.
///
/// The variant decides how the value is turned into text. Every variant has a
/// canonical text form; [`FormatArg::Null`] renders as the empty string, which
/// lets callers pass "no value" without special casing templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// No value. Renders as nothing.
    #[default]
    Null,
    /// Owned text.
    Text(String),
    /// Unsigned 32-bit integer.
    UInt(u32),
    /// Unsigned 8-bit integer, used for module instance indices.
    UInt8(u8),
}

impl FormatArg {
    /// Returns `true` for [`FormatArg::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Canonical text of the argument as an owned string.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::UInt(value) => write!(f, "{value}"),
            Self::UInt8(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FormatArg {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<u32> for FormatArg {
    fn from(value: u32) -> Self {
        Self::UInt(value)
    }
}

impl From<u8> for FormatArg {
    fn from(value: u8) -> Self {
        Self::UInt8(value)
    }
}

impl<T: Into<FormatArg>> From<Option<T>> for FormatArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
