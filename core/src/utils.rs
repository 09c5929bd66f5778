//! Utility functions and types.

use std::fmt::{Debug, Formatter};

/// Redact keeps secrets out of `Debug` output.
///
/// Values shorter than 12 characters are fully hidden, longer ones keep
/// their first and last three characters so different keys can still be
/// told apart in logs.
pub struct Redact<'a>(Option<&'a str>);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(Some(value))
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(Some(value.as_str()))
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self.0 {
            None | Some("") => return f.write_str("EMPTY"),
            Some(v) => v,
        };

        let chars = value.chars().count();
        if chars < 12 {
            return f.write_str("***");
        }

        let head: String = value.chars().take(3).collect();
        let tail: String = value.chars().skip(chars - 3).collect();
        write!(f, "{head}***{tail}")
    }
}
