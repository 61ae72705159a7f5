//! Version tokens of the form `vNN.NN`.

use std::{fmt, sync::LazyLock};

use regex::Regex;

/// Version at the very start of a text, as announced in the forum thread.
static LEADING_VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v\d\d\.\d\d").expect("Invalid leading version pattern"));

/// Version anywhere in a text, as embedded in torrent names.
static EMBEDDED_VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v\d\d\.\d\d").expect("Invalid embedded version pattern"));

/// A release version such as `v21.12`.
///
/// Ordering is plain string ordering, which matches release order as long as both groups keep
/// two digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionToken(String);

impl VersionToken {
    /// Returns the version at the start of `text`, if any. `"v21.08 (2021)"` yields `v21.08`,
    /// `"Hello v21.08"` yields nothing.
    pub fn leading(text: &str) -> Option<Self> {
        LEADING_VERSION_PATTERN
            .find(text)
            .map(|m| Self(m.as_str().to_string()))
    }

    /// Returns the first version found anywhere in `text`.
    pub fn embedded(text: &str) -> Option<Self> {
        EMBEDDED_VERSION_PATTERN
            .find(text)
            .map(|m| Self(m.as_str().to_string()))
    }

    /// The token as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Joins versions for log output, e.g. `v20.01, v20.12`.
pub(crate) fn join_versions(versions: &[VersionToken]) -> String {
    versions
        .iter()
        .map(VersionToken::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
