//! Internal implementation of the task identifier.

use crate::{UuidError, UuidResult};
use std::path::{Path, PathBuf};
use std::{fmt, str::FromStr};

use uuid::Uuid;

/// Taskboard's canonical task identifier (32 lowercase hex characters, no hyphens).
///
/// Once constructed, the contained UUID is known to be valid and is always rendered in
/// canonical form.
///
/// # Construction
/// - [`TaskId::new`] allocates a fresh, time-ordered identifier (store side only).
/// - [`TaskId::parse`] validates an externally supplied identifier, e.g. a URL path segment.
///
/// # Errors
/// [`TaskId::parse`] returns [`UuidError::InvalidInput`] if the input is not already canonical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(Uuid);

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskId {
    /// Generates a new identifier in canonical form.
    ///
    /// Uses UUID version 7: a millisecond timestamp prefix followed by random bits, so ids
    /// allocated later compare greater.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Validates and parses an identifier that must already be in canonical form.
    ///
    /// Hyphenated or uppercase forms are **not** normalised; callers must provide the canonical
    /// representation.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if !Self::is_canonical(input) {
            return Err(UuidError::InvalidInput(format!(
                "task id must be 32 lowercase hex characters without hyphens, got: '{}'",
                input
            )));
        }
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| UuidError::InvalidInput(e.to_string()))
    }

    /// Returns true if `input` is in canonical form.
    ///
    /// Purely syntactic: exactly 32 bytes, each one of `0-9` or `a-f`.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Returns `parent_dir/<s1>/<s2>/<id>/`.
    ///
    /// `s1` and `s2` are the last four hex characters of the identifier, two each.
    pub fn sharded_dir(&self, parent_dir: &Path) -> PathBuf {
        let canonical = self.0.simple().to_string();
        let (_, tail) = canonical.split_at(28);
        let (s1, s2) = tail.split_at(2);
        parent_dir.join(s1).join(s2).join(&canonical)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for TaskId {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskId::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TaskId::parse(&s).map_err(serde::de::Error::custom)
    }
}
