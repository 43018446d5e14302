//! Loyalty profiles and their point counters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to a profile by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Wrap a store-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative loyalty point counter.
///
/// # Examples
///
/// ```
/// # use cafe_backend::domain::Points;
/// assert_eq!(Points::new(0).removed_one(), Points::new(0));
/// assert_eq!(Points::new(999_999).added_one(), Points::new(1_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(u64);

impl Points {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// One more point. The counter has no practical ceiling.
    #[must_use]
    pub const fn added_one(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One fewer point, floored at zero.
    #[must_use]
    pub const fn removed_one(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Profile fields the ledger reads before adjusting points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub points: Points,
}
