//! Top-level menu grouping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Menu category shown as a tab in the console.
///
/// The set is closed; the store spells the values in upper case.
///
/// # Examples
///
/// ```
/// # use cafe_backend::domain::Category;
/// assert_eq!("NAPOJE".parse::<Category>(), Ok(Category::Napoje));
/// assert_eq!(Category::Jedzenie.to_string(), "JEDZENIE");
/// assert_eq!(Category::default(), Category::Matcha);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Matcha,
    Napoje,
    Jedzenie,
}

impl Category {
    /// Every category in tab order.
    pub const ALL: [Self; 3] = [Self::Matcha, Self::Napoje, Self::Jedzenie];

    /// Store spelling of the category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matcha => "MATCHA",
            Self::Napoje => "NAPOJE",
            Self::Jedzenie => "JEDZENIE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown menu category: {input}")]
pub struct ParseCategoryError {
    /// The unrecognised input value.
    pub input: String,
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError {
                input: s.to_owned(),
            })
    }
}
