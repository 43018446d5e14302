//! Add-item form and its validation.

use serde::{Deserialize, Serialize};

use super::{Category, MenuItem, NewMenuItem, Price};

/// Fields entered by the operator when adding a menu item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemForm {
    pub category: Category,
    pub section: String,
    pub title: String,
    pub description: String,
    /// Price as typed, e.g. `"15,00"`.
    pub price_text: String,
}

impl AddItemForm {
    /// Empty form defaulting to the given category tab.
    #[must_use]
    pub fn blank(category: Category) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Validate the form and derive the record to insert.
    ///
    /// `existing` is the currently loaded menu; the new item is placed after
    /// the last one sharing its category and section.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field, checked in the order price, title,
    /// section.
    pub fn into_new_item(self, existing: &[MenuItem]) -> Result<NewMenuItem, AddItemError> {
        let price = Price::parse(&self.price_text).ok_or(AddItemError::InvalidPrice)?;
        if self.title.is_empty() {
            return Err(AddItemError::MissingTitle);
        }
        if self.section.is_empty() {
            return Err(AddItemError::MissingSection);
        }

        let order_index = next_order_index(existing, self.category, &self.section);
        let description = Some(self.description).filter(|text| !text.is_empty());
        Ok(NewMenuItem {
            category: self.category,
            section: self.section,
            title: self.title,
            description,
            price,
            order_index,
        })
    }
}

/// Reasons an add-item form is rejected before any store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddItemError {
    #[error("price must be a non-negative amount such as 12,50")]
    InvalidPrice,
    #[error("title must not be empty")]
    MissingTitle,
    #[error("section must not be empty")]
    MissingSection,
}

impl AddItemError {
    /// Wire name of the offending form field.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::InvalidPrice => "priceText",
            Self::MissingTitle => "title",
            Self::MissingSection => "section",
        }
    }
}

/// Order index for a new item: one past the highest in its category and
/// section, or `1` when the section is empty.
#[must_use]
pub fn next_order_index(existing: &[MenuItem], category: Category, section: &str) -> i32 {
    existing
        .iter()
        .filter(|item| item.shares_section(category, section))
        .map(|item| item.order_index)
        .max()
        .map_or(1, |highest| highest.saturating_add(1))
}
