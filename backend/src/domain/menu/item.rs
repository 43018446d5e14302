//! Menu item records as owned by the remote store.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Category, Price};

/// Opaque identifier assigned to a menu item by the store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(String);

impl MenuItemId {
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

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A menu item as loaded from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub category: Category,
    /// Grouping label, unique only within its category.
    pub section: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Price,
    /// Display order within the category and section.
    pub order_index: i32,
}

impl MenuItem {
    /// Whether the item belongs to the given category and section.
    #[must_use]
    pub fn shares_section(&self, category: Category, section: &str) -> bool {
        self.category == category && self.section == section
    }

    /// Replace the fields named by `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: MenuItemPatch) {
        let MenuItemPatch {
            category,
            section,
            title,
            description,
            price,
            order_index,
        } = patch;
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(section) = section {
            self.section = section;
        }
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(order_index) = order_index {
            self.order_index = order_index;
        }
    }
}

/// Partial update merged into a draft. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemPatch {
    pub category: Option<Category>,
    pub section: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub order_index: Option<i32>,
}

/// Record inserted into the store for a new menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub category: Category,
    pub section: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Price,
    pub order_index: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> MenuItem {
        MenuItem {
            id: MenuItemId::new("item-1"),
            category: Category::Napoje,
            section: "Hot".to_owned(),
            title: "Latte".to_owned(),
            description: None,
            price: Price::from_minor_units(1400),
            order_index: 2,
        }
    }

    #[test]
    fn apply_replaces_only_named_fields() {
        let mut item = latte();
        item.apply(MenuItemPatch {
            title: Some("Flat White".to_owned()),
            price: Some(Price::from_minor_units(1500)),
            ..MenuItemPatch::default()
        });

        assert_eq!(item.title, "Flat White");
        assert_eq!(item.price.minor_units(), 1500);
        assert_eq!(item.section, "Hot");
        assert_eq!(item.order_index, 2);
        assert_eq!(item.id, MenuItemId::new("item-1"));
    }

    #[test]
    fn apply_sets_description_even_when_empty() {
        let mut item = latte();
        item.apply(MenuItemPatch {
            description: Some(String::new()),
            ..MenuItemPatch::default()
        });
        assert_eq!(item.description.as_deref(), Some(""));
    }

    #[test]
    fn shares_section_matches_category_and_label() {
        let item = latte();
        assert!(item.shares_section(Category::Napoje, "Hot"));
        assert!(!item.shares_section(Category::Matcha, "Hot"));
        assert!(!item.shares_section(Category::Napoje, "hot"));
    }
}
