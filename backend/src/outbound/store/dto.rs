//! Wire DTOs for the `menu_items` and `profiles` collections.
//!
//! Rows decode into these first and are mapped to domain records in one
//! pass, so store quirks (numeric ids, null counters) stay in this module.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Category, MenuItem, MenuItemId, NewMenuItem, Points, Price, Profile, ProfileId,
};

/// Primary key as the store sends it: text or integer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(super) enum StoreIdDto {
    Text(String),
    Number(i64),
}

impl StoreIdDto {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct MenuItemRowDto {
    id: StoreIdDto,
    category: Category,
    section: String,
    title: String,
    description: Option<String>,
    price: i64,
    order_index: i32,
}

impl MenuItemRowDto {
    pub(super) fn into_domain(self) -> Result<MenuItem, String> {
        let id = self.id.into_string();
        let price = u32::try_from(self.price)
            .map_err(|_| format!("menu item {id} has out-of-range price {}", self.price))?;
        Ok(MenuItem {
            id: MenuItemId::new(id),
            category: self.category,
            section: self.section,
            title: self.title,
            description: self.description,
            price: Price::from_minor_units(price),
            order_index: self.order_index,
        })
    }
}

/// Column values written on insert and update; the id travels in the filter.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub(super) struct MenuItemWriteDto<'a> {
    category: Category,
    section: &'a str,
    title: &'a str,
    description: Option<&'a str>,
    price: u32,
    order_index: i32,
}

impl<'a> From<&'a MenuItem> for MenuItemWriteDto<'a> {
    fn from(item: &'a MenuItem) -> Self {
        Self {
            category: item.category,
            section: &item.section,
            title: &item.title,
            description: item.description.as_deref(),
            price: item.price.minor_units(),
            order_index: item.order_index,
        }
    }
}

impl<'a> From<&'a NewMenuItem> for MenuItemWriteDto<'a> {
    fn from(item: &'a NewMenuItem) -> Self {
        Self {
            category: item.category,
            section: &item.section,
            title: &item.title,
            description: item.description.as_deref(),
            price: item.price.minor_units(),
            order_index: item.order_index,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ProfileRowDto {
    id: StoreIdDto,
    points: Option<i64>,
}

impl ProfileRowDto {
    /// A null counter reads as zero; a negative one is floored at zero.
    pub(super) fn into_domain(self) -> Profile {
        let points = self
            .points
            .and_then(|value| u64::try_from(value).ok())
            .unwrap_or_default();
        Profile {
            id: ProfileId::new(self.id.into_string()),
            points: Points::new(points),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub(super) struct PointsUpdateDto {
    pub(super) points: u64,
}

/// PostgREST error body. Only `message` is used.
#[derive(Debug, Default, Deserialize)]
pub(super) struct StoreErrorDto {
    #[serde(default)]
    pub(super) message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn menu_row_accepts_numeric_id() {
        let row: MenuItemRowDto = serde_json::from_value(json!({
            "id": 17,
            "category": "NAPOJE",
            "section": "Cold",
            "title": "Iced Latte",
            "description": null,
            "price": 1500,
            "order_index": 1,
            "created_at": "2025-01-01T00:00:00Z"
        }))
        .expect("row decodes");

        let item = row.into_domain().expect("row maps");
        assert_eq!(item.id.as_str(), "17");
        assert_eq!(item.category, Category::Napoje);
        assert_eq!(item.price.minor_units(), 1500);
    }

    #[test]
    fn menu_row_rejects_negative_price() {
        let row: MenuItemRowDto = serde_json::from_value(json!({
            "id": "a1",
            "category": "MATCHA",
            "section": "Hot",
            "title": "Oops",
            "description": "x",
            "price": -5,
            "order_index": 2
        }))
        .expect("row decodes");

        let error = row.into_domain().expect_err("negative price");
        assert!(error.contains("a1"));
    }

    #[test]
    fn menu_row_rejects_unknown_category() {
        let result = serde_json::from_value::<MenuItemRowDto>(json!({
            "id": "a1",
            "category": "DESERY",
            "section": "Hot",
            "title": "Cake",
            "description": null,
            "price": 100,
            "order_index": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn write_dto_uses_store_column_names() {
        let new_item = NewMenuItem {
            category: Category::Napoje,
            section: "Cold".to_owned(),
            title: "Iced Latte".to_owned(),
            description: None,
            price: Price::from_minor_units(1500),
            order_index: 1,
        };
        let value = serde_json::to_value(MenuItemWriteDto::from(&new_item)).expect("serialise");
        assert_eq!(
            value,
            json!({
                "category": "NAPOJE",
                "section": "Cold",
                "title": "Iced Latte",
                "description": null,
                "price": 1500,
                "order_index": 1
            })
        );
    }

    #[test]
    fn profile_row_reads_null_points_as_zero() {
        let row: ProfileRowDto =
            serde_json::from_value(json!({ "id": "p-1", "points": null })).expect("row decodes");
        assert_eq!(row.into_domain().points, Points::new(0));
    }

    #[test]
    fn profile_row_keeps_positive_points() {
        let row: ProfileRowDto =
            serde_json::from_value(json!({ "id": 9, "points": 41 })).expect("row decodes");
        let profile = row.into_domain();
        assert_eq!(profile.id.as_str(), "9");
        assert_eq!(profile.points, Points::new(41));
    }
}
