//! Driving port for the menu panel.
//!
//! The [`MenuEditorCommand`] trait is what inbound adapters call to load,
//! browse, edit, save, delete and add menu items. Every mutating call reloads
//! the canonical list afterwards, so listings returned from it reflect the
//! store.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{AddItemForm, Category, Error, MenuItem, MenuItemId, MenuItemPatch};

/// Operator's answer to the delete prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Confirmation {
    Confirmed,
    #[default]
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// Stored item paired with the draft that shadows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub saved: MenuItem,
    pub draft: MenuItem,
}

/// Items of one category tab in loaded order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuListing {
    pub category: Category,
    pub entries: Vec<MenuEntry>,
}

/// Result of a successful add: the refreshed tab and a blank form for the
/// next item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemOutcome {
    pub listing: MenuListing,
    pub next_form: AddItemForm,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuEditorCommand: Send + Sync {
    /// Fetch every item from the store, discarding unsaved drafts, and list
    /// the selected tab.
    async fn reload(&self) -> Result<MenuListing, Error>;

    /// Select `category` and list its items. No I/O.
    ///
    /// `None` lists the tab that is already selected.
    async fn list(&self, category: Option<Category>) -> Result<MenuListing, Error>;

    /// Merge `patch` into the draft for `id`.
    ///
    /// Returns `Ok(None)` when no draft exists for `id`.
    async fn update_draft(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<Option<MenuItem>, Error>;

    /// Persist the draft for `id` and reload.
    async fn save_item(&self, id: MenuItemId) -> Result<MenuListing, Error>;

    /// Delete `id` when `confirmation` is [`Confirmation::Confirmed`].
    async fn delete_item(
        &self,
        id: MenuItemId,
        confirmation: Confirmation,
    ) -> Result<MenuListing, Error>;

    /// Validate `form`, insert the item and reload.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::InvalidRequest`] naming the first
    /// invalid field when the form does not validate.
    async fn add_item(&self, form: AddItemForm) -> Result<AddItemOutcome, Error>;
}

/// Fixture command serving an empty menu.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMenuEditorCommand;

impl FixtureMenuEditorCommand {
    fn empty(category: Category) -> MenuListing {
        MenuListing {
            category,
            entries: Vec::new(),
        }
    }
}

#[async_trait]
impl MenuEditorCommand for FixtureMenuEditorCommand {
    async fn reload(&self) -> Result<MenuListing, Error> {
        Ok(Self::empty(Category::default()))
    }

    async fn list(&self, category: Option<Category>) -> Result<MenuListing, Error> {
        Ok(Self::empty(category.unwrap_or_default()))
    }

    async fn update_draft(
        &self,
        _id: MenuItemId,
        _patch: MenuItemPatch,
    ) -> Result<Option<MenuItem>, Error> {
        Ok(None)
    }

    async fn save_item(&self, _id: MenuItemId) -> Result<MenuListing, Error> {
        Ok(Self::empty(Category::default()))
    }

    async fn delete_item(
        &self,
        _id: MenuItemId,
        _confirmation: Confirmation,
    ) -> Result<MenuListing, Error> {
        Ok(Self::empty(Category::default()))
    }

    async fn add_item(&self, form: AddItemForm) -> Result<AddItemOutcome, Error> {
        Ok(AddItemOutcome {
            listing: Self::empty(form.category),
            next_form: AddItemForm::blank(form.category),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, Confirmation::Confirmed)]
    #[case(false, Confirmation::Declined)]
    fn confirmation_from_flag(#[case] flag: bool, #[case] expected: Confirmation) {
        assert_eq!(Confirmation::from(flag), expected);
    }

    #[tokio::test]
    async fn fixture_add_returns_blank_form_for_same_tab() {
        let form = AddItemForm {
            title: "Scone".to_owned(),
            ..AddItemForm::blank(Category::Jedzenie)
        };
        let outcome = FixtureMenuEditorCommand
            .add_item(form)
            .await
            .expect("fixture add succeeds");
        assert_eq!(outcome.next_form, AddItemForm::blank(Category::Jedzenie));
        assert_eq!(outcome.listing.category, Category::Jedzenie);
    }
}
