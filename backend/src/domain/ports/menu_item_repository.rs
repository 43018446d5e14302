//! Port for the hosted `menu_items` collection.
//!
//! The [`MenuItemRepository`] trait covers the four calls the menu editor
//! makes: a sorted select-all, a full-record update, delete by id and insert.
//! Update and delete of a missing id affect zero rows and are not errors.

use async_trait::async_trait;

use crate::domain::{MenuItem, MenuItemId, NewMenuItem};

use super::define_port_error;

define_port_error! {
    /// Errors raised by menu item repository adapters.
    pub enum MenuItemRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "menu store connection failed: {message}",
        /// The store rejected the request; `message` is the store's own text.
        Query { message: String } => "{message}",
        /// A response body did not match the expected record shape.
        Decode { message: String } => "menu store returned malformed data: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Every item ordered by category, section and order index, ascending.
    async fn list_all(&self) -> Result<Vec<MenuItem>, MenuItemRepositoryError>;

    /// Overwrite the stored record whose id matches `item.id`.
    async fn update(&self, item: &MenuItem) -> Result<(), MenuItemRepositoryError>;

    async fn delete(&self, id: &MenuItemId) -> Result<(), MenuItemRepositoryError>;

    /// Insert a new record; the store assigns its id.
    async fn insert(&self, item: &NewMenuItem) -> Result<(), MenuItemRepositoryError>;
}
