//! Menu domain: categories, prices, items, drafts and the add-item form.

mod category;
mod draft;
mod editor;
mod form;
mod item;
mod price;

pub use category::{Category, ParseCategoryError};
pub use draft::DraftBuffer;
pub use editor::MenuEditor;
pub use form::{AddItemError, AddItemForm, next_order_index};
pub use item::{MenuItem, MenuItemId, MenuItemPatch, NewMenuItem};
pub use price::Price;
