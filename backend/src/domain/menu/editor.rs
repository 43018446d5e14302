//! In-memory state of the menu panel.

use super::{Category, DraftBuffer, MenuItem, MenuItemId, MenuItemPatch};

/// Canonical list, draft buffer and selected tab of the menu panel.
///
/// Holds no I/O; [`crate::domain::MenuEditorService`] drives it against the
/// store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuEditor {
    items: Vec<MenuItem>,
    drafts: DraftBuffer,
    selected: Category,
}

impl MenuEditor {
    /// Replace the canonical list and discard every unsaved edit.
    pub fn replace(&mut self, items: Vec<MenuItem>) {
        self.drafts = DraftBuffer::mirror(&items);
        self.items = items;
    }

    /// Items in `category`, in loaded order. Also selects the category tab.
    pub fn filter(&mut self, category: Category) -> Vec<&MenuItem> {
        self.selected = category;
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Merge `patch` into the draft for `id`; unknown ids are ignored.
    pub fn update_draft(&mut self, id: &MenuItemId, patch: MenuItemPatch) -> Option<&MenuItem> {
        if self.drafts.merge(id, patch) {
            self.drafts.get(id)
        } else {
            None
        }
    }

    /// Canonical list as last loaded.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Draft shadowing the item with `id`.
    #[must_use]
    pub fn draft(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.drafts.get(id)
    }

    /// Category tab currently selected.
    #[must_use]
    pub fn selected(&self) -> Category {
        self.selected
    }
}
