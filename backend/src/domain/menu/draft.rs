//! Edit buffer shadowing the canonical menu list.
//!
//! One draft per loaded item, keyed by id. The buffer is rebuilt wholesale on
//! every reload, merged field by field on local edits, and the full draft is
//! what gets sent on save.

use std::collections::BTreeMap;

use super::{MenuItem, MenuItemId, MenuItemPatch};

/// Pending edits for every loaded menu item.
///
/// # Examples
///
/// ```
/// # use cafe_backend::domain::{Category, DraftBuffer, MenuItem, MenuItemId, MenuItemPatch, Price};
/// let item = MenuItem {
///     id: MenuItemId::new("a"),
///     category: Category::Matcha,
///     section: "Hot".to_owned(),
///     title: "Usucha".to_owned(),
///     description: None,
///     price: Price::from_minor_units(1800),
///     order_index: 1,
/// };
/// let mut drafts = DraftBuffer::mirror(&[item.clone()]);
/// let patch = MenuItemPatch { title: Some("Koicha".to_owned()), ..MenuItemPatch::default() };
/// assert!(drafts.merge(&item.id, patch));
/// assert_eq!(drafts.get(&item.id).map(|d| d.title.as_str()), Some("Koicha"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftBuffer {
    entries: BTreeMap<MenuItemId, MenuItem>,
}

impl DraftBuffer {
    /// Build a buffer mirroring `items` exactly.
    #[must_use]
    pub fn mirror(items: &[MenuItem]) -> Self {
        Self {
            entries: items
                .iter()
                .map(|item| (item.id.clone(), item.clone()))
                .collect(),
        }
    }

    /// Merge `patch` into the draft for `id`.
    ///
    /// Returns `false`, leaving the buffer untouched, when no draft exists.
    pub fn merge(&mut self, id: &MenuItemId, patch: MenuItemPatch) -> bool {
        match self.entries.get_mut(id) {
            Some(draft) => {
                draft.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Current draft for `id`.
    #[must_use]
    pub fn get(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.entries.get(id)
    }

    /// Number of drafts held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the buffer holds no drafts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
