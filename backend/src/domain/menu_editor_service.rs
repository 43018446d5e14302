//! Menu editor service implementing the [`MenuEditorCommand`] driving port.
//!
//! The editor state (canonical list, drafts and selected tab) lives behind an
//! async mutex, so panel requests are served one after another and a reload
//! can never interleave with a save.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use crate::domain::ports::{
    AddItemOutcome, Confirmation, MenuEditorCommand, MenuEntry, MenuItemRepository,
    MenuItemRepositoryError, MenuListing,
};
use crate::domain::{
    AddItemError, AddItemForm, Category, Error, MenuEditor, MenuItem, MenuItemId, MenuItemPatch,
};

/// Menu panel backed by a [`MenuItemRepository`].
pub struct MenuEditorService<R> {
    repo: Arc<R>,
    editor: Mutex<MenuEditor>,
}

impl<R> MenuEditorService<R> {
    /// Create a service with an empty, not yet loaded menu.
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            editor: Mutex::new(MenuEditor::default()),
        }
    }
}

impl<R> MenuEditorService<R>
where
    R: MenuItemRepository,
{
    fn map_repository_error(error: MenuItemRepositoryError) -> Error {
        match error {
            MenuItemRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("menu store unavailable: {message}"))
            }
            MenuItemRepositoryError::Query { message } => Error::service_unavailable(message),
            MenuItemRepositoryError::Decode { message } => {
                Error::internal(format!("menu store returned malformed data: {message}"))
            }
        }
    }

    fn map_form_error(error: AddItemError) -> Error {
        Error::invalid_request(error.to_string()).with_details(json!({
            "field": error.field(),
            "code": "invalid_menu_item",
        }))
    }

    fn listing(editor: &mut MenuEditor, category: Category) -> MenuListing {
        let saved: Vec<MenuItem> = editor.filter(category).into_iter().cloned().collect();
        let entries = saved
            .into_iter()
            .map(|item| {
                let draft = editor.draft(&item.id).cloned().unwrap_or_else(|| item.clone());
                MenuEntry { saved: item, draft }
            })
            .collect();
        MenuListing { category, entries }
    }

    async fn reload_locked(&self, editor: &mut MenuEditor) -> Result<MenuListing, Error> {
        let items = self
            .repo
            .list_all()
            .await
            .map_err(Self::map_repository_error)?;
        editor.replace(items);
        let selected = editor.selected();
        Ok(Self::listing(editor, selected))
    }
}

#[async_trait]
impl<R> MenuEditorCommand for MenuEditorService<R>
where
    R: MenuItemRepository,
{
    async fn reload(&self) -> Result<MenuListing, Error> {
        let mut editor = self.editor.lock().await;
        self.reload_locked(&mut editor).await
    }

    async fn list(&self, category: Option<Category>) -> Result<MenuListing, Error> {
        let mut editor = self.editor.lock().await;
        let category = category.unwrap_or_else(|| editor.selected());
        Ok(Self::listing(&mut editor, category))
    }

    async fn update_draft(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<Option<MenuItem>, Error> {
        let mut editor = self.editor.lock().await;
        Ok(editor.update_draft(&id, patch).cloned())
    }

    async fn save_item(&self, id: MenuItemId) -> Result<MenuListing, Error> {
        let mut editor = self.editor.lock().await;
        if let Some(draft) = editor.draft(&id).cloned() {
            self.repo
                .update(&draft)
                .await
                .map_err(Self::map_repository_error)?;
        }
        self.reload_locked(&mut editor).await
    }

    async fn delete_item(
        &self,
        id: MenuItemId,
        confirmation: Confirmation,
    ) -> Result<MenuListing, Error> {
        let mut editor = self.editor.lock().await;
        match confirmation {
            Confirmation::Declined => {
                let selected = editor.selected();
                Ok(Self::listing(&mut editor, selected))
            }
            Confirmation::Confirmed => {
                self.repo
                    .delete(&id)
                    .await
                    .map_err(Self::map_repository_error)?;
                self.reload_locked(&mut editor).await
            }
        }
    }

    async fn add_item(&self, form: AddItemForm) -> Result<AddItemOutcome, Error> {
        let mut editor = self.editor.lock().await;
        let new_item = form
            .into_new_item(editor.items())
            .map_err(Self::map_form_error)?;
        self.repo
            .insert(&new_item)
            .await
            .map_err(Self::map_repository_error)?;
        let next_form = AddItemForm::blank(editor.selected());
        let listing = self.reload_locked(&mut editor).await?;
        Ok(AddItemOutcome { listing, next_form })
    }
}

#[cfg(test)]
#[path = "menu_editor_service_tests.rs"]
mod tests;
