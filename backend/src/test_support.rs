//! In-memory repository doubles shared by unit and integration tests.
//!
//! Compiled with the `test-support` feature. Both doubles behave like the
//! hosted store: ids are assigned on insert, listings come back sorted and
//! writes to unknown ids affect nothing.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    MenuItemRepository, MenuItemRepositoryError, ProfileRepository, ProfileRepositoryError,
};
use crate::domain::{MenuItem, MenuItemId, NewMenuItem, Points, Profile, ProfileId, ShortCode};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Menu collection held in memory.
#[derive(Default)]
pub struct InMemoryMenuItemRepository {
    items: Mutex<Vec<MenuItem>>,
    next_id: Mutex<u64>,
}

impl InMemoryMenuItemRepository {
    /// Seed the collection with stored items.
    pub fn with_items(items: impl IntoIterator<Item = MenuItem>) -> Self {
        let items: Vec<MenuItem> = items.into_iter().collect();
        let next_id = items
            .iter()
            .filter_map(|item| item.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            items: Mutex::new(items),
            next_id: Mutex::new(next_id),
        }
    }

    /// Copy of every stored item in insertion order.
    pub fn stored(&self) -> Vec<MenuItem> {
        lock(&self.items).clone()
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryMenuItemRepository {
    async fn list_all(&self) -> Result<Vec<MenuItem>, MenuItemRepositoryError> {
        let mut items = self.stored();
        items.sort_by(|a, b| {
            (a.category.as_str(), a.section.as_str(), a.order_index).cmp(&(
                b.category.as_str(),
                b.section.as_str(),
                b.order_index,
            ))
        });
        Ok(items)
    }

    async fn update(&self, item: &MenuItem) -> Result<(), MenuItemRepositoryError> {
        if let Some(stored) = lock(&self.items).iter_mut().find(|s| s.id == item.id) {
            *stored = item.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &MenuItemId) -> Result<(), MenuItemRepositoryError> {
        lock(&self.items).retain(|item| &item.id != id);
        Ok(())
    }

    async fn insert(&self, item: &NewMenuItem) -> Result<(), MenuItemRepositoryError> {
        let id = {
            let mut next_id = lock(&self.next_id);
            *next_id += 1;
            MenuItemId::new(next_id.to_string())
        };
        lock(&self.items).push(MenuItem {
            id,
            category: item.category,
            section: item.section.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            price: item.price,
            order_index: item.order_index,
        });
        Ok(())
    }
}

/// Profiles keyed by short code, with a log of every points update.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<HashMap<String, Profile>>,
    updates: Mutex<Vec<(ProfileId, Points)>>,
}

impl InMemoryProfileRepository {
    /// Register a profile reachable through `short_code`.
    pub fn insert(&self, short_code: &str, profile: Profile) {
        lock(&self.profiles).insert(short_code.to_owned(), profile);
    }

    /// Current points of the profile behind `short_code`.
    pub fn points_for(&self, short_code: &str) -> Option<Points> {
        lock(&self.profiles)
            .get(short_code)
            .map(|profile| profile.points)
    }

    /// Every `update_points` call received, in order.
    pub fn updates(&self) -> Vec<(ProfileId, Points)> {
        lock(&self.updates).clone()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_short_code(
        &self,
        code: &ShortCode,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(lock(&self.profiles).get(code.as_str()).cloned())
    }

    async fn update_points(
        &self,
        id: &ProfileId,
        points: Points,
    ) -> Result<(), ProfileRepositoryError> {
        lock(&self.updates).push((id.clone(), points));
        if let Some(profile) = lock(&self.profiles)
            .values_mut()
            .find(|profile| &profile.id == id)
        {
            profile.points = points;
        }
        Ok(())
    }
}
