//! Menu State Management
//!
//! This module owns the in-memory menu: the ordered item list and the id
//! sequence. One store instance is built at startup and shared with every
//! request through [`SharedState`].

use super::{
    error::MenuError,
    helpers::{default_menu, validate_candidate},
    models::{MenuItem, MenuItemInput},
};
use parking_lot::RwLock;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};
use tracing::debug;

// =============================================================================
// Menu Store
// =============================================================================

/// In-memory authority for menu items and id assignment.
///
/// Every operation takes the same lock, so at most one writer touches the
/// list at a time. Ids are handed out while the write lock is held, which
/// keeps insertion order and id order identical.
#[derive(Debug, Default)]
pub struct MenuStore {
    items: RwLock<Vec<MenuItem>>,
    last_id: AtomicI64,
}

impl MenuStore {
    /// Creates an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with the default menu (ids 1, 2, 3).
    pub fn with_defaults() -> Self {
        let store = Self::new();
        for item in default_menu() {
            store.insert(item);
        }
        store
    }

    /// Returns every item in insertion order.
    pub fn list(&self) -> Vec<MenuItem> {
        self.items.read().clone()
    }

    /// Returns the item with the given id.
    pub fn get(&self, id: i64) -> Result<MenuItem, MenuError> {
        self.items
            .read()
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(MenuError::NotFound(id))
    }

    /// Validates the candidate, then stores it under the next sequence value.
    pub fn create(&self, candidate: MenuItemInput) -> Result<MenuItem, MenuError> {
        validate_candidate(&candidate)?;
        Ok(self.insert(candidate))
    }

    /// Replaces every field of item `id` with `replacement`, keeping its
    /// position in the list.
    ///
    /// No validation is applied here, unlike [`MenuStore::create`]: a blank
    /// name or non-positive price is accepted as-is.
    pub fn update(&self, id: i64, replacement: MenuItemInput) -> Result<MenuItem, MenuError> {
        let mut items = self.items.write();
        let slot = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(MenuError::NotFound(id))?;

        *slot = replacement.into_item(id);
        debug!(id, name = %slot.name, "menu item updated");
        Ok(slot.clone())
    }

    /// Removes the item with the given id. Returns whether anything was removed.
    pub fn delete(&self, id: i64) -> bool {
        let mut items = self.items.write();
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                debug!(id, "menu item deleted");
                true
            }
            None => false,
        }
    }

    /// Number of items currently on the menu.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// True when the menu holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn insert(&self, candidate: MenuItemInput) -> MenuItem {
        let mut items = self.items.write();
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let item = candidate.into_item(id);
        items.push(item.clone());
        debug!(id, name = %item.name, "menu item created");
        item
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state handed to every request handler
#[derive(Debug, Default)]
pub struct AppState {
    /// The menu catalog
    pub menu: MenuStore,
}

impl AppState {
    /// Wraps an already constructed store
    pub fn new(menu: MenuStore) -> Self {
        Self { menu }
    }

    /// State seeded with the default menu
    pub fn with_defaults() -> Self {
        Self::new(MenuStore::with_defaults())
    }
}
