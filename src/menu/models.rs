//! Menu Domain Models
//!
//! This module contains the data structures exchanged by the menu API:
//! the stored entity and the request body it is built from.

use serde::{Deserialize, Serialize};

// =============================================================================
// Menu Domain Models
// =============================================================================

/// Returns the default availability (true) for menu items
fn default_available() -> bool {
    true
}

/// A sellable catalog entry as stored and returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Identifier assigned by the store, never taken from the caller
    pub id: i64,

    /// Display name of the item
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Free text description
    pub description: String,

    /// Free text category (e.g. "Coffee")
    pub category: String,

    /// Whether the item can currently be ordered
    pub available: bool,
}

/// Request body for create and update.
///
/// Same field set as [`MenuItem`] minus the identifier. An `id` sent by the
/// caller is silently dropped during decoding.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MenuItemInput {
    /// Display name of the item
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Free text description (defaults to empty)
    #[serde(default)]
    pub description: String,

    /// Free text category (defaults to empty)
    #[serde(default)]
    pub category: String,

    /// Availability flag (defaults to true)
    #[serde(default = "default_available")]
    pub available: bool,
}

impl MenuItemInput {
    /// Builds the stored entity by attaching the given identifier.
    pub fn into_item(self, id: i64) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            category: self.category,
            available: self.available,
        }
    }
}
