//! Menu Catalog Domain Module
//!
//! This module contains all menu catalog logic, including:
//! - Domain models (MenuItem, MenuItemInput)
//! - Business logic helpers (validation, default menu)
//! - Application state and the in-memory store
//! - REST API handlers

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use error::MenuError;
pub use handlers::routes;
pub use state::{AppState, MenuStore, SharedState};
