//! Coffee Menu Library
//!
//! This library provides an in-memory menu catalog exposed as a JSON REST API.

// Domain modules
pub mod menu;

// Infrastructure
pub mod config;
pub mod router;
pub mod telemetry;
