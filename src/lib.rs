//! Wren — a lightweight desktop web browser: storage layer and local HTTP facade.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod config;
pub mod database;
pub mod platform;
pub mod scheme;
pub mod server;
pub mod stores;
pub mod types;
