//! # Atrium Config
//!
//! Configuration management for the Atrium user directory: typed
//! configuration structures plus a layered loader (TOML files and
//! `ATRIUM__`-prefixed environment variables).

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
