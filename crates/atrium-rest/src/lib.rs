//! # Atrium REST
//!
//! REST API layer using Axum for the Atrium user directory.
//! Exposes the user CRUD endpoints under `/api/users` plus a health check.

pub mod controllers;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
