//! # Atrium Service
//!
//! Business logic layer for the Atrium user directory: request validation,
//! id assignment, and the field-merge rules for updates.

pub mod dto;
pub mod user_service;
pub mod user_service_impl;

pub use dto::*;
pub use user_service::*;
pub use user_service_impl::*;
