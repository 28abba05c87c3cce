//! # Atrium Repository
//!
//! Storage layer for the Atrium user directory: the [`UserRepository`]
//! capability trait and the in-memory backend that currently implements it.
//! A persistent backend can implement the same trait without touching the
//! service or REST layers.

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
