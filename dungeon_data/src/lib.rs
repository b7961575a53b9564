//! Shared data model for Dungeon of Doom room graphs.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_world};
