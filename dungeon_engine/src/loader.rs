//! Loader utilities for building a `DungeonWorld` from its serialized definition.
//!
//! The dungeon ships inside the binary as TOML (`data/dungeon.toml`), is validated with
//! [`dungeon_data::validate_world`], and then converted into runtime [`Room`](crate::Room)s.

pub mod worlddef;

use anyhow::{Context, Result};
use dungeon_data::{ValidationError, WorldDef};
use log::info;
use thiserror::Error;

use crate::loader::worlddef::{build_world_from_def, parse_worlddef};
use crate::world::DungeonWorld;

/// The bundled room graph.
pub const DUNGEON_DEF: &str = include_str!("../data/dungeon.toml");

/// Reasons a world definition can be rejected.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("parsing world definition: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("world definition failed validation:\n{}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load the bundled Dungeon of Doom.
///
/// # Errors
/// Only if the bundled definition is malformed.
pub fn load_world() -> Result<DungeonWorld> {
    let world = load_world_from_str(DUNGEON_DEF).context("while loading bundled dungeon definition")?;
    info!("{} rooms added to DungeonWorld", world.rooms.len());
    Ok(world)
}

/// Parse, validate, and build a world from TOML text.
///
/// # Errors
/// Returns an error on TOML syntax errors, validation failures, or dangling references.
pub fn load_world_from_str(text: &str) -> Result<DungeonWorld> {
    let def = parse_worlddef(text)?;
    validate_worlddef(&def)?;
    build_world_from_def(&def).context("while building world from definition")
}

/// Validate the definition and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<(), LoadError> {
    let errors = dungeon_data::validate_world(def);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(LoadError::Invalid(errors))
    }
}
