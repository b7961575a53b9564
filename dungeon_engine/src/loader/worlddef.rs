//! `WorldDef` parsing and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into a runtime `DungeonWorld`.

use anyhow::{Context, Result};
use dungeon_data::{RoomDef, WorldDef};

use crate::loader::LoadError;
use crate::room::Room;
use crate::world::DungeonWorld;

/// Parse a `WorldDef` from TOML text.
///
/// # Errors
/// - on malformed TOML or missing required fields
pub fn parse_worlddef(text: &str) -> Result<WorldDef, LoadError> {
    Ok(toml::from_str(text)?)
}

/// Convert a validated `WorldDef` into a `DungeonWorld`.
///
/// Rooms are registered first so that exits may refer to rooms declared later in the file.
///
/// # Errors
/// - if an exit or the start room refers to a room that was not defined
pub fn build_world_from_def(def: &WorldDef) -> Result<DungeonWorld> {
    let mut world = DungeonWorld::new_empty(def.game.title.clone());

    for room_def in &def.rooms {
        world.add_room(room_from_def(room_def));
    }

    for room_def in &def.rooms {
        let from = symbol_id(&world, &room_def.id)?;
        for exit in &room_def.exits {
            let to = symbol_id(&world, &exit.to)
                .with_context(|| format!("exit '{}' from room '{}'", exit.direction, room_def.id))?;
            world.connect(from, &exit.direction, to)?;
        }
    }

    world.start_room = symbol_id(&world, &def.game.start_room).context("resolving start room")?;
    Ok(world)
}

fn room_from_def(def: &RoomDef) -> Room {
    Room::new(def.id.clone(), def.desc.clone())
}

fn symbol_id(world: &DungeonWorld, symbol: &str) -> Result<uuid::Uuid> {
    world
        .room_by_symbol(symbol)
        .map(Room::id)
        .with_context(|| format!("no room defined with id '{symbol}'"))
}
