//! Data structures representing the dungeon and the player's place in it.
//!
//! [`DungeonWorld`] is the room graph: built once at startup and read-only afterwards.
//! [`Game`] pairs it with the only piece of mutable state, the room the player is in.

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use log::info;
use uuid::Uuid;

use crate::room::Room;

/// The complete room graph.
#[derive(Debug, Clone)]
pub struct DungeonWorld {
    pub title: String,
    pub rooms: HashMap<Uuid, Room>,
    pub start_room: Uuid,
}

impl DungeonWorld {
    /// Create a new world with no rooms.
    pub fn new_empty(title: impl Into<String>) -> DungeonWorld {
        let world = Self {
            title: title.into(),
            rooms: HashMap::new(),
            start_room: Uuid::nil(),
        };
        info!("new, empty 'DungeonWorld' created");
        world
    }

    /// Add a room to the graph, returning its id.
    pub fn add_room(&mut self, room: Room) -> Uuid {
        let id = room.id();
        self.rooms.insert(id, room);
        id
    }

    /// Register a one-way exit from `from` to `to` during setup.
    ///
    /// # Errors
    /// - if either room id is not part of the world
    pub fn connect(&mut self, from: Uuid, direction: &str, to: Uuid) -> Result<()> {
        if !self.rooms.contains_key(&to) {
            return Err(anyhow!("exit '{direction}' targets unknown room ({to})"));
        }
        let room = self
            .rooms
            .get_mut(&from)
            .ok_or_else(|| anyhow!("cannot add exit '{direction}': no room ({from})"))?;
        room.set_exit(direction, to);
        Ok(())
    }

    pub fn room(&self, id: Uuid) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Find a room by the symbol it was defined with.
    pub fn room_by_symbol(&self, symbol: &str) -> Option<&Room> {
        self.rooms.values().find(|room| room.symbol == symbol)
    }

    /// Obtain a reference to a room that is expected to exist.
    /// # Errors
    /// - if the room's uuid is not found
    pub fn room_ref(&self, id: Uuid) -> Result<&Room> {
        self.rooms
            .get(&id)
            .ok_or_else(|| anyhow!("room UUID ({id}) not found in world"))
    }
}

/// A game in progress: the dungeon plus the player's current room.
#[derive(Debug, Clone)]
pub struct Game {
    pub world: DungeonWorld,
    current_room: Uuid,
}

impl Game {
    /// Start a new game in the world's start room.
    pub fn new(world: DungeonWorld) -> Self {
        let current_room = world.start_room;
        Self { world, current_room }
    }

    pub fn current_room_id(&self) -> Uuid {
        self.current_room
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the current room's uuid is not found in the world
    pub fn current_room(&self) -> Result<&Room> {
        self.world.room_ref(self.current_room)
    }

    /// Try to leave the current room in `direction`.
    ///
    /// Returns the new room if an exit was taken; `None` leaves the player where they were.
    /// # Errors
    /// - if the current room or the exit's destination is missing from the world
    pub fn travel(&mut self, direction: &str) -> Result<Option<&Room>> {
        let leaving = self.current_room()?;
        let Some(destination) = leaving.exit(direction) else {
            return Ok(None);
        };
        let from_symbol = leaving.symbol().to_string();
        let arriving = self
            .world
            .rooms
            .get(&destination)
            .ok_or_else(|| anyhow!("invalid move destination ({destination})"))?;
        info!("player moved {direction}: {from_symbol} -> {}", arriving.symbol());
        self.current_room = destination;
        Ok(Some(arriving))
    }
}
