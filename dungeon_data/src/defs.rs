use serde::Deserialize;

/// Stable identifier used for room references within a `WorldDef`.
pub type Id = String;

/// Top-level room graph definition loaded by the engine.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameDef {
    pub title: String,
    pub start_room: Id,
}

/// A single location in the dungeon.
///
/// `desc` is written to follow "You are ", e.g. "in the grand hall."
#[derive(Debug, Clone, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub desc: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
}

/// A directed edge from the owning room to another room.
#[derive(Debug, Clone, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: Id,
}

impl RoomDef {
    /// Convenience constructor for a room with no exits.
    pub fn new(id: impl Into<Id>, desc: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: desc.into(),
            exits: Vec::new(),
        }
    }

    /// Builder-style helper adding an exit toward `to`.
    #[must_use]
    pub fn with_exit(mut self, direction: impl Into<String>, to: impl Into<Id>) -> Self {
        self.exits.push(ExitDef {
            direction: direction.into(),
            to: to.into(),
        });
        self
    }
}
