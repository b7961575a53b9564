//! Room definitions.
//!
//! Every location the player can stand in is a `Room`: a fixed description plus a table of
//! exits keyed by direction. Exits are one-way edges; a passage that can be walked both ways
//! is simply declared on both rooms.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::idgen::{NAMESPACE_ROOM, uuid_from_token};

/// Any visitable location in the dungeon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Uuid,
    pub symbol: String,
    pub description: String,
    pub exits: BTreeMap<String, Uuid>,
}

impl Room {
    /// Create a room with no exits. The id is derived from `symbol`.
    pub fn new(symbol: impl Into<String>, description: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            id: uuid_from_token(&NAMESPACE_ROOM, &symbol),
            symbol,
            description: description.into(),
            exits: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Register (or replace) the exit leading `direction` to the room with id `to`.
    pub fn set_exit(&mut self, direction: impl Into<String>, to: Uuid) {
        self.exits.insert(direction.into(), to);
    }

    /// Look up the room reached by going `direction`. Unknown directions yield `None`.
    pub fn exit(&self, direction: &str) -> Option<Uuid> {
        self.exits.get(direction).copied()
    }

    /// Exit directions in sorted order.
    pub fn exit_directions(&self) -> impl Iterator<Item = &str> {
        self.exits.keys().map(String::as_str)
    }

    /// "Exits:" followed by each available direction, e.g. `Exits: east west`.
    pub fn exit_line(&self) -> String {
        self.exit_directions().fold(String::from("Exits:"), |mut line, dir| {
            line.push(' ');
            line.push_str(dir);
            line
        })
    }

    /// Full text shown on arrival or on `look`.
    pub fn long_description(&self) -> String {
        format!("You are {}\n{}", self.description, self.exit_line())
    }
}
