use std::collections::HashSet;

use thiserror::Error;

use crate::*;

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
    #[error("missing {kind} '{id}' ({context})")]
    MissingReference {
        kind: &'static str,
        id: String,
        context: String,
    },
    #[error("invalid value ({context})")]
    InvalidValue { context: String },
}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// One-way exits and rooms that cannot be reached from the start room are
/// allowed and not reported.
///
/// ```
/// use dungeon_data::{GameDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         start_room: "start".into(),
///     },
///     rooms: vec![
///         RoomDef::new("start", "in a room.").with_exit("down", "pit"),
///         RoomDef::new("pit", "in a pit with no way out."),
///     ],
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut rooms = HashSet::new();

    for room in &world.rooms {
        if !rooms.insert(room.id.as_str()) {
            errors.push(ValidationError::DuplicateId {
                kind: "room",
                id: room.id.clone(),
            });
        }
    }

    if world.game.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game start room missing".to_string(),
        });
    } else {
        check_ref(
            &world.game.start_room,
            &rooms,
            "game start room".to_string(),
            &mut errors,
        );
    }

    for room in &world.rooms {
        let mut directions = HashSet::new();
        for exit in &room.exits {
            if exit.direction.trim().is_empty() || exit.direction.contains(char::is_whitespace) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' exit direction '{}' must be a single word", room.id, exit.direction),
                });
            }
            if !directions.insert(exit.direction.as_str()) {
                errors.push(ValidationError::DuplicateId {
                    kind: "exit",
                    id: format!("{}.{}", room.id, exit.direction),
                });
            }
            check_ref(
                &exit.to,
                &rooms,
                format!("room '{}' exit '{}'", room.id, exit.direction),
                &mut errors,
            );
        }
    }

    errors
}

fn check_ref(id: &str, set: &HashSet<&str>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind: "room",
            id: id.to_string(),
            context,
        });
    }
}
