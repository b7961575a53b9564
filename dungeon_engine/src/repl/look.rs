//! Observation handler: describes the player's surroundings without changing anything.

use anyhow::Result;
use log::info;

use crate::view::{View, ViewItem};
use crate::world::Game;

/// Shows the long description of the current room.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn look_handler(game: &Game, view: &mut View) -> Result<()> {
    let room = game.current_room()?;
    view.push(ViewItem::RoomDescription(room.long_description()));
    info!("player looked around {}", room.symbol());
    Ok(())
}
