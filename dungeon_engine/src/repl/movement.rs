//! `repl::movement` module
//!
//! Contains the repl loop handler for the command that changes the player's location.

use anyhow::Result;
use log::info;

use crate::view::{View, ViewItem};
use crate::world::Game;

/// Move the player through the exit named by `direction`, if the current room has one.
///
/// # Errors
/// - if the current room or the exit's destination is missing from the world
pub fn go_handler(game: &mut Game, view: &mut View, direction: Option<&str>) -> Result<()> {
    let Some(direction) = direction else {
        view.push(ViewItem::Error("Go where?".to_string()));
        return Ok(());
    };

    if let Some(room) = game.travel(direction)? {
        view.push(ViewItem::RoomDescription(room.long_description()));
    } else {
        info!("player tried nonexistent exit '{direction}'");
        view.push(ViewItem::Error("There is no door!".to_string()));
    }
    Ok(())
}
