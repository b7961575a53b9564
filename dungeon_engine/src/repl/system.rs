//! `repl::system` module
//!
//! Handlers for the commands that are about the game itself rather than the dungeon:
//! help, quit, the opening banner and the closing farewell.

use anyhow::Result;
use log::info;

use crate::command::{Command, CommandWord};
use crate::repl::GameState;
use crate::view::{View, ViewItem};
use crate::world::Game;

const HELP_TEXT: &str = "You are lost. You are alone. You wander\naround in the dungeon.";
const UNKNOWN_COMMAND: &str = "I don't know what you mean...";
const FAREWELL: &str = "Thank you for playing.  Good bye.";

/// Show the welcome banner followed by the starting room.
///
/// # Errors
/// - if the start room is missing from the world
pub fn welcome_handler(game: &Game, view: &mut View) -> Result<()> {
    view.push(ViewItem::Banner {
        title: game.world.title.clone(),
    });
    view.push(ViewItem::RoomDescription(game.current_room()?.long_description()));
    Ok(())
}

/// Show the help text and the list of command words.
pub fn help_handler(view: &mut View) {
    view.push(ViewItem::Help {
        basic_text: HELP_TEXT.to_string(),
        commands: CommandWord::VOCABULARY.iter().map(|word| word.to_string()).collect(),
    });
}

/// Quit the game, unless the player said something after "quit".
pub fn quit_handler(view: &mut View, second_word: Option<&str>) -> GameState {
    if let Some(what) = second_word {
        info!("ignoring malformed quit ('quit {what}')");
        view.push(ViewItem::Error("Quit what?".to_string()));
        GameState::Playing
    } else {
        info!("player quit");
        GameState::Finished
    }
}

/// Respond to input whose first word is not in the vocabulary.
pub fn unknown_handler(view: &mut View, command: &Command) {
    info!("unrecognized command (second word: {:?})", command.second_word());
    view.push(ViewItem::Error(UNKNOWN_COMMAND.to_string()));
}

/// Say goodbye once the game is finished.
pub fn farewell_handler(view: &mut View) {
    view.push(ViewItem::Farewell(FAREWELL.to_string()));
}
