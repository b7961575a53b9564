//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module drives the loop and its submodules
//! implement the command handlers that read or move the player's position in the [`Game`].

pub mod input;
pub mod look;
pub mod movement;
pub mod system;

pub use input::{InputEvent, InputManager, LineSource, PlainInput};
pub use look::*;
pub use movement::*;
pub use system::*;

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::info;
use variantly::Variantly;

use crate::command::{Command, CommandWord, parse_command};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::Game;

/// Prompt shown before each command.
pub const PROMPT: &str = "> ";

/// Whether the loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum GameState {
    Playing,
    Finished,
}

/// Run the game on the terminal until the player quits or input runs out.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn run_repl(game: &mut Game) -> Result<()> {
    let mut input = InputManager::new();
    let mut view = View::new();
    let prompt = PROMPT.prompt_style().to_string();
    run_session(game, &mut input, &mut view, &prompt, &mut io::stdout())
}

/// Run a complete session against any line source and output sink.
///
/// Prints the welcome banner, then reads and dispatches one command per line until a bare
/// `quit`, and finally prints the farewell. End of input counts as a bare `quit`.
///
/// # Errors
/// - if reading input or writing output fails
/// - if a handler hits a room that is not in the world
pub fn run_session<S, W>(game: &mut Game, input: &mut S, view: &mut View, prompt: &str, out: &mut W) -> Result<()>
where
    S: LineSource,
    W: Write,
{
    welcome_handler(game, view)?;
    view.flush_to(out).context("writing welcome")?;

    loop {
        input.set_completions(completion_terms(game)?);
        let line = match input.read_line(prompt).context("reading player input")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => {
                info!("end of input, treating as quit");
                CommandWord::Quit.to_string()
            },
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush_to(out)?;
                continue;
            },
        };

        let command = parse_command(&line);
        let state = dispatch(game, view, &command)?;
        view.flush_to(out)?;
        if state.is_finished() {
            break;
        }
    }

    farewell_handler(view);
    view.flush_to(out).context("writing farewell")?;
    Ok(())
}

/// Execute one parsed command against the game.
///
/// # Errors
/// - if the current room (or an exit's destination) is missing from the world
pub fn dispatch(game: &mut Game, view: &mut View, command: &Command) -> Result<GameState> {
    let state = match command.word() {
        CommandWord::Help => {
            help_handler(view);
            GameState::Playing
        },
        CommandWord::Look => {
            look_handler(game, view)?;
            GameState::Playing
        },
        CommandWord::Go => {
            go_handler(game, view, command.second_word())?;
            GameState::Playing
        },
        CommandWord::Quit => quit_handler(view, command.second_word()),
        CommandWord::Unknown => {
            unknown_handler(view, command);
            GameState::Playing
        },
    };
    Ok(state)
}

/// Phrases offered for tab completion in the current room: every command word plus `go <exit>`.
///
/// # Errors
/// - if the current room is missing from the world
pub fn completion_terms(game: &Game) -> Result<Vec<String>> {
    let room = game.current_room()?;
    let mut terms: Vec<String> = CommandWord::VOCABULARY.iter().map(ToString::to_string).collect();
    terms.extend(room.exit_directions().map(|dir| format!("{} {dir}", CommandWord::Go)));
    terms.sort_unstable();
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_world;

    fn game() -> Game {
        Game::new(load_world().unwrap())
    }

    fn run(game: &mut Game, line: &str) -> (GameState, Vec<String>) {
        let mut view = View::plain();
        let state = dispatch(game, &mut view, &parse_command(line)).unwrap();
        (state, view.plain_lines())
    }

    #[test]
    fn every_non_quit_command_keeps_playing() {
        let mut game = game();
        for line in ["help", "look", "go", "go nowhere", "", "dance", "quit now"] {
            assert_eq!(run(&mut game, line).0, GameState::Playing, "{line:?}");
        }
    }

    #[test]
    fn bare_quit_finishes_without_output() {
        let mut game = game();
        assert_eq!(run(&mut game, "quit"), (GameState::Finished, Vec::new()));
    }

    #[test]
    fn empty_line_is_not_understood() {
        let mut game = game();
        assert_eq!(run(&mut game, "   ").1, vec!["I don't know what you mean..."]);
    }

    #[test]
    fn completions_follow_current_room() {
        let mut game = game();
        assert_eq!(
            completion_terms(&game).unwrap(),
            vec!["go", "go east", "help", "look", "quit"]
        );
        run(&mut game, "go east");
        let terms = completion_terms(&game).unwrap();
        assert!(terms.contains(&"go south".to_string()));
        assert!(terms.contains(&"go west".to_string()));
    }
}
