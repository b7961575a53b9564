#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Dungeon of Doom **
//! Walk the rooms of a small dungeon from the terminal.

use dungeon_engine::{DUNGEON_VERSION, Game, load_world, run_repl};

use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading dungeon (v{DUNGEON_VERSION})...");
    let world = load_world().context("while loading DungeonWorld")?;
    info!("DungeonWorld '{}' loaded successfully.", world.title);

    let mut game = Game::new(world);
    info!("Starting the game!");
    run_repl(&mut game)
}
