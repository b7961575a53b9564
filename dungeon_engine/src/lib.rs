#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const DUNGEON_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod idgen;
pub mod loader;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use command::{Command, CommandWord, parse_command};
pub use loader::load_world;
pub use repl::{GameState, run_repl};
pub use room::Room;
pub use view::{View, ViewItem, ViewMode};
pub use world::{DungeonWorld, Game};
