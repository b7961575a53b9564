use std::collections::VecDeque;
use std::io::{self, Cursor};

use dungeon_engine as de;
use dungeon_engine::repl::{InputEvent, LineSource, PlainInput, run_session};
use dungeon_engine::{Game, View, load_world};

/// Feeds a fixed list of events to the REPL, then reports end of input.
struct ScriptedInput {
    events: VecDeque<InputEvent>,
    prompts: usize,
}

impl ScriptedInput {
    fn lines(lines: &[&str]) -> Self {
        Self {
            events: lines.iter().map(|l| InputEvent::Line((*l).to_string())).collect(),
            prompts: 0,
        }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<InputEvent> {
        self.prompts += 1;
        Ok(self.events.pop_front().unwrap_or(InputEvent::Eof))
    }
}

const WELCOME: &str = "\nWelcome to the Dungeon of Doom!\nType 'help' if you need help.\n\n\
You are at the dungeon entrance. A cold wind blows from within.\nExits: east\n";
const FAREWELL: &str = "Thank you for playing.  Good bye.\n";

fn play<S: LineSource>(input: &mut S) -> (Game, String) {
    let mut game = Game::new(load_world().expect("bundled dungeon"));
    let mut view = View::plain();
    let mut out = Vec::new();
    run_session(&mut game, input, &mut view, "> ", &mut out).expect("session runs");
    (game, String::from_utf8(out).expect("utf8 output"))
}

fn current_symbol(game: &Game) -> String {
    game.current_room().unwrap().symbol().to_string()
}

#[test]
fn bare_quit_ends_session_with_farewell() {
    let mut input = ScriptedInput::lines(&["quit", "look"]);
    let (_, out) = play(&mut input);
    assert_eq!(out, format!("{WELCOME}{FAREWELL}"));
    assert_eq!(input.prompts, 1, "nothing is read after quit");
}

#[test]
fn end_of_input_is_an_implicit_quit() {
    let mut input = ScriptedInput::lines(&["go east"]);
    let (game, out) = play(&mut input);
    assert_eq!(current_symbol(&game), "hall");
    assert!(out.ends_with(FAREWELL));
    assert_eq!(input.prompts, 2);
}

#[test]
fn quit_with_argument_is_ignored() {
    let mut input = ScriptedInput::lines(&["quit now", "quit"]);
    let (_, out) = play(&mut input);
    assert_eq!(out, format!("{WELCOME}Quit what?\n{FAREWELL}"));
}

#[test]
fn east_then_west_returns_to_entrance() {
    let mut input = ScriptedInput::lines(&["go east", "go west", "quit"]);
    let (game, out) = play(&mut input);
    assert_eq!(current_symbol(&game), "entrance");
    assert_eq!(
        out,
        format!(
            "{WELCOME}\
You are in the grand hall, torches lighting up the stone walls.\nExits: east south west\n\
You are at the dungeon entrance. A cold wind blows from within.\nExits: east\n\
{FAREWELL}"
        )
    );
}

#[test]
fn catacomb_is_a_dead_end() {
    let mut input = ScriptedInput::lines(&["go east", "go south", "go down", "look", "go up", "go north", "quit"]);
    let (game, out) = play(&mut input);
    assert_eq!(current_symbol(&game), "catacomb");
    assert!(out.contains("You are in a dark catacomb filled with dead bones.\nExits:\n"));
    assert_eq!(out.matches("There is no door!").count(), 2);
}

#[test]
fn every_direction_from_catacomb_has_no_door() {
    let mut game = Game::new(load_world().unwrap());
    for dir in ["east", "south", "down"] {
        let mut view = View::plain();
        let cmd = de::parse_command(&format!("go {dir}"));
        de::repl::dispatch(&mut game, &mut view, &cmd).unwrap();
    }
    let catacomb = game.current_room_id();
    for dir in ["north", "south", "east", "west", "up", "down"] {
        let mut view = View::plain();
        let state = de::repl::dispatch(&mut game, &mut view, &de::parse_command(&format!("go {dir}"))).unwrap();
        assert!(state.is_playing());
        assert_eq!(view.plain_lines(), vec!["There is no door!"]);
        assert_eq!(game.current_room_id(), catacomb);
    }
}

#[test]
fn unknown_and_blank_lines_keep_playing() {
    let mut input = ScriptedInput::lines(&["", "xyzzy", "go"]);
    let (game, out) = play(&mut input);
    assert_eq!(current_symbol(&game), "entrance");
    assert_eq!(
        out,
        format!("{WELCOME}I don't know what you mean...\nI don't know what you mean...\nGo where?\n{FAREWELL}")
    );
}

#[test]
fn interrupt_cancels_line_and_continues() {
    let mut input = ScriptedInput {
        events: VecDeque::from([InputEvent::Interrupted, InputEvent::Line("look".into())]),
        prompts: 0,
    };
    let (_, out) = play(&mut input);
    assert!(out.starts_with(&format!("{WELCOME}Command canceled.\nYou are at the dungeon entrance.")));
    assert!(out.ends_with(FAREWELL));
}

#[test]
fn help_prints_vocabulary() {
    let mut input = ScriptedInput::lines(&["help"]);
    let (_, out) = play(&mut input);
    assert!(out.contains("Your command words are:\n   go quit help look\n"));
}

#[test]
fn full_tour_reaches_the_throne() {
    let mut input = ScriptedInput::lines(&[
        "go east", "go east", "go north", "go south", "go up", // staircase is one-way
    ]);
    let (game, _) = play(&mut input);
    assert_eq!(current_symbol(&game), "staircase");

    let mut input = ScriptedInput::lines(&["go east", "go south", "go east", "go east"]);
    let (game, out) = play(&mut input);
    assert_eq!(current_symbol(&game), "throne");
    assert!(out.contains("You are in the throne of the Dungeon Lord! His massive shadow looms over you.\nExits: west\n"));
}

#[test]
fn undecodable_input_is_an_unknown_command() {
    let mut prompts = Vec::new();
    let mut input = PlainInput::new(Cursor::new(b"go east\n\xff\xfe look\nlook\nquit\n".to_vec()), &mut prompts);
    let (game, out) = play(&mut input);
    assert_eq!(current_symbol(&game), "hall");
    assert_eq!(
        out,
        format!(
            "{WELCOME}\
You are in the grand hall, torches lighting up the stone walls.\nExits: east south west\n\
I don't know what you mean...\n\
You are in the grand hall, torches lighting up the stone walls.\nExits: east south west\n\
{FAREWELL}"
        )
    );
    drop(input);
    assert_eq!(prompts, b"> > > > ");
}

#[test]
fn missing_directions_have_no_exit_in_any_room() {
    let world = load_world().unwrap();
    assert_eq!(world.rooms.len(), 9);
    for room in world.rooms.values() {
        for dir in ["north", "south", "east", "west", "up", "down"] {
            if !room.exits.contains_key(dir) {
                assert_eq!(room.exit(dir), None, "{} {dir}", room.symbol());
            }
        }
    }
}
