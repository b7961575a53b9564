//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which collects them during a turn and
//! renders them when the turn ends. Each variant knows its plain text; the `View` decides
//! whether to add color and wrapping on top of that.

/// Each of the kinds of message that may be shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItem {
    /// Opening banner shown once before the first prompt.
    Banner { title: String },
    /// Player-facing complaint about their input ("There is no door!").
    Error(String),
    /// Message from the engine itself rather than the game world.
    EngineMessage(String),
    /// Closing line after the game is finished.
    Farewell(String),
    Help {
        basic_text: String,
        commands: Vec<String>,
    },
    /// Long description of a room, as produced by `Room::long_description`.
    RoomDescription(String),
}

impl ViewItem {
    /// Plain-text lines for this item, with no styling applied.
    pub fn plain_lines(&self) -> Vec<String> {
        match self {
            ViewItem::Banner { title } => vec![
                String::new(),
                format!("Welcome to the {title}!"),
                "Type 'help' if you need help.".to_string(),
                String::new(),
            ],
            ViewItem::Error(msg) | ViewItem::EngineMessage(msg) | ViewItem::Farewell(msg) => vec![msg.clone()],
            ViewItem::Help { basic_text, commands } => {
                let mut lines: Vec<String> = basic_text.lines().map(str::to_string).collect();
                lines.push(String::new());
                lines.push("Your command words are:".to_string());
                lines.push(format!("   {}", commands.join(" ")));
                lines
            },
            ViewItem::RoomDescription(text) => text.lines().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_has_blank_lines_around_it() {
        let lines = ViewItem::Banner {
            title: "Dungeon of Doom".into(),
        }
        .plain_lines();
        assert_eq!(
            lines,
            vec!["", "Welcome to the Dungeon of Doom!", "Type 'help' if you need help.", ""]
        );
    }

    #[test]
    fn help_lists_command_words_on_one_line() {
        let lines = ViewItem::Help {
            basic_text: "Lost.".into(),
            commands: vec!["go".into(), "quit".into()],
        }
        .plain_lines();
        assert_eq!(lines, vec!["Lost.", "", "Your command words are:", "   go quit"]);
    }
}
