//! View module.
//! Rather than printing to the console from each handler, handlers push [`ViewItem`]s here and the
//! REPL flushes them once per turn.
//!
//! In [`ViewMode::Styled`] the output is colored and long descriptions are wrapped to the
//! terminal width. [`ViewMode::Plain`] writes the exact text with no decoration, which is
//! what scripted sessions and tests compare against.

pub mod view_item;

use std::io::{self, Write};

use textwrap::{fill, termwidth};

use crate::style::GameStyle;
pub use view_item::ViewItem;

/// How `View` renders its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Styled,
    Plain,
}

/// View aggregates the messages produced during one pass through the REPL and then displays them.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub mode: ViewMode,
    pub items: Vec<ViewItem>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view that styles its output.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            mode: ViewMode::Styled,
            items: Vec::new(),
        }
    }

    /// Create a new empty view that writes undecorated text.
    pub fn plain() -> Self {
        Self {
            mode: ViewMode::Plain,
            ..Self::new()
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Plain-text lines for everything currently queued.
    pub fn plain_lines(&self) -> Vec<String> {
        self.items.iter().flat_map(ViewItem::plain_lines).collect()
    }

    /// Display everything queued this turn on `out` (usually stdout) and clear the queue.
    ///
    /// # Errors
    /// - on failure to write to `out`
    pub fn flush_to<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        // re-check terminal width in case it's been resized
        if self.mode == ViewMode::Styled {
            self.width = termwidth();
        }

        for item in &self.items {
            match self.mode {
                ViewMode::Plain => {
                    for line in item.plain_lines() {
                        writeln!(out, "{line}")?;
                    }
                },
                ViewMode::Styled => self.write_styled(out, item)?,
            }
        }
        out.flush()?;

        // clear the buffer for the next turn
        self.items.clear();
        Ok(())
    }

    fn write_styled<W: Write>(&self, out: &mut W, item: &ViewItem) -> io::Result<()> {
        match item {
            ViewItem::Banner { .. } => {
                for line in item.plain_lines() {
                    writeln!(out, "{}", line.banner_style())?;
                }
            },
            ViewItem::RoomDescription(_) => {
                for line in item.plain_lines() {
                    if line.starts_with("Exits:") {
                        writeln!(out, "{}", line.exits_style())?;
                    } else {
                        writeln!(out, "{}", fill(&line, self.width).description_style())?;
                    }
                }
            },
            ViewItem::Help { .. } => {
                for line in item.plain_lines() {
                    writeln!(out, "{}", line.help_style())?;
                }
            },
            ViewItem::Error(msg) => writeln!(out, "{}", msg.error_style())?,
            ViewItem::EngineMessage(msg) => writeln!(out, "{}", msg.engine_style())?,
            ViewItem::Farewell(msg) => writeln!(out, "{}", msg.farewell_style())?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_flush_writes_exact_text_and_clears() {
        let mut view = View::plain();
        view.push(ViewItem::RoomDescription("You are in a hall.\nExits: east".into()));
        view.push(ViewItem::Error("There is no door!".into()));

        let mut out = Vec::new();
        view.flush_to(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "You are in a hall.\nExits: east\nThere is no door!\n"
        );
        assert!(view.items.is_empty());
    }

    #[test]
    fn empty_flush_writes_nothing() {
        let mut view = View::plain();
        let mut out = Vec::new();
        view.flush_to(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn styled_flush_keeps_the_words() {
        colored::control::set_override(false);
        let mut view = View::new();
        view.width = 80;
        view.push(ViewItem::Farewell("Good bye.".into()));

        let mut out = Vec::new();
        view.flush_to(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Good bye."));
    }
}
