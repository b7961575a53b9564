//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.
//! `colored` already honors `NO_COLOR` and `CLICOLOR_FORCE`.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn banner_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn exits_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn help_style(&self) -> ColoredString;
    fn engine_style(&self) -> ColoredString;
    fn farewell_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn banner_style(&self) -> ColoredString {
        self.bold().truecolor(223, 77, 10)
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn exits_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn help_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn engine_style(&self) -> ColoredString {
        self.dimmed().truecolor(75, 80, 75)
    }
    fn farewell_style(&self) -> ColoredString {
        self.bold().truecolor(220, 40, 220)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(75, 180, 255)
    }
}

impl GameStyle for String {
    fn banner_style(&self) -> ColoredString {
        self.as_str().banner_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn exits_style(&self) -> ColoredString {
        self.as_str().exits_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn help_style(&self) -> ColoredString {
        self.as_str().help_style()
    }
    fn engine_style(&self) -> ColoredString {
        self.as_str().engine_style()
    }
    fn farewell_style(&self) -> ColoredString {
        self.as_str().farewell_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}
