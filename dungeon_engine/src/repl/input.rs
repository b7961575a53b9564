//! Terminal input handling for the REPL.
//!
//! Wraps rustyline configuration and completion, and falls back to a plain stdin reader when
//! there is no interactive terminal.

use std::borrow::Cow;
use std::fs;
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

/// Outcome of reading a line from the REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Anything the REPL can pull command lines from.
pub trait LineSource {
    /// Show `prompt` and wait for the next line.
    ///
    /// # Errors
    /// - on an unrecoverable read failure
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;

    /// Replace the phrases offered for tab completion. Sources without completion ignore this.
    fn set_completions(&mut self, _terms: Vec<String>) {}
}

type ReplEditor = rustyline::Editor<DungeonHelper, DefaultHistory>;

#[derive(Default)]
struct DungeonHelper {
    terms: Vec<String>,
}

impl Helper for DungeonHelper {}

impl Completer for DungeonHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        Ok((start, complete_terms(&self.terms, &prefix)))
    }
}

impl Hinter for DungeonHelper {
    type Hint = String;
}

impl Highlighter for DungeonHelper {}

impl Validator for DungeonHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn complete_terms(terms: &[String], prefix: &str) -> Vec<Pair> {
    if prefix.is_empty() {
        return Vec::new();
    }
    terms
        .iter()
        .filter(|term| term.starts_with(prefix))
        .map(|term| Pair {
            display: term.clone(),
            replacement: term.clone(),
        })
        .collect()
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available. Without one, or once the
/// editor has failed, lines come from a [`PlainInput`] over locked stdin.
pub struct InputManager {
    editor: Option<RustylineInput>,
    stdin: Option<PlainInput<StdinLock<'static>, Stdout>>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let editor = if io::stdin().is_terminal() {
            RustylineInput::new()
                .inspect(|_| info!("using rustyline-backed REPL input"))
                .inspect_err(|err| warn!("failed to initialize rustyline ({err}), falling back to basic stdin"))
                .ok()
        } else {
            info!("stdin is not a TTY; using basic input mode");
            None
        };

        Self { editor, stdin: None }
    }
}

impl LineSource for InputManager {
    /// Read a line from the editor if there is one. An editor failure drops it for the rest of
    /// the session and the same prompt is retried on plain stdin.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        if let Some(editor) = self.editor.as_mut() {
            match editor.read_line(prompt) {
                Ok(event) => return Ok(event),
                Err(err) => {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.editor = None;
                },
            }
        }
        self.stdin
            .get_or_insert_with(|| PlainInput::new(io::stdin().lock(), io::stdout()))
            .read_line(prompt)
    }

    fn set_completions(&mut self, terms: Vec<String>) {
        if let Some(helper) = self.editor.as_mut().and_then(|input| input.editor.helper_mut()) {
            helper.terms = terms;
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new() -> io::Result<Self> {
        let mut editor = ReplEditor::new().map_err(readline_io_error)?;
        editor.set_helper(Some(DungeonHelper::default()));
        let history_path = history_file_path();
        if let Some(path) = history_path.as_deref() {
            ensure_history_dir(path);
            load_history(&mut editor, path);
        }
        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let line = match self.editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => return Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => return Ok(InputEvent::Eof),
            Err(err) => return Err(readline_io_error(err)),
        };
        if !line.trim().is_empty() {
            self.remember(&line);
        }
        Ok(InputEvent::Line(line))
    }

    /// Append `line` to the history and persist it. Failures only cost history, so they are logged.
    fn remember(&mut self, line: &str) {
        if let Err(err) = self.editor.add_history_entry(line) {
            warn!("failed to append to history: {err}");
        }
        if let Some(path) = self.history_path.as_deref()
            && let Err(err) = self.editor.save_history(path)
        {
            warn!("failed to persist history to {}: {err}", path.display());
        }
    }
}

fn load_history(editor: &mut ReplEditor, path: &Path) {
    match editor.load_history(path) {
        Ok(()) => {},
        Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            info!("no prior history found at {}, starting fresh", path.display());
        },
        Err(err) => warn!("failed to load history from {}: {err}", path.display()),
    }
}

fn readline_io_error(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

/// Line reader for piped or redirected input.
///
/// Prompts are written to `echo`. Lines are read as raw bytes and decoded lossily, so a line that
/// is not valid UTF-8 still reaches the parser (as an unknown command) instead of ending the game.
pub struct PlainInput<R, W> {
    reader: R,
    echo: W,
    buffer: Vec<u8>,
}

impl<R: BufRead, W: Write> PlainInput<R, W> {
    pub fn new(reader: R, echo: W) -> Self {
        Self {
            reader,
            echo,
            buffer: Vec::new(),
        }
    }
}

impl<R: BufRead, W: Write> LineSource for PlainInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        write!(self.echo, "{prompt}")?;
        self.echo.flush()?;

        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(InputEvent::Eof);
        }
        let text = String::from_utf8_lossy(&self.buffer);
        if let Cow::Owned(_) = text {
            warn!("input line was not valid UTF-8; undecodable bytes replaced");
        }
        Ok(InputEvent::Line(strip_line_ending(&text).to_string()))
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    path.push("dungeon_engine");
    path.push("history.txt");
    path
}

/// Create the history file's parent directory. Failure only costs us history, so it is logged.
fn ensure_history_dir(path: &Path) {
    if let Some(dir) = path.parent()
        && let Err(err) = fs::create_dir_all(dir)
    {
        warn!("failed to create history directory {}: {err}", dir.display());
    }
}
