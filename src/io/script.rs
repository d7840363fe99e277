//! Batch script parsing and execution
//!
//! A script is a stream of whitespace-separated tokens. Line breaks carry no
//! meaning beyond error reporting, and `#` comments out the rest of a line.
//! The whole script is parsed before the first statement runs, so a syntax
//! error never leaves half-written output behind.
//!
//! ```text
//! load input.png
//! blur
//! mosaicing 500
//! save out/mosaic.png
//! generate rainbowFlag 70 140 h
//! undo
//! ```

use rand::{SeedableRng, rngs::StdRng};
use std::fmt;
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use std::vec::IntoIter;

use crate::algorithm::Operation;
use crate::io::configuration::{COMMENT_MARKER, SCRIPT_OPENING_COMMANDS};
use crate::io::error::{ImagingError, Result, WithLine, invalid_argument, script_error};
use crate::io::history::History;
use crate::io::image::{load_image, save_image};
use crate::patterns::{Pattern, StripeDirection};
use crate::spatial::PixelGrid;

/// One executable script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the session with an image file
    Load(PathBuf),
    /// Write the current image to a file
    Save(PathBuf),
    /// Replace the current image with a generated pattern
    Generate(Pattern),
    /// Transform the current image
    Transform(Operation),
    /// Step back one edit
    Undo,
    /// Re-apply an undone edit
    Redo,
}

impl Command {
    /// Verb used in error messages
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Load(_) => "load",
            Self::Save(_) => "save",
            Self::Generate(_) => "generate",
            Self::Transform(operation) => operation.name(),
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(path) => write!(f, "load {}", path.display()),
            Self::Save(path) => write!(f, "save {}", path.display()),
            Self::Generate(pattern) => write!(f, "generate {pattern}"),
            Self::Transform(operation) => write!(f, "{operation}"),
            Self::Undo => write!(f, "undo"),
            Self::Redo => write!(f, "redo"),
        }
    }
}

/// A command and the line it started on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// 1-based source line of the command keyword
    pub line: usize,
    /// Parsed command
    pub command: Command,
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    line: usize,
}

fn tokenize(source: &str) -> Vec<Token<'_>> {
    source
        .lines()
        .enumerate()
        .flat_map(|(index, line)| {
            let code = line
                .split_once(COMMENT_MARKER)
                .map_or(line, |(code, _comment)| code);
            code.split_whitespace().map(move |text| Token {
                text,
                line: index + 1,
            })
        })
        .collect()
}

/// Parse a whole script into statements
///
/// # Errors
///
/// Returns a `Script` error naming the line of the first problem, or an
/// `AtLine`-wrapped `InvalidArgument` for a negative size or unknown direction
pub fn parse_script(source: &str) -> Result<Vec<Statement>> {
    let mut parser = Parser {
        tokens: tokenize(source).into_iter().peekable(),
        last_line: 1,
    };

    match parser.tokens.peek() {
        Some(first) if SCRIPT_OPENING_COMMANDS.iter().any(|c| *c == first.text) => {}
        Some(first) => {
            return Err(script_error(
                first.line,
                &format!("script must start with load or generate, found '{}'", first.text),
            ));
        }
        None => {
            return Err(script_error(1, &"script must start with load or generate"));
        }
    }

    let mut statements = Vec::new();
    while let Some(token) = parser.tokens.next() {
        parser.last_line = token.line;
        let command = parser.command(token)?;
        statements.push(Statement {
            line: token.line,
            command,
        });
    }
    Ok(statements)
}

struct Parser<'a> {
    tokens: Peekable<IntoIter<Token<'a>>>,
    last_line: usize,
}

impl<'a> Parser<'a> {
    fn command(&mut self, keyword: Token<'a>) -> Result<Command> {
        let command = match keyword.text {
            "load" => Command::Load(self.file_name("load")?),
            "save" => Command::Save(self.file_name("save")?),
            "blur" => Command::Transform(Operation::Blur),
            "sharpen" => Command::Transform(Operation::Sharpen),
            "greyscale" => Command::Transform(Operation::Greyscale),
            "sepia" => Command::Transform(Operation::Sepia),
            "dithering" => Command::Transform(Operation::Dither),
            "mosaicing" => Command::Transform(Operation::Mosaic {
                seeds: self.integer("mosaicing expects an integer number of seeds")?,
            }),
            "generate" => Command::Generate(self.pattern()?),
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            other => {
                return Err(script_error(
                    keyword.line,
                    &format!("unknown command '{other}'"),
                ));
            }
        };
        Ok(command)
    }

    fn pattern(&mut self) -> Result<Pattern> {
        let kind = self.word("specify what to generate after 'generate'")?;
        let pattern = match kind.text {
            "rainbowFlag" => {
                let usage = "generate rainbowFlag expects height, width and direction ('h' or 'v')";
                let height = self.size("height", usage)?;
                let width = self.size("width", usage)?;
                let direction_token = self.word(usage)?;
                let direction = direction_token
                    .text
                    .parse::<StripeDirection>()
                    .at_line(direction_token.line)?;
                Pattern::RainbowFlag {
                    height,
                    width,
                    direction,
                }
            }
            "checkerboard" => Pattern::Checkerboard {
                square_size: self.size(
                    "square_size",
                    "generate checkerboard expects a square size",
                )?,
            },
            "frenchFlag" | "swissFlag" | "greekFlag" => {
                let usage = "generate flag expects height and width";
                let height = self.size("height", usage)?;
                let width = self.size("width", usage)?;
                match kind.text {
                    "frenchFlag" => Pattern::FrenchFlag { height, width },
                    "swissFlag" => Pattern::SwissFlag { height, width },
                    _ => Pattern::GreekFlag { height, width },
                }
            }
            other => {
                return Err(script_error(
                    kind.line,
                    &format!("cannot generate '{other}'"),
                ));
            }
        };
        Ok(pattern)
    }

    fn word(&mut self, missing: &str) -> Result<Token<'a>> {
        let token = self
            .tokens
            .next()
            .ok_or_else(|| script_error(self.last_line, &missing))?;
        self.last_line = token.line;
        Ok(token)
    }

    fn integer(&mut self, expected: &str) -> Result<i64> {
        let token = self.word(expected)?;
        token
            .text
            .parse::<i64>()
            .map_err(|_not_a_number| script_error(token.line, &expected))
    }

    fn size(&mut self, parameter: &'static str, expected: &str) -> Result<usize> {
        let value = self.integer(expected)?;
        usize::try_from(value)
            .map_err(|_negative| invalid_argument(parameter, &value, &"must not be negative"))
            .at_line(self.last_line)
    }

    fn file_name(&mut self, verb: &str) -> Result<PathBuf> {
        let missing = format!("{verb} must be followed by a file name");
        let token = self.word(&missing)?;
        if !token.text.contains('.') {
            return Err(script_error(
                token.line,
                &format!("{verb} must be followed by a file name with an extension"),
            ));
        }
        Ok(PathBuf::from(token.text))
    }
}

/// Current image, edit history and random source of a running script
#[derive(Debug, Clone)]
pub struct Session {
    history: History,
    rng: StdRng,
}

impl Session {
    /// Create an empty session whose mosaics are seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            history: History::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current image, if one has been loaded or generated
    pub fn current(&self) -> Option<&PixelGrid> {
        self.history.current()
    }

    /// Edit history of the session
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Run one command against the session
    ///
    /// Undo and redo past the ends of the history are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command needs an image and none is loaded
    /// - An engine operation rejects its parameters
    /// - Loading or saving a file fails
    pub fn execute(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Load(path) => {
                let grid = load_image(path)?;
                self.history.reset(grid);
            }
            Command::Save(path) => {
                save_image(require_current(&self.history, command)?, path)?;
            }
            Command::Generate(pattern) => {
                let grid = pattern.render()?;
                self.history.record(grid);
            }
            Command::Transform(operation) => {
                let current = require_current(&self.history, command)?;
                let grid = operation.apply(current, &mut self.rng)?;
                self.history.record(grid);
            }
            Command::Undo => {
                self.history.undo();
            }
            Command::Redo => {
                self.history.redo();
            }
        }
        Ok(())
    }
}

fn require_current<'h>(history: &'h History, command: &Command) -> Result<&'h PixelGrid> {
    history.current().ok_or(ImagingError::EmptySession {
        operation: command.verb(),
    })
}

/// Parses and runs batch scripts against a [`Session`]
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    session: Session,
}

impl ScriptRunner {
    /// Create a runner with a fresh session seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            session: Session::new(seed),
        }
    }

    /// Session state after the statements run so far
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the runner and keep its session
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Parse and run a script held in memory
    ///
    /// # Errors
    ///
    /// Returns the first parse error, or the first statement failure tagged with its line
    pub fn run_source(&mut self, source: &str) -> Result<()> {
        let statements = parse_script(source)?;
        self.run_statements(&statements, |_, _| {})
    }

    /// Read, parse and run a script file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, fails to parse, or a statement fails
    pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let statements = read_script(path)?;
        self.run_statements(&statements, |_, _| {})
    }

    /// Run already-parsed statements in order
    ///
    /// `on_step` is called with the index and statement after each statement succeeds.
    ///
    /// # Errors
    ///
    /// Stops at the first failing statement and returns its error tagged with its line
    pub fn run_statements<F>(&mut self, statements: &[Statement], mut on_step: F) -> Result<()>
    where
        F: FnMut(usize, &Statement),
    {
        for (index, statement) in statements.iter().enumerate() {
            self.session
                .execute(&statement.command)
                .at_line(statement.line)?;
            on_step(index, statement);
        }
        Ok(())
    }
}

/// Read and parse a script file without running it
///
/// # Errors
///
/// Returns a `FileSystem` error if the file cannot be read, or the parse error
pub fn read_script<P: AsRef<Path>>(path: P) -> Result<Vec<Statement>> {
    let path_ref = path.as_ref();
    let source = std::fs::read_to_string(path_ref).map_err(|e| ImagingError::FileSystem {
        path: path_ref.to_path_buf(),
        operation: "read script",
        source: e,
    })?;
    parse_script(&source)
}
