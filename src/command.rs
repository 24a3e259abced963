//! The line-oriented command protocol spoken on top of a [`LazyTree`].
//!
//! Every input line maps to one [`Command`], and every command produces
//! exactly one [`Reply`] line. Errors never stop the stream: a line that
//! cannot be understood is echoed back in an `Error in Line:` reply, and a
//! key outside of `[1, 99]` produces the fixed range error reply, whichever
//! command carried it.

use std::{
    fmt,
    io::{BufRead, Write},
    num::IntErrorKind,
};

use log::{debug, warn};

use crate::prelude::*;

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Reply emitted for keys outside of `[1, 99]`. The wording (including the
/// mention of `insert`) is the same for every command.
pub const RANGE_ERROR_MESSAGE: &str = "Error in insert: IllegalArgumentException raised";

pub const LINE_ERROR_PREFIX: &str = "Error in Line: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(i64),
    Delete(i64),
    Contains(i64),
    PrintTree,
    Height,
    Size,
    FindMin,
    FindMax,
}

const KEYED_COMMANDS: [(&str, fn(i64) -> Command); 3] = [
    ("Insert:", Command::Insert),
    ("Delete:", Command::Delete),
    ("Contains:", Command::Contains),
];

const BARE_COMMANDS: [(&str, Command); 5] = [
    ("PrintTree", Command::PrintTree),
    ("Height", Command::Height),
    ("Size", Command::Size),
    ("FindMin", Command::FindMin),
    ("FindMax", Command::FindMax),
];

impl Command {
    /// Parses a single command line.
    ///
    /// Keywords must appear at the very start of the line. Keyed commands
    /// take an integer after the colon; argument-less commands must match
    /// the whole (trimmed) line. The key range is not checked here, except
    /// that integers too large for an `i64` are already out of range.
    pub fn parse(line: &str) -> Result<Self> {
        let malformed = || Error::MalformedLine(line.to_string());

        for (prefix, build) in KEYED_COMMANDS {
            if let Some(argument) = line.strip_prefix(prefix) {
                return match argument.trim().parse::<i64>() {
                    Ok(key) => Ok(build(key)),
                    Err(e) => match e.kind() {
                        IntErrorKind::PosOverflow => Err(Error::KeyOutOfRange(i64::MAX)),
                        IntErrorKind::NegOverflow => Err(Error::KeyOutOfRange(i64::MIN)),
                        _ => Err(malformed()),
                    },
                };
            }
        }

        for (keyword, command) in BARE_COMMANDS {
            if line.starts_with(keyword) {
                return if line.trim() == keyword {
                    Ok(command)
                } else {
                    Err(malformed())
                };
            }
        }

        Err(malformed())
    }

    pub fn execute(&self, tree: &mut LazyTree) -> Result<Reply> {
        let reply = match *self {
            Self::Insert(key) => Reply::Bool(tree.insert(key)?),
            Self::Delete(key) => Reply::Bool(tree.delete(key)?),
            Self::Contains(key) => Reply::Bool(tree.contains(key)?),
            Self::PrintTree => Reply::Text(tree.serialize()),
            Self::Height => Reply::Number(tree.height() as i64),
            Self::Size => Reply::Number(tree.len() as i64),
            Self::FindMin => Reply::Number(tree.find_min_or_sentinel()),
            Self::FindMax => Reply::Number(tree.find_max_or_sentinel()),
        };

        Ok(reply)
    }
}

/// The outcome of one command line, rendered through [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Bool(bool),
    Number(i64),
    Text(String),
    LineError(String),
    RangeError,
}

impl Reply {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::LineError(_) | Self::RangeError)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(text) => f.write_str(text),
            Self::LineError(line) => write!(f, "{}{}", LINE_ERROR_PREFIX, line),
            Self::RangeError => f.write_str(RANGE_ERROR_MESSAGE),
        }
    }
}

/// Counters collected by [`Interpreter::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub lines: usize,
    pub errors: usize,
}

/// Applies command lines, in order, to a single tree it owns.
#[derive(Debug, Default)]
pub struct Interpreter {
    tree: LazyTree,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &LazyTree {
        &self.tree
    }

    pub fn into_tree(self) -> LazyTree {
        self.tree
    }

    /// Runs one line to completion. Never fails: both error classes are
    /// turned into their reply.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let outcome = Command::parse(line).and_then(|command| {
            debug!("executing {:?}", command);
            command.execute(&mut self.tree)
        });

        match outcome {
            Ok(reply) => reply,
            Err(Error::KeyOutOfRange(key)) => {
                warn!("key {} out of range in line {:?}", key, line);
                Reply::RangeError
            }
            Err(error) => {
                warn!("{}", error);
                Reply::LineError(line.to_string())
            }
        }
    }

    /// Reads `input` line by line and writes one reply line per input line
    /// to `output`. Only I/O failures are returned as errors.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so such a line gets
    /// its own `Error in Line:` reply.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<Stats>
    where
        R: BufRead,
        W: Write,
    {
        let mut stats = Stats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = String::from_utf8_lossy(raw);
            let reply = self.handle_line(&line);

            stats.lines += 1;
            if reply.is_error() {
                stats.errors += 1;
            }

            write!(output, "{}{}", reply, LINE_SEPARATOR)?;
        }

        output.flush()?;
        Ok(stats)
    }
}
