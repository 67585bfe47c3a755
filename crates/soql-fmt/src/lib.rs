//! Canonical formatter for SQL and SOQL queries.
//!
//! `soql-fmt` reads query text, runs it through `soql-parser-core` and
//! writes the canonical form back out. All I/O lives here; the parser core
//! only ever sees strings.
//!
//! # Example
//!
//! ```rust
//! use soql_fmt::format_source;
//!
//! let text = format_source("select Id from Account where not Name = 'x'").unwrap();
//! assert_eq!(text, "SELECT Id FROM Account WHERE Name <> 'x'\n");
//! ```

pub mod error;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use soql_parser_core::{parse_statements, ParseError, Statement};
use tracing::{debug, info};

pub use error::{FmtError, Result};

/// Where query text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Source {
    /// Returns a display name for diagnostics.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => String::from("<stdin>"),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Reads the whole input.
    ///
    /// # Errors
    ///
    /// Returns `FmtError::Io` if the file cannot be read.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            Self::File(path) => fs::read_to_string(path).map_err(|source| FmtError::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// What to do with each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write the canonical text to the output.
    Print,
    /// Report whether the input is canonical, write nothing.
    Check,
    /// Write the parsed tree as pretty JSON.
    Ast,
    /// Rewrite the file with its canonical text.
    InPlace,
}

/// Result of processing one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input was already canonical.
    Unchanged,
    /// The canonical text differs from the input.
    Reformatted,
}

/// Renders parsed statements, one per line.
///
/// A single statement is written bare; several are each terminated by `;`.
#[must_use]
pub fn render(statements: &[Statement]) -> String {
    let terminator = if statements.len() > 1 { ";" } else { "" };
    statements
        .iter()
        .map(|s| format!("{}{terminator}\n", s.to_canonical_text()))
        .collect()
}

/// Canonicalizes every statement in `text`.
///
/// # Errors
///
/// Returns the first `ParseError` in the input.
pub fn format_source(text: &str) -> std::result::Result<String, ParseError> {
    Ok(render(&parse_statements(text)?))
}

/// Returns true if `text` is already canonical, ignoring trailing
/// whitespace.
///
/// # Errors
///
/// Returns the first `ParseError` in the input.
pub fn check_source(text: &str) -> std::result::Result<bool, ParseError> {
    let formatted = format_source(text)?;
    Ok(formatted.trim_end() == text.trim_end())
}

/// Serializes the parsed statements of `text` as pretty-printed JSON.
///
/// # Errors
///
/// Returns `FmtError::Parse` on invalid input.
pub fn ast_json(text: &str, origin: &str) -> Result<String> {
    let statements = parse_statements(text).map_err(|source| FmtError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    Ok(serde_json::to_string_pretty(&statements)?)
}

/// Processes one input in the given mode, writing any output to `out`.
///
/// # Errors
///
/// Returns a `FmtError` if the input cannot be read, parsed or written.
pub fn process(source: &Source, mode: Mode, out: &mut impl Write) -> Result<Outcome> {
    let origin = source.name();
    let text = source.read()?;
    debug!(input = %origin, len = text.len(), "read input");

    if mode == Mode::Ast {
        writeln!(out, "{}", ast_json(&text, &origin)?)?;
        return Ok(Outcome::Unchanged);
    }

    let formatted = format_source(&text).map_err(|source| FmtError::Parse {
        origin: origin.clone(),
        source,
    })?;
    let outcome = if formatted.trim_end() == text.trim_end() {
        Outcome::Unchanged
    } else {
        Outcome::Reformatted
    };

    match mode {
        Mode::Print => out.write_all(formatted.as_bytes())?,
        Mode::Check | Mode::Ast => {}
        Mode::InPlace => match (source, outcome) {
            (Source::File(path), Outcome::Reformatted) => {
                fs::write(path, &formatted).map_err(|source| FmtError::Io {
                    path: path.clone(),
                    source,
                })?;
                info!("Reformatted {origin}");
            }
            (Source::File(_), Outcome::Unchanged) => {}
            (Source::Stdin, _) => out.write_all(formatted.as_bytes())?,
        },
    }

    Ok(outcome)
}
