//! Subcommand handlers.
//!
//! Each module builds a [`ResultsDocument`] for one solving mode; [`Session`]
//! prints it and writes the matching report file. `main.rs` only parses
//! arguments and dispatches.

pub mod experiment;
pub mod menu;
pub mod samples;
pub mod solve;

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use mazesolver_lib::{load_maze, Error as MazeError, Maze, ResultsDocument, SearchFailure};

use crate::output::{render_overview, OutputFormat, Palette};
use crate::report::ReportWriter;

/// Message shown when a maze file is missing or unusable.
pub const INVALID_INPUT_MESSAGE: &str = "Error: file cannot be found or input is invalid";
/// Message shown when the maze file name does not end in `.txt`.
pub const INVALID_FILENAME_MESSAGE: &str = "Filename is invalid";

/// Input problems reported to the user with a fixed message.
#[derive(Debug)]
pub enum InputError {
    InvalidFilename(PathBuf),
    Unreadable(MazeError),
    Malformed(SearchFailure),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidFilename(_) => f.write_str(INVALID_FILENAME_MESSAGE),
            InputError::Unreadable(_) | InputError::Malformed(_) => {
                f.write_str(INVALID_INPUT_MESSAGE)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::InvalidFilename(_) => None,
            InputError::Unreadable(err) => Some(err),
            InputError::Malformed(err) => Some(err),
        }
    }
}

/// Load a maze file, checking the name and that the grid is rectangular.
pub fn load_input(path: &Path) -> Result<Maze, InputError> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
        return Err(InputError::InvalidFilename(path.to_path_buf()));
    }
    let maze = load_maze(path).map_err(InputError::Unreadable)?;
    maze.graph().map_err(InputError::Malformed)?;
    Ok(maze)
}

/// Where and how command results are delivered.
#[derive(Debug, Clone)]
pub struct Session {
    pub format: OutputFormat,
    pub palette: Palette,
    /// `None` when report files are disabled.
    pub reports: Option<ReportWriter>,
}

impl Session {
    /// Print `document` to `out` and write it as the `stem` report.
    ///
    /// Returns the report path when one was written.
    pub fn publish(
        &self,
        out: &mut dyn Write,
        document: &ResultsDocument,
        subdir: Option<&str>,
        stem: &str,
    ) -> Result<Option<PathBuf>> {
        match self.format {
            OutputFormat::Text => write!(out, "{}", render_overview(document, &self.palette))?,
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(document)
                    .context("failed to serialize results")?;
                writeln!(out, "{json}")?;
            }
        }

        let Some(writer) = &self.reports else {
            return Ok(None);
        };
        let path = writer.write(subdir, stem, document)?;
        if self.format == OutputFormat::Text {
            writeln!(
                out,
                "Results can be found in the {}{}{} file.",
                self.palette.location,
                path.display(),
                self.palette.reset
            )?;
        }
        Ok(Some(path))
    }
}
