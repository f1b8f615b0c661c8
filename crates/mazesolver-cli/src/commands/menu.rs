//! `menu` command: the interactive prompt loop.
//!
//! Reads one choice per line: `s` solves the sample mazes, `c` asks for a
//! maze file and solves it with both variants, `h` runs the heuristic
//! experiment on a maze file and `q` quits. End of input also quits. Errors
//! from a single choice are printed and the loop continues.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use super::{experiment, samples, solve, InputError, Session};
use crate::report::EXPERIMENT_DIR;

const WELCOME: &str = "Welcome to the Maze Solver!";
const PROMPT: &str = "Enter 's' to solve the sample mazes, 'c' to solve a custom maze, \
'h' to run the heuristic experiment, or 'q' to quit: ";
const FILE_PROMPT: &str = "Enter the maze file name: ";

/// Menu selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Samples,
    Custom,
    Heuristics,
    Quit,
}

impl Choice {
    /// Parse a menu line, ignoring case and surrounding whitespace.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "s" => Some(Choice::Samples),
            "c" => Some(Choice::Custom),
            "h" => Some(Choice::Heuristics),
            "q" => Some(Choice::Quit),
            _ => None,
        }
    }
}

/// Run the menu loop until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    session: &Session,
    samples_dir: &Path,
) -> Result<()> {
    writeln!(out, "{WELCOME}")?;
    loop {
        write!(out, "\n{PROMPT}")?;
        out.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let result = match Choice::parse(&line) {
            Some(Choice::Quit) => break,
            Some(Choice::Samples) => solve_samples(out, session, samples_dir),
            Some(Choice::Custom) => match prompt_file(&mut input, out)? {
                Some(file) => solve_custom(out, session, file),
                None => break,
            },
            Some(Choice::Heuristics) => match prompt_file(&mut input, out)? {
                Some(file) => run_heuristics(out, session, file),
                None => break,
            },
            None => {
                writeln!(out, "Invalid option, please try again.")?;
                Ok(())
            }
        };

        if let Err(err) = result {
            debug!(error = ?err, "menu choice failed");
            match err.downcast_ref::<InputError>() {
                Some(input_error) => writeln!(out, "{input_error}")?,
                None => writeln!(out, "Error: {err:#}")?,
            }
        }
    }
    writeln!(out, "Goodbye!")?;
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_file<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<PathBuf>> {
    write!(out, "{FILE_PROMPT}")?;
    out.flush()?;
    Ok(read_line(input)?.map(PathBuf::from))
}

fn solve_samples<W: Write>(out: &mut W, session: &Session, samples_dir: &Path) -> Result<()> {
    let document = samples::run(samples_dir)?;
    session.publish(out, &document, None, samples::SAMPLES_REPORT_STEM)?;
    writeln!(out, "Sample mazes solved!")?;
    Ok(())
}

fn solve_custom<W: Write>(out: &mut W, session: &Session, file: PathBuf) -> Result<()> {
    let run = solve::run(&solve::SolveArgs::both(file))?;
    session.publish(out, &run.document, None, &run.report_stem())?;
    writeln!(out, "Maze solved!")?;
    Ok(())
}

fn run_heuristics<W: Write>(out: &mut W, session: &Session, file: PathBuf) -> Result<()> {
    let (maze, document) = experiment::run(&file, &[])?;
    session.publish(
        out,
        &document,
        Some(EXPERIMENT_DIR),
        &experiment::report_stem(&maze),
    )?;
    writeln!(out, "Heuristic experiment finished!")?;
    Ok(())
}
