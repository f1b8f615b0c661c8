//! Stdout rendering for result documents and solved mazes.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use mazesolver_lib::{Cell, Maze, Outcome, ResultsDocument, RunSummary};

/// Output format for stdout and report files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text in the classic results layout.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// File extension used for report files in this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// ANSI styles keyed by what they mark, or empty strings when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub reset: &'static str,
    /// Section headings.
    pub heading: &'static str,
    /// Maze names and per-run algorithm labels.
    pub maze: &'static str,
    pub solved: &'static str,
    pub failed: &'static str,
    /// Cells on the returned path.
    pub path: &'static str,
    /// Cells expanded but off the path.
    pub explored: &'static str,
    /// Start and goal markers.
    pub endpoint: &'static str,
    /// Notes and the closing footer.
    pub muted: &'static str,
    /// Report file locations.
    pub location: &'static str,
}

impl Palette {
    pub const fn ansi() -> Self {
        Self {
            reset: "\x1b[0m",
            heading: "\x1b[1;97m",
            maze: "\x1b[36m",
            solved: "\x1b[32m",
            failed: "\x1b[31m",
            path: "\x1b[1;32m",
            explored: "\x1b[90m",
            endpoint: "\x1b[1;7;35m",
            muted: "\x1b[90m",
            location: "\x1b[33m",
        }
    }

    pub const fn plain() -> Self {
        Self {
            reset: "",
            heading: "",
            maze: "",
            solved: "",
            failed: "",
            path: "",
            explored: "",
            endpoint: "",
            muted: "",
            location: "",
        }
    }
}

/// When to use ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color unless `NO_COLOR` is set or `TERM` is `dumb`.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve the palette against the process environment.
    pub fn palette(self) -> Palette {
        let term = env::var("TERM").ok();
        self.resolve(env::var_os("NO_COLOR").is_some(), term.as_deref())
    }

    /// Resolve the palette from explicit `NO_COLOR` presence and `TERM` value.
    ///
    /// See https://no-color.org/ for the `NO_COLOR` convention.
    pub fn resolve(self, no_color: bool, term: Option<&str>) -> Palette {
        let dumb = term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        match self {
            ColorChoice::Always => Palette::ansi(),
            ColorChoice::Never => Palette::plain(),
            ColorChoice::Auto if no_color || dumb => Palette::plain(),
            ColorChoice::Auto => Palette::ansi(),
        }
    }
}

/// Group the digits of a count with commas, e.g. `32,161`.
pub fn group_thousands(count: usize) -> String {
    let digits = count.to_string();
    let lead = digits.len() % 3;
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (index + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Render a compact overview of every run, one line per run, grouped by section.
///
/// A run whose algorithm differs from its section heading (experiment
/// sections mix configurations) is labelled with its algorithm.
pub fn render_overview(document: &ResultsDocument, palette: &Palette) -> String {
    let width = document
        .runs()
        .map(|run| run.maze.len())
        .max()
        .unwrap_or(0);

    let mut buffer = String::new();
    for section in &document.sections {
        let _ = writeln!(
            buffer,
            "{}{}{}",
            palette.heading, section.heading, palette.reset
        );
        for run in &section.runs {
            let label = (run.algorithm != section.heading).then_some(run.algorithm.as_str());
            let _ = writeln!(buffer, "  {}", overview_line(run, label, width, palette));
        }
        buffer.push('\n');
    }
    buffer
}

fn overview_line(
    run: &RunSummary,
    label: Option<&str>,
    width: usize,
    palette: &Palette,
) -> String {
    let mut name = format!("{}{:<width$}{}", palette.maze, run.maze, palette.reset);
    if let Some(label) = label {
        let _ = write!(name, "  {}{label}{}", palette.maze, palette.reset);
    }
    let report = &run.report;
    let counters = format!(
        "explored {:>7}  steps {:>7}  peak {:>5}  {:.6}s",
        group_thousands(report.expansions),
        group_thousands(report.frontier_pops),
        group_thousands(report.peak_frontier),
        report.elapsed.as_secs_f64()
    );
    match (&run.note, report.path_length, &run.failure) {
        (note, Some(length), _) => {
            let mut line = format!(
                "{name}  {}solved{}  length {:>5}  {counters}",
                palette.solved, palette.reset, length
            );
            if let Some(note) = note {
                let _ = write!(line, "  {}({note}){}", palette.muted, palette.reset);
            }
            line
        }
        (_, None, Some(failure)) => format!(
            "{name}  {}failed{}  {failure}  {counters}",
            palette.failed, palette.reset
        ),
        (_, None, None) => format!("{name}  {counters}"),
    }
}

/// Draw the maze with the explored cells and the path of `outcome` overlaid.
///
/// Path cells are `*`, cells expanded but off the path are `.`, and the
/// endpoints are `S` and `G`.
pub fn render_maze(maze: &Maze, outcome: &Outcome, palette: &Palette) -> String {
    let path: HashSet<Cell> = outcome.path().unwrap_or_default().iter().copied().collect();
    let explored: HashSet<Cell> = outcome.explored.iter().copied().collect();

    let mut buffer = String::new();
    for (row, kinds) in maze.cells.iter().enumerate() {
        let symbols: Vec<String> = kinds
            .iter()
            .enumerate()
            .map(|(col, kind)| {
                let cell = Cell::new(row, col);
                if cell == maze.start {
                    format!("{}S{}", palette.endpoint, palette.reset)
                } else if cell == maze.goal {
                    format!("{}G{}", palette.endpoint, palette.reset)
                } else if path.contains(&cell) {
                    format!("{}*{}", palette.path, palette.reset)
                } else if explored.contains(&cell) {
                    format!("{}.{}", palette.explored, palette.reset)
                } else {
                    kind.symbol().to_string()
                }
            })
            .collect();
        let _ = writeln!(buffer, "{}", symbols.join(" "));
    }
    buffer
}

/// Format the closing "Completed in" line.
pub fn render_footer(elapsed: Duration, palette: &Palette) -> String {
    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };
    format!("{}Completed in {}{}", palette.muted, time_str, palette.reset)
}
