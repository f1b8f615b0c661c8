use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mazesolver_cli::commands::{experiment, menu, samples, solve, InputError, Session};
use mazesolver_cli::output::{render_footer, render_maze, ColorChoice, OutputFormat};
use mazesolver_cli::report::{ReportWriter, EXPERIMENT_DIR};
use mazesolver_lib::{Heuristic, SearchVariant, Weight};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Solve grid mazes with depth-first and weighted A* search"
)]
struct Cli {
    /// Output format for stdout and report files.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Directory for report files (defaults to the current directory).
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Print results without writing report files.
    #[arg(long, global = true)]
    no_report: bool,

    /// When to use ANSI colors.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    color: ColorChoice,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve every `maze-*.txt` file in the sample directory.
    Samples {
        /// Sample maze directory (falls back to MAZESOLVER_SAMPLES_DIR, then `sample-mazes`).
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Solve a single maze file.
    Solve {
        /// Maze file (`.txt`).
        file: PathBuf,
        /// Run only this algorithm (depth-first or a-star); both run by default.
        #[arg(long)]
        algorithm: Option<SearchVariant>,
        /// Heuristic for A* (manhattan, euclidean, chebyshev, zero).
        #[arg(long, default_value = "manhattan")]
        heuristic: Heuristic,
        /// Heuristic weight for A*; values above 1.0 trade optimality for speed.
        #[arg(long, default_value = "1.0")]
        weight: Weight,
        /// JSON search configuration; replaces --algorithm, --heuristic and --weight.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Draw the maze with the explored cells and path.
        #[arg(long)]
        show: bool,
    },
    /// Compare every heuristic and weight, plus depth-first neighbour orders.
    Experiment {
        /// Maze file (`.txt`).
        file: PathBuf,
        /// Comma-separated heuristic weights.
        #[arg(long, value_delimiter = ',', default_value = "1.0,2.7")]
        weights: Vec<Weight>,
    },
    /// Interactive menu reading choices from stdin.
    Menu,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let started = Instant::now();
    let session = Session {
        format: cli.format,
        palette: cli.color.palette(),
        reports: (!cli.no_report).then(|| {
            ReportWriter::new(
                cli.output_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
                cli.format,
            )
        }),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Samples { dir } => {
            let dir = samples::resolve_samples_dir(dir.as_deref());
            let document = samples::run(&dir)?;
            session.publish(&mut out, &document, None, samples::SAMPLES_REPORT_STEM)?;
        }
        Command::Solve {
            file,
            algorithm,
            heuristic,
            weight,
            config,
            show,
        } => {
            let args = match config {
                Some(path) => solve::SolveArgs::from_config(file, solve::load_config(&path)?),
                None => solve::SolveArgs {
                    file,
                    algorithm,
                    heuristic,
                    weight,
                },
            };
            let run = solve::run(&args)?;
            if show && session.format == OutputFormat::Text {
                for outcome in &run.outcomes {
                    writeln!(out, "{}", outcome.engine)?;
                    writeln!(out, "{}", render_maze(&run.maze, outcome, &session.palette))?;
                }
            }
            session.publish(&mut out, &run.document, None, &run.report_stem())?;
        }
        Command::Experiment { file, weights } => {
            let (maze, document) = experiment::run(&file, &weights)?;
            session.publish(
                &mut out,
                &document,
                Some(EXPERIMENT_DIR),
                &experiment::report_stem(&maze),
            )?;
        }
        Command::Menu => {
            let samples_dir = samples::resolve_samples_dir(None);
            menu::run(io::stdin().lock(), &mut out, &session, &samples_dir)?;
            return Ok(());
        }
    }

    if session.format == OutputFormat::Text {
        writeln!(out, "{}", render_footer(started.elapsed(), &session.palette))?;
    }
    Ok(())
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<InputError>() {
        Some(input) => {
            tracing::debug!(error = ?input, "rejected maze input");
            eprintln!("{input}");
        }
        None => eprintln!("Error: {err:#}"),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
