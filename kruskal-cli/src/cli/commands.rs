//! Command implementations and argument parsing for the `kruskal` CLI.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use kruskal_core::{
    Graph, MinimumSpanningForest, MstError, MstErrorCode, ensure_within_memory_limit,
};
use thiserror::Error;
use tracing::{Span, debug, field, info, instrument, warn};

use super::input::{InputError, parse_graph};

/// Label reported for the built-in reference graph.
const SAMPLE_SOURCE: &str = "sample";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Compute the minimum spanning tree of an undirected weighted graph."
)]
pub struct Cli {
    /// Command to execute; defaults to `sample`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the MST of the built-in four-vertex reference graph.
    Sample,
    /// Compute the MST of a graph loaded from an edge-list file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge-list file: a vertex count line, then `source destination weight`
    /// lines.
    pub path: PathBuf,

    /// Fail instead of printing a spanning forest when the graph is
    /// disconnected.
    #[arg(long)]
    pub require_connected: bool,

    /// Refuse graphs whose estimated peak memory exceeds this size, e.g.
    /// `512M` or `2GiB`.
    #[arg(long, value_name = "SIZE", value_parser = parse_byte_size)]
    pub max_bytes: Option<u64>,
}

/// Errors raised while parsing a `--max-bytes` value.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ByteSizeError {
    /// The value does not start with a digit.
    #[error("`{raw}` does not start with a byte count")]
    MissingNumber {
        /// Rejected text.
        raw: String,
    },
    /// The unit suffix is not recognised.
    #[error("unknown size suffix `{suffix}`; expected K, M, G or T")]
    UnknownSuffix {
        /// Rejected suffix.
        suffix: String,
    },
    /// The size does not fit in 64 bits.
    #[error("`{raw}` overflows a 64-bit byte count")]
    Overflow {
        /// Rejected text.
        raw: String,
    },
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the input file failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file is not a well-formed edge list.
    #[error("invalid graph in `{path}`: {source}")]
    Input {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parse failure with its line number.
        #[source]
        source: InputError,
    },
    /// The MST computation rejected the graph.
    #[error(transparent)]
    Core(#[from] MstError),
}

impl CliError {
    /// Returns the stable code of the underlying core error, if any.
    #[must_use]
    pub fn code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Core(err) => Some(err.code()),
            Self::Io { .. } | Self::Input { .. } => None,
        }
    }
}

/// Outcome of a successful command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// `sample` or the input file name.
    pub source: String,
    /// Accepted edges in acceptance order.
    pub forest: MinimumSpanningForest,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, or when the
/// core rejects the graph.
///
/// # Examples
/// ```
/// use kruskal_cli::cli::{Cli, run_cli};
///
/// let summary = run_cli(Cli { command: None })?;
/// assert_eq!(summary.forest.total_weight(), 19);
/// # Ok::<(), kruskal_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command.unwrap_or(Command::Sample) {
        Command::Sample => {
            span.record("command", field::display("sample"));
            run_sample()
        }
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(run)
        }
    }
}

pub(super) fn run_sample() -> Result<ExecutionSummary, CliError> {
    let forest = Graph::sample().minimum_spanning_forest()?;
    info!(
        source = SAMPLE_SOURCE,
        edges = forest.edges().len(),
        "sample graph completed"
    );
    Ok(ExecutionSummary {
        source: SAMPLE_SOURCE.to_owned(),
        forest,
    })
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        path = field::Empty,
        require_connected = command.require_connected,
        max_bytes = command.max_bytes,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        require_connected,
        max_bytes,
    } = command;
    Span::current().record("path", field::display(path.display()));

    let text = fs::read_to_string(&path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    let graph = parse_graph(&text).map_err(|source| CliError::Input {
        path: path.clone(),
        source,
    })?;

    if let Some(limit) = max_bytes {
        let estimated =
            ensure_within_memory_limit(graph.vertex_count(), graph.edges().len(), limit)?;
        debug!(estimated_bytes = estimated, limit_bytes = limit, "memory guard passed");
    }

    let mut forest = graph.minimum_spanning_forest()?;
    if require_connected {
        forest = forest.require_spanning_tree()?;
    } else if !forest.is_tree() {
        warn!(
            components = forest.component_count(),
            "graph is disconnected; reporting a spanning forest"
        );
    }

    let source = source_name(&path);
    info!(
        source = source.as_str(),
        edges = forest.edges().len(),
        components = forest.component_count(),
        "command completed"
    );
    Ok(ExecutionSummary { source, forest })
}

/// Parses a byte size with an optional binary unit suffix.
///
/// Accepts a plain count or one of `K`, `M`, `G`, `T`, optionally followed
/// by `B` or `iB`, in any case. All units are powers of 1024.
pub(super) fn parse_byte_size(raw: &str) -> Result<u64, ByteSizeError> {
    let trimmed = raw.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, suffix) = trimmed.split_at(split);
    if digits.is_empty() {
        return Err(ByteSizeError::MissingNumber {
            raw: trimmed.to_owned(),
        });
    }

    let shift = match suffix.to_ascii_lowercase().as_str() {
        "" | "b" => 0,
        "k" | "kb" | "kib" => 10,
        "m" | "mb" | "mib" => 20,
        "g" | "gb" | "gib" => 30,
        "t" | "tb" | "tib" => 40,
        _ => {
            return Err(ByteSizeError::UnknownSuffix {
                suffix: suffix.to_owned(),
            });
        }
    };

    let overflow = || ByteSizeError::Overflow {
        raw: trimmed.to_owned(),
    };
    let count: u64 = digits.parse().map_err(|_| overflow())?;
    count.checked_mul(1_u64 << shift).ok_or_else(overflow)
}

pub(super) fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| path.display().to_string(), ToOwned::to_owned)
}

/// Renders `summary` to `writer`, one edge per line in acceptance order.
///
/// A forest additionally reports its component count.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, render_summary, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = run_cli(Cli { command: None })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "Minimum Spanning Tree:\n2 - 3 : 4\n0 - 3 : 5\n0 - 1 : 10\ntotal weight: 19\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "Minimum Spanning Tree:")?;
    for edge in &summary.forest {
        writeln!(writer, "{edge}")?;
    }
    // Widened so long edge lists of extreme weights cannot overflow.
    let total: i128 = summary
        .forest
        .iter()
        .map(|edge| i128::from(edge.weight()))
        .sum();
    writeln!(writer, "total weight: {total}")?;
    if !summary.forest.is_tree() {
        writeln!(writer, "components: {}", summary.forest.component_count())?;
    }
    Ok(())
}
