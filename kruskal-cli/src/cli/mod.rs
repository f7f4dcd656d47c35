//! Command-line interface for computing minimum spanning trees.
//!
//! With no subcommand, or with `sample`, the CLI runs the built-in reference
//! graph. `run <PATH>` loads an edge-list file instead; see [`parse_graph`]
//! for the accepted format.

mod commands;
mod input;

pub use commands::{
    ByteSizeError, Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli,
};
pub use input::{InputError, parse_graph};
