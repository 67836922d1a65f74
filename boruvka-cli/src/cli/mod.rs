//! Command-line interface for the Borůvka engine.
//!
//! `run` loads a whitespace-separated edge list from disk; `example` uses the
//! built-in nine-vertex graph. Both print a per-round report followed by the
//! sorted tree edges and total weight.

mod commands;
mod edge_list;

pub use commands::{
    Cli, CliError, Command, EdgeSummary, ExecutionSummary, OutputFormat, RoundSummary,
    RunCommand, example_graph, render_summary, run_cli,
};
pub use edge_list::{EdgeListError, parse_edge_list};
