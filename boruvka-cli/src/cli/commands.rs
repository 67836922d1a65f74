//! Command implementations, argument parsing and report rendering.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use boruvka_core::{
    Edge, Graph, GraphError, GraphErrorCode, RoundReport, compute_mst_with_observer,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{EdgeListError, parse_edge_list};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "boruvka",
    about = "Compute minimum spanning trees with Borůvka's algorithm."
)]
pub struct Cli {
    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    pub format: OutputFormat,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the MST of an edge-list file.
    Run(RunCommand),
    /// Compute the MST of the built-in nine-vertex example graph.
    Example,
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge-list file: a vertex count line followed by `source target weight`
    /// lines. `#` starts a comment.
    pub path: PathBuf,
}

/// Report formats.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Round-by-round text report.
    #[default]
    Human,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The edge-list file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge-list file was malformed.
    #[error("failed to read edge list `{path}`: {source}")]
    EdgeList {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parse or validation failure.
        #[source]
        source: EdgeListError,
    },
    /// The built-in example failed validation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Returns the graph validation code when an edge was rejected.
    #[must_use]
    pub fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::EdgeList {
                source: EdgeListError::InvalidEdge { source, .. },
                ..
            }
            | Self::Graph(source) => Some(source.code()),
            _ => None,
        }
    }
}

/// One forest edge as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeSummary {
    /// Lower endpoint.
    pub source: usize,
    /// Higher endpoint.
    pub target: usize,
    /// Edge weight.
    pub weight: f64,
}

impl From<&Edge> for EdgeSummary {
    fn from(edge: &Edge) -> Self {
        Self {
            source: edge.source(),
            target: edge.target(),
            weight: edge.weight(),
        }
    }
}

/// What one productive round contributed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    /// 1-based round index.
    pub round: usize,
    /// Edges accepted this round, in acceptance order.
    pub added: Vec<EdgeSummary>,
    /// Forest weight after the round.
    pub total_weight: f64,
    /// Components left after the round.
    pub component_count: usize,
}

impl From<&RoundReport<'_>> for RoundSummary {
    fn from(report: &RoundReport<'_>) -> Self {
        Self {
            round: report.round(),
            added: report.added().iter().map(EdgeSummary::from).collect(),
            total_weight: report.total_weight(),
            component_count: report.component_count(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionSummary {
    /// Number of vertices in the input graph.
    pub vertex_count: usize,
    /// Number of edges in the input graph.
    pub edge_count: usize,
    /// Per-round progress.
    pub rounds: Vec<RoundSummary>,
    /// Forest edges sorted by `(source, target)`.
    pub edges: Vec<EdgeSummary>,
    /// Sum of the forest edge weights.
    pub total_weight: f64,
    /// Components in the resulting forest; `1` means a spanning tree.
    pub component_count: usize,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or is invalid.
///
/// # Examples
/// ```
/// use boruvka_cli::cli::{Cli, Command, OutputFormat, run_cli};
///
/// let cli = Cli {
///     format: OutputFormat::Human,
///     command: Command::Example,
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.total_weight, 29.0);
/// assert_eq!(summary.rounds.len(), 2);
/// # Ok::<(), boruvka_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let graph = match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            load_graph(&run.path)?
        }
        Command::Example => {
            span.record("command", field::display("example"));
            example_graph()?
        }
    };

    let summary = summarise(&graph);
    info!(
        vertices = summary.vertex_count,
        rounds = summary.rounds.len(),
        weight = summary.total_weight,
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.load_graph", err, skip_all, fields(path = %path.display()))]
pub(super) fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_edge_list(BufReader::new(file)).map_err(|source| CliError::EdgeList {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn summarise(graph: &Graph) -> ExecutionSummary {
    let mut rounds = Vec::new();
    let forest = compute_mst_with_observer(graph, &mut |report: &RoundReport<'_>| {
        rounds.push(RoundSummary::from(report));
    });

    let mut edges: Vec<EdgeSummary> = forest.edges().iter().map(EdgeSummary::from).collect();
    edges.sort_by(|left, right| {
        (left.source, left.target)
            .cmp(&(right.source, right.target))
            .then(left.weight.total_cmp(&right.weight))
    });

    ExecutionSummary {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        rounds,
        edges,
        total_weight: forest.total_weight(),
        component_count: forest.component_count(),
    }
}

/// Builds the nine-vertex, fifteen-edge demonstration graph.
///
/// Its minimum spanning tree weighs 29 and is found in two rounds.
///
/// # Errors
/// Never fails in practice; the signature mirrors [`Graph::from_edges`].
pub fn example_graph() -> Result<Graph, GraphError> {
    Graph::from_edges(
        9,
        [
            (0, 1, 4.0),
            (0, 6, 7.0),
            (1, 6, 11.0),
            (1, 7, 20.0),
            (1, 2, 9.0),
            (2, 3, 6.0),
            (2, 4, 2.0),
            (3, 4, 10.0),
            (3, 5, 5.0),
            (4, 5, 15.0),
            (4, 7, 1.0),
            (4, 8, 5.0),
            (5, 8, 12.0),
            (6, 7, 1.0),
            (7, 8, 3.0),
        ],
    )
}

/// Renders `summary` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON encoding fails.
///
/// # Examples
/// ```
/// # use boruvka_cli::cli::{Cli, Command, OutputFormat, render_summary, run_cli};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = run_cli(Cli { format: OutputFormat::Human, command: Command::Example })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, OutputFormat::Human, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("total weight: 29\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(
    summary: &ExecutionSummary,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => render_human(summary, &mut writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, summary)?;
            writeln!(writer)
        }
    }
}

fn render_human(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "graph: {} vertices, {} edges",
        summary.vertex_count, summary.edge_count
    )?;

    for round in &summary.rounds {
        writeln!(writer)?;
        writeln!(writer, "round {}:", round.round)?;
        for edge in &round.added {
            writeln!(
                writer,
                "  added {} - {} (weight {})",
                edge.source, edge.target, edge.weight
            )?;
        }
        writeln!(writer, "  weight so far: {}", round.total_weight)?;
        writeln!(writer, "  components: {}", round.component_count)?;
    }

    writeln!(writer)?;
    if summary.component_count > 1 {
        writeln!(
            writer,
            "minimum spanning forest ({} components):",
            summary.component_count
        )?;
    } else {
        writeln!(writer, "minimum spanning tree:")?;
    }
    for edge in &summary.edges {
        writeln!(writer, "  ({}, {}, {})", edge.source, edge.target, edge.weight)?;
    }
    writeln!(writer, "total weight: {}", summary.total_weight)
}
