//! Plain-text edge-list reader.
//!
//! ```text
//! # comment
//! 4            <- vertex count
//! 0 1 2.5      <- source target weight
//! 1 2 -1
//! ```
//!
//! `#` starts a comment anywhere on a line and blank lines are skipped.
//! Line numbers in errors are 1-based.

use std::io::{self, BufRead};
use std::num::{ParseFloatError, ParseIntError};

use boruvka_core::{Graph, GraphError};
use thiserror::Error;

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// The underlying reader failed.
    #[error("line {line}: read failed: {source}")]
    Read {
        /// Line being read when the failure happened.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The input held no vertex count.
    #[error("edge list is empty; expected a vertex count")]
    MissingVertexCount,
    /// The vertex count line was not a non-negative integer.
    #[error("line {line}: invalid vertex count `{value}`: {source}")]
    InvalidVertexCount {
        /// Offending line.
        line: usize,
        /// Raw token.
        value: String,
        /// Integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// An edge line did not contain exactly three fields.
    #[error("line {line}: expected `source target weight`, found {fields} field(s)")]
    MalformedEdge {
        /// Offending line.
        line: usize,
        /// Number of whitespace-separated fields found.
        fields: usize,
    },
    /// An endpoint was not a non-negative integer.
    #[error("line {line}: invalid vertex id `{value}`: {source}")]
    InvalidVertex {
        /// Offending line.
        line: usize,
        /// Raw token.
        value: String,
        /// Integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The weight was not a number.
    #[error("line {line}: invalid weight `{value}`: {source}")]
    InvalidWeight {
        /// Offending line.
        line: usize,
        /// Raw token.
        value: String,
        /// Float parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// The graph rejected a syntactically valid edge.
    #[error("line {line}: {source}")]
    InvalidEdge {
        /// Offending line.
        line: usize,
        /// Validation failure reported by the graph.
        #[source]
        source: GraphError,
    },
}

/// Reads a [`Graph`] from `reader`.
///
/// # Errors
/// Returns [`EdgeListError`] for I/O failures, syntax errors and edges the
/// graph rejects (out-of-range endpoints, self-loops, non-finite weights).
///
/// # Examples
/// ```
/// use boruvka_cli::cli::parse_edge_list;
///
/// let graph = parse_edge_list("3\n0 1 1.5\n1 2 2 # heavier\n".as_bytes())?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), boruvka_cli::cli::EdgeListError>(())
/// ```
pub fn parse_edge_list(reader: impl BufRead) -> Result<Graph, EdgeListError> {
    let mut graph: Option<Graph> = None;

    for (index, raw) in reader.lines().enumerate() {
        let line = index + 1;
        let raw = raw.map_err(|source| EdgeListError::Read { line, source })?;
        let content = strip_comment(&raw).trim();
        if content.is_empty() {
            continue;
        }

        match graph.as_mut() {
            None => graph = Some(Graph::new(parse_vertex_count(content, line)?)),
            Some(graph) => {
                let (source, target, weight) = parse_edge(content, line)?;
                graph
                    .add_edge(source, target, weight)
                    .map_err(|source| EdgeListError::InvalidEdge { line, source })?;
            }
        }
    }

    graph.ok_or(EdgeListError::MissingVertexCount)
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(content, _)| content)
}

fn parse_vertex_count(content: &str, line: usize) -> Result<usize, EdgeListError> {
    content
        .parse()
        .map_err(|source| EdgeListError::InvalidVertexCount {
            line,
            value: content.to_owned(),
            source,
        })
}

fn parse_edge(content: &str, line: usize) -> Result<(usize, usize, f64), EdgeListError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(EdgeListError::MalformedEdge {
            line,
            fields: fields.len(),
        });
    };

    Ok((
        parse_vertex(source, line)?,
        parse_vertex(target, line)?,
        weight
            .parse()
            .map_err(|source| EdgeListError::InvalidWeight {
                line,
                value: (*weight).to_owned(),
                source,
            })?,
    ))
}

fn parse_vertex(token: &str, line: usize) -> Result<usize, EdgeListError> {
    token.parse().map_err(|source| EdgeListError::InvalidVertex {
        line,
        value: token.to_owned(),
        source,
    })
}
