//! Seeded synthetic graphs.
//!
//! Every generated graph is connected: vertex `v > 0` first links to a
//! random earlier vertex, then `extra_edges_per_vertex * vertex_count` random
//! non-loop edges are appended. Weights are uniform in `[0, 1)`, so ties are
//! rare but not excluded.

use boruvka_core::Graph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// Fewer than two vertices were requested.
    #[error("vertex count must be at least 2, got {vertex_count}")]
    TooFewVertices {
        /// The rejected vertex count.
        vertex_count: usize,
    },
    /// The requested edge count overflowed `usize`.
    #[error("edge count overflows for {vertex_count} vertices")]
    EdgeCountOverflow {
        /// The vertex count that triggered the overflow.
        vertex_count: usize,
    },
}

/// Configuration for [`connected_graph`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Random edges per vertex added on top of the spanning backbone.
    pub extra_edges_per_vertex: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected random graph.
///
/// # Errors
/// Returns [`SyntheticError::TooFewVertices`] when `vertex_count < 2` and
/// [`SyntheticError::EdgeCountOverflow`] when the edge budget overflows.
pub fn connected_graph(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
    let vertex_count = config.vertex_count;
    if vertex_count < 2 {
        return Err(SyntheticError::TooFewVertices { vertex_count }.into());
    }
    let extra_edges = vertex_count
        .checked_mul(config.extra_edges_per_vertex)
        .ok_or(SyntheticError::EdgeCountOverflow { vertex_count })?;

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new(vertex_count);

    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        graph.add_edge(parent, vertex, rng.r#gen::<f64>())?;
    }

    for _ in 0..extra_edges {
        let source = rng.gen_range(0..vertex_count);
        let offset = rng.gen_range(1..vertex_count);
        let shifted = source + offset;
        let target = if shifted >= vertex_count {
            shifted - vertex_count
        } else {
            shifted
        };
        graph.add_edge(source, target, rng.r#gen::<f64>())?;
    }

    Ok(graph)
}
