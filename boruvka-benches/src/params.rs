//! Benchmark parameter types.

use std::fmt;

/// Parameters for one MST benchmark run, used as the Criterion parameter id.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the spanning backbone.
    pub extra_edges_per_vertex: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},extra={}",
            self.vertex_count, self.extra_edges_per_vertex
        )
    }
}
