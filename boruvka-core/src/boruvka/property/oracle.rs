//! Sequential Kruskal oracle for MST property verification.
//!
//! Provides a simple, trusted implementation of Kruskal's algorithm that
//! shares no code with the engine under test. Edges are sorted by
//! `(weight.total_cmp, input position)`, the same total order the Borůvka
//! engine uses for tie-breaking, so on inputs with equal weights both
//! algorithms settle on the same tree.

use super::helpers::find_root;
use super::types::Triple;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the MST/forest.
    pub total_weight: f64,
    /// Accepted edges as canonical `(min, max, weight)` triples.
    pub edges: Vec<Triple>,
    /// Number of connected components after MST construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest using sequential Kruskal's algorithm.
///
/// Self-loops and out-of-range endpoints are skipped rather than rejected so
/// the oracle can be exercised on inputs the engine would refuse.
pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[Triple]) -> SequentialMstResult {
    let mut order: Vec<(usize, Triple)> = edges
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, (u, v, w))| u != v && *u < vertex_count && *v < vertex_count && w.is_finite())
        .collect();
    order.sort_by(|(left_pos, left), (right_pos, right)| {
        left.2
            .total_cmp(&right.2)
            .then_with(|| left_pos.cmp(right_pos))
    });

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    let mut total_weight = 0.0;
    let mut accepted = Vec::new();

    for (_, (u, v, w)) in order {
        let ru = find_root(&mut parent, u);
        let rv = find_root(&mut parent, v);
        if ru != rv {
            parent[rv] = ru;
            components -= 1;
            total_weight += w;
            accepted.push((u.min(v), u.max(v), w));
        }
    }

    SequentialMstResult {
        total_weight,
        edges: accepted,
        component_count: components,
    }
}
