//! Shared helper functions for MST property-based tests.

use crate::Edge;

use super::types::Triple;

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Returns `true` when `left` and `right` agree to within accumulated
/// floating-point rounding.
///
/// Sums taken in different orders may differ in their last bits.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= scale * 1e-9
}

/// Canonical triples for `edges`, sorted so two edge sets can be compared.
pub(super) fn sorted_triples(edges: &[Edge]) -> Vec<Triple> {
    let mut triples: Vec<Triple> = edges
        .iter()
        .map(|edge| (edge.source(), edge.target(), edge.weight()))
        .collect();
    sort_triples(&mut triples);
    triples
}

/// Sorts triples by `(source, target, weight)`.
pub(super) fn sort_triples(triples: &mut [Triple]) {
    triples.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.total_cmp(&b.2))
    });
}
