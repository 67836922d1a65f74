//! Cheapest-outgoing-edge selection for a single Borůvka round.
//!
//! Selection reads a frozen snapshot of component representatives taken at
//! the start of the round and never touches the live disjoint-set. Each
//! component keeps one best-edge slot indexed by its representative. A slot
//! is only replaced by an edge that compares strictly less under
//! `(weight, edge index)`, so scanning the edge list in order keeps the
//! first-seen edge among equal weights.

use crate::graph::Edge;

/// Minimum edge count before selection is split across the Rayon pool.
#[cfg(feature = "parallel")]
pub(super) const PARALLEL_EDGE_THRESHOLD: usize = 4_096;

/// Best crossing edge per component, indexed by representative vertex id.
pub(super) type BestEdges = Vec<Option<Edge>>;

/// Computes the cheapest crossing edge for every component in `roots`.
///
/// `roots[v]` must hold the representative of vertex `v` for this round.
pub(super) fn cheapest_edges(edges: &[Edge], roots: &[usize]) -> BestEdges {
    #[cfg(feature = "parallel")]
    {
        if edges.len() >= PARALLEL_EDGE_THRESHOLD {
            return cheapest_edges_parallel(edges, roots);
        }
    }
    cheapest_edges_sequential(edges, roots)
}

pub(super) fn cheapest_edges_sequential(edges: &[Edge], roots: &[usize]) -> BestEdges {
    let mut best = vec![None; roots.len()];
    scan_into(&mut best, edges.iter(), roots);
    best
}

/// Fork-join variant: each Rayon job scans a slice into its own table and
/// tables are merged slot by slot. The `(weight, index)` order is total, so
/// the merged table is identical to the sequential one.
#[cfg(feature = "parallel")]
pub(super) fn cheapest_edges_parallel(edges: &[Edge], roots: &[usize]) -> BestEdges {
    use rayon::prelude::*;

    let slots = roots.len();
    edges
        .par_iter()
        .fold(
            || vec![None; slots],
            |mut best, edge| {
                scan_into(&mut best, std::iter::once(edge), roots);
                best
            },
        )
        .reduce(|| vec![None; slots], merge_best)
}

fn scan_into<'a>(best: &mut BestEdges, edges: impl Iterator<Item = &'a Edge>, roots: &[usize]) {
    for edge in edges {
        let source_root = roots[edge.source()];
        let target_root = roots[edge.target()];
        if source_root == target_root {
            continue;
        }
        offer(&mut best[source_root], edge);
        offer(&mut best[target_root], edge);
    }
}

fn offer(slot: &mut Option<Edge>, edge: &Edge) {
    if slot.is_none_or(|current| edge.is_cheaper_than(&current)) {
        *slot = Some(*edge);
    }
}

#[cfg(feature = "parallel")]
fn merge_best(mut left: BestEdges, right: BestEdges) -> BestEdges {
    for (slot, candidate) in left.iter_mut().zip(right) {
        if let Some(edge) = candidate {
            offer(slot, &edge);
        }
    }
    left
}

/// Flattens the best-edge table into unique candidates in edge-list order.
///
/// An edge that is cheapest for both of its endpoint components appears in
/// two slots; it is kept once.
pub(super) fn unique_candidates(best: BestEdges) -> Vec<Edge> {
    let mut candidates: Vec<Edge> = best.into_iter().flatten().collect();
    candidates.sort_unstable_by_key(Edge::index);
    candidates.dedup_by_key(|edge| edge.index());
    candidates
}
