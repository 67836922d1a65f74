//! Property 2: Structural invariant verification.
//!
//! For any forest produced by the engine, verifies:
//!
//! - **Canonical form** — `source < target` for all edges.
//! - **Acyclicity** — no cycles (union-find based detection).
//! - **Edge count** — `V - C` edges for `C` connected components.
//! - **Connectivity** — connected input produces a spanning tree, and the
//!   forest has exactly as many components as the input graph.
//! - **Weight accounting** — the reported total equals the edge sum.
//! - **Round bound** — at most `ceil(log2 V)` productive rounds.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, MinimumSpanningForest, compute_mst};

use super::helpers::{find_root, weights_match};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph().map_err(|e| {
        TestCaseError::fail(format!("fixture rejected: {e} ({})", fixture.describe()))
    })?;

    let forest = compute_mst(&graph);
    let edges = forest.edges();

    validate_canonical_form(edges)?;
    validate_acyclicity(fixture.vertex_count, edges)?;
    validate_edge_count(fixture.vertex_count, edges.len(), forest.component_count())?;
    validate_connectivity(fixture, &forest)?;
    validate_weight_accounting(&forest)?;
    validate_round_bound(fixture.vertex_count, forest.rounds())?;

    Ok(())
}

// ── Validation helpers ──────────────────────────────────────────────────

fn validate_canonical_form(edges: &[Edge]) -> TestCaseResult {
    for (i, edge) in edges.iter().enumerate() {
        if edge.source() >= edge.target() {
            return Err(TestCaseError::fail(format!(
                "edge {i}: not canonical ({} >= {})",
                edge.source(),
                edge.target(),
            )));
        }
    }
    Ok(())
}

/// Detects cycles in the MST output using union-find.
fn validate_acyclicity(vertex_count: usize, edges: &[Edge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra == rb {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target(),
            )));
        }
        parent[rb] = ra;
    }
    Ok(())
}

/// Verifies that the forest has exactly `n - c` edges for `c` components.
fn validate_edge_count(vertex_count: usize, actual: usize, component_count: usize) -> TestCaseResult {
    let expected = vertex_count.saturating_sub(component_count);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {actual}, expected n - c = {expected} (n={vertex_count}, c={component_count})",
        )));
    }
    Ok(())
}

/// Verifies that the forest keeps exactly the input's connected components.
fn validate_connectivity(fixture: &MstFixture, forest: &MinimumSpanningForest) -> TestCaseResult {
    let input_components = count_input_components(fixture);
    if input_components == 1 && !forest.is_tree() {
        return Err(TestCaseError::fail(format!(
            "input is connected but output has {} components",
            forest.component_count(),
        )));
    }
    if input_components != forest.component_count() {
        return Err(TestCaseError::fail(format!(
            "input has {input_components} components but output has {} ({})",
            forest.component_count(),
            fixture.describe(),
        )));
    }
    Ok(())
}

fn validate_weight_accounting(forest: &MinimumSpanningForest) -> TestCaseResult {
    let sum: f64 = forest.edges().iter().map(Edge::weight).sum();
    if !weights_match(sum, forest.total_weight()) {
        return Err(TestCaseError::fail(format!(
            "reported weight {} differs from edge sum {sum}",
            forest.total_weight(),
        )));
    }
    Ok(())
}

/// Every productive round at least halves the number of components that
/// still have a crossing edge.
fn validate_round_bound(vertex_count: usize, rounds: usize) -> TestCaseResult {
    let bound = usize::try_from(vertex_count.max(1).next_power_of_two().trailing_zeros())
        .unwrap_or(usize::MAX);
    if rounds > bound {
        return Err(TestCaseError::fail(format!(
            "{rounds} rounds exceed the log2 bound {bound} for {vertex_count} vertices",
        )));
    }
    Ok(())
}

/// Counts the connected components of the input graph.
fn count_input_components(fixture: &MstFixture) -> usize {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut components = fixture.vertex_count;

    for &(s, t, _) in &fixture.edges {
        let ra = find_root(&mut parent, s);
        let rb = find_root(&mut parent, t);
        if ra != rb {
            parent[rb] = ra;
            components -= 1;
        }
    }

    components
}
