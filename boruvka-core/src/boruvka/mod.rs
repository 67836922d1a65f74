//! Borůvka minimum spanning tree (MST) construction.
//!
//! Each round freezes the component representatives, selects the cheapest
//! crossing edge of every component against that snapshot, and then applies
//! the deduplicated candidates to the disjoint-set one at a time in
//! edge-list order. A candidate is only accepted if its endpoints still lie
//! in different components when its turn comes.
//!
//! The loop stops once a single component remains or a round adds nothing.
//! Disconnected inputs therefore yield a minimum spanning forest, reported
//! through [`MinimumSpanningForest::component_count`].

mod observer;
mod selection;

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    error::{GraphError, Result},
    graph::{Edge, Graph},
    union_find::DisjointSet,
};

pub use self::observer::{RoundObserver, RoundReport};

use self::selection::{cheapest_edges, unique_candidates};

/// The output of a Borůvka run.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<Edge>,
    total_weight: f64,
    component_count: usize,
    rounds: usize,
}

impl MinimumSpanningForest {
    /// Returns the selected edges in the order they were added.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of rounds that added at least one edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn rounds(&self) -> usize { self.rounds }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest, returning `(edges, total_weight)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge>, f64) {
        (self.edges, self.total_weight)
    }
}

/// Computes a minimum spanning forest with Borůvka's algorithm.
///
/// Equal-weight candidates are resolved in favour of the edge that appears
/// first in [`Graph::edges`], so repeated runs over the same graph produce
/// identical output.
///
/// # Examples
/// ```
/// use boruvka_core::{Graph, compute_mst};
///
/// let graph = Graph::from_edges(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)])?;
/// let forest = compute_mst(&graph);
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 3.0);
/// assert_eq!(forest.edges().len(), 2);
/// # Ok::<(), boruvka_core::GraphError>(())
/// ```
#[must_use]
pub fn compute_mst(graph: &Graph) -> MinimumSpanningForest {
    compute_mst_with_observer(graph, &mut |_: &RoundReport<'_>| {})
}

/// Computes a minimum spanning forest, reporting progress after each round.
///
/// `observer` receives one [`RoundReport`] per round that added edges. Rounds
/// that find no crossing edge end the run without a report.
///
/// # Examples
/// ```
/// use boruvka_core::{Graph, RoundReport, compute_mst_with_observer};
///
/// let graph = Graph::from_edges(4, [(0, 1, 1.0), (2, 3, 1.0), (1, 2, 5.0)])?;
/// let mut added_per_round = Vec::new();
/// let forest = compute_mst_with_observer(&graph, &mut |report: &RoundReport<'_>| {
///     added_per_round.push(report.added().len());
/// });
/// assert_eq!(added_per_round, vec![2, 1]);
/// assert_eq!(forest.rounds(), 2);
/// # Ok::<(), boruvka_core::GraphError>(())
/// ```
pub fn compute_mst_with_observer<O>(graph: &Graph, observer: &mut O) -> MinimumSpanningForest
where
    O: RoundObserver + ?Sized,
{
    run(graph, DisjointSet::new(graph.vertex_count()), observer)
}

/// Computes a minimum spanning forest starting from a caller-supplied
/// partition.
///
/// Vertices that already share a component in `components` are treated as
/// joined: no edge is selected between them, and the returned forest holds
/// only the edges added on top of that partition. A fresh
/// [`DisjointSet::new`] gives the same result as [`compute_mst_with_observer`].
///
/// # Errors
/// Returns [`GraphError::ComponentsMismatch`] when `components` does not
/// track exactly `graph.vertex_count()` vertices.
///
/// # Examples
/// ```
/// use boruvka_core::{DisjointSet, Graph, RoundReport, compute_mst_with_components};
///
/// let graph = Graph::from_edges(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)])?;
/// let mut components = DisjointSet::new(3);
/// components.union(0, 1);
/// let forest = compute_mst_with_components(&graph, components, &mut |_: &RoundReport<'_>| {})?;
/// assert_eq!(forest.edges().len(), 1);
/// assert_eq!(forest.total_weight(), 2.0);
/// assert!(forest.is_tree());
/// # Ok::<(), boruvka_core::GraphError>(())
/// ```
pub fn compute_mst_with_components<O>(
    graph: &Graph,
    components: DisjointSet,
    observer: &mut O,
) -> Result<MinimumSpanningForest>
where
    O: RoundObserver + ?Sized,
{
    if components.len() != graph.vertex_count() {
        return Err(GraphError::ComponentsMismatch {
            len: components.len(),
            vertex_count: graph.vertex_count(),
        });
    }
    Ok(run(graph, components, observer))
}

#[instrument(
    name = "boruvka.compute_mst",
    skip_all,
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
fn run<O>(graph: &Graph, components: DisjointSet, observer: &mut O) -> MinimumSpanningForest
where
    O: RoundObserver + ?Sized,
{
    let mut engine = Engine::new(graph, components);

    while engine.components.component_count() > 1 && !graph.edges().is_empty() {
        let added_from = engine.edges.len();
        let added = engine.run_round();
        if added == 0 {
            trace!(round = engine.rounds + 1, "no crossing edges remain");
            break;
        }
        engine.rounds += 1;

        debug!(
            round = engine.rounds,
            added,
            components = engine.components.component_count(),
            weight = engine.total_weight,
            "round complete"
        );
        observer.on_round(&RoundReport::new(
            engine.rounds,
            &engine.edges[added_from..],
            &engine.edges,
            engine.total_weight,
            engine.components.component_count(),
        ));
    }

    let forest = engine.finish();
    if forest.component_count > 1 {
        warn!(
            components = forest.component_count,
            "graph is disconnected; returning a spanning forest"
        );
    }
    info!(
        edges = forest.edges.len(),
        weight = forest.total_weight,
        rounds = forest.rounds,
        "minimum spanning forest computed"
    );
    forest
}

/// Per-run state: the borrowed graph, the component partition and the
/// accumulated forest.
struct Engine<'g> {
    graph: &'g Graph,
    components: DisjointSet,
    edges: Vec<Edge>,
    total_weight: f64,
    rounds: usize,
}

impl<'g> Engine<'g> {
    fn new(graph: &'g Graph, components: DisjointSet) -> Self {
        Self {
            graph,
            edges: Vec::with_capacity(components.component_count().saturating_sub(1)),
            components,
            total_weight: 0.0,
            rounds: 0,
        }
    }

    /// Runs one selection + union round and returns the number of edges added.
    fn run_round(&mut self) -> usize {
        let roots = self.components.snapshot();
        let candidates = unique_candidates(cheapest_edges(self.graph.edges(), &roots));

        let mut added = 0;
        for edge in candidates {
            let (source, target) = edge.endpoints();
            if !self.components.union(source, target) {
                trace!(
                    index = edge.index(),
                    source, target, "candidate joined earlier this round; skipped"
                );
                continue;
            }
            self.edges.push(edge);
            self.total_weight += edge.weight();
            added += 1;
        }
        added
    }

    fn finish(self) -> MinimumSpanningForest {
        MinimumSpanningForest {
            edges: self.edges,
            total_weight: self.total_weight,
            component_count: self.components.component_count(),
            rounds: self.rounds,
        }
    }
}
