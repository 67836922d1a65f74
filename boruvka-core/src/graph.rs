//! Validated undirected weighted graphs.
//!
//! A [`Graph`] is a vertex count plus an edge list. Vertices are the implicit
//! ids `0..vertex_count`. Edges are stored in canonical undirected form
//! (`source < target`) and remember their position in the input list, which
//! the Borůvka engine uses as the edge identity for tie-breaking and
//! deduplication.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{GraphError, Result};

/// A single undirected edge in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
    index: usize,
}

impl Edge {
    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    /// Returns the position of the edge in the graph's edge list.
    #[must_use]
    #[rustfmt::skip]
    pub fn index(&self) -> usize { self.index }

    /// Returns both endpoints as `(source, target)`.
    #[must_use]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }

    /// Returns `true` when `self` should replace `other` as a cheapest edge.
    ///
    /// Only a strictly smaller weight wins; equal weights fall back to the
    /// lower edge-list position so that the first-seen edge is kept.
    pub(crate) fn is_cheaper_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }
}

impl Eq for Edge {}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An undirected weighted graph over the vertices `0..vertex_count`.
///
/// Every stored edge has valid, distinct endpoints and a finite weight. The
/// graph need not be connected; disconnected inputs produce a spanning forest.
///
/// # Examples
/// ```
/// use boruvka_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 1.0)?;
/// graph.add_edge(2, 1, 2.0)?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.edges()[1].endpoints(), (1, 2));
/// # Ok::<(), boruvka_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Builds a graph from `(u, v, weight)` triples.
    ///
    /// # Errors
    /// Returns the first [`GraphError`] raised by [`Graph::add_edge`].
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let edges = edges.into_iter();
        let mut graph = Self {
            vertex_count,
            edges: Vec::with_capacity(edges.size_hint().0),
        };
        for (left, right, weight) in edges {
            graph.add_edge(left, right, weight)?;
        }
        Ok(graph)
    }

    /// Appends an undirected edge between `left` and `right`.
    ///
    /// The endpoints are stored as `(min, max)`. Parallel edges are allowed;
    /// each keeps its own position in the edge list.
    ///
    /// # Errors
    /// Returns an error when:
    /// - either endpoint is `>= vertex_count`
    /// - `left == right`
    /// - `weight` is NaN or infinite
    pub fn add_edge(&mut self, left: usize, right: usize, weight: f64) -> Result<()> {
        for vertex in [left, right] {
            if vertex >= self.vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        if left == right {
            return Err(GraphError::SelfLoop { vertex: left });
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight { left, right });
        }
        // `total_cmp` orders -0.0 below 0.0; store a single zero so equal
        // weights always fall through to the index tie-break.
        let weight = if weight == 0.0 { 0.0 } else { weight };

        let (source, target) = if left < right {
            (left, right)
        } else {
            (right, left)
        };
        let index = self.edges.len();
        trace!(source, target, weight, index, "edge added");
        self.edges.push(Edge {
            source,
            target,
            weight,
            index,
        });
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}
