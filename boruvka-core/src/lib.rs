//! Borůvka minimum spanning tree engine.
//!
//! Build a validated [`Graph`], then call [`compute_mst`] for the minimum
//! spanning tree (or forest, when the graph is disconnected) or
//! [`compute_mst_with_observer`] to receive a [`RoundReport`] after every
//! round. [`DisjointSet`] is the union-find structure that tracks component
//! membership between rounds.
//!
//! # Cargo features
//!
//! - `parallel` (default): large edge lists are scanned for each round's
//!   cheapest edges on the Rayon pool. Results are identical to the
//!   sequential scan.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod boruvka;
mod error;
mod graph;
mod union_find;

pub use crate::{
    boruvka::{
        MinimumSpanningForest, RoundObserver, RoundReport, compute_mst, compute_mst_with_components,
        compute_mst_with_observer,
    },
    error::{GraphError, GraphErrorCode, Result},
    graph::{Edge, Graph},
    union_find::DisjointSet,
};
