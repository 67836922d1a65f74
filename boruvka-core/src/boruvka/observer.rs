//! Read-only progress reporting between Borůvka rounds.

use crate::graph::Edge;

/// Snapshot of the forest after one Borůvka round.
#[derive(Clone, Copy, Debug)]
pub struct RoundReport<'a> {
    round: usize,
    added: &'a [Edge],
    edges: &'a [Edge],
    total_weight: f64,
    component_count: usize,
}

impl<'a> RoundReport<'a> {
    pub(super) const fn new(
        round: usize,
        added: &'a [Edge],
        edges: &'a [Edge],
        total_weight: f64,
        component_count: usize,
    ) -> Self {
        Self {
            round,
            added,
            edges,
            total_weight,
            component_count,
        }
    }

    /// Returns the 1-based round index.
    #[must_use]
    #[rustfmt::skip]
    pub fn round(&self) -> usize { self.round }

    /// Returns the edges accepted during this round, in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn added(&self) -> &'a [Edge] { self.added }

    /// Returns every edge accepted so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &'a [Edge] { self.edges }

    /// Returns the cumulative forest weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of components left after this round.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }
}

/// Receives a [`RoundReport`] after every productive Borůvka round.
///
/// Closures taking `&RoundReport<'_>` implement this trait directly.
pub trait RoundObserver {
    /// Called once per round, after the round's unions have been applied.
    fn on_round(&mut self, report: &RoundReport<'_>);
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundReport<'_>),
{
    fn on_round(&mut self, report: &RoundReport<'_>) {
        self(report);
    }
}
