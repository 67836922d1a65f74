//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Each generator emits edges in the order a
//! caller would have supplied them, so edge-list position is part of the
//! generated input.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, Triple, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 64;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 32;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

// ── Probabilistic graph helper ──────────────────────────────────────────

struct ProbabilisticGraphConfig {
    /// Upper bound for the random vertex count (inclusive).
    max_vertices: usize,
    /// Inclusive range from which the per-pair edge probability is sampled.
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
}

/// Adds an edge between each unordered vertex pair with a sampled
/// probability. Endpoint order is randomised so the engine sees both
/// orientations.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    config: ProbabilisticGraphConfig,
    mut weight_generator: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=config.max_vertices);
    let edge_probability: f64 = rng.gen_range(config.edge_prob_range.0..=config.edge_prob_range.1);
    let mut edges = Vec::new();

    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let weight = weight_generator(rng);
                edges.push(oriented(i, j, weight, rng));
            }
        }
    }

    if edges.is_empty() {
        let weight = weight_generator(rng);
        edges.push((0, 1, weight));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: config.distribution,
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

// ── Unique weights ──────────────────────────────────────────────────────

fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.2, 0.6),
            distribution: WeightDistribution::Unique,
        },
        continuous_weight,
    )
}

// ── Many identical weights ──────────────────────────────────────────────

/// Generates a graph where large groups of edges share the same weight.
///
/// This is the most important stress case: most components see several
/// equally cheap crossing edges and must fall back to edge-list order.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let weight_pool_size = rng.gen_range(1..=3);
    let weight_pool: Vec<f64> = (0..weight_pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();

    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.3, 0.7),
            distribution: WeightDistribution::ManyIdentical,
        },
        move |r| weight_pool[r.gen_range(0..weight_pool.len())],
    )
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Builds a random spanning path (guaranteeing connectivity) and then adds a
/// small number of extra edges, including parallel ones.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();

    let mut perm: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut perm, rng);
    for pair in perm.windows(2) {
        let weight = continuous_weight(rng);
        edges.push((pair[0], pair[1], weight));
    }

    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        if i != j {
            let weight = continuous_weight(rng);
            edges.push((i, j, weight));
        }
    }

    // Interleave the path with the extras so the tree is not a prefix.
    shuffle(&mut edges, rng);

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Dense ───────────────────────────────────────────────────────────────

fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: DENSE_MAX_VERTICES,
            edge_prob_range: (0.7, 0.95),
            distribution: WeightDistribution::Dense,
        },
        continuous_weight,
    )
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates a graph with 2-5 components, each with random internal
/// structure, plus occasional isolated vertices. No edge crosses between
/// components.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let component_sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let vertex_count: usize = component_sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &component_sizes {
        generate_component(&mut edges, offset, size, rng);
        offset += size;
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Adds edges for one component, guaranteeing at least one edge when the
/// component has two or more vertices.
fn generate_component(edges: &mut Vec<Triple>, offset: usize, size: usize, rng: &mut SmallRng) {
    let edge_probability: f64 = rng.gen_range(0.3..=0.8);
    let start_len = edges.len();

    for i in 0..size {
        for j in (i + 1)..size {
            if rng.gen_bool(edge_probability) {
                let weight = continuous_weight(rng);
                edges.push(oriented(offset + i, offset + j, weight, rng));
            }
        }
    }

    if size >= 2 && edges.len() == start_len {
        let weight = continuous_weight(rng);
        edges.push((offset, offset + 1, weight));
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Returns the edge with its endpoints in a random order.
fn oriented(a: usize, b: usize, weight: f64, rng: &mut SmallRng) -> Triple {
    if rng.gen_bool(0.5) {
        (a, b, weight)
    } else {
        (b, a, weight)
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Manual `Arbitrary` so `ManyIdentical` can be weighted above the others.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
