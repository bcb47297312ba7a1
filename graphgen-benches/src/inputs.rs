//! Seeded benchmark inputs.
//!
//! Inputs are drawn from a fixed seed so every run measures the same graphs.

use graphgen_core::{
    CircularArc, GeneratorError, Graph, RandomCaterpillarConfig, RandomCircularArcConfig,
    generate_random_caterpillar, sample_arcs, sample_spine,
};
use rand::{SeedableRng, rngs::SmallRng};

/// Seed used for every benchmark input.
pub const SEED: u64 = 42;

/// Draws `count` arcs with lengths between one and three units.
///
/// # Errors
/// Returns [`GeneratorError`] if the fixed length range is rejected.
pub fn arcs(count: usize) -> Result<Vec<CircularArc>, GeneratorError> {
    let config = RandomCircularArcConfig {
        arc_count: count,
        min_length: 1.0,
        max_length: 3.0,
    };
    sample_arcs(&config, &mut SmallRng::seed_from_u64(SEED))
}

/// Draws leg counts for a spine of `spine_length` vertices, up to four legs
/// each.
///
/// # Errors
/// Returns [`GeneratorError`] if the fixed leg range is rejected.
pub fn spine(spine_length: usize) -> Result<Vec<usize>, GeneratorError> {
    sample_spine(&caterpillar_config(spine_length), &mut SmallRng::seed_from_u64(SEED))
}

/// Builds a random caterpillar on a spine of `spine_length` vertices.
///
/// # Errors
/// Returns [`GeneratorError`] if the fixed leg range is rejected.
pub fn caterpillar(spine_length: usize) -> Result<Graph, GeneratorError> {
    generate_random_caterpillar(
        &caterpillar_config(spine_length),
        &mut SmallRng::seed_from_u64(SEED),
    )
}

const fn caterpillar_config(spine_length: usize) -> RandomCaterpillarConfig {
    RandomCaterpillarConfig {
        spine_length,
        min_legs: 0,
        max_legs: 4,
    }
}
