//! Caterpillar graph generators.
//!
//! A caterpillar is a path (the spine) with pendant vertices (legs) hanging
//! off spine vertices. Spine vertices take ids `0..n` in path order; legs are
//! numbered from `n` upwards, spine vertex by spine vertex.

#[cfg(feature = "random")]
use rand::Rng;
use tracing::{debug, instrument};

#[cfg(feature = "random")]
use crate::error::GeneratorError;
use crate::{Graph, Result};

/// Builds the caterpillar whose spine vertex `i` carries `legs[i]` pendant
/// vertices.
///
/// An empty spine yields the empty graph.
///
/// # Errors
/// Returns [`crate::GeneratorError::Graph`] only if the underlying container
/// rejects an edge, which the construction never requests.
///
/// # Examples
/// ```
/// use graphgen_core::generate_caterpillar;
///
/// let graph = generate_caterpillar(&[1, 0, 2]).expect("caterpillar builds");
/// assert_eq!(graph.vertex_count(), 6);
/// assert_eq!(graph.edges(), vec![(0, 1), (0, 3), (1, 2), (2, 4), (2, 5)]);
/// ```
#[instrument(
    name = "generator.caterpillar",
    err,
    skip(legs),
    fields(spine_length = legs.len(), leg_total = legs.iter().sum::<usize>()),
)]
pub fn generate_caterpillar(legs: &[usize]) -> Result<Graph> {
    let spine_length = legs.len();
    let mut graph = Graph::with_vertices(spine_length);
    for (vertex, next) in (0..spine_length).zip(1..spine_length) {
        graph.add_edge(vertex, next)?;
    }

    for (spine_vertex, &count) in legs.iter().enumerate() {
        for _ in 0..count {
            let leg = graph.add_vertex();
            graph.add_edge(spine_vertex, leg)?;
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "caterpillar generated"
    );
    Ok(graph)
}

/// Parameters for [`generate_random_caterpillar`].
#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomCaterpillarConfig {
    /// Number of spine vertices.
    pub spine_length: usize,
    /// Smallest leg count a spine vertex may receive.
    pub min_legs: usize,
    /// Largest leg count a spine vertex may receive (inclusive).
    pub max_legs: usize,
}

#[cfg(feature = "random")]
impl RandomCaterpillarConfig {
    /// Checks that the leg range is not reversed.
    ///
    /// # Errors
    /// Returns [`GeneratorError::LegRangeInverted`] when `min_legs > max_legs`.
    pub const fn validate(&self) -> Result<()> {
        if self.min_legs > self.max_legs {
            return Err(GeneratorError::LegRangeInverted {
                min_legs: self.min_legs,
                max_legs: self.max_legs,
            });
        }
        Ok(())
    }
}

/// Draws one leg count per spine vertex, uniformly from
/// `min_legs..=max_legs`.
///
/// # Errors
/// Returns [`GeneratorError::LegRangeInverted`] before drawing anything when
/// the range is reversed.
#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
pub fn sample_spine<R>(config: &RandomCaterpillarConfig, rng: &mut R) -> Result<Vec<usize>>
where
    R: Rng + ?Sized,
{
    config.validate()?;
    Ok((0..config.spine_length)
        .map(|_| rng.gen_range(config.min_legs..=config.max_legs))
        .collect())
}

/// Builds a caterpillar with randomly drawn leg counts.
///
/// Runs are reproducible when `rng` is seeded.
///
/// # Errors
/// Returns [`GeneratorError::LegRangeInverted`] when `min_legs > max_legs`.
///
/// # Examples
/// ```
/// use graphgen_core::{RandomCaterpillarConfig, generate_random_caterpillar};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let config = RandomCaterpillarConfig { spine_length: 4, min_legs: 1, max_legs: 1 };
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = generate_random_caterpillar(&config, &mut rng).expect("valid config");
/// assert_eq!(graph.vertex_count(), 8);
/// assert_eq!(graph.edge_count(), 7);
/// ```
#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
#[instrument(
    name = "generator.random_caterpillar",
    err,
    skip(config, rng),
    fields(
        spine_length = config.spine_length,
        min_legs = config.min_legs,
        max_legs = config.max_legs
    ),
)]
pub fn generate_random_caterpillar<R>(config: &RandomCaterpillarConfig, rng: &mut R) -> Result<Graph>
where
    R: Rng + ?Sized,
{
    let legs = sample_spine(config, rng)?;
    generate_caterpillar(&legs)
}
