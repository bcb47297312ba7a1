//! Circular-arc graph generators.
//!
//! Each arc becomes one vertex, indexed by its position in the input; two
//! vertices are adjacent when [`arcs_intersect`] holds for their arcs.

mod arc;

pub use arc::{ArcKind, CIRCUMFERENCE, CircularArc, arcs_intersect};

#[cfg(feature = "random")]
use rand::Rng;
use tracing::{debug, instrument};

#[cfg(feature = "random")]
use crate::error::GeneratorError;
use crate::{Graph, Result};

/// Builds the intersection graph of `arcs`.
///
/// Arcs that meet nothing still contribute an isolated vertex.
///
/// # Errors
/// Returns [`crate::GeneratorError::Graph`] only if the underlying container
/// rejects an edge, which the construction never requests.
///
/// # Examples
/// ```
/// use graphgen_core::{CircularArc, generate_circular_arc};
///
/// let arcs = [(1.0, 3.0), (2.0, 5.0), (6.0, 8.0)]
///     .into_iter()
///     .map(CircularArc::try_from)
///     .collect::<Result<Vec<_>, _>>()
///     .expect("valid arcs");
/// let graph = generate_circular_arc(&arcs).expect("graph builds");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges(), vec![(0, 1)]);
/// ```
#[instrument(
    name = "generator.circular_arc",
    err,
    skip(arcs),
    fields(arcs = arcs.len()),
)]
pub fn generate_circular_arc(arcs: &[CircularArc]) -> Result<Graph> {
    let mut graph = Graph::with_vertices(arcs.len());
    for (j1, left) in arcs.iter().enumerate() {
        for (j2, right) in arcs.iter().enumerate().skip(j1 + 1) {
            if arcs_intersect(left, right) {
                graph.add_edge(j1, j2)?;
            }
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "circular-arc graph generated"
    );
    Ok(graph)
}

/// Smallest gap an arc length keeps from zero and from the full circle.
///
/// Lengths closer to either bound can round to a zero-length arc once the
/// start point is added.
#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
pub const MIN_ARC_LENGTH: f64 = 1e-9;

/// Parameters for [`generate_random_circular_arc`].
#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomCircularArcConfig {
    /// Number of arcs (and vertices) to generate.
    pub arc_count: usize,
    /// Shortest arc length.
    pub min_length: f64,
    /// Longest arc length.
    pub max_length: f64,
}

#[cfg(feature = "random")]
impl RandomCircularArcConfig {
    /// Checks `MIN_ARC_LENGTH <= min_length < max_length <= CIRCUMFERENCE -
    /// MIN_ARC_LENGTH`.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidArcLengthRange`] when the range is
    /// empty, reversed, non-finite or within [`MIN_ARC_LENGTH`] of zero or
    /// the full circumference.
    pub fn validate(&self) -> Result<()> {
        let valid = self.min_length.is_finite()
            && self.max_length.is_finite()
            && self.min_length >= MIN_ARC_LENGTH
            && self.min_length < self.max_length
            && self.max_length <= CIRCUMFERENCE - MIN_ARC_LENGTH;
        if valid {
            Ok(())
        } else {
            Err(GeneratorError::InvalidArcLengthRange {
                min_length: self.min_length,
                max_length: self.max_length,
                circumference: CIRCUMFERENCE,
            })
        }
    }
}

/// Draws `arc_count` arcs with uniform starts and uniform lengths.
///
/// An arc whose end would pass the circumference wraps through zero.
///
/// # Errors
/// Returns [`GeneratorError::InvalidArcLengthRange`] before drawing anything
/// when the length range is invalid.
#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
pub fn sample_arcs<R>(config: &RandomCircularArcConfig, rng: &mut R) -> Result<Vec<CircularArc>>
where
    R: Rng + ?Sized,
{
    config.validate()?;
    (0..config.arc_count)
        .map(|_| {
            let start = rng.gen_range(0.0..CIRCUMFERENCE);
            let length = rng.gen_range(config.min_length..=config.max_length);
            let end = start + length;
            if end < CIRCUMFERENCE {
                CircularArc::new(start, end)
            } else {
                CircularArc::new(start, end - CIRCUMFERENCE)
            }
        })
        .collect()
}

/// Builds a circular-arc graph from randomly drawn arcs.
///
/// Runs are reproducible when `rng` is seeded.
///
/// Lengths must lie strictly inside `(0, CIRCUMFERENCE)`, keeping at least
/// [`MIN_ARC_LENGTH`] from both ends. A zero length would give an arc with
/// `start == end` and a full-circle length would wrap back onto its start,
/// and neither is a valid [`CircularArc`]. So `min_length = 0.0` is rejected
/// even though the range itself is well formed.
///
/// # Errors
/// Returns [`GeneratorError::InvalidArcLengthRange`] when the length range
/// is invalid.
///
/// # Examples
/// ```
/// use graphgen_core::{RandomCircularArcConfig, generate_random_circular_arc};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let config = RandomCircularArcConfig { arc_count: 12, min_length: 1.0, max_length: 3.0 };
/// let mut rng = SmallRng::seed_from_u64(11);
/// let graph = generate_random_circular_arc(&config, &mut rng).expect("valid config");
/// assert_eq!(graph.vertex_count(), 12);
/// ```
#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
#[instrument(
    name = "generator.random_circular_arc",
    err,
    skip(config, rng),
    fields(
        arc_count = config.arc_count,
        min_length = config.min_length,
        max_length = config.max_length
    ),
)]
pub fn generate_random_circular_arc<R>(
    config: &RandomCircularArcConfig,
    rng: &mut R,
) -> Result<Graph>
where
    R: Rng + ?Sized,
{
    let arcs = sample_arcs(config, rng)?;
    generate_circular_arc(&arcs)
}
