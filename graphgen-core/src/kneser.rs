//! Kneser graph generator.
//!
//! The vertices of `K(n, r)` are the `r`-element subsets of `{0, …, n-1}`,
//! enumerated in lexicographic order; two vertices are adjacent when their
//! subsets are disjoint. Vertex ids are positions in the enumeration, so the
//! subset index returned next to the graph is the only way to recover subset
//! semantics from a vertex id.

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::{Graph, Result, error::GeneratorError};

/// A Kneser graph together with the subset that defines each vertex.
///
/// `subsets()[v]` is the ascending subset for vertex `v`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KneserGraph {
    graph: Graph,
    subsets: Vec<Vec<usize>>,
}

impl KneserGraph {
    /// The generated graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// All subsets in vertex order.
    #[must_use]
    pub fn subsets(&self) -> &[Vec<usize>] {
        &self.subsets
    }

    /// The subset defining `vertex`, or `None` for an unknown vertex.
    #[must_use]
    pub fn subset(&self, vertex: usize) -> Option<&[usize]> {
        self.subsets.get(vertex).map(Vec::as_slice)
    }

    /// Splits into the graph and the subset index.
    #[must_use]
    pub fn into_parts(self) -> (Graph, Vec<Vec<usize>>) {
        (self.graph, self.subsets)
    }
}

/// Computes `C(n, r)`, returning `None` when the result does not fit in
/// `usize`. Returns `Some(0)` when `r > n`.
///
/// # Examples
/// ```
/// use graphgen_core::subset_count;
///
/// assert_eq!(subset_count(5, 2), Some(10));
/// assert_eq!(subset_count(3, 0), Some(1));
/// assert_eq!(subset_count(2, 3), Some(0));
/// ```
#[must_use]
pub fn subset_count(ground_set_size: usize, subset_size: usize) -> Option<usize> {
    if subset_size > ground_set_size {
        return Some(0);
    }
    let k = subset_size.min(ground_set_size - subset_size);
    let n = u128::try_from(ground_set_size).ok()?;
    let mut count: u128 = 1;
    for step in 0..k {
        let step = u128::try_from(step).ok()?;
        // Each partial product is C(n, step + 1), so the division is exact.
        count = count.checked_mul(n - step)? / (step + 1);
    }
    usize::try_from(count).ok()
}

/// Lists every `r`-subset of `{0, …, n-1}` in lexicographic order.
///
/// # Errors
/// Returns [`GeneratorError::SubsetLargerThanGroundSet`] when `r > n` and
/// [`GeneratorError::SubsetCountOverflow`] when `C(n, r)` does not fit in
/// `usize`.
///
/// # Examples
/// ```
/// use graphgen_core::enumerate_subsets;
///
/// let subsets = enumerate_subsets(4, 2).expect("valid parameters");
/// assert_eq!(
///     subsets,
///     vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
/// );
/// ```
pub fn enumerate_subsets(ground_set_size: usize, subset_size: usize) -> Result<Vec<Vec<usize>>> {
    if subset_size > ground_set_size {
        return Err(GeneratorError::SubsetLargerThanGroundSet {
            subset_size,
            ground_set_size,
        });
    }
    let count = subset_count(ground_set_size, subset_size).ok_or(
        GeneratorError::SubsetCountOverflow {
            ground_set_size,
            subset_size,
        },
    )?;
    let mut subsets = Vec::with_capacity(count);
    subsets.extend((0..ground_set_size).combinations(subset_size));
    Ok(subsets)
}

/// Returns `true` when two ascending subsets share no element.
///
/// # Examples
/// ```
/// use graphgen_core::are_disjoint;
///
/// assert!(are_disjoint(&[0, 2], &[1, 3]));
/// assert!(!are_disjoint(&[0, 2], &[2, 4]));
/// assert!(are_disjoint(&[], &[]));
/// ```
#[must_use]
pub fn are_disjoint(left: &[usize], right: &[usize]) -> bool {
    let mut others = right.iter().peekable();
    left.iter().all(|value| {
        while others.next_if(|other| *other < value).is_some() {}
        others.peek() != Some(&value)
    })
}

/// Builds the Kneser graph `K(n, r)`.
///
/// Every subset becomes a vertex, so `K(n, 0)` is a single isolated vertex.
/// Each unordered pair is tested once; the cost is quadratic in `C(n, r)`.
///
/// # Errors
/// Returns [`GeneratorError::SubsetLargerThanGroundSet`] when `r > n` and
/// [`GeneratorError::SubsetCountOverflow`] when `C(n, r)` overflows.
///
/// # Examples
/// ```
/// use graphgen_core::generate_kneser;
///
/// let petersen = generate_kneser(5, 2).expect("valid parameters");
/// assert_eq!(petersen.graph().vertex_count(), 10);
/// assert_eq!(petersen.graph().edge_count(), 15);
/// assert_eq!(petersen.subset(0), Some(&[0, 1][..]));
/// ```
#[instrument(
    name = "generator.kneser",
    err,
    skip_all,
    fields(n = ground_set_size, r = subset_size),
)]
pub fn generate_kneser(ground_set_size: usize, subset_size: usize) -> Result<KneserGraph> {
    let subsets = enumerate_subsets(ground_set_size, subset_size)?;
    let mut graph = Graph::with_vertices(subsets.len());
    for (i, left) in subsets.iter().enumerate() {
        for (j, right) in subsets.iter().enumerate().skip(i + 1) {
            if are_disjoint(left, right) {
                graph.add_edge(i, j)?;
            }
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "kneser graph generated"
    );
    Ok(KneserGraph { graph, subsets })
}
