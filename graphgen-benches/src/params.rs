//! Benchmark parameter types.
//!
//! Each type renders as the Criterion parameter label of one run.

use std::fmt;

/// Parameters for a Kneser graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct KneserBenchParams {
    /// Ground set size `n`.
    pub ground_set_size: usize,
    /// Subset size `r`.
    pub subset_size: usize,
}

impl fmt::Display for KneserBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},r={}", self.ground_set_size, self.subset_size)
    }
}

/// Parameters for a benchmark sized by a single element count.
#[derive(Clone, Copy, Debug)]
pub struct SizeBenchParams {
    /// Arcs, spine vertices or graph vertices, depending on the benchmark.
    pub count: usize,
}

impl fmt::Display for SizeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn labels_name_every_parameter() {
        let kneser = KneserBenchParams {
            ground_set_size: 9,
            subset_size: 3,
        };
        assert_eq!(kneser.to_string(), "n=9,r=3");
        assert_eq!(SizeBenchParams { count: 40 }.to_string(), "n=40");
    }
}
