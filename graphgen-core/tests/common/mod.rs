#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::collections::VecDeque;

use graphgen_core::{CircularArc, Graph};
use graphgen_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;
use rand::{SeedableRng, rngs::SmallRng};

#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

#[must_use]
pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[must_use]
pub fn arc(start: f64, end: f64) -> CircularArc {
    CircularArc::new(start, end).expect("test arcs are valid")
}

#[must_use]
pub fn degrees(graph: &Graph) -> Vec<usize> {
    graph
        .vertices()
        .map(|vertex| graph.degree(vertex).expect("vertex exists"))
        .collect()
}

/// Length of the shortest cycle, or `None` for a forest.
#[must_use]
pub fn girth(graph: &Graph) -> Option<usize> {
    let mut shortest: Option<usize> = None;
    for source in graph.vertices() {
        let mut depth = vec![None; graph.vertex_count()];
        let mut parent = vec![usize::MAX; graph.vertex_count()];
        depth[source] = Some(0_usize);
        let mut queue = VecDeque::from([source]);
        while let Some(vertex) = queue.pop_front() {
            let here = depth[vertex].expect("queued vertices have a depth");
            for next in graph.neighbours(vertex).expect("vertex exists") {
                match depth[next] {
                    None => {
                        depth[next] = Some(here + 1);
                        parent[next] = vertex;
                        queue.push_back(next);
                    }
                    Some(there) if parent[vertex] != next => {
                        let cycle = here + there + 1;
                        shortest = Some(shortest.map_or(cycle, |best| best.min(cycle)));
                    }
                    Some(_) => {}
                }
            }
        }
    }
    shortest
}

/// Whether every vertex is reachable from vertex 0.
#[must_use]
pub fn is_connected(graph: &Graph) -> bool {
    if graph.is_empty() {
        return true;
    }
    let mut seen = vec![false; graph.vertex_count()];
    seen[0] = true;
    let mut stack = vec![0];
    while let Some(vertex) = stack.pop() {
        for next in graph.neighbours(vertex).expect("vertex exists") {
            if !seen[next] {
                seen[next] = true;
                stack.push(next);
            }
        }
    }
    seen.into_iter().all(|reached| reached)
}
