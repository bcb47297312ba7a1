mod common;

use graphgen_core::{GeneratorError, are_disjoint, generate_kneser, subset_count};
use rstest::rstest;

use common::{degrees, girth};

#[rstest]
fn k52_is_the_petersen_graph() {
    let kneser = generate_kneser(5, 2).expect("valid parameters");
    let graph = kneser.graph();
    assert_eq!(graph.vertex_count(), 10);
    assert_eq!(graph.edge_count(), 15);
    assert!(degrees(graph).iter().all(|&degree| degree == 3));
    assert_eq!(girth(graph), Some(5));
}

#[rstest]
fn subset_index_is_lexicographic() {
    let kneser = generate_kneser(4, 2).expect("valid parameters");
    let expected: Vec<Vec<usize>> = vec![
        vec![0, 1],
        vec![0, 2],
        vec![0, 3],
        vec![1, 2],
        vec![1, 3],
        vec![2, 3],
    ];
    assert_eq!(kneser.subsets(), expected.as_slice());
    assert_eq!(kneser.graph().edges(), vec![(0, 5), (1, 4), (2, 3)]);
}

#[rstest]
#[case(5, 2)]
#[case(6, 2)]
#[case(7, 3)]
#[case(6, 1)]
fn edges_join_exactly_the_disjoint_subsets(#[case] n: usize, #[case] r: usize) {
    let kneser = generate_kneser(n, r).expect("valid parameters");
    let graph = kneser.graph();
    assert_eq!(Some(graph.vertex_count()), subset_count(n, r));
    for left in graph.vertices() {
        for right in graph.vertices().filter(|&right| right != left) {
            let disjoint = are_disjoint(
                kneser.subset(left).expect("vertex has a subset"),
                kneser.subset(right).expect("vertex has a subset"),
            );
            assert_eq!(graph.has_edge(left, right), disjoint, "pair ({left}, {right})");
        }
    }
}

#[rstest]
#[case(3, 0)]
#[case(0, 0)]
fn zero_size_subsets_give_a_single_vertex(#[case] n: usize, #[case] r: usize) {
    let kneser = generate_kneser(n, r).expect("valid parameters");
    assert_eq!(kneser.graph().vertex_count(), 1);
    assert_eq!(kneser.graph().edge_count(), 0);
    assert_eq!(kneser.subset(0), Some(&[][..]));
    assert_eq!(kneser.subset(1), None);
}

#[rstest]
fn oversized_subsets_are_rejected() {
    let err = generate_kneser(3, 4).expect_err("r > n must fail");
    assert_eq!(
        err,
        GeneratorError::SubsetLargerThanGroundSet {
            subset_size: 4,
            ground_set_size: 3
        }
    );
}

#[rstest]
fn into_parts_returns_graph_and_index() {
    let (graph, subsets) = generate_kneser(4, 1).expect("valid parameters").into_parts();
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(subsets, vec![vec![0], vec![1], vec![2], vec![3]]);
}
