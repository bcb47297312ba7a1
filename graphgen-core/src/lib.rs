//! Graph generators for caterpillar, Kneser and circular-arc graph families.
//!
//! Every generator returns a fresh [`Graph`] over dense vertex ids. Generated
//! graphs can be stored alongside two integer vectors with
//! [`write_instance`] and read back with [`read_instance`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod caterpillar;
mod circular_arc;
mod error;
mod graph;
mod instance;
mod kneser;

#[cfg(test)]
pub(crate) mod test_utils;

#[cfg(feature = "random")]
pub use crate::{
    caterpillar::{RandomCaterpillarConfig, generate_random_caterpillar, sample_spine},
    circular_arc::{
        MIN_ARC_LENGTH, RandomCircularArcConfig, generate_random_circular_arc, sample_arcs,
    },
};
pub use crate::{
    caterpillar::generate_caterpillar,
    circular_arc::{ArcKind, CIRCUMFERENCE, CircularArc, arcs_intersect, generate_circular_arc},
    error::{
        ArcEndpoint, GeneratorError, GeneratorErrorCode, Graph6Error, GraphError, GraphErrorCode,
        InstanceError, InstanceErrorCode, LiteralError, Result,
    },
    graph::Graph,
    instance::{
        GRAPH_SUFFIX, GRAPH6_HEADER, GRAPH6_VERTEX_LIMIT, Instance, K_SUFFIX, Literal, U_SUFFIX,
        decode_graph6, encode_graph6, instance_path, parse_literal, read_dictionary, read_graph,
        read_instance, read_int_vector, read_vector, write_dictionary, write_graph,
        write_instance, write_int_vector, write_vector,
    },
    kneser::{KneserGraph, are_disjoint, enumerate_subsets, generate_kneser, subset_count},
};
