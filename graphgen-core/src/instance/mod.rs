//! Persistence of generated instances.
//!
//! An instance stored under the prefix `p` occupies three files: `p.graph`
//! holds the graph as graph6 text with the `>>graph6<<` header, while
//! `p.list.k` and `p.list.u` hold the two integer vectors as list literals.
//! Every file is written to a `.part` sibling first and renamed into place.

mod graph6;
mod literal;

use std::{
    collections::BTreeMap,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

pub use self::graph6::{GRAPH6_HEADER, GRAPH6_VERTEX_LIMIT, decode_graph6, encode_graph6};
pub use self::literal::{Literal, parse_literal};
use crate::{Graph, error::InstanceError};

/// Suffix of the graph file.
pub const GRAPH_SUFFIX: &str = ".graph";
/// Suffix of the `k` vector file.
pub const K_SUFFIX: &str = ".list.k";
/// Suffix of the `u` vector file.
pub const U_SUFFIX: &str = ".list.u";

const PART_SUFFIX: &str = ".part";

/// A graph together with its two per-vertex integer vectors.
///
/// The vectors are opaque to the library; their length need not match the
/// vertex count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Instance {
    /// The generated graph.
    pub graph: Graph,
    /// First auxiliary vector.
    pub k: Vec<i64>,
    /// Second auxiliary vector.
    pub u: Vec<i64>,
}

impl Instance {
    /// Bundles a graph with its vectors.
    #[must_use]
    pub const fn new(graph: Graph, k: Vec<i64>, u: Vec<i64>) -> Self {
        Self { graph, k, u }
    }
}

/// Appends `suffix` to the final component of `prefix`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use graphgen_core::{K_SUFFIX, instance_path};
///
/// assert_eq!(instance_path(Path::new("out/run.v1"), K_SUFFIX), Path::new("out/run.v1.list.k"));
/// ```
#[must_use]
pub fn instance_path(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(prefix.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Writes `instance` to the three files under `prefix`.
///
/// Existing files are replaced.
///
/// # Errors
/// Returns [`InstanceError`] when the graph cannot be encoded or a file cannot
/// be written.
///
/// # Examples
/// ```
/// use graphgen_core::{Instance, generate_caterpillar, read_instance, write_instance};
///
/// let dir = tempfile::tempdir().expect("temp dir");
/// let prefix = dir.path().join("cat");
/// let graph = generate_caterpillar(&[1, 2]).expect("caterpillar builds");
/// let instance = Instance::new(graph, vec![1; 5], vec![0; 5]);
/// write_instance(&instance, &prefix).expect("write succeeds");
/// assert_eq!(read_instance(&prefix).expect("read succeeds"), instance);
/// ```
#[instrument(
    name = "codec.write_instance",
    err,
    skip_all,
    fields(
        prefix = %prefix.display(),
        vertices = instance.graph.vertex_count(),
        edges = instance.graph.edge_count(),
    ),
)]
pub fn write_instance(instance: &Instance, prefix: &Path) -> Result<(), InstanceError> {
    write_graph(&instance.graph, &instance_path(prefix, GRAPH_SUFFIX))?;
    write_int_vector(&instance.k, &instance_path(prefix, K_SUFFIX))?;
    write_int_vector(&instance.u, &instance_path(prefix, U_SUFFIX))?;
    debug!(k_len = instance.k.len(), u_len = instance.u.len(), "instance written");
    Ok(())
}

/// Reads the instance stored under `prefix`.
///
/// # Errors
/// Returns [`InstanceError`] when a file is missing or unreadable, the graph
/// is not valid graph6, or a vector file is not a list of integers.
#[instrument(name = "codec.read_instance", err, skip_all, fields(prefix = %prefix.display()))]
pub fn read_instance(prefix: &Path) -> Result<Instance, InstanceError> {
    let graph = read_graph(&instance_path(prefix, GRAPH_SUFFIX))?;
    let k = read_int_vector(&instance_path(prefix, K_SUFFIX))?;
    let u = read_int_vector(&instance_path(prefix, U_SUFFIX))?;
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "instance read"
    );
    Ok(Instance { graph, k, u })
}

/// Writes `graph` as a headed graph6 file.
///
/// # Errors
/// Returns [`InstanceError::Graph6`] for graphs too large for the format and
/// [`InstanceError::Io`] when the file cannot be written.
pub fn write_graph(graph: &Graph, path: &Path) -> Result<(), InstanceError> {
    let encoded = encode_graph6(graph).map_err(|source| InstanceError::Graph6 {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomic(path, &format!("{GRAPH6_HEADER}{encoded}\n"))
}

/// Reads a graph6 file, with or without header.
///
/// # Errors
/// Returns [`InstanceError::Io`] or [`InstanceError::Graph6`].
pub fn read_graph(path: &Path) -> Result<Graph, InstanceError> {
    let text = read_text(path)?;
    decode_graph6(&text).map_err(|source| InstanceError::Graph6 {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a single literal to `path`.
///
/// # Errors
/// Returns [`InstanceError::Literal`] when the literal holds a non-finite
/// float and [`InstanceError::Io`] when the file cannot be written.
pub fn write_vector(literal: &Literal, path: &Path) -> Result<(), InstanceError> {
    let rendered = literal.render().map_err(|source| InstanceError::Literal {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomic(path, &rendered)
}

/// Reads the single literal stored in `path`.
///
/// # Errors
/// Returns [`InstanceError::Io`] or [`InstanceError::Literal`].
pub fn read_vector(path: &Path) -> Result<Literal, InstanceError> {
    let text = read_text(path)?;
    parse_literal(&text).map_err(|source| InstanceError::Literal {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes an integer vector as a list literal.
///
/// # Errors
/// Returns [`InstanceError::Io`] when the file cannot be written.
pub fn write_int_vector(values: &[i64], path: &Path) -> Result<(), InstanceError> {
    write_vector(&Literal::from(values), path)
}

/// Reads an integer vector; both list and tuple literals are accepted.
///
/// # Errors
/// Returns [`InstanceError::UnexpectedLiteral`] when the file holds anything
/// other than a sequence of integers.
pub fn read_int_vector(path: &Path) -> Result<Vec<i64>, InstanceError> {
    let literal = read_vector(path)?;
    literal
        .to_int_vec()
        .map_err(|found| unexpected(path, "a list of integers", found))
}

/// Writes an integer-keyed mapping as a dict literal in key order.
///
/// # Errors
/// Returns [`InstanceError::Io`] when the file cannot be written.
pub fn write_dictionary(map: &BTreeMap<i64, i64>, path: &Path) -> Result<(), InstanceError> {
    write_vector(&Literal::from(map), path)
}

/// Reads an integer-keyed mapping written by [`write_dictionary`].
///
/// # Errors
/// Returns [`InstanceError::UnexpectedLiteral`] when the file holds anything
/// other than a dict of integers.
pub fn read_dictionary(path: &Path) -> Result<BTreeMap<i64, i64>, InstanceError> {
    let literal = read_vector(path)?;
    literal
        .to_int_map()
        .map_err(|found| unexpected(path, "a dict of integers", found))
}

fn unexpected(path: &Path, expected: &'static str, found: &Literal) -> InstanceError {
    InstanceError::UnexpectedLiteral {
        path: path.to_path_buf(),
        expected,
        found: found.to_string(),
    }
}

fn read_text(path: &Path) -> Result<String, InstanceError> {
    fs::read_to_string(path).map_err(|source| InstanceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), InstanceError> {
    let part_path = instance_path(path, PART_SUFFIX);
    let io_error = |source: io::Error| InstanceError::Io {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&part_path, contents).map_err(io_error)?;
    fs::rename(&part_path, path).map_err(io_error)
}
