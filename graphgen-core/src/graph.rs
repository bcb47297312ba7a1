//! Simple undirected graph container used by every generator.
//!
//! Vertices are the dense id range `0..vertex_count`; edges are unordered
//! pairs stored once. The container is a thin layer over petgraph's
//! index-based [`UnGraph`] that enforces the simple-graph invariants (no
//! self-loops, no parallel edges, endpoints always in range).

use std::ops::Range;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::GraphError;

/// A simple undirected graph over dense integer vertex ids.
///
/// # Examples
/// ```
/// use graphgen_core::Graph;
///
/// let mut graph = Graph::with_vertices(3);
/// graph.add_edge(0, 1).expect("endpoints are valid");
/// graph.add_edge(1, 2).expect("endpoints are valid");
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.has_edge(2, 1));
/// assert_eq!(graph.degree(1), Some(2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    inner: UnGraph<(), ()>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `count` isolated vertices `0..count`.
    #[must_use]
    pub fn with_vertices(count: usize) -> Self {
        let mut inner = UnGraph::with_capacity(count, 0);
        for _ in 0..count {
            inner.add_node(());
        }
        Self { inner }
    }

    /// Builds a graph from a vertex count and an edge list.
    ///
    /// Duplicate pairs collapse into a single edge.
    ///
    /// # Errors
    /// Returns [`GraphError`] if any pair is a self-loop or names a vertex
    /// outside `0..vertex_count`.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1), (1, 0), (1, 2)]).expect("valid edges");
    /// assert_eq!(graph.edges(), vec![(0, 1), (1, 2)]);
    /// ```
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::with_vertices(vertex_count);
        for (left, right) in edges {
            graph.add_edge(left, right)?;
        }
        Ok(graph)
    }

    /// Appends a new isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> usize {
        self.inner.add_node(()).index()
    }

    /// Joins `left` and `right`.
    ///
    /// Returns `true` when the edge was inserted and `false` when it was
    /// already present.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when both endpoints match and
    /// [`GraphError::VertexOutOfRange`] when either endpoint is unknown.
    pub fn add_edge(&mut self, left: usize, right: usize) -> Result<bool, GraphError> {
        let left_index = self.index_of(left)?;
        let right_index = self.index_of(right)?;
        if left == right {
            return Err(GraphError::SelfLoop { vertex: left });
        }
        if self.inner.find_edge(left_index, right_index).is_some() {
            return Ok(false);
        }
        self.inner.add_edge(left_index, right_index, ());
        Ok(true)
    }

    /// Returns `true` if `left` and `right` are adjacent.
    ///
    /// Unknown vertices are never adjacent to anything.
    #[must_use]
    pub fn has_edge(&self, left: usize, right: usize) -> bool {
        match (self.index_of(left), self.index_of(right)) {
            (Ok(left_index), Ok(right_index)) => {
                self.inner.find_edge(left_index, right_index).is_some()
            }
            _ => false,
        }
    }

    /// Returns the neighbours of `vertex` in ascending order, or `None` for an
    /// unknown vertex.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> Option<Vec<usize>> {
        let index = self.index_of(vertex).ok()?;
        let mut neighbours: Vec<usize> = self
            .inner
            .neighbors(index)
            .map(NodeIndex::index)
            .collect();
        neighbours.sort_unstable();
        Some(neighbours)
    }

    /// Returns the degree of `vertex`, or `None` for an unknown vertex.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> Option<usize> {
        let index = self.index_of(vertex).ok()?;
        Some(self.inner.neighbors(index).count())
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// The vertex id range `0..vertex_count`.
    #[must_use]
    pub fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    /// Every edge once as `(low, high)`, sorted ascending.
    #[must_use]
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .inner
            .edge_references()
            .map(|edge| {
                let source = edge.source().index();
                let target = edge.target().index();
                (source.min(target), source.max(target))
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    fn index_of(&self, vertex: usize) -> Result<NodeIndex, GraphError> {
        if vertex < self.vertex_count() {
            Ok(NodeIndex::new(vertex))
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count() && self.edges() == other.edges()
    }
}

impl Eq for Graph {}
