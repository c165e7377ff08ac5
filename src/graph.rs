use crate::error::ValidationError;
use crate::types::{Edge, EdgeId, UnGraph};
use petgraph::Undirected;
use petgraph::graph::{EdgeIndex, Edges, NodeIndex};
use petgraph::visit::EdgeRef;

/// Largest vertex or edge count petgraph's default `u32` index can address.
const MAX_INDEX_COUNT: usize = u32::MAX as usize;

/// Undirected graph on the dense vertex set `0..vertex_count`.
///
/// Built once from an edge list and immutable afterwards, so any number of traversals can read it at the same time.
/// Every edge keeps its position in the input list as its id.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraph,
}

impl Graph {
    /// Builds the adjacency structure, inserting each edge at both endpoints.
    ///
    /// Fails if an endpoint is outside `0..vertex_count`, or if there are more vertices or edges
    /// than petgraph's `u32` indices can address.
    pub fn build<I>(vertex_count: usize, edges: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        if vertex_count > MAX_INDEX_COUNT {
            return Err(ValidationError::TooManyVertices {
                vertex_count,
                max: MAX_INDEX_COUNT,
            });
        }

        let edges = edges.into_iter();
        let edge_hint = edges.size_hint().0;
        if edge_hint > MAX_INDEX_COUNT {
            return Err(ValidationError::TooManyEdges {
                edge_count: edge_hint,
                max: MAX_INDEX_COUNT,
            });
        }
        let mut inner = UnGraph::with_capacity(vertex_count, edge_hint);
        for _ in 0..vertex_count {
            inner.add_node(());
        }

        for (edge, (u, v)) in edges.enumerate() {
            if edge >= MAX_INDEX_COUNT {
                return Err(ValidationError::TooManyEdges {
                    edge_count: edge + 1,
                    max: MAX_INDEX_COUNT,
                });
            }
            for vertex in [u, v] {
                if vertex >= vertex_count {
                    return Err(ValidationError::VertexOutOfRange {
                        edge,
                        vertex,
                        vertex_count,
                    });
                }
            }
            inner.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }

        log::debug!(
            "built graph with {} vertices and {} edges",
            inner.node_count(),
            inner.edge_count()
        );

        Ok(Self { inner })
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of undirected edges, each counted once.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.vertex_count()
    }

    /// Vertices adjacent to `v`, once per connecting edge. Empty for an unknown vertex.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.incident_edges(v).map(move |e| other_endpoint(&e, v))
    }

    /// Number of edges incident to `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.incident_edges(v).count()
    }

    /// All edges in id order, oriented as they were given.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.inner
            .edge_references()
            .map(|e| Edge::new(e.id().index(), e.source().index(), e.target().index()))
    }

    pub fn endpoints(&self, id: EdgeId) -> Option<(usize, usize)> {
        self.inner
            .edge_endpoints(EdgeIndex::new(id))
            .map(|(u, v)| (u.index(), v.index()))
    }

    /// Underlying petgraph graph, e.g. for running petgraph's own algorithms on it.
    pub fn as_petgraph(&self) -> &UnGraph {
        &self.inner
    }

    /// Resumable iterator over the edges incident to `v`.
    pub(crate) fn incident_edges(&self, v: usize) -> Edges<'_, (), Undirected> {
        self.inner.edges(NodeIndex::new(v))
    }
}

/// Copies the topology of any undirected petgraph graph, dropping weights.
impl<N, E> From<&petgraph::graph::UnGraph<N, E>> for Graph {
    fn from(graph: &petgraph::graph::UnGraph<N, E>) -> Self {
        let mut inner = UnGraph::with_capacity(graph.node_count(), graph.edge_count());
        for _ in graph.node_indices() {
            inner.add_node(());
        }
        for e in graph.edge_references() {
            inner.add_edge(e.source(), e.target(), ());
        }
        Self { inner }
    }
}

/// The endpoint of `edge` that is not `v` (or `v` itself for a self-loop).
pub(crate) fn other_endpoint<R: EdgeRef<NodeId = NodeIndex>>(edge: &R, v: usize) -> usize {
    let (s, t) = (edge.source().index(), edge.target().index());
    if s == v { t } else { s }
}
