/// Wrapper for petgraph's graph type.
///
/// Node indices are the dense vertex ids, edge indices are the positions in the input edge list.
pub type UnGraph = petgraph::graph::UnGraph<(), ()>;

/// Identifier of an edge, its position in the edge list the graph was built from.
pub type EdgeId = usize;

/// An undirected edge together with its id.
///
/// Inside a biconnected component `source` is the endpoint the traversal explored the edge from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
    pub id: EdgeId,
    pub source: usize,
    pub target: usize,
}

impl Edge {
    pub fn new(id: EdgeId, source: usize, target: usize) -> Self {
        Self { id, source, target }
    }

    /// Endpoints ordered as `(min, max)`, handy for comparing edges regardless of orientation.
    pub fn normalized(&self) -> (usize, usize) {
        (self.source.min(self.target), self.source.max(self.target))
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}
