use crate::error::InvalidRootError;
use crate::graph::{Graph, other_endpoint};
use crate::types::{Edge, EdgeId};
use fixedbitset::FixedBitSet;
use petgraph::Undirected;
use petgraph::graph::Edges;
use petgraph::visit::EdgeRef;

const UNVISITED: usize = usize::MAX;

/// One biconnected component, given as the edges that form it.
///
/// Edges appear in the order they were popped off the edge stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub edges: Vec<Edge>,
}

impl Component {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// A component made of a single self-loop.
    pub fn is_self_loop(&self) -> bool {
        matches!(self.edges.as_slice(), [edge] if edge.is_self_loop())
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.iter().any(|e| e.id == id)
    }

    /// Distinct endpoints of the component's edges, ascending.
    pub fn vertices(&self) -> Vec<usize> {
        let mut vertices: Vec<usize> = self
            .edges
            .iter()
            .flat_map(|e| [e.source, e.target])
            .collect();
        vertices.sort_unstable();
        vertices.dedup();
        vertices
    }

    /// Edge ids, ascending.
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        let mut ids: Vec<EdgeId> = self.edges.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids
    }
}

/// Result of a biconnectivity traversal: articulation points, the edge partition into
/// biconnected components and the per-vertex DFS numbering that produced them.
#[derive(Debug, Clone)]
pub struct Analysis {
    vertex_count: usize,
    edge_count: usize,
    articulation_points: FixedBitSet,
    components: Vec<Component>,
    discovery: Vec<usize>,
    low: Vec<usize>,
}

impl Analysis {
    /// Articulation points in ascending order.
    pub fn articulation_points(&self) -> impl Iterator<Item = usize> + '_ {
        self.articulation_points.ones()
    }

    pub fn is_articulation_point(&self, v: usize) -> bool {
        self.articulation_points.contains(v)
    }

    pub fn articulation_point_count(&self) -> usize {
        self.articulation_points.count_ones(..)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Vertex count of the analyzed graph.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Edge count of the analyzed graph, including edges the traversal did not reach.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Preorder number of `v`, starting at 1. `None` if the traversal never reached `v`.
    pub fn discovery_order(&self, v: usize) -> Option<usize> {
        self.discovery.get(v).copied().filter(|&d| d != UNVISITED)
    }

    /// Smallest discovery order reachable from the subtree of `v` using at most one back edge.
    pub fn low_link(&self, v: usize) -> Option<usize> {
        self.discovery_order(v).map(|_| self.low[v])
    }

    pub fn is_visited(&self, v: usize) -> bool {
        self.discovery_order(v).is_some()
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }
}

/// A vertex on the DFS path together with the position of its edge scan.
struct Frame<'g> {
    vertex: usize,
    /// Tree edge the vertex was entered by, `None` for the root.
    parent_edge: Option<EdgeId>,
    edges: Edges<'g, (), Undirected>,
}

/// Mutable state of the traversal, owned by a single `analyze` call.
///
/// Per-vertex values are kept in parallel arrays indexed by vertex id.
struct TraversalContext<'g> {
    graph: &'g Graph,
    time: usize,
    discovery: Vec<usize>,
    low: Vec<usize>,
    child_count: Vec<usize>,
    explored: FixedBitSet,
    edge_stack: Vec<Edge>,
    work: Vec<Frame<'g>>,
    articulation_points: FixedBitSet,
    components: Vec<Component>,
}

impl<'g> TraversalContext<'g> {
    fn new(graph: &'g Graph) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            time: 0,
            discovery: vec![UNVISITED; n],
            low: vec![UNVISITED; n],
            child_count: vec![0; n],
            explored: FixedBitSet::with_capacity(graph.edge_count()),
            edge_stack: Vec::new(),
            work: Vec::new(),
            articulation_points: FixedBitSet::with_capacity(n),
            components: Vec::new(),
        }
    }

    fn discover(&mut self, v: usize, parent_edge: Option<EdgeId>) {
        self.time += 1;
        self.discovery[v] = self.time;
        self.low[v] = self.time;
        self.work.push(Frame {
            vertex: v,
            parent_edge,
            edges: self.graph.incident_edges(v),
        });
    }

    /// Traverses the connected component of `root`.
    fn run(&mut self, root: usize) {
        let components_before = self.components.len();
        self.discover(root, None);

        while let Some(frame) = self.work.last_mut() {
            let v = frame.vertex;
            let Some(edge) = frame.edges.next() else {
                if let Some(done) = self.work.pop() {
                    self.retreat(done);
                }
                continue;
            };

            let id = edge.id().index();
            // each edge is handled once, from the endpoint that sees it first;
            // this also skips the tree edge leading back to the parent
            if self.explored.put(id) {
                continue;
            }

            let x = other_endpoint(&edge, v);
            if x == v {
                log::trace!("self-loop {} at {}", id, v);
                self.components.push(Component {
                    edges: vec![Edge::new(id, v, v)],
                });
            } else if self.discovery[x] == UNVISITED {
                self.child_count[v] += 1;
                self.edge_stack.push(Edge::new(id, v, x));
                self.discover(x, Some(id));
            } else {
                // unexplored edge to a visited vertex leads to an ancestor
                debug_assert!(self.discovery[x] < self.discovery[v]);
                self.low[v] = self.low[v].min(self.discovery[x]);
                self.edge_stack.push(Edge::new(id, v, x));
            }
        }

        if !self.edge_stack.is_empty() {
            let edges: Vec<Edge> = self.edge_stack.drain(..).rev().collect();
            self.components.push(Component { edges });
        }

        log::debug!(
            "traversal from {} closed {} components",
            root,
            self.components.len() - components_before
        );
    }

    /// Called once `child` has no edges left: propagates its low-link to the parent
    /// and closes a component if the parent separates it.
    fn retreat(&mut self, child: Frame<'g>) {
        let Some(parent_edge) = child.parent_edge else {
            return;
        };
        let Some(parent) = self.work.last() else {
            return;
        };
        let (v, x) = (parent.vertex, child.vertex);
        let is_root = parent.parent_edge.is_none();

        self.low[v] = self.low[v].min(self.low[x]);

        let separates = if is_root {
            self.child_count[v] > 1
        } else {
            self.low[x] >= self.discovery[v]
        };
        if separates {
            log::trace!("articulation point {} closes subtree of {}", v, x);
            self.articulation_points.insert(v);
            self.close_component(parent_edge);
        }
    }

    /// Pops edges up to and including the tree edge `stop` into a new component.
    fn close_component(&mut self, stop: EdgeId) {
        let mut edges = Vec::new();
        while let Some(edge) = self.edge_stack.pop() {
            edges.push(edge);
            if edge.id == stop {
                break;
            }
        }
        self.components.push(Component { edges });
    }

    fn finish(self) -> Analysis {
        Analysis {
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            articulation_points: self.articulation_points,
            components: self.components,
            discovery: self.discovery,
            low: self.low,
        }
    }
}

/// Finds the articulation points and biconnected components of the connected component containing `root`.
///
/// Runs a single depth-first traversal on an explicit stack, so path-like graphs of any size are fine.
/// Vertices outside the component of `root` are left unvisited, use [`analyze_all`] to cover every component.
///
/// Parallel edges are supported: the edge a vertex was entered by is recognised by its id,
/// so a second edge to the parent counts as a back edge. A self-loop forms a component on its own.
pub fn analyze(graph: &Graph, root: usize) -> Result<Analysis, InvalidRootError> {
    if !graph.contains_vertex(root) {
        return Err(InvalidRootError {
            root,
            vertex_count: graph.vertex_count(),
        });
    }

    let mut ctx = TraversalContext::new(graph);
    ctx.run(root);
    let analysis = ctx.finish();

    log::debug!(
        "root {}: {} articulation points, {} components",
        root,
        analysis.articulation_point_count(),
        analysis.component_count()
    );
    Ok(analysis)
}

/// Runs the traversal from every vertex not reached by a previous run, in increasing id order,
/// and merges the results. Isolated vertices contribute nothing.
pub fn analyze_all(graph: &Graph) -> Analysis {
    let mut ctx = TraversalContext::new(graph);
    let mut roots = 0;
    for v in 0..graph.vertex_count() {
        if ctx.discovery[v] == UNVISITED {
            ctx.run(v);
            roots += 1;
        }
    }
    let analysis = ctx.finish();

    log::debug!(
        "{} traversals: {} articulation points, {} components",
        roots,
        analysis.articulation_point_count(),
        analysis.component_count()
    );
    analysis
}
