use crate::traversal::Analysis;
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

/// Node of a block-cut tree.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum BlockCutNode {
    /// Index into [`Analysis::components`].
    Block(usize),
    /// Articulation point, by vertex id.
    Cut(usize),
}

impl std::fmt::Display for BlockCutNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockCutNode::Block(b) => write!(f, "B{}", b),
            BlockCutNode::Cut(v) => write!(f, "C{}", v),
        }
    }
}

/// Represents the block-cut tree of a graph, containing blocks, cut vertices, and their relationships.
#[derive(Debug, Clone)]
pub struct BlockCutTree {
    /// Number of blocks in the graph, self-loops included.
    pub block_count: usize,
    /// Number of cut vertices in the graph.
    pub cut_count: usize,
    /// Graph of blocks and cut vertices. Blocks come first in component order,
    /// cut vertices follow in ascending vertex order.
    /// Self-loop blocks are left out, they never separate anything.
    pub graph: petgraph::graph::UnGraph<BlockCutNode, ()>,
    block_nodes: Vec<Option<NodeIndex>>,
    cut_nodes: HashMap<usize, NodeIndex>,
    vertex_blocks: HashMap<usize, Vec<usize>>,
}

impl BlockCutTree {
    /// Tree node of the articulation point `v`, `None` if `v` is not one.
    pub fn cut_node(&self, v: usize) -> Option<NodeIndex> {
        self.cut_nodes.get(&v).copied()
    }

    /// Tree node of block `b`, `None` for an unknown block or a self-loop.
    pub fn block_node(&self, b: usize) -> Option<NodeIndex> {
        self.block_nodes.get(b).copied().flatten()
    }

    /// Blocks containing vertex `v`, ascending, self-loops at `v` included.
    /// Not counting self-loops, more than one exactly when `v` is an articulation point.
    pub fn blocks_of(&self, v: usize) -> &[usize] {
        self.vertex_blocks.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Builds the block-cut tree from the result of a biconnectivity traversal.
///
/// Each block is connected to every articulation point it contains.
/// If the analysis covers several connected components the result is a forest.
/// Self-loops are listed by [`BlockCutTree::blocks_of`] but get no node.
pub fn get_block_cut_tree(analysis: &Analysis) -> BlockCutTree {
    let block_count = analysis.component_count();
    let cut_count = analysis.articulation_point_count();
    let mut graph = petgraph::graph::UnGraph::<BlockCutNode, ()>::with_capacity(block_count + cut_count, 0);

    let block_nodes: Vec<Option<NodeIndex>> = analysis
        .components()
        .iter()
        .enumerate()
        .map(|(b, component)| (!component.is_self_loop()).then(|| graph.add_node(BlockCutNode::Block(b))))
        .collect();

    let mut cut_nodes = HashMap::with_capacity(cut_count);
    for v in analysis.articulation_points() {
        cut_nodes.insert(v, graph.add_node(BlockCutNode::Cut(v)));
    }

    let mut vertex_blocks: HashMap<usize, Vec<usize>> = HashMap::new();
    for (b, component) in analysis.components().iter().enumerate() {
        for v in component.vertices() {
            vertex_blocks.entry(v).or_default().push(b);
            if let (Some(block), Some(&cut)) = (block_nodes[b], cut_nodes.get(&v)) {
                graph.add_edge(block, cut, ());
            }
        }
    }

    log::debug!(
        "block-cut tree with {} blocks, {} cuts and {} edges",
        block_count,
        cut_count,
        graph.edge_count()
    );

    BlockCutTree {
        block_count,
        cut_count,
        graph,
        block_nodes,
        cut_nodes,
        vertex_blocks,
    }
}
