use crate::graph::Graph;
use crate::traversal::Analysis;
use crate::types::{Edge, EdgeId};
use fixedbitset::FixedBitSet;

/// Vertices reachable from `start` when `removed` is deleted from the graph.
pub fn reachable_without(graph: &Graph, start: usize, removed: Option<usize>) -> FixedBitSet {
    let mut seen = FixedBitSet::with_capacity(graph.vertex_count());
    let mut stack = vec![start];
    seen.insert(start);
    while let Some(u) = stack.pop() {
        for v in graph.neighbors(u) {
            if Some(v) != removed && !seen.put(v) {
                stack.push(v);
            }
        }
    }
    seen
}

/// Articulation points of the component of `root`, found by deleting each vertex in turn.
pub fn articulation_points(graph: &Graph, root: usize) -> Vec<usize> {
    let component = reachable_without(graph, root, None);
    let mut cuts = Vec::new();
    for v in component.ones() {
        let Some(other) = component.ones().find(|&w| w != v) else {
            continue;
        };
        let rest = reachable_without(graph, other, Some(v));
        if component.ones().any(|w| w != v && !rest.contains(w)) {
            cuts.push(v);
        }
    }
    cuts
}

/// Two distinct non-loop edges share a block iff no single vertex deletion separates them.
/// An edge incident to the deleted vertex stays attached to its other endpoint.
fn same_block(graph: &Graph, e: &Edge, f: &Edge) -> bool {
    (0..graph.vertex_count()).all(|w| {
        let start = if e.source != w { e.source } else { e.target };
        let end = if f.source != w { f.source } else { f.target };
        reachable_without(graph, start, Some(w)).contains(end)
    })
}

/// Blocks of the component of `root` as sorted edge id lists, sorted.
pub fn blocks(graph: &Graph, root: usize) -> Vec<Vec<EdgeId>> {
    let component = reachable_without(graph, root, None);
    let edges: Vec<Edge> = graph
        .edges()
        .filter(|e| component.contains(e.source))
        .collect();

    let mut blocks: Vec<Vec<EdgeId>> = Vec::new();
    let mut representative: Vec<Edge> = Vec::new();
    for e in &edges {
        let found = if e.is_self_loop() {
            None
        } else {
            representative
                .iter()
                .position(|r| !r.is_self_loop() && same_block(graph, r, e))
        };
        match found {
            Some(b) => blocks[b].push(e.id),
            None => {
                blocks.push(vec![e.id]);
                representative.push(*e);
            }
        }
    }

    blocks.sort();
    blocks
}

/// Compares a traversal result with the brute-force answers and checks the partition
/// and low-link invariants.
pub fn assert_matches_brute_force(graph: &Graph, root: usize, analysis: &Analysis) {
    let cuts: Vec<usize> = analysis.articulation_points().collect();
    assert_eq!(cuts, articulation_points(graph, root), "articulation points from root {}", root);

    let mut found: Vec<Vec<EdgeId>> = analysis.components().iter().map(|c| c.edge_ids()).collect();
    found.sort();
    assert_eq!(found, blocks(graph, root), "blocks from root {}", root);

    let mut seen = FixedBitSet::with_capacity(graph.edge_count());
    for component in analysis.components() {
        assert!(!component.is_empty());
        for edge in &component.edges {
            assert!(!seen.put(edge.id), "edge {} reported twice", edge.id);
            assert_eq!(graph.endpoints(edge.id).map(|(u, v)| (u.min(v), u.max(v))), Some(edge.normalized()));
        }
    }

    for v in 0..graph.vertex_count() {
        assert!(analysis.low_link(v) <= analysis.discovery_order(v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::graph_enumerator::GraphEnumeratorState;
    use crate::testing::random_graphs::{random_forest_of_graphs, random_graph, random_tree};
    use crate::traversal::{analyze, analyze_all};

    #[test]
    fn test_oracle_on_path() {
        let g = Graph::build(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(articulation_points(&g, 0), vec![1, 2]);
        assert_eq!(blocks(&g, 0), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_all_small_graphs() {
        for n in 1..=5 {
            for g in GraphEnumeratorState::new(n) {
                for root in [0, n / 2, n - 1] {
                    let analysis = analyze(&g, root).unwrap();
                    assert_matches_brute_force(&g, root, &analysis);
                }
            }
        }
    }

    #[test]
    fn test_random_multigraphs() {
        for seed in 0..200 {
            let n = 2 + seed % 12;
            let m = n - 1 + seed % 15;
            let g = random_graph(n, m, seed);
            let root = seed % n;
            let analysis = analyze(&g, root).unwrap();
            assert_matches_brute_force(&g, root, &analysis);
        }
    }

    #[test]
    fn test_random_trees() {
        for seed in 0..50 {
            let n = 3 + seed % 20;
            let g = random_tree(n, seed);
            let analysis = analyze(&g, 0).unwrap();

            assert_eq!(analysis.component_count(), g.edge_count());
            let inner: Vec<usize> = (0..n).filter(|&v| g.degree(v) > 1).collect();
            assert_eq!(analysis.articulation_points().collect::<Vec<_>>(), inner);
        }
    }

    #[test]
    fn test_analyze_all_matches_per_component_runs() {
        for seed in 0..30 {
            let g = random_forest_of_graphs(3, 6, 8, seed);
            let all = analyze_all(&g);

            let mut cuts = Vec::new();
            let mut blocks_found = Vec::new();
            for root in 0..3 {
                let single = analyze(&g, root).unwrap();
                cuts.extend(single.articulation_points());
                blocks_found.extend(single.components().iter().map(|c| c.edge_ids()));
            }
            cuts.sort();
            blocks_found.sort();

            let mut all_blocks: Vec<Vec<EdgeId>> = all.components().iter().map(|c| c.edge_ids()).collect();
            all_blocks.sort();
            assert_eq!(all.articulation_points().collect::<Vec<_>>(), cuts);
            assert_eq!(all_blocks, blocks_found);
            assert_eq!(all_blocks.iter().map(Vec::len).sum::<usize>(), g.edge_count());
        }
    }
}
