//! Spanning tree validation

use super::super::graph::{Edge, Graph};
use super::super::weight::Weight;
use petgraph::unionfind::UnionFind;

///
/// Check if `edges` is a spanning tree of `graph`, i.e.
/// - it has exactly `n - 1` edges
/// - every edge exists in `graph` (in either orientation)
/// - it has no cycle
///
/// `n - 1` edges without a cycle connect all `n` vertices.
///
pub fn is_spanning_tree<W: Weight>(graph: &Graph<W>, edges: &[Edge<W>]) -> bool {
    let n = graph.vertex_count();
    if edges.len() != n.saturating_sub(1) {
        return false;
    }

    let mut uf: UnionFind<usize> = UnionFind::new(n);
    edges.iter().all(|e| {
        let exists = graph.has_edge(e.from, e.to) || graph.has_edge(e.to, e.from);
        // union fails if both ends are already connected
        exists && uf.union(e.from, e.to)
    })
}
