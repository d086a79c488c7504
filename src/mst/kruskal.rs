//! Minimum spanning tree via Kruskal's algorithm.
//!
//! Uses petgraph's union-find (path compression and union by rank).

use super::super::error::Result;
use super::super::graph::Graph;
use super::super::weight::Weight;
use super::{check_spanning, check_undirected, SpanningTree};
use itertools::Itertools;
use petgraph::unionfind::UnionFind;
use std::cmp::Ordering;
use tracing::{debug, instrument};

///
/// Kruskal's minimum spanning tree algorithm.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
/// Edges of equal weight are taken in input order.
///
#[instrument(level = "debug", skip_all, fields(n = graph.vertex_count(), m = graph.edge_count()))]
pub fn kruskal<W: Weight>(graph: &Graph<W>) -> Result<SpanningTree<W>> {
    check_undirected(graph, "kruskal")?;
    let n = graph.vertex_count();
    let required = n.saturating_sub(1);

    // stable sort, so ties keep input order
    let edges = graph
        .edges()
        .iter()
        .enumerate()
        .sorted_by(|(_, a), (_, b)| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    let mut uf: UnionFind<usize> = UnionFind::new(n);
    let mut tree = SpanningTree::empty();
    for (id, edge) in edges {
        if tree.len() == required {
            break;
        }
        // skip edges closing a cycle
        if uf.union(edge.from, edge.to) {
            tree.push(id, *edge);
        }
    }

    check_spanning(graph, &tree)?;
    debug!(total_weight = %tree.total_weight, "kruskal finished");
    Ok(tree)
}
