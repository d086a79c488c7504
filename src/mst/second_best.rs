//! Second-best minimum spanning tree.

use super::super::error::Result;
use super::super::graph::Graph;
use super::super::weight::Weight;
use super::kruskal::kruskal;
use super::SpanningTree;
use std::collections::VecDeque;
use tracing::{debug, instrument, trace};

///
/// Lightest spanning tree strictly heavier than the minimum spanning tree.
///
/// Every such tree is one swap away from the MST: add a non-tree edge
/// `(u, v, w)` and drop the heaviest tree edge on the `u`-`v` path that is
/// strictly lighter than `w`. For each vertex, one walk over the tree keeps
/// the largest and the second largest (distinct) weights on the path to every
/// other vertex. O(V * (V + E)).
///
/// `None` if no spanning tree is heavier than the MST, e.g. when the graph is a
/// tree itself or all its spanning trees weigh the same.
///
#[instrument(level = "debug", skip_all, fields(n = graph.vertex_count(), m = graph.edge_count()))]
pub fn second_best_mst<W: Weight>(graph: &Graph<W>) -> Result<Option<SpanningTree<W>>> {
    let mst = kruskal(graph)?;
    let n = graph.vertex_count();

    // tree adjacency: (neighbor, position in mst.edges)
    let mut tree = vec![Vec::new(); n];
    let mut in_tree = vec![false; graph.edge_count()];
    for (pos, (e, &id)) in mst.edges.iter().zip(mst.edge_ids.iter()).enumerate() {
        tree[e.from].push((e.to, pos));
        tree[e.to].push((e.from, pos));
        in_tree[id] = true;
    }

    // non-tree edges grouped by one endpoint
    let mut chords = vec![Vec::new(); n];
    for (id, e) in graph.edges().iter().enumerate() {
        if !in_tree[id] && e.from != e.to {
            chords[e.from].push(id);
        }
    }

    // (added edge id, removed position in mst.edges, increase of the total)
    let mut best: Option<(usize, usize, W)> = None;
    for (u, ids) in chords.iter().enumerate() {
        if ids.is_empty() {
            continue;
        }
        let heaviest = path_maxima(&mst, &tree, u);
        for &id in ids {
            let added = graph.edges()[id];
            let (first, second) = heaviest[added.to];
            let removed = [first, second]
                .into_iter()
                .flatten()
                .find(|&pos| is_lighter(mst.edges[pos].weight, added.weight));
            let Some(pos) = removed else {
                continue;
            };
            let increase = added.weight - mst.edges[pos].weight;
            trace!(edge = id, removed = mst.edge_ids[pos], %increase, "swap candidate");
            let improves = match best {
                Some((_, _, b)) => is_lighter(increase, b),
                None => true,
            };
            if improves {
                best = Some((id, pos, increase));
            }
        }
    }

    let second = best.map(|(id, pos, _)| {
        let mut t = SpanningTree::empty();
        for (p, (&e, &tree_id)) in mst.edges.iter().zip(mst.edge_ids.iter()).enumerate() {
            if p == pos {
                t.push(id, graph.edges()[id]);
            } else {
                t.push(tree_id, e);
            }
        }
        t
    });
    debug!(
        mst = %mst.total_weight,
        second = ?second.as_ref().map(|t| t.total_weight),
        "second best mst"
    );
    Ok(second)
}

/// `a < b` by more than the weight tolerance
fn is_lighter<W: Weight>(a: W, b: W) -> bool {
    a < b && !a.sim_eq(b)
}

///
/// For every vertex `v`, positions in `mst.edges` of the heaviest tree edge on
/// the path `root`-`v`, and of the heaviest one strictly lighter than that.
///
fn path_maxima<W: Weight>(
    mst: &SpanningTree<W>,
    tree: &[Vec<(usize, usize)>],
    root: usize,
) -> Vec<(Option<usize>, Option<usize>)> {
    let weight = |pos: usize| mst.edges[pos].weight;
    let mut maxima = vec![(None, None); tree.len()];
    let mut visited = vec![false; tree.len()];
    let mut queue = VecDeque::new();
    visited[root] = true;
    queue.push_back(root);

    while let Some(x) = queue.pop_front() {
        for &(y, pos) in &tree[x] {
            if visited[y] {
                continue;
            }
            visited[y] = true;
            let (first, second): (Option<usize>, Option<usize>) = maxima[x];
            maxima[y] = match first {
                None => (Some(pos), None),
                Some(f) if is_lighter(weight(f), weight(pos)) => (Some(pos), Some(f)),
                Some(f) if !is_lighter(weight(pos), weight(f)) => (first, second),
                Some(_) => match second {
                    Some(s) if !is_lighter(weight(s), weight(pos)) => (first, second),
                    _ => (first, Some(pos)),
                },
            };
            queue.push_back(y);
        }
    }
    maxima
}
