//! Minimum spanning tree via Prim's algorithm.

use super::super::error::Result;
use super::super::graph::{Edge, Graph};
use super::super::weight::Weight;
use super::{check_spanning, check_undirected, SpanningTree};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, instrument};

///
/// Frontier edge `from -> to` ordered so that `BinaryHeap` pops the lightest,
/// and among equal weights the one pushed first.
///
#[derive(Debug, Copy, Clone)]
struct Candidate<W> {
    weight: W,
    seq: usize,
    edge: usize,
    from: usize,
    to: usize,
}

impl<W: Weight> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Candidate<W> {}

impl<W: Weight> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

///
/// Prim's minimum spanning tree algorithm, growing the tree from `start`.
///
/// Time: O(E log E) with a lazy binary heap.
/// The empty graph has the empty tree whatever `start` is.
///
#[instrument(level = "debug", skip(graph))]
pub fn prim<W: Weight>(graph: &Graph<W>, start: usize) -> Result<SpanningTree<W>> {
    check_undirected(graph, "prim")?;
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(SpanningTree::empty());
    }
    graph.check_vertex(start)?;

    let mut visited = vec![false; n];
    let mut frontier = BinaryHeap::new();
    let mut seq = 0;
    let mut tree = SpanningTree::empty();

    let mut visit = |v: usize, visited: &mut [bool], frontier: &mut BinaryHeap<Candidate<W>>| {
        visited[v] = true;
        for arc in graph.arcs(v) {
            if !visited[arc.to] {
                frontier.push(Candidate {
                    weight: arc.weight,
                    seq,
                    edge: arc.edge,
                    from: v,
                    to: arc.to,
                });
                seq += 1;
            }
        }
    };

    visit(start, &mut visited, &mut frontier);
    while let Some(c) = frontier.pop() {
        if visited[c.to] {
            continue;
        }
        tree.push(c.edge, Edge::new(c.from, c.to, c.weight));
        if tree.len() == n - 1 {
            break;
        }
        visit(c.to, &mut visited, &mut frontier);
    }

    check_spanning(graph, &tree)?;
    debug!(total_weight = %tree.total_weight, "prim finished");
    Ok(tree)
}

///
/// Prim's algorithm from vertex 0
///
pub fn prim_from_zero<W: Weight>(graph: &Graph<W>) -> Result<SpanningTree<W>> {
    prim(graph, 0)
}

#[cfg(test)]
mod tests {
    use super::super::kruskal::kruskal;
    use super::super::mocks::*;
    use super::super::spanning_tree::is_spanning_tree;
    use super::*;
    use crate::error::{Error, GraphKind};

    #[test]
    fn star_graph() {
        let g = mock_star();
        let t = prim_from_zero(&g).unwrap();
        assert_eq!(t.total_weight, 10);
        assert!(t.edges.iter().all(|e| e.from == 0 || e.to == 0));
        // from 0 the edges are taken lightest first
        assert_eq!(t.edge_ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn agrees_with_kruskal() {
        let g = mock_clrs_graph();
        let k = kruskal(&g).unwrap();
        for start in 0..g.vertex_count() {
            let p = prim(&g, start).unwrap();
            assert!(p.total_weight.sim_eq(k.total_weight));
            assert!(is_spanning_tree(&g, &p.edges));
        }
        let g = mock_path_with_chords();
        assert_eq!(prim(&g, 2).unwrap().total_weight, kruskal(&g).unwrap().total_weight);
    }

    #[test]
    fn edges_point_away_from_start() {
        let g = mock_triangle();
        let t = prim(&g, 2).unwrap();
        assert_eq!(t.edges, vec![Edge::new(2, 1, 2), Edge::new(1, 0, 1)]);
        assert_eq!(t.total_weight, 3);
    }

    #[test]
    fn trivial_graphs() {
        let g: Graph<i32> = Graph::undirected(0);
        assert!(prim(&g, 0).unwrap().is_empty());
        let g: Graph<i32> = Graph::undirected(1);
        assert!(prim(&g, 0).unwrap().is_empty());
    }

    #[test]
    fn errors() {
        let g = mock_disconnected();
        assert_eq!(
            prim(&g, 0).unwrap_err(),
            Error::DisconnectedGraph {
                selected: 1,
                required: 3
            }
        );
        assert_eq!(
            prim(&mock_star(), 5).unwrap_err(),
            Error::OutOfRangeVertex {
                vertex: 5,
                vertex_count: 5
            }
        );
        let d = Graph::from_edges(2, true, &[(0, 1, 1)]).unwrap();
        assert_eq!(
            prim(&d, 0).unwrap_err(),
            Error::InvalidGraphKind {
                algorithm: "prim",
                expected: GraphKind::Undirected
            }
        );
    }
}
