//! Residual network related definitions
//! - ResidualEdge
//! - ResidualDirection
//! - ResidualGraph / ResidualNetwork
//!
use super::super::graph::Graph;
use super::super::weight::Weight;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use std::collections::VecDeque;

// basic definitions

/// Edge attributes used in ResidualGraph
#[derive(Debug, Default, Copy, Clone)]
pub struct ResidualEdge<W: Weight> {
    /// The movable amount of the flow along this arc
    pub residual: W,
    /// Original edge id of the source graph
    pub target: usize,
    /// Forward or Backward
    pub direction: ResidualDirection,
}

impl<W: Weight> ResidualEdge<W> {
    pub fn new(residual: W, target: usize, direction: ResidualDirection) -> ResidualEdge<W> {
        ResidualEdge {
            residual,
            target,
            direction,
        }
    }
}

/// Residual direction enum
/// residual arc has two types
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ResidualDirection {
    /// Forward arc: pushing on it increases the flow of the edge
    #[default]
    Forward,
    /// Backward arc: pushing on it cancels the flow of the edge
    Backward,
}

/// ResidualGraph definition
pub type ResidualGraph<W> = DiGraph<(), ResidualEdge<W>>;

///
/// ResidualGraph with the outgoing arcs of each vertex in insertion order.
///
/// For each edge `e = (v -> w, c)` of the flow network with flow `f`
///
/// ```text
/// v -> w   arc 2e   = (c - f, Forward)
/// w -> v   arc 2e+1 = (f, Backward)
/// ```
///
/// so the twin of arc `a` is `a ^ 1`, and a push of `d` on `a` moves `d`
/// residual from `a` to its twin.
///
#[derive(Debug, Clone)]
pub struct ResidualNetwork<W: Weight> {
    graph: ResidualGraph<W>,
    edge_count: usize,
    adjacency: Vec<Vec<EdgeIndex>>,
}

impl<W: Weight> ResidualNetwork<W> {
    ///
    /// Convert a flow network (directed Graph) with zero flow into ResidualNetwork.
    ///
    pub fn from_graph(graph: &Graph<W>) -> ResidualNetwork<W> {
        let n = graph.vertex_count();
        let mut rg: ResidualGraph<W> = DiGraph::with_capacity(n, 2 * graph.edge_count());
        for _ in 0..n {
            rg.add_node(());
        }
        let mut adjacency = vec![Vec::new(); n];

        for (id, edge) in graph.edges().iter().enumerate() {
            let (v, w) = (NodeIndex::new(edge.from), NodeIndex::new(edge.to));
            let up = rg.add_edge(
                v,
                w,
                ResidualEdge::new(edge.weight, id, ResidualDirection::Forward),
            );
            let down = rg.add_edge(
                w,
                v,
                ResidualEdge::new(W::zero(), id, ResidualDirection::Backward),
            );
            adjacency[edge.from].push(up);
            adjacency[edge.to].push(down);
        }

        ResidualNetwork {
            graph: rg,
            edge_count: graph.edge_count(),
            adjacency,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }
    /// outgoing arcs of `v`, forward and backward, in insertion order
    pub fn arcs(&self, v: usize) -> &[EdgeIndex] {
        &self.adjacency[v]
    }
    pub fn head(&self, arc: EdgeIndex) -> usize {
        self.graph.raw_edges()[arc.index()].target().index()
    }
    pub fn residual(&self, arc: EdgeIndex) -> W {
        self.graph[arc].residual
    }
    pub fn twin(arc: EdgeIndex) -> EdgeIndex {
        EdgeIndex::new(arc.index() ^ 1)
    }

    ///
    /// Push `amount` along `arc`.
    /// `amount` must not exceed `residual(arc)`.
    ///
    pub fn push(&mut self, arc: EdgeIndex, amount: W) {
        self.graph[arc].residual -= amount;
        self.graph[Self::twin(arc)].residual += amount;
    }
    ///
    /// Push `amount` along every arc of a path.
    ///
    pub fn push_path(&mut self, path: &[EdgeIndex], amount: W) {
        for &arc in path {
            self.push(arc, amount);
        }
    }
    ///
    /// Minimum residual along a path, i.e. the bottleneck.
    ///
    pub fn bottleneck(&self, path: &[EdgeIndex]) -> Option<W> {
        path.iter()
            .map(|&arc| self.residual(arc))
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// current flow on each graph edge, indexed by edge id
    pub fn edge_flows(&self) -> Vec<W> {
        // the backward arc of an edge holds exactly its flow
        let mut flows = vec![W::zero(); self.edge_count];
        for arc in self.graph.edge_weights() {
            if arc.direction == ResidualDirection::Backward {
                flows[arc.target] = arc.residual;
            }
        }
        flows
    }

    ///
    /// Vertices reachable from `source` by arcs of strictly positive residual.
    ///
    pub fn reachable_from(&self, source: usize) -> Vec<bool> {
        let mut visited = vec![false; self.vertex_count()];
        let mut queue = VecDeque::new();
        visited[source] = true;
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            for &arc in self.arcs(v) {
                let w = self.head(arc);
                if !visited[w] && self.residual(arc).exceeds_eps() {
                    visited[w] = true;
                    queue.push_back(w);
                }
            }
        }
        visited
    }

    ///
    /// BFS distance (in arcs of positive residual) from `source`,
    /// `None` for unreachable vertices. This is the level graph of Dinic.
    ///
    pub fn levels_from(&self, source: usize) -> Vec<Option<usize>> {
        let mut level = vec![None; self.vertex_count()];
        let mut queue = VecDeque::new();
        level[source] = Some(0);
        queue.push_back((source, 0));

        while let Some((v, d)) = queue.pop_front() {
            for &arc in self.arcs(v) {
                let w = self.head(arc);
                if level[w].is_none() && self.residual(arc).exceeds_eps() {
                    level[w] = Some(d + 1);
                    queue.push_back((w, d + 1));
                }
            }
        }
        level
    }
}
