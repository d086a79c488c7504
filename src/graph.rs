//! # `Graph`
//!
//! Fixed-size adjacency container shared by every algorithm of the crate.
//!
//! It is a petgraph `DiGraph<(), W>` holding
//! * one arc per edge of a directed graph
//! * two arcs (`u -> v` and `v -> u`) per edge of an undirected graph
//!
//! and the list of logical edges in input order. An edge id is the insertion
//! index of the edge, and the arcs of edge `k` are arc `k` (directed) or arcs
//! `2k` and `2k + 1` (undirected).
//!
use super::error::{Error, Result};
use super::weight::Weight;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef; // for EdgeReference.id()

/// Logical edge `from -> to` (or `from - to` on an undirected graph)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Edge<W> {
        Edge { from, to, weight }
    }
    /// the endpoint which is not `v`, if `v` is an endpoint
    pub fn other(&self, v: usize) -> Option<usize> {
        if self.from == v {
            Some(self.to)
        } else if self.to == v {
            Some(self.from)
        } else {
            None
        }
    }
}

impl<W: std::fmt::Display> std::fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{} ({})", self.from, self.to, self.weight)
    }
}

/// One outgoing arc seen from a vertex
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Arc<W> {
    pub to: usize,
    pub weight: W,
    /// id of the logical edge this arc belongs to
    pub edge: usize,
}

/// Adjacency-based graph with `n` vertices `0..n`
#[derive(Debug, Clone)]
pub struct Graph<W = f64> {
    inner: DiGraph<(), W>,
    edges: Vec<Edge<W>>,
    directed: bool,
    weighted: bool,
}

impl<W: Weight> Graph<W> {
    /// Create a graph with `n` vertices and no edges
    pub fn new(n: usize, directed: bool, weighted: bool) -> Graph<W> {
        let mut inner = DiGraph::with_capacity(n, 0);
        for _ in 0..n {
            inner.add_node(());
        }
        Graph {
            inner,
            edges: Vec::new(),
            directed,
            weighted,
        }
    }
    /// Weighted directed graph, i.e. a flow network
    pub fn directed(n: usize) -> Graph<W> {
        Graph::new(n, true, true)
    }
    /// Weighted undirected graph
    pub fn undirected(n: usize) -> Graph<W> {
        Graph::new(n, false, true)
    }
    /// Weighted graph from a list of `(from, to, weight)`
    pub fn from_edges(n: usize, directed: bool, edges: &[(usize, usize, W)]) -> Result<Graph<W>> {
        let mut graph = Graph::new(n, directed, true);
        for &(u, v, w) in edges {
            graph.add_edge(u, v, w)?;
        }
        Ok(graph)
    }

    ///
    /// Add an edge and return its id.
    ///
    /// Parallel edges are kept as separate edges. On an unweighted graph
    /// `weight` is ignored and the edge gets `W::unit()`.
    ///
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<usize> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let weight = if self.weighted { weight } else { W::unit() };
        let (a, b) = (NodeIndex::new(u), NodeIndex::new(v));
        self.inner.add_edge(a, b, weight);
        if !self.directed {
            self.inner.add_edge(b, a, weight);
        }
        self.edges.push(Edge::new(u, v, weight));
        Ok(self.edges.len() - 1)
    }
    /// Add an edge of unit weight
    pub fn add_unweighted_edge(&mut self, u: usize, v: usize) -> Result<usize> {
        self.add_edge(u, v, W::unit())
    }

    ///
    /// Weight of the edge `u -> v`.
    ///
    /// If parallel edges exist, the one inserted first wins.
    /// `None` if there is no such edge.
    ///
    pub fn get_weight(&self, u: usize, v: usize) -> Option<W> {
        if u >= self.vertex_count() || v >= self.vertex_count() {
            return None;
        }
        self.inner
            .edges_connecting(NodeIndex::new(u), NodeIndex::new(v))
            .min_by_key(|er| er.id())
            .map(|er| *er.weight())
    }
    ///
    /// Sum of the weights of all parallel edges `u -> v` (zero if none).
    /// This is the capacity the flow algorithms see between the pair.
    ///
    pub fn weight_between(&self, u: usize, v: usize) -> W {
        if u >= self.vertex_count() || v >= self.vertex_count() {
            return W::zero();
        }
        self.inner
            .edges_connecting(NodeIndex::new(u), NodeIndex::new(v))
            .map(|er| *er.weight())
            .sum()
    }
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.get_weight(u, v).is_some()
    }

    /// `(neighbor, weight)` of the outgoing arcs of `u` in insertion order
    pub fn neighbors(&self, u: usize) -> Result<Vec<(usize, W)>> {
        self.check_vertex(u)?;
        Ok(self.arcs(u).into_iter().map(|a| (a.to, a.weight)).collect())
    }
    /// outgoing arcs of `u` in insertion order. `u` must be in range.
    pub(crate) fn arcs(&self, u: usize) -> Vec<Arc<W>> {
        let mut arcs: Vec<(EdgeIndex, Arc<W>)> = self
            .inner
            .edges(NodeIndex::new(u))
            .map(|er| {
                let arc = Arc {
                    to: er.target().index(),
                    weight: *er.weight(),
                    edge: self.edge_id(er.id()),
                };
                (er.id(), arc)
            })
            .collect();
        // petgraph walks the adjacency list newest first
        arcs.sort_by_key(|(e, _)| *e);
        arcs.into_iter().map(|(_, arc)| arc).collect()
    }
    fn edge_id(&self, arc: EdgeIndex) -> usize {
        if self.directed {
            arc.index()
        } else {
            arc.index() / 2
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }
    /// Number of logical edges (an undirected edge counts once)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    pub fn is_directed(&self) -> bool {
        self.directed
    }
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }
    /// All logical edges, indexed by edge id
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
    pub fn edge(&self, id: usize) -> Option<&Edge<W>> {
        self.edges.get(id)
    }
    /// The underlying petgraph arcs
    pub fn as_petgraph(&self) -> &DiGraph<(), W> {
        &self.inner
    }

    pub(crate) fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(Error::OutOfRangeVertex {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
