//! Flow definitions
//! - Flow
//! - validity predicates of a flow on a Graph
use super::super::error::{Error, Result};
use super::super::graph::Graph;
use super::super::weight::Weight;
use std::collections::BTreeMap;

/// Flow definitions
///
/// Flow f is a mapping of an amount f(e) to each edge e of a flow network,
/// kept both per edge id and aggregated per `(from, to)` pair.
/// The pair map only holds nonzero amounts.
#[derive(PartialEq, Debug, Clone)]
pub struct Flow<W: Weight> {
    edges: Vec<W>,
    pairs: BTreeMap<(usize, usize), W>,
}

impl<W: Weight> Flow<W> {
    ///
    /// Build a Flow from the amount of each edge of `graph`, indexed by edge id.
    ///
    /// `LengthMismatch` unless there is exactly one amount per edge.
    ///
    pub fn from_edge_flows(graph: &Graph<W>, amounts: Vec<W>) -> Result<Flow<W>> {
        if amounts.len() != graph.edge_count() {
            return Err(Error::LengthMismatch {
                what: "edge flows",
                expected: graph.edge_count(),
                got: amounts.len(),
            });
        }
        let mut pairs = BTreeMap::new();
        for (edge, &f) in graph.edges().iter().zip(amounts.iter()) {
            if f.exceeds_eps() {
                *pairs.entry((edge.from, edge.to)).or_insert_with(W::zero) += f;
            }
        }
        Ok(Flow {
            edges: amounts,
            pairs,
        })
    }
    pub fn zero(graph: &Graph<W>) -> Flow<W> {
        Flow {
            edges: vec![W::zero(); graph.edge_count()],
            pairs: BTreeMap::new(),
        }
    }
    /// total flow from `u` to `v` over all parallel edges
    pub fn get(&self, u: usize, v: usize) -> W {
        self.pairs.get(&(u, v)).copied().unwrap_or_else(W::zero)
    }
    /// flow on the edge with id `e`
    pub fn edge(&self, e: usize) -> Option<W> {
        self.edges.get(e).copied()
    }
    /// flows indexed by edge id
    pub fn edge_flows(&self) -> &[W] {
        &self.edges
    }
    /// `((from, to), amount)` of every pair with nonzero flow, sorted by pair
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), W)> + '_ {
        self.pairs.iter().map(|(&k, &f)| (k, f))
    }
    /// flows leaving `u`, as `to -> amount`
    pub fn successors(&self, u: usize) -> BTreeMap<usize, W> {
        self.pairs
            .range((u, 0)..=(u, usize::MAX))
            .map(|(&(_, v), &f)| (v, f))
            .collect()
    }
    pub fn outflow(&self, v: usize) -> W {
        self.pairs
            .iter()
            .filter(|((from, _), _)| *from == v)
            .map(|(_, &f)| f)
            .sum()
    }
    pub fn inflow(&self, v: usize) -> W {
        self.pairs
            .iter()
            .filter(|((_, to), _)| *to == v)
            .map(|(_, &f)| f)
            .sum()
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

///
/// Check if the flow is valid s-t flow, i.e. it satisfies
/// - flows of all edges are defined
/// - capacity constraint
/// - flow constraint at every vertex except `source` and `sink`
///
pub fn is_valid_flow<W: Weight>(flow: &Flow<W>, graph: &Graph<W>, source: usize, sink: usize) -> bool {
    is_defined_for_all_edges(flow, graph)
        && is_in_capacity(flow, graph)
        && is_satisfying_flow_constraint(flow, graph, &[source, sink])
}

///
/// Check if the flow contains all edges
///
pub fn is_defined_for_all_edges<W: Weight>(flow: &Flow<W>, graph: &Graph<W>) -> bool {
    flow.len() == graph.edge_count()
}

///
/// For each edge, the flow must satisfy `0 <= flow <= capacity`.
/// This function checks it
///
pub fn is_in_capacity<W: Weight>(flow: &Flow<W>, graph: &Graph<W>) -> bool {
    graph
        .edges()
        .iter()
        .zip(flow.edge_flows())
        .all(|(edge, &f)| {
            let lower_ok = f >= W::zero() || f.sim_eq(W::zero());
            let upper_ok = f <= edge.weight || f.sim_eq(edge.weight);
            lower_ok && upper_ok
        })
}

///
/// For each node except `exempt` ones,
/// (the sum of out-going flows) should be equal to (the sum of in-coming flows).
///
pub fn is_satisfying_flow_constraint<W: Weight>(
    flow: &Flow<W>,
    graph: &Graph<W>,
    exempt: &[usize],
) -> bool {
    let n = graph.vertex_count();
    let mut in_flow = vec![W::zero(); n];
    let mut out_flow = vec![W::zero(); n];
    for (edge, &f) in graph.edges().iter().zip(flow.edge_flows()) {
        out_flow[edge.from] += f;
        in_flow[edge.to] += f;
    }
    (0..n)
        .filter(|v| !exempt.contains(v))
        .all(|v| in_flow[v].sim_eq(out_flow[v]))
}
