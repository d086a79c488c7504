//!
//! Circulation with demands (and lower bounds), reduced to a max-flow problem.
//!
//! Demand `d(v)` of a vertex is `inflow(v) - outflow(v)`:
//! * `d(v) < 0`: supply of `-d(v)`
//! * `d(v) > 0`: demand of `d(v)`
//! * `d(v) = 0`: transshipment
//!
use super::super::error::{Error, GraphKind, Result};
use super::super::graph::Graph;
use super::super::weight::SignedWeight;
use super::dinic::Dinic;
use super::residual::ResidualNetwork;
use super::Flow;
use tracing::{debug, instrument};

///
/// Find a flow satisfying the capacity of every edge and the demand of every vertex.
///
/// `Ok(None)` if no such flow exists (including when demands do not sum to zero).
///
#[instrument(level = "debug", skip_all, fields(n = graph.vertex_count(), m = graph.edge_count()))]
pub fn circulation<W: SignedWeight>(graph: &Graph<W>, demands: &[W]) -> Result<Option<Flow<W>>> {
    check_circulation_input(graph, demands)?;

    let total: W = demands.iter().copied().sum();
    if !total.sim_eq(W::zero()) {
        debug!(%total, "demands are not balanced");
        return Ok(None);
    }

    // super source S = n, super sink T = n + 1
    // input edges keep their ids 0..m
    let n = graph.vertex_count();
    let (s, t) = (n, n + 1);
    let mut augmented = Graph::new(n + 2, true, true);
    for edge in graph.edges() {
        augmented.add_edge(edge.from, edge.to, edge.weight)?;
    }
    let mut supply = W::zero();
    for (v, &d) in demands.iter().enumerate() {
        if d.below_neg_eps() {
            augmented.add_edge(s, v, -d)?;
            supply += -d;
        } else if d.exceeds_eps() {
            augmented.add_edge(v, t, d)?;
        }
    }

    let mut network = ResidualNetwork::from_graph(&augmented);
    let value = Dinic::new(&mut network, s, t).run();
    if !value.sim_eq(supply) {
        debug!(%value, %supply, "circulation is infeasible");
        return Ok(None);
    }

    let mut amounts = network.edge_flows();
    amounts.truncate(graph.edge_count());
    Flow::from_edge_flows(graph, amounts).map(Some)
}

///
/// Circulation where edge `e` must carry at least `lower_bounds[e]`
/// (and at most its weight).
///
/// Reduced to `circulation` by shifting `l(e)` out of each edge:
/// capacity `c - l`, and demand `d(v) - L_in(v) + L_out(v)`.
///
#[instrument(level = "debug", skip_all, fields(n = graph.vertex_count(), m = graph.edge_count()))]
pub fn circulation_with_lower_bounds<W: SignedWeight>(
    graph: &Graph<W>,
    lower_bounds: &[W],
    demands: &[W],
) -> Result<Option<Flow<W>>> {
    check_circulation_input(graph, demands)?;
    if lower_bounds.len() != graph.edge_count() {
        return Err(Error::LengthMismatch {
            what: "lower bounds",
            expected: graph.edge_count(),
            got: lower_bounds.len(),
        });
    }

    let mut shifted = Graph::new(graph.vertex_count(), true, true);
    let mut shifted_demands = demands.to_vec();
    for (edge, &l) in graph.edges().iter().zip(lower_bounds) {
        if l > edge.weight && !l.sim_eq(edge.weight) {
            debug!(from = edge.from, to = edge.to, "lower bound exceeds capacity");
            return Ok(None);
        }
        shifted.add_edge(edge.from, edge.to, edge.weight - l)?;
        shifted_demands[edge.to] -= l;
        shifted_demands[edge.from] += l;
    }

    let flow = match circulation(&shifted, &shifted_demands)? {
        Some(flow) => flow,
        None => return Ok(None),
    };
    let amounts = flow
        .edge_flows()
        .iter()
        .zip(lower_bounds)
        .map(|(&f, &l)| f + l)
        .collect();
    Flow::from_edge_flows(graph, amounts).map(Some)
}

fn check_circulation_input<W: SignedWeight>(graph: &Graph<W>, demands: &[W]) -> Result<()> {
    if !graph.is_directed() {
        return Err(Error::InvalidGraphKind {
            algorithm: "circulation",
            expected: GraphKind::Directed,
        });
    }
    if demands.len() != graph.vertex_count() {
        return Err(Error::LengthMismatch {
            what: "demands",
            expected: graph.vertex_count(),
            got: demands.len(),
        });
    }
    Ok(())
}
