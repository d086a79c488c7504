//!
//! Dinic's algorithm: blocking flows on BFS level graphs.
//!
use super::super::error::Result;
use super::super::graph::Graph;
use super::super::weight::{partial_min, Weight};
use super::residual::ResidualNetwork;
use super::{check_terminals, MaxFlow};
use tracing::{debug, instrument, trace};

///
/// Maximum flow from `source` to `sink` by Dinic's algorithm. O(V^2 * E)
///
/// With integer weights the flow value must fit in `W`: capacities leaving
/// `source` that sum past `W::MAX` overflow.
///
#[instrument(level = "debug", skip(graph))]
pub fn dinic<W: Weight>(graph: &Graph<W>, source: usize, sink: usize) -> Result<MaxFlow<W>> {
    check_terminals(graph, source, sink, "dinic")?;
    let mut network = ResidualNetwork::from_graph(graph);
    let value = Dinic::new(&mut network, source, sink).run();
    debug!(%value, "dinic finished");
    MaxFlow::from_network(graph, &network, value)
}

///
/// Working state of one Dinic run
///
/// * `level[v]`: BFS distance of `v` from source in the current phase
/// * `current[v]`: index into `network.arcs(v)` of the first arc not known to be dead
///
pub(crate) struct Dinic<'a, W: Weight> {
    network: &'a mut ResidualNetwork<W>,
    source: usize,
    sink: usize,
    level: Vec<Option<usize>>,
    current: Vec<usize>,
}

impl<'a, W: Weight> Dinic<'a, W> {
    pub(crate) fn new(network: &'a mut ResidualNetwork<W>, source: usize, sink: usize) -> Self {
        let n = network.vertex_count();
        Dinic {
            network,
            source,
            sink,
            level: vec![None; n],
            current: vec![0; n],
        }
    }

    /// run phases until the sink is unreachable. returns the flow value
    pub(crate) fn run(mut self) -> W {
        let mut total = W::zero();
        let mut phase = 0;

        loop {
            self.level = self.network.levels_from(self.source);
            if self.level[self.sink].is_none() {
                break;
            }
            self.current.iter_mut().for_each(|c| *c = 0);
            phase += 1;

            let mut blocking = W::zero();
            loop {
                let pushed = self.augment(self.source, None);
                if !pushed.exceeds_eps() {
                    break;
                }
                blocking += pushed;
            }
            trace!(phase, %blocking, "blocking flow");
            total += blocking;
        }

        debug!(phases = phase, "level graph no longer reaches sink");
        total
    }

    ///
    /// Push a flow of at most `limit` (unbounded if `None`) from `v` to the sink
    /// along admissible arcs. Returns the amount pushed (zero if `v` is dead).
    ///
    fn augment(&mut self, v: usize, limit: Option<W>) -> W {
        if v == self.sink {
            // source != sink, so the limit is always set here
            return limit.unwrap_or_else(W::zero);
        }
        let Some(level_v) = self.level[v] else {
            return W::zero();
        };

        while self.current[v] < self.network.arcs(v).len() {
            let arc = self.network.arcs(v)[self.current[v]];
            let w = self.network.head(arc);
            let residual = self.network.residual(arc);

            if residual.exceeds_eps() && self.level[w] == Some(level_v + 1) {
                let bound = match limit {
                    Some(l) => partial_min(l, residual),
                    None => residual,
                };
                let pushed = self.augment(w, Some(bound));
                if pushed.exceeds_eps() {
                    self.network.push(arc, pushed);
                    return pushed;
                }
            }
            // this arc is saturated or leads to a dead end in this phase
            self.current[v] += 1;
        }
        W::zero()
    }
}
