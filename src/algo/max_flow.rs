//! Find a [maximum flow](https://en.wikipedia.org/wiki/Maximum_flow_problem)
//! between two vertices of a flow network and the corresponding minimum cut.
//!
//! The implementation is the Ford-Fulkerson method with shortest augmenting
//! paths (Edmonds-Karp). Each augmenting path is found by breadth-first search
//! in the residual network, which bounds the number of augmentations by
//! _O(VE)_ and the total running time by _O(VE²)_ regardless of the
//! capacities.
//!
//! When no augmenting path remains, the vertices reachable from the source in
//! the residual network form the source side of a minimum cut, and the
//! capacity of that cut equals the value of the flow.
//!
//! # Examples
//!
//! ```
//! use flowcut::{algo::MaxFlow, core::VertexId, storage::FlowNetwork};
//!
//! let v = VertexId::from;
//! let mut network = FlowNetwork::new(4);
//!
//! network.add_edge(v(0), v(1), 2.0).unwrap();
//! network.add_edge(v(0), v(2), 3.0).unwrap();
//! network.add_edge(v(1), v(3), 3.0).unwrap();
//! network.add_edge(v(2), v(3), 2.0).unwrap();
//!
//! let max_flow = MaxFlow::on(&mut network).run(v(0), v(3)).unwrap();
//!
//! assert_eq!(max_flow.value(), 4.0);
//! assert_eq!(max_flow.in_cut(v(2)), Ok(true));
//! assert_eq!(max_flow.in_cut(v(1)), Ok(false));
//! ```

use thiserror::Error;

use crate::{
    common::{TypedBitSet, VisitSet},
    core::{
        capacity::Capacity,
        error::{EdgeError, IndexOutOfRange},
        id::{EdgeId, IdType, VertexId},
    },
    storage::{FlowEdge, FlowNetwork},
};

mod bfs;
mod builder;
mod ford_fulkerson;

pub use builder::MaxFlowBuilder;

/// Maximum flow value and minimum cut between a source and a sink.
///
/// The flow itself is left in the [network](FlowNetwork) the algorithm ran
/// on. See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct MaxFlow<C = f64> {
    source: VertexId,
    sink: VertexId,
    value: C,
    in_cut: TypedBitSet<VertexId>,
    vertex_count: usize,
    augmentations: usize,
}

impl<C> MaxFlow<C>
where
    C: Capacity,
{
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn sink(&self) -> VertexId {
        self.sink
    }

    /// The value of the maximum flow.
    pub fn value(&self) -> C {
        self.value
    }

    /// Number of augmenting paths the algorithm used.
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Returns `true` if the vertex is on the source side of the minimum cut.
    pub fn in_cut(&self, vertex: VertexId) -> Result<bool, IndexOutOfRange> {
        IndexOutOfRange::check(vertex.as_usize(), self.vertex_count)?;
        Ok(self.in_cut.is_visited(&vertex))
    }

    /// Vertices on the source side of the minimum cut, in increasing order.
    pub fn source_side(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.in_cut.iter()
    }

    /// Edges going from the source side to the sink side of the minimum cut.
    /// All of them are saturated.
    pub fn cut_edges<'a>(
        &'a self,
        network: &'a FlowNetwork<C>,
    ) -> impl Iterator<Item = (EdgeId, &'a FlowEdge<C>)> + 'a {
        network.edges().filter(move |(_, edge)| {
            self.in_cut.is_visited(&edge.from()) && !self.in_cut.is_visited(&edge.to())
        })
    }

    /// Total capacity of the [cut edges](MaxFlow::cut_edges).
    pub fn cut_capacity(&self, network: &FlowNetwork<C>) -> C {
        self.cut_edges(network)
            .fold(C::zero(), |total, (_, edge)| total + edge.capacity())
    }

    /// Verifies the optimality of the result against the network it was
    /// computed on.
    ///
    /// Checks that the flow in the network is feasible and has the reported
    /// value, that the cut separates the source from the sink and that its
    /// capacity equals the flow value. This is an independent _O(V + E)_
    /// pass, it is not run by the algorithm itself.
    pub fn certify(&self, network: &FlowNetwork<C>) -> Result<(), CertificateError> {
        if network.vertex_count() != self.vertex_count {
            return Err(CertificateError::NetworkMismatch);
        }

        check_feasible(network, self.source, self.sink, self.value)?;

        if !self.in_cut.is_visited(&self.source) {
            return Err(CertificateError::SourceNotInCut);
        }

        if self.in_cut.is_visited(&self.sink) {
            return Err(CertificateError::SinkInCut);
        }

        if !self.cut_capacity(network).approx_eq(self.value) {
            return Err(CertificateError::CutMismatch);
        }

        Ok(())
    }
}

/// Computes the value of a maximum flow between the source and the sink,
/// leaving the flow in the network.
pub fn max_flow<C: Capacity>(
    network: &mut FlowNetwork<C>,
    source: VertexId,
    sink: VertexId,
) -> Result<C, Error> {
    MaxFlow::on(network).run(source, sink).map(|max_flow| max_flow.value())
}

/// Checks that the flow in the network is a feasible flow of the given value
/// from the source to the sink.
///
/// All comparisons use the [tolerance](Capacity::tolerance) of the capacity
/// type.
pub fn check_feasible<C: Capacity>(
    network: &FlowNetwork<C>,
    source: VertexId,
    sink: VertexId,
    value: C,
) -> Result<(), Infeasibility> {
    for (id, edge) in network.edges() {
        if !edge.flow().is_nonnegative() || edge.flow() > edge.capacity() + C::tolerance() {
            return Err(Infeasibility::CapacityViolated(id));
        }
    }

    // Written as sums on both sides so that unsigned types work too.
    if !network
        .outflow(source)
        .approx_eq(network.inflow(source) + value)
    {
        return Err(Infeasibility::SourceImbalance);
    }

    if !network.inflow(sink).approx_eq(network.outflow(sink) + value) {
        return Err(Infeasibility::SinkImbalance);
    }

    for v in 0..network.vertex_count() {
        let vertex = VertexId::from_usize(v);
        if vertex == source || vertex == sink {
            continue;
        }

        if !network.inflow(vertex).approx_eq(network.outflow(vertex)) {
            return Err(Infeasibility::NotConserved(vertex));
        }
    }

    Ok(())
}

/// The error encountered during a [`MaxFlow`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("source vertex does not exist")]
    SourceAbsent,

    #[error("sink vertex does not exist")]
    SinkAbsent,

    #[error("source equals sink")]
    SourceIsSink,

    #[error("initial flow is infeasible: {0}")]
    InfeasibleFlow(#[from] Infeasibility),

    /// An edge invariant violated while augmenting.
    ///
    /// This error should not happen in normal circumstances. If it does, it
    /// indicates a bug in the bookkeeping of the network.
    #[error("{0}")]
    Edge(#[from] EdgeError),
}

/// The reason why a flow is not feasible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Infeasibility {
    #[error("flow on edge {0} is out of its capacity bounds")]
    CapacityViolated(EdgeId),

    #[error("net flow out of source does not match the flow value")]
    SourceImbalance,

    #[error("net flow into sink does not match the flow value")]
    SinkImbalance,

    #[error("flow is not conserved at vertex {0}")]
    NotConserved(VertexId),
}

/// The reason why a [`MaxFlow`] result failed
/// [certification](MaxFlow::certify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CertificateError {
    #[error("{0}")]
    Infeasible(#[from] Infeasibility),

    #[error("source is not on the source side of the cut")]
    SourceNotInCut,

    #[error("sink is on the source side of the cut")]
    SinkInCut,

    #[error("capacity of the minimum cut does not match the flow value")]
    CutMismatch,

    #[error("result was computed on a different network")]
    NetworkMismatch,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::infra::{
        proptest::flow_network,
        testing::{brute_force_st_cut, create_diamond},
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn create_network(vertex_count: usize, edges: &[(usize, usize, f64)]) -> FlowNetwork {
        let mut network = FlowNetwork::new(vertex_count);
        for &(from, to, capacity) in edges {
            network.add_edge(v(from), v(to), capacity).unwrap();
        }
        network
    }

    fn assert_conserved<C: Capacity>(network: &FlowNetwork<C>, source: VertexId, sink: VertexId) {
        for u in 0..network.vertex_count() {
            let u = v(u);
            if u != source && u != sink {
                assert!(
                    network.inflow(u).approx_eq(network.outflow(u)),
                    "flow not conserved at {u}"
                );
            }
        }
    }

    #[test]
    fn diamond() {
        let mut network = create_diamond();
        let max_flow = MaxFlow::on(&mut network).run(v(0), v(3)).unwrap();

        assert_eq!(max_flow.value(), 4.0);
        assert_eq!(max_flow.source(), v(0));
        assert_eq!(max_flow.sink(), v(3));
        assert_eq!(max_flow.source_side().collect::<Vec<_>>(), vec![v(0), v(2)]);
        assert_eq!(max_flow.cut_capacity(&network), 4.0);
        assert_eq!(max_flow.certify(&network), Ok(()));

        let cut_edges = max_flow
            .cut_edges(&network)
            .map(|(_, edge)| (edge.from(), edge.to()))
            .collect::<Vec<_>>();
        assert_eq!(cut_edges, vec![(v(0), v(1)), (v(2), v(3))]);
    }

    #[test]
    fn tiny_network() {
        let mut network = create_network(
            6,
            &[
                (0, 1, 2.0),
                (0, 2, 3.0),
                (1, 3, 3.0),
                (1, 4, 1.0),
                (2, 3, 1.0),
                (2, 4, 1.0),
                (3, 5, 2.0),
                (4, 5, 3.0),
            ],
        );

        let max_flow = MaxFlow::on(&mut network).run(v(0), v(5)).unwrap();

        assert_eq!(max_flow.value(), 4.0);
        assert_eq!(max_flow.source_side().collect::<Vec<_>>(), vec![v(0), v(2)]);
        assert_conserved(&network, v(0), v(5));
        assert_eq!(max_flow.certify(&network), Ok(()));
    }

    #[test]
    fn flow_is_cancelled() {
        // The shortest path 0-1-2-3 blocks both longer paths unless its
        // middle edge is undone.
        let mut network = FlowNetwork::new(8);
        network.add_edge(v(0), v(1), 1u32).unwrap();
        let middle = network.add_edge(v(1), v(2), 1).unwrap();
        network.add_edge(v(2), v(3), 1).unwrap();
        network.add_edge(v(1), v(4), 1).unwrap();
        network.add_edge(v(4), v(5), 1).unwrap();
        network.add_edge(v(5), v(3), 1).unwrap();
        network.add_edge(v(0), v(6), 1).unwrap();
        network.add_edge(v(6), v(7), 1).unwrap();
        network.add_edge(v(7), v(2), 1).unwrap();

        let max_flow = MaxFlow::on(&mut network).run(v(0), v(3)).unwrap();

        assert_eq!(max_flow.value(), 2);
        assert_eq!(max_flow.augmentations(), 2);
        assert_eq!(network.edge(middle).map(FlowEdge::flow), Some(0));
        assert_eq!(max_flow.certify(&network), Ok(()));
    }

    #[test]
    fn disconnected_sink() {
        let mut network = create_network(3, &[(0, 1, 5.0)]);
        let max_flow = MaxFlow::on(&mut network).run(v(0), v(2)).unwrap();

        assert_eq!(max_flow.value(), 0.0);
        assert_eq!(max_flow.augmentations(), 0);
        assert_eq!(max_flow.in_cut(v(1)), Ok(true));
        assert_eq!(max_flow.in_cut(v(2)), Ok(false));
        assert_eq!(max_flow.certify(&network), Ok(()));
    }

    #[test]
    fn rerun_is_idempotent() {
        let mut network = create_diamond();
        let first = MaxFlow::on(&mut network).run(v(0), v(3)).unwrap();
        let flows = network.edges().map(|(_, e)| e.flow()).collect::<Vec<_>>();

        let second = MaxFlow::on(&mut network).run(v(0), v(3)).unwrap();

        assert_eq!(second.value(), first.value());
        assert_eq!(second.augmentations(), 0);
        assert_eq!(
            network.edges().map(|(_, e)| e.flow()).collect::<Vec<_>>(),
            flows
        );
    }

    #[test]
    fn preloaded_flow() {
        let mut network = FlowNetwork::new(4);
        network.add_edge_with_flow(v(0), v(1), 2.0, 1.0).unwrap();
        network.add_edge(v(0), v(2), 3.0).unwrap();
        network.add_edge_with_flow(v(1), v(3), 3.0, 1.0).unwrap();
        network.add_edge(v(2), v(3), 2.0).unwrap();

        let max_flow = MaxFlow::on(&mut network)
            .initial_value(1.0)
            .run(v(0), v(3))
            .unwrap();

        assert_eq!(max_flow.value(), 4.0);
        assert_eq!(max_flow.certify(&network), Ok(()));
    }

    #[test]
    fn preloaded_flow_wrong_value() {
        let mut network = FlowNetwork::new(3);
        network.add_edge_with_flow(v(0), v(1), 2.0, 1.0).unwrap();
        network.add_edge_with_flow(v(1), v(2), 2.0, 1.0).unwrap();

        let result = MaxFlow::on(&mut network).initial_value(2.0).run(v(0), v(2));
        assert_matches!(
            result,
            Err(Error::InfeasibleFlow(Infeasibility::SourceImbalance))
        );
    }

    #[test]
    fn preloaded_flow_not_conserved() {
        let mut network = FlowNetwork::new(3);
        network.add_edge_with_flow(v(0), v(1), 2.0, 2.0).unwrap();
        network.add_edge_with_flow(v(1), v(2), 2.0, 1.0).unwrap();

        let result = MaxFlow::on(&mut network).initial_value(2.0).run(v(0), v(2));
        assert_matches!(
            result,
            Err(Error::InfeasibleFlow(Infeasibility::SinkImbalance))
        );

        let result = MaxFlow::on(&mut network).initial_value(1.0).run(v(0), v(2));
        assert_matches!(
            result,
            Err(Error::InfeasibleFlow(Infeasibility::SourceImbalance))
        );
    }

    #[test]
    fn preloaded_flow_leaking() {
        let mut network = FlowNetwork::new(4);
        network.add_edge_with_flow(v(0), v(1), 2.0, 1.0).unwrap();
        network.add_edge_with_flow(v(2), v(3), 2.0, 1.0).unwrap();

        let result = MaxFlow::on(&mut network).run(v(0), v(3));
        assert_matches!(
            result,
            Err(Error::InfeasibleFlow(Infeasibility::NotConserved(x))) if x == v(1)
        );
    }

    #[test]
    fn preloaded_flow_draining_sink() {
        let mut network = FlowNetwork::new(2);
        network.add_edge_with_flow(v(1), v(0), 1u8, 1).unwrap();

        let result = MaxFlow::on(&mut network).run(v(0), v(1));
        assert_matches!(
            result,
            Err(Error::InfeasibleFlow(Infeasibility::SinkImbalance))
        );
    }

    #[test]
    fn invalid_endpoints() {
        let mut network = create_diamond();

        assert_matches!(
            MaxFlow::on(&mut network).run(v(1), v(1)),
            Err(Error::SourceIsSink)
        );
        assert_matches!(
            MaxFlow::on(&mut network).run(v(4), v(1)),
            Err(Error::SourceAbsent)
        );
        assert_matches!(
            MaxFlow::on(&mut network).run(v(0), v(9)),
            Err(Error::SinkAbsent)
        );
    }

    #[test]
    fn in_cut_out_of_range() {
        let mut network = create_diamond();
        let max_flow = MaxFlow::on(&mut network).run(v(0), v(3)).unwrap();

        assert_matches!(
            max_flow.in_cut(v(4)),
            Err(IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn certify_detects_tampering() {
        let mut network = create_diamond();
        let max_flow = MaxFlow::on(&mut network).run(v(0), v(3)).unwrap();

        network.reset_flow();
        assert_matches!(
            max_flow.certify(&network),
            Err(CertificateError::Infeasible(Infeasibility::SourceImbalance))
        );

        let other = create_network(2, &[(0, 1, 1.0)]);
        assert_matches!(
            max_flow.certify(&other),
            Err(CertificateError::NetworkMismatch)
        );
    }

    #[test]
    fn convenience_function() {
        let mut network = create_diamond();
        assert_eq!(max_flow(&mut network, v(0), v(3)), Ok(4.0));
    }

    #[test]
    fn parallel_and_antiparallel_edges() {
        let mut network = create_network(
            3,
            &[(0, 1, 1.0), (0, 1, 2.5), (1, 0, 4.0), (1, 2, 10.0), (1, 1, 7.0)],
        );

        let max_flow = MaxFlow::on(&mut network).run(v(0), v(2)).unwrap();

        assert_eq!(max_flow.value(), 3.5);
        assert_eq!(max_flow.certify(&network), Ok(()));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_max_flow_certified(network in flow_network(0u32..100).max_size(24)) {
            let mut network = network;
            let n = network.vertex_count();
            prop_assume!(n >= 2);

            let max_flow = MaxFlow::on(&mut network).run(v(0), v(n - 1)).unwrap();

            prop_assert_eq!(max_flow.certify(&network), Ok(()));
            assert_conserved(&network, v(0), v(n - 1));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_max_flow_float_certified(network in flow_network(0.0f64..100.0).max_size(24)) {
            let mut network = network;
            let n = network.vertex_count();
            prop_assume!(n >= 2);

            let max_flow = MaxFlow::on(&mut network).run(v(n - 1), v(0)).unwrap();

            prop_assert_eq!(max_flow.certify(&network), Ok(()));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_max_flow_equals_brute_force_cut(network in flow_network(0u32..20).max_size(10)) {
            let mut network = network;
            let n = network.vertex_count();
            prop_assume!(n >= 2);

            let expected = brute_force_st_cut(&network, v(0), v(1));
            let max_flow = MaxFlow::on(&mut network).run(v(0), v(1)).unwrap();

            prop_assert_eq!(max_flow.value(), expected);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_max_flow_rerun_idempotent(network in flow_network(0u32..50).max_size(24)) {
            let mut network = network;
            let n = network.vertex_count();
            prop_assume!(n >= 2);

            let first = MaxFlow::on(&mut network).run(v(0), v(n - 1)).unwrap();
            let second = MaxFlow::on(&mut network).run(v(0), v(n - 1)).unwrap();

            prop_assert_eq!(first.value(), second.value());
            prop_assert_eq!(second.augmentations(), 0);
        }
    }
}
