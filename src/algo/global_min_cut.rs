//! Find a [global minimum cut](https://en.wikipedia.org/wiki/Minimum_cut) of
//! an undirected graph with nonnegative edge weights.
//!
//! A global minimum cut is a partition of the vertices into two nonempty sets
//! such that the total weight of edges crossing between them is minimal. No
//! source or sink is fixed in advance.
//!
//! The implementation is the [Stoer-Wagner
//! algorithm](https://en.wikipedia.org/wiki/Stoer%E2%80%93Wagner_algorithm).
//! It performs _V - 1_ phases, each of them a maximum adjacency search driven
//! by a priority queue, followed by the contraction of the last two vertices
//! of the search. Parallel edges created by the contraction are merged by
//! summing their weights. The running time is _O(VE log V)_.
//!
//! # Examples
//!
//! ```
//! use flowcut::{algo::GlobalMinCut, core::VertexId, storage::EdgeWeightedGraph};
//!
//! let v = VertexId::from;
//! let mut graph = EdgeWeightedGraph::new(3);
//!
//! graph.add_edge(v(0), v(1), 1.0).unwrap();
//! graph.add_edge(v(1), v(2), 1.0).unwrap();
//! graph.add_edge(v(0), v(2), 5.0).unwrap();
//!
//! let min_cut = GlobalMinCut::on(&graph).run().unwrap();
//!
//! assert_eq!(min_cut.weight(), 2.0);
//! assert_eq!(min_cut.partition(), (vec![v(1)], vec![v(0), v(2)]));
//! ```

use bitvec::vec::BitVec;
use thiserror::Error;

use crate::{
    algo::max_flow::{self, MaxFlow},
    core::{
        capacity::Capacity,
        error::{AddEdgeError, IndexOutOfRange},
        id::{EdgeId, IdType, VertexId},
    },
    storage::{EdgeWeightedGraph, FlowNetwork, WeightedEdge},
};

mod builder;
mod stoer_wagner;

pub use builder::GlobalMinCutBuilder;

/// Weight and partition of a global minimum cut.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct GlobalMinCut<C = f64> {
    weight: C,
    cut: BitVec,
}

impl<C> GlobalMinCut<C>
where
    C: Capacity,
{
    /// Total weight of the edges crossing the cut.
    pub fn weight(&self) -> C {
        self.weight
    }

    /// Returns `true` if the vertex is on the marked side of the cut.
    ///
    /// Which side is marked is unspecified, only the partition is meaningful.
    pub fn cut(&self, vertex: VertexId) -> Result<bool, IndexOutOfRange> {
        IndexOutOfRange::check(vertex.as_usize(), self.cut.len())?;
        Ok(self.cut[vertex.as_usize()])
    }

    /// Both sides of the cut, the marked one first. Vertices are in increasing
    /// order.
    pub fn partition(&self) -> (Vec<VertexId>, Vec<VertexId>) {
        (
            self.cut.iter_ones().map(VertexId::from_usize).collect(),
            self.cut.iter_zeros().map(VertexId::from_usize).collect(),
        )
    }

    /// Edges with endpoints on different sides of the cut.
    pub fn crossing_edges<'a>(
        &'a self,
        graph: &'a EdgeWeightedGraph<C>,
    ) -> impl Iterator<Item = (EdgeId, &'a WeightedEdge<C>)> + 'a {
        graph.edges().filter(move |(_, edge)| {
            let (v, w) = edge.endpoints();
            self.side(v) != self.side(w)
        })
    }

    /// Verifies the result against the graph it was computed on.
    ///
    /// Checks that the partition is proper and that its crossing weight is the
    /// reported weight. Then independently computes the minimum of maximum
    /// flows between vertex 0 and every other vertex, treating each edge as a
    /// pair of opposite arcs, and checks that it equals the reported weight.
    /// This takes _V - 1_ maximum flow computations, it is not run by the
    /// algorithm itself.
    pub fn certify(&self, graph: &EdgeWeightedGraph<C>) -> Result<(), CertificateError> {
        let n = graph.vertex_count();

        if n != self.cut.len() {
            return Err(CertificateError::GraphMismatch);
        }

        if self.cut.not_any() || self.cut.all() {
            return Err(CertificateError::TrivialPartition);
        }

        let crossing = self
            .crossing_edges(graph)
            .fold(C::zero(), |total, (_, edge)| total + edge.weight());

        if !crossing.approx_eq(self.weight) {
            return Err(CertificateError::CrossingMismatch);
        }

        let mut network = FlowNetwork::bidirected(graph)?;
        let source = VertexId::from_usize(0);
        let mut min_st_cut = C::inf();

        for t in 1..n {
            network.reset_flow();
            let max_flow = MaxFlow::on(&mut network).run(source, VertexId::from_usize(t))?;
            min_st_cut = min_st_cut.min_of(max_flow.value());
        }

        if !min_st_cut.approx_eq(self.weight) {
            return Err(CertificateError::WeightMismatch);
        }

        Ok(())
    }

    fn side(&self, vertex: VertexId) -> Option<bool> {
        self.cut.get(vertex.as_usize()).map(|bit| *bit)
    }
}

/// Computes the weight of a global minimum cut.
pub fn global_min_cut<C: Capacity>(graph: &EdgeWeightedGraph<C>) -> Result<C, Error> {
    GlobalMinCut::on(graph).run().map(|min_cut| min_cut.weight())
}

/// The error encountered during a [`GlobalMinCut`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("graph must have at least two vertices")]
    TooFewVertices,

    #[error("edge {0} has negative weight")]
    NegativeWeight(EdgeId),

    #[error("start vertex does not exist")]
    StartAbsent,

    /// This error should not happen in normal circumstances. If it does, it
    /// indicates a bug in the bookkeeping of the contracted graph.
    #[error("{0}")]
    Queue(#[from] crate::common::IndexPqError),

    /// See [`Error::Queue`].
    #[error("{0}")]
    Index(#[from] IndexOutOfRange),
}

/// The reason why a [`GlobalMinCut`] result failed
/// [certification](GlobalMinCut::certify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CertificateError {
    #[error("result was computed on a different graph")]
    GraphMismatch,

    #[error("one side of the partition is empty")]
    TrivialPartition,

    #[error("weight of crossing edges does not match the cut weight")]
    CrossingMismatch,

    #[error("minimum of s-t cuts does not match the cut weight")]
    WeightMismatch,

    #[error("{0}")]
    MaxFlow(#[from] max_flow::Error),

    #[error("{0}")]
    Network(#[from] AddEdgeError),
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::infra::{
        proptest::edge_weighted_graph,
        testing::{brute_force_global_min_cut, create_triangle},
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn create_graph<C: Capacity>(vertex_count: usize, edges: &[(usize, usize, C)]) -> EdgeWeightedGraph<C> {
        let mut graph = EdgeWeightedGraph::new(vertex_count);
        for &(from, to, weight) in edges {
            graph.add_edge(v(from), v(to), weight).unwrap();
        }
        graph
    }

    #[test]
    fn triangle() {
        let graph = create_triangle();
        let min_cut = GlobalMinCut::on(&graph).run().unwrap();

        assert_eq!(min_cut.weight(), 2.0);
        assert_eq!(min_cut.cut(v(1)), Ok(true));
        assert_eq!(min_cut.cut(v(0)), Ok(false));
        assert_eq!(min_cut.cut(v(2)), Ok(false));
        assert_eq!(min_cut.certify(&graph), Ok(()));

        let crossing = min_cut
            .crossing_edges(&graph)
            .map(|(_, edge)| edge.endpoints())
            .collect::<Vec<_>>();
        assert_eq!(crossing, vec![(v(0), v(1)), (v(1), v(2))]);
    }

    #[test]
    fn triangle_other_start() {
        let graph = create_triangle();
        let min_cut = GlobalMinCut::on(&graph).start(v(2)).run().unwrap();

        assert_eq!(min_cut.weight(), 2.0);
        assert_eq!(min_cut.certify(&graph), Ok(()));
    }

    #[test]
    fn stoer_wagner_paper_graph() {
        let graph = create_graph(
            8,
            &[
                (0, 1, 2.0),
                (0, 4, 3.0),
                (1, 2, 3.0),
                (1, 4, 2.0),
                (1, 5, 2.0),
                (2, 3, 4.0),
                (2, 6, 2.0),
                (3, 6, 2.0),
                (3, 7, 2.0),
                (4, 5, 3.0),
                (5, 6, 1.0),
                (6, 7, 3.0),
            ],
        );

        let min_cut = GlobalMinCut::on(&graph).run().unwrap();
        let (marked, unmarked) = min_cut.partition();

        assert_eq!(min_cut.weight(), 4.0);
        let mut sides = [marked, unmarked];
        sides.sort();
        assert_eq!(
            sides,
            [
                vec![v(0), v(1), v(4), v(5)],
                vec![v(2), v(3), v(6), v(7)]
            ]
        );
        assert_eq!(min_cut.certify(&graph), Ok(()));
    }

    #[test]
    fn disconnected() {
        let graph = create_graph(4, &[(0, 1, 3u32), (2, 3, 4)]);
        let min_cut = GlobalMinCut::on(&graph).run().unwrap();

        assert_eq!(min_cut.weight(), 0);
        assert_eq!(min_cut.cut(v(0)), min_cut.cut(v(1)));
        assert_eq!(min_cut.cut(v(2)), min_cut.cut(v(3)));
        assert_ne!(min_cut.cut(v(0)), min_cut.cut(v(2)));
        assert_eq!(min_cut.crossing_edges(&graph).count(), 0);
        assert_eq!(min_cut.certify(&graph), Ok(()));
    }

    #[test]
    fn parallel_edges_and_loops() {
        let graph = create_graph(2, &[(0, 1, 1.0), (1, 0, 2.0), (0, 0, 10.0)]);
        let min_cut = GlobalMinCut::on(&graph).run().unwrap();

        assert_eq!(min_cut.weight(), 3.0);
        assert_eq!(min_cut.partition(), (vec![v(1)], vec![v(0)]));
        assert_eq!(min_cut.certify(&graph), Ok(()));
    }

    #[test]
    fn zero_weights() {
        let graph = create_graph(3, &[(0, 1, 0.0), (1, 2, 0.0), (0, 2, 1.0)]);
        let min_cut = GlobalMinCut::on(&graph).run().unwrap();

        assert_eq!(min_cut.weight(), 0.0);
        assert_eq!(min_cut.certify(&graph), Ok(()));
    }

    #[test]
    fn weight_absorbed_by_large_keys() {
        let graph = create_graph(3, &[(0, 1, 1e17), (0, 2, 1e17), (1, 2, 1.0)]);
        let min_cut = GlobalMinCut::on(&graph).run().unwrap();

        assert_eq!(min_cut.weight(), 1e17);

        let (marked, _) = min_cut.partition();
        assert!(marked == vec![v(1)] || marked == vec![v(2)]);
    }

    #[test]
    fn too_few_vertices() {
        assert_matches!(
            GlobalMinCut::on(&EdgeWeightedGraph::<f64>::new(0)).run(),
            Err(Error::TooFewVertices)
        );
        assert_matches!(
            GlobalMinCut::on(&create_graph(1, &[(0, 0, 1.0)])).run(),
            Err(Error::TooFewVertices)
        );
    }

    #[test]
    fn negative_weight() {
        let graph = create_graph(3, &[(0, 1, 1.0), (1, 2, -1.0)]);

        assert_matches!(
            GlobalMinCut::on(&graph).run(),
            Err(Error::NegativeWeight(id)) if id == EdgeId::from(1)
        );
    }

    #[test]
    fn start_absent() {
        let graph = create_triangle();

        assert_matches!(
            GlobalMinCut::on(&graph).start(v(3)).run(),
            Err(Error::StartAbsent)
        );
    }

    #[test]
    fn cut_out_of_range() {
        let graph = create_triangle();
        let min_cut = GlobalMinCut::on(&graph).run().unwrap();

        assert_matches!(
            min_cut.cut(v(3)),
            Err(IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn certify_detects_wrong_graph() {
        let graph = create_triangle();
        let min_cut = GlobalMinCut::on(&graph).run().unwrap();

        assert_matches!(
            min_cut.certify(&create_graph(2, &[(0, 1, 1.0)])),
            Err(CertificateError::GraphMismatch)
        );

        let heavier = create_graph(3, &[(0, 1, 1.0), (1, 2, 1.5), (0, 2, 5.0)]);
        assert_matches!(
            min_cut.certify(&heavier),
            Err(CertificateError::CrossingMismatch)
        );

        // Same crossing weight, but a cheaper cut exists.
        let cheaper = create_graph(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 0.5)]);
        assert_matches!(
            min_cut.certify(&cheaper),
            Err(CertificateError::WeightMismatch)
        );
    }

    #[test]
    fn convenience_function() {
        assert_eq!(global_min_cut(&create_triangle()), Ok(2.0));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_global_min_cut_brute_force(graph in edge_weighted_graph(0u32..20).max_size(10).allow_loops()) {
            prop_assume!(graph.vertex_count() >= 2);

            let min_cut = GlobalMinCut::on(&graph).run().unwrap();
            let crossing = min_cut
                .crossing_edges(&graph)
                .map(|(_, edge)| edge.weight())
                .sum::<u32>();

            prop_assert_eq!(min_cut.weight(), brute_force_global_min_cut(&graph));
            prop_assert_eq!(crossing, min_cut.weight());
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_global_min_cut_certified(graph in edge_weighted_graph(0.0f64..100.0).max_size(24).multi_edge_prob(0.1)) {
            prop_assume!(graph.vertex_count() >= 2);

            let min_cut = GlobalMinCut::on(&graph).run().unwrap();

            prop_assert_eq!(min_cut.certify(&graph), Ok(()));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_global_min_cut_mixed_magnitudes(graph in edge_weighted_graph(prop_oneof![0.0f64..1.0, 1e15f64..1e18]).max_size(24).multi_edge_prob(0.1)) {
            prop_assume!(graph.vertex_count() >= 2);

            let min_cut = GlobalMinCut::on(&graph).run();
            prop_assert!(min_cut.is_ok());

            let (marked, unmarked) = min_cut.unwrap().partition();
            prop_assert!(!marked.is_empty());
            prop_assert!(!unmarked.is_empty());
        }
    }
}
