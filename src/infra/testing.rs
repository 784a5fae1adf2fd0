use thiserror::Error;

use crate::{
    core::{
        capacity::Capacity,
        id::{EdgeId, IdType, VertexId},
    },
    storage::{EdgeWeightedGraph, FlowNetwork},
};

/// Reference union-find that relabels a whole component on every union.
#[derive(Debug, Clone)]
pub struct NaiveUnionFind {
    label: Vec<usize>,
}

impl NaiveUnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            label: (0..n).collect(),
        }
    }

    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let (from, to) = (self.label[p], self.label[q]);

        if from == to {
            return false;
        }

        for label in self.label.iter_mut().filter(|label| **label == from) {
            *label = to;
        }

        true
    }

    pub fn connected(&self, p: usize, q: usize) -> bool {
        self.label[p] == self.label[q]
    }

    pub fn count(&self) -> usize {
        self.label
            .iter()
            .enumerate()
            .filter(|(p, label)| p == *label)
            .count()
    }
}

/// `0 -> 1 (2)`, `0 -> 2 (3)`, `1 -> 3 (3)`, `2 -> 3 (2)`.
pub fn create_diamond() -> FlowNetwork {
    let mut network = FlowNetwork::with_capacity(4, 4);

    for (from, to, capacity) in [(0, 1, 2.0), (0, 2, 3.0), (1, 3, 3.0), (2, 3, 2.0)] {
        network
            .add_edge(VertexId::from_usize(from), VertexId::from_usize(to), capacity)
            .expect("vertices exist and capacities are valid");
    }

    network
}

/// `0 - 1 (1)`, `1 - 2 (1)`, `0 - 2 (5)`.
pub fn create_triangle() -> EdgeWeightedGraph {
    let mut graph = EdgeWeightedGraph::with_capacity(3, 3);

    for (v, w, weight) in [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)] {
        graph
            .add_edge(VertexId::from_usize(v), VertexId::from_usize(w), weight)
            .expect("vertices exist");
    }

    graph
}

const BRUTE_FORCE_MAX_VERTICES: usize = 16;

/// Minimum capacity of an `s`-`t` cut found by enumerating all vertex
/// subsets.
pub fn brute_force_st_cut<C: Capacity>(network: &FlowNetwork<C>, source: VertexId, sink: VertexId) -> C {
    let n = network.vertex_count();
    assert!(n <= BRUTE_FORCE_MAX_VERTICES, "too many vertices for brute force");
    assert!(source != sink, "source and sink must differ");

    let (s, t) = (source.as_usize(), sink.as_usize());
    let mut min = C::inf();

    for mask in 0..(1usize << n) {
        if mask & (1 << s) == 0 || mask & (1 << t) != 0 {
            continue;
        }

        let capacity = network
            .edges()
            .filter(|(_, edge)| {
                mask & (1 << edge.from().as_usize()) != 0 && mask & (1 << edge.to().as_usize()) == 0
            })
            .fold(C::zero(), |total, (_, edge)| total + edge.capacity());

        min = min.min_of(capacity);
    }

    min
}

/// Minimum weight of a proper vertex partition found by enumerating all
/// vertex subsets containing vertex 0.
pub fn brute_force_global_min_cut<C: Capacity>(graph: &EdgeWeightedGraph<C>) -> C {
    let n = graph.vertex_count();
    assert!(n >= 2, "at least two vertices are needed");
    assert!(n <= BRUTE_FORCE_MAX_VERTICES, "too many vertices for brute force");

    let full = (1usize << n) - 1;
    let mut min = C::inf();

    for mask in (1..full).filter(|mask| mask & 1 != 0) {
        let weight = graph
            .edges()
            .filter(|(_, edge)| {
                let (v, w) = edge.endpoints();
                (mask >> v.as_usize()) & 1 != (mask >> w.as_usize()) & 1
            })
            .fold(C::zero(), |total, (_, edge)| total + edge.weight());

        min = min.min_of(weight);
    }

    min
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("edge {0} is missing in the adjacency list of its endpoint {1}")]
    EdgeNotInAdjacency(EdgeId, VertexId),
    #[error("edge {0} is listed at vertex {1} which is not its endpoint")]
    EdgeAtNonEndpoint(EdgeId, VertexId),
    #[error("edge id {0} in adjacency lists does not exist")]
    EdgeAbsent(EdgeId),
    #[error("sum of adjacency list lengths ({0}) does not match edge count ({1}) with loops once")]
    HandshakingLemma(usize, usize),
    #[error("flow on edge {0} is out of its capacity bounds")]
    FlowOutOfBounds(EdgeId),
}

/// Checks that every edge is listed exactly at its endpoints and carries a
/// flow within bounds.
pub fn check_consistency<C: Capacity>(network: &FlowNetwork<C>) -> Result<(), ConsistencyCheckError> {
    let mut degree_sum = 0;

    for v in 0..network.vertex_count() {
        let vertex = VertexId::from_usize(v);

        for &id in network.adj(vertex) {
            let edge = network.edge(id).ok_or(ConsistencyCheckError::EdgeAbsent(id))?;

            if edge.from() != vertex && edge.to() != vertex {
                return Err(ConsistencyCheckError::EdgeAtNonEndpoint(id, vertex));
            }

            degree_sum += 1;
        }
    }

    let mut expected = 0;

    for (id, edge) in network.edges() {
        for endpoint in [edge.from(), edge.to()] {
            if !network.adj(endpoint).contains(&id) {
                return Err(ConsistencyCheckError::EdgeNotInAdjacency(id, endpoint));
            }
        }

        if !edge.flow().is_nonnegative() || edge.flow() > edge.capacity() {
            return Err(ConsistencyCheckError::FlowOutOfBounds(id));
        }

        expected += if edge.is_loop() { 1 } else { 2 };
    }

    if degree_sum != expected {
        return Err(ConsistencyCheckError::HandshakingLemma(degree_sum, expected));
    }

    Ok(())
}
