use arbitrary::Arbitrary;

use crate::{
    core::id::{IdType, VertexId},
    storage::{EdgeWeightedGraph, FlowNetwork},
    union_find::UnionFind,
};

use super::testing::NaiveUnionFind;

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

#[derive(Debug, Arbitrary, Clone, Copy)]
pub enum UnionFindOp {
    Union(Index, Index),
    Find(Index),
    Connected(Index, Index),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionFindOpResult {
    Union(bool),
    // Whether the returned root is in the same component as the element.
    Find(bool),
    Connected(bool),
    Empty,
}

impl UnionFindOp {
    /// Applies the operation on a union-find implementation. Indices are
    /// wrapped into range.
    pub fn apply<U: UnionFind>(self, uf: &mut U) -> UnionFindOpResult {
        let n = uf.len();

        let result = match self {
            UnionFindOp::Union(p, q) => match (p.get(n), q.get(n)) {
                (Some(p), Some(q)) => uf.union(p, q).map(UnionFindOpResult::Union),
                _ => return UnionFindOpResult::Empty,
            },
            UnionFindOp::Find(p) => match p.get(n) {
                Some(p) => uf
                    .find(p)
                    .and_then(|root| uf.connected(p, root))
                    .map(UnionFindOpResult::Find),
                None => return UnionFindOpResult::Empty,
            },
            UnionFindOp::Connected(p, q) => match (p.get(n), q.get(n)) {
                (Some(p), Some(q)) => uf.connected(p, q).map(UnionFindOpResult::Connected),
                _ => return UnionFindOpResult::Empty,
            },
        };

        // Indices are wrapped, so they are always in range.
        result.unwrap_or(UnionFindOpResult::Empty)
    }

    /// Applies the operation on the reference model.
    pub fn apply_model(self, model: &mut NaiveUnionFind, n: usize) -> UnionFindOpResult {
        match self {
            UnionFindOp::Union(p, q) => match (p.get(n), q.get(n)) {
                (Some(p), Some(q)) => UnionFindOpResult::Union(model.union(p, q)),
                _ => UnionFindOpResult::Empty,
            },
            UnionFindOp::Find(p) => match p.get(n) {
                Some(_) => UnionFindOpResult::Find(true),
                None => UnionFindOpResult::Empty,
            },
            UnionFindOp::Connected(p, q) => match (p.get(n), q.get(n)) {
                (Some(p), Some(q)) => UnionFindOpResult::Connected(model.connected(p, q)),
                _ => UnionFindOpResult::Empty,
            },
        }
    }
}

/// Raw description of a small graph. Endpoints are wrapped into the vertex
/// range when the graph is built.
#[derive(Debug, Arbitrary, Clone)]
pub struct GraphInput {
    pub vertex_count: u8,
    pub edges: Vec<(Index, Index, u16)>,
}

impl GraphInput {
    fn vertex_count(&self) -> usize {
        usize::from(self.vertex_count % 64)
    }

    fn endpoints(&self) -> impl Iterator<Item = (VertexId, VertexId, u32)> + '_ {
        let n = self.vertex_count();

        self.edges.iter().filter_map(move |(v, w, weight)| {
            Some((
                VertexId::from_usize(v.get(n)?),
                VertexId::from_usize(w.get(n)?),
                u32::from(*weight),
            ))
        })
    }

    pub fn flow_network(&self) -> FlowNetwork<u32> {
        let mut network = FlowNetwork::new(self.vertex_count());

        for (from, to, capacity) in self.endpoints() {
            network
                .add_edge(from, to, capacity)
                .expect("endpoints are wrapped into range");
        }

        network
    }

    pub fn edge_weighted_graph(&self) -> EdgeWeightedGraph<u32> {
        let mut graph = EdgeWeightedGraph::new(self.vertex_count());

        for (v, w, weight) in self.endpoints() {
            graph
                .add_edge(v, w, weight)
                .expect("endpoints are wrapped into range");
        }

        graph
    }
}
