pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod storage;
pub mod union_find;

pub mod prelude {
    pub use crate::{
        algo::{GlobalMinCut, MaxFlow},
        core::{Capacity, EdgeId, VertexId},
        storage::{EdgeWeightedGraph, FlowEdge, FlowNetwork, WeightedEdge},
        union_find::UnionFind,
    };
}
