#![allow(dead_code)]

use fastrand::Rng;
use flowcut::{
    core::{IdType, VertexId},
    storage::{EdgeWeightedGraph, FlowNetwork},
};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Based on the implementation in flowcut::infra::proptest.

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn random_flow_network(vertex_count: usize, density: f32, rng: &mut Rng) -> FlowNetwork<u32> {
    let mut network = FlowNetwork::new(vertex_count);
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let (u, v) = if rng.bool() { (u, v) } else { (v, u) };
        network
            .add_edge(VertexId::from_usize(u), VertexId::from_usize(v), rng.u32(1..100))
            .unwrap();
    }

    network
}

pub fn random_edge_weighted_graph(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> EdgeWeightedGraph<f64> {
    let mut graph = EdgeWeightedGraph::new(vertex_count);
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph
            .add_edge(VertexId::from_usize(u), VertexId::from_usize(v), rng.f64())
            .unwrap();
    }

    graph
}
