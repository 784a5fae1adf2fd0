use std::{fmt, marker::PhantomData};

use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::{
    core::{
        capacity::Capacity,
        id::{IdType, VertexId},
    },
    storage::{EdgeWeightedGraph, FlowNetwork},
};

/// Random flow networks with zero flow and capacities drawn from the given
/// strategy, which must generate nonnegative values.
pub fn flow_network<C>(capacity: C) -> GraphStrategy<C, FlowNetwork<C::Value>>
where
    C: Strategy,
    C::Value: Capacity,
{
    GraphStrategy::new(capacity)
}

/// Random undirected graphs with weights drawn from the given strategy.
pub fn edge_weighted_graph<W>(weight: W) -> GraphStrategy<W, EdgeWeightedGraph<W::Value>>
where
    W: Strategy,
    W::Value: Copy,
{
    GraphStrategy::new(weight)
}

/// Graph types that can be built from a vertex count and a list of edges.
pub trait FromEdges<E>: fmt::Debug {
    fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = (usize, usize, E)>) -> Self;
}

impl<C: Capacity> FromEdges<C> for FlowNetwork<C> {
    fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = (usize, usize, C)>) -> Self {
        let mut network = FlowNetwork::new(vertex_count);

        for (from, to, capacity) in edges {
            network
                .add_edge(VertexId::from_usize(from), VertexId::from_usize(to), capacity)
                .expect("capacity strategy must generate nonnegative values");
        }

        network
    }
}

impl<W: Copy + fmt::Debug> FromEdges<W> for EdgeWeightedGraph<W> {
    fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = (usize, usize, W)>) -> Self {
        let mut graph = EdgeWeightedGraph::new(vertex_count);

        for (v, w, weight) in edges {
            graph
                .add_edge(VertexId::from_usize(v), VertexId::from_usize(w), weight)
                .expect("endpoints are in range");
        }

        graph
    }
}

pub struct GraphStrategy<E: Strategy, G> {
    edge: E,
    params: StrategyParams,
    graph: PhantomData<fn() -> G>,
}

// G is phantom data, we should not require Debug bound on it.
impl<E: Strategy, G> fmt::Debug for GraphStrategy<E, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("edge", &self.edge)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<E: Strategy, G> GraphStrategy<E, G> {
    pub fn new(edge: E) -> Self {
        Self::with_params(edge, StrategyParams::default())
    }

    pub fn with_params(edge: E, params: StrategyParams) -> Self {
        Self {
            edge,
            params,
            graph: PhantomData,
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `flow_network(0..10).max_size(100).sparse()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(multi_edge_prob, multi_edge_prob: f32);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

#[derive(Debug, Clone)]
pub struct StrategyParams {
    max_size: usize,
    allow_loops: bool,
    multi_edge_prob: f32,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 64,
            allow_loops: false,
            multi_edge_prob: 0.0,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn multi_edge_prob(self, multi_edge_prob: f32) -> Self {
        assert!(
            (0.0..=0.1).contains(&multi_edge_prob),
            "multi edge probability must be in [0, 0.1] range"
        );
        Self {
            multi_edge_prob,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }
}

impl<E: Strategy, G> Strategy for GraphStrategy<E, G>
where
    G: FromEdges<E::Value>,
{
    type Tree = GraphValueTree<E::Tree, G>;
    type Value = G;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f32>() * self.params.density;

        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf

        let m_guess = if n > 0 {
            ((n * (n - 1) / 2) as f32 * p).round() as usize
        } else {
            0
        };
        let mut edges = Vec::with_capacity(m_guess);

        let mut v = 1;
        let mut w = usize::MAX; // -1

        while v < n {
            let r: f32 = runner.rng().gen();
            w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

            if self.params.allow_loops {
                // Using `w > v` instead of `w >= v` to allow loops.
                while w > v && v < n {
                    w -= v;
                    v += 1;
                }
            } else {
                while w >= v && v < n {
                    w -= v;
                    v += 1;
                }
            }

            if v < n {
                // In half of the cases, swap the endpoints so that directed
                // edges go both ways.
                let (s, t) = if runner.rng().gen_bool(0.5) {
                    (w, v)
                } else {
                    (v, w)
                };

                edges.push((s, t, self.edge.new_tree(runner)?));

                // Possibly add multi edges.
                while runner.rng().gen_bool(self.params.multi_edge_prob as f64) {
                    edges.push((s, t, self.edge.new_tree(runner)?));
                }
            }
        }

        Ok(GraphValueTree {
            vertex_count: n,
            edges,
            shrink: ShrinkState::new(n),
            graph: PhantomData,
        })
    }
}

pub struct GraphValueTree<E: ValueTree, G> {
    vertex_count: usize,
    edges: Vec<(usize, usize, E)>,
    shrink: ShrinkState,
    graph: PhantomData<fn() -> G>,
}

impl<E: ValueTree, G> ValueTree for GraphValueTree<E, G>
where
    G: FromEdges<E::Value>,
{
    type Value = G;

    fn current(&self) -> Self::Value {
        let n = self.shrink.vertex_count;

        let edges = self
            .edges
            .iter()
            .enumerate()
            .filter(|(e, (src, dst, _))| !self.shrink.removed_edges.contains(e) && *src < n && *dst < n)
            .map(|(_, (src, dst, edge))| (*src, *dst, edge.current()));

        G::from_edges(n, edges)
    }

    fn simplify(&mut self) -> bool {
        // First drop vertices from the end, which also drops their edges, then
        // edges one by one, and finally simplify the attributes of the
        // remaining edges.
        loop {
            match self.shrink.phase {
                Phase::Vertex => {
                    if self.shrink.vertex_count > 0 {
                        self.shrink.vertex_count -= 1;
                        self.shrink.last = Some(Phase::Vertex);
                        return true;
                    }
                    self.shrink.phase = Phase::Edge(0);
                }
                Phase::Edge(e) => {
                    let n = self.shrink.vertex_count;
                    let next = (e..self.edges.len()).find(|&e| {
                        let (src, dst, _) = &self.edges[e];
                        !self.shrink.removed_edges.contains(&e) && *src < n && *dst < n
                    });

                    match next {
                        Some(e) => {
                            self.shrink.removed_edges.insert(e);
                            self.shrink.phase = Phase::Edge(e + 1);
                            self.shrink.last = Some(Phase::Edge(e));
                            return true;
                        }
                        None => self.shrink.phase = Phase::Attr(0),
                    }
                }
                Phase::Attr(e) => {
                    if e >= self.edges.len() {
                        return false;
                    }

                    let n = self.shrink.vertex_count;
                    let (src, dst, edge) = &mut self.edges[e];
                    let present = !self.shrink.removed_edges.contains(&e) && *src < n && *dst < n;

                    if present && edge.simplify() {
                        self.shrink.last = Some(Phase::Attr(e));
                        return true;
                    }

                    self.shrink.phase = Phase::Attr(e + 1);
                }
            }
        }
    }

    fn complicate(&mut self) -> bool {
        match self.shrink.last.take() {
            Some(Phase::Vertex) => {
                self.shrink.vertex_count += 1;
                self.shrink.phase = Phase::Edge(0);
                true
            }
            Some(Phase::Edge(e)) => {
                self.shrink.removed_edges.remove(&e);
                true
            }
            Some(Phase::Attr(e)) => {
                let complicated = self.edges[e].2.complicate();
                if complicated {
                    self.shrink.last = Some(Phase::Attr(e));
                }
                complicated
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Vertex,
    Edge(usize),
    Attr(usize),
}

#[derive(Debug, Clone)]
struct ShrinkState {
    phase: Phase,
    vertex_count: usize,
    removed_edges: FxHashSet<usize>,
    last: Option<Phase>,
}

impl ShrinkState {
    fn new(vertex_count: usize) -> Self {
        Self {
            phase: Phase::Vertex,
            vertex_count,
            removed_edges: FxHashSet::default(),
            last: None,
        }
    }
}
