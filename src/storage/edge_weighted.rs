//! Undirected graph with weighted edges.

use std::fmt;

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind, EdgeError},
    id::{EdgeId, IdType, VertexId},
};

/// An undirected edge `v - w` with a weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge<C = f64> {
    v: VertexId,
    w: VertexId,
    weight: C,
}

impl<C: Copy> WeightedEdge<C> {
    pub fn new(v: VertexId, w: VertexId, weight: C) -> Self {
        Self { v, w, weight }
    }

    /// Returns either endpoint of the edge.
    pub fn either(&self) -> VertexId {
        self.v
    }

    /// Returns the endpoint opposite to `vertex`.
    pub fn other(&self, vertex: VertexId) -> Result<VertexId, EdgeError> {
        if vertex == self.v {
            Ok(self.w)
        } else if vertex == self.w {
            Ok(self.v)
        } else {
            Err(EdgeError::NotEndpoint(vertex))
        }
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.v, self.w)
    }

    pub fn weight(&self) -> C {
        self.weight
    }

    pub fn is_loop(&self) -> bool {
        self.v == self.w
    }
}

impl<C: fmt::Display> fmt::Display for WeightedEdge<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {}", self.v, self.w, self.weight)
    }
}

/// An undirected multigraph on vertices `0..V` with weighted edges.
///
/// A self-loop appears twice in the adjacency list of its vertex, so the
/// [degree](EdgeWeightedGraph::degree) counts it twice.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWeightedGraph<C = f64> {
    edges: Vec<WeightedEdge<C>>,
    adj: Vec<Vec<EdgeId>>,
}

impl<C: Copy> EdgeWeightedGraph<C> {
    pub fn new(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count, 0)
    }

    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            edges: Vec::with_capacity(edge_count),
            adj: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.as_usize() < self.adj.len()
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.adj.push(Vec::new());
        VertexId::from_usize(self.adj.len() - 1)
    }

    pub fn add_edge(&mut self, v: VertexId, w: VertexId, weight: C) -> Result<EdgeId, AddEdgeError> {
        if !self.contains_vertex(v) {
            return Err(AddEdgeError::new(AddEdgeErrorKind::SourceAbsent));
        }

        if !self.contains_vertex(w) {
            return Err(AddEdgeError::new(AddEdgeErrorKind::DestinationAbsent));
        }

        let id = EdgeId::from_usize(self.edges.len());
        self.edges.push(WeightedEdge::new(v, w, weight));
        self.adj[v.as_usize()].push(id);
        self.adj[w.as_usize()].push(id);

        Ok(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&WeightedEdge<C>> {
        self.edges.get(id.as_usize())
    }

    /// All edges, each reported once.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &WeightedEdge<C>)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(id, edge)| (EdgeId::from_usize(id), edge))
    }

    pub fn adj(&self, vertex: VertexId) -> &[EdgeId] {
        self.adj
            .get(vertex.as_usize())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn incident(&self, vertex: VertexId) -> impl Iterator<Item = (EdgeId, &WeightedEdge<C>)> {
        self.adj(vertex)
            .iter()
            .map(move |&id| (id, &self.edges[id.as_usize()]))
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adj(vertex).len()
    }
}

impl<C: Copy + fmt::Display> fmt::Display for EdgeWeightedGraph<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count(), self.edge_count())?;

        for v in 0..self.vertex_count() {
            write!(f, "{v}:")?;

            for (_, edge) in self.incident(VertexId::from_usize(v)) {
                write!(f, "  {edge}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
