//! Directed capacitated network carrying a flow.
//!
//! Every edge is stored exactly once in an arena and both of its endpoints
//! refer to it by an [`EdgeId`] handle. Pushing flow through an edge from one
//! endpoint is therefore immediately visible as a changed residual capacity
//! from the other endpoint, without keeping a separate table of reverse edges.
//!
//! # Examples
//!
//! ```
//! use flowcut::{core::VertexId, storage::FlowNetwork};
//!
//! let mut network = FlowNetwork::new(2);
//! let (v0, v1) = (VertexId::from(0), VertexId::from(1));
//!
//! let e = network.add_edge(v0, v1, 10.0).unwrap();
//! network.add_residual_flow_to(e, v1, 4.0).unwrap();
//!
//! let edge = network.edge(e).unwrap();
//! assert_eq!(edge.residual_capacity_to(v1), Ok(6.0));
//! assert_eq!(edge.residual_capacity_to(v0), Ok(4.0));
//! ```

use std::fmt;

use crate::core::{
    capacity::Capacity,
    error::{AddEdgeError, AddEdgeErrorKind, EdgeError},
    id::{EdgeId, IdType, VertexId},
};

use super::edge_weighted::EdgeWeightedGraph;

/// A directed edge `from -> to` with a capacity and a flow in `[0,
/// capacity]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge<C = f64> {
    from: VertexId,
    to: VertexId,
    capacity: C,
    flow: C,
}

impl<C: Capacity> FlowEdge<C> {
    /// Creates an edge with zero flow.
    pub fn new(from: VertexId, to: VertexId, capacity: C) -> Result<Self, EdgeError> {
        Self::with_flow(from, to, capacity, C::zero())
    }

    pub fn with_flow(from: VertexId, to: VertexId, capacity: C, flow: C) -> Result<Self, EdgeError> {
        if !capacity.is_nonnegative() {
            return Err(EdgeError::NegativeCapacity);
        }

        if !flow.is_nonnegative() || flow > capacity {
            return Err(EdgeError::FlowOutOfBounds);
        }

        Ok(Self {
            from,
            to,
            capacity,
            flow,
        })
    }

    /// The tail vertex.
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// The head vertex.
    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn capacity(&self) -> C {
        self.capacity
    }

    pub fn flow(&self) -> C {
        self.flow
    }

    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns the endpoint opposite to `vertex`.
    pub fn other(&self, vertex: VertexId) -> Result<VertexId, EdgeError> {
        if vertex == self.from {
            Ok(self.to)
        } else if vertex == self.to {
            Ok(self.from)
        } else {
            Err(EdgeError::NotEndpoint(vertex))
        }
    }

    /// Returns the residual capacity of the edge in the direction to the given
    /// vertex.
    ///
    /// Toward the head it is the unused capacity, toward the tail it is the
    /// flow that can be cancelled.
    pub fn residual_capacity_to(&self, vertex: VertexId) -> Result<C, EdgeError> {
        if vertex == self.from {
            Ok(self.flow)
        } else if vertex == self.to {
            Ok(self.capacity - self.flow)
        } else {
            Err(EdgeError::NotEndpoint(vertex))
        }
    }

    /// Pushes `delta` units of residual flow toward `vertex`: increases the
    /// flow if `vertex` is the head, decreases it if `vertex` is the tail.
    ///
    /// The resulting flow is snapped to `0` or `capacity` when it lands within
    /// [tolerance](Capacity::tolerance) of the bound. Leaving `[0, capacity]`
    /// by more than that is an error and leaves the edge untouched.
    pub fn add_residual_flow_to(&mut self, vertex: VertexId, delta: C) -> Result<(), EdgeError> {
        if !delta.is_nonnegative() {
            return Err(EdgeError::NegativeDelta);
        }

        // The subtractions are ordered so that unsigned capacities never
        // underflow.
        let flow = if vertex == self.from {
            if delta > self.flow + C::tolerance() {
                return Err(EdgeError::FlowOutOfBounds);
            }

            if delta >= self.flow {
                C::zero()
            } else {
                self.flow - delta
            }
        } else if vertex == self.to {
            let residual = self.capacity - self.flow;

            if delta > residual + C::tolerance() {
                return Err(EdgeError::FlowOutOfBounds);
            }

            if delta >= residual {
                self.capacity
            } else {
                self.flow + delta
            }
        } else {
            return Err(EdgeError::NotEndpoint(vertex));
        };

        self.flow = if flow.approx_eq(C::zero()) {
            C::zero()
        } else if flow.approx_eq(self.capacity) {
            self.capacity
        } else {
            flow
        };

        Ok(())
    }

    pub(crate) fn reset(&mut self) {
        self.flow = C::zero();
    }
}

impl<C: fmt::Display> fmt::Display for FlowEdge<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {}/{}", self.from, self.to, self.flow, self.capacity)
    }
}

/// A flow network on vertices `0..V`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNetwork<C = f64> {
    edges: Vec<FlowEdge<C>>,
    adj: Vec<Vec<EdgeId>>,
}

impl<C: Capacity> FlowNetwork<C> {
    /// Creates a network with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count, 0)
    }

    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            edges: Vec::with_capacity(edge_count),
            adj: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a network with two opposite edges for every undirected edge of
    /// the graph, each with capacity equal to the edge weight.
    pub fn bidirected(graph: &EdgeWeightedGraph<C>) -> Result<Self, AddEdgeError> {
        let mut network = Self::with_capacity(graph.vertex_count(), 2 * graph.edge_count());

        for (_, edge) in graph.edges() {
            let (v, w) = edge.endpoints();
            network.add_edge(v, w, edge.weight())?;
            network.add_edge(w, v, edge.weight())?;
        }

        Ok(network)
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

    pub fn add_edge(&mut self, from: VertexId, to: VertexId, capacity: C) -> Result<EdgeId, AddEdgeError> {
        self.add_edge_with_flow(from, to, capacity, C::zero())
    }

    /// Adds an edge that already carries some flow.
    pub fn add_edge_with_flow(
        &mut self,
        from: VertexId,
        to: VertexId,
        capacity: C,
        flow: C,
    ) -> Result<EdgeId, AddEdgeError> {
        self.check_endpoints(from, to)?;
        let edge = FlowEdge::with_flow(from, to, capacity, flow)?;
        Ok(self.push_edge(edge))
    }

    pub fn add_flow_edge(&mut self, edge: FlowEdge<C>) -> Result<EdgeId, AddEdgeError> {
        self.check_endpoints(edge.from, edge.to)?;
        Ok(self.push_edge(edge))
    }

    pub fn edge(&self, id: EdgeId) -> Option<&FlowEdge<C>> {
        self.edges.get(id.as_usize())
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId::from_usize)
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &FlowEdge<C>)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(id, edge)| (EdgeId::from_usize(id), edge))
    }

    /// Handles of all edges incident to the vertex, in both directions. Empty
    /// for a vertex that does not exist.
    pub fn adj(&self, vertex: VertexId) -> &[EdgeId] {
        self.adj
            .get(vertex.as_usize())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Like [`adj`](FlowNetwork::adj), but resolves the handles.
    pub fn incident(&self, vertex: VertexId) -> impl Iterator<Item = (EdgeId, &FlowEdge<C>)> {
        self.adj(vertex)
            .iter()
            .map(move |&id| (id, &self.edges[id.as_usize()]))
    }

    /// Pushes residual flow through the edge toward the given vertex. See
    /// [`FlowEdge::add_residual_flow_to`].
    pub fn add_residual_flow_to(&mut self, edge: EdgeId, vertex: VertexId, delta: C) -> Result<(), EdgeError> {
        self.edges
            .get_mut(edge.as_usize())
            .ok_or(EdgeError::EdgeAbsent(edge))?
            .add_residual_flow_to(vertex, delta)
    }

    /// Total flow entering the vertex. Self-loops are not counted.
    pub fn inflow(&self, vertex: VertexId) -> C {
        self.incident(vertex)
            .filter(|(_, edge)| edge.to == vertex && !edge.is_loop())
            .fold(C::zero(), |total, (_, edge)| total + edge.flow)
    }

    /// Total flow leaving the vertex. Self-loops are not counted.
    pub fn outflow(&self, vertex: VertexId) -> C {
        self.incident(vertex)
            .filter(|(_, edge)| edge.from == vertex && !edge.is_loop())
            .fold(C::zero(), |total, (_, edge)| total + edge.flow)
    }

    /// Sets the flow of every edge to zero.
    pub fn reset_flow(&mut self) {
        self.edges.iter_mut().for_each(FlowEdge::reset);
    }

    fn check_endpoints(&self, from: VertexId, to: VertexId) -> Result<(), AddEdgeError> {
        if !self.contains_vertex(from) {
            return Err(AddEdgeError::new(AddEdgeErrorKind::SourceAbsent));
        }

        if !self.contains_vertex(to) {
            return Err(AddEdgeError::new(AddEdgeErrorKind::DestinationAbsent));
        }

        Ok(())
    }

    fn push_edge(&mut self, edge: FlowEdge<C>) -> EdgeId {
        let id = EdgeId::from_usize(self.edges.len());

        self.adj[edge.from.as_usize()].push(id);
        if !edge.is_loop() {
            self.adj[edge.to.as_usize()].push(id);
        }

        self.edges.push(edge);
        id
    }
}

impl<C: Capacity + fmt::Display> fmt::Display for FlowNetwork<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count(), self.edge_count())?;

        for v in 0..self.vertex_count() {
            let vertex = VertexId::from_usize(v);
            write!(f, "{v}:")?;

            for (_, edge) in self.incident(vertex).filter(|(_, edge)| edge.from == vertex) {
                write!(f, "  {edge}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
