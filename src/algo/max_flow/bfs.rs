use std::collections::VecDeque;

use crate::{
    common::{TypedBitSet, VisitSet},
    core::{
        capacity::Capacity,
        error::EdgeError,
        id::{EdgeId, IdType, VertexId},
    },
    storage::FlowNetwork,
};

/// Breadth-first search for the shortest augmenting path in the residual
/// network.
///
/// The buffers are reused between searches. After a failed search, the
/// visited set is exactly the source side of a minimum cut.
pub struct AugmentingPath {
    // Edge used to reach a vertex, sentinel for unreached ones.
    edge_to: Vec<EdgeId>,
    marked: TypedBitSet<VertexId>,
    queue: VecDeque<VertexId>,
}

impl AugmentingPath {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edge_to: vec![EdgeId::sentinel(); vertex_count],
            marked: TypedBitSet::with_capacity(vertex_count),
            queue: VecDeque::new(),
        }
    }

    /// Returns `true` if the sink is reachable from the source through edges
    /// with positive residual capacity.
    pub fn search<C: Capacity>(
        &mut self,
        network: &FlowNetwork<C>,
        source: VertexId,
        sink: VertexId,
    ) -> Result<bool, EdgeError> {
        self.edge_to.fill(EdgeId::sentinel());
        self.marked.reset_visited();
        self.queue.clear();

        self.marked.visit(source);
        self.queue.push_back(source);

        while let Some(vertex) = self.queue.pop_front() {
            if self.marked.is_visited(&sink) {
                break;
            }

            for &id in network.adj(vertex) {
                let edge = network.edge(id).ok_or(EdgeError::EdgeAbsent(id))?;
                let next = edge.other(vertex)?;

                if self.marked.is_visited(&next) {
                    continue;
                }

                if edge.residual_capacity_to(next)? > C::zero() {
                    self.edge_to[next.as_usize()] = id;
                    self.marked.visit(next);
                    self.queue.push_back(next);
                }
            }
        }

        Ok(self.marked.is_visited(&sink))
    }

    /// Edges of the path found by the last successful search, walking from the
    /// sink back to the source. Each edge is paired with the vertex toward
    /// which the flow is pushed.
    pub fn path<C: Capacity>(
        &self,
        network: &FlowNetwork<C>,
        source: VertexId,
        sink: VertexId,
    ) -> Result<Vec<(EdgeId, VertexId)>, EdgeError> {
        let mut path = Vec::new();
        let mut vertex = sink;

        while vertex != source {
            let id = self.edge_to[vertex.as_usize()];
            let edge = network.edge(id).ok_or(EdgeError::EdgeAbsent(id))?;
            path.push((id, vertex));
            vertex = edge.other(vertex)?;
        }

        Ok(path)
    }

    pub fn into_marked(self) -> TypedBitSet<VertexId> {
        self.marked
    }
}
