use crate::{
    core::{capacity::Capacity, id::VertexId},
    storage::EdgeWeightedGraph,
};

use super::{stoer_wagner::stoer_wagner, Error, GlobalMinCut};

/// Builder for [`GlobalMinCut`].
pub struct GlobalMinCutBuilder<'a, C> {
    graph: &'a EdgeWeightedGraph<C>,
    start: VertexId,
}

impl<C> GlobalMinCut<C>
where
    C: Capacity,
{
    /// Starts configuring the algorithm on the given graph.
    pub fn on(graph: &EdgeWeightedGraph<C>) -> GlobalMinCutBuilder<'_, C> {
        GlobalMinCutBuilder {
            graph,
            start: VertexId::from(0),
        }
    }
}

impl<'a, C> GlobalMinCutBuilder<'a, C>
where
    C: Capacity,
{
    /// Vertex from which the first maximum adjacency search starts. Each
    /// following search starts from the second to last vertex of the previous
    /// one. Vertex 0 by default.
    ///
    /// The weight of the result does not depend on it, but the partition may
    /// differ when there are multiple minimum cuts.
    pub fn start(self, start: VertexId) -> Self {
        Self { start, ..self }
    }

    pub fn run(self) -> Result<GlobalMinCut<C>, Error> {
        stoer_wagner(self.graph, self.start)
    }
}
