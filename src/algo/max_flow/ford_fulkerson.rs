use tracing::{debug, trace};

use crate::{
    core::{capacity::Capacity, error::EdgeError, id::VertexId},
    storage::FlowNetwork,
};

use super::{bfs::AugmentingPath, check_feasible, Error, Infeasibility, MaxFlow};

pub fn ford_fulkerson<C>(
    network: &mut FlowNetwork<C>,
    source: VertexId,
    sink: VertexId,
    initial_value: Option<C>,
) -> Result<MaxFlow<C>, Error>
where
    C: Capacity,
{
    if !network.contains_vertex(source) {
        return Err(Error::SourceAbsent);
    }

    if !network.contains_vertex(sink) {
        return Err(Error::SinkAbsent);
    }

    if source == sink {
        return Err(Error::SourceIsSink);
    }

    let mut value = match initial_value {
        Some(value) => value,
        None => {
            // Net flow into the sink. A preloaded flow that drains the sink is
            // not a flow from source to sink.
            let (inflow, outflow) = (network.inflow(sink), network.outflow(sink));
            if inflow + C::tolerance() < outflow {
                return Err(Error::InfeasibleFlow(Infeasibility::SinkImbalance));
            }
            if inflow >= outflow {
                inflow - outflow
            } else {
                C::zero()
            }
        }
    };

    check_feasible(network, source, sink, value)?;

    let mut search = AugmentingPath::new(network.vertex_count());
    let mut augmentations = 0;

    while search.search(network, source, sink)? {
        let path = search.path(network, source, sink)?;

        let mut bottleneck = C::inf();
        for &(id, vertex) in path.iter() {
            let edge = network.edge(id).ok_or(EdgeError::EdgeAbsent(id))?;
            bottleneck = bottleneck.min_of(edge.residual_capacity_to(vertex)?);
        }

        for &(id, vertex) in path.iter() {
            network.add_residual_flow_to(id, vertex, bottleneck)?;
        }

        value = value + bottleneck;
        augmentations += 1;

        trace!(?bottleneck, ?value, length = path.len(), "augmented flow");
    }

    debug!(?value, augmentations, "maximum flow found");

    Ok(MaxFlow {
        source,
        sink,
        value,
        in_cut: search.into_marked(),
        vertex_count: network.vertex_count(),
        augmentations,
    })
}
