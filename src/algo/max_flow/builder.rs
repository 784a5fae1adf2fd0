use crate::{
    core::{capacity::Capacity, id::VertexId},
    storage::FlowNetwork,
};

use super::{ford_fulkerson::ford_fulkerson, Error, MaxFlow};

/// Builder for [`MaxFlow`].
pub struct MaxFlowBuilder<'a, C> {
    network: &'a mut FlowNetwork<C>,
    initial_value: Option<C>,
}

impl<C> MaxFlow<C>
where
    C: Capacity,
{
    /// Starts configuring the algorithm on the given network.
    ///
    /// The network is borrowed mutably: the algorithm augments the flow it
    /// already carries and leaves the maximum flow in it.
    pub fn on(network: &mut FlowNetwork<C>) -> MaxFlowBuilder<'_, C> {
        MaxFlowBuilder {
            network,
            initial_value: None,
        }
    }
}

impl<'a, C> MaxFlowBuilder<'a, C>
where
    C: Capacity,
{
    /// Claims the value of the flow the network already carries.
    ///
    /// The claim is validated together with the rest of the initial flow. If
    /// not specified, the value is derived as the net flow into the sink.
    pub fn initial_value(self, value: C) -> Self {
        Self {
            initial_value: Some(value),
            ..self
        }
    }

    /// Runs the algorithm between the source and the sink.
    pub fn run(self, source: VertexId, sink: VertexId) -> Result<MaxFlow<C>, Error> {
        ford_fulkerson(self.network, source, sink, self.initial_value)
    }
}
