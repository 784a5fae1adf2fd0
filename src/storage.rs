//! Graph representations consumed by the algorithms.
//!
//! * [`FlowNetwork`] – directed network of [`FlowEdge`]s with capacities and
//!   a mutable flow, the input of [max flow](crate::algo::max_flow).
//! * [`EdgeWeightedGraph`] – undirected graph with weighted edges, the input
//!   of [global minimum cut](crate::algo::global_min_cut).
//!
//! Both store edges in an arena indexed by [`EdgeId`](crate::core::EdgeId)
//! and keep per-vertex lists of handles into it.
//!
//! |                | **[FlowNetwork]** | **[EdgeWeightedGraph]** |
//! |----------------|-------------------|-------------------------|
//! | add vertex     | _O*(1)_           | _O*(1)_                 |
//! | add edge       | _O*(1)_           | _O*(1)_                 |
//! | get neighbors  | _O(d)_            | _O(d)_                  |
//! | lookup edge    | _O(1)_            | _O(1)_                  |
//! | space          | _O(V + E)_        | _O(V + E)_              |
//! | multi edge     | YES               | YES                     |

pub mod edge_weighted;
pub mod flow_network;

#[doc(inline)]
pub use self::{
    edge_weighted::{EdgeWeightedGraph, WeightedEdge},
    flow_network::{FlowEdge, FlowNetwork},
};
