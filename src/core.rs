//! Identifiers, numeric traits and errors shared by all graph
//! representations and algorithms.

pub mod capacity;
pub mod error;
pub mod id;

pub use capacity::Capacity;
pub use id::{EdgeId, IdType, VertexId};
