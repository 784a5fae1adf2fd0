use std::fmt;

use thiserror::Error;

use super::id::{EdgeId, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("index {index} is out of range for {len} elements")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfRange {
    pub fn check(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self { index, len })
        }
    }
}

/// Violation of a flow edge or weighted edge invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EdgeError {
    #[error("capacity must be nonnegative")]
    NegativeCapacity,

    #[error("flow must be between zero and capacity")]
    FlowOutOfBounds,

    #[error("delta must be nonnegative")]
    NegativeDelta,

    #[error("vertex {0} is not an endpoint of the edge")]
    NotEndpoint(VertexId),

    #[error("edge {0} does not exist")]
    EdgeAbsent(EdgeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError {
    pub kind: AddEdgeErrorKind,
}

impl AddEdgeError {
    pub fn new(kind: AddEdgeErrorKind) -> Self {
        Self { kind }
    }
}

impl From<EdgeError> for AddEdgeError {
    fn from(error: EdgeError) -> Self {
        Self::new(AddEdgeErrorKind::Invalid(error))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    Invalid(EdgeError),
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddEdgeErrorKind::SourceAbsent => f.write_str("source does not exist"),
            AddEdgeErrorKind::DestinationAbsent => f.write_str("destination does not exist"),
            AddEdgeErrorKind::Invalid(error) => fmt::Display::fmt(error, f),
        }
    }
}
