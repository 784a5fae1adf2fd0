pub mod index_max_pq;
pub mod visit_set;

pub use index_max_pq::{IndexMaxPq, IndexPqError};
pub use visit_set::{TypedBitSet, VisitSet};
