//! Types used for identifying vertices and edges in graphs.
//!
//! Both [`VertexId`] and [`EdgeId`] are thin wrappers around `usize`, so the
//! algorithms can index contiguous arrays with them directly. Distinct types
//! prevent accidentally passing an edge handle where a vertex is expected.

use std::{fmt, hash::Hash};

/// A unique identification of a vertex or edge in a graph.
///
/// Any ID has a representation for a
/// "[sentinel](https://en.wikipedia.org/wiki/Sentinel_value)" value. We use
/// the maximum value of `usize` for the sentinel, so we don't introduce the
/// overhead of using `Option<ID>` in dense per-vertex arrays and can use 0 as
/// the first index as is natural.
pub trait IdType: Copy + Ord + Hash + fmt::Debug + From<usize> + Into<usize> {
    /// Conceptually `None` in `Option<ID>`, but without using `Option`.
    fn sentinel() -> Self;

    /// Converts an ID into the corresponding `usize`.
    fn as_usize(&self) -> usize;

    /// Converts an `usize` into the corresponding ID.
    fn from_usize(index: usize) -> Self;

    /// Returns `true` if the value represents the sentinel value.
    fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }
}

/// Identifier of a vertex. Vertices of a graph with `V` vertices are
/// identified by `0..V`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

/// Identifier of an edge, a handle into the edge storage of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

macro_rules! impl_int_id {
    ($id_ty:ident) => {
        impl IdType for $id_ty {
            fn sentinel() -> Self {
                Self(usize::MAX)
            }

            fn as_usize(&self) -> usize {
                self.0
            }

            fn from_usize(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<usize> for $id_ty {
            fn from(index: usize) -> Self {
                Self::from_usize(index)
            }
        }

        impl From<$id_ty> for usize {
            fn from(id: $id_ty) -> Self {
                id.as_usize()
            }
        }

        impl fmt::Display for $id_ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

impl_int_id!(VertexId);
impl_int_id!(EdgeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_a_regular_index() {
        assert!(VertexId::sentinel().is_sentinel());
        assert!(!VertexId::from(0).is_sentinel());
        assert!(!EdgeId::from(usize::MAX - 1).is_sentinel());
    }

    #[test]
    fn converts_to_and_from_usize() {
        let v = VertexId::from(7);
        assert_eq!(v.as_usize(), 7);
        assert_eq!(usize::from(v), 7);
        assert_eq!(v.to_string(), "7");
    }
}
