use std::{
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use fixedbitset::FixedBitSet;

use crate::core::id::IdType;

pub trait VisitSet<I: IdType> {
    /// Marks the id as visited. Returns `true` if it was not visited before.
    fn visit(&mut self, id: I) -> bool;
    fn is_visited(&self, id: &I) -> bool;
    fn visited_count(&self) -> usize;
    fn reset_visited(&mut self);
}

impl<I: IdType> VisitSet<I> for FixedBitSet {
    fn visit(&mut self, id: I) -> bool {
        if self.len() <= id.as_usize() {
            self.grow(id.as_usize() + 1);
        }
        !self.put(id.as_usize())
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id.as_usize())
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

impl<I: IdType> VisitSet<I> for TypedBitSet<I> {
    fn visit(&mut self, id: I) -> bool {
        VisitSet::<I>::visit(&mut **self, id)
    }

    fn is_visited(&self, id: &I) -> bool {
        VisitSet::<I>::is_visited(&**self, id)
    }

    fn visited_count(&self) -> usize {
        VisitSet::<I>::visited_count(&**self)
    }

    fn reset_visited(&mut self) {
        VisitSet::<I>::reset_visited(&mut **self)
    }
}

/// [`FixedBitSet`] that is tied to a specific id type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedBitSet<T> {
    inner: FixedBitSet,
    ty: PhantomData<fn() -> T>,
}

impl<T> TypedBitSet<T> {
    pub fn new() -> Self {
        Self {
            inner: FixedBitSet::new(),
            ty: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: FixedBitSet::with_capacity(capacity),
            ty: PhantomData,
        }
    }
}

impl<T: IdType> TypedBitSet<T> {
    /// Iterates over visited ids in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.inner.ones().map(T::from_usize)
    }
}

impl<T> Default for TypedBitSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for TypedBitSet<T> {
    type Target = FixedBitSet;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for TypedBitSet<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use crate::core::VertexId;

    use super::*;

    #[test]
    fn visit_grows_on_demand() {
        let mut visited = TypedBitSet::<VertexId>::new();

        assert!(visited.visit(VertexId::from(5)));
        assert!(!visited.visit(VertexId::from(5)));
        assert!(visited.is_visited(&VertexId::from(5)));
        assert!(!visited.is_visited(&VertexId::from(4)));
        assert!(!visited.is_visited(&VertexId::from(100)));
        assert_eq!(visited.visited_count(), 1);
    }

    #[test]
    fn iter_and_reset() {
        let mut visited = TypedBitSet::<VertexId>::with_capacity(8);
        visited.visit(VertexId::from(3));
        visited.visit(VertexId::from(1));

        assert_eq!(
            visited.iter().collect::<Vec<_>>(),
            vec![VertexId::from(1), VertexId::from(3)]
        );

        visited.reset_visited();
        assert_eq!(visited.visited_count(), 0);
    }
}
