//! Maintain a partition of `{0, ..., n - 1}` into [disjoint
//! sets](https://en.wikipedia.org/wiki/Disjoint-set_data_structure).
//!
//! All variants implement the [`UnionFind`] trait and differ only in the
//! cost of their operations:
//!
//! |                        | find          | union         |
//! |------------------------|---------------|---------------|
//! | [`QuickFind`]          | _O(1)_        | _O(n)_        |
//! | [`QuickUnion`]         | _O(n)_        | _O(n)_        |
//! | [`WeightedQuickUnion`] | _O(log n)_    | _O(log n)_    |
//! | [`PathCompressed`]     | _O*(α(n))_    | _O*(α(n))_    |
//!
//! * _α_ – inverse Ackermann function
//! * _O*(..)_ – amortized complexity
//!
//! [`WeightedQuickUnion`] is the default choice when queries must not mutate
//! the structure, [`PathCompressed`] otherwise.
//!
//! # Examples
//!
//! ```
//! use flowcut::union_find::{UnionFind, WeightedQuickUnion};
//!
//! let mut uf = WeightedQuickUnion::new(10);
//!
//! uf.union(1, 2).unwrap();
//! uf.union(2, 3).unwrap();
//! uf.union(4, 5).unwrap();
//!
//! assert_eq!(uf.count(), 7);
//! assert!(uf.connected(1, 3).unwrap());
//! assert!(!uf.connected(1, 4).unwrap());
//! ```

use crate::core::error::IndexOutOfRange;

mod path_compressed;
mod quick_find;
mod quick_union;
mod weighted;

pub use path_compressed::PathCompressed;
pub use quick_find::QuickFind;
pub use quick_union::QuickUnion;
pub use weighted::WeightedQuickUnion;

/// Union-find data type over elements `0..len()`.
pub trait UnionFind {
    /// Creates `n` singleton sets.
    fn new(n: usize) -> Self
    where
        Self: Sized;

    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of disjoint sets.
    fn count(&self) -> usize;

    /// Returns the canonical element of the set containing `p`.
    ///
    /// Takes `&mut self` so that implementations may restructure their
    /// internal forest on queries.
    fn find(&mut self, p: usize) -> Result<usize, IndexOutOfRange>;

    /// Merges the set containing `p` with the set containing `q`. Returns
    /// `true` if the sets were distinct and `false` if there was nothing to
    /// merge.
    fn union(&mut self, p: usize, q: usize) -> Result<bool, IndexOutOfRange>;

    /// Returns `true` if `p` and `q` are in the same set.
    fn connected(&mut self, p: usize, q: usize) -> Result<bool, IndexOutOfRange> {
        Ok(self.find(p)? == self.find(q)?)
    }
}
