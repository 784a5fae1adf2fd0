use crate::core::error::IndexOutOfRange;

use super::UnionFind;

/// Weighted quick-union (union by size) without path compression.
///
/// Every tree in the forest has height at most `log2(n)` because a tree is
/// only ever attached under a tree of at least the same size. Queries never
/// mutate the structure, so [`root`](WeightedQuickUnion::root) is available
/// through a shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    // Meaningful only for roots: number of elements in the tree.
    size: Vec<usize>,
    count: usize,
}

impl WeightedQuickUnion {
    /// Returns the root of the tree containing `p`.
    pub fn root(&self, mut p: usize) -> Result<usize, IndexOutOfRange> {
        IndexOutOfRange::check(p, self.parent.len())?;

        while p != self.parent[p] {
            p = self.parent[p];
        }

        Ok(p)
    }

    /// Number of elements in the set containing `p`.
    pub fn size_of(&self, p: usize) -> Result<usize, IndexOutOfRange> {
        let root = self.root(p)?;
        Ok(self.size[root])
    }

    pub fn is_connected(&self, p: usize, q: usize) -> Result<bool, IndexOutOfRange> {
        Ok(self.root(p)? == self.root(q)?)
    }
}

impl UnionFind for WeightedQuickUnion {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, p: usize) -> Result<usize, IndexOutOfRange> {
        self.root(p)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool, IndexOutOfRange> {
        let root_p = self.root(p)?;
        let root_q = self.root(q)?;

        if root_p == root_q {
            return Ok(false);
        }

        // Make smaller root point to larger one.
        let (small, large) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };

        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;

        Ok(true)
    }

    fn connected(&mut self, p: usize, q: usize) -> Result<bool, IndexOutOfRange> {
        self.is_connected(p, q)
    }
}
