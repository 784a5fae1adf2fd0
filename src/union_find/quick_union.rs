use crate::core::error::IndexOutOfRange;

use super::UnionFind;

/// Lazy approach: parent links without any balancing, so the trees may
/// degenerate into paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickUnion {
    parent: Vec<usize>,
    count: usize,
}

impl UnionFind for QuickUnion {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            count: n,
        }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, mut p: usize) -> Result<usize, IndexOutOfRange> {
        IndexOutOfRange::check(p, self.parent.len())?;

        while p != self.parent[p] {
            p = self.parent[p];
        }

        Ok(p)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool, IndexOutOfRange> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;

        if root_p == root_q {
            return Ok(false);
        }

        self.parent[root_p] = root_q;
        self.count -= 1;

        Ok(true)
    }
}
