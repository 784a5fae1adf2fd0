use crate::core::error::IndexOutOfRange;

use super::UnionFind;

/// Eager approach: every element stores the identifier of its set directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFind {
    id: Vec<usize>,
    count: usize,
}

impl UnionFind for QuickFind {
    fn new(n: usize) -> Self {
        Self {
            id: (0..n).collect(),
            count: n,
        }
    }

    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, p: usize) -> Result<usize, IndexOutOfRange> {
        IndexOutOfRange::check(p, self.id.len())?;
        Ok(self.id[p])
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool, IndexOutOfRange> {
        let id_p = self.find(p)?;
        let id_q = self.find(q)?;

        if id_p == id_q {
            return Ok(false);
        }

        for id in self.id.iter_mut() {
            if *id == id_p {
                *id = id_q;
            }
        }

        self.count -= 1;
        Ok(true)
    }
}
