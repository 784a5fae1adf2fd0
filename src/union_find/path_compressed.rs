use crate::core::error::IndexOutOfRange;

use super::UnionFind;

/// Union by rank with path halving.
///
/// Each [`find`](UnionFind::find) makes every other vertex on the path point
/// to its grandparent, which flattens the trees over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCompressed {
    parent: Vec<usize>,
    // Upper bound on the height of the subtree; never exceeds 63 for any
    // realistic number of elements.
    rank: Vec<u8>,
    count: usize,
}

impl UnionFind for PathCompressed {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
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
            self.parent[p] = self.parent[self.parent[p]];
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

        match self.rank[root_p].cmp(&self.rank[root_q]) {
            std::cmp::Ordering::Less => self.parent[root_p] = root_q,
            std::cmp::Ordering::Greater => self.parent[root_q] = root_p,
            std::cmp::Ordering::Equal => {
                self.parent[root_q] = root_p;
                self.rank[root_p] += 1;
            }
        }

        self.count -= 1;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_halves_paths() {
        let mut uf = PathCompressed::new(5);

        // Build a chain by hand so that there is something to compress.
        uf.parent = vec![0, 0, 1, 2, 3];
        uf.count = 1;

        assert_eq!(uf.find(4), Ok(0));
        // 4 -> 2 and 2 -> 0 after halving.
        assert_eq!(uf.parent[4], 2);
        assert_eq!(uf.parent[2], 0);
    }

    #[test]
    fn rank_grows_only_on_ties() {
        let mut uf = PathCompressed::new(4);

        uf.union(0, 1).unwrap();
        let root = uf.find(0).unwrap();
        assert_eq!(uf.rank[root], 1);

        uf.union(2, root).unwrap();
        let root = uf.find(2).unwrap();
        assert_eq!(uf.rank[root], 1);
    }
}
