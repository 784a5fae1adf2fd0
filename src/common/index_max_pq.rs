use thiserror::Error;

use crate::core::error::IndexOutOfRange;

/// Marks an index that is not in the queue in the inverse permutation.
const ABSENT: usize = usize::MAX;

/// Maximum priority queue over indices `0..n` with associated keys.
///
/// Unlike [`BinaryHeap`](std::collections::BinaryHeap), the key of an index
/// already in the queue can be changed in _O(log n)_, which is what
/// greedy graph searches need for their "increase priority" step.
///
/// Keys only need to be [`PartialOrd`]. Incomparable keys (such as NaN) are
/// not supported and result in an unspecified order.
#[derive(Debug, Clone)]
pub struct IndexMaxPq<K> {
    // Binary heap using 1-based indexing, `pq[0]` is unused.
    pq: Vec<usize>,
    // Inverse of `pq`: `qp[pq[i]] == i`.
    qp: Vec<usize>,
    keys: Vec<Option<K>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexPqError {
    #[error("{0}")]
    IndexOutOfRange(#[from] IndexOutOfRange),

    #[error("index {0} is already in the priority queue")]
    AlreadyPresent(usize),

    #[error("index {0} is not in the priority queue")]
    Absent(usize),

    #[error("calling increase_key() with a key that is not strictly greater")]
    KeyNotIncreased,

    #[error("calling decrease_key() with a key that is not strictly less")]
    KeyNotDecreased,
}

impl<K: PartialOrd> IndexMaxPq<K> {
    /// Creates an empty queue for indices `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            pq: vec![ABSENT],
            qp: vec![ABSENT; n],
            keys: (0..n).map(|_| None).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pq.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of indices in the queue.
    pub fn bound(&self) -> usize {
        self.qp.len()
    }

    pub fn contains(&self, i: usize) -> bool {
        self.qp.get(i).is_some_and(|&pos| pos != ABSENT)
    }

    pub fn insert(&mut self, i: usize, key: K) -> Result<(), IndexPqError> {
        IndexOutOfRange::check(i, self.bound())?;

        if self.contains(i) {
            return Err(IndexPqError::AlreadyPresent(i));
        }

        self.pq.push(i);
        let n = self.len();
        self.qp[i] = n;
        self.keys[i] = Some(key);
        self.swim(n);

        Ok(())
    }

    /// Index associated with the maximum key.
    pub fn max_index(&self) -> Option<usize> {
        self.pq.get(1).copied()
    }

    pub fn max_key(&self) -> Option<&K> {
        self.max_index().and_then(|i| self.keys[i].as_ref())
    }

    /// Removes the maximum key and returns it together with its index.
    pub fn delete_max(&mut self) -> Option<(usize, K)> {
        let max = self.max_index()?;
        let n = self.len();

        self.exch(1, n);
        self.pq.pop();
        self.qp[max] = ABSENT;
        self.sink(1);

        self.keys[max].take().map(|key| (max, key))
    }

    pub fn key_of(&self, i: usize) -> Result<&K, IndexPqError> {
        self.position(i)?;
        self.keys[i].as_ref().ok_or(IndexPqError::Absent(i))
    }

    /// Changes the key associated with the index to any value.
    pub fn change_key(&mut self, i: usize, key: K) -> Result<(), IndexPqError> {
        let pos = self.position(i)?;
        self.keys[i] = Some(key);
        self.swim(pos);
        self.sink(self.qp[i]);
        Ok(())
    }

    pub fn increase_key(&mut self, i: usize, key: K) -> Result<(), IndexPqError> {
        let pos = self.position(i)?;

        if !matches!(&self.keys[i], Some(current) if key > *current) {
            return Err(IndexPqError::KeyNotIncreased);
        }

        self.keys[i] = Some(key);
        self.swim(pos);
        Ok(())
    }

    pub fn decrease_key(&mut self, i: usize, key: K) -> Result<(), IndexPqError> {
        let pos = self.position(i)?;

        if !matches!(&self.keys[i], Some(current) if key < *current) {
            return Err(IndexPqError::KeyNotDecreased);
        }

        self.keys[i] = Some(key);
        self.sink(pos);
        Ok(())
    }

    /// Removes the index from the queue and returns its key.
    pub fn remove(&mut self, i: usize) -> Result<K, IndexPqError> {
        let pos = self.position(i)?;
        let n = self.len();

        self.exch(pos, n);
        self.pq.pop();
        self.qp[i] = ABSENT;

        if pos < n {
            let moved = self.pq[pos];
            self.swim(pos);
            self.sink(self.qp[moved]);
        }

        self.keys[i].take().ok_or(IndexPqError::Absent(i))
    }

    fn position(&self, i: usize) -> Result<usize, IndexPqError> {
        IndexOutOfRange::check(i, self.bound())?;

        match self.qp[i] {
            ABSENT => Err(IndexPqError::Absent(i)),
            pos => Ok(pos),
        }
    }

    fn less(&self, i: usize, j: usize) -> bool {
        // All indices in the heap have a key, so this compares `Some`s only.
        self.keys[self.pq[i]] < self.keys[self.pq[j]]
    }

    fn exch(&mut self, i: usize, j: usize) {
        self.pq.swap(i, j);
        self.qp[self.pq[i]] = i;
        self.qp[self.pq[j]] = j;
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.less(k / 2, k) {
            self.exch(k, k / 2);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.len();

        while 2 * k <= n {
            let mut j = 2 * k;
            if j < n && self.less(j, j + 1) {
                j += 1;
            }
            if !self.less(k, j) {
                break;
            }
            self.exch(k, j);
            k = j;
        }
    }
}
