//! Disjoint-set forest with path compression and union-by-rank.
//!
//! Together the two heuristics bound any sequence of `m` operations on `n` elements by
//! `O(m · α(n))`, where `α` is the inverse Ackermann function.
//!
//! `find` compresses paths and therefore takes `&mut self`. Sharing a forest between threads
//! means wrapping the whole structure in a single lock; there is no finer-grained access.

use crate::error::UnionFindError;
use rustc_hash::FxHashMap;

pub type Result<T, E = UnionFindError> = core::result::Result<T, E>;

#[derive(Clone, Debug)]
pub struct UnionFind {
    // `parent[i] == i` iff `i` is a root.
    parent: Vec<usize>,
    // Only meaningful for roots: an upper bound on the height of the tree.
    rank: Vec<u32>,
    set_count: usize,
}

impl UnionFind {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            set_count: len,
        }
    }

    /// Like [`UnionFind::new`], but for a size coming from a signed source.
    pub fn try_new(len: i64) -> Result<Self> {
        let len = usize::try_from(len).map_err(|_| UnionFindError::InvalidArgument { len })?;
        Ok(Self::new(len))
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets. Maintained incrementally.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Validates a signed element index.
    pub fn checked_index(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&index| index < self.len())
            .ok_or(UnionFindError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    pub(crate) fn check(&self, index: usize) -> Result<usize> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(UnionFindError::out_of_range(index, self.len()))
        }
    }

    /// Returns the representative of the set containing `index`, re-pointing every element on
    /// the way directly at it.
    pub fn find(&mut self, index: usize) -> Result<usize> {
        let index = self.check(index)?;
        Ok(self.resolve(index))
    }

    fn resolve(&mut self, mut index: usize) -> usize {
        let mut leader = index;
        while self.parent[leader] != leader {
            leader = self.parent[leader];
        }
        while index != leader {
            index = core::mem::replace(&mut self.parent[index], leader);
        }
        leader
    }

    /// Merges the sets containing `a` and `b` and returns the root of the merged set.
    ///
    /// Merging two elements of the same set changes nothing.
    pub fn unify(&mut self, a: usize, b: usize) -> Result<usize> {
        // Both indices are validated before any compression happens.
        let (a, b) = (self.check(a)?, self.check(b)?);
        let mut a = self.resolve(a);
        let mut b = self.resolve(b);
        if a == b {
            return Ok(a);
        }

        if self.rank[a] < self.rank[b] {
            core::mem::swap(&mut a, &mut b);
        } else if self.rank[a] == self.rank[b] {
            self.rank[a] += 1;
        }
        self.parent[b] = a;
        self.set_count -= 1;

        log::trace!(
            "merged set {b} into {a} (rank {}), {} sets left",
            self.rank[a],
            self.set_count
        );
        Ok(a)
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        let (a, b) = (self.check(a)?, self.check(b)?);
        Ok(self.resolve(a) == self.resolve(b))
    }

    /// Number of parent links between `index` and its root, without compressing.
    pub fn depth(&self, index: usize) -> Result<usize> {
        let mut index = self.check(index)?;
        let mut depth = 0;
        while self.parent[index] != index {
            index = self.parent[index];
            depth += 1;
        }
        Ok(depth)
    }

    pub fn rank_of(&mut self, index: usize) -> Result<u32> {
        let root = self.find(index)?;
        Ok(self.rank[root])
    }

    pub fn is_singleton(&mut self, index: usize) -> Result<bool> {
        let root = self.find(index)?;
        // A root of rank 0 has never absorbed another tree.
        Ok(self.rank[root] == 0)
    }

    /// The current partition. Members are sorted, and sets are ordered by their smallest member.
    pub fn sets(&mut self) -> Vec<Vec<usize>> {
        let mut slot_of_root: FxHashMap<usize, usize> = FxHashMap::default();
        let mut sets: Vec<Vec<usize>> = Vec::with_capacity(self.set_count);
        for index in 0..self.len() {
            let root = self.resolve(index);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                sets.push(Vec::new());
                sets.len() - 1
            });
            sets[slot].push(index);
        }
        sets
    }

    /// Splits everything back into singletons.
    pub fn reset(&mut self) {
        for (index, parent) in self.parent.iter_mut().enumerate() {
            *parent = index;
        }
        self.rank.fill(0);
        self.set_count = self.len();
    }
}
