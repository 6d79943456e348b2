use crate::TreeIndex;

/// Lowest-common-ancestor queries over a built [`TreeIndex`].
///
/// Holds only a shared reference; instances are free to create and discard,
/// and any number of them may query the same index concurrently.
#[derive(Clone, Copy)]
pub struct LcaQuery<'a> {
    index: &'a TreeIndex,
}

impl<'a> LcaQuery<'a> {
    pub fn new(index: &'a TreeIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a TreeIndex {
        self.index
    }

    /// The lowest common ancestor of `a` and `b`.
    ///
    /// O(log n). When one argument is an ancestor of the other (including
    /// `a == b`) it is returned directly. Otherwise `a` is walked upward in
    /// decreasing power-of-two jumps, taking a jump exactly when its target
    /// is still not an ancestor of `b`; that keeps `a` strictly below the
    /// answer, so the answer is the direct parent of where the walk stops.
    ///
    /// Panics if either index is not a vertex of the tree.
    pub fn find(&self, a: usize, b: usize) -> usize {
        let index = self.index;
        let n = index.len();
        if a >= n || b >= n {
            panic!("vertex index {} out of range for {n} vertices", a.max(b));
        }
        if index.is_ancestor(a, b) {
            return a;
        }
        if index.is_ancestor(b, a) {
            return b;
        }
        let mut a = a;
        for step in (0..=index.levels()).rev() {
            let up = index.parent(a, step);
            if !index.is_ancestor(up, b) {
                a = up;
            }
        }
        index.parent(a, 0)
    }

    /// The ancestor `k` edges above `v`, or `None` when the root is fewer
    /// than `k` edges away. `kth_ancestor(v, 0)` is `v` itself.
    pub fn kth_ancestor(&self, v: usize, k: usize) -> Option<usize> {
        if k > self.index.depth(v) {
            return None;
        }
        let mut v = v;
        for step in 0..=self.index.levels() {
            if k >> step & 1 == 1 {
                v = self.index.parent(v, step);
            }
        }
        Some(v)
    }

    /// Number of edges on the tree path between `a` and `b`.
    pub fn distance(&self, a: usize, b: usize) -> usize {
        let index = self.index;
        let l = self.find(a, b);
        index.depth(a) + index.depth(b) - 2 * index.depth(l)
    }
}
