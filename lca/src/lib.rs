pub mod query;
pub use query::LcaQuery;

const ROOT: usize = 0;

/// Euler-tour timestamps and a binary-lifting ancestor table over a rooted
/// tree, built by one depth-first traversal from vertex 0.
///
/// `parent(v, k)` is the `2^k`-th ancestor of `v`. The root is its own
/// parent (`parent(0, k) == 0` for every `k`); this sentinel lets the climb
/// in [`LcaQuery::find`] terminate without special-casing the root.
pub struct TreeIndex {
    len: usize,
    levels: usize,
    time_in: Box<[usize]>,
    time_out: Box<[usize]>,
    depth: Box<[usize]>,
    // row-major, len rows of (levels + 1) entries
    table: Box<[usize]>,
}

impl TreeIndex {
    /// Builds the index from per-vertex child lists, rooted at vertex 0.
    ///
    /// Entries equal to the vertex's own parent are skipped, so undirected
    /// adjacency lists work as well as pure child lists. The input must
    /// otherwise form a tree covering every vertex; a vertex reached twice
    /// or not at all aborts with a panic naming it.
    ///
    /// O(n log n) time and space.
    pub fn new(children: &[Vec<usize>]) -> Self {
        let n = children.len();
        assert_ne!(n, 0, "tree must have at least one vertex");
        let levels = if n == 1 { 0 } else { (n - 1).ilog2() as usize + 1 };
        let mut this = Self {
            len: n,
            levels,
            time_in: vec![0; n].into_boxed_slice(),
            time_out: vec![0; n].into_boxed_slice(),
            depth: vec![0; n].into_boxed_slice(),
            table: vec![0; n * (levels + 1)].into_boxed_slice(),
        };

        // Iterative depth-first traversal; frames carry the cursor into the
        // child list so the stack depth is bounded by the tree height.
        let mut timer = 1;
        this.enter(ROOT, ROOT, &mut timer);
        let mut stack = vec![(ROOT, ROOT, 0)];
        while let Some(frame) = stack.last_mut() {
            let (v, p, cursor) = *frame;
            frame.2 += 1;
            match children[v].get(cursor) {
                Some(&to) if to == p => {}
                Some(&to) => {
                    assert!(
                        to < n,
                        "child index {to} out of range for {n} vertices (parent {v})"
                    );
                    this.enter(to, v, &mut timer);
                    stack.push((to, v, 0));
                }
                None => {
                    this.time_out[v] = timer;
                    timer += 1;
                    stack.pop();
                }
            }
        }

        if let Some(v) = this.time_in.iter().position(|&t| t == 0) {
            panic!("vertex {v} is unreachable from the root: adjacency does not form a tree");
        }
        this
    }

    fn enter(&mut self, v: usize, p: usize, timer: &mut usize) {
        if self.time_in[v] != 0 {
            panic!("vertex {v} reached twice: adjacency does not form a tree");
        }
        self.time_in[v] = *timer;
        *timer += 1;
        self.depth[v] = if v == p { 0 } else { self.depth[p] + 1 };
        let row = v * (self.levels + 1);
        self.table[row] = p;
        for k in 1..=self.levels {
            // two jumps of 2^(k-1) compose into one of 2^k
            let mid = self.table[row + k - 1];
            self.table[row + k] = self.table[mid * (self.levels + 1) + k - 1];
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `ceil(log2(n))`; the ancestor table holds jumps of `2^0 ..= 2^levels`.
    pub fn levels(&self) -> usize {
        self.levels
    }

    pub fn time_in(&self, v: usize) -> usize {
        self.time_in[v]
    }

    pub fn time_out(&self, v: usize) -> usize {
        self.time_out[v]
    }

    /// Edge distance from the root.
    pub fn depth(&self, v: usize) -> usize {
        self.depth[v]
    }

    /// The `2^k`-th ancestor of `v` (saturating at the root).
    pub fn parent(&self, v: usize, k: usize) -> usize {
        self.table[v * (self.levels + 1) + k]
    }

    /// Whether `u` is an ancestor of `v`. Every vertex is its own ancestor.
    ///
    /// O(1): a vertex's `[time_in, time_out]` interval strictly contains the
    /// intervals of exactly its descendants.
    pub fn is_ancestor(&self, u: usize, v: usize) -> bool {
        self.time_in[u] <= self.time_in[v] && self.time_out[u] >= self.time_out[v]
    }

    /// The proper ancestors of `v`, nearest first, ending at the root.
    pub fn ancestors(&self, v: usize) -> Ancestors<'_> {
        assert!(v < self.len, "vertex index {v} out of range for {} vertices", self.len);
        Ancestors { index: self, v }
    }
}

pub struct Ancestors<'a> {
    index: &'a TreeIndex,
    v: usize,
}

impl Iterator for Ancestors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let p = self.index.parent(self.v, 0);
        if p == self.v {
            None
        } else {
            self.v = p;
            Some(p)
        }
    }
}

impl std::iter::FusedIterator for Ancestors<'_> {}
