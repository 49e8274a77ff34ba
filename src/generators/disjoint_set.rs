/// Union-find forest over flat cell indices.
pub struct DisjointSet {
    parent: Vec<usize>,
    /// Number of disjoint sets currently in the forest
    components: usize,
}

impl DisjointSet {
    /// Every element starts as the root of its own set.
    pub fn new(size: usize) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
            components: size,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the root of the set containing `x`, compressing the walked path.
    ///
    /// Panics if `x` was never registered.
    pub fn find(&mut self, x: usize) -> usize {
        assert!(
            x < self.parent.len(),
            "Element {x} is not registered in the disjoint set"
        );
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Re-parents `root_a` under `root_b`. Returns `false` if they are already the same set.
    ///
    /// Panics if either argument is not a root.
    pub fn union(&mut self, root_a: usize, root_b: usize) -> bool {
        assert!(
            self.parent[root_a] == root_a && self.parent[root_b] == root_b,
            "union must be called with roots, got {root_a} and {root_b}"
        );
        if root_a == root_b {
            return false;
        }
        self.parent[root_a] = root_b;
        self.components -= 1;
        true
    }

    /// True iff every element belongs to one set.
    /// Equivalent to every `find` agreeing with the first element's root.
    pub fn all_connected(&self) -> bool {
        self.components <= 1
    }
}
