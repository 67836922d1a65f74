//! Disjoint-set (union-find) over the vertex ids `0..len`.
//!
//! Roots are found with path halving: every visited vertex is re-pointed at
//! its grandparent. Unions attach the smaller component beneath the larger
//! one; when both have the same size the lower root id becomes the
//! representative so that results do not depend on argument order.

/// Union-find partition of the vertex ids `0..len`.
///
/// # Examples
/// ```
/// use boruvka_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1));
/// assert!(!set.union(1, 0));
/// assert!(set.is_connected(0, 1));
/// assert_eq!(set.component_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parents: Vec<usize>,
    sizes: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
            sizes: vec![1; len],
            components: len,
        }
    }

    /// Returns the number of tracked vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` when no vertices are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns the number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the component containing `node`.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> usize {
        let mut current = node;
        loop {
            let parent = self.parents[current];
            if parent == current {
                return current;
            }
            let grandparent = self.parents[parent];
            self.parents[current] = grandparent;
            current = grandparent;
        }
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` and leaves the structure untouched when both already
    /// share a component.
    ///
    /// # Panics
    /// Panics when either id is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let (parent, child) = choose_parent_child(
            left_root,
            right_root,
            self.sizes[left_root],
            self.sizes[right_root],
        );
        self.parents[child] = parent;
        self.sizes[parent] = self.sizes[parent].saturating_add(self.sizes[child]);
        self.components = self.components.saturating_sub(1);
        true
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Panics
    /// Panics when either id is `>= self.len()`.
    pub fn is_connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Returns the number of vertices in the component containing `node`.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn component_size(&mut self, node: usize) -> usize {
        let root = self.find(node);
        self.sizes[root]
    }

    /// Returns the current representative of every vertex, indexed by id.
    pub(crate) fn snapshot(&mut self) -> Vec<usize> {
        (0..self.len()).map(|node| self.find(node)).collect()
    }

    #[cfg(test)]
    fn parent_of(&self, node: usize) -> usize {
        self.parents[node]
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_size: usize,
    right_size: usize,
) -> (usize, usize) {
    if left_size > right_size {
        return (left_root, right_root);
    }
    if right_size > left_size {
        return (right_root, left_root);
    }
    if left_root <= right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    }
}
