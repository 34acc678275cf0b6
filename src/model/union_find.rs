//! Disjoint sets over string node ids, used for cycle detection during
//! MST construction

use rustc_hash::FxHashMap;

/// Union-find with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: FxHashMap<String, String>,
    rank: FxHashMap<String, u32>,
}

impl UnionFind {
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parent = FxHashMap::default();
        let mut rank = FxHashMap::default();
        for node in nodes {
            let node = node.into();
            parent.insert(node.clone(), node.clone());
            rank.insert(node, 0);
        }
        UnionFind { parent, rank }
    }

    /// Root of the set containing `x`, compressing the path on the way.
    ///
    /// Unknown ids are treated as singletons and added lazily.
    pub fn find(&mut self, x: &str) -> String {
        if !self.parent.contains_key(x) {
            self.parent.insert(x.to_string(), x.to_string());
            self.rank.insert(x.to_string(), 0);
            return x.to_string();
        }

        // Walk up to the root, then compress.
        let mut root = x.to_string();
        while self.parent[&root] != root {
            root = self.parent[&root].clone();
        }
        let mut current = x.to_string();
        while current != root {
            let next = self.parent[&current].clone();
            self.parent.insert(current, root.clone());
            current = next;
        }
        root
    }

    /// Merge the sets containing `x` and `y`.  Returns false if they were
    /// already in the same set.
    pub fn union(&mut self, x: &str, y: &str) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let rank_x = self.rank[&root_x];
        let rank_y = self.rank[&root_y];
        if rank_x < rank_y {
            self.parent.insert(root_x, root_y);
        } else if rank_x > rank_y {
            self.parent.insert(root_y, root_x);
        } else {
            self.parent.insert(root_y, root_x.clone());
            self.rank.insert(root_x, rank_x + 1);
        }
        true
    }

    pub fn connected(&mut self, x: &str, y: &str) -> bool {
        self.find(x) == self.find(y)
    }

    /// Group every tracked node under its root.
    pub fn components(&mut self) -> FxHashMap<String, Vec<String>> {
        let nodes: Vec<String> = self.parent.keys().cloned().collect();
        let mut components: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for node in nodes {
            let root = self.find(&node);
            components.entry(root).or_default().push(node);
        }
        components
    }

    /// Number of distinct sets.
    pub fn component_count(&mut self) -> usize {
        self.components().len()
    }
}
