//! Case-insensitive prefix index over job titles.
//!
//! Nodes live in a flat arena and reference children by index, so the tree
//! needs no pointer juggling and the whole structure drops in one shot on
//! rebuild. Child maps are ordered by character, which makes traversal order
//! deterministic for a fixed index state.

use std::collections::BTreeMap;

/// One node per distinct character transition from its parent.
///
/// A node is terminal when `title` is set: some inserted title's case-folded
/// form ends exactly here, and `title` holds it in as-inserted casing.
#[derive(Debug, Clone, Default)]
struct PrefixNode {
    children: BTreeMap<char, usize>,
    title: Option<String>,
}

const ROOT: usize = 0;

/// Prefix tree answering bounded "all titles starting with P" queries.
///
/// Matching is case-insensitive: the tree stores the case-folded character
/// path, while each terminal node keeps the title as it was first inserted,
/// so suggestions come back in original casing.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<PrefixNode>,
    titles: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    /// Empty index.
    pub fn new() -> Self {
        Self {
            nodes: vec![PrefixNode::default()],
            titles: 0,
        }
    }

    /// Insert a job title, one node per character of the case-folded title.
    ///
    /// Idempotent: re-inserting a title (in any casing) has no additional
    /// effect, and the casing of the first insertion wins. The empty string
    /// is tolerated; it marks the root itself as terminal.
    pub fn insert(&mut self, title: &str) {
        let mut cur = ROOT;
        for ch in title.to_lowercase().chars() {
            let next = self.nodes[cur].children.get(&ch).copied();
            cur = match next {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(PrefixNode::default());
                    self.nodes[cur].children.insert(ch, next);
                    next
                }
            };
        }
        if self.nodes[cur].title.is_none() {
            self.nodes[cur].title = Some(title.to_string());
            self.titles += 1;
        }
    }

    /// Up to `limit` stored titles whose case-folded form starts with
    /// `prefix` (case-folded as well).
    ///
    /// Returns immediately with an empty vec when no stored title matches.
    /// Cost is bounded by the prefix length plus the characters under the
    /// landing node, not the size of the whole index. Traversal order over
    /// siblings is smallest-character-first and stable for a fixed index.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut results = Vec::new();
        if limit == 0 {
            return results;
        }

        let mut cur = ROOT;
        for ch in prefix.to_lowercase().chars() {
            match self.nodes[cur].children.get(&ch) {
                Some(&next) => cur = next,
                None => return results,
            }
        }

        // Explicit-stack DFS from the landing node. Children are pushed in
        // reverse so the smallest character is visited first.
        let mut stack = vec![cur];
        while let Some(node) = stack.pop() {
            if let Some(title) = &self.nodes[node].title {
                results.push(title.clone());
                if results.len() >= limit {
                    break;
                }
            }
            for &child in self.nodes[node].children.values().rev() {
                stack.push(child);
            }
        }
        results
    }

    /// Discard the current tree and reinsert all given titles.
    ///
    /// O(total characters across all titles); not incremental.
    pub fn rebuild<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.nodes = vec![PrefixNode::default()];
        self.titles = 0;
        for title in titles {
            self.insert(title.as_ref());
        }
    }

    /// Number of distinct titles stored.
    pub fn len(&self) -> usize {
        self.titles
    }

    /// Whether no titles are stored.
    pub fn is_empty(&self) -> bool {
        self.titles == 0
    }
}
