use std::collections::HashMap;

use super::{KeyCatalog, Timestamp};

/// What a tree node stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Intermediate node created for a path prefix
    Directory,
    /// Leaf node backed by exactly one file entry
    File {
        size: Option<u64>,
        mtime: Timestamp,
    },
}

/// A node in the display tree.
///
/// Children are kept in a map; their display order comes from
/// [`TreeNode::sorted_children`], never from map iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    /// Segment name, unique among siblings
    pub key: String,
    /// Display label (the segment name for everything but the root)
    pub label: String,
    /// Full path from the root; equals the file key for leaves
    pub path: String,
    /// Sibling rank
    pub order: i64,
    pub kind: NodeKind,
    pub children: HashMap<String, TreeNode>,
}

impl TreeNode {
    pub(crate) fn root() -> Self {
        Self {
            key: String::new(),
            label: "/".to_string(),
            path: String::new(),
            order: 0,
            kind: NodeKind::Directory,
            children: HashMap::new(),
        }
    }

    pub(crate) fn directory(key: &str, path: String, order: i64) -> Self {
        Self {
            key: key.to_string(),
            label: key.to_string(),
            path,
            order,
            kind: NodeKind::Directory,
            children: HashMap::new(),
        }
    }

    pub(crate) fn file(
        key: &str,
        path: String,
        order: i64,
        size: Option<u64>,
        mtime: Timestamp,
    ) -> Self {
        Self {
            key: key.to_string(),
            label: key.to_string(),
            path,
            order,
            kind: NodeKind::File { size, mtime },
            children: HashMap::new(),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory)
    }

    /// Children ordered by `(order, label)`.
    pub fn sorted_children(&self) -> Vec<&TreeNode> {
        let mut children: Vec<_> = self.children.values().collect();
        children.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.label.cmp(&b.label)));
        children
    }

    /// Number of file leaves at or below this node.
    pub fn leaf_count(&self) -> usize {
        if self.is_file() {
            return 1;
        }
        self.children.values().map(TreeNode::leaf_count).sum()
    }

    /// `(files, directories)` directly under this node.
    pub fn child_counts(&self) -> (usize, usize) {
        let files = self.children.values().filter(|c| c.is_file()).count();
        (files, self.children.len() - files)
    }
}

/// The tree produced by one build. Owns every node; nothing is shared with
/// earlier or later builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTree {
    root: TreeNode,
    delimiter: char,
}

impl FileTree {
    pub(crate) fn from_root(root: TreeNode, delimiter: char) -> Self {
        Self { root, delimiter }
    }

    /// A tree with no children.
    pub fn empty() -> Self {
        Self::from_root(TreeNode::root(), '/')
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Look up a node by its full path. The empty path is the root.
    pub fn get(&self, path: &str) -> Option<&TreeNode> {
        if path.is_empty() {
            return Some(&self.root);
        }

        let mut current = &self.root;
        for part in path.split(self.delimiter) {
            current = current.children.get(part)?;
        }
        Some(current)
    }

    /// Look up a file leaf by key.
    pub fn file(&self, key: &str) -> Option<&TreeNode> {
        self.get(key).filter(|node| node.is_file())
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// All file leaves in display order (depth-first over sorted children).
    pub fn leaves(&self) -> Vec<&TreeNode> {
        let mut out = Vec::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_file() {
                out.push(node);
                continue;
            }
            // Reverse so the first sorted child is popped first
            stack.extend(node.sorted_children().into_iter().rev());
        }
        out
    }
}

impl Default for FileTree {
    fn default() -> Self {
        Self::empty()
    }
}

impl KeyCatalog for FileTree {
    fn contains_key(&self, key: &str) -> bool {
        self.file(key).is_some()
    }
}
