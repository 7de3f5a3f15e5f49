//! Builds the display tree from a flat file catalog.

use std::collections::BTreeMap;
use std::collections::hash_map::Entry;

use crate::error::{MalformedReason, TreeError};
use crate::models::{FileCatalog, FileEntry, FileTree, TreeNode};

/// How sibling ranks are assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SiblingOrder {
    /// Rank by per-parent insertion sequence over the catalog's path order.
    #[default]
    Insertion,
    /// Directories first, then files, each group in insertion sequence.
    DirectoriesFirst,
    /// Caller-supplied ranks keyed by full node path. Nodes without a rank
    /// keep their insertion sequence.
    Explicit(BTreeMap<String, i64>),
}

/// Turns a [`FileCatalog`] into a [`FileTree`].
///
/// Every call allocates a fresh tree; the builder keeps no state between
/// builds.
///
/// # Example
///
/// ```
/// use fwview_core::{FileCatalog, FileEntry, Timestamp, TreeBuilder};
///
/// let mtime = Timestamp::from_secs(0).unwrap();
/// let catalog: FileCatalog = ["a/b", "a/c"]
///     .into_iter()
///     .map(|p| FileEntry::new(p, Some(1), mtime))
///     .collect();
///
/// let tree = TreeBuilder::new().build(&catalog).unwrap();
/// assert_eq!(tree.get("a").unwrap().children.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct TreeBuilder {
    delimiter: char,
    order: SiblingOrder,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: '/',
            order: SiblingOrder::Insertion,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_order(mut self, order: SiblingOrder) -> Self {
        self.order = order;
        self
    }

    /// Build the tree, failing on the first malformed path.
    pub fn build(&self, catalog: &FileCatalog) -> Result<FileTree, TreeError> {
        let mut root = TreeNode::root();
        for entry in catalog {
            self.insert(&mut root, entry)?;
        }
        Ok(self.finish(root))
    }

    /// Build the tree, skipping malformed paths.
    ///
    /// Returns the tree together with one error per skipped entry, in path
    /// order, so the caller can report them.
    pub fn build_lenient(&self, catalog: &FileCatalog) -> (FileTree, Vec<TreeError>) {
        let mut root = TreeNode::root();
        let mut skipped = Vec::new();
        for entry in catalog {
            if let Err(err) = self.insert(&mut root, entry) {
                skipped.push(err);
            }
        }
        (self.finish(root), skipped)
    }

    /// Insert one entry, creating intermediate directories on demand.
    ///
    /// Either the whole path is inserted or the tree is left untouched.
    fn insert(&self, root: &mut TreeNode, entry: &FileEntry) -> Result<(), TreeError> {
        let parts = self.split(&entry.path)?;
        let malformed = |reason| TreeError::MalformedPath {
            path: entry.path.clone(),
            reason,
        };

        let mut current = root;
        let mut current_path = String::new();

        for (i, part) in parts.iter().enumerate() {
            let is_last = i == parts.len() - 1;
            if !current_path.is_empty() {
                current_path.push(self.delimiter);
            }
            current_path.push_str(part);

            let seq = current.children.len() as i64;
            match current.children.entry(part.to_string()) {
                Entry::Occupied(_) if is_last => return Err(malformed(MalformedReason::Conflict)),
                Entry::Vacant(slot) if is_last => {
                    slot.insert(TreeNode::file(
                        part,
                        current_path,
                        seq,
                        entry.size,
                        entry.mtime,
                    ));
                    return Ok(());
                }
                Entry::Occupied(slot) => {
                    let node = slot.into_mut();
                    if node.is_file() {
                        return Err(malformed(MalformedReason::Conflict));
                    }
                    current = node;
                }
                Entry::Vacant(slot) => {
                    current = slot.insert(TreeNode::directory(part, current_path.clone(), seq));
                }
            }
        }

        Ok(())
    }

    /// Split a path into segments, rejecting zero-length ones.
    fn split<'a>(&self, path: &'a str) -> Result<Vec<&'a str>, TreeError> {
        let parts: Vec<&str> = path.split(self.delimiter).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(TreeError::MalformedPath {
                path: path.to_string(),
                reason: MalformedReason::EmptySegment,
            });
        }
        Ok(parts)
    }

    fn finish(&self, mut root: TreeNode) -> FileTree {
        match &self.order {
            SiblingOrder::Insertion => {}
            SiblingOrder::DirectoriesFirst => rank_directories_first(&mut root),
            SiblingOrder::Explicit(ranks) => apply_explicit_ranks(&mut root, ranks),
        }
        FileTree::from_root(root, self.delimiter)
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-rank children as directories `0..d` followed by files `d..d+f`.
fn rank_directories_first(node: &mut TreeNode) {
    let mut keys: Vec<(bool, i64, String)> = node
        .children
        .values()
        .map(|c| (c.is_file(), c.order, c.key.clone()))
        .collect();
    keys.sort();

    for (rank, (_, _, key)) in keys.into_iter().enumerate() {
        if let Some(child) = node.children.get_mut(&key) {
            child.order = rank as i64;
        }
    }
    for child in node.children.values_mut() {
        rank_directories_first(child);
    }
}

fn apply_explicit_ranks(node: &mut TreeNode, ranks: &BTreeMap<String, i64>) {
    for child in node.children.values_mut() {
        if let Some(&rank) = ranks.get(&child.path) {
            child.order = rank;
        }
        apply_explicit_ranks(child, ranks);
    }
}
