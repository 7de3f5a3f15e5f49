//! Formatting utilities for tree labels, file sizes and timestamps.

use fwview_core::{NodeKind, Timestamp, TreeNode};

/// Format file size for display (e.g., "1.2K", "3.4M").
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(bytes) if bytes >= 1_000_000 => format!("{:.1}M", bytes as f64 / 1_000_000.0),
        Some(bytes) if bytes >= 1_000 => format!("{:.1}K", bytes as f64 / 1_000.0),
        Some(bytes) => format!("{}B", bytes),
    }
}

/// Format a modification time as `YYYY-MM-DD HH:MM` (UTC).
pub fn format_mtime(mtime: &Timestamp) -> String {
    mtime.as_datetime().format("%Y-%m-%d %H:%M").to_string()
}

/// Tree label: directories get a trailing slash.
pub fn node_label(node: &TreeNode) -> String {
    match node.kind {
        NodeKind::Directory => format!("{}/", node.label),
        NodeKind::File { .. } => node.label.clone(),
    }
}

/// One-line detail for a node: size and mtime for files, direct child
/// counts for directories.
pub fn node_detail(node: &TreeNode) -> String {
    match &node.kind {
        NodeKind::File { size, mtime } => {
            format!("{} · {}", format_size(*size), format_mtime(mtime))
        }
        NodeKind::Directory => match node.child_counts() {
            (files, 0) => plural(files, "file"),
            (0, dirs) => plural(dirs, "dir"),
            (files, dirs) => format!("{}, {}", plural(files, "file"), plural(dirs, "dir")),
        },
    }
}

fn plural(count: usize, noun: &str) -> String {
    match count {
        1 => format!("1 {}", noun),
        n => format!("{} {}s", n, noun),
    }
}

/// Last path segment, for tab titles.
pub fn file_name(path: &str, delimiter: char) -> &str {
    path.rsplit(delimiter).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fwview_core::{FileCatalog, FileEntry, TreeBuilder};

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(None), "-");
        assert_eq!(format_size(Some(500)), "500B");
        assert_eq!(format_size(Some(1500)), "1.5K");
        assert_eq!(format_size(Some(1_500_000)), "1.5M");
    }

    #[test]
    fn test_format_mtime() {
        let ts = Timestamp::from_secs(1704067200).unwrap();
        assert_eq!(format_mtime(&ts), "2024-01-01 00:00");
    }

    #[test]
    fn test_node_labels() {
        let mtime = Timestamp::from_secs(0).unwrap();
        let catalog: FileCatalog = [FileEntry::new("docs/readme.md", Some(2048), mtime)]
            .into_iter()
            .collect();
        let tree = TreeBuilder::new().build(&catalog).unwrap();

        let dir = tree.get("docs").unwrap();
        assert_eq!(node_label(dir), "docs/");
        assert_eq!(node_detail(dir), "1 file");

        let file = tree.file("docs/readme.md").unwrap();
        assert_eq!(node_label(file), "readme.md");
        assert_eq!(node_detail(file), "2.0K · 1970-01-01 00:00");
    }

    #[test]
    fn test_directory_detail_counts_children() {
        let mtime = Timestamp::from_secs(0).unwrap();
        let catalog: FileCatalog = ["src/a.rs", "src/b.rs", "src/bin/x.rs", "lib/util/y.rs"]
            .into_iter()
            .map(|p| FileEntry::new(p, None, mtime))
            .collect();
        let tree = TreeBuilder::new().build(&catalog).unwrap();

        assert_eq!(node_detail(tree.get("src").unwrap()), "2 files, 1 dir");
        assert_eq!(node_detail(tree.get("lib").unwrap()), "1 dir");
        assert_eq!(node_detail(tree.root()), "2 dirs");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("a/b/c.txt", '/'), "c.txt");
        assert_eq!(file_name("top", '/'), "top");
    }
}
