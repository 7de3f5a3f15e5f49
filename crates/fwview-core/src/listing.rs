//! Decoding of the file listing served by the backend.
//!
//! Two document shapes are accepted:
//!
//! - **Flat**: `{ "dir/file.txt": { "size": 12, "mtime": 1704067200000 } }`,
//!   mtime as epoch milliseconds or an ISO-8601 string.
//! - **Nested**: the `/v1.0/files` resource of the file-watch viewer,
//!   `{ "/": { "index": 0, "label": "/", "mtime": s, "nodes": { ... } } }`.
//!   A node with `nodes` is a directory, a node with `size`/`mtime` is a file
//!   (mtime in epoch seconds). A node that is `null` or carries an `error`
//!   object is a subtree the backend failed to walk; it is skipped and
//!   reported in [`Listing::unavailable`]. Node `index` values are kept as
//!   sibling ranks.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::builder::SiblingOrder;
use crate::error::PayloadError;
use crate::models::{FileCatalog, FileEntry, Timestamp};

/// Root key of the nested listing shape.
const NESTED_ROOT: &str = "/";

/// A decoded listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    /// Every file in the document
    pub catalog: FileCatalog,
    /// Server-assigned sibling ranks by full path (nested shape only)
    pub ranks: BTreeMap<String, i64>,
    /// Subtrees the backend could not list (nested shape only)
    pub unavailable: Vec<UnavailableNode>,
}

impl Listing {
    /// Ordering to build with: the server's ranks when it sent any,
    /// otherwise `fallback`.
    pub fn sibling_order(&self, fallback: SiblingOrder) -> SiblingOrder {
        if self.ranks.is_empty() {
            fallback
        } else {
            SiblingOrder::Explicit(self.ranks.clone())
        }
    }
}

/// A nested-listing subtree that was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnavailableNode {
    /// Path of the subtree, relative to the root
    pub path: String,
    /// Message sent by the backend, if any
    pub message: Option<String>,
    /// Status code sent by the backend, if any
    pub code: Option<u16>,
}

impl fmt::Display for UnavailableNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' unavailable", self.path)?;
        if let Some(code) = self.code {
            write!(f, " ({})", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

/// One entry of the flat shape.
#[derive(Deserialize)]
struct FlatRecord {
    #[serde(default)]
    size: Option<i64>,
    mtime: Timestamp,
}

/// One node of the nested shape.
#[derive(Deserialize)]
struct NestedNode {
    #[serde(default)]
    index: Option<i64>,
    #[serde(default)]
    mtime: Option<i64>,
    #[serde(default)]
    size: Option<i64>,
    #[serde(default)]
    nodes: Option<BTreeMap<String, Option<NestedNode>>>,
    #[serde(default)]
    error: Option<NodeError>,
}

/// The `error` object the backend sends in place of a directory.
#[derive(Deserialize)]
struct NodeError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<u16>,
}

/// Decode a listing document.
pub fn decode_listing(text: &str) -> Result<Listing, PayloadError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(map) = value else {
        return Err(PayloadError::UnexpectedShape(
            "expected a JSON object".to_string(),
        ));
    };

    if let Some(root) = nested_root(&map) {
        let root: Option<NestedNode> = serde_json::from_value(root.clone())?;
        let root = match root {
            None => {
                let node = unavailable(NESTED_ROOT.to_string(), None);
                return Err(PayloadError::Unavailable(node.to_string()));
            }
            Some(NestedNode { error: Some(error), .. }) => {
                let node = unavailable(NESTED_ROOT.to_string(), Some(error));
                return Err(PayloadError::Unavailable(node.to_string()));
            }
            Some(root) => root,
        };
        let mut listing = Listing::default();
        flatten_nested(root.nodes.unwrap_or_default(), "", &mut listing)?;
        return Ok(listing);
    }

    let mut catalog = FileCatalog::new();
    for (path, record) in map {
        let record: FlatRecord = serde_json::from_value(record)?;
        let size = checked_size(&path, record.size)?;
        catalog.insert(FileEntry::new(path, size, record.mtime));
    }

    Ok(Listing {
        catalog,
        ..Listing::default()
    })
}

/// The nested shape has exactly one key, `/`, holding a node (or `null` when
/// the backend could not list the root).
fn nested_root(map: &serde_json::Map<String, Value>) -> Option<&Value> {
    if map.len() != 1 {
        return None;
    }
    map.get(NESTED_ROOT).filter(|root| {
        root.is_null() || ["nodes", "label", "error"].iter().any(|k| root.get(k).is_some())
    })
}

fn unavailable(path: String, error: Option<NodeError>) -> UnavailableNode {
    let (message, code) = error.map_or((None, None), |e| (e.message, e.code));
    UnavailableNode {
        path,
        message,
        code,
    }
}

fn flatten_nested(
    nodes: BTreeMap<String, Option<NestedNode>>,
    prefix: &str,
    listing: &mut Listing,
) -> Result<(), PayloadError> {
    for (name, node) in nodes {
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{}/{}", prefix, name)
        };

        let node = match node {
            None => {
                listing.unavailable.push(unavailable(path, None));
                continue;
            }
            Some(NestedNode { error: Some(error), .. }) => {
                listing.unavailable.push(unavailable(path, Some(error)));
                continue;
            }
            Some(node) => node,
        };

        if let Some(index) = node.index {
            listing.ranks.insert(path.clone(), index);
        }

        match (node.nodes, node.mtime) {
            (Some(children), _) => flatten_nested(children, &path, listing)?,
            (None, Some(secs)) => {
                let mtime = Timestamp::from_secs(secs)?;
                let size = checked_size(&path, node.size)?;
                listing.catalog.insert(FileEntry::new(path, size, mtime));
            }
            (None, None) if node.size.is_some() => {
                return Err(PayloadError::InvalidTimestamp(format!(
                    "missing mtime for '{}'",
                    path
                )));
            }
            (None, None) => listing.unavailable.push(UnavailableNode {
                path,
                message: Some("neither a directory nor a file".to_string()),
                code: None,
            }),
        }
    }
    Ok(())
}

fn checked_size(path: &str, size: Option<i64>) -> Result<Option<u64>, PayloadError> {
    match size {
        None => Ok(None),
        Some(n) => u64::try_from(n)
            .map(Some)
            .map_err(|_| PayloadError::NegativeSize(path.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_listing() {
        let listing = decode_listing(
            r#"{
                "a/b.txt": { "size": 12, "mtime": 1704067200000 },
                "a/c.txt": { "mtime": "2024-01-01T00:00:00Z" }
            }"#,
        )
        .unwrap();

        assert_eq!(listing.catalog.len(), 2);
        assert!(listing.ranks.is_empty());
        let b = listing.catalog.get("a/b.txt").unwrap();
        assert_eq!(b.size, Some(12));
        let c = listing.catalog.get("a/c.txt").unwrap();
        assert_eq!(c.size, None);
        assert_eq!(b.mtime, c.mtime);
    }

    #[test]
    fn test_empty_object_is_empty_listing() {
        let listing = decode_listing("{}").unwrap();
        assert!(listing.catalog.is_empty());
    }

    #[test]
    fn test_nested_listing() {
        let listing = decode_listing(
            r#"{ "/": {
                "index": 0, "label": "/", "mtime": 1700000000,
                "nodes": {
                    "subdir0": { "index": 0, "label": "subdir0/", "mtime": 1700000001,
                        "nodes": { "somefile.txt": { "index": 0, "label": "somefile.txt", "mtime": 1700000002, "size": 8 } } },
                    "empty": { "index": 1, "label": "empty/", "mtime": 1700000003, "nodes": {} },
                    "file1.txt": { "index": 2, "label": "file1.txt", "mtime": 1700000004, "size": 8 }
                }
            } }"#,
        )
        .unwrap();

        let paths: Vec<_> = listing.catalog.paths().collect();
        assert_eq!(paths, vec!["file1.txt", "subdir0/somefile.txt"]);
        assert_eq!(
            listing.catalog.get("file1.txt").unwrap().mtime.as_millis(),
            1_700_000_004_000
        );
        assert_eq!(listing.ranks.get("subdir0"), Some(&0));
        assert_eq!(listing.ranks.get("file1.txt"), Some(&2));
        assert!(matches!(
            listing.sibling_order(SiblingOrder::Insertion),
            SiblingOrder::Explicit(_)
        ));
    }

    #[test]
    fn test_nested_listing_skips_failed_subtrees() {
        let listing = decode_listing(
            r#"{ "/": {
                "index": 0, "label": "/", "mtime": 1700000000,
                "nodes": {
                    "ok.txt": { "index": 2, "label": "ok.txt", "mtime": 1700000001, "size": 3 },
                    "gone": { "error": { "message": "not found", "code": 404 } },
                    "flaky": null,
                    "kept": { "index": 0, "label": "kept/", "mtime": 1700000002, "nodes": {
                        "inner.txt": { "index": 0, "label": "inner.txt", "mtime": 1700000003, "size": 1 },
                        "lost": { "error": { "message": "internal", "code": 500 } }
                    } }
                }
            } }"#,
        )
        .unwrap();

        let paths: Vec<_> = listing.catalog.paths().collect();
        assert_eq!(paths, vec!["kept/inner.txt", "ok.txt"]);

        let skipped: Vec<_> = listing
            .unavailable
            .iter()
            .map(|n| (n.path.as_str(), n.code))
            .collect();
        assert_eq!(
            skipped,
            vec![("flaky", None), ("gone", Some(404)), ("kept/lost", Some(500))]
        );
        assert_eq!(
            listing.unavailable[1].to_string(),
            "'gone' unavailable (404): not found"
        );
        assert!(!listing.ranks.contains_key("gone"));
    }

    #[test]
    fn test_nested_root_unavailable() {
        assert_eq!(
            decode_listing(r#"{ "/": { "error": { "message": "no such dir", "code": 404 } } }"#),
            Err(PayloadError::Unavailable(
                "'/' unavailable (404): no such dir".to_string()
            ))
        );
        assert!(matches!(
            decode_listing(r#"{ "/": null }"#),
            Err(PayloadError::Unavailable(_))
        ));
    }

    #[test]
    fn test_nested_file_without_mtime() {
        assert_eq!(
            decode_listing(r#"{ "/": { "label": "/", "nodes": { "f": { "size": 1 } } } }"#),
            Err(PayloadError::InvalidTimestamp("missing mtime for 'f'".to_string()))
        );
    }

    #[test]
    fn test_flat_listing_keeps_fallback_order() {
        let listing = decode_listing(r#"{ "x": { "mtime": 0 } }"#).unwrap();
        assert_eq!(
            listing.sibling_order(SiblingOrder::DirectoriesFirst),
            SiblingOrder::DirectoriesFirst
        );
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            decode_listing("[1, 2]"),
            Err(PayloadError::UnexpectedShape(_))
        ));
        assert!(matches!(decode_listing("not json"), Err(PayloadError::Json(_))));
    }

    #[test]
    fn test_rejects_negative_size() {
        assert_eq!(
            decode_listing(r#"{ "x": { "size": -1, "mtime": 0 } }"#),
            Err(PayloadError::NegativeSize("x".to_string()))
        );
    }

    #[test]
    fn test_rejects_missing_or_bad_mtime() {
        assert!(decode_listing(r#"{ "x": { "size": 1 } }"#).is_err());
        assert!(decode_listing(r#"{ "x": { "mtime": "soon" } }"#).is_err());
    }
}
