//! Path resolution.

use tracing::trace;

use crate::path::segments;
use crate::tree::FolderTree;
use crate::types::{FolderId, ROOT_ID};
use crate::{FolderTreeError, Result};

/// Walks `path` down from root and returns the id of the folder it names.
///
/// Each segment is matched by a linear scan over the current folder's
/// children. The first segment without a match fails the whole lookup.
/// A path with no segments resolves to root.
pub fn resolve_path(tree: &FolderTree, path: &str) -> Result<FolderId> {
    let mut current = ROOT_ID;
    for segment in segments(path) {
        let folder = tree
            .folder(current)
            .ok_or_else(|| FolderTreeError::NotFound(path.to_string()))?;
        current = tree
            .children(folder)
            .find(|child| child.name() == segment)
            .map(|child| child.id())
            .ok_or_else(|| {
                trace!(path, segment, "path segment did not match any child");
                FolderTreeError::NotFound(path.to_string())
            })?;
    }
    Ok(current)
}

/// Returns the id of the child of `parent` called `name`, if any.
pub(crate) fn child_named(tree: &FolderTree, parent: FolderId, name: &str) -> Option<FolderId> {
    let parent = tree.folder(parent)?;
    tree.children(parent)
        .find(|child| child.name() == name)
        .map(|child| child.id())
}
