//! Pre-order traversal and search by name.

use crate::path::format_path;
use crate::tree::FolderTree;
use crate::types::{Folder, FolderId, ROOT_ID};
use crate::{FolderTreeError, Result};

/// Pre-order, depth-first iterator over a [`FolderTree`].
///
/// Yields `(path, folder)` pairs, root first with path `""`, children in
/// insertion order. Uses an explicit stack, so deep trees do not grow the
/// call stack.
pub struct PreOrder<'a> {
    tree: &'a FolderTree,
    stack: Vec<(FolderId, usize)>,
    prefix: Vec<&'a str>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(tree: &'a FolderTree) -> Self {
        Self {
            tree,
            stack: vec![(ROOT_ID, 0)],
            prefix: Vec::new(),
        }
    }

    /// Moves to the next folder without building its path.
    ///
    /// Each push onto `prefix` is truncated away at most once, so a full
    /// walk is linear in the number of folders.
    pub(crate) fn advance(&mut self) -> Option<&'a Folder> {
        loop {
            let (id, depth) = self.stack.pop()?;
            let Some(folder) = self.tree.folder(id) else {
                continue;
            };
            // `prefix` holds the names from root's child down to `folder`.
            self.prefix.truncate(depth.saturating_sub(1));
            if depth > 0 {
                self.prefix.push(folder.name());
            }
            self.stack
                .extend(folder.children.iter().rev().map(|&child| (child, depth + 1)));
            return Some(folder);
        }
    }

    /// Path of the folder last returned by [`advance`](Self::advance).
    pub(crate) fn path(&self) -> String {
        format_path(&self.prefix)
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (String, &'a Folder);

    fn next(&mut self) -> Option<Self::Item> {
        let folder = self.advance()?;
        Some((self.path(), folder))
    }
}

/// Finds the path of the folder called `name`.
///
/// Root matches with the empty path. Stops at the first match; the name
/// index guarantees there is at most one.
pub fn find_path(tree: &FolderTree, name: &str) -> Result<String> {
    find(tree, name).map(|(path, _)| path)
}

/// Like [`find_path`], also returning the folder's id.
///
/// Names are compared during the walk; the path is only formatted for the
/// match.
pub fn find(tree: &FolderTree, name: &str) -> Result<(String, FolderId)> {
    let mut walk = PreOrder::new(tree);
    while let Some(folder) = walk.advance() {
        if folder.name() == name {
            return Ok((walk.path(), folder.id()));
        }
    }
    Err(FolderTreeError::NotFound(name.to_string()))
}
