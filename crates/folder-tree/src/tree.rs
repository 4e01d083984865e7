//! The folder tree and its mutations.

use std::fmt;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use tracing::debug;

use crate::index::{IdAllocator, NameIndex};
use crate::path::{split_parent_and_name, validate_name, SEPARATOR};
use crate::resolve::{child_named, resolve_path};
use crate::search::{find_path, PreOrder};
use crate::types::{Folder, FolderId, ROOT_ID, ROOT_NAME};
use crate::{FolderTreeError, Result};

/// A namespace of uniquely named folders under a fixed root.
///
/// Folders live in an arena indexed by [`FolderId`]. Ids come from a
/// monotonic allocator, so a slot is never reused: removing a folder leaves
/// an empty slot behind. Every mutation resolves its target top-down from
/// root, checks the [`NameIndex`], and only then touches the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderTree {
    arena: Vec<Option<Folder>>,
    names: NameIndex,
    ids: IdAllocator,
}

impl FolderTree {
    /// Creates a tree holding only root, with the name index seeded with
    /// `"root"` and the id allocator at `1`.
    pub fn new() -> Self {
        Self {
            arena: vec![Some(Folder::new(ROOT_ID, ROOT_NAME))],
            names: NameIndex::new(),
            ids: IdAllocator::new(),
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn root(&self) -> &Folder {
        match self.arena.first().and_then(Option::as_ref) {
            Some(root) => root,
            None => unreachable!("root slot is never vacated"),
        }
    }

    /// Looks a live folder up by id.
    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.arena.get(id as usize).and_then(Option::as_ref)
    }

    fn folder_mut(&mut self, id: FolderId) -> Option<&mut Folder> {
        self.arena.get_mut(id as usize).and_then(Option::as_mut)
    }

    /// Direct children of `folder`, in insertion order.
    pub fn children<'a>(&'a self, folder: &'a Folder) -> impl Iterator<Item = &'a Folder> + 'a {
        folder.children.iter().filter_map(move |&id| self.folder(id))
    }

    /// Number of reachable folders, root included.
    pub fn len(&self) -> usize {
        self.arena.iter().filter(|slot| slot.is_some()).count()
    }

    /// Always `false`: root is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Names currently reserved, in reservation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter()
    }

    /// The id the next successful add will assign.
    pub fn next_id(&self) -> FolderId {
        self.ids.peek()
    }

    /// Pre-order traversal yielding `(path, folder)`.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(self)
    }

    /// Serializable view of the subtree rooted at `id`.
    pub fn view(&self, id: FolderId) -> Option<FolderView<'_>> {
        self.folder(id).map(|folder| FolderView { tree: self, folder })
    }

    // ── Resolution ────────────────────────────────────────────────────────

    /// Returns the folder at `path`. Empty segments are ignored; a path with
    /// no segments is root.
    pub fn resolve_by_path(&self, path: &str) -> Result<&Folder> {
        let id = resolve_path(self, path)?;
        self.folder(id)
            .ok_or_else(|| FolderTreeError::NotFound(path.to_string()))
    }

    /// Returns the path of the folder called `name`: `""` for root,
    /// `"/a/b"` otherwise.
    pub fn resolve_by_name(&self, name: &str) -> Result<String> {
        find_path(self, name)
    }

    // ── Add ───────────────────────────────────────────────────────────────

    /// Adds a folder called `name` as the last child of the folder at
    /// `parent_path`, returning the new folder's id.
    ///
    /// Fails with [`FolderTreeError::DuplicateName`] if `name` is in use
    /// anywhere in the tree, and with [`FolderTreeError::NotFound`] if the
    /// parent does not resolve.
    pub fn add_by_parent_path(&mut self, parent_path: &str, name: &str) -> Result<FolderId> {
        validate_name(name)?;
        if self.names.contains(name) {
            return Err(FolderTreeError::DuplicateName(name.to_string()));
        }
        let parent_id = resolve_path(self, parent_path)?;
        let parent = self
            .arena
            .get_mut(parent_id as usize)
            .and_then(Option::as_mut)
            .ok_or_else(|| FolderTreeError::NotFound(parent_path.to_string()))?;

        let id = self.ids.allocate();
        parent.children.push(id);
        debug_assert_eq!(id as usize, self.arena.len());
        self.arena.push(Some(Folder::new(id, name)));
        self.names.reserve(name);

        debug!(id, name, parent = parent_path, "added folder");
        Ok(id)
    }

    /// Adds a folder under the folder called `parent_name`.
    pub fn add_by_parent_name(&mut self, parent_name: &str, name: &str) -> Result<FolderId> {
        validate_name(name)?;
        if self.names.contains(name) {
            return Err(FolderTreeError::DuplicateName(name.to_string()));
        }
        let parent_path = find_path(self, parent_name)?;
        self.add_by_parent_path(&parent_path, name)
    }

    // ── Remove ────────────────────────────────────────────────────────────

    /// Removes the folder at `path` together with its whole subtree, and
    /// releases every name in that subtree.
    ///
    /// Trailing separators are ignored, so `"/a/"` removes `a`. Root cannot
    /// be removed: its path has no name component.
    pub fn remove_by_path(&mut self, path: &str) -> Result<()> {
        let (parent_path, name) = split_parent_and_name(path.trim_end_matches(SEPARATOR));
        self.remove_child(parent_path, name)
    }

    /// Removes the folder called `name` together with its whole subtree.
    pub fn remove_by_name(&mut self, name: &str) -> Result<()> {
        if !self.names.contains(name) {
            return Err(FolderTreeError::NotFound(name.to_string()));
        }
        let path = find_path(self, name)?;
        if path.is_empty() {
            return Err(FolderTreeError::NotFound(name.to_string()));
        }
        let (parent_path, child) = split_parent_and_name(&path);
        self.remove_child(parent_path, child)
    }

    fn remove_child(&mut self, parent_path: &str, name: &str) -> Result<()> {
        if !self.names.contains(name) {
            return Err(FolderTreeError::NotFound(name.to_string()));
        }
        let parent_id = resolve_path(self, parent_path)?;
        let child_id = child_named(self, parent_id, name)
            .ok_or_else(|| FolderTreeError::NotFound(name.to_string()))?;

        if let Some(parent) = self.folder_mut(parent_id) {
            parent.children.retain(|&id| id != child_id);
        }
        let released = self.release_subtree(child_id);

        debug!(id = child_id, name, parent = parent_path, released, "removed folder");
        Ok(())
    }

    /// Vacates the arena slots of `id` and all its descendants and releases
    /// their names. Returns how many folders were dropped.
    fn release_subtree(&mut self, id: FolderId) -> usize {
        let mut stack = vec![id];
        let mut released = 0;
        while let Some(id) = stack.pop() {
            let Some(folder) = self.arena.get_mut(id as usize).and_then(Option::take) else {
                continue;
            };
            self.names.release(&folder.name);
            stack.extend(folder.children);
            released += 1;
        }
        released
    }

    // ── Rename ────────────────────────────────────────────────────────────

    /// Renames the folder at `path` to `new_name`.
    ///
    /// The old name is released and the new one reserved. Renaming a folder
    /// to its current name succeeds without change.
    pub fn rename_by_path(&mut self, path: &str, new_name: &str) -> Result<()> {
        validate_name(new_name)?;
        let id = resolve_path(self, path)?;
        if id == ROOT_ID {
            return Err(FolderTreeError::RootImmutable);
        }
        let old_name = match self.folder(id) {
            Some(folder) if folder.name() == new_name => return Ok(()),
            Some(folder) => folder.name().to_string(),
            None => return Err(FolderTreeError::NotFound(path.to_string())),
        };
        if self.names.contains(new_name) {
            return Err(FolderTreeError::DuplicateName(new_name.to_string()));
        }

        if let Some(folder) = self.folder_mut(id) {
            folder.name = new_name.to_string();
        }
        self.names.release(&old_name);
        self.names.reserve(new_name);

        debug!(id, from = %old_name, to = new_name, "renamed folder");
        Ok(())
    }

    /// Renames the folder called `old_name` to `new_name`.
    pub fn rename_by_name(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        let path = find_path(self, old_name)?;
        self.rename_by_path(&path, new_name)
    }

    // ── Dump ──────────────────────────────────────────────────────────────

    /// Human-readable dump, one `name#id` per line.
    ///
    /// ```text
    /// root#0
    /// ├─ F1#1
    /// │  └─ F4#2
    /// └─ F2#3
    /// ```
    pub fn to_text(&self) -> String {
        let root = self.root();
        let mut out = format!("{}#{}", root.name, root.id);
        // (folder, indent before its branch glyph, last among its siblings)
        let mut stack: Vec<(&Folder, String, bool)> = Vec::new();
        push_children(&mut stack, self.children(root), "");
        while let Some((folder, tab, is_last)) = stack.pop() {
            let branch = if is_last { "└─" } else { "├─" };
            out.push_str(&format!("\n{tab}{branch} {}#{}", folder.name, folder.id));
            let child_tab = format!("{tab}{}", if is_last { "   " } else { "│  " });
            push_children(&mut stack, self.children(folder), &child_tab);
        }
        out
    }

    /// Nested `{"id", "name", "children"}` JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Pushes `children` so they pop in insertion order, flagging the last one.
fn push_children<'a>(
    stack: &mut Vec<(&'a Folder, String, bool)>,
    children: impl Iterator<Item = &'a Folder>,
    tab: &str,
) {
    let start = stack.len();
    stack.extend(children.map(|child| (child, tab.to_string(), false)));
    if let Some(last) = stack[start..].last_mut() {
        last.2 = true;
    }
    stack[start..].reverse();
}

impl Default for FolderTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FolderTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl Serialize for FolderTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        FolderView {
            tree: self,
            folder: self.root(),
        }
        .serialize(serializer)
    }
}

/// A folder and its subtree, serializable as `{"id", "name", "children"}`.
#[derive(Clone, Copy)]
pub struct FolderView<'a> {
    tree: &'a FolderTree,
    folder: &'a Folder,
}

impl<'a> FolderView<'a> {
    pub fn folder(&self) -> &'a Folder {
        self.folder
    }
}

impl Serialize for FolderView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let children = ChildViews(*self);
        let mut state = serializer.serialize_struct("Folder", 3)?;
        state.serialize_field("id", &self.folder.id)?;
        state.serialize_field("name", &self.folder.name)?;
        state.serialize_field("children", &children)?;
        state.end()
    }
}

struct ChildViews<'a>(FolderView<'a>);

impl Serialize for ChildViews<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let FolderView { tree, folder } = self.0;
        serializer.collect_seq(tree.children(folder).map(|child| FolderView { tree, folder: child }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree() {
        let tree = FolderTree::new();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root().id(), ROOT_ID);
        assert_eq!(tree.root().name(), ROOT_NAME);
        assert!(tree.contains_name("root"));
        assert_eq!(tree.next_id(), 1);
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut tree = FolderTree::new();
        assert_eq!(tree.add_by_parent_path("/", "a"), Ok(1));
        assert_eq!(tree.add_by_parent_path("/a", "b"), Ok(2));
        assert_eq!(tree.add_by_parent_name("a", "c"), Ok(3));
        let a = tree.resolve_by_path("/a").unwrap();
        assert_eq!(a.child_ids(), &[2, 3]);
    }

    #[test]
    fn test_failed_add_does_not_burn_an_id() {
        let mut tree = FolderTree::new();
        assert!(tree.add_by_parent_path("/missing", "a").is_err());
        assert!(tree.add_by_parent_name("missing", "a").is_err());
        assert_eq!(tree.next_id(), 1);
        assert_eq!(tree.add_by_parent_path("/", "a"), Ok(1));
    }

    #[test]
    fn test_add_checks_name_before_parent() {
        let mut tree = FolderTree::new();
        tree.add_by_parent_path("/", "a").unwrap();
        assert_eq!(
            tree.add_by_parent_path("/missing", "a"),
            Err(FolderTreeError::DuplicateName("a".to_string()))
        );
        assert_eq!(
            tree.add_by_parent_name("missing", "a"),
            Err(FolderTreeError::DuplicateName("a".to_string()))
        );
    }

    #[test]
    fn test_add_rejects_invalid_names() {
        let mut tree = FolderTree::new();
        assert_eq!(
            tree.add_by_parent_path("/", ""),
            Err(FolderTreeError::InvalidName(String::new()))
        );
        assert_eq!(
            tree.add_by_parent_path("/", "a/b"),
            Err(FolderTreeError::InvalidName("a/b".to_string()))
        );
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_remove_root_is_not_found() {
        let mut tree = FolderTree::new();
        assert!(matches!(tree.remove_by_path(""), Err(FolderTreeError::NotFound(_))));
        assert!(matches!(tree.remove_by_path("/"), Err(FolderTreeError::NotFound(_))));
        assert_eq!(
            tree.remove_by_name("root"),
            Err(FolderTreeError::NotFound("root".to_string()))
        );
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_remove_trailing_slash() {
        let mut tree = FolderTree::new();
        tree.add_by_parent_path("/", "a").unwrap();
        tree.add_by_parent_path("/a", "b").unwrap();
        tree.remove_by_path("/a/b/").unwrap();
        assert!(!tree.contains_name("b"));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_remove_vacates_slots() {
        let mut tree = FolderTree::new();
        tree.add_by_parent_path("/", "a").unwrap();
        tree.add_by_parent_path("/a", "b").unwrap();
        tree.remove_by_name("a").unwrap();
        assert!(tree.folder(1).is_none());
        assert!(tree.folder(2).is_none());
        assert!(tree.root().is_leaf());
        assert_eq!(tree.add_by_parent_path("/", "a"), Ok(3));
    }

    #[test]
    fn test_rename_root_is_rejected() {
        let mut tree = FolderTree::new();
        assert_eq!(tree.rename_by_path("/", "top"), Err(FolderTreeError::RootImmutable));
        assert_eq!(tree.rename_by_name("root", "top"), Err(FolderTreeError::RootImmutable));
        assert!(tree.contains_name("root"));
    }

    #[test]
    fn test_rename_to_same_name() {
        let mut tree = FolderTree::new();
        tree.add_by_parent_path("/", "a").unwrap();
        assert_eq!(tree.rename_by_path("/a", "a"), Ok(()));
        assert_eq!(tree.names().collect::<Vec<_>>(), vec!["root", "a"]);
    }

    #[test]
    fn test_to_text() {
        let mut tree = FolderTree::new();
        tree.add_by_parent_path("/", "F1").unwrap();
        tree.add_by_parent_path("/F1", "F4").unwrap();
        tree.add_by_parent_path("/F1", "F5").unwrap();
        tree.add_by_parent_path("/", "F2").unwrap();
        assert_eq!(
            tree.to_text(),
            "root#0\n├─ F1#1\n│  ├─ F4#2\n│  └─ F5#3\n└─ F2#4"
        );
        assert_eq!(tree.to_string(), tree.to_text());
        assert_eq!(FolderTree::new().to_text(), "root#0");
    }

    #[test]
    fn test_to_text_deep_chain() {
        let mut tree = FolderTree::new();
        let mut path = String::new();
        for i in 0..1_000 {
            let name = format!("n{i}");
            tree.add_by_parent_path(&path, &name).unwrap();
            path.push('/');
            path.push_str(&name);
        }
        let text = tree.to_text();
        assert_eq!(text.lines().count(), 1_001);
        assert_eq!(
            text.lines().last().unwrap(),
            format!("{}└─ n999#1000", "   ".repeat(999))
        );
    }

    #[test]
    fn test_to_text_after_removing_last_child() {
        let mut tree = FolderTree::new();
        tree.add_by_parent_path("/", "a").unwrap();
        tree.add_by_parent_path("/a", "a1").unwrap();
        tree.add_by_parent_path("/", "b").unwrap();
        tree.remove_by_path("/b").unwrap();
        assert_eq!(tree.to_text(), "root#0\n└─ a#1\n   └─ a1#2");
    }

    #[test]
    fn test_to_json() {
        let mut tree = FolderTree::new();
        tree.add_by_parent_path("/", "F1").unwrap();
        tree.add_by_parent_path("/F1", "F2").unwrap();
        assert_eq!(
            tree.to_json().unwrap(),
            r#"{"id":0,"name":"root","children":[{"id":1,"name":"F1","children":[{"id":2,"name":"F2","children":[]}]}]}"#
        );
    }

    #[test]
    fn test_view_subtree() {
        let mut tree = FolderTree::new();
        tree.add_by_parent_path("/", "F1").unwrap();
        tree.add_by_parent_path("/F1", "F2").unwrap();
        let view = tree.view(1).unwrap();
        assert_eq!(view.folder().name(), "F1");
        assert_eq!(
            serde_json::to_string(&view).unwrap(),
            r#"{"id":1,"name":"F1","children":[{"id":2,"name":"F2","children":[]}]}"#
        );
        assert!(tree.view(7).is_none());
    }
}
