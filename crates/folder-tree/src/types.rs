//! Type definitions for the folder tree.

/// Folder identifier. Doubles as the folder's slot in the tree arena.
pub type FolderId = u32;

/// Id of the root folder.
pub const ROOT_ID: FolderId = 0;

/// Name of the root folder. Reserved for the lifetime of the tree.
pub const ROOT_NAME: &str = "root";

/// A single folder.
///
/// Children are stored as ids into the owning tree's arena, in insertion
/// order. A folder never points back at its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub(crate) id: FolderId,
    pub(crate) name: String,
    pub(crate) children: Vec<FolderId>,
}

impl Folder {
    pub(crate) fn new(id: FolderId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> FolderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the direct children, in insertion order.
    pub fn child_ids(&self) -> &[FolderId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.id == ROOT_ID
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_folder_is_leaf() {
        let folder = Folder::new(3, "docs");
        assert_eq!(folder.id(), 3);
        assert_eq!(folder.name(), "docs");
        assert!(folder.is_leaf());
        assert!(!folder.is_root());
    }

    #[test]
    fn test_root_folder() {
        let root = Folder::new(ROOT_ID, ROOT_NAME);
        assert!(root.is_root());
        assert_eq!(root.name(), "root");
    }
}
