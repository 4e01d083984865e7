//! In-memory folder namespace.
//!
//! A [`FolderTree`] holds a fixed root folder (`id = 0`, `name = "root"`) and
//! any number of descendants. Folder names are unique across the *whole*
//! tree, not just among siblings, so every folder can be addressed either by
//! a `/`-separated path from root or by its bare name.
//!
//! # Example
//!
//! ```
//! use folder_tree::{FolderTree, FolderTreeError};
//!
//! let mut tree = FolderTree::new();
//! tree.add_by_parent_path("/", "F1").unwrap();
//! tree.add_by_parent_path("/F1", "F2").unwrap();
//!
//! assert_eq!(tree.resolve_by_path("/F1/F2").unwrap().name(), "F2");
//! assert_eq!(tree.resolve_by_name("F2").unwrap(), "/F1/F2");
//!
//! // Names are global: "F2" is taken even under a different parent.
//! assert_eq!(
//!     tree.add_by_parent_path("/", "F2"),
//!     Err(FolderTreeError::DuplicateName("F2".to_string()))
//! );
//!
//! // Removal takes the whole subtree with it and frees every name in it.
//! tree.remove_by_path("/F1").unwrap();
//! assert!(tree.resolve_by_name("F2").is_err());
//! assert!(tree.add_by_parent_path("/", "F2").is_ok());
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Folder`], [`FolderId`], root constants |
//! [`index`] | [`NameIndex`] and [`IdAllocator`] |
//! [`path`] | segment splitting, parent/name split, formatting, name validation |
//! [`resolve`] | path to folder resolution |
//! [`search`] | pre-order traversal and name to path search |
//! [`tree`] | [`FolderTree`] and its mutations |

use thiserror::Error;

pub mod index;
pub mod path;
pub mod resolve;
pub mod search;
pub mod tree;
pub mod types;

pub use index::{IdAllocator, NameIndex};
pub use path::{format_path, segments, split_parent_and_name, validate_name};
pub use search::PreOrder;
pub use tree::{FolderTree, FolderView};
pub use types::{Folder, FolderId, ROOT_ID, ROOT_NAME};

/// Errors reported by [`FolderTree`] operations.
///
/// A failed operation never leaves a partial mutation behind: either the
/// tree and the name index are both updated, or neither is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FolderTreeError {
    /// A path or name does not resolve to an existing folder.
    #[error("folder not found: '{0}'")]
    NotFound(String),
    /// The name is already used by some folder in the tree.
    #[error("folder name '{0}' is already in use")]
    DuplicateName(String),
    /// The name is empty or contains the path separator.
    #[error("invalid folder name '{0}'")]
    InvalidName(String),
    #[error("the root folder cannot be renamed")]
    RootImmutable,
}

pub type Result<T, E = FolderTreeError> = std::result::Result<T, E>;
