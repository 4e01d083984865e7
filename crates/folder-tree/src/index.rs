//! Name reservation and id allocation.

use indexmap::IndexSet;

use crate::types::{FolderId, ROOT_ID, ROOT_NAME};

/// Tree-wide registry of folder names currently in use.
///
/// Seeded with [`ROOT_NAME`]. Iteration follows reservation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameIndex {
    names: IndexSet<String>,
}

impl NameIndex {
    pub fn new() -> Self {
        let mut names = IndexSet::new();
        names.insert(ROOT_NAME.to_string());
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Reserves `name`. Returns `false` if it was already reserved.
    pub fn reserve(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    /// Releases `name`. Returns `false` if it was not reserved.
    pub fn release(&mut self, name: &str) -> bool {
        self.names.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for NameIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic id counter. Id `0` belongs to root, so allocation starts at `1`.
/// Ids are never handed out twice, even after the folder is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: FolderId,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: ROOT_ID + 1 }
    }

    /// The id the next call to [`allocate`](Self::allocate) will return.
    pub fn peek(&self) -> FolderId {
        self.next
    }

    pub fn allocate(&mut self) -> FolderId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_seeded_with_root() {
        let index = NameIndex::new();
        assert!(index.contains("root"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_reserve_and_release() {
        let mut index = NameIndex::new();
        assert!(index.reserve("a"));
        assert!(!index.reserve("a"));
        assert!(!index.reserve("root"));
        assert!(index.contains("a"));

        assert!(index.release("a"));
        assert!(!index.release("a"));
        assert!(!index.contains("a"));
        assert!(index.reserve("a"));
    }

    #[test]
    fn test_duplicate_reserve_keeps_position() {
        let mut index = NameIndex::new();
        index.reserve("a");
        index.reserve("b");
        assert!(!index.reserve("a"));
        assert_eq!(index.len(), 3);
        assert_eq!(index.iter().collect::<Vec<_>>(), vec!["root", "a", "b"]);
    }

    #[test]
    fn test_iter_keeps_reservation_order() {
        let mut index = NameIndex::new();
        index.reserve("b");
        index.reserve("a");
        index.reserve("c");
        index.release("a");
        assert_eq!(index.iter().collect::<Vec<_>>(), vec!["root", "b", "c"]);
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.peek(), 1);
        assert_eq!(ids.allocate(), 1);
        assert_eq!(ids.allocate(), 2);
        assert_eq!(ids.peek(), 3);
    }
}
