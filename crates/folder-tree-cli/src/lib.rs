//! folder-tree-cli - command-line front end for the `folder-tree` namespace.
//!
//! The `folder-tree` binary is a thin wrapper around [`folder_cli`].

pub mod folder_cli;
