//! `folder-cli` — drive a [`FolderTree`] with line commands.
//!
//! Provides the core logic used by the `folder-tree` binary:
//! - [`Command`] — one parsed command line
//! - [`Session`] — a tree plus output settings, executing commands
//! - [`DEMO_SCRIPT`] — the built-in demonstration sequence

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use folder_tree::{FolderTree, FolderTreeError};
use thiserror::Error;
use tracing::debug;

mod command;
mod demo;

pub use command::Command;
pub use demo::DEMO_SCRIPT;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Tree(#[from] FolderTreeError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' takes {expected} argument(s), got {found}")]
    Arity {
        command: String,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<CliError>,
    },
}

// ── Options ───────────────────────────────────────────────────────────────

/// How `print` renders the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// Box-drawing tree, one `name#id` per line.
    #[default]
    Text,
    /// Nested `{"id", "name", "children"}` JSON.
    Json,
}

/// Command-line options of the `folder-tree` binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "folder-tree", version, about = "Manage an in-memory folder namespace")]
pub struct CliOptions {
    /// Read commands from FILE instead of stdin.
    #[arg(long, value_name = "FILE", conflicts_with = "demo")]
    pub script: Option<PathBuf>,
    /// Run the built-in demonstration sequence.
    #[arg(long)]
    pub demo: bool,
    /// Output format of the `print` command.
    #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
    pub format: DumpFormat,
    /// Keep executing after a command fails.
    #[arg(long)]
    pub keep_going: bool,
}

// ── Session ───────────────────────────────────────────────────────────────

/// Outcome of running a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
    /// Commands that changed the tree.
    pub mutations: usize,
}

/// A folder tree and the settings commands run with.
#[derive(Debug, Default)]
pub struct Session {
    tree: FolderTree,
    format: DumpFormat,
}

impl Session {
    pub fn new(format: DumpFormat) -> Self {
        Self {
            tree: FolderTree::new(),
            format,
        }
    }

    pub fn tree(&self) -> &FolderTree {
        &self.tree
    }

    /// Executes one command, returning what it prints (if anything).
    pub fn execute(&mut self, command: &Command) -> Result<Option<String>, CliError> {
        let tree = &mut self.tree;
        let output = match command {
            Command::Add { parent, name } => {
                tree.add_by_parent_path(parent, name)?;
                None
            }
            Command::AddUnder { parent, name } => {
                tree.add_by_parent_name(parent, name)?;
                None
            }
            Command::Remove { path } => {
                tree.remove_by_path(path)?;
                None
            }
            Command::RemoveName { name } => {
                tree.remove_by_name(name)?;
                None
            }
            Command::Move { path, new_name } => {
                tree.rename_by_path(path, new_name)?;
                None
            }
            Command::Rename { old_name, new_name } => {
                tree.rename_by_name(old_name, new_name)?;
                None
            }
            Command::Get { path } => {
                let id = tree.resolve_by_path(path)?.id();
                let view = tree
                    .view(id)
                    .ok_or_else(|| FolderTreeError::NotFound(path.clone()))?;
                Some(serde_json::to_string(&view)?)
            }
            Command::Find { name } => {
                let path = tree.resolve_by_name(name)?;
                Some(if path.is_empty() { "/".to_string() } else { path })
            }
            Command::Print => Some(match self.format {
                DumpFormat::Text => tree.to_text(),
                DumpFormat::Json => tree.to_json_pretty()?,
            }),
            Command::Echo { text } => Some(text.clone()),
        };
        Ok(output)
    }

    /// Runs `script` line by line, writing command output to `out`.
    ///
    /// With `keep_going`, folder-tree failures are written to `out` as
    /// `error: ...` lines and skipped. Otherwise the first failure is
    /// returned and reporting it is left to the caller. Malformed lines and
    /// I/O errors always abort.
    pub fn run_script<W: Write>(
        &mut self,
        script: &str,
        keep_going: bool,
        out: &mut W,
    ) -> Result<RunSummary, CliError> {
        let mut summary = RunSummary::default();
        for (idx, line) in script.lines().enumerate() {
            let line_no = idx + 1;
            let command = Command::parse(line).map_err(|e| CliError::Line {
                line: line_no,
                source: Box::new(e),
            })?;
            let Some(command) = command else {
                continue;
            };

            summary.executed += 1;
            match self.execute(&command) {
                Ok(output) => {
                    if command.is_mutation() {
                        summary.mutations += 1;
                        debug!(line = line_no, ?command, folders = self.tree.len(), "applied");
                    }
                    if let Some(output) = output {
                        writeln!(out, "{output}")?;
                    }
                }
                Err(CliError::Tree(e)) if keep_going => {
                    summary.failed += 1;
                    debug!(line = line_no, ?command, error = %e, "command failed, continuing");
                    writeln!(out, "error: {e}")?;
                }
                Err(e) => {
                    return Err(CliError::Line {
                        line: line_no,
                        source: Box::new(e),
                    })
                }
            }
        }
        Ok(summary)
    }
}
