//! Line-oriented command language.

use super::CliError;

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <parent-path> <name>`
    Add { parent: String, name: String },
    /// `add-under <parent-name> <name>`
    AddUnder { parent: String, name: String },
    /// `rm <path>`
    Remove { path: String },
    /// `rm-name <name>`
    RemoveName { name: String },
    /// `mv <path> <new-name>`
    Move { path: String, new_name: String },
    /// `rename <old-name> <new-name>`
    Rename { old_name: String, new_name: String },
    /// `get <path>`
    Get { path: String },
    /// `find <name>`
    Find { name: String },
    /// `print`
    Print,
    /// `echo <text...>`
    Echo { text: String },
}

impl Command {
    /// Parses a single line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CliError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word {
            "add" => {
                let [parent, name] = args::<2>(word, rest)?;
                Command::Add { parent, name }
            }
            "add-under" => {
                let [parent, name] = args::<2>(word, rest)?;
                Command::AddUnder { parent, name }
            }
            "rm" => {
                let [path] = args::<1>(word, rest)?;
                Command::Remove { path }
            }
            "rm-name" => {
                let [name] = args::<1>(word, rest)?;
                Command::RemoveName { name }
            }
            "mv" => {
                let [path, new_name] = args::<2>(word, rest)?;
                Command::Move { path, new_name }
            }
            "rename" => {
                let [old_name, new_name] = args::<2>(word, rest)?;
                Command::Rename { old_name, new_name }
            }
            "get" => {
                let [path] = args::<1>(word, rest)?;
                Command::Get { path }
            }
            "find" => {
                let [name] = args::<1>(word, rest)?;
                Command::Find { name }
            }
            "print" => {
                let [] = args::<0>(word, rest)?;
                Command::Print
            }
            "echo" => Command::Echo {
                text: rest.to_string(),
            },
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }

    /// Whether the command changes the tree.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::AddUnder { .. }
                | Command::Remove { .. }
                | Command::RemoveName { .. }
                | Command::Move { .. }
                | Command::Rename { .. }
        )
    }
}

fn args<const N: usize>(command: &str, rest: &str) -> Result<[String; N], CliError> {
    let words: Vec<String> = rest.split_whitespace().map(str::to_string).collect();
    let found = words.len();
    words.try_into().map_err(|_| CliError::Arity {
        command: command.to_string(),
        expected: N,
        found,
    })
}
