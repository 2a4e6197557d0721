//! Command registration
//!
//! Hosts expose a way to register named commands; [`CommandTable`] is the
//! in-process implementation used by the CLI and tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::error::DiceError;

/// One invocation of a command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    /// Free-text arguments; the first is the dice notation
    pub args: Vec<String>,
}

impl Command {
    /// A command invoked with a single argument
    pub fn new(notation: impl Into<String>) -> Self {
        Self {
            args: vec![notation.into()],
        }
    }

    /// The notation argument, empty if none was given
    pub fn notation(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or("")
    }
}

/// Async command handler producing a reply
pub type CommandHandler =
    Arc<dyn Fn(Command) -> BoxFuture<'static, Result<String, DiceError>> + Send + Sync>;

/// Host-side command registration
pub trait CommandRegistry {
    /// Register `handler` under `name`
    fn register(&mut self, name: &str, description: &str, handler: CommandHandler);
}

struct Registered {
    description: String,
    handler: CommandHandler,
}

/// In-memory command table, names matched case-insensitively
#[derive(Default)]
pub struct CommandTable {
    commands: BTreeMap<String, Registered>,
}

impl CommandTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the command registered under `name`
    pub async fn dispatch(&self, name: &str, command: Command) -> Result<String, DiceError> {
        let key = normalize(name);
        let registered = self
            .commands
            .get(&key)
            .ok_or_else(|| DiceError::UnknownCommand(name.to_string()))?;
        (registered.handler)(command).await
    }

    /// Whether a command is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&normalize(name))
    }

    /// Registered names and descriptions, sorted by name
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .map(|(name, r)| (name.as_str(), r.description.as_str()))
            .collect()
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands are registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl CommandRegistry for CommandTable {
    fn register(&mut self, name: &str, description: &str, handler: CommandHandler) {
        self.commands.insert(
            normalize(name),
            Registered {
                description: description.to_string(),
                handler,
            },
        );
    }
}

/// Chat hosts prefix commands with '!'
fn normalize(name: &str) -> String {
    name.trim().trim_start_matches('!').to_lowercase()
}
