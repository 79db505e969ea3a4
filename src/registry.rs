//! Command registry.
//!
//! Maps subcommand names to handlers. The registry is built once by
//! [`crate::commands::builtin`] before argument parsing begins and is not
//! mutated afterwards; the CLI derives its subcommand list from it.

use anyhow::Result;
use thiserror::Error;

use crate::config::Config;

/// A subcommand handler. Runs once per process invocation.
pub type Handler = fn(&Config) -> Result<()>;

/// Invalid registry usage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Neither an explicit name nor a handler identifier was supplied.
    #[error("pass a function or name")]
    MissingNameSource,
}

/// One registered subcommand.
#[derive(Debug)]
pub struct Command {
    name: String,
    description: String,
    handler: Handler,
}

impl Command {
    /// General constructor. An explicit name is used verbatim; otherwise the
    /// name is derived from the handler identifier with underscores replaced
    /// by hyphens. Supplying neither is an error.
    pub fn new(
        explicit: Option<&str>,
        ident: Option<&str>,
        description: &str,
        handler: Handler,
    ) -> Result<Self, RegistryError> {
        let name = match (explicit, ident) {
            (Some(name), _) => name.to_string(),
            (None, Some(ident)) => derive_name(ident),
            (None, None) => return Err(RegistryError::MissingNameSource),
        };
        Ok(Self {
            name,
            description: description.to_string(),
            handler,
        })
    }

    /// Command named after a handler identifier (underscores become hyphens).
    pub fn from_ident(ident: &str, description: &str, handler: Handler) -> Self {
        Self {
            name: derive_name(ident),
            description: description.to_string(),
            handler,
        }
    }

    /// Command with an explicit name, used verbatim.
    pub fn named(name: &str, description: &str, handler: Handler) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the handler with the resolved configuration.
    pub fn invoke(&self, config: &Config) -> Result<()> {
        (self.handler)(config)
    }
}

/// CLI name for a handler identifier.
fn derive_name(ident: &str) -> String {
    ident.replace('_', "-")
}

/// Ordered collection of commands, unique by name.
#[derive(Default)]
pub struct Registry {
    commands: Vec<Command>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command. Re-registering a name replaces the earlier entry, so
    /// names stay unique; iteration order is registration order.
    pub fn register(&mut self, command: Command) {
        self.commands.retain(|c| c.name != command.name);
        self.commands.push(command);
    }

    /// Exact-match lookup by name.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &Config) -> Result<()> {
        Ok(())
    }

    #[test]
    fn name_derived_from_identifier() {
        let command = Command::from_ident("show_config", "print config", noop);
        assert_eq!(command.name(), "show-config");
    }

    #[test]
    fn single_word_identifier_unchanged() {
        let command = Command::from_ident("clean", "remove artifacts", noop);
        assert_eq!(command.name(), "clean");
    }

    #[test]
    fn explicit_name_used_verbatim() {
        let command = Command::named("lock_v2", "alias", noop);
        assert_eq!(command.name(), "lock_v2");
    }

    #[test]
    fn explicit_name_wins_over_identifier() {
        let command = Command::new(Some("alias"), Some("real_name"), "aliased", noop).unwrap();
        assert_eq!(command.name(), "alias");
    }

    #[test]
    fn neither_name_nor_identifier_is_an_error() {
        let err = Command::new(None, None, "nothing to name this", noop).unwrap_err();
        assert_eq!(err, RegistryError::MissingNameSource);
        assert_eq!(err.to_string(), "pass a function or name");
    }

    #[test]
    fn lookup_is_exact_match() {
        let mut registry = Registry::new();
        registry.register(Command::from_ident("lock", "pin dependencies", noop));

        assert!(registry.get("lock").is_some());
        assert!(registry.get("loc").is_none());
        assert!(registry.get("lock ").is_none());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = Registry::new();
        registry.register(Command::from_ident("build", "first", noop));
        registry.register(Command::from_ident("build", "second", noop));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("build").unwrap().description(), "second");
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let mut registry = Registry::new();
        registry.register(Command::from_ident("clean", "", noop));
        registry.register(Command::from_ident("init", "", noop));
        registry.register(Command::from_ident("lock", "", noop));

        let names: Vec<&str> = registry.iter().map(Command::name).collect();
        assert_eq!(names, ["clean", "init", "lock"]);
    }

    #[test]
    fn invoke_runs_the_handler() {
        fn failing(_: &Config) -> Result<()> {
            anyhow::bail!("handler ran")
        }
        let command = Command::from_ident("boom", "", failing);
        let config = Config {
            scripts_dir: std::path::PathBuf::from("/tmp/venv/bin"),
        };

        let err = command.invoke(&config).unwrap_err();
        assert_eq!(err.to_string(), "handler ran");
    }
}
