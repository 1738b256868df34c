//! Command registry: name/alias lookup and dispatch.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::command::{Command, CommandContext, Outcome};
use crate::commands;
use crate::error::{ShellError, ShellResult};

/// Registry for all commands.
///
/// Owns the handlers and maps every name and alias to its handler.
/// Lookup is exact and case-sensitive.
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
    index: BTreeMap<String, usize>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Create a registry holding the built-in command set.
    pub fn with_defaults() -> ShellResult<Self> {
        let mut registry = Self::new();
        for cmd in commands::defaults() {
            registry.register(cmd)?;
        }
        Ok(registry)
    }

    /// Register a command under its name and all aliases.
    ///
    /// Fails with [`ShellError::DuplicateCommand`] if any key is already
    /// taken; in that case the registry is left unchanged and the
    /// previously registered handler stays bound.
    pub fn register(&mut self, cmd: Box<dyn Command>) -> ShellResult<()> {
        let name = cmd.name();
        if self.index.contains_key(name) {
            return Err(ShellError::DuplicateCommand(name.to_string()));
        }
        for &alias in cmd.aliases() {
            if self.index.contains_key(alias) {
                return Err(ShellError::DuplicateCommand(alias.to_string()));
            }
        }

        let slot = self.commands.len();
        self.index.insert(name.to_string(), slot);
        for &alias in cmd.aliases() {
            self.index.insert(alias.to_string(), slot);
        }
        self.commands.push(cmd);
        debug!("registered command '{}'", name);
        Ok(())
    }

    /// Look up a command by name or alias.
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.index.get(name).map(|&slot| self.commands[slot].as_ref())
    }

    /// All commands in registration order (aliases not repeated).
    pub fn all(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(Box::as_ref)
    }

    /// Number of registered commands (aliases not counted).
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Resolve the context's command name and run the handler.
    ///
    /// An unresolved name never invokes any handler. A handler error is
    /// wrapped in [`ShellError::HandlerFailed`]; the shell stays up either
    /// way.
    pub fn dispatch(&self, ctx: &CommandContext) -> ShellResult<Outcome> {
        let Some(cmd) = self.find(ctx.name) else {
            debug!("unknown command '{}'", ctx.name);
            return Err(ShellError::UnknownCommand(ctx.name.to_string()));
        };
        trace!("dispatching '{}'", ctx.raw);
        cmd.execute(ctx).map_err(|e| {
            warn!("command '{}' failed: {e:#}", ctx.name);
            ShellError::HandlerFailed(e)
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CmdResult, CommandLine};
    use crate::commands::history::CommandHistory;
    use alloc::format;
    use alloc::sync::Arc;
    use anyhow::bail;
    use spin::Mutex;

    struct RecordingCommand {
        name: &'static str,
        aliases: &'static [&'static str],
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl Command for RecordingCommand {
        fn name(&self) -> &'static str {
            self.name
        }

        fn aliases(&self) -> &'static [&'static str] {
            self.aliases
        }

        fn description(&self) -> &'static str {
            "record each invocation"
        }

        fn execute(&self, ctx: &CommandContext) -> CmdResult {
            self.calls.lock().push(ctx.args_raw.to_string());
            Ok(Outcome::Quiet)
        }
    }

    struct FailingCommand;

    impl Command for FailingCommand {
        fn name(&self) -> &'static str {
            "explode"
        }

        fn description(&self) -> &'static str {
            "always fail"
        }

        fn execute(&self, _ctx: &CommandContext) -> CmdResult {
            bail!("boom")
        }
    }

    fn recording(
        name: &'static str,
        aliases: &'static [&'static str],
    ) -> (Box<RecordingCommand>, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let cmd = Box::new(RecordingCommand {
            name,
            aliases,
            calls: calls.clone(),
        });
        (cmd, calls)
    }

    fn dispatch_line(registry: &Registry, line: &str) -> ShellResult<Outcome> {
        let history = Mutex::new(CommandHistory::new());
        let parsed = CommandLine::parse(line).unwrap();
        let ctx = CommandContext::new(parsed, registry, &history);
        registry.dispatch(&ctx)
    }

    #[test]
    fn register_rejects_duplicate_name() {
        let mut registry = Registry::new();
        let (first, first_calls) = recording("dup", &[]);
        let (second, _) = recording("dup", &[]);
        registry.register(first).unwrap();

        let err = registry.register(second).unwrap_err();
        assert!(matches!(err, ShellError::DuplicateCommand(name) if name == "dup"));

        // The original handler stays bound.
        dispatch_line(&registry, "dup hello").unwrap();
        assert_eq!(first_calls.lock().as_slice(), ["hello"]);
    }

    #[test]
    fn register_rejects_alias_collision_without_partial_insert() {
        let mut registry = Registry::new();
        let (first, _) = recording("alpha", &["a"]);
        let (second, _) = recording("beta", &["b", "a"]);
        registry.register(first).unwrap();

        let err = registry.register(second).unwrap_err();
        assert!(matches!(err, ShellError::DuplicateCommand(name) if name == "a"));

        // Nothing of the rejected command was inserted.
        assert!(registry.find("beta").is_none());
        assert!(registry.find("b").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn find_resolves_aliases_case_sensitively() {
        let mut registry = Registry::new();
        let (cmd, _) = recording("greet", &["hi"]);
        registry.register(cmd).unwrap();

        assert!(registry.find("greet").is_some());
        assert!(registry.find("hi").is_some());
        assert!(registry.find("Greet").is_none());
        assert!(registry.find("HI").is_none());
    }

    #[test]
    fn dispatch_passes_argument_tail() {
        let mut registry = Registry::new();
        let (cmd, calls) = recording("record", &[]);
        registry.register(cmd).unwrap();

        let outcome = dispatch_line(&registry, "record  x   y").unwrap();
        assert_eq!(outcome, Outcome::Quiet);
        assert_eq!(calls.lock().as_slice(), ["x   y"]);
    }

    #[test]
    fn dispatch_unknown_name_invokes_nothing() {
        let mut registry = Registry::new();
        let (cmd, calls) = recording("record", &[]);
        registry.register(cmd).unwrap();

        let err = dispatch_line(&registry, "recor").unwrap_err();
        assert!(matches!(err, ShellError::UnknownCommand(name) if name == "recor"));
        assert!(calls.lock().is_empty());
    }

    #[test]
    fn dispatch_wraps_handler_errors() {
        let mut registry = Registry::new();
        registry.register(Box::new(FailingCommand)).unwrap();

        let err = dispatch_line(&registry, "explode").unwrap_err();
        assert!(matches!(err, ShellError::HandlerFailed(_)));
        assert_eq!(format!("{err}"), "Command failed: boom");
    }

    #[test]
    fn defaults_cover_the_builtin_set() {
        let registry = Registry::with_defaults().unwrap();
        assert_eq!(registry.len(), 12);
        for name in ["help", "echo", "clear", "history", "halt", "version"] {
            assert!(registry.find(name).is_some(), "missing builtin {name}");
        }
        // Aliases resolve to the same handlers.
        assert_eq!(registry.find("dir").unwrap().name(), "ls");
        assert_eq!(registry.find("shutdown").unwrap().name(), "halt");
    }
}
