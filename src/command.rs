//! Command trait, parsed-line types, and execution context.

use alloc::string::String;
use alloc::vec::Vec;
use spin::Mutex;

use crate::commands::history::CommandHistory;
use crate::error::{ShellError, ShellResult};
use crate::registry::Registry;

/// Parsed command arguments.
pub struct Args<'a> {
    args: Vec<&'a str>,
}

impl<'a> Args<'a> {
    /// Create Args from a slice of string references.
    pub fn new(args: Vec<&'a str>) -> Self {
        Self { args }
    }

    /// Get argument at index (0 is first argument after command name).
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterate over arguments.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.args.iter().copied()
    }

    /// All arguments as a slice.
    pub fn as_slice(&self) -> &[&'a str] {
        &self.args
    }

    /// Arguments joined with the given separator.
    pub fn join(&self, sep: &str) -> String {
        self.args.join(sep)
    }
}

/// One parsed input line: a command name and its arguments.
///
/// Borrows from the raw line; lives only for the duration of one dispatch.
pub struct CommandLine<'a> {
    /// The trimmed input line.
    pub raw: &'a str,
    /// The command name (first token).
    pub name: &'a str,
    /// Parsed arguments (tokens after the name).
    pub args: Args<'a>,
    /// Raw argument string (everything after the name, untokenized).
    pub args_raw: &'a str,
}

impl<'a> CommandLine<'a> {
    /// Parse one input line.
    ///
    /// Splits on whitespace runs; the first token is the command name and
    /// the rest are arguments. There is no quoting or escaping, so an
    /// argument cannot contain embedded whitespace.
    ///
    /// Empty or whitespace-only input yields [`ShellError::EmptyLine`].
    pub fn parse(raw: &'a str) -> ShellResult<Self> {
        let trimmed = raw.trim();
        let mut parts = trimmed.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(ShellError::EmptyLine);
        };
        let args: Vec<&str> = parts.collect();

        // `name` is the leading token of the trimmed line, so everything
        // past it is the raw argument tail.
        let args_raw = trimmed[name.len()..].trim_start();

        Ok(Self {
            raw: trimmed,
            name,
            args: Args::new(args),
            args_raw,
        })
    }
}

/// Command execution context.
///
/// Bundles the parsed line with read-only views of the shell state a
/// handler may consult: the registry (for `help`) and the command history
/// (for `history`). Built by the shell right before dispatch.
pub struct CommandContext<'a> {
    /// The original trimmed input line.
    pub raw: &'a str,
    /// The command name that was invoked.
    pub name: &'a str,
    /// Parsed arguments (excluding command name).
    pub args: Args<'a>,
    /// Raw argument string (everything after command name).
    pub args_raw: &'a str,
    /// The registry this dispatch is running against.
    pub registry: &'a Registry,
    /// Lines accepted by the shell so far.
    pub history: &'a Mutex<CommandHistory>,
}

impl<'a> CommandContext<'a> {
    /// Assemble a context from a parsed line and the shell state.
    pub fn new(
        line: CommandLine<'a>,
        registry: &'a Registry,
        history: &'a Mutex<CommandHistory>,
    ) -> Self {
        Self {
            raw: line.raw,
            name: line.name,
            args: line.args,
            args_raw: line.args_raw,
            registry,
            history,
        }
    }
}

/// Successful result of a command, handed back to the shell loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print on the console. May span multiple lines.
    Reply(String),
    /// Nothing to print.
    Quiet,
    /// Leave the run loop; the shell enters its halted state.
    Halt,
}

/// What a handler returns: an [`Outcome`] or its own error.
///
/// Handler failures are reported through anyhow (`bail!`, `.context(..)`)
/// and surface at the dispatcher as
/// [`ShellError::HandlerFailed`](crate::ShellError::HandlerFailed).
pub type CmdResult = anyhow::Result<Outcome>;

/// Trait for implementing commands.
///
/// A command is a named capability: it carries its own name, aliases, and
/// help text, and is looked up by exact (case-sensitive) match. `Send +
/// Sync` so a host may run the shell loop in a spawned task.
pub trait Command: Send + Sync {
    /// Primary command name.
    fn name(&self) -> &'static str;

    /// Alternative names for this command.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Short description (shown in the help list).
    fn description(&self) -> &'static str;

    /// Detailed usage information (shown in `help <command>`).
    fn usage(&self) -> &'static str {
        self.description()
    }

    /// Command category for grouping in help.
    fn category(&self) -> &'static str {
        "general"
    }

    /// Execute the command with the given context.
    fn execute(&self, ctx: &CommandContext) -> CmdResult;
}
