//! The interactive shell: run loop, prompt, and line handling.

use alloc::boxed::Box;
use alloc::format;
use spin::Mutex;

use crate::command::{Command, CommandContext, CommandLine, Outcome};
use crate::commands::history::CommandHistory;
use crate::console::Console;
use crate::error::{ShellError, ShellResult};
use crate::registry::Registry;

/// Printed before every read.
pub const PROMPT: &str = "> ";
/// First line of output, before the console is initialized.
pub const BANNER_INIT: &str = "Initializing kernel...";
/// Greeting printed once the console is up.
pub const BANNER_WELCOME: &str = "Welcome to My Simple OS!";
/// Farewell printed when a command halts the shell.
pub const HALT_MESSAGE: &str = "Powering off...";

/// An interactive command shell over some console device.
///
/// Owns the console, the command registry, and the history. The shell
/// itself never panics on bad input; every line either produces output
/// or an error report, and the loop continues.
pub struct Shell<C: Console> {
    console: C,
    registry: Registry,
    history: Mutex<CommandHistory>,
}

impl<C: Console> Shell<C> {
    /// Create a shell with the built-in command set.
    pub fn new(console: C) -> ShellResult<Self> {
        Ok(Self::with_registry(console, Registry::with_defaults()?))
    }

    /// Create a shell around an existing registry.
    pub fn with_registry(console: C, registry: Registry) -> Self {
        Self {
            console,
            registry,
            history: Mutex::new(CommandHistory::new()),
        }
    }

    /// Register an additional command.
    pub fn register(&mut self, cmd: Box<dyn Command>) -> ShellResult<()> {
        self.registry.register(cmd)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn history(&self) -> &Mutex<CommandHistory> {
        &self.history
    }

    /// Tear down the shell and hand the console back.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Parse and dispatch one input line.
    ///
    /// The line is recorded in history before the handler runs, so a
    /// failing command still shows up in `history`. Exposed for hosts
    /// that drive their own read loop instead of [`Shell::run`].
    pub fn handle_line(&self, raw: &str) -> ShellResult<Outcome> {
        let line = CommandLine::parse(raw)?;
        self.history.lock().push(line.raw);
        let ctx = CommandContext::new(line, &self.registry, &self.history);
        self.registry.dispatch(&ctx)
    }

    /// Run the interactive loop until halt or end of input.
    ///
    /// Prints the banners, initializes the console, then repeats
    /// prompt/read/dispatch. Empty lines just reprompt; unknown commands
    /// and handler failures are reported on a single line and the loop
    /// keeps going. The loop ends when a command returns
    /// [`Outcome::Halt`] or the console reports end of input.
    pub fn run(&mut self) {
        self.console.write_line(BANNER_INIT);
        self.console.init();
        self.console.write_line(BANNER_WELCOME);
        info!("command shell started");

        loop {
            self.console.write(PROMPT);
            let Some(line) = self.console.read_line() else {
                info!("console closed, leaving shell loop");
                break;
            };
            match self.handle_line(&line) {
                Ok(Outcome::Reply(text)) => self.console.write_line(&text),
                Ok(Outcome::Quiet) => {}
                Ok(Outcome::Halt) => {
                    self.console.write_line(HALT_MESSAGE);
                    info!("shell halted by command");
                    break;
                }
                Err(ShellError::EmptyLine) => {}
                Err(e @ ShellError::UnknownCommand(_)) => {
                    self.console
                        .write_line(&format!("{e}. Type 'help' to list commands."));
                }
                Err(e) => self.console.write_line(&format!("{e}")),
            }
        }
    }
}
