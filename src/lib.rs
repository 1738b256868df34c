//! tinyshell: a small interactive command shell for bare-metal kernels.
//!
//! The crate is the command layer only. It parses input lines, resolves
//! them against a registry of named commands, runs the handler, and
//! writes replies back through an abstract [`Console`]. The host kernel
//! supplies the console device and (optionally) extra commands; nothing
//! here touches hardware.
//!
//! Architecture decisions:
//! - Input is line-oriented: the console hands over whole lines, so byte
//!   level echo and line editing stay with the device driver.
//! - Commands are trait objects carrying their own names, aliases, and
//!   help text; the registry maps every key to its handler.
//! - Handler failures are ordinary values. The loop reports them on one
//!   line and keeps running; only `halt` (or end of input) stops it.
//!
//! # Example
//!
//! ```
//! use tinyshell::{MemConsole, Shell};
//!
//! let console = MemConsole::scripted(["echo hello", "halt"]);
//! let mut shell = Shell::new(console)?;
//! shell.run();
//!
//! let console = shell.into_console();
//! assert!(console.transcript().contains("hello"));
//! assert!(console.transcript().ends_with("Powering off...\n"));
//! # Ok::<(), tinyshell::ShellError>(())
//! ```
//!
//! # Adding a command
//!
//! Implement [`Command`] and register it; the built-in `help` picks it
//! up automatically.
//!
//! ```
//! use tinyshell::{CmdResult, Command, CommandContext, MemConsole, Outcome, Shell};
//!
//! struct UptimeCommand;
//!
//! impl Command for UptimeCommand {
//!     fn name(&self) -> &'static str {
//!         "uptime"
//!     }
//!
//!     fn description(&self) -> &'static str {
//!         "Show time since boot"
//!     }
//!
//!     fn execute(&self, _ctx: &CommandContext) -> CmdResult {
//!         Ok(Outcome::Reply("up 42 seconds".into()))
//!     }
//! }
//!
//! let mut shell = Shell::new(MemConsole::scripted(["uptime", "halt"]))?;
//! shell.register(Box::new(UptimeCommand))?;
//! shell.run();
//! assert!(shell.into_console().transcript().contains("up 42 seconds"));
//! # Ok::<(), tinyshell::ShellError>(())
//! ```

#![no_std]

#[macro_use]
extern crate log;
extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod command;
pub mod commands;
pub mod console;
pub mod error;
pub mod logger;
pub mod registry;
pub mod shell;

pub use command::{Args, CmdResult, Command, CommandContext, CommandLine, Outcome};
pub use console::{Console, MemConsole};
pub use error::{ShellError, ShellResult};
pub use registry::Registry;
pub use shell::{BANNER_INIT, BANNER_WELCOME, HALT_MESSAGE, PROMPT, Shell};
