//! System control commands.

use alloc::format;
use alloc::string::ToString;

use crate::command::{CmdResult, Command, CommandContext, Outcome};

/// Stop the shell loop.
pub struct HaltCommand;

impl Command for HaltCommand {
    fn name(&self) -> &'static str {
        "halt"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["shutdown", "exit"]
    }

    fn description(&self) -> &'static str {
        "Stop the shell"
    }

    fn category(&self) -> &'static str {
        "system"
    }

    fn execute(&self, _ctx: &CommandContext) -> CmdResult {
        Ok(Outcome::Halt)
    }
}

/// Reboot the machine.
pub struct RebootCommand;

impl Command for RebootCommand {
    fn name(&self) -> &'static str {
        "reboot"
    }

    fn description(&self) -> &'static str {
        "Restart the system"
    }

    fn category(&self) -> &'static str {
        "system"
    }

    fn execute(&self, _ctx: &CommandContext) -> CmdResult {
        Ok(Outcome::Reply("Reboot command not implemented".to_string()))
    }
}

/// Show the shell name and version.
pub struct VersionCommand;

impl Command for VersionCommand {
    fn name(&self) -> &'static str {
        "version"
    }

    fn description(&self) -> &'static str {
        "Show shell version"
    }

    fn category(&self) -> &'static str {
        "system"
    }

    fn execute(&self, _ctx: &CommandContext) -> CmdResult {
        Ok(Outcome::Reply(format!(
            "{} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )))
    }
}
