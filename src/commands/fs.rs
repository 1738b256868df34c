//! Filesystem commands.
//!
//! No filesystem is mounted yet; these commands validate their arguments
//! and report that the operation is not implemented.

use alloc::string::ToString;
use anyhow::bail;

use crate::command::{CmdResult, Command, CommandContext, Outcome};

/// List directory contents.
pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["dir"]
    }

    fn description(&self) -> &'static str {
        "List directory contents"
    }

    fn usage(&self) -> &'static str {
        "ls [path]\n  List the contents of the given directory, or the current one."
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, _ctx: &CommandContext) -> CmdResult {
        Ok(Outcome::Reply("Directory listing not implemented".to_string()))
    }
}

/// Change the current directory.
pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "Change the current directory"
    }

    fn usage(&self) -> &'static str {
        "cd <path>\n  Switch the working directory to the given path."
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, ctx: &CommandContext) -> CmdResult {
        if ctx.args.is_empty() {
            bail!("Missing path. Usage: cd <path>");
        }
        Ok(Outcome::Reply(
            "Change directory command not implemented".to_string(),
        ))
    }
}

/// Create a directory.
pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn description(&self) -> &'static str {
        "Create a directory"
    }

    fn usage(&self) -> &'static str {
        "mkdir <path>\n  Create a new directory at the given path."
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, ctx: &CommandContext) -> CmdResult {
        if ctx.args.is_empty() {
            bail!("Missing path. Usage: mkdir <path>");
        }
        Ok(Outcome::Reply(
            "Create directory command not implemented".to_string(),
        ))
    }
}
