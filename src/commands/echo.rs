//! Echo command implementation.

use crate::command::{CmdResult, Command, CommandContext, Outcome};

/// Echo the arguments back to the console.
pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "Display a line of text"
    }

    fn usage(&self) -> &'static str {
        "echo [text...]\n  Print the arguments separated by single spaces.\n  With no arguments, print an empty line."
    }

    fn execute(&self, ctx: &CommandContext) -> CmdResult {
        Ok(Outcome::Reply(ctx.args.join(" ")))
    }
}
