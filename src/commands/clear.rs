//! Clear-screen command implementation.

use alloc::string::ToString;

use crate::command::{CmdResult, Command, CommandContext, Outcome};

/// ANSI: erase the whole screen, then move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Clear the console screen.
pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["cls"]
    }

    fn description(&self) -> &'static str {
        "Clear the screen"
    }

    fn execute(&self, _ctx: &CommandContext) -> CmdResult {
        Ok(Outcome::Reply(CLEAR_SCREEN.to_string()))
    }
}
