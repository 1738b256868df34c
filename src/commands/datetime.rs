//! Date and time commands.
//!
//! There is no clock source wired up yet, so both commands report a fixed
//! timestamp. TODO: read the RTC once a driver for it lands.

use alloc::format;

use crate::command::{CmdResult, Command, CommandContext, Outcome};

const SIMULATED_DATE: &str = "2024-12-11";
const SIMULATED_TIME: &str = "13:25:00";

/// Show the current date.
pub struct DateCommand;

impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    fn description(&self) -> &'static str {
        "Show the current date"
    }

    fn category(&self) -> &'static str {
        "system"
    }

    fn execute(&self, _ctx: &CommandContext) -> CmdResult {
        Ok(Outcome::Reply(format!("Current date: {SIMULATED_DATE}")))
    }
}

/// Show the current time.
pub struct TimeCommand;

impl Command for TimeCommand {
    fn name(&self) -> &'static str {
        "time"
    }

    fn description(&self) -> &'static str {
        "Show the current time"
    }

    fn category(&self) -> &'static str {
        "system"
    }

    fn execute(&self, _ctx: &CommandContext) -> CmdResult {
        Ok(Outcome::Reply(format!("Current time: {SIMULATED_TIME}")))
    }
}
