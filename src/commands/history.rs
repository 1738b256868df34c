//! Command history storage and the `history` command.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use anyhow::bail;
use core::fmt::Write;

use crate::command::{CmdResult, Command, CommandContext, Outcome};

/// Oldest entries are evicted beyond this many.
const MAX_HISTORY: usize = 100;

/// Bounded record of the lines the shell has accepted.
///
/// Empty lines and consecutive duplicates are skipped, so paging through
/// history never shows the same line twice in a row.
pub struct CommandHistory {
    entries: VecDeque<String>,
}

impl CommandHistory {
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Record one line, evicting the oldest entry once full.
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if self.entries.back().is_some_and(|last| last == line) {
            return;
        }
        if self.entries.len() == MAX_HISTORY {
            self.entries.pop_front();
        }
        self.entries.push_back(line.to_string());
    }

    /// Entries in order, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Show or clear the command history.
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn description(&self) -> &'static str {
        "Show command history"
    }

    fn usage(&self) -> &'static str {
        "history [clear]\n  Without arguments, list past commands oldest first.\n  'history clear' discards all entries."
    }

    fn execute(&self, ctx: &CommandContext) -> CmdResult {
        match ctx.args.get(0) {
            None => {
                let history = ctx.history.lock();
                if history.is_empty() {
                    return Ok(Outcome::Reply("No command history.".to_string()));
                }
                let mut out = String::from("Command history:");
                for (i, cmd) in history.entries().enumerate() {
                    let _ = write!(out, "\n  {:3}  {}", i + 1, cmd);
                }
                Ok(Outcome::Reply(out))
            }
            Some("clear") => {
                ctx.history.lock().clear();
                Ok(Outcome::Reply("History cleared.".to_string()))
            }
            Some(arg) => bail!("Unknown argument '{}'. Usage: history [clear]", arg),
        }
    }
}
