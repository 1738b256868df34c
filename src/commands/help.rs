//! Help command implementation.

use alloc::string::String;
use alloc::vec::Vec;
use anyhow::bail;
use core::fmt::Write;

use crate::command::{CmdResult, Command, CommandContext, Outcome};

/// List all commands, or show detailed usage for one.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["?", "man"]
    }

    fn description(&self) -> &'static str {
        "Show available commands"
    }

    fn usage(&self) -> &'static str {
        "help [command]\n  Without arguments, list all commands grouped by category.\n  With a command name or alias, show its detailed usage."
    }

    fn execute(&self, ctx: &CommandContext) -> CmdResult {
        match ctx.args.get(0) {
            None => Ok(Outcome::Reply(render_overview(ctx))),
            Some(name) => match ctx.registry.find(name) {
                Some(cmd) => {
                    let mut out = String::new();
                    let _ = write!(out, "Command: {}", cmd.name());
                    if !cmd.aliases().is_empty() {
                        let _ = write!(out, " (aliases: {})", cmd.aliases().join(", "));
                    }
                    let _ = write!(out, "\n{}", cmd.usage());
                    Ok(Outcome::Reply(out))
                }
                None => bail!("Command not found: {}", name),
            },
        }
    }
}

/// One row per command, grouped by category. "general" sorts first, the
/// remaining categories alphabetically; within a category, registration
/// order is kept.
fn render_overview(ctx: &CommandContext) -> String {
    let mut categories: Vec<&'static str> = Vec::new();
    for cmd in ctx.registry.all() {
        if !categories.contains(&cmd.category()) {
            categories.push(cmd.category());
        }
    }
    categories.sort_by(|a, b| match (*a == "general", *b == "general") {
        (true, false) => core::cmp::Ordering::Less,
        (false, true) => core::cmp::Ordering::Greater,
        _ => a.cmp(b),
    });

    let mut out = String::from("Available commands:");
    for category in categories {
        let _ = write!(out, "\n\n[{category}]");
        for cmd in ctx.registry.all().filter(|c| c.category() == category) {
            let _ = write!(out, "\n  {:12} - {}", cmd.name(), cmd.description());
        }
    }
    let _ = write!(out, "\n\nType 'help <command>' for detailed usage.");
    out
}
