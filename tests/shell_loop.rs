//! End-to-end shell sessions over an in-memory console.

use anyhow::Context;
use tinyshell::{CmdResult, Command, CommandContext, MemConsole, Outcome, Shell};

fn run_script(lines: &[&str]) -> String {
    let console = MemConsole::scripted(lines.iter().copied());
    let mut shell = Shell::new(console).unwrap();
    shell.run();
    shell.into_console().transcript().to_string()
}

#[test]
fn session_transcript_is_exact() {
    let transcript = run_script(&["echo hello world", "frobnicate", "history", "halt"]);
    assert_eq!(
        transcript,
        "Initializing kernel...\n\
         Welcome to My Simple OS!\n\
         > hello world\n\
         > Unknown command: frobnicate. Type 'help' to list commands.\n\
         > Command history:\n\
         \x20   1  echo hello world\n\
         \x20   2  frobnicate\n\
         \x20   3  history\n\
         > Powering off...\n"
    );
}

#[test]
fn aliases_resolve_through_the_loop() {
    let transcript = run_script(&["cls", "dir", "date", "time", "shutdown"]);
    assert!(transcript.contains("\x1b[2J\x1b[1;1H\n"));
    assert!(transcript.contains("Directory listing not implemented\n"));
    assert!(transcript.contains("Current date: 2024-12-11\n"));
    assert!(transcript.contains("Current time: 13:25:00\n"));
    assert!(transcript.ends_with("Powering off...\n"));
}

#[test]
fn history_clear_takes_effect_mid_session() {
    let transcript = run_script(&["echo a", "history clear", "history", "halt"]);
    assert!(transcript.contains("History cleared.\n"));
    // The listing request itself is recorded before it runs, so it is
    // the only entry left after the clear.
    assert!(transcript.contains("Command history:\n    1  history\n"));
    assert!(!transcript.contains("1  echo a"));
}

struct MuteCommand;

impl Command for MuteCommand {
    fn name(&self) -> &'static str {
        "mute"
    }

    fn description(&self) -> &'static str {
        "Silence the speaker"
    }

    fn execute(&self, _ctx: &CommandContext) -> CmdResult {
        Ok(Outcome::Quiet)
    }
}

struct StoreCommand;

impl Command for StoreCommand {
    fn name(&self) -> &'static str {
        "store"
    }

    fn description(&self) -> &'static str {
        "Write a value to the backing store"
    }

    fn execute(&self, _ctx: &CommandContext) -> CmdResult {
        Err(anyhow::anyhow!("device busy")).context("flush failed")
    }
}

#[test]
fn custom_commands_and_end_of_input() {
    let console = MemConsole::scripted(["mute", "store 1", "version"]);
    let mut shell = Shell::new(console).unwrap();
    shell.register(Box::new(MuteCommand)).unwrap();
    shell.register(Box::new(StoreCommand)).unwrap();
    shell.run();

    let transcript = shell.into_console().transcript().to_string();
    // Quiet outcome prints nothing between the prompts.
    assert!(transcript.contains("> > "));
    // The whole anyhow chain lands on a single line.
    assert!(transcript.contains("Command failed: flush failed: device busy\n"));
    assert!(transcript.contains(concat!(
        env!("CARGO_PKG_NAME"),
        " ",
        env!("CARGO_PKG_VERSION"),
        "\n"
    )));
    // End of input leaves the loop after the prompt was printed.
    assert!(transcript.ends_with("> "));
}

#[test]
fn registered_commands_appear_in_help() {
    let console = MemConsole::scripted(["help", "help mute", "halt"]);
    let mut shell = Shell::new(console).unwrap();
    shell.register(Box::new(MuteCommand)).unwrap();
    shell.run();

    let transcript = shell.into_console().transcript().to_string();
    assert!(transcript.contains("Available commands:"));
    assert!(transcript.contains("mute"));
    assert!(transcript.contains("Command: mute\nSilence the speaker\n"));
}
