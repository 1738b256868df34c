//! Built-in command implementations.
//!
//! Each submodule holds one command family. [`defaults`] assembles the
//! standard set in the order `help` lists them.

pub mod clear;
pub mod datetime;
pub mod echo;
pub mod fs;
pub mod help;
pub mod history;
pub mod system;

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use crate::command::Command;

/// The built-in command set, in registration (and help) order.
pub fn defaults() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(help::HelpCommand),
        Box::new(echo::EchoCommand),
        Box::new(clear::ClearCommand),
        Box::new(history::HistoryCommand),
        Box::new(datetime::DateCommand),
        Box::new(datetime::TimeCommand),
        Box::new(fs::LsCommand),
        Box::new(fs::CdCommand),
        Box::new(fs::MkdirCommand),
        Box::new(system::HaltCommand),
        Box::new(system::RebootCommand),
        Box::new(system::VersionCommand),
    ]
}
