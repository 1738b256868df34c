//! Logger implementation for the log crate.
//!
//! Log lines go to a host-provided sink, so the crate stays independent
//! of any particular console device. The initial level comes from the
//! `LOG` environment variable at build time (`error`, `warn`, `info`,
//! `debug`, `trace`; anything else means off); hosts may change it later
//! with `log::set_max_level`.

use core::fmt::{self, Display};
use lazyinit::LazyInit;
use log::{Level, LevelFilter, Log, Metadata, Record};

use alloc::format;

use crate::error::{ShellError, ShellResult};

/// Where formatted log lines are written, one call per record.
pub type LogSink = fn(&str);

static LOGGER: ShellLogger = ShellLogger;
static SINK: LazyInit<LogSink> = LazyInit::new();

struct ShellLogger;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    Red = 31,
    Green = 32,
    Yellow = 33,
    Cyan = 36,
    BrightBlack = 90,
    BrightRed = 91,
    BrightGreen = 92,
    BrightYellow = 93,
    BrightCyan = 96,
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{1B}[{}m", *self as u8)
    }
}

impl Log for ShellLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(sink) = SINK.get() else {
            return;
        };

        let file = record.file().unwrap_or("none");
        let line = record.line().unwrap_or(0);
        let args = record.args();
        let color_reset = "\u{1B}[0m";

        let args_color = match record.level() {
            Level::Error => ColorCode::Red,
            Level::Warn => ColorCode::Yellow,
            Level::Info => ColorCode::Green,
            Level::Debug => ColorCode::Cyan,
            Level::Trace => ColorCode::BrightBlack,
        };

        sink(&format!("[{file}:{line}] {args_color}{args}{color_reset}"));
    }

    fn flush(&self) {}
}

/// Initialize the logger with the given sink.
///
/// May be called at most once per process; a second call (or a logger
/// installed by other means) yields [`ShellError::LoggerInitFailed`].
pub fn init(sink: LogSink) -> ShellResult<()> {
    log::set_logger(&LOGGER).map_err(|_| ShellError::LoggerInitFailed)?;
    SINK.init_once(sink);
    log::set_max_level(match option_env!("LOG") {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    });
    Ok(())
}
