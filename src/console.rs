//! Console abstraction - the boundary to the hardware layer.
//!
//! The shell core never touches a UART or a framebuffer. The host kernel
//! implements [`Console`] over whatever input and output plumbing it has,
//! and the shell drives it one line at a time.

use alloc::collections::VecDeque;
use alloc::string::String;

/// One-line-at-a-time console provided by the host.
///
/// Implementations are expected to block in [`read_line`](Console::read_line)
/// until a full line is available. Line editing, echo, and key handling all
/// happen on the host's side of this boundary.
pub trait Console {
    /// Complete hardware bring-up. Called exactly once, before the first
    /// read. Output methods may be used before `init` completes; the boot
    /// console is assumed usable from reset.
    fn init(&mut self) {}

    /// Blocking read of one input line, without its terminator.
    ///
    /// Returns `None` when the input source is closed and will never
    /// produce another line. A hardware console never returns `None`.
    fn read_line(&mut self) -> Option<String>;

    /// Write text without a line terminator (used for the prompt).
    fn write(&mut self, text: &str);

    /// Write one full output line.
    ///
    /// The default implementation appends `\n`; hardware consoles that need
    /// a different line discipline (CRLF, cursor handling) override this.
    fn write_line(&mut self, line: &str) {
        self.write(line);
        self.write("\n");
    }
}

/// In-memory console with scripted input and captured output.
///
/// Useful for tests and for hosts that want to replay a command sequence
/// without real hardware. Input lines are served in order; once the script
/// is exhausted, [`read_line`](Console::read_line) reports closed input.
pub struct MemConsole {
    script: VecDeque<String>,
    transcript: String,
    init_calls: usize,
}

impl MemConsole {
    /// Create a console with no scripted input.
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            transcript: String::new(),
            init_calls: 0,
        }
    }

    /// Create a console that will serve the given lines, in order.
    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut console = Self::new();
        for line in lines {
            console.script.push_back(line.into());
        }
        console
    }

    /// Append one more input line to the script.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.script.push_back(line.into());
    }

    /// Everything written to the console so far.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// How many times `init` has been called.
    pub fn init_calls(&self) -> usize {
        self.init_calls
    }
}

impl Default for MemConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for MemConsole {
    fn init(&mut self) {
        self.init_calls += 1;
    }

    fn read_line(&mut self) -> Option<String> {
        self.script.pop_front()
    }

    fn write(&mut self, text: &str) {
        self.transcript.push_str(text);
    }
}
