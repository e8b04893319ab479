use kernel::debug::DebugOutput;
use std::io::{self, BufRead, Stdin, Stdout, Write};
use system::console::{Console, ConsoleError};

pub struct StdConsole {
    stdin: Stdin,
    stdout: Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        let read = self
            .stdin
            .lock()
            .read_line(&mut line)
            .map_err(|err| ConsoleError::ReadError(err.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        let mut out = self.stdout.lock();
        writeln!(out, "{}", line)
            .and_then(|_| out.flush())
            .map_err(|err| ConsoleError::WriteError(err.to_string()))
    }
}

/// Log sink on stderr. Write failures are dropped.
pub struct StderrDebug;

pub static STDERR_DEBUG: StderrDebug = StderrDebug;

impl DebugOutput for StderrDebug {
    fn write_str(&self, s: &str) {
        io::stderr().lock().write_all(s.as_bytes()).ok();
    }
}
