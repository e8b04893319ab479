use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    ReadError(String),
    WriteError(String),
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::ReadError(reason) => write!(f, "console read failed: {}", reason),
            ConsoleError::WriteError(reason) => write!(f, "console write failed: {}", reason),
        }
    }
}

impl std::error::Error for ConsoleError {}

/// Line-oriented text device the front-ends talk to.
pub trait Console {
    /// Next line without its line terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError>;
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;
}

/// In-memory console fed from a fixed script. Everything written is kept.
#[derive(Debug, Default)]
pub struct ScriptConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptConsole {
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_console_replays_lines_in_order() {
        let mut console = ScriptConsole::new(["1", "2"]);
        assert_eq!(console.read_line().unwrap(), Some("1".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("2".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn script_console_records_output() {
        let mut console = ScriptConsole::new(Vec::<String>::new());
        console.write_line("hello").unwrap();
        assert_eq!(console.output(), ["hello".to_string()]);
    }

    #[test]
    fn console_error_display() {
        let err = ConsoleError::ReadError("closed".to_string());
        assert_eq!(err.to_string(), "console read failed: closed");
    }
}
