use core::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Char(char),
    Backspace,
    Enter,
}

impl KeyEvent {
    pub fn from_char(c: char) -> Option<KeyEvent> {
        match c {
            '\n' | '\r' => Some(KeyEvent::Enter),
            '\x08' | '\x7f' => Some(KeyEvent::Backspace),
            c if c.is_control() => None,
            c => Some(KeyEvent::Char(c)),
        }
    }
}

impl Display for KeyEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            KeyEvent::Char(c) => write!(f, "KeyEvent: {}", c),
            KeyEvent::Backspace => write!(f, "KeyEvent: <backspace>"),
            KeyEvent::Enter => write!(f, "KeyEvent: <enter>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('7', Some(KeyEvent::Char('7')) ; "digit")]
    #[test_case('a', Some(KeyEvent::Char('a')) ; "letter")]
    #[test_case('\n', Some(KeyEvent::Enter) ; "line feed")]
    #[test_case('\r', Some(KeyEvent::Enter) ; "carriage return")]
    #[test_case('\x08', Some(KeyEvent::Backspace) ; "backspace")]
    #[test_case('\x7f', Some(KeyEvent::Backspace) ; "delete")]
    #[test_case('\t', None ; "tab ignored")]
    fn from_char_cases(c: char, expected: Option<KeyEvent>) {
        assert_eq!(KeyEvent::from_char(c), expected);
    }

    #[test]
    fn display_names_key() {
        assert_eq!(KeyEvent::Char('4').to_string(), "KeyEvent: 4");
    }
}
