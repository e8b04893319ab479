use crate::range::GuessRange;
use core::fmt::{self, Display, Formatter};

pub const WELCOME: &str = "Welcome to the Number Guessing Game!";

/// Player-facing message produced for one submitted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    TooLow,
    TooHigh,
    NotANumber,
    OutOfRange(GuessRange),
    Correct { target: i32, attempts: u32 },
    Canceled,
}

impl Feedback {
    /// True when the entry was compared against the target.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Feedback::TooLow | Feedback::TooHigh | Feedback::Correct { .. }
        )
    }
}

impl Display for Feedback {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::TooLow => write!(f, "Too low!"),
            Feedback::TooHigh => write!(f, "Too high!"),
            Feedback::NotANumber => write!(f, "Please enter a valid number."),
            Feedback::OutOfRange(range) => write!(
                f,
                "Please enter a number between {} and {}.",
                range.min(),
                range.max()
            ),
            Feedback::Correct { target, attempts } => write!(
                f,
                "Congratulations! You found the number {} in {} attempts!",
                target, attempts
            ),
            Feedback::Canceled => write!(f, "Game canceled."),
        }
    }
}

pub fn prompt_text(range: GuessRange) -> String {
    format!("Guess a number between {} and {}:", range.min(), range.max())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Feedback::TooLow, "Too low!")]
    #[test_case(Feedback::TooHigh, "Too high!")]
    #[test_case(Feedback::NotANumber, "Please enter a valid number.")]
    #[test_case(Feedback::Canceled, "Game canceled.")]
    fn fixed_messages(feedback: Feedback, expected: &str) {
        assert_eq!(feedback.to_string(), expected);
    }

    #[test]
    fn out_of_range_message_names_bounds() {
        let range = GuessRange::new(1, 10).unwrap();
        assert_eq!(
            Feedback::OutOfRange(range).to_string(),
            "Please enter a number between 1 and 10."
        );
    }

    #[test]
    fn correct_message_reports_target_and_attempts() {
        let feedback = Feedback::Correct { target: 74, attempts: 3 };
        assert_eq!(
            feedback.to_string(),
            "Congratulations! You found the number 74 in 3 attempts!"
        );
    }

    #[test]
    fn only_compared_entries_are_comparisons() {
        assert!(Feedback::TooLow.is_comparison());
        assert!(Feedback::Correct { target: 1, attempts: 1 }.is_comparison());
        assert!(!Feedback::NotANumber.is_comparison());
        assert!(!Feedback::OutOfRange(GuessRange::new(1, 2).unwrap()).is_comparison());
    }

    #[test]
    fn prompt_names_bounds() {
        let range = GuessRange::new(1, 100).unwrap();
        assert_eq!(prompt_text(range), "Guess a number between 1 and 100:");
    }
}
