use core::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    InvalidRange { min: i32, max: i32 },
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::InvalidRange { min, max } => {
                write!(f, "invalid range: max ({}) is lower than min ({})", max, min)
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Inclusive `[min, max]` interval of guessable numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRange {
    min: i32,
    max: i32,
}

impl GuessRange {
    pub fn new(min: i32, max: i32) -> Result<Self, RangeError> {
        if max < min {
            return Err(RangeError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of values in the range. Up to 2^32 for the full `i32` span.
    pub fn span(&self) -> u64 {
        (self.max as i64 - self.min as i64 + 1) as u64
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min as i64 && value <= self.max as i64
    }
}
