use crate::session::AttemptPolicy;
use system::range::{GuessRange, RangeError};

pub const DEFAULT_SEED: u32 = 42;
pub const DEFAULT_MIN: i32 = 1;
pub const DEFAULT_MAX: i32 = 100;
pub const COMPACT_MAX: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontEnd {
    #[default]
    Prompt,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub range: GuessRange,
    pub policy: AttemptPolicy,
    pub front_end: FrontEnd,
}

impl GameConfig {
    /// Smaller 1..=10 board.
    pub fn compact() -> Self {
        Self {
            range: GuessRange::new(DEFAULT_MIN, COMPACT_MAX).expect("compact bounds are ordered"),
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, min: i32, max: i32) -> Result<Self, RangeError> {
        self.range = GuessRange::new(min, max)?;
        Ok(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            range: GuessRange::new(DEFAULT_MIN, DEFAULT_MAX)
                .expect("default bounds are ordered"),
            policy: AttemptPolicy::default(),
            front_end: FrontEnd::default(),
        }
    }
}
