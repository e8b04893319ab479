use crate::guess::parse_guess;
use crate::kconfig::GameConfig;
use crate::random_service::Lcg;
use core::fmt::{self, Display, Formatter};
use log::{debug, info};
use system::feedback::Feedback;
use system::range::GuessRange;

/// Which entries increase the attempt counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttemptPolicy {
    /// Entries that parse as a number, in range or not.
    #[default]
    ValidNumbers,
    /// Every submitted entry, numeric or not.
    EveryEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Won,
    Canceled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    SessionOver(SessionState),
}

impl Display for GuessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::SessionOver(state) => write!(f, "session already ended: {:?}", state),
        }
    }
}

impl std::error::Error for GuessError {}

/// Snapshot of a session, reported once play stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub target: i32,
    pub attempts: u32,
    pub state: SessionState,
}

pub struct GameSession {
    range: GuessRange,
    target: i32,
    attempts: u32,
    policy: AttemptPolicy,
    state: SessionState,
}

impl GameSession {
    /// Draws the target with a fresh generator seeded from the config.
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = Lcg::new(config.seed);
        Self::with_generator(config.range, config.policy, &mut rng)
    }

    pub fn with_generator(range: GuessRange, policy: AttemptPolicy, rng: &mut Lcg) -> Self {
        let target = rng.next_in(range);
        debug!(
            "session started: seed={} range=[{}, {}] policy={:?}",
            rng.seed(),
            range.min(),
            range.max(),
            policy
        );
        Self::with_target(range, target, policy)
    }

    pub(crate) fn with_target(range: GuessRange, target: i32, policy: AttemptPolicy) -> Self {
        Self {
            range,
            target,
            attempts: 0,
            policy,
            state: SessionState::Playing,
        }
    }

    pub fn range(&self) -> GuessRange {
        self.range
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn policy(&self) -> AttemptPolicy {
        self.policy
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn summary(&self) -> Summary {
        Summary {
            target: self.target,
            attempts: self.attempts,
            state: self.state,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state != SessionState::Playing
    }

    /// Evaluates one raw entry and returns the message for the player.
    pub fn submit(&mut self, input: &str) -> Result<Feedback, GuessError> {
        if self.is_over() {
            return Err(GuessError::SessionOver(self.state));
        }

        let parsed = parse_guess(input);
        if parsed.is_some() || self.policy == AttemptPolicy::EveryEntry {
            self.attempts = self.attempts.saturating_add(1);
        }

        let Some(guess) = parsed else {
            debug!("rejected non-numeric entry {:?}", input);
            return Ok(Feedback::NotANumber);
        };

        if !self.range.contains(guess) {
            debug!("rejected out-of-range guess {}", guess);
            return Ok(Feedback::OutOfRange(self.range));
        }

        let target = self.target as i64;
        let feedback = if guess < target {
            Feedback::TooLow
        } else if guess > target {
            Feedback::TooHigh
        } else {
            self.state = SessionState::Won;
            info!("target {} found after {} attempts", self.target, self.attempts);
            Feedback::Correct {
                target: self.target,
                attempts: self.attempts,
            }
        };
        Ok(feedback)
    }

    /// Ends the session without a win. A finished session keeps its state.
    pub fn cancel(&mut self) -> Feedback {
        if self.state == SessionState::Playing {
            self.state = SessionState::Canceled;
            info!("session canceled after {} attempts", self.attempts);
        }
        Feedback::Canceled
    }
}
