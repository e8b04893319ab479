use log::trace;
use system::range::{GuessRange, RangeError};

const MULTIPLIER: u32 = 1664525;
const INCREMENT: u32 = 1013904223;

/// 32-bit linear congruential generator, `s = (a * s + c) mod 2^32`.
#[derive(Debug, Clone)]
pub struct Lcg {
    seed: u32,
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { seed, state: seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    pub fn next_in(&mut self, range: GuessRange) -> i32 {
        let offset = self.next_u32() as u64 % range.span();
        let value = (range.min() as i64 + offset as i64) as i32;
        trace!("lcg state={} value={}", self.state, value);
        value
    }

    /// Draws a value in `[min, max]`. Fails without advancing the state when `max < min`.
    pub fn next_in_range(&mut self, min: i32, max: i32) -> Result<i32, RangeError> {
        let range = GuessRange::new(min, max)?;
        Ok(self.next_in(range))
    }
}

/// Generator closure owning its own state, one draw per call.
pub fn create_generator(seed: u32) -> impl FnMut(i32, i32) -> Result<i32, RangeError> {
    let mut lcg = Lcg::new(seed);
    move |min, max| lcg.next_in_range(min, max)
}
