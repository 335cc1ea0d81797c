//! Random sources for strike, mitigation and poison rolls.
//!
//! The engine never reaches for a global generator: every roll goes through
//! the [`RandomSource`] carried by [`super::Env`]. Production code uses the
//! seeded [`PcgRandom`]; tests substitute [`ScriptedRandom`] to force exact
//! outcomes without touching call sites.

use std::collections::VecDeque;

/// Source of bounded, uniformly distributed integers.
///
/// Both draw methods use an exclusive upper bound. Implementors only need
/// [`next_u32`](Self::next_u32); stubs override [`draw_range`](Self::draw_range)
/// to return scripted values.
pub trait RandomSource {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Draw a value in `[0, max_exclusive)`.
    fn draw(&mut self, max_exclusive: u32) -> u32 {
        self.draw_range(0, max_exclusive)
    }

    /// Draw a value in `[min_inclusive, max_exclusive)`.
    ///
    /// An empty or single-value range yields `min_inclusive`.
    fn draw_range(&mut self, min_inclusive: u32, max_exclusive: u32) -> u32 {
        if max_exclusive <= min_inclusive.saturating_add(1) {
            return min_inclusive;
        }
        let span = max_exclusive - min_inclusive;
        min_inclusive + (self.next_u32() % span)
    }

    /// One-in-`odds` chance: true when `draw(0, odds) == 0`.
    fn one_in(&mut self, odds: u32) -> bool {
        self.draw(odds) == 0
    }

    /// Percentage check: true when `draw(1, 101) <= percent`.
    fn roll_percent(&mut self, percent: u8) -> bool {
        self.draw_range(1, 101) <= u32::from(percent)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn draw_range(&mut self, min_inclusive: u32, max_exclusive: u32) -> u32 {
        (**self).draw_range(min_inclusive, max_exclusive)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn draw_range(&mut self, min_inclusive: u32, max_exclusive: u32) -> u32 {
        (**self).draw_range(min_inclusive, max_exclusive)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output. Same seed, same
/// sequence, which is what save-free replays and regression tests rely on.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRandom {
    state: u64,
}

impl PcgRandom {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    pub fn new(seed: u64) -> Self {
        // Mix the seed once so that small consecutive seeds diverge immediately.
        let mut state = seed ^ 0x9e37_79b9_7f4a_7c15;
        state ^= state >> 33;
        state = state.wrapping_mul(0xff51_afd7_ed55_8ccd);
        state ^= state >> 33;
        Self { state }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRandom {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// What a [`ScriptedRandom`] returns once its script is exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Fallback {
    /// Return `max_exclusive - 1`: one-in-N checks never fire, 100% checks still pass.
    #[default]
    Highest,
    /// Return `min_inclusive`: one-in-N checks always fire.
    Lowest,
}

/// Deterministic random source that replays a fixed script of draws.
///
/// Each call to [`RandomSource::draw_range`] consumes one scripted value,
/// clamped into the requested range. Once the script runs out the
/// [`Fallback`] decides every further draw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedRandom {
    script: VecDeque<u32>,
    fallback: Fallback,
    draws: usize,
}

impl ScriptedRandom {
    /// Creates a source replaying `values` in order, then falling back to the highest value.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: values.into_iter().collect(),
            fallback: Fallback::Highest,
            draws: 0,
        }
    }

    /// Source whose every draw returns the top of the requested range.
    pub fn highest() -> Self {
        Self::new([])
    }

    /// Source whose every draw returns the bottom of the requested range.
    pub fn lowest() -> Self {
        Self::new([]).with_fallback(Fallback::Lowest)
    }

    /// Sets the behaviour once the script is exhausted (builder pattern).
    #[must_use]
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Appends further values to the script.
    pub fn push(&mut self, values: impl IntoIterator<Item = u32>) {
        self.script.extend(values);
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Total number of draws served so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        match (self.script.pop_front(), self.fallback) {
            (Some(value), _) => value,
            (None, Fallback::Highest) => u32::MAX,
            (None, Fallback::Lowest) => 0,
        }
    }

    fn draw_range(&mut self, min_inclusive: u32, max_exclusive: u32) -> u32 {
        self.draws += 1;
        let top = max_exclusive.saturating_sub(1).max(min_inclusive);
        match (self.script.pop_front(), self.fallback) {
            (Some(value), _) => value.clamp(min_inclusive, top),
            (None, Fallback::Highest) => top,
            (None, Fallback::Lowest) => min_inclusive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let mut a = PcgRandom::new(42);
        let mut b = PcgRandom::new(42);
        let mut c = PcgRandom::new(43);

        let seq_a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        let seq_c: Vec<u32> = (0..8).map(|_| c.next_u32()).collect();

        assert_eq!(seq_a, seq_b);
        assert_ne!(seq_a, seq_c);
    }

    #[test]
    fn pcg_draws_stay_in_bounds() {
        let mut rng = PcgRandom::new(7);
        for _ in 0..1_000 {
            assert!(rng.draw(10) < 10);
            let value = rng.draw_range(1, 101);
            assert!((1..101).contains(&value));
        }
    }

    #[test]
    fn degenerate_ranges_return_minimum() {
        let mut rng = PcgRandom::new(1);
        assert_eq!(rng.draw(1), 0);
        assert_eq!(rng.draw(0), 0);
        assert_eq!(rng.draw_range(5, 5), 5);
        assert!(rng.one_in(1));
    }

    #[test]
    fn scripted_values_are_clamped_then_fall_back() {
        let mut rng = ScriptedRandom::new([0, 50, 500]);

        assert_eq!(rng.draw(10), 0);
        assert_eq!(rng.draw_range(1, 101), 50);
        assert_eq!(rng.draw(2), 1);
        assert_eq!(rng.remaining(), 0);

        // Highest fallback
        assert_eq!(rng.draw(10), 9);
        assert_eq!(rng.draw_range(1, 101), 100);
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn lowest_fallback_fires_every_one_in_check() {
        let mut rng = ScriptedRandom::lowest();
        assert!(rng.one_in(10));
        assert!(rng.one_in(1_000));
        assert!(rng.roll_percent(1));
        assert!(!rng.roll_percent(0));
    }

    #[test]
    fn highest_fallback_never_fires_one_in_checks() {
        let mut rng = ScriptedRandom::highest();
        assert!(!rng.one_in(2));
        assert!(rng.one_in(1));
        assert!(rng.roll_percent(100));
        assert!(!rng.roll_percent(99));
    }
}
