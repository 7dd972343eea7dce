//! Injected randomness for the selector
//!
//! Selection never touches a global generator: callers pass a source per
//! call, which keeps concurrent selections independent and lets tests
//! script the exact draws.

use std::collections::VecDeque;

/// A source of uniform draws over `[1, total]`.
pub trait RandomSource {
    /// Draw a uniform value in the closed range `[1, total]`.
    ///
    /// Only called with `total >= 1`.
    fn draw(&mut self, total: u64) -> u64;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn draw(&mut self, total: u64) -> u64 {
        self.random_range(1..=total)
    }
}

/// Replays a fixed sequence of draws.
///
/// Deterministic stand-in for tests: supply the draws up front and assert
/// the winner, or check [`ScriptedDraws::consumed`] to prove no draw
/// happened. Out-of-range or exhausted draws clamp to the valid range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    draws: VecDeque<u64>,
    consumed: usize,
}

impl ScriptedDraws {
    #[must_use]
    pub fn new(draws: impl IntoIterator<Item = u64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of draws handed out so far.
    #[inline]
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedDraws {
    fn draw(&mut self, total: u64) -> u64 {
        self.consumed += 1;
        self.draws.pop_front().unwrap_or(total).clamp(1, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scripted_draws_replay_in_order() {
        let mut source = ScriptedDraws::new([3, 1, 2]);
        assert_eq!(source.draw(5), 3);
        assert_eq!(source.draw(5), 1);
        assert_eq!(source.draw(5), 2);
        assert_eq!(source.consumed(), 3);
    }

    #[test]
    fn test_scripted_draws_clamp_to_range() {
        let mut source = ScriptedDraws::new([99, 0]);
        assert_eq!(source.draw(4), 4);
        assert_eq!(source.draw(4), 1);
    }

    #[test]
    fn test_rng_source_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let r = RandomSource::draw(&mut rng, 10);
            assert!((1..=10).contains(&r));
        }
    }
}
