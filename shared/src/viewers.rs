//! # Viewer-Count Simulator
//!
//! Cosmetic random walk behind the "N viewers" overlay on the live feed.
//! Each step adds a uniform delta in `[-5, +4]`. There is no floor or
//! ceiling, so a long session may drift negative.

use rand::Rng;

use crate::catalog::INITIAL_VIEWER_COUNT;
use crate::utils::format_thousands;

/// Smallest delta a single step can apply.
pub const MIN_STEP: i64 = -5;
/// Largest delta a single step can apply.
pub const MAX_STEP: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerCount(i64);

impl Default for ViewerCount {
    fn default() -> Self {
        Self(INITIAL_VIEWER_COUNT)
    }
}

impl ViewerCount {
    pub fn new(count: i64) -> Self {
        Self(count)
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    /// Apply one random step and return the delta used.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> i64 {
        let delta = rng.gen_range(0..10) - 5;
        self.0 = self.0.saturating_add(delta);
        delta
    }

    /// Overlay text, e.g. `1,234 viewers`.
    pub fn label(&self) -> String {
        format!("{} viewers", format_thousands(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_starts_at_initial_count() {
        assert_eq!(ViewerCount::default().get(), 1234);
        assert_eq!(ViewerCount::default().label(), "1,234 viewers");
    }

    #[test]
    fn test_step_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut count = ViewerCount::default();
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2_000 {
            let before = count.get();
            let delta = count.step(&mut rng);
            assert!((MIN_STEP..=MAX_STEP).contains(&delta));
            assert_eq!(count.get(), before + delta);
            seen_min |= delta == MIN_STEP;
            seen_max |= delta == MAX_STEP;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_no_floor() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut count = ViewerCount::new(0);
        let went_negative = (0..500).any(|_| {
            count.step(&mut rng);
            count.get() < 0
        });
        assert!(went_negative);
        assert!(ViewerCount::new(-12).label().starts_with("-12 "));
    }
}
