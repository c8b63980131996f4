//! Synthetic refresh noise.
//!
//! A refresh in normal mode does not fetch anything; it perturbs the base
//! tables with bounded random deltas so the dashboard looks alive. All
//! randomness flows through [`JitterRng`] (a seedable ChaCha8 wrapper) so
//! tests can pin the seed and assert exact output.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::{EnergySplit, TrainStatus};

/// Six-slot pool a refreshed train status is drawn from. "On Time" holds
/// three of the six slots; that weighting is what keeps the board looking
/// mostly green and must not be collapsed to one slot per label.
const STATUS_POOL: [TrainStatus; 6] = [
    TrainStatus::OnTime,
    TrainStatus::OnTime,
    TrainStatus::OnTime,
    TrainStatus::Delayed { minutes: 2 },
    TrainStatus::Delayed { minutes: 3 },
    TrainStatus::Early { minutes: 1 },
];

/// Seedable random source for all synthetic-refresh noise.
pub struct JitterRng(ChaCha8Rng);

impl JitterRng {
    /// Deterministic source; identical seeds produce identical refreshes.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    /// Perturb a count by a uniform integer delta in `[-spread, +spread]`,
    /// never dropping below `floor`.
    pub fn jitter_count(&mut self, base: u32, spread: i32, floor: u32) -> u32 {
        let delta = self.0.gen_range(-spread..=spread) as i64;
        (base as i64 + delta).max(floor as i64) as u32
    }

    /// Perturb a percentage by a uniform real delta in `[-spread, +spread)`,
    /// clamped to `[min, max]`.
    pub fn jitter_pct(&mut self, base: f64, spread: f64, min: f64, max: f64) -> f64 {
        let delta = self.0.gen_range(-spread..spread);
        (base + delta).clamp(min, max)
    }

    /// Perturb a cost figure by a uniform integer delta in
    /// `[-spread, +spread]`, unclamped.
    pub fn jitter_cost(&mut self, base: i32, spread: i32) -> i32 {
        base + self.0.gen_range(-spread..=spread)
    }

    /// Draw a status from the weighted pool.
    pub fn draw_status(&mut self) -> TrainStatus {
        STATUS_POOL[self.0.gen_range(0..STATUS_POOL.len())]
    }

    /// Fresh energy split: saved share is a uniform integer percentage in
    /// `[15, 24]`, the remainder is standard usage.
    pub fn draw_energy_split(&mut self) -> EnergySplit {
        let saved_pct = self.0.gen_range(15..=24u8);
        EnergySplit {
            saved_pct,
            standard_pct: 100 - saved_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_seeds_produce_identical_streams() {
        let mut a = JitterRng::from_seed_u64(42);
        let mut b = JitterRng::from_seed_u64(42);
        for _ in 0..50 {
            assert_eq!(a.jitter_count(300, 30, 50), b.jitter_count(300, 30, 50));
            assert_eq!(a.draw_status(), b.draw_status());
        }
    }

    #[test]
    fn count_jitter_stays_in_band() {
        let mut rng = JitterRng::from_seed_u64(7);
        for _ in 0..500 {
            let v = rng.jitter_count(300, 30, 50);
            assert!((270..=330).contains(&v));
        }
    }

    #[test]
    fn count_jitter_respects_floor() {
        let mut rng = JitterRng::from_seed_u64(7);
        for _ in 0..500 {
            assert!(rng.jitter_count(60, 30, 50) >= 50);
        }
    }

    #[test]
    fn pct_jitter_clamps() {
        let mut rng = JitterRng::from_seed_u64(11);
        for _ in 0..500 {
            let v = rng.jitter_pct(95.0, 10.0, 50.0, 100.0);
            assert!((85.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn cost_jitter_is_unclamped_but_bounded() {
        let mut rng = JitterRng::from_seed_u64(13);
        for _ in 0..500 {
            let v = rng.jitter_cost(2400, 200);
            assert!((2200..=2600).contains(&v));
        }
    }

    #[test]
    fn statuses_come_from_the_pool_with_on_time_majority() {
        let mut rng = JitterRng::from_seed_u64(17);
        let mut on_time = 0usize;
        for _ in 0..600 {
            let status = rng.draw_status();
            assert!(STATUS_POOL.contains(&status));
            if status == TrainStatus::OnTime {
                on_time += 1;
            }
        }
        // Expected frequency is 1/2 (three of six slots); the seed is fixed
        // so this band is stable.
        assert!((240..=360).contains(&on_time), "on_time = {on_time}");
    }

    #[test]
    fn energy_split_is_consistent() {
        let mut rng = JitterRng::from_seed_u64(19);
        for _ in 0..200 {
            let split = rng.draw_energy_split();
            assert!((15..=24).contains(&split.saved_pct));
            assert_eq!(split.saved_pct + split.standard_pct, 100);
        }
    }
}
