//! Closed-form block reward calculation
//!
//! Deterministic reward function implementing the plateau emission curve:
//! a quadratic ramp of the supply percentage over 6-month intervals,
//! clamped at 2.5 years to form a 1-year plateau, followed by a fixed
//! 6.53% per-interval decay down to the tail subsidy.

use crate::constants::{
    COIN_EMISSION_HEIGHT_INTERVAL, EMISSION_SPEED_FACTOR, FINAL_SUBSIDY, GENESIS_BLOCK_REWARD,
    MONEY_SUPPLY, PEAK_COIN_EMISSION_HEIGHT, PEAK_COIN_EMISSION_HEIGHT_END, REWARD_ROUND_FACTOR,
};

/// Per-interval decay numerator applied after the plateau (6.53%)
const DECAY_NUMERATOR: u64 = 653;

/// Per-interval decay denominator
const DECAY_DENOMINATOR: u64 = 10_000;

/// Truncate a reward down to the nearest multiple of the rounding granularity
fn round_reward(reward: u64) -> u64 {
    reward / REWARD_ROUND_FACTOR * REWARD_ROUND_FACTOR
}

/// Reward in the ramp/plateau regime, already rounded.
///
/// The interval index is clamped at PEAK_COIN_EMISSION_HEIGHT, so every
/// height from the peak through the plateau end yields the same value.
/// The percentage is evaluated in f64 on purpose: the schedule is defined
/// by the truncated double product, not by exact rational arithmetic.
fn plateau_reward(height: u64) -> u64 {
    let interval_num = height.min(PEAK_COIN_EMISSION_HEIGHT) / COIN_EMISSION_HEIGHT_INTERVAL;
    let n = interval_num as f64;
    let money_supply_pct = 0.1888 + n * (0.023 + n * 0.0032);
    let base_reward = ((MONEY_SUPPLY as f64 * money_supply_pct) as u64) >> EMISSION_SPEED_FACTOR;
    round_reward(base_reward)
}

/// Calculate the block reward at a given height (closed form).
///
/// This is a pure, deterministic function.
///
/// # Arguments
/// * `height` - Block height, starting at 0
/// * `already_generated_coins` - Sum of all rewards emitted before this block
///
/// # Returns
/// Reward in smallest coin units
pub fn base_reward_compute(height: u64, already_generated_coins: u64) -> u64 {
    // Genesis bypasses the curve entirely
    if height == 0 {
        return GENESIS_BLOCK_REWARD;
    }

    if height < PEAK_COIN_EMISSION_HEIGHT_END {
        return plateau_reward(height);
    }

    if already_generated_coins >= MONEY_SUPPLY {
        return FINAL_SUBSIDY;
    }

    // Post-plateau: zero-based interval index counted from the plateau end.
    // Decay starts from the plateau value (the peak height is clamped to the
    // same interval as every later plateau height) and applies one 6.53%
    // step per elapsed interval, stopping before any step that would fall
    // below the tail subsidy.
    let interval_num = (height - PEAK_COIN_EMISSION_HEIGHT_END) / COIN_EMISSION_HEIGHT_INTERVAL;
    let mut base_reward = plateau_reward(PEAK_COIN_EMISSION_HEIGHT);
    for _ in 0..=interval_num {
        let reward_decrease = base_reward * DECAY_NUMERATOR / DECAY_DENOMINATOR;
        if base_reward - reward_decrease < FINAL_SUBSIDY {
            break;
        }
        base_reward -= reward_decrease;
    }

    round_reward(base_reward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HEIGHT_PER_YEAR;

    #[test]
    fn test_genesis_reward_is_fixed() {
        assert_eq!(base_reward_compute(0, 0), GENESIS_BLOCK_REWARD);
        // already_generated_coins is irrelevant at height 0
        assert_eq!(base_reward_compute(0, MONEY_SUPPLY), GENESIS_BLOCK_REWARD);
    }

    #[test]
    fn test_first_interval_reward() {
        // floor(88888888000000000 * 0.1888) >> 19, truncated to 10^7
        assert_eq!(base_reward_compute(1, 0), 32_000_000_000);
        assert_eq!(
            base_reward_compute(COIN_EMISSION_HEIGHT_INTERVAL - 1, 0),
            32_000_000_000
        );
    }

    #[test]
    fn test_ramp_increases_per_interval() {
        let mut prev = 0;
        for interval in 0..5 {
            let reward = base_reward_compute(interval * COIN_EMISSION_HEIGHT_INTERVAL + 1, 0);
            assert!(reward > prev, "ramp must grow at interval {}", interval);
            prev = reward;
        }
    }

    #[test]
    fn test_plateau_is_flat_for_a_full_year() {
        let peak_reward = base_reward_compute(PEAK_COIN_EMISSION_HEIGHT, 0);
        assert_eq!(peak_reward, 65_070_000_000);
        for height in [
            PEAK_COIN_EMISSION_HEIGHT,
            PEAK_COIN_EMISSION_HEIGHT + HEIGHT_PER_YEAR / 2,
            PEAK_COIN_EMISSION_HEIGHT_END - 1,
        ] {
            assert_eq!(base_reward_compute(height, 0), peak_reward);
        }
    }

    #[test]
    fn test_first_decay_interval() {
        assert_eq!(
            base_reward_compute(PEAK_COIN_EMISSION_HEIGHT_END, 0),
            60_820_000_000
        );
        assert_eq!(
            base_reward_compute(
                PEAK_COIN_EMISSION_HEIGHT_END + COIN_EMISSION_HEIGHT_INTERVAL,
                0
            ),
            56_840_000_000
        );
    }

    #[test]
    fn test_decay_never_falls_below_tail_subsidy() {
        // Far past the schedule the decay loop must bottom out, not underflow
        let reward = base_reward_compute(100 * COIN_EMISSION_HEIGHT_INTERVAL, 0);
        assert_eq!(reward, 4_080_000_000);
        assert!(reward >= FINAL_SUBSIDY);
    }

    #[test]
    fn test_decay_is_monotonic_downward() {
        let mut prev = u64::MAX;
        for interval in 0..60 {
            let height =
                PEAK_COIN_EMISSION_HEIGHT_END + interval * COIN_EMISSION_HEIGHT_INTERVAL;
            let reward = base_reward_compute(height, 0);
            assert!(reward <= prev);
            prev = reward;
        }
    }

    #[test]
    fn test_tail_regime_once_supply_reached() {
        assert_eq!(
            base_reward_compute(PEAK_COIN_EMISSION_HEIGHT_END, MONEY_SUPPLY),
            FINAL_SUBSIDY
        );
        assert_eq!(
            base_reward_compute(10_000_000, MONEY_SUPPLY + 1),
            FINAL_SUBSIDY
        );
    }

    #[test]
    fn test_rewards_are_rounding_granularity_multiples() {
        for height in [1, 65_745, 328_725, 460_215, 1_000_000, 3_000_000] {
            let reward = base_reward_compute(height, 0);
            assert_eq!(reward % REWARD_ROUND_FACTOR, 0, "height {}", height);
        }
    }
}
