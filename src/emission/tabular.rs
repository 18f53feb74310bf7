//! Tabular block reward calculation
//!
//! The intended emission curve written out as literal per-interval values.
//! This is the authoritative schedule; the closed-form function in
//! `rewards` must reproduce it exactly at every height the simulation
//! visits.

use crate::constants::{
    COIN_EMISSION_HEIGHT_INTERVAL, FINAL_SUBSIDY, GENESIS_BLOCK_REWARD, MONEY_SUPPLY,
};

/// Reward per 6-month emission interval, smallest coin units.
///
/// Entries 0..=4 are the quadratic ramp, 5..=6 the plateau year, and the
/// rest the 6.53% per-interval decay down to just above the tail subsidy.
const BLOCK_REWARDS: [u64; 48] = [
    32_000_000_000,
    36_450_000_000,
    41_970_000_000,
    48_590_000_000,
    56_280_000_000,
    65_070_000_000,
    65_070_000_000,
    60_820_000_000,
    56_840_000_000,
    53_130_000_000,
    49_660_000_000,
    46_420_000_000,
    43_390_000_000,
    40_550_000_000,
    37_910_000_000,
    35_430_000_000,
    33_120_000_000,
    30_950_000_000,
    28_930_000_000,
    27_040_000_000,
    25_280_000_000,
    23_630_000_000,
    22_080_000_000,
    20_640_000_000,
    19_290_000_000,
    18_030_000_000,
    16_850_000_000,
    15_750_000_000,
    14_720_000_000,
    13_760_000_000,
    12_860_000_000,
    12_020_000_000,
    11_240_000_000,
    10_500_000_000,
    9_820_000_000,
    9_180_000_000,
    8_580_000_000,
    8_020_000_000,
    7_490_000_000,
    7_000_000_000,
    6_540_000_000,
    6_120_000_000,
    5_720_000_000,
    5_340_000_000,
    4_990_000_000,
    4_670_000_000,
    4_360_000_000,
    4_080_000_000,
];

/// Calculate the block reward at a given height (table lookup).
///
/// Same contract as [`base_reward_compute`](crate::emission::base_reward_compute):
/// genesis and tail are handled specially, otherwise the interval index is
/// clamped to the last table entry.
pub fn base_reward_tabular(height: u64, already_generated_coins: u64) -> u64 {
    let interval_num =
        (height / COIN_EMISSION_HEIGHT_INTERVAL).min(BLOCK_REWARDS.len() as u64 - 1);

    if height == 0 {
        GENESIS_BLOCK_REWARD
    } else if already_generated_coins < MONEY_SUPPLY {
        BLOCK_REWARDS[interval_num as usize]
    } else {
        FINAL_SUBSIDY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REWARD_ROUND_FACTOR;

    #[test]
    fn test_genesis_overrides_table() {
        assert_eq!(base_reward_tabular(0, 0), GENESIS_BLOCK_REWARD);
    }

    #[test]
    fn test_interval_boundaries() {
        assert_eq!(base_reward_tabular(1, 0), BLOCK_REWARDS[0]);
        assert_eq!(
            base_reward_tabular(COIN_EMISSION_HEIGHT_INTERVAL - 1, 0),
            BLOCK_REWARDS[0]
        );
        assert_eq!(
            base_reward_tabular(COIN_EMISSION_HEIGHT_INTERVAL, 0),
            BLOCK_REWARDS[1]
        );
    }

    #[test]
    fn test_clamps_past_end_of_table() {
        let last = BLOCK_REWARDS[BLOCK_REWARDS.len() - 1];
        assert_eq!(
            base_reward_tabular(1000 * COIN_EMISSION_HEIGHT_INTERVAL, 0),
            last
        );
    }

    #[test]
    fn test_tail_once_supply_reached() {
        assert_eq!(base_reward_tabular(5_000_000, MONEY_SUPPLY), FINAL_SUBSIDY);
        assert_eq!(
            base_reward_tabular(50_000_000, MONEY_SUPPLY + FINAL_SUBSIDY),
            FINAL_SUBSIDY
        );
    }

    #[test]
    fn test_table_values_are_rounded_and_descend_after_plateau() {
        for (i, reward) in BLOCK_REWARDS.iter().enumerate() {
            assert_eq!(reward % REWARD_ROUND_FACTOR, 0, "entry {}", i);
        }
        for window in BLOCK_REWARDS[5..].windows(2) {
            assert!(window[1] <= window[0]);
        }
    }
}
