//! Plateau Emission Simulator
//!
//! Re-derives, block by block, the reward schedule of a plateau-style
//! emission curve and writes a monthly time series of circulating supply.
//! Two independently expressed reward formulas (closed-form and tabular)
//! are cross-checked at every height; disagreement aborts the run.
//!
//! This is a design-verification tool, not node software. It performs no
//! validation, networking, or consensus.

pub mod emission;
pub mod report;
pub mod simulator;

/// Schedule constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Unix timestamp of block 0
    pub const START_TIMESTAMP: u64 = 1_492_486_495;

    /// Target block time in seconds
    pub const DIFFICULTY_TARGET: u64 = 240;

    /// Total money supply in smallest coin units
    pub const MONEY_SUPPLY: u64 = 88_888_888_000_000_000;

    /// Emission speed shift factor (reward = supply fraction >> this)
    pub const EMISSION_SPEED_FACTOR: u32 = 19;

    /// Tail subsidy paid forever once the money supply is reached
    pub const FINAL_SUBSIDY: u64 = 4_000_000_000;

    /// Fixed reward of block 0
    pub const GENESIS_BLOCK_REWARD: u64 = 8_800_000_000_000_000;

    /// Coins issued at genesis and deliberately destroyed;
    /// subtracted from circulating supply
    pub const PREMINE_BURN_AMOUNT: u64 = 8_700_051_446_427_001;

    /// Dev fund disbursement period in blocks (one week)
    pub const DEV_FUND_PERIOD: u64 = 15 * 24 * 7;

    /// Total dev fund amount in smallest coin units
    pub const DEV_FUND_AMOUNT: u64 = 8_000_000_000_000_000;

    /// Number of dev fund disbursements (weekly over 6 years)
    pub const DEV_FUND_LENGTH: u64 = 52 * 6;

    /// Height of the first dev fund disbursement
    pub const DEV_FUND_START: u64 = 161_500;

    /// Months per emission interval
    pub const COIN_EMISSION_MONTH_INTERVAL: u64 = 6;

    /// Seconds in an average month (30.4375 days)
    pub const SECONDS_PER_MONTH: u64 = 2_629_800;

    /// Heights per emission interval (= 65,745)
    pub const COIN_EMISSION_HEIGHT_INTERVAL: u64 =
        COIN_EMISSION_MONTH_INTERVAL * SECONDS_PER_MONTH / DIFFICULTY_TARGET;

    /// Heights per year (two 6-month intervals)
    pub const HEIGHT_PER_YEAR: u64 = 2 * COIN_EMISSION_HEIGHT_INTERVAL;

    /// Height where the reward percentage stops growing (2.5 years)
    pub const PEAK_COIN_EMISSION_HEIGHT: u64 = HEIGHT_PER_YEAR * 5 / 2;

    /// Height where the plateau ends and interval decay begins
    /// (peak + 1 year)
    pub const PEAK_COIN_EMISSION_HEIGHT_END: u64 =
        PEAK_COIN_EMISSION_HEIGHT + HEIGHT_PER_YEAR;

    /// Non-genesis, non-tail rewards are truncated to a multiple of this
    pub const REWARD_ROUND_FACTOR: u64 = 10_000_000;

    /// The simulation stops once circulating supply exceeds
    /// MONEY_SUPPLY by this margin
    pub const SUPPLY_CONVERGENCE_MARGIN: u64 = 500_000;

    /// A report row is written every this many heights (~1 month)
    pub const REPORT_HEIGHT_INTERVAL: u64 = COIN_EMISSION_HEIGHT_INTERVAL / 6;

    /// Fixed name of the output report, truncated and rewritten each run
    pub const OUTPUT_FILE: &str = "plateau-emission.tsv";
}
