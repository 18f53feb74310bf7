//! Simulation driver
//!
//! Iterates height from genesis until circulating supply converges on the
//! total money supply, cross-checking the two reward formulas at every
//! height and emitting a report row roughly once per simulated month.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::constants::{
    DIFFICULTY_TARGET, FINAL_SUBSIDY, MONEY_SUPPLY, PREMINE_BURN_AMOUNT, REPORT_HEIGHT_INTERVAL,
    START_TIMESTAMP, SUPPLY_CONVERGENCE_MARGIN,
};
use crate::emission::{base_reward_compute, base_reward_tabular, dev_fund_amount};
use crate::report::{ReportRow, TsvReport};

/// Simulation errors
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The two reward formulas disagreed. This is a logic defect in one of
    /// them (or in the constants), never a recoverable condition.
    #[error("reward mismatch at height {height}: tabular {tabular}, closed-form {computed}")]
    RewardMismatch {
        height: u64,
        tabular: u64,
        computed: u64,
    },
    #[error("report write failed: {0}")]
    Report(#[from] std::io::Error),
}

/// Supply state the first time the reward hit the tail subsidy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TailCrossing {
    pub height: u64,
    /// Circulating supply before that height's reward was added
    pub circulating_supply: i64,
}

/// Final accumulator state of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    pub final_height: u64,
    pub already_generated_coins: u64,
    pub dev_fund: u64,
    pub circulating_supply: i64,
    pub rows_written: u64,
    pub tail_crossing: Option<TailCrossing>,
}

/// Run-scoped simulation state
pub struct Simulator {
    height: u64,
    timestamp: u64,
    already_generated_coins: u64,
    dev_fund: u64,
    circulating_supply: i64,
    rows_written: u64,
    tail_crossing: Option<TailCrossing>,
}

impl Simulator {
    pub fn new() -> Self {
        Self {
            height: 0,
            timestamp: START_TIMESTAMP,
            already_generated_coins: 0,
            dev_fund: 0,
            circulating_supply: 0,
            rows_written: 0,
            tail_crossing: None,
        }
    }

    /// Drive the simulation to convergence, writing rows to `report`.
    ///
    /// Terminates once circulating supply exceeds MONEY_SUPPLY by the
    /// convergence margin, a few simulated years into the tail regime.
    pub fn run<W: Write>(
        mut self,
        report: &mut TsvReport<W>,
    ) -> Result<SimulationOutcome, SimulationError> {
        let target = (MONEY_SUPPLY + SUPPLY_CONVERGENCE_MARGIN) as i64;
        while self.circulating_supply < target {
            self.step(report)?;
        }
        Ok(SimulationOutcome {
            final_height: self.height,
            already_generated_coins: self.already_generated_coins,
            dev_fund: self.dev_fund,
            circulating_supply: self.circulating_supply,
            rows_written: self.rows_written,
            tail_crossing: self.tail_crossing,
        })
    }

    /// Advance the simulation by one block
    fn step<W: Write>(&mut self, report: &mut TsvReport<W>) -> Result<(), SimulationError> {
        let block_reward = base_reward_tabular(self.height, self.already_generated_coins);
        let computed = base_reward_compute(self.height, self.already_generated_coins);
        if block_reward != computed {
            return Err(SimulationError::RewardMismatch {
                height: self.height,
                tabular: block_reward,
                computed,
            });
        }

        let dev_block_reward = dev_fund_amount(self.height);

        if block_reward == FINAL_SUBSIDY && self.tail_crossing.is_none() {
            // Supply as it stood before this height's accumulation
            self.tail_crossing = Some(TailCrossing {
                height: self.height,
                circulating_supply: self.circulating_supply,
            });
            println!(
                "circulating supply at tail: {:.2}",
                self.circulating_supply as f64 / 1_000_000_000.0
            );
        }

        // The burned premine is still part of already_generated_coins, so
        // the dev fund is accumulated separately and only joins the sum in
        // the circulating supply figure.
        self.already_generated_coins += block_reward;
        self.dev_fund += dev_block_reward;
        self.circulating_supply =
            (self.already_generated_coins + self.dev_fund) as i64 - PREMINE_BURN_AMOUNT as i64;

        if self.height % REPORT_HEIGHT_INTERVAL == 0 {
            report.write_row(&ReportRow::new(
                self.height,
                block_reward,
                self.circulating_supply,
                self.dev_fund,
                self.timestamp,
            ))?;
            self.rows_written += 1;
        }

        self.timestamp += DIFFICULTY_TARGET;
        self.height += 1;
        Ok(())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
