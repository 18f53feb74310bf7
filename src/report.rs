//! Tab-separated supply report
//!
//! One header row, then one data row per reporting interval. Amount
//! columns carry raw integers in smallest coin units; percentage columns
//! are fixed two-decimal; the date column is UTC derived from the
//! timestamp column.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::MONEY_SUPPLY;

/// A single report row, captured after the height's accumulation step
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub height: u64,
    pub block_reward: u64,
    pub coin_emitted: i64,
    pub emission_pct: f64,
    pub dev_fund: u64,
    pub dev_pct_emission: f64,
    pub timestamp: u64,
}

impl ReportRow {
    /// Derive the percentage columns from the raw figures
    pub fn new(height: u64, block_reward: u64, coin_emitted: i64, dev_fund: u64, timestamp: u64) -> Self {
        let emission_pct = coin_emitted as f64 * 100.0 / MONEY_SUPPLY as f64;
        let dev_pct_emission = if coin_emitted != 0 {
            dev_fund as f64 * 100.0 / coin_emitted as f64
        } else {
            0.0
        };
        Self {
            height,
            block_reward,
            coin_emitted,
            emission_pct,
            dev_fund,
            dev_pct_emission,
            timestamp,
        }
    }
}

/// Render a Unix timestamp as `YYYY-MM-DD HH:MM:SS` UTC
pub fn format_utc_date(timestamp: u64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// TSV report writer over any byte sink
pub struct TsvReport<W: Write> {
    sink: W,
}

impl<W: Write> TsvReport<W> {
    /// Wrap a sink and write the header row
    pub fn new(mut sink: W) -> io::Result<Self> {
        writeln!(
            sink,
            "height\tblock_reward\tcoin_emitted\temission_pct\tdev_fund\tdev_pct_emission\ttimestamp\tdate"
        )?;
        Ok(Self { sink })
    }

    pub fn write_row(&mut self, row: &ReportRow) -> io::Result<()> {
        writeln!(
            self.sink,
            "{}\t{}\t{}\t{:.2}\t{}\t{:.2}\t{}\t{}",
            row.height,
            row.block_reward,
            row.coin_emitted,
            row.emission_pct,
            row.dev_fund,
            row.dev_pct_emission,
            row.timestamp,
            format_utc_date(row.timestamp)
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
