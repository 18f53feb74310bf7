//! Plateau emission simulator
//!
//! Fixed invocation: regenerates the supply report from scratch on every
//! run. No flags, no environment, no persisted state beyond the report.

use std::fs::File;
use std::io::BufWriter;

use emission_sim::constants::{COIN_EMISSION_HEIGHT_INTERVAL, OUTPUT_FILE};
use emission_sim::report::TsvReport;
use emission_sim::simulator::Simulator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", COIN_EMISSION_HEIGHT_INTERVAL);

    let file = File::create(OUTPUT_FILE)?;
    let mut report = TsvReport::new(BufWriter::new(file))?;

    let outcome = Simulator::new().run(&mut report)?;
    report.flush()?;

    println!(
        "converged at height {} with circulating supply {} ({} rows -> {})",
        outcome.final_height, outcome.circulating_supply, outcome.rows_written, OUTPUT_FILE
    );
    Ok(())
}
