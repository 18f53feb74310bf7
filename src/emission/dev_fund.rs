//! Dev fund vesting schedule
//!
//! A fixed installment disbursed at every period boundary inside the
//! vesting window. The fund is not part of mined emission but counts
//! toward circulating supply.

use crate::constants::{DEV_FUND_AMOUNT, DEV_FUND_LENGTH, DEV_FUND_PERIOD, DEV_FUND_START};

/// Dev fund disbursement at a given height, or 0 if this height is not a
/// disbursement boundary inside the vesting window.
pub fn dev_fund_amount(height: u64) -> u64 {
    if height < DEV_FUND_START {
        return 0;
    }

    let relative_height = height - DEV_FUND_START;

    if relative_height / DEV_FUND_PERIOD >= DEV_FUND_LENGTH {
        return 0;
    }
    if relative_height % DEV_FUND_PERIOD != 0 {
        return 0;
    }

    DEV_FUND_AMOUNT / DEV_FUND_LENGTH
}
