//! Emission module - closed-form rewards, tabular rewards, and the dev fund

mod dev_fund;
mod rewards;
mod tabular;

pub use dev_fund::*;
pub use rewards::*;
pub use tabular::*;
