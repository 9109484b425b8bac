//! Formatted detail strings for UI frontends.
//!
//! Computation precision lives in `metrics`; this module fixes the
//! display precision (2 decimals for voting power and APR, 1 for
//! commission) so frontends render consistently.

use crate::metrics::{DerivedMetrics, commission_percent};
use crate::types::{UNBONDING_PERIOD_DAYS, Uward, ValidatorSummary};

/// Formatted rows for the stake modal's details section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeDetails {
    /// Validator display name.
    pub validator: String,
    /// Commission, e.g. `5.0%`.
    pub commission: String,
    /// Voting power, e.g. `10.00%`.
    pub voting_power: String,
    /// Expected APR, e.g. `13.00%`.
    pub expected_apr: String,
    /// Unbonding period, e.g. `21 days`.
    pub unbonding_period: String,
}

impl StakeDetails {
    /// Build the detail rows from current chain data.
    pub fn new(
        validator: &ValidatorSummary,
        bonded_tokens: Option<Uward>,
        apr: Option<u128>,
        rate_decimals: u32,
    ) -> Self {
        let metrics = DerivedMetrics::compute(validator, bonded_tokens, apr, rate_decimals);
        Self {
            validator: validator.display_name().to_string(),
            commission: format!(
                "{:.1}%",
                commission_percent(Some(validator.commission_rate))
            ),
            voting_power: format!("{:.2}%", metrics.voting_power_percent),
            expected_apr: format!("{:.2}%", metrics.apr_percent),
            unbonding_period: format!("{} days", UNBONDING_PERIOD_DAYS),
        }
    }
}
