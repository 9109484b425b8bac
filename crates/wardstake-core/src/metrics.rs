//! Derived staking metrics.
//!
//! Pure functions of externally supplied chain data. Each is total over
//! well-formed inputs: missing or zero denominators yield zero instead of
//! failing, since the modal must render with whatever data has arrived.

use crate::types::{Uward, ValidatorSummary};

/// Decimal places of the scaled APR rate supplied by the chain gateway.
///
/// The rate arrives as `floor(apr * 10^RATE_DECIMALS)`. Kept separate from
/// display precision and overridable per call.
pub const RATE_DECIMALS: u32 = 18;

/// A validator's share of total network-bonded stake, in percent.
///
/// Yields 0.0 when the network total is unknown or zero.
pub fn voting_power_percent(tokens: Uward, bonded_tokens: Option<Uward>) -> f64 {
    match bonded_tokens {
        Some(total) if total > 0 => 100.0 * tokens as f64 / total as f64,
        _ => 0.0,
    }
}

/// Annual percentage rate for display, from a scaled integer rate.
///
/// `apr` is a fractional per-year rate scaled by `10^decimals`; a missing
/// rate is treated as zero. The result is in percent (rate * 100).
pub fn apr_percent(apr: Option<u128>, decimals: u32) -> f64 {
    let rate = apr.unwrap_or(0) as f64 / 10f64.powi(decimals as i32);
    rate * 100.0
}

/// Commission rate in percent. A missing rate is treated as zero.
pub fn commission_percent(rate: Option<f64>) -> f64 {
    rate.unwrap_or(0.0) * 100.0
}

/// Metrics derived for one render pass of the stake modal.
///
/// Recomputed from current chain data on every render; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    /// Validator's share of network-bonded stake, in percent.
    pub voting_power_percent: f64,
    /// Expected APR, in percent.
    pub apr_percent: f64,
}

impl DerivedMetrics {
    /// Compute display metrics from the current validator and network data.
    pub fn compute(
        validator: &ValidatorSummary,
        bonded_tokens: Option<Uward>,
        apr: Option<u128>,
        rate_decimals: u32,
    ) -> Self {
        Self {
            voting_power_percent: voting_power_percent(validator.tokens, bonded_tokens),
            apr_percent: apr_percent(apr, rate_decimals),
        }
    }
}
