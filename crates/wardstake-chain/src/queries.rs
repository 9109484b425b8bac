//! Chain-state query interface.

use async_trait::async_trait;

use crate::error::ChainError;
use wardstake_core::{Uward, ValidatorSummary};

/// A consistent-enough view of the staking state for one render cycle.
///
/// `bonded_tokens` and `apr` stay optional end to end: either can be
/// unavailable (endpoint down, chain without the query) and the UI still
/// renders with the documented zero defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct StakingSnapshot {
    /// The validator being staked to.
    pub validator: ValidatorSummary,
    /// Network-wide bonded token total, in uward.
    pub bonded_tokens: Option<Uward>,
    /// Yearly reward rate scaled by 10^RATE_DECIMALS.
    pub apr: Option<u128>,
}

/// The external chain-state query service.
#[async_trait]
pub trait StakingQuery: Send + Sync {
    /// Fetch one validator by operator address.
    async fn validator(&self, operator_address: &str) -> Result<ValidatorSummary, ChainError>;

    /// Fetch the network-wide bonded token total.
    async fn bonded_tokens(&self) -> Result<Option<Uward>, ChainError>;

    /// Fetch the scaled yearly reward rate, if the gateway provides one.
    async fn apr(&self) -> Result<Option<u128>, ChainError>;

    /// Assemble a full snapshot for the given validator.
    ///
    /// The validator query must succeed; bonded-token and APR failures
    /// degrade to `None` so a flaky auxiliary endpoint cannot take the
    /// whole view down.
    async fn snapshot(&self, operator_address: &str) -> Result<StakingSnapshot, ChainError> {
        let validator = self.validator(operator_address).await?;
        let bonded_tokens = match self.bonded_tokens().await {
            Ok(total) => total,
            Err(e) => {
                tracing::warn!("bonded tokens query failed: {e}");
                None
            }
        };
        let apr = match self.apr().await {
            Ok(apr) => apr,
            Err(e) => {
                tracing::warn!("APR query failed: {e}");
                None
            }
        };
        Ok(StakingSnapshot {
            validator,
            bonded_tokens,
            apr,
        })
    }
}
