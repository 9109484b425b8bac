//! Actions for state updates.

use wardstake_chain::{StakingSnapshot, TxResult};
use wardstake_core::StakeRequest;

/// Actions flowing between the UI and the chain task.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Re-fetch the staking snapshot.
    Refresh,
    /// Fresh staking data arrived.
    SetSnapshot(Box<StakingSnapshot>),
    /// Snapshot refresh failed.
    SnapshotFailed(String),
    /// Hand a stake request to the submission service.
    SubmitStake(StakeRequest),
    /// The submission service broadcast the transaction.
    StakeAccepted(TxResult),
    /// The submission service reported a failure.
    StakeFailed(String),
}
