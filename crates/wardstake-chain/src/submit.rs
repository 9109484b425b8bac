//! Transaction submission interface.

use async_trait::async_trait;

use crate::error::ChainError;
use wardstake_core::Uward;

/// Outcome of a broadcast staking transaction.
///
/// `code` follows the Cosmos ABCI convention: zero means the node
/// accepted the transaction, anything else is a rejection with details in
/// `raw_log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxResult {
    /// Transaction hash as reported by the node.
    pub tx_hash: String,
    /// ABCI response code.
    pub code: u32,
    /// Node log output, present on rejection.
    pub raw_log: Option<String>,
}

impl TxResult {
    /// Whether the node accepted the transaction.
    pub fn is_accepted(&self) -> bool {
        self.code == 0
    }
}

/// The external transaction submission service.
///
/// Implementations hand the request to whatever signs and broadcasts
/// (the signer bridge in production, a double in tests). The caller does
/// not retry; a returned error is reported upward once and dropped.
#[async_trait]
pub trait StakeSubmitter: Send + Sync {
    /// Submit a staking transaction for `amount_uward` to the validator
    /// at `validator_address`.
    async fn submit_stake_tx(
        &self,
        amount_uward: Uward,
        validator_address: &str,
    ) -> Result<TxResult, ChainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_result_accepted() {
        let res = TxResult {
            tx_hash: "ABC123".into(),
            code: 0,
            raw_log: None,
        };
        assert!(res.is_accepted());
    }

    #[test]
    fn test_tx_result_rejected() {
        let res = TxResult {
            tx_hash: "ABC123".into(),
            code: 5,
            raw_log: Some("insufficient funds".into()),
        };
        assert!(!res.is_accepted());
    }
}
