//! Chain boundary for wardstake.
//!
//! Defines the two seams to external collaborators: the transaction
//! submission interface (`StakeSubmitter`) and the chain-state query
//! interface (`StakingQuery`), plus the shipped HTTP/JSON implementation
//! (`RestClient`). Signing, key management and the protobuf codec all
//! live on the far side of these seams.

pub mod error;
pub mod queries;
pub mod rest;
pub mod submit;

pub use error::*;
pub use queries::{StakingQuery, StakingSnapshot};
pub use rest::RestClient;
pub use submit::{StakeSubmitter, TxResult};
