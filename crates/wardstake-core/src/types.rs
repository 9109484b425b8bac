//! Core domain types for staking.

use serde::{Deserialize, Serialize};

/// Balance in the chain's minimal denomination (uward).
pub type Uward = u128;

/// Display token symbol.
pub const TOKEN_SYMBOL: &str = "WARD";

/// Minimal denomination name.
pub const TOKEN_DENOM: &str = "uward";

/// Decimal places between the display unit and the minimal denomination
/// (1 WARD = 10^6 uward).
pub const TOKEN_DECIMALS: u32 = 6;

/// Unbonding period in days: tokens stay frozen this long after unstaking.
pub const UNBONDING_PERIOD_DAYS: u32 = 21;

/// Validator bond status, mirroring `cosmos.staking.v1beta1.BondStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BondStatus {
    /// Invalid/unknown status.
    #[default]
    Unspecified,
    /// Not bonded; not eligible for delegations.
    Unbonded,
    /// Leaving the active set; tokens still locked.
    Unbonding,
    /// In the active set, earning rewards.
    Bonded,
}

impl BondStatus {
    /// Decode the proto enum integer. Unknown values map to `Unspecified`.
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => BondStatus::Unbonded,
            2 => BondStatus::Unbonding,
            3 => BondStatus::Bonded,
            _ => BondStatus::Unspecified,
        }
    }

    /// Decode the string form used on the LCD wire (`BOND_STATUS_BONDED`).
    pub fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "BOND_STATUS_UNSPECIFIED" => Some(BondStatus::Unspecified),
            "BOND_STATUS_UNBONDED" => Some(BondStatus::Unbonded),
            "BOND_STATUS_UNBONDING" => Some(BondStatus::Unbonding),
            "BOND_STATUS_BONDED" => Some(BondStatus::Bonded),
            _ => None,
        }
    }

    /// Whether the validator is in the active set and can receive
    /// delegations.
    pub fn is_bonded(&self) -> bool {
        matches!(self, BondStatus::Bonded)
    }

    /// Get display label for UI.
    pub fn label(&self) -> &'static str {
        match self {
            BondStatus::Unspecified => "Unknown",
            BondStatus::Unbonded => "Unbonded",
            BondStatus::Unbonding => "Unbonding",
            BondStatus::Bonded => "Active",
        }
    }
}

/// Validator data read from the chain-state query layer.
///
/// Read-only to this crate: the query layer owns it and supplies a fresh
/// value on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorSummary {
    /// Bech32 operator address (`wardenvaloper1...`).
    pub operator_address: String,
    /// Display name from on-chain description (if set).
    pub moniker: Option<String>,
    /// Bond status.
    pub status: BondStatus,
    /// Bonded stake in uward.
    pub tokens: Uward,
    /// Commission rate as a fraction (0.0 to 1.0).
    pub commission_rate: f64,
}

impl ValidatorSummary {
    /// Returns the moniker or a truncated operator address if no name is
    /// set.
    pub fn display_name(&self) -> &str {
        self.moniker.as_deref().unwrap_or_else(|| {
            if self.operator_address.len() > 16 {
                &self.operator_address[..16]
            } else {
                &self.operator_address
            }
        })
    }
}

/// A staking transaction request handed to the submission service.
///
/// Constructed only from a successfully parsed amount, so `amount_uward`
/// is always positive. Consumed exactly once; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeRequest {
    /// Amount to delegate, in uward.
    pub amount_uward: Uward,
    /// Target validator operator address.
    pub validator_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bond_status_from_i32() {
        assert_eq!(BondStatus::from_i32(0), BondStatus::Unspecified);
        assert_eq!(BondStatus::from_i32(1), BondStatus::Unbonded);
        assert_eq!(BondStatus::from_i32(2), BondStatus::Unbonding);
        assert_eq!(BondStatus::from_i32(3), BondStatus::Bonded);
    }

    #[test]
    fn test_bond_status_from_i32_unknown() {
        assert_eq!(BondStatus::from_i32(-1), BondStatus::Unspecified);
        assert_eq!(BondStatus::from_i32(42), BondStatus::Unspecified);
    }

    #[test]
    fn test_bond_status_from_str_name() {
        assert_eq!(
            BondStatus::from_str_name("BOND_STATUS_BONDED"),
            Some(BondStatus::Bonded)
        );
        assert_eq!(
            BondStatus::from_str_name("BOND_STATUS_UNBONDING"),
            Some(BondStatus::Unbonding)
        );
        assert_eq!(BondStatus::from_str_name("BONDED"), None);
    }

    #[test]
    fn test_bond_status_is_bonded() {
        assert!(BondStatus::Bonded.is_bonded());
        assert!(!BondStatus::Unbonded.is_bonded());
        assert!(!BondStatus::Unbonding.is_bonded());
        assert!(!BondStatus::Unspecified.is_bonded());
    }

    #[test]
    fn test_bond_status_labels() {
        assert_eq!(BondStatus::Bonded.label(), "Active");
        assert_eq!(BondStatus::Unbonding.label(), "Unbonding");
    }

    #[test]
    fn test_validator_display_name_with_moniker() {
        let v = ValidatorSummary {
            operator_address: "wardenvaloper1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu".into(),
            moniker: Some("Chorus One".into()),
            status: BondStatus::Bonded,
            tokens: 0,
            commission_rate: 0.0,
        };
        assert_eq!(v.display_name(), "Chorus One");
    }

    #[test]
    fn test_validator_display_name_truncated() {
        let v = ValidatorSummary {
            operator_address: "wardenvaloper1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu".into(),
            moniker: None,
            status: BondStatus::Bonded,
            tokens: 0,
            commission_rate: 0.0,
        };
        assert_eq!(v.display_name(), "wardenvaloper1qy");
    }

    #[test]
    fn test_validator_display_name_short_address() {
        let v = ValidatorSummary {
            operator_address: "warden1short".into(),
            moniker: None,
            status: BondStatus::Unbonded,
            tokens: 0,
            commission_rate: 0.0,
        };
        assert_eq!(v.display_name(), "warden1short");
    }

    #[test]
    fn test_stake_request_equality() {
        let a = StakeRequest {
            amount_uward: 10_000_000,
            validator_address: "wardenvaloper1abc".into(),
        };
        assert_eq!(a, a.clone());
    }
}
