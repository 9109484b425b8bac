//! HTTP/JSON client for the chain LCD and the signer bridge.
//!
//! Validator and pool data come from the chain's LCD endpoint
//! (`/cosmos/staking/v1beta1/...`). Submission and the APR rate go
//! through the local signer bridge, which owns the keys and the protobuf
//! codec. Cosmos LCD encodes big integers and decimals as strings, so
//! every numeric field is parsed here and bad data surfaces as
//! `ChainError::InvalidData` instead of a panic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ChainError;
use crate::queries::StakingQuery;
use crate::submit::{StakeSubmitter, TxResult};
use wardstake_core::{BondStatus, TOKEN_DENOM, Uward, ValidatorSummary};

/// REST client for chain queries and stake submission.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    lcd_url: String,
    signer_url: String,
}

impl RestClient {
    /// Create a client for the given LCD and signer bridge base URLs.
    pub fn new(lcd_url: impl Into<String>, signer_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            lcd_url: trim_base(lcd_url.into()),
            signer_url: trim_base(signer_url.into()),
        }
    }
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

// --- LCD wire types ---------------------------------------------------

#[derive(Debug, Deserialize)]
struct ValidatorResponse {
    validator: ValidatorDto,
}

#[derive(Debug, Deserialize)]
struct ValidatorDto {
    operator_address: String,
    #[serde(default)]
    description: Option<DescriptionDto>,
    status: serde_json::Value,
    tokens: String,
    #[serde(default)]
    commission: Option<CommissionDto>,
}

#[derive(Debug, Deserialize)]
struct DescriptionDto {
    #[serde(default)]
    moniker: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommissionDto {
    #[serde(default)]
    commission_rates: Option<CommissionRatesDto>,
}

#[derive(Debug, Deserialize)]
struct CommissionRatesDto {
    #[serde(default)]
    rate: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PoolResponse {
    pool: PoolDto,
}

#[derive(Debug, Deserialize)]
struct PoolDto {
    bonded_tokens: String,
}

// --- signer bridge wire types -----------------------------------------

#[derive(Debug, Deserialize)]
struct AprResponse {
    #[serde(default)]
    apr: Option<String>,
}

#[derive(Debug, Serialize)]
struct StakeBody<'a> {
    amount: String,
    denom: &'static str,
    validator_address: &'a str,
}

#[derive(Debug, Deserialize)]
struct StakeResponse {
    tx_hash: String,
    #[serde(default)]
    code: u32,
    #[serde(default)]
    raw_log: Option<String>,
}

impl ValidatorDto {
    fn into_summary(self) -> Result<ValidatorSummary, ChainError> {
        // Older gateways send the proto integer, newer ones the string
        // name. Accept both.
        let status = match &self.status {
            serde_json::Value::String(name) => BondStatus::from_str_name(name)
                .ok_or_else(|| ChainError::InvalidData(format!("bond status {name:?}")))?,
            serde_json::Value::Number(n) => {
                let raw = n
                    .as_i64()
                    .ok_or_else(|| ChainError::InvalidData(format!("bond status {n}")))?;
                BondStatus::from_i32(raw as i32)
            }
            other => return Err(ChainError::InvalidData(format!("bond status {other}"))),
        };

        let tokens: Uward = self
            .tokens
            .parse()
            .map_err(|_| ChainError::InvalidData(format!("validator tokens {:?}", self.tokens)))?;

        let commission_rate = match self
            .commission
            .and_then(|c| c.commission_rates)
            .and_then(|r| r.rate)
        {
            Some(rate) => rate
                .parse::<f64>()
                .map_err(|_| ChainError::InvalidData(format!("commission rate {rate:?}")))?,
            None => 0.0,
        };

        Ok(ValidatorSummary {
            operator_address: self.operator_address,
            moniker: self.description.and_then(|d| d.moniker),
            status,
            tokens,
            commission_rate,
        })
    }
}

#[async_trait]
impl StakingQuery for RestClient {
    async fn validator(&self, operator_address: &str) -> Result<ValidatorSummary, ChainError> {
        let url = format!(
            "{}/cosmos/staking/v1beta1/validators/{}",
            self.lcd_url, operator_address
        );
        let response: ValidatorResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        response.validator.into_summary()
    }

    async fn bonded_tokens(&self) -> Result<Option<Uward>, ChainError> {
        let url = format!("{}/cosmos/staking/v1beta1/pool", self.lcd_url);
        let response: PoolResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let total = response.pool.bonded_tokens.parse().map_err(|_| {
            ChainError::InvalidData(format!("bonded tokens {:?}", response.pool.bonded_tokens))
        })?;
        Ok(Some(total))
    }

    async fn apr(&self) -> Result<Option<u128>, ChainError> {
        let url = format!("{}/v1/apr", self.signer_url);
        let response: AprResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        match response.apr {
            Some(raw) => {
                let apr = raw
                    .parse()
                    .map_err(|_| ChainError::InvalidData(format!("apr {raw:?}")))?;
                Ok(Some(apr))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl StakeSubmitter for RestClient {
    async fn submit_stake_tx(
        &self,
        amount_uward: Uward,
        validator_address: &str,
    ) -> Result<TxResult, ChainError> {
        let url = format!("{}/v1/stake", self.signer_url);
        let body = StakeBody {
            amount: amount_uward.to_string(),
            denom: TOKEN_DENOM,
            validator_address,
        };

        tracing::info!(amount_uward, validator_address, "submitting stake tx");
        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(ChainError::Signer(format!("{status}: {detail}")));
        }

        let outcome: StakeResponse = response.json().await?;
        Ok(TxResult {
            tx_hash: outcome.tx_hash,
            code: outcome.code,
            raw_log: outcome.raw_log,
        })
    }
}
