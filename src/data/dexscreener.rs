use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::DEXSCREENER;
use crate::domain::{PairAddress, PairQuote, UNKNOWN_PRICE};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("No pair data found")]
    MissingPair,
}

/// Abstract interface for fetching pair price data.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    async fn fetch_pair(&self, address: &PairAddress) -> Result<PairQuote, FetchError>;
}

/// DexScreener REST client. One GET per pair, no retries; a request
/// timeout keeps a hung call from pinning the refresh state forever.
pub struct DexScreenerClient {
    base_url: String,
    client: Client,
}

impl DexScreenerClient {
    pub fn new() -> Self {
        Self::with_base_url(DEXSCREENER.base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(DEXSCREENER.timeout_ms))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {e}");
                Client::new()
            });
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub(crate) fn endpoint_for(&self, address: &PairAddress) -> String {
        format!("{}/{}/{}", self.base_url, DEXSCREENER.chain_id, address)
    }
}

impl Default for DexScreenerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for DexScreenerClient {
    async fn fetch_pair(&self, address: &PairAddress) -> Result<PairQuote, FetchError> {
        let url = self.endpoint_for(address);
        log::debug!("Fetching pair data from {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let payload: PairsResponse = response.json().await?;
        let pair = payload.pair.ok_or(FetchError::MissingPair)?;
        Ok(pair.into_quote())
    }
}

#[derive(Debug, Deserialize)]
struct PairsResponse {
    #[serde(default)]
    pair: Option<PairPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PairPayload {
    #[serde(default)]
    price_usd: Option<String>,
    #[serde(default)]
    price_native: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    info: Option<PairInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PairInfo {
    #[serde(default)]
    image_url: Option<String>,
}

impl PairPayload {
    fn into_quote(self) -> PairQuote {
        PairQuote {
            price_usd: self.price_usd.unwrap_or_else(|| UNKNOWN_PRICE.to_owned()),
            price_native: self
                .price_native
                .unwrap_or_else(|| UNKNOWN_PRICE.to_owned()),
            image_url: self.info.and_then(|i| i.image_url),
            url: self.url,
        }
    }
}
