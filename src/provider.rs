// src/provider.rs
use crate::error::FetchError;
use crate::models::{Quote, UsdBrlResponse};
use log::{debug, error};
use reqwest::Client;
use std::time::Duration;
use tokio::time;

pub const DEFAULT_QUOTE_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Fetches the latest USD→BRL quote. One attempt only; when `deadline`
/// elapses the in-flight request is dropped.
pub async fn fetch_usd_brl(
    client: &Client,
    url: &str,
    deadline: Duration,
) -> Result<Quote, FetchError> {
    time::timeout(deadline, request_quote(client, url))
        .await
        .map_err(|_| FetchError::Timeout(deadline))?
}

async fn request_quote(client: &Client, url: &str) -> Result<Quote, FetchError> {
    debug!("Requesting quote from {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    match serde_json::from_str::<UsdBrlResponse>(&body) {
        Ok(parsed) => Ok(parsed.usdbrl),
        Err(e) => {
            error!("Failed to parse quote payload: {}", e);
            debug!("Unparseable quote payload: {}", body);
            Err(FetchError::Decode(e))
        }
    }
}
