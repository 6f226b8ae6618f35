// src/error.rs
use std::num::ParseFloatError;
use std::str::Utf8Error;
use std::time::Duration;

use thiserror::Error;
use warp::reject::Reject;

/// Failure while turning the provider's bid text into a number.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("bid is empty")]
    Empty,

    #[error("bid is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("bid {raw:?} is not a decimal number: {source}")]
    InvalidNumber {
        raw: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("bid {0:?} is not a finite number")]
    NotFinite(String),
}

/// Failure while retrieving a quote from the provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("quote request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("quote provider answered HTTP {0}")]
    Status(u16),

    #[error("malformed quote payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("quote request exceeded {0:?}")]
    Timeout(Duration),
}

/// Failure while persisting a quotation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid quotation value: {0}")]
    InvalidValue(#[from] ParseError),

    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to insert quotation: {0}")]
    Execute(#[source] sqlx::Error),

    #[error("database store exceeded {0:?}")]
    Timeout(Duration),
}

/// Everything that can abort a `/cotacao` request. All variants map to the
/// same empty 500 response.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Reject for QuoteError {}
