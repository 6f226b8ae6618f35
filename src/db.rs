// src/db.rs
use crate::error::{ParseError, StoreError};
use crate::models::{Quotation, DOLLAR_CURRENCY};
use log::{debug, warn};
use sqlx::{AnyConnection, Connection};
use std::time::Duration;
use tokio::time::{self, Instant};

const INSERT_QUOTATION: &str = "insert into quotations (id, currency, value) values (?, ?, ?)";

/// Parses the provider's raw bid text as a decimal number.
pub fn parse_bid(raw: &[u8]) -> Result<f64, ParseError> {
    let text = std::str::from_utf8(raw)?.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let value: f64 = text.parse().map_err(|source| ParseError::InvalidNumber {
        raw: text.to_string(),
        source,
    })?;
    if !value.is_finite() {
        return Err(ParseError::NotFinite(text.to_string()));
    }
    Ok(value)
}

/// Persists one dollar quotation built from `raw_bid`.
///
/// A fresh connection is opened for the call and released before returning.
/// `deadline` bounds connecting and inserting together; closing the
/// connection afterwards is not bounded, so a committed insert is never
/// reported as a timeout.
pub async fn store_quotation(
    database_url: &str,
    raw_bid: &[u8],
    deadline: Duration,
) -> Result<Quotation, StoreError> {
    let quotation = Quotation::new(DOLLAR_CURRENCY, parse_bid(raw_bid)?);
    let expires = Instant::now() + deadline;

    let mut conn = time::timeout_at(expires, AnyConnection::connect(database_url))
        .await
        .map_err(|_| StoreError::Timeout(deadline))?
        .map_err(StoreError::Connect)?;

    let insert = sqlx::query(INSERT_QUOTATION)
        .bind(quotation.id.as_str())
        .bind(quotation.currency.as_str())
        .bind(quotation.value)
        .execute(&mut conn);

    // An interrupted statement leaves the connection unusable; dropping it
    // closes the socket.
    let result = match time::timeout_at(expires, insert).await {
        Ok(result) => result,
        Err(_) => return Err(StoreError::Timeout(deadline)),
    };

    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection: {}", e);
    }

    let done = result.map_err(StoreError::Execute)?;
    debug!("Inserted {} row(s) for quotation {}", done.rows_affected(), quotation.id);
    Ok(quotation)
}
