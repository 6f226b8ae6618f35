// src/models.rs
use serde::Deserialize;
use uuid::Uuid;

/// Label stored in the `currency` column for every USD→BRL observation.
pub const DOLLAR_CURRENCY: &str = "Dolar";

/// A USD→BRL quote exactly as the provider reports it. Nothing is validated
/// on receipt; every field is kept as text and missing ones decode as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Quote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    pub var_bid: String,
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    #[serde(rename = "create_date")]
    pub create_date: String,
}

/// Envelope returned by `/json/last/USD-BRL`.
#[derive(Debug, Deserialize)]
pub struct UsdBrlResponse {
    #[serde(rename = "USDBRL")]
    pub usdbrl: Quote,
}

/// A row of the `quotations` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Quotation {
    pub id: String,
    pub currency: String,
    pub value: f64,
}

impl Quotation {
    pub fn new(currency: &str, value: f64) -> Self {
        Quotation {
            id: Uuid::new_v4().to_string(),
            currency: currency.to_string(),
            value,
        }
    }
}
