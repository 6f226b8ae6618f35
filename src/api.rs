// src/api.rs
use crate::config::Config;
use crate::db::store_quotation;
use crate::error::QuoteError;
use crate::provider::fetch_usd_brl;
use log::{debug, error, info};
use reqwest::Client;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

pub fn routes(
    config: Arc<Config>,
    client: Client,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    warp::path("cotacao")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_config(config))
        .and(with_client(client))
        .and_then(quote_handler)
        .recover(handle_rejection)
}

fn with_config(
    config: Arc<Config>,
) -> impl Filter<Extract = (Arc<Config>,), Error = Infallible> + Clone {
    warp::any().map(move || config.clone())
}

fn with_client(client: Client) -> impl Filter<Extract = (Client,), Error = Infallible> + Clone {
    warp::any().map(move || client.clone())
}

async fn quote_handler(config: Arc<Config>, client: Client) -> Result<impl Reply, Rejection> {
    let quote = match fetch_usd_brl(&client, &config.quote_url, config.fetch_timeout()).await {
        Ok(quote) => {
            debug!(
                "Fetched {}-{} bid {} ask {} at {}",
                quote.code, quote.codein, quote.bid, quote.ask, quote.create_date
            );
            quote
        }
        Err(e) => {
            error!("Request external API error: {}", e);
            return Err(warp::reject::custom(QuoteError::from(e)));
        }
    };

    match store_quotation(&config.database_url, quote.bid.as_bytes(), config.store_timeout()).await
    {
        Ok(quotation) => {
            info!(
                "Stored quotation {} ({} {})",
                quotation.id, quotation.currency, quotation.value
            );
            Ok(quote.bid)
        }
        Err(e) => {
            error!("Database store error: {}", e);
            Err(warp::reject::custom(QuoteError::from(e)))
        }
    }
}

/// Every failure answers with an empty body; only the status differs.
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        StatusCode::METHOD_NOT_ALLOWED
    } else if err.find::<QuoteError>().is_some() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        error!("Unhandled rejection: {:?}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    };
    Ok(warp::reply::with_status(warp::reply(), status))
}
