//! Route handlers for the rate lookup endpoint.
//!
//! Single route: GET /rate?from=<CODE>&to=<CODE>. The effective
//! configuration is injected as immutable shared state; request
//! handling never mutates it.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ratedesk_rates::Config;

/// Query parameters for GET /rate. A missing parameter deserializes as
/// `None`; an empty one as `Some("")`. Both are rejected the same way.
#[derive(Debug, Deserialize)]
struct RateQuery {
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
}

/// Wire format of a successful lookup.
#[derive(Debug, Serialize)]
struct RateResponse {
    from: String,
    to: String,
    rate: f64,
}

/// Build the service router around the effective configuration.
pub fn router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/rate", get(get_rate))
        .with_state(config)
}

/// Handler for GET /rate.
async fn get_rate(
    State(config): State<Arc<Config>>,
    Query(query): Query<RateQuery>,
) -> Response {
    let (from, to) = match (query.from.as_deref(), query.to.as_deref()) {
        (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => (from, to),
        _ => {
            return (StatusCode::BAD_REQUEST, "Missing 'from' or 'to' parameter").into_response();
        }
    };

    match config.rates.lookup(from, to) {
        Ok(rate) => Json(RateResponse {
            from: from.to_string(),
            to: to.to_string(),
            rate,
        })
        .into_response(),
        Err(err) => {
            debug!(from, to, error = %err, "Rate lookup miss");
            (StatusCode::NOT_FOUND, "Currency pair not found").into_response()
        }
    }
}
