// src/handlers/calculate.rs
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, info};
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::models::CalculationInput;
use crate::services::engine;
use crate::services::history::HistoryStore;

/// Run one calculation: optional simulated delay, compute, record, reply.
///
/// The delay drives a loading indicator on the client and sits outside the
/// engine, which stays synchronous.
pub async fn post_calculate(
    input: CalculationInput,
    store: Arc<Mutex<HistoryStore>>,
    delay_ms: u64,
) -> Result<Json, Rejection> {
    info!("Handling calculation request: {:?}", input);

    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    let result = engine::compute(&input).ok_or_else(|| {
        debug!("Calculation input rejected: {:?}", input);
        warp::reject::custom(ApiError::invalid_input(
            "principal, rate and time must all be positive numbers",
        ))
    })?;

    let mut store = store
        .lock()
        .map_err(|_| warp::reject::custom(ApiError::new("history store lock poisoned")))?;
    store.record(result.clone());

    Ok(warp::reply::json(&result))
}
