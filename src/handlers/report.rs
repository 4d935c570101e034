// src/handlers/report.rs
use std::sync::{Arc, Mutex};

use log::{info, warn};
use warp::Rejection;

use super::error::ApiError;
use crate::services::history::HistoryStore;
use crate::services::report;

/// Render the history entry with the given timestamp as a plain-text report.
pub async fn get_report(
    timestamp: i64,
    store: Arc<Mutex<HistoryStore>>,
) -> Result<impl warp::Reply, Rejection> {
    info!("Handling report request for calculation {}", timestamp);
    let store = store
        .lock()
        .map_err(|_| warp::reject::custom(ApiError::new("history store lock poisoned")))?;

    let result = store.find(timestamp).ok_or_else(|| {
        warn!("No history entry with timestamp {}", timestamp);
        warp::reject::not_found()
    })?;

    Ok(warp::reply::with_header(
        report::render(result),
        "content-type",
        "text/plain; charset=utf-8",
    ))
}
