// src/handlers/history.rs
use std::sync::{Arc, Mutex};

use log::info;
use serde_json::json;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::services::history::HistoryStore;

pub async fn get_history(store: Arc<Mutex<HistoryStore>>) -> Result<Json, Rejection> {
    let store = store
        .lock()
        .map_err(|_| warp::reject::custom(ApiError::new("history store lock poisoned")))?;
    Ok(warp::reply::json(&store.entries()))
}

pub async fn clear_history(store: Arc<Mutex<HistoryStore>>) -> Result<Json, Rejection> {
    info!("Handling request to clear calculation history");
    let mut store = store
        .lock()
        .map_err(|_| warp::reject::custom(ApiError::new("history store lock poisoned")))?;
    store.clear();
    Ok(warp::reply::json(&json!({ "cleared": true })))
}
