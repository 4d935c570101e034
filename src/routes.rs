// src/routes.rs
use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use log::info;
use warp::reject::Rejection;
use warp::{Filter, Reply};

use crate::handlers::{
    calculate::post_calculate,
    error::ApiError,
    history::{clear_history, get_history},
    report::get_report,
};
use crate::services::history::HistoryStore;

// Add recovery handling for our custom errors
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = warp::http::StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status;
        message = api_error.message.clone();
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        code = warp::http::StatusCode::BAD_REQUEST;
        message = e.to_string();
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = warp::http::StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed".to_string();
    } else {
        code = warp::http::StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes(
    store: Arc<Mutex<HistoryStore>>,
    delay_ms: u64,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let store_filter = warp::any().map(move || store.clone());
    let delay_filter = warp::any().map(move || delay_ms);

    let calculate_route = warp::path!("api" / "v1" / "calculate")
        .and(warp::post())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and(delay_filter)
        .and_then(post_calculate);

    let history_route = warp::path!("api" / "v1" / "history")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_history);

    let clear_history_route = warp::path!("api" / "v1" / "history")
        .and(warp::delete())
        .and(store_filter.clone())
        .and_then(clear_history);

    let report_route = warp::path!("api" / "v1" / "history" / i64 / "report")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_report);

    info!("All routes configured successfully.");

    calculate_route
        .or(history_route)
        .or(clear_history_route)
        .or(report_route)
        .recover(handle_rejection)
}
