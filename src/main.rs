use dotenv::dotenv;
use log::{info, warn};
use std::env;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use warp::Filter;

use interest_calc_backend::routes;
use interest_calc_backend::services::history::HistoryStore;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    // Get port from the environment, default to 3030
    let port_str = env::var("PORT").unwrap_or_else(|_| {
        warn!("$PORT not set, defaulting to 3030");
        "3030".to_string()
    });

    let port: u16 = port_str.parse().expect("PORT must be a number");
    info!("Using PORT: {}", port);

    // Where the calculation history is persisted between runs
    let history_file = env::var("HISTORY_FILE").unwrap_or_else(|_| {
        warn!("$HISTORY_FILE not set, defaulting to history.json");
        "history.json".to_string()
    });

    // Simulated calculation latency, used to drive a loading indicator
    let delay_ms: u64 = env::var("CALC_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    info!("Simulated calculation delay: {}ms", delay_ms);

    let store = Arc::new(Mutex::new(HistoryStore::open(history_file)));

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    info!("Will bind to: {}", addr);

    // Set up CORS
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE"]);

    // Set up routes
    let api = routes::routes(store, delay_ms).with(cors);
    info!("Routes configured successfully with CORS.");

    // Start the server
    info!("Starting server on {}", addr);
    warp::serve(api).run(addr).await;
}
