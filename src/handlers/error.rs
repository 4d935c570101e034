// src/handlers/error.rs
use std::fmt;
use warp::http::StatusCode;
use warp::reject::Reject;

#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub status: StatusCode,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The engine's "not ready" signal: input was missing or non-positive.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
impl Reject for ApiError {}
