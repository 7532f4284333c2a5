use crate::error::OrderError;
use lambda_http::http::StatusCode;
use lambda_http::{Error, Response};
use serde::Serialize;

pub const ERROR_ID: &str = "ERROR";

/// Body of every response sent back to the front end.
#[derive(Debug, Serialize, PartialEq)]
pub struct OrderResponse {
    pub message: String,
    pub id: String,
}

impl OrderResponse {
    pub fn new(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: id.into(),
        }
    }
}

pub fn json_response(
    status: &StatusCode,
    body: &impl Serialize,
) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, GET, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(serde_json::to_string(body)?)
        .map_err(Box::new)?;

    Ok(response)
}

pub fn error_response(error: &OrderError) -> Result<Response<String>, Error> {
    json_response(
        &StatusCode::INTERNAL_SERVER_ERROR,
        &OrderResponse::new(format!("Error: {}", error), ERROR_ID),
    )
}
