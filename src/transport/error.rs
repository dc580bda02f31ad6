use serde::Deserialize;

use crate::domain::{ApiError, UnknownVariant};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains {0}")]
    UnknownVariant(#[from] UnknownVariant),
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorJsonResponse {
    code: i64,
    message: String,
    #[serde(default)]
    more_info: Option<String>,
    #[serde(default)]
    status: Option<u16>,
}

/// Decode Twilio's error payload. `http_status` fills in a missing `status` field.
pub fn decode_api_error_json_response(
    http_status: u16,
    json: &str,
) -> Result<ApiError, TransportError> {
    let parsed: ErrorJsonResponse = serde_json::from_str(json)?;
    Ok(ApiError {
        code: parsed.code,
        message: parsed.message,
        more_info: parsed.more_info,
        status: parsed.status.unwrap_or(http_status),
    })
}
