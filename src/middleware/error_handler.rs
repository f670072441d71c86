use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::core::AppError;

/// Maps JSON extractor failures to the standard error envelope.
///
/// Non-numeric amounts and malformed bodies are rejected here, before the
/// billing validator ever sees them.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");

    let message = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body is too large".to_string()
        }
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Malformed request body: {}", e),
        other => format!("Malformed request body: {}", other),
    };

    AppError::validation(message).into()
}

/// JSON extractor configuration shared by every route
pub fn json_config(max_payload_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_bytes)
        .error_handler(json_error_handler)
}
