use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// The billing core never produces these: its validation outcome is data.
/// They come from the request boundary and from startup.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed or incomplete request payload
    #[error("Validation error: {0}")]
    Validation(String),

    /// Billing pair rejected by the billing validator, one message per failed check
    #[error("Invalid billing input: {}", .0.join(" "))]
    InvalidBilling(Vec<String>),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        let body = match self {
            AppError::InvalidBilling(errors) => serde_json::json!({
                "error": {
                    "message": "Invalid billing input",
                    "code": status_code.as_u16(),
                    "errors": errors,
                }
            }),
            // Internal details stay in the logs
            AppError::Configuration(_) => serde_json::json!({
                "error": {
                    "message": "Internal server error",
                    "code": status_code.as_u16(),
                }
            }),
            _ => serde_json::json!({
                "error": {
                    "message": self.to_string(),
                    "code": status_code.as_u16(),
                }
            }),
        };

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidBilling(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
