use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::billing::BillingCalculator;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    /// Billing rules are loaded
    pub billing: bool,
    /// Number of configured tax rules
    pub tax_rules: usize,
}

/// GET /health - Liveness probe
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Ready once the billing calculator is registered with the app
pub async fn readiness_check(calculator: Option<web::Data<BillingCalculator>>) -> impl Responder {
    let checks = ReadinessChecks {
        billing: calculator.is_some(),
        tax_rules: calculator.map(|c| c.config().taxes.len()).unwrap_or(0),
    };

    if checks.billing {
        HttpResponse::Ok().json(ReadinessResponse { ready: true, checks })
    } else {
        tracing::error!("Readiness check failed: billing calculator not configured");
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            ready: false,
            checks,
        })
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
