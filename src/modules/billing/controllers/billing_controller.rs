use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use crate::core::{AppError, Currency};
use crate::middleware::RequestIdValue;
use crate::modules::billing::models::{BillingRequest, CalculationResult};
use crate::modules::billing::services::{BillingCalculator, BillingValidator};

/// Body returned by POST /billing/calculate
#[derive(Debug, Serialize)]
pub struct BillingCalculationResponse {
    pub currency: Currency,
    #[serde(flatten)]
    pub result: CalculationResult,
}

/// Validate and calculate a billing
/// POST /billing/calculate
pub async fn calculate_billing(
    req: HttpRequest,
    calculator: web::Data<BillingCalculator>,
    request: web::Json<BillingRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = RequestIdValue::get(&req).map(|id| id.0).unwrap_or_default();
    let input = request.into_inner().into_input()?;

    let validation = BillingValidator::validate_input(&input);
    if !validation.is_valid() {
        tracing::info!(
            request_id = %request_id,
            billing_value = %input.billing_value,
            down_payment_deduction = %input.down_payment_deduction,
            errors = ?validation.errors(),
            "Billing input rejected"
        );
        return Err(AppError::InvalidBilling(validation.into_errors()));
    }

    let result = calculator.calculate_input(&input);

    tracing::debug!(
        request_id = %request_id,
        billing_value = %result.billing_value(),
        net_payable = %result.net_payable(),
        line_items = result.line_item_count(),
        "Billing calculated"
    );

    Ok(HttpResponse::Ok().json(BillingCalculationResponse {
        currency: calculator.config().currency,
        result,
    }))
}

/// Validate a billing without calculating it
/// POST /billing/validate
///
/// Always 200 for a well-formed body; the verdict is in `isValid`.
pub async fn validate_billing(
    request: web::Json<BillingRequest>,
) -> Result<HttpResponse, AppError> {
    let input = request.into_inner().into_input()?;

    Ok(HttpResponse::Ok().json(BillingValidator::validate_input(&input)))
}

/// Configure billing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/billing")
            .route("/calculate", web::post().to(calculate_billing))
            .route("/validate", web::post().to(validate_billing)),
    );
}
