use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A billing (kwitansi) value and the advance deducted from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInput {
    pub billing_value: Decimal,
    pub down_payment_deduction: Decimal,
}

impl BillingInput {
    pub fn new(billing_value: Decimal, down_payment_deduction: Decimal) -> Self {
        Self {
            billing_value,
            down_payment_deduction,
        }
    }
}

/// Request body for the billing endpoints.
///
/// Both fields are optional at the serde level so a missing field is
/// reported by name instead of as a generic deserialization failure.
/// Amounts are accepted as JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRequest {
    pub billing_value: Option<Decimal>,
    pub down_payment_deduction: Option<Decimal>,
}

impl BillingRequest {
    /// Shape check performed before the billing validator runs
    pub fn into_input(self) -> Result<BillingInput> {
        match (self.billing_value, self.down_payment_deduction) {
            (Some(billing_value), Some(down_payment_deduction)) => {
                Ok(BillingInput::new(billing_value, down_payment_deduction))
            }
            (None, None) => Err(AppError::validation(
                "billingValue and downPaymentDeduction are required",
            )),
            (None, Some(_)) => Err(AppError::validation("billingValue is required")),
            (Some(_), None) => Err(AppError::validation("downPaymentDeduction is required")),
        }
    }
}
