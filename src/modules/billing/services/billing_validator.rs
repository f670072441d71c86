use rust_decimal::Decimal;

use crate::modules::billing::models::{BillingInput, ValidationResult};

pub const BILLING_VALUE_NOT_POSITIVE: &str = "billing value must be positive.";
pub const DOWN_PAYMENT_NEGATIVE: &str = "down payment deduction cannot be negative.";
pub const DOWN_PAYMENT_EXCEEDS_BILLING: &str = "down payment deduction cannot exceed billing value.";

/// Semantic checks on a billing pair, run before any calculation.
///
/// Every failing check contributes its own message. The cross-field check
/// only compares two amounts that each passed their own check, so a negative
/// billing value is reported once, as not positive.
pub struct BillingValidator;

impl BillingValidator {
    pub fn validate(billing_value: Decimal, down_payment_deduction: Decimal) -> ValidationResult {
        let billing_ok = billing_value > Decimal::ZERO;
        let down_payment_ok = down_payment_deduction >= Decimal::ZERO;

        Self::collect(
            billing_ok,
            down_payment_ok,
            billing_ok && down_payment_ok && down_payment_deduction > billing_value,
        )
    }

    pub fn validate_input(input: &BillingInput) -> ValidationResult {
        Self::validate(input.billing_value, input.down_payment_deduction)
    }

    /// Validate amounts held as floats.
    ///
    /// The checks compare the floats themselves, so any finite magnitude is
    /// judged by sign alone. NaN and infinities fail the check of the field
    /// they appear in.
    pub fn validate_f64(billing_value: f64, down_payment_deduction: f64) -> ValidationResult {
        let billing_ok = billing_value.is_finite() && billing_value > 0.0;
        let down_payment_ok = down_payment_deduction.is_finite() && down_payment_deduction >= 0.0;

        Self::collect(
            billing_ok,
            down_payment_ok,
            billing_ok && down_payment_ok && down_payment_deduction > billing_value,
        )
    }

    fn collect(billing_ok: bool, down_payment_ok: bool, exceeds: bool) -> ValidationResult {
        let mut errors = Vec::new();

        if !billing_ok {
            errors.push(BILLING_VALUE_NOT_POSITIVE.to_string());
        }
        if !down_payment_ok {
            errors.push(DOWN_PAYMENT_NEGATIVE.to_string());
        }
        if exceeds {
            errors.push(DOWN_PAYMENT_EXCEEDS_BILLING.to_string());
        }

        ValidationResult::from_errors(errors)
    }
}
