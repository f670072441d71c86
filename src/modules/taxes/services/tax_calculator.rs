use rust_decimal::Decimal;

use crate::core::error::AppError;
use crate::modules::taxes::models::TaxRule;

/// TaxCalculator applies a single tax rate to a tax base
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Unrounded tax for a configured rule: base × rate.
    ///
    /// The rate was validated when the rule was built. Rounding is left to
    /// the caller, since each line item is rounded on its own.
    pub fn apply_rule(&self, base: Decimal, rule: &TaxRule) -> Decimal {
        base * rule.rate
    }

    /// Validate tax rate is within acceptable range (0-1.0) with max 4 decimal places
    pub fn validate_tax_rate(&self, tax_rate: Decimal) -> Result<(), AppError> {
        if tax_rate < Decimal::ZERO {
            return Err(AppError::Validation(
                "Tax rate cannot be negative".to_string(),
            ));
        }

        if tax_rate > Decimal::ONE {
            return Err(AppError::Validation(
                "Tax rate cannot exceed 1.0 (100%)".to_string(),
            ));
        }

        if tax_rate.normalize().scale() > 4 {
            return Err(AppError::Validation(
                "Tax rate cannot have more than 4 decimal places".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
