use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;

use crate::core::{AppError, Currency, Result};
use crate::modules::taxes::{TaxKind, TaxRule};

/// Business rules for the billing calculator.
///
/// Rates are a deployment decision and have no built-in default: the
/// `BILLING_TAX_RULES` variable must be present, even if empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Currency whose smallest unit every derived amount is rounded to
    pub currency: Currency,
    /// Whether billing values already include PPN, so the tax base is
    /// backed out as `base / (1 + ppn_rate)`
    pub vat_inclusive: bool,
    /// Taxes withheld from every billing, sorted by kind
    pub taxes: Vec<TaxRule>,
}

impl BillingConfig {
    pub fn new(currency: Currency, vat_inclusive: bool, mut taxes: Vec<TaxRule>) -> Result<Self> {
        taxes.sort_by_key(|t| t.kind);
        let config = Self {
            currency,
            vat_inclusive,
            taxes,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        let currency = env::var("BILLING_CURRENCY")
            .unwrap_or_else(|_| "IDR".to_string())
            .parse()
            .map_err(AppError::Configuration)?;

        let vat_inclusive = env::var("BILLING_VAT_INCLUSIVE")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .map_err(|_| AppError::configuration("Invalid BILLING_VAT_INCLUSIVE"))?;

        let taxes = TaxRule::parse_list(
            &env::var("BILLING_TAX_RULES")
                .map_err(|_| AppError::configuration("BILLING_TAX_RULES not set"))?,
        )?;

        Self::new(currency, vat_inclusive, taxes)
    }

    /// PPN rate if configured
    pub fn vat_rate(&self) -> Option<Decimal> {
        self.taxes
            .iter()
            .find(|t| t.kind == TaxKind::Ppn)
            .map(|t| t.rate)
    }

    /// Sum of the rates that are taken out of the tax base.
    ///
    /// With VAT-inclusive billing the base already excludes PPN, so PPN
    /// itself does not count against the base.
    pub fn withheld_rate(&self) -> Decimal {
        self.taxes
            .iter()
            .filter(|t| !(self.vat_inclusive && t.kind.is_vat()))
            .map(|t| t.rate)
            .sum()
    }

    /// Rejects rate tables that could make a derived amount negative
    pub fn validate(&self) -> Result<()> {
        for (i, tax) in self.taxes.iter().enumerate() {
            if self.taxes[..i].iter().any(|t| t.kind == tax.kind) {
                return Err(AppError::configuration(format!(
                    "Tax kind {} configured more than once",
                    tax.kind
                )));
            }
            if tax.rate < Decimal::ZERO || tax.rate > Decimal::ONE {
                return Err(AppError::configuration(format!(
                    "Tax rate for {} must be between 0 and 1",
                    tax.kind
                )));
            }
        }

        if self.withheld_rate() > Decimal::ONE {
            return Err(AppError::configuration(format!(
                "Combined tax rate {} exceeds 1.0; net payable would go negative",
                self.withheld_rate()
            )));
        }

        Ok(())
    }
}
