use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::config::BillingConfig;
use crate::modules::billing::models::{BillingInput, CalculationResult, ComponentKind};
use crate::modules::taxes::TaxCalculator;

/// Derives taxes, the down payment line and net payable from a billing pair.
///
/// Rates come from [`BillingConfig`]. Each line item is rounded to the
/// currency's smallest unit on its own, so the rounded components plus net
/// payable may differ from the billing value by at most one unit per line.
#[derive(Debug, Clone)]
pub struct BillingCalculator {
    config: BillingConfig,
}

impl BillingCalculator {
    pub fn new(config: BillingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Calculate every derived amount.
    ///
    /// The pair must already have passed [`BillingValidator`]; invalid input
    /// is not checked again here.
    ///
    /// [`BillingValidator`]: crate::modules::billing::services::BillingValidator
    pub fn calculate(
        &self,
        billing_value: Decimal,
        down_payment_deduction: Decimal,
    ) -> CalculationResult {
        let currency = self.config.currency;
        let tax_base = self.tax_base(billing_value - down_payment_deduction);

        let mut components = BTreeMap::new();
        let mut withheld = down_payment_deduction;

        let tax_calculator = TaxCalculator::new();
        for tax in &self.config.taxes {
            let raw = tax_calculator.apply_rule(tax_base, tax);
            withheld += raw;
            components.insert(ComponentKind::from(tax.kind), currency.round(raw));
        }
        components.insert(
            ComponentKind::DownPayment,
            currency.round(down_payment_deduction),
        );

        let net_payable = currency.round(billing_value - withheld);

        debug_assert!(net_payable >= Decimal::ZERO, "net payable went negative");
        debug_assert!(components.values().all(|v| *v >= Decimal::ZERO));

        CalculationResult::new(billing_value, down_payment_deduction, components, net_payable)
    }

    pub fn calculate_input(&self, input: &BillingInput) -> CalculationResult {
        self.calculate(input.billing_value, input.down_payment_deduction)
    }

    /// Dasar pengenaan pajak: the amount rates apply to.
    ///
    /// With VAT-inclusive billing the PPN share is backed out of the amount.
    pub fn tax_base(&self, amount: Decimal) -> Decimal {
        match self.config.vat_rate() {
            Some(rate) if self.config.vat_inclusive => amount / (Decimal::ONE + rate),
            _ => amount,
        }
    }
}
