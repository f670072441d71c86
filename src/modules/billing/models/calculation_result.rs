use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::modules::taxes::TaxKind;

/// Kind of a derived billing line item
///
/// The derived `Ord` fixes the key order of `taxComponents` in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Ppn,
    Pph21,
    Pph22,
    Pph23,
    PphFinal,
    /// Advance (uang muka) already paid, deducted from this billing
    DownPayment,
}

impl From<TaxKind> for ComponentKind {
    fn from(kind: TaxKind) -> Self {
        match kind {
            TaxKind::Ppn => ComponentKind::Ppn,
            TaxKind::Pph21 => ComponentKind::Pph21,
            TaxKind::Pph22 => ComponentKind::Pph22,
            TaxKind::Pph23 => ComponentKind::Pph23,
            TaxKind::PphFinal => ComponentKind::PphFinal,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::DownPayment => f.write_str("down_payment"),
            ComponentKind::Ppn => f.write_str("ppn"),
            ComponentKind::Pph21 => f.write_str("pph21"),
            ComponentKind::Pph22 => f.write_str("pph22"),
            ComponentKind::Pph23 => f.write_str("pph23"),
            ComponentKind::PphFinal => f.write_str("pph_final"),
        }
    }
}

/// Every amount derived from one billing pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    billing_value: Decimal,
    down_payment_deduction: Decimal,
    tax_components: BTreeMap<ComponentKind, Decimal>,
    net_payable: Decimal,
    /// Same value as `billing_value`, kept under the field name existing clients read
    nilai_kwintansi: Decimal,
}

impl CalculationResult {
    pub(crate) fn new(
        billing_value: Decimal,
        down_payment_deduction: Decimal,
        tax_components: BTreeMap<ComponentKind, Decimal>,
        net_payable: Decimal,
    ) -> Self {
        Self {
            billing_value,
            down_payment_deduction,
            tax_components,
            net_payable,
            nilai_kwintansi: billing_value,
        }
    }

    pub fn billing_value(&self) -> Decimal {
        self.billing_value
    }

    pub fn down_payment_deduction(&self) -> Decimal {
        self.down_payment_deduction
    }

    /// Rounded line items, including the down payment line
    pub fn tax_components(&self) -> &BTreeMap<ComponentKind, Decimal> {
        &self.tax_components
    }

    pub fn component(&self, kind: ComponentKind) -> Option<Decimal> {
        self.tax_components.get(&kind).copied()
    }

    pub fn net_payable(&self) -> Decimal {
        self.net_payable
    }

    pub fn nilai_kwintansi(&self) -> Decimal {
        self.nilai_kwintansi
    }

    /// Sum of every rounded component
    pub fn components_total(&self) -> Decimal {
        self.tax_components.values().copied().sum()
    }

    /// Number of independently rounded amounts: every component plus net payable
    pub fn line_item_count(&self) -> usize {
        self.tax_components.len() + 1
    }
}
