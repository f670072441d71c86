use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{AppError, Result};
use crate::modules::taxes::services::TaxCalculator;

/// Tax withheld from a billing
///
/// Declaration order is the order line items appear in a calculation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxKind {
    /// Pajak Pertambahan Nilai (VAT)
    Ppn,
    /// PPh pasal 21, employee and individual services
    Pph21,
    /// PPh pasal 22, procurement of goods
    Pph22,
    /// PPh pasal 23, services and rent
    Pph23,
    /// PPh final, pasal 4 ayat 2 (construction, land and buildings)
    PphFinal,
}

impl TaxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxKind::Ppn => "ppn",
            TaxKind::Pph21 => "pph21",
            TaxKind::Pph22 => "pph22",
            TaxKind::Pph23 => "pph23",
            TaxKind::PphFinal => "pph_final",
        }
    }

    /// Only PPN is added on top of the tax base; the PPh kinds are withheld from it
    pub fn is_vat(&self) -> bool {
        matches!(self, TaxKind::Ppn)
    }
}

impl fmt::Display for TaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ppn" | "vat" => Ok(TaxKind::Ppn),
            "pph21" => Ok(TaxKind::Pph21),
            "pph22" => Ok(TaxKind::Pph22),
            "pph23" => Ok(TaxKind::Pph23),
            "pph_final" | "pph4_2" => Ok(TaxKind::PphFinal),
            _ => Err(format!("Invalid tax kind: {}", s)),
        }
    }
}

/// A configured tax rate applied to every billing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRule {
    pub kind: TaxKind,
    /// Fraction of the tax base, 0.11 for 11%
    pub rate: Decimal,
}

impl TaxRule {
    pub fn new(kind: TaxKind, rate: Decimal) -> Result<Self> {
        TaxCalculator::new().validate_tax_rate(rate)?;
        Ok(Self { kind, rate })
    }

    /// Parse a comma separated list such as `ppn=0.11,pph23=0.02`.
    ///
    /// An empty list is allowed and means no tax is withheld.
    pub fn parse_list(raw: &str) -> Result<Vec<TaxRule>> {
        let mut rules: Vec<TaxRule> = Vec::new();

        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let rule: TaxRule = entry.parse()?;
            if rules.iter().any(|r| r.kind == rule.kind) {
                return Err(AppError::configuration(format!(
                    "Tax kind {} configured more than once",
                    rule.kind
                )));
            }
            rules.push(rule);
        }

        rules.sort_by_key(|r| r.kind);
        Ok(rules)
    }
}

impl FromStr for TaxRule {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, rate) = s.split_once('=').ok_or_else(|| {
            AppError::configuration(format!("Tax rule '{}' must look like kind=rate", s))
        })?;

        let kind: TaxKind = kind.parse().map_err(AppError::Configuration)?;
        let rate = Decimal::from_str(rate.trim()).map_err(|_| {
            AppError::configuration(format!("Invalid rate '{}' for tax {}", rate.trim(), kind))
        })?;

        TaxRule::new(kind, rate).map_err(|e| match e {
            AppError::Validation(msg) => AppError::Configuration(format!("{}: {}", kind, msg)),
            other => other,
        })
    }
}
