// Property-based tests for per-rule tax calculation
//
// - tax = base × rate, deterministic and unrounded
// - rates outside [0, 1] or finer than 4 decimal places are rejected

use kaspro::core::AppError;
use kaspro::taxes::{TaxCalculator, TaxKind, TaxRule};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn rule(kind: TaxKind, rate: Decimal) -> TaxRule {
    TaxRule::new(kind, rate).unwrap()
}

proptest! {
    #[test]
    fn test_tax_calculation_is_deterministic(
        base in 0u64..1_000_000_000u64,
        tax_rate_basis_points in 0u32..=10_000u32
    ) {
        let calculator = TaxCalculator::new();
        let base = Decimal::from(base);
        let rule = rule(TaxKind::Pph23, Decimal::new(tax_rate_basis_points as i64, 4));

        let tax1 = calculator.apply_rule(base, &rule);
        let tax2 = calculator.apply_rule(base, &rule);

        prop_assert_eq!(tax1, tax2, "Tax calculation must be deterministic");
    }

    #[test]
    fn test_tax_is_non_negative_and_bounded(
        base in 0u64..1_000_000_000u64,
        tax_rate_basis_points in 0u32..=10_000u32
    ) {
        let base = Decimal::from(base);
        let rule = rule(TaxKind::Ppn, Decimal::new(tax_rate_basis_points as i64, 4));

        let tax = TaxCalculator::new().apply_rule(base, &rule);

        prop_assert!(tax >= Decimal::ZERO, "Tax must be non-negative: got {}", tax);
        prop_assert!(tax <= base, "Tax {} should not exceed base {} at rate {}", tax, base, rule.rate);
    }

    #[test]
    fn test_zero_rate_produces_zero_tax(base in 0u64..1_000_000_000u64) {
        let tax = TaxCalculator::new()
            .apply_rule(Decimal::from(base), &rule(TaxKind::Pph21, Decimal::ZERO));

        prop_assert_eq!(tax, Decimal::ZERO, "0% tax rate must produce zero tax");
    }

    #[test]
    fn test_rule_is_base_times_rate(
        base in 0u64..1_000_000_000u64,
        tax_rate_basis_points in 0u32..=10_000u32
    ) {
        let base = Decimal::from(base);
        let rate = Decimal::new(tax_rate_basis_points as i64, 4);

        prop_assert_eq!(
            TaxCalculator::new().apply_rule(base, &rule(TaxKind::Pph22, rate)),
            base * rate
        );
    }

    #[test]
    fn test_rates_above_one_are_rejected(excess_basis_points in 1u32..100_000u32) {
        let rate = Decimal::ONE + Decimal::new(excess_basis_points as i64, 4);

        prop_assert!(matches!(
            TaxCalculator::new().validate_tax_rate(rate),
            Err(AppError::Validation(_))
        ));
        prop_assert!(TaxRule::new(TaxKind::Ppn, rate).is_err());
    }
}

#[test]
fn test_specific_tax_calculations() {
    let calculator = TaxCalculator::new();

    // PPN 11% on 1,000,000
    assert_eq!(
        calculator.apply_rule(dec!(1000000), &rule(TaxKind::Ppn, dec!(0.11))),
        dec!(110000)
    );

    // PPh 23 at 2% on 900,900
    assert_eq!(
        calculator.apply_rule(dec!(900900), &rule(TaxKind::Pph23, dec!(0.02))),
        dec!(18018)
    );

    // PPh final 1.75% keeps its fraction until the line is rounded
    assert_eq!(
        calculator.apply_rule(dec!(1000001), &rule(TaxKind::PphFinal, dec!(0.0175))),
        dec!(17500.0175)
    );
}

#[test]
fn test_rate_validation_edges() {
    let calculator = TaxCalculator::new();

    assert!(calculator.validate_tax_rate(Decimal::ZERO).is_ok());
    assert!(calculator.validate_tax_rate(Decimal::ONE).is_ok());
    assert!(calculator.validate_tax_rate(dec!(0.0001)).is_ok());
    assert!(calculator.validate_tax_rate(dec!(0.1234)).is_ok());

    assert!(calculator.validate_tax_rate(dec!(-0.01)).is_err());
    assert!(calculator.validate_tax_rate(dec!(1.0001)).is_err());
    assert!(calculator.validate_tax_rate(dec!(0.00001)).is_err());
}

#[test]
fn test_invalid_rate_cannot_become_a_rule() {
    let result = TaxRule::new(TaxKind::Pph21, dec!(-0.1));
    assert!(matches!(result, Err(AppError::Validation(_))));
}
