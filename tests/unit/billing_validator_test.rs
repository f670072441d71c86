// Property-based tests for billing pair validation
//
// - a valid pair produces no errors
// - every failing check contributes its own message, in check order
// - the cross-field check only fires when both amounts are individually valid
// - float amounts are judged by their sign at any finite magnitude

use kaspro::billing::services::billing_validator::{
    BILLING_VALUE_NOT_POSITIVE, DOWN_PAYMENT_EXCEEDS_BILLING, DOWN_PAYMENT_NEGATIVE,
};
use kaspro::billing::{BillingInput, BillingValidator};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Amount with up to two decimal places, in [min, max) units of 0.01
fn amount(min: i64, max: i64) -> impl Strategy<Value = Decimal> {
    (min..max).prop_map(|cents| Decimal::new(cents, 2))
}

/// Any finite float of either sign, subnormals and zeros included
fn finite_f64() -> impl Strategy<Value = f64> {
    proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL | proptest::num::f64::ZERO
}

proptest! {
    #[test]
    fn test_valid_pairs_have_no_errors(
        billing in amount(1, 1_000_000_000_000),
        share in 0u32..=100u32,
    ) {
        let down_payment = (billing * Decimal::from(share) / Decimal::from(100)).round_dp(2);
        prop_assume!(down_payment <= billing);

        let result = BillingValidator::validate(billing, down_payment);

        prop_assert!(result.is_valid());
        prop_assert!(result.errors().is_empty());
    }

    #[test]
    fn test_down_payment_above_billing_is_rejected(
        billing in amount(1, 1_000_000_000_000),
        excess in amount(1, 1_000_000_000),
    ) {
        let result = BillingValidator::validate(billing, billing + excess);

        prop_assert!(!result.is_valid());
        prop_assert_eq!(result.errors(), [DOWN_PAYMENT_EXCEEDS_BILLING]);
    }

    #[test]
    fn test_non_positive_billing_is_flagged(
        billing in amount(-1_000_000_000, 1),
        down_payment in amount(0, 1_000_000_000),
    ) {
        let result = BillingValidator::validate(billing, down_payment);

        prop_assert!(!result.is_valid());
        prop_assert_eq!(result.errors(), [BILLING_VALUE_NOT_POSITIVE]);
    }

    #[test]
    fn test_negative_down_payment_is_flagged(
        billing in amount(1, 1_000_000_000),
        down_payment in amount(-1_000_000_000, 0),
    ) {
        let result = BillingValidator::validate(billing, down_payment);

        prop_assert!(!result.is_valid());
        prop_assert_eq!(result.errors(), [DOWN_PAYMENT_NEGATIVE]);
    }

    #[test]
    fn test_both_violations_reported_together(
        billing in amount(-1_000_000_000, 1),
        down_payment in amount(-1_000_000_000, 0),
    ) {
        let result = BillingValidator::validate(billing, down_payment);

        prop_assert_eq!(
            result.errors(),
            [BILLING_VALUE_NOT_POSITIVE, DOWN_PAYMENT_NEGATIVE]
        );
    }

    #[test]
    fn test_validation_is_deterministic(
        billing in amount(-1_000_000, 1_000_000),
        down_payment in amount(-1_000_000, 1_000_000),
    ) {
        prop_assert_eq!(
            BillingValidator::validate(billing, down_payment),
            BillingValidator::validate(billing, down_payment)
        );
    }

    #[test]
    fn test_f64_validation_follows_float_comparisons(
        billing in finite_f64(),
        down_payment in finite_f64(),
    ) {
        let result = BillingValidator::validate_f64(billing, down_payment);

        let mut expected = Vec::new();
        if billing <= 0.0 {
            expected.push(BILLING_VALUE_NOT_POSITIVE);
        }
        if down_payment < 0.0 {
            expected.push(DOWN_PAYMENT_NEGATIVE);
        }
        if expected.is_empty() && down_payment > billing {
            expected.push(DOWN_PAYMENT_EXCEEDS_BILLING);
        }

        prop_assert_eq!(result.errors(), expected.as_slice());
        prop_assert_eq!(result.is_valid(), expected.is_empty());
    }
}

#[test]
fn test_one_million_without_down_payment_is_valid() {
    let result = BillingValidator::validate(dec!(1000000), dec!(0));
    assert!(result.is_valid());
}

#[test]
fn test_down_payment_exceeding_billing_gives_exactly_one_error() {
    let result = BillingValidator::validate(dec!(500000), dec!(600000));

    assert!(!result.is_valid());
    assert_eq!(result.errors(), [DOWN_PAYMENT_EXCEEDS_BILLING]);
}

#[test]
fn test_negative_billing_gives_exactly_positivity_error() {
    let result = BillingValidator::validate(dec!(-1), dec!(0));

    assert!(!result.is_valid());
    assert_eq!(result.errors(), [BILLING_VALUE_NOT_POSITIVE]);
}

#[test]
fn test_error_messages() {
    assert_eq!(BILLING_VALUE_NOT_POSITIVE, "billing value must be positive.");
    assert_eq!(DOWN_PAYMENT_NEGATIVE, "down payment deduction cannot be negative.");
    assert_eq!(
        DOWN_PAYMENT_EXCEEDS_BILLING,
        "down payment deduction cannot exceed billing value."
    );
}

#[test]
fn test_validate_input_matches_validate() {
    let input = BillingInput::new(dec!(750000), dec!(800000));
    assert_eq!(
        BillingValidator::validate_input(&input),
        BillingValidator::validate(dec!(750000), dec!(800000))
    );
}

#[test]
fn test_validation_result_serializes_camel_case() {
    let result = BillingValidator::validate(dec!(0), dec!(-5));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["isValid"], false);
    assert_eq!(
        json["errors"],
        serde_json::json!([BILLING_VALUE_NOT_POSITIVE, DOWN_PAYMENT_NEGATIVE])
    );
}
