pub mod billing_calculator;
pub mod billing_validator;

pub use billing_calculator::BillingCalculator;
pub use billing_validator::BillingValidator;
