pub mod billing_input;
pub mod calculation_result;
pub mod validation_result;

pub use billing_input::{BillingInput, BillingRequest};
pub use calculation_result::{CalculationResult, ComponentKind};
pub use validation_result::ValidationResult;
