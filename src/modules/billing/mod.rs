// Billing module: validation and calculation of kwitansi amounts

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{BillingInput, BillingRequest, CalculationResult, ComponentKind, ValidationResult};
pub use services::{BillingCalculator, BillingValidator};
