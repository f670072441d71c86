pub mod models;
pub mod services;

pub use models::{TaxKind, TaxRule};
pub use services::TaxCalculator;
