pub mod tax;

pub use tax::{TaxKind, TaxRule};
