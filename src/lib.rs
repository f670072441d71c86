//! Kaspro billing engine
//!
//! Validates a billing (kwitansi) value against its down payment deduction
//! and derives the withheld taxes and net payable amount, behind a small
//! actix-web boundary.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use actix_web::web;

// Re-export commonly used types
pub use modules::billing;
pub use modules::taxes;

/// Register every route of the service.
///
/// The caller provides the `BillingCalculator` and JSON config as app data.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(modules::health::configure)
        .configure(modules::billing::controllers::configure);
}
