/*
[INPUT]:  Public API exports for binance-testnet-bot crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod orders;
pub mod report;
pub mod runner;
pub mod validator;

// Re-export main types for convenience
pub use config::BotConfig;
pub use context::TradingContext;
pub use error::BotError;
pub use orders::{OrderResult, place_order};
pub use runner::{Execution, OrderArgs, Outcome, execute};
pub use validator::{OrderRequest, ValidationError, validate_order_params};
