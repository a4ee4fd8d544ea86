/*
[INPUT]:  Validation failures and adapter errors
[OUTPUT]: Closed set of order pipeline failures with exit codes
[POS]:    Error handling layer - what the CLI reports and exits with
[UPDATE]: When changing failure classification or exit codes
*/

use binance_testnet_adapter::BinanceError;
use std::process::ExitCode;
use thiserror::Error;

use crate::validator::ValidationError;

pub const CREDENTIALS_MISSING_MESSAGE: &str = "Missing API credentials. Please set \
BINANCE_API_KEY and BINANCE_API_SECRET in your environment or .env file.";

const NETWORK_MESSAGE: &str =
    "Unable to connect to Binance. Please check your internet connection.";

/// Every way placing an order can fail
#[derive(Error, Debug)]
pub enum BotError {
    /// Local input problem; never reaches the network
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Credential or client setup problem
    #[error("{0}")]
    Client(String),

    /// Exchange rejected the request
    #[error("{0}")]
    Order(String),

    /// Transport-level failure
    #[error("{0}")]
    Network(String),
}

impl BotError {
    /// Short class name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::Validation(_) => "validation",
            BotError::Client(_) => "client",
            BotError::Order(_) => "order",
            BotError::Network(_) => "network",
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Numeric process status for this failure class
    pub fn exit_status(&self) -> u8 {
        match self {
            BotError::Validation(_) => 2,
            BotError::Client(_) => 3,
            BotError::Order(_) => 4,
            BotError::Network(_) => 5,
        }
    }

    /// Classify an error raised while placing an order
    pub fn from_order_failure(err: BinanceError) -> Self {
        if err.is_auth_error() {
            let detail = err.api_message().map(str::to_string).unwrap_or_else(|| err.to_string());
            return BotError::Client(format!("Authentication failed: {detail}"));
        }
        if err.is_network_error() {
            return match err {
                BinanceError::Timeout { duration } => {
                    BotError::Network(format!("Network error: request timed out after {duration}s."))
                }
                BinanceError::RateLimit { retry_after } => BotError::Network(format!(
                    "Network error: rate limited by Binance, retry after {retry_after}s."
                )),
                _ => BotError::Network(format!("Network error: {NETWORK_MESSAGE}")),
            };
        }
        match err {
            BinanceError::Api { code, message, .. } => {
                BotError::Order(format!("Order rejected (code {code}): {message}"))
            }
            BinanceError::UrlParse(err) => {
                BotError::Client(format!("Client configuration error: {err}"))
            }
            other => BotError::Order(format!("Unexpected error: {other}")),
        }
    }

    /// Classify an error raised while building the client
    pub fn from_client_setup(err: BinanceError) -> Self {
        match err {
            BinanceError::Authentication { .. } => {
                BotError::Client(CREDENTIALS_MISSING_MESSAGE.to_string())
            }
            other => BotError::Client(format!("Failed to initialize Binance client: {other}")),
        }
    }
}
