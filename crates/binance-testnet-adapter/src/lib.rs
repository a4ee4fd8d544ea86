/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Binance futures testnet adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    API_KEY_ENV,
    API_SECRET_ENV,
    BinanceClient,
    BinanceError,
    ClientConfig,
    Credentials,
    MockOrderGateway,
    MockOutcome,
    OrderGateway,
    RequestSigner,
    Result,
    TESTNET_BASE_URL,
};

pub use reqwest::StatusCode;

// Re-export all types
pub use types::*;
