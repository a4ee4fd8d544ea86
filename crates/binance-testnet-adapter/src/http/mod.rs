/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod gateway;
pub mod signature;
pub mod trade;

pub use error::{ApiErrorBody, BinanceError, Result};
pub use signature::RequestSigner;

pub use client::{
    API_KEY_ENV, API_SECRET_ENV, BinanceClient, ClientConfig, Credentials, TESTNET_BASE_URL,
};
pub use gateway::{MockOrderGateway, MockOutcome, OrderGateway};
