/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared fixtures for bot integration tests
[POS]:    Test infrastructure - shared across bot test modules
[UPDATE]: When adding new test patterns or fixtures
*/

use binance_testnet_adapter::{API_KEY_ENV, API_SECRET_ENV};
use binance_testnet_bot::OrderArgs;
use std::path::PathBuf;

/// Credential lookup that knows both variables
#[allow(dead_code)]
pub fn test_credentials(name: &str) -> Option<String> {
    match name {
        API_KEY_ENV => Some("test-api-key".to_string()),
        API_SECRET_ENV => Some("test-api-secret".to_string()),
        _ => None,
    }
}

#[allow(dead_code)]
pub fn order_args(order_type: &str, price: Option<&str>) -> OrderArgs {
    OrderArgs {
        symbol: "btcusdt".to_string(),
        side: "buy".to_string(),
        order_type: order_type.to_string(),
        quantity: "0.001".to_string(),
        price: price.map(str::to_string),
    }
}

/// Fresh empty directory under the system temp dir
#[allow(dead_code)]
pub fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{label}-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
