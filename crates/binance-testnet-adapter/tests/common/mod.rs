/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-testnet-adapter tests

use binance_testnet_adapter::{BinanceClient, ClientConfig, Credentials};
use wiremock::MockServer;

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";
#[allow(dead_code)]
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with fixed test credentials
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> BinanceClient {
    let credentials = Credentials::new(TEST_API_KEY, TEST_API_SECRET).expect("credentials");
    BinanceClient::with_config_and_base_url(ClientConfig::default(), credentials, &server.uri())
        .expect("client init")
}

/// Acknowledgement body for an accepted order
pub fn order_ack(order_type: &str, status: &str, avg_price: &str) -> serde_json::Value {
    let executed_qty = if status == "FILLED" { "0.001" } else { "0" };
    serde_json::json!({
        "orderId": 4032423,
        "symbol": "BTCUSDT",
        "status": status,
        "clientOrderId": "testOrder",
        "price": "0",
        "avgPrice": avg_price,
        "origQty": "0.001",
        "executedQty": executed_qty,
        "cumQuote": "0",
        "timeInForce": "GTC",
        "type": order_type,
        "reduceOnly": false,
        "side": "BUY",
        "positionSide": "BOTH",
        "updateTime": 1700000000000_i64
    })
}
