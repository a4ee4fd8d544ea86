/*
[INPUT]:  BINANCE_API_KEY / BINANCE_API_SECRET environment variables
[OUTPUT]: Order acknowledgement printed to stdout
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use binance_testnet_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: place a small MARKET order on the futures testnet
///
/// SIGNED endpoints require:
/// 1. The API key in the X-MBX-APIKEY header
/// 2. An HMAC-SHA256 signature over the request parameters
#[tokio::main]
async fn main() {
    println!("=== Binance Futures Testnet Order Example ===\n");

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read credentials: {}", e);
            return;
        }
    };

    let client = match BinanceClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}", client.base_url());

    let order_req = NewOrderRequest {
        symbol: "BTCUSDT".to_string(),
        side: Side::Buy,
        order_type: OrderType::Market,
        quantity: Decimal::from_str("0.001").unwrap_or_default(),
        price: None,
        time_in_force: None,
        new_client_order_id: None,
    };
    println!("\nOrder request:\n  {:?}", order_req);

    match client.new_order(&order_req).await {
        Ok(ack) => println!("\n✓ Order {} accepted with status {}", ack.order_id, ack.status),
        Err(e) => eprintln!("\n✗ Order failed: {}", e),
    }
}
