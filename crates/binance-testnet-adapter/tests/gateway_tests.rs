/*
[INPUT]:  Mock gateway outcomes
[OUTPUT]: Test results for the order gateway seam
[POS]:    Integration tests - gateway abstraction
[UPDATE]: When the gateway trait or mock changes
*/

mod common;

use binance_testnet_adapter::{
    MockOrderGateway, MockOutcome, NewOrderRequest, NewOrderResponse, OrderGateway, OrderType,
    Side,
};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use tokio_test::assert_ok;

fn request() -> NewOrderRequest {
    NewOrderRequest {
        symbol: "ETHUSDT".to_string(),
        side: Side::Sell,
        order_type: OrderType::Market,
        quantity: Decimal::ONE,
        price: None,
        time_in_force: None,
        new_client_order_id: Some("mock-1".to_string()),
    }
}

#[tokio::test]
async fn test_mock_gateway_records_requests() {
    let ack: NewOrderResponse =
        serde_json::from_value(common::order_ack("MARKET", "FILLED", "2000")).expect("ack");
    let gateway = MockOrderGateway::accepting(ack.clone());

    let response = assert_ok!(gateway.place_order(&request()).await);
    assert_eq!(response, ack);
    assert_eq!(gateway.requests(), vec![request()]);
}

#[tokio::test]
async fn test_mock_gateway_rejects() {
    let gateway = MockOrderGateway::rejecting(StatusCode::BAD_REQUEST, -1121, "Invalid symbol.");
    let err = gateway.place_order(&request()).await.unwrap_err();
    assert_eq!(err.api_message(), Some("Invalid symbol."));
    assert_eq!(gateway.requests().len(), 1);
}

#[tokio::test]
async fn test_mock_gateway_timeout() {
    let gateway = MockOrderGateway::with_outcome(MockOutcome::Timeout);
    let err = gateway.place_order(&request()).await.unwrap_err();
    assert!(err.is_network_error());
}
