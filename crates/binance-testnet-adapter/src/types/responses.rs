/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderStatus, OrderType, Side};

/// Acknowledgement returned by `POST /fapi/v1/order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderResponse {
    pub order_id: i64,
    pub symbol: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub client_order_id: String,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub avg_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub orig_qty: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub executed_qty: Decimal,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: Side,
    /// Echoed as sent; MARKET acks may carry any policy literal
    #[serde(default)]
    pub time_in_force: Option<String>,
    #[serde(default)]
    pub update_time: i64,
}
