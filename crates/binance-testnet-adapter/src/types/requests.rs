/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs and their signed-parameter form
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Side, TimeInForce};

/// Payload for `POST /fapi/v1/order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<String>,
}

impl NewOrderRequest {
    /// Request parameters in the order they are encoded and signed
    ///
    /// Decimals are normalized so `0.0010` goes out as `0.001`.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", self.order_type.as_str().to_string()),
            ("quantity", self.quantity.normalize().to_string()),
        ];
        if let Some(price) = self.price {
            params.push(("price", price.normalize().to_string()));
        }
        if let Some(tif) = self.time_in_force {
            params.push(("timeInForce", tif.as_str().to_string()));
        }
        if let Some(id) = &self.new_client_order_id {
            params.push(("newClientOrderId", id.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_limit_params_include_price_and_tif() {
        let req = NewOrderRequest {
            symbol: "BTCUSDT".to_string(),
            side: Side::Sell,
            order_type: OrderType::Limit,
            quantity: Decimal::from_str("0.0010").unwrap(),
            price: Some(Decimal::from_str("50000.00").unwrap()),
            time_in_force: Some(TimeInForce::Gtc),
            new_client_order_id: None,
        };

        assert_eq!(
            req.to_params(),
            vec![
                ("symbol", "BTCUSDT".to_string()),
                ("side", "SELL".to_string()),
                ("type", "LIMIT".to_string()),
                ("quantity", "0.001".to_string()),
                ("price", "50000".to_string()),
                ("timeInForce", "GTC".to_string()),
            ]
        );
    }

    #[test]
    fn test_market_params_omit_price() {
        let req = NewOrderRequest {
            symbol: "ETHUSDT".to_string(),
            side: Side::Buy,
            order_type: OrderType::Market,
            quantity: Decimal::from_str("2").unwrap(),
            price: None,
            time_in_force: None,
            new_client_order_id: Some("bot-1".to_string()),
        };

        let params = req.to_params();
        assert!(params.iter().all(|(key, _)| *key != "price" && *key != "timeInForce"));
        assert_eq!(params.last(), Some(&("newClientOrderId", "bot-1".to_string())));
    }
}
