/*
[INPUT]:  Validated OrderRequest and an order gateway
[OUTPUT]: OrderResult or a classified BotError
[POS]:    Dispatch layer - the single order placement call
[UPDATE]: When changing the order payload or failure classification
*/

use binance_testnet_adapter::{NewOrderResponse, OrderGateway, OrderStatus};
use rust_decimal::Decimal;
use tracing::{error, info};
use uuid::Uuid;

use crate::error::BotError;
use crate::validator::OrderRequest;

/// What the exchange reported for a placed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderResult {
    pub order_id: i64,
    pub status: OrderStatus,
    pub executed_qty: Decimal,
    /// `None` when the exchange did not report a fill price
    pub avg_price: Option<Decimal>,
}

impl From<NewOrderResponse> for OrderResult {
    fn from(response: NewOrderResponse) -> Self {
        Self {
            order_id: response.order_id,
            status: response.status,
            executed_qty: response.executed_qty,
            avg_price: response.avg_price,
        }
    }
}

/// Place one order through `gateway`; never retries
pub async fn place_order(
    gateway: &dyn OrderGateway,
    request: &OrderRequest,
) -> Result<OrderResult, BotError> {
    let client_order_id = Uuid::new_v4().to_string();
    let api_request = request.to_api_request(Some(client_order_id.clone()));

    info!(
        symbol = %api_request.symbol,
        side = %api_request.side,
        order_type = %api_request.order_type,
        quantity = %api_request.quantity,
        price = ?api_request.price,
        time_in_force = ?api_request.time_in_force,
        client_order_id = %client_order_id,
        "placing order"
    );

    match gateway.place_order(&api_request).await {
        Ok(response) => {
            info!(
                order_id = response.order_id,
                status = %response.status,
                executed_qty = %response.executed_qty,
                avg_price = ?response.avg_price,
                "order response received"
            );
            Ok(OrderResult::from(response))
        }
        Err(err) => {
            let classified = BotError::from_order_failure(err);
            error!(kind = classified.kind(), error = %classified, "order placement failed");
            Err(classified)
        }
    }
}
