/*
[INPUT]:  Order requests and signed-request plumbing
[OUTPUT]: Order acknowledgements from the exchange
[POS]:    HTTP layer - trading endpoints (require API key + HMAC signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{BinanceClient, Result};
use crate::types::{NewOrderRequest, NewOrderResponse};
use reqwest::Method;
use tracing::debug;

const NEW_ORDER_ENDPOINT: &str = "/fapi/v1/order";

impl BinanceClient {
    /// Create a new order
    ///
    /// POST /fapi/v1/order
    /// Requires: X-MBX-APIKEY header + HMAC-SHA256 signature
    pub async fn new_order(&self, req: &NewOrderRequest) -> Result<NewOrderResponse> {
        let params = req.to_params();
        debug!(
            endpoint = NEW_ORDER_ENDPOINT,
            symbol = %req.symbol,
            "sending signed order request"
        );
        let builder = self.signed_request(Method::POST, NEW_ORDER_ENDPOINT, &params)?;
        self.send_json(builder).await
    }
}
