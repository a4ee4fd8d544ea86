/*
[INPUT]:  Exchange-shaped order requests
[OUTPUT]: Order acknowledgements or adapter errors
[POS]:    HTTP layer - order placement abstraction over the client
[UPDATE]: When the order surface used by callers changes
*/

use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

use crate::http::{BinanceClient, BinanceError, Result};
use crate::types::{NewOrderRequest, NewOrderResponse};

/// Order placement surface
///
/// Implemented by [`BinanceClient`] for real calls and by
/// [`MockOrderGateway`] for tests.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit one order and return the exchange acknowledgement
    async fn place_order(&self, req: &NewOrderRequest) -> Result<NewOrderResponse>;
}

#[async_trait]
impl OrderGateway for BinanceClient {
    async fn place_order(&self, req: &NewOrderRequest) -> Result<NewOrderResponse> {
        self.new_order(req).await
    }
}

#[async_trait]
impl<T: OrderGateway + ?Sized> OrderGateway for Arc<T> {
    async fn place_order(&self, req: &NewOrderRequest) -> Result<NewOrderResponse> {
        self.as_ref().place_order(req).await
    }
}

/// What a [`MockOrderGateway`] answers with
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Accept(NewOrderResponse),
    Reject { status: u16, code: i64, message: String },
    Timeout,
}

/// Mock gateway for testing
#[derive(Debug)]
pub struct MockOrderGateway {
    outcome: MockOutcome,
    requests: Mutex<Vec<NewOrderRequest>>,
}

impl MockOrderGateway {
    /// Gateway that accepts every order with the given acknowledgement
    pub fn accepting(response: NewOrderResponse) -> Self {
        Self::with_outcome(MockOutcome::Accept(response))
    }

    /// Gateway that rejects every order with an exchange error body
    pub fn rejecting(status: StatusCode, code: i64, message: &str) -> Self {
        Self::with_outcome(MockOutcome::Reject {
            status: status.as_u16(),
            code,
            message: message.to_string(),
        })
    }

    pub fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<NewOrderRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl OrderGateway for MockOrderGateway {
    async fn place_order(&self, req: &NewOrderRequest) -> Result<NewOrderResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req.clone());
        }
        match &self.outcome {
            MockOutcome::Accept(response) => Ok(response.clone()),
            MockOutcome::Reject {
                status,
                code,
                message,
            } => Err(BinanceError::Api {
                status: *status,
                code: *code,
                message: message.clone(),
            }),
            MockOutcome::Timeout => Err(BinanceError::Timeout { duration: 30 }),
        }
    }
}
