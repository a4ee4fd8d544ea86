/*
[INPUT]:  Raw order arguments, dry-run flag, context factory
[OUTPUT]: Execution record (validated request + outcome)
[POS]:    Orchestration layer - validate, connect, dispatch
[UPDATE]: When changing the order pipeline steps
*/

use binance_testnet_adapter::OrderType;
use std::process::ExitCode;
use tracing::{error, info, warn};

use crate::context::TradingContext;
use crate::error::BotError;
use crate::orders::{OrderResult, place_order};
use crate::validator::{OrderRequest, validate_order_params};

/// Order fields exactly as typed on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderArgs {
    pub symbol: String,
    pub side: String,
    pub order_type: String,
    pub quantity: String,
    pub price: Option<String>,
}

#[derive(Debug)]
pub enum Outcome {
    Placed(OrderResult),
    DryRun,
}

/// Everything one run produced
#[derive(Debug)]
pub struct Execution {
    /// Present once validation passed
    pub request: Option<OrderRequest>,
    pub outcome: Result<Outcome, BotError>,
}

impl Execution {
    pub fn exit_code(&self) -> ExitCode {
        match &self.outcome {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => err.exit_code(),
        }
    }
}

/// Run the pipeline once
///
/// `connect` is only called after validation succeeds and never for a dry
/// run, so invalid input cannot reach credentials or the network.
pub async fn execute<F>(args: &OrderArgs, dry_run: bool, connect: F) -> Execution
where
    F: FnOnce() -> Result<TradingContext, BotError>,
{
    let request = match validate_order_params(
        &args.symbol,
        &args.side,
        &args.order_type,
        &args.quantity,
        args.price.as_deref(),
    ) {
        Ok(request) => request,
        Err(err) => {
            let err = BotError::from(err);
            error!(kind = err.kind(), error = %err, "order failed validation");
            return Execution {
                request: None,
                outcome: Err(err),
            };
        }
    };

    if request.order_type() == OrderType::Market && args.price.is_some() {
        warn!("price ignored for MARKET order");
    }
    info!(
        symbol = request.symbol(),
        side = %request.side(),
        order_type = %request.order_type(),
        "order validated"
    );

    if dry_run {
        info!("dry-run requested; order not sent");
        return Execution {
            request: Some(request),
            outcome: Ok(Outcome::DryRun),
        };
    }

    let outcome = match connect() {
        Ok(context) => place_order(context.gateway(), &request)
            .await
            .map(Outcome::Placed),
        Err(err) => Err(err),
    };

    match &outcome {
        Ok(Outcome::Placed(result)) => info!(
            order_id = result.order_id,
            status = %result.status,
            "order placed successfully"
        ),
        Ok(Outcome::DryRun) => {}
        Err(err) => error!(kind = err.kind(), error = %err, "order failed"),
    }

    Execution {
        request: Some(request),
        outcome,
    }
}
