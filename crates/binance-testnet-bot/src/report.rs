/*
[INPUT]:  Execution outcome of one CLI run
[OUTPUT]: Fixed-format human-readable report text
[POS]:    Presentation layer - everything printed to stdout
[UPDATE]: When changing the printed report layout
*/

use console::style;
use std::fmt::Write;

use crate::orders::OrderResult;
use crate::runner::{Execution, Outcome};
use crate::validator::OrderRequest;

pub fn render_request(request: &OrderRequest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", style("=== ORDER REQUEST ===").bold());
    let _ = writeln!(out, "Symbol:   {}", request.symbol());
    let _ = writeln!(out, "Side:     {}", request.side());
    let _ = writeln!(out, "Type:     {}", request.order_type());
    let _ = writeln!(out, "Quantity: {}", request.quantity().normalize());
    if let Some(price) = request.price() {
        let _ = writeln!(out, "Price:    {}", price.normalize());
    }
    out.push('\n');
    out
}

pub fn render_response(result: &OrderResult) -> String {
    let avg_price = result
        .avg_price
        // unfilled orders report 0 as their average
        .filter(|price| !price.is_zero())
        .map(|price| price.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let mut out = String::new();
    let _ = writeln!(out, "{}", style("=== ORDER RESPONSE ===").bold());
    let _ = writeln!(out, "Order ID:     {}", result.order_id);
    let _ = writeln!(out, "Status:       {}", result.status);
    let _ = writeln!(out, "Executed Qty: {}", result.executed_qty);
    let _ = writeln!(out, "Avg Price:    {}", avg_price);
    let _ = writeln!(
        out,
        "\n{}\n",
        style("=== ORDER PLACED SUCCESSFULLY ===").bold().green()
    );
    out
}

pub fn render_failure(message: &str) -> String {
    format!(
        "\n{}\nError: {}\n\n",
        style("=== ORDER FAILED ===").bold().red(),
        message
    )
}

pub fn render_dry_run() -> String {
    format!("{}\n\n", style("=== DRY RUN: ORDER NOT SENT ===").bold().yellow())
}

/// Full transcript for one run, in the order events happened
pub fn render(execution: &Execution) -> String {
    let mut out = String::new();
    if let Some(request) = &execution.request {
        out.push_str(&render_request(request));
    }
    match &execution.outcome {
        Ok(Outcome::Placed(result)) => out.push_str(&render_response(result)),
        Ok(Outcome::DryRun) => out.push_str(&render_dry_run()),
        Err(err) => out.push_str(&render_failure(&err.to_string())),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BotError;
    use crate::validator::{ValidationError, validate_order_params};
    use binance_testnet_adapter::OrderStatus;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn plain() {
        console::set_colors_enabled(false);
    }

    #[test]
    fn test_limit_request_summary() {
        plain();
        let request =
            validate_order_params("btcusdt", "sell", "limit", "0.0010", Some("50000.0")).unwrap();
        assert_eq!(
            render_request(&request),
            "\n=== ORDER REQUEST ===\nSymbol:   BTCUSDT\nSide:     SELL\nType:     LIMIT\nQuantity: 0.001\nPrice:    50000\n\n"
        );
    }

    #[test]
    fn test_market_request_has_no_price_line() {
        plain();
        let request = validate_order_params("BTCUSDT", "buy", "market", "1", Some("5")).unwrap();
        assert!(!render_request(&request).contains("Price:"));
    }

    #[test]
    fn test_response_report() {
        plain();
        let result = OrderResult {
            order_id: 4032423,
            status: OrderStatus::Filled,
            executed_qty: Decimal::from_str("0.001").unwrap(),
            avg_price: None,
        };
        assert_eq!(
            render_response(&result),
            "=== ORDER RESPONSE ===\nOrder ID:     4032423\nStatus:       FILLED\nExecuted Qty: 0.001\nAvg Price:    N/A\n\n=== ORDER PLACED SUCCESSFULLY ===\n\n"
        );
    }

    #[test]
    fn test_zero_avg_price_is_not_available() {
        plain();
        let resting = OrderResult {
            order_id: 1,
            status: OrderStatus::New,
            executed_qty: Decimal::ZERO,
            avg_price: Some(Decimal::from_str("0.00").unwrap()),
        };
        assert!(render_response(&resting).contains("Avg Price:    N/A\n"));

        let filled = OrderResult {
            avg_price: Some(Decimal::from_str("63000.5").unwrap()),
            ..resting
        };
        assert!(render_response(&filled).contains("Avg Price:    63000.5\n"));
    }

    #[test]
    fn test_failure_report_without_request() {
        plain();
        let execution = Execution {
            request: None,
            outcome: Err(BotError::Validation(ValidationError::PriceRequired)),
        };
        assert_eq!(
            render(&execution),
            "\n=== ORDER FAILED ===\nError: Price is required for LIMIT orders.\n\n"
        );
    }

    #[test]
    fn test_dry_run_report() {
        plain();
        let request = validate_order_params("BTCUSDT", "buy", "market", "1", None).unwrap();
        let execution = Execution {
            request: Some(request),
            outcome: Ok(Outcome::DryRun),
        };
        let text = render(&execution);
        assert!(text.starts_with("\n=== ORDER REQUEST ==="));
        assert!(text.ends_with("=== DRY RUN: ORDER NOT SENT ===\n\n"));
    }
}
