/*
[INPUT]:  Raw CLI strings for symbol, side, type, quantity and price
[OUTPUT]: Normalized OrderRequest or the first violated rule
[POS]:    Validation layer - runs before any client is built
[UPDATE]: When adding order fields or changing input rules
*/

use binance_testnet_adapter::{NewOrderRequest, OrderType, Side, TimeInForce};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

const QUOTE_SUFFIX: &str = "USDT";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Symbol is required.")]
    SymbolRequired,
    #[error("Invalid symbol '{0}'. Only USDT-M pairs are supported (e.g., BTCUSDT).")]
    InvalidSymbol(String),
    #[error("Side is required.")]
    SideRequired,
    #[error("Invalid side '{0}'. Must be one of: BUY, SELL.")]
    InvalidSide(String),
    #[error("Order type is required.")]
    OrderTypeRequired,
    #[error("Invalid order type '{0}'. Must be one of: MARKET, LIMIT.")]
    InvalidOrderType(String),
    #[error("Quantity is required.")]
    QuantityRequired,
    #[error("Invalid quantity '{0}'. Must be a number.")]
    QuantityNotANumber(String),
    #[error("Invalid quantity '{0}'. Must be greater than zero.")]
    QuantityNotPositive(String),
    #[error("Invalid quantity '{0}'. Value is outside the supported range.")]
    QuantityOutOfRange(String),
    #[error("Price is required for LIMIT orders.")]
    PriceRequired,
    #[error("Invalid price '{0}'. Must be a number.")]
    PriceNotANumber(String),
    #[error("Invalid price '{0}'. Must be greater than zero.")]
    PriceNotPositive(String),
    #[error("Invalid price '{0}'. Value is outside the supported range.")]
    PriceOutOfRange(String),
}

/// An order that passed every validation rule
///
/// Only [`validate_order_params`] builds one, so `price` is `Some` exactly
/// when the type is LIMIT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    symbol: String,
    side: Side,
    order_type: OrderType,
    quantity: Decimal,
    price: Option<Decimal>,
}

impl OrderRequest {
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Exchange payload for this order; LIMIT orders rest as GTC
    pub fn to_api_request(&self, client_order_id: Option<String>) -> NewOrderRequest {
        let time_in_force = match self.order_type {
            OrderType::Limit => Some(TimeInForce::Gtc),
            OrderType::Market => None,
        };
        NewOrderRequest {
            symbol: self.symbol.clone(),
            side: self.side,
            order_type: self.order_type,
            quantity: self.quantity,
            price: self.price,
            time_in_force,
            new_client_order_id: client_order_id,
        }
    }
}

pub fn validate_symbol(symbol: &str) -> Result<String, ValidationError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ValidationError::SymbolRequired);
    }
    let symbol = symbol.to_uppercase();
    if !symbol.ends_with(QUOTE_SUFFIX) {
        return Err(ValidationError::InvalidSymbol(symbol));
    }
    Ok(symbol)
}

pub fn validate_side(side: &str) -> Result<Side, ValidationError> {
    let side = side.trim();
    if side.is_empty() {
        return Err(ValidationError::SideRequired);
    }
    match side.to_uppercase().as_str() {
        "BUY" => Ok(Side::Buy),
        "SELL" => Ok(Side::Sell),
        other => Err(ValidationError::InvalidSide(other.to_string())),
    }
}

pub fn validate_order_type(order_type: &str) -> Result<OrderType, ValidationError> {
    let order_type = order_type.trim();
    if order_type.is_empty() {
        return Err(ValidationError::OrderTypeRequired);
    }
    match order_type.to_uppercase().as_str() {
        "MARKET" => Ok(OrderType::Market),
        "LIMIT" => Ok(OrderType::Limit),
        other => Err(ValidationError::InvalidOrderType(other.to_string())),
    }
}

pub fn validate_quantity(quantity: &str) -> Result<Decimal, ValidationError> {
    let quantity = quantity.trim();
    if quantity.is_empty() {
        return Err(ValidationError::QuantityRequired);
    }
    let raw = quantity.to_string();
    parse_positive(quantity).map_err(|problem| match problem {
        NumberProblem::NotANumber => ValidationError::QuantityNotANumber(raw),
        NumberProblem::NotPositive => ValidationError::QuantityNotPositive(raw),
        NumberProblem::OutOfRange => ValidationError::QuantityOutOfRange(raw),
    })
}

/// Price is only checked for LIMIT orders; MARKET orders drop it
pub fn validate_price(
    price: Option<&str>,
    order_type: OrderType,
) -> Result<Option<Decimal>, ValidationError> {
    if order_type == OrderType::Market {
        return Ok(None);
    }
    let price = price.map(str::trim).unwrap_or_default();
    if price.is_empty() {
        return Err(ValidationError::PriceRequired);
    }
    let raw = price.to_string();
    let value = parse_positive(price).map_err(|problem| match problem {
        NumberProblem::NotANumber => ValidationError::PriceNotANumber(raw),
        NumberProblem::NotPositive => ValidationError::PriceNotPositive(raw),
        NumberProblem::OutOfRange => ValidationError::PriceOutOfRange(raw),
    })?;
    Ok(Some(value))
}

/// Run every rule in order and return the first failure
pub fn validate_order_params(
    symbol: &str,
    side: &str,
    order_type: &str,
    quantity: &str,
    price: Option<&str>,
) -> Result<OrderRequest, ValidationError> {
    let symbol = validate_symbol(symbol)?;
    let side = validate_side(side)?;
    let order_type = validate_order_type(order_type)?;
    let quantity = validate_quantity(quantity)?;
    let price = validate_price(price, order_type)?;

    Ok(OrderRequest {
        symbol,
        side,
        order_type,
        quantity,
        price,
    })
}

enum NumberProblem {
    NotANumber,
    NotPositive,
    OutOfRange,
}

/// Parse a strictly positive decimal, in plain or exponent form ("1e-3")
///
/// The float parse decides numeric-ness and sign; `Decimal` holds 28
/// fractional digits and magnitudes below ~7.9e28, so a positive number it
/// cannot hold (or rounds to zero) is out of range rather than invalid.
fn parse_positive(raw: &str) -> Result<Decimal, NumberProblem> {
    let float: f64 = raw.parse().map_err(|_| NumberProblem::NotANumber)?;
    let literal = raw.trim_start_matches(['+', '-']).to_ascii_lowercase();
    if float.is_nan() || literal.starts_with("inf") {
        return Err(NumberProblem::NotANumber);
    }
    if float <= 0.0 {
        return Err(NumberProblem::NotPositive);
    }
    match Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
        Ok(value) if value > Decimal::ZERO => Ok(value),
        _ => Err(NumberProblem::OutOfRange),
    }
}
