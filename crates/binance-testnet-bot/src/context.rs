/*
[INPUT]:  Bot configuration and API credentials from the environment
[OUTPUT]: TradingContext owning the one order gateway for the process
[POS]:    Client wrapper - authenticated exchange handle
[UPDATE]: When changing how the exchange client is constructed
*/

use binance_testnet_adapter::{BinanceClient, Credentials, OrderGateway};
use tracing::{error, info};

use crate::config::BotConfig;
use crate::error::BotError;

/// Explicitly constructed handle passed to the dispatcher
pub struct TradingContext {
    gateway: Box<dyn OrderGateway>,
}

impl TradingContext {
    /// Wrap an existing gateway, e.g. a mock in tests
    pub fn new(gateway: Box<dyn OrderGateway>) -> Self {
        Self { gateway }
    }

    /// Build the Binance client from process environment credentials
    pub fn from_env(config: &BotConfig) -> Result<Self, BotError> {
        Self::connect(config, |name| std::env::var(name).ok())
    }

    /// Build the Binance client from credentials found through `lookup`
    ///
    /// Fails with [`BotError::Client`] before any network activity when
    /// either credential is missing or empty.
    pub fn connect<F>(config: &BotConfig, lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(lookup).map_err(|err| {
            error!(error = %err, "API credentials unavailable");
            BotError::from_client_setup(err)
        })?;

        let client = BinanceClient::with_config_and_base_url(
            config.client_config(),
            credentials,
            &config.base_url,
        )
        .map_err(|err| {
            error!(error = %err, "failed to initialize Binance client");
            BotError::from_client_setup(err)
        })?;

        info!(base_url = %client.base_url(), "Binance testnet client initialized");
        Ok(Self::new(Box::new(client)))
    }

    pub fn gateway(&self) -> &dyn OrderGateway {
        self.gateway.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binance_testnet_adapter::{API_KEY_ENV, API_SECRET_ENV};
    use crate::error::CREDENTIALS_MISSING_MESSAGE;

    #[test]
    fn test_missing_credentials_is_client_error() {
        let result = TradingContext::connect(&BotConfig::default(), |_| None);
        match result {
            Err(BotError::Client(message)) => assert_eq!(message, CREDENTIALS_MISSING_MESSAGE),
            Err(other) => panic!("expected client error, got {other:?}"),
            Ok(_) => panic!("expected client error"),
        }
    }

    #[test]
    fn test_empty_secret_is_client_error() {
        let result = TradingContext::connect(&BotConfig::default(), |name| match name {
            API_KEY_ENV => Some("key".to_string()),
            API_SECRET_ENV => Some(String::new()),
            _ => None,
        });
        assert!(matches!(result, Err(BotError::Client(_))));
    }

    #[test]
    fn test_bad_base_url_is_client_error() {
        let config = BotConfig {
            base_url: "::not a url::".to_string(),
            ..BotConfig::default()
        };
        let result = TradingContext::connect(&config, |_| Some("value".to_string()));
        assert!(matches!(result, Err(BotError::Client(_))));
    }

    #[test]
    fn test_connect_with_credentials() {
        let _context = tokio_test::assert_ok!(TradingContext::connect(
            &BotConfig::default(),
            |_| Some("value".to_string())
        ));
    }
}
