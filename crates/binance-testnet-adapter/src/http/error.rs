/*
[INPUT]:  Error sources (HTTP transport, exchange error bodies, serialization, config)
[OUTPUT]: Structured error types with classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or new exchange error codes
*/

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Exchange error codes that mean the key, secret or signature was refused
const AUTH_ERROR_CODES: [i64; 3] = [
    -1022, // signature for this request is not valid
    -2014, // API-key format invalid
    -2015, // invalid API-key, IP, or permissions for action
];

/// Main error type for the Binance adapter
#[derive(Error, Debug)]
pub enum BinanceError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },

    /// Credentials were missing or refused
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Request signature is invalid
    #[error("Invalid request signature")]
    InvalidSignature,

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after}s")]
    RateLimit { retry_after: u64 },

    /// Connection timeout
    #[error("Connection timeout after {duration}s")]
    Timeout { duration: u64 },
}

/// Error body returned by the futures API on non-2xx responses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}

impl BinanceError {
    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            BinanceError::Authentication { .. } | BinanceError::InvalidSignature => true,
            BinanceError::Api { status, code, .. } => {
                *status == StatusCode::UNAUTHORIZED.as_u16() || AUTH_ERROR_CODES.contains(code)
            }
            _ => false,
        }
    }

    /// Check if the request never got a usable answer from the exchange
    pub fn is_network_error(&self) -> bool {
        match self {
            BinanceError::Http(err) => !err.is_decode(),
            BinanceError::Timeout { .. } | BinanceError::RateLimit { .. } => true,
            _ => false,
        }
    }

    /// Create an API error from status code and raw response body
    ///
    /// Bodies that are not the exchange's `{"code", "msg"}` shape keep the
    /// raw text as the message and use the HTTP status as the code.
    pub fn api_error(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => BinanceError::Api {
                status: status.as_u16(),
                code: parsed.code,
                message: parsed.msg,
            },
            Err(_) => BinanceError::Api {
                status: status.as_u16(),
                code: i64::from(status.as_u16()),
                message: if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                } else {
                    body.trim().to_string()
                },
            },
        }
    }

    /// Exchange-supplied message, when there is one
    pub fn api_message(&self) -> Option<&str> {
        match self {
            BinanceError::Api { message, .. } | BinanceError::Authentication { message } => {
                Some(message)
            }
            _ => None,
        }
    }
}

/// Result type alias for Binance operations
pub type Result<T> = std::result::Result<T, BinanceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_transport_failures_are_network_errors() {
        assert!(BinanceError::Timeout { duration: 30 }.is_network_error());
        assert!(BinanceError::RateLimit { retry_after: 7 }.is_network_error());
        assert!(!BinanceError::InvalidSignature.is_network_error());
        assert!(!BinanceError::InvalidResponse("<html>".to_string()).is_network_error());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(BinanceError::InvalidSignature.is_auth_error());
        assert!(
            BinanceError::Authentication {
                message: "missing key".to_string()
            }
            .is_auth_error()
        );
        assert!(!BinanceError::Timeout { duration: 30 }.is_auth_error());
    }

    #[test]
    fn test_api_error_from_exchange_body() {
        let err = BinanceError::api_error(
            StatusCode::BAD_REQUEST,
            r#"{"code":-2019,"msg":"Margin is insufficient."}"#,
        );
        match &err {
            BinanceError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(*status, 400);
                assert_eq!(*code, -2019);
                assert_eq!(message, "Margin is insufficient.");
            }
            _ => panic!("Expected Api error variant"),
        }
        assert!(!err.is_auth_error());
        assert!(!err.is_network_error());
    }

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED, -2015, true)]
    #[case(StatusCode::BAD_REQUEST, -2014, true)]
    #[case(StatusCode::BAD_REQUEST, -1022, true)]
    #[case(StatusCode::UNAUTHORIZED, -1, true)]
    #[case(StatusCode::BAD_REQUEST, -1121, false)]
    #[case(StatusCode::BAD_REQUEST, -4164, false)]
    fn test_api_error_auth_codes(
        #[case] status: StatusCode,
        #[case] code: i64,
        #[case] expected: bool,
    ) {
        let body = format!(r#"{{"code":{code},"msg":"rejected"}}"#);
        let err = BinanceError::api_error(status, &body);
        assert_eq!(err.is_auth_error(), expected);
    }

    #[test]
    fn test_api_error_non_json_body() {
        let err = BinanceError::api_error(StatusCode::BAD_GATEWAY, "");
        match err {
            BinanceError::Api { code, message, .. } => {
                assert_eq!(code, 502);
                assert_eq!(message, "Bad Gateway");
            }
            _ => panic!("Expected Api error variant"),
        }
    }
}
