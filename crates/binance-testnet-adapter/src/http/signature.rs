/*
[INPUT]:  Url-encoded request parameters and API secret
[OUTPUT]: Hex-encoded HMAC-SHA256 signature for the `signature` parameter
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter layout
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{BinanceError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Signs request parameter strings for SIGNED endpoints
pub struct RequestSigner {
    secret: String,
}

impl RequestSigner {
    /// Create a new request signer with the given API secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign a request for a SIGNED futures endpoint
    ///
    /// The payload is the exact url-encoded string sent as query or body,
    /// including `timestamp` and `recvWindow`. Returns lowercase hex.
    pub fn sign_request(&self, payload: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|_| BinanceError::InvalidSignature)?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_request_matches_published_example() {
        let signer =
            RequestSigner::new("NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j");
        let payload = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";

        assert_eq!(
            signer.sign_request(payload).unwrap(),
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_signature_depends_on_payload() {
        let signer = RequestSigner::new("secret");
        let first = signer.sign_request("symbol=BTCUSDT&timestamp=1").unwrap();
        let second = signer.sign_request("symbol=BTCUSDT&timestamp=2").unwrap();

        assert_eq!(first.len(), 64);
        assert_ne!(first, second);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let signer = RequestSigner::new("super-secret");
        let rendered = format!("{:?}", signer);
        assert!(!rendered.contains("super-secret"));
    }
}
