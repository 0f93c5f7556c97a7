//! Channel access tokens for the real-time communication layer
//!
//! A token authorizes one client (`uid`) to join one named channel with a
//! given role for a limited time. Tokens are HS256 JWTs signed with the
//! RTC application certificate; nothing is persisted server-side.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role granted to every issued token. Join-side roles other than
/// publisher are not issued by this service.
pub const ROLE_PUBLISHER: &str = "publisher";

/// Token validity window in seconds
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

#[derive(Error, Debug)]
pub enum RtcTokenError {
    #[error("failed to sign channel token: {0}")]
    Signing(String),

    #[error("invalid channel token: {0}")]
    Invalid(String),

    #[error("channel id must not be empty")]
    EmptyChannelId,
}

/// Claims embedded in a channel access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RtcClaims {
    /// RTC application identity
    pub iss: String,
    /// Channel the bearer may join
    pub channel: String,
    /// Client identifier within the channel (0 = let the RTC service assign one)
    pub uid: u32,
    /// Role claim, always "publisher"
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issues signed, time-limited channel access tokens
///
/// One issuer per process, constructed at startup from the RTC app
/// identity and certificate resolved out of the secret store.
pub struct RtcTokenIssuer {
    app_id: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl RtcTokenIssuer {
    pub fn new(app_id: impl Into<String>, app_certificate: &str) -> Self {
        Self {
            app_id: app_id.into(),
            encoding_key: EncodingKey::from_secret(app_certificate.as_bytes()),
            decoding_key: DecodingKey::from_secret(app_certificate.as_bytes()),
            ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }

    /// Override the validity window (tests and short-lived preview channels)
    pub fn with_ttl(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    /// Issue a publisher token for `channel_id`/`uid`, valid for the
    /// configured window starting now
    pub fn issue(&self, channel_id: &str, uid: u32) -> Result<String, RtcTokenError> {
        if channel_id.is_empty() {
            return Err(RtcTokenError::EmptyChannelId);
        }

        let now = Utc::now().timestamp();
        let claims = RtcClaims {
            iss: self.app_id.clone(),
            channel: channel_id.to_string(),
            uid,
            role: ROLE_PUBLISHER.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| RtcTokenError::Signing(e.to_string()))
    }

    /// Decode and validate a token issued by this application
    pub fn verify(&self, token: &str) -> Result<RtcClaims, RtcTokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.app_id]);

        decode::<RtcClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| RtcTokenError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> RtcTokenIssuer {
        RtcTokenIssuer::new("app-id-1", "a-sufficiently-long-app-certificate")
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let issuer = issuer();
        let before = Utc::now().timestamp();

        let token = issuer.issue("room1", 42).unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.iss, "app-id-1");
        assert_eq!(claims.channel, "room1");
        assert_eq!(claims.uid, 42);
        assert_eq!(claims.role, ROLE_PUBLISHER);
        // exp is bound to issue time + the fixed window
        assert_eq!(claims.exp, claims.iat + DEFAULT_TOKEN_TTL_SECS);
        assert!(claims.iat >= before);
    }

    #[test]
    fn test_uid_zero_is_valid() {
        let issuer = issuer();
        let token = issuer.issue("room1", 0).unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.uid, 0);
    }

    #[test]
    fn test_empty_channel_rejected() {
        let issuer = issuer();
        assert!(matches!(
            issuer.issue("", 1),
            Err(RtcTokenError::EmptyChannelId)
        ));
    }

    #[test]
    fn test_verify_rejects_foreign_certificate() {
        let token = issuer().issue("room1", 7).unwrap();

        let other = RtcTokenIssuer::new("app-id-1", "a-different-certificate-entirely");
        assert!(matches!(
            other.verify(&token),
            Err(RtcTokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let issuer = RtcTokenIssuer::new("app-id-1", "a-sufficiently-long-app-certificate")
            .with_ttl(-120);

        let token = issuer.issue("room1", 7).unwrap();
        assert!(matches!(
            issuer.verify(&token),
            Err(RtcTokenError::Invalid(_))
        ));
    }
}
