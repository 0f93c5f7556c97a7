use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::credentials::ServiceAccountKey;

#[derive(Error, Debug)]
pub enum GcpAuthError {
    #[error("failed to parse private key: {0}")]
    KeyParse(String),

    #[error("failed to sign oauth assertion: {0}")]
    Assertion(String),

    #[error("token request failed: {0}")]
    TokenRequest(#[from] reqwest::Error),

    #[error("token request rejected with status {0}")]
    TokenRejected(reqwest::StatusCode),
}

/// JWT claims for the Google OAuth2 JWT-bearer grant
#[derive(Debug, Serialize)]
struct AssertionClaims {
    iss: String,
    sub: String,
    scope: String,
    aud: String,
    exp: i64,
    iat: i64,
}

#[derive(Debug, Deserialize)]
struct GoogleTokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Clone, Debug)]
struct TokenCache {
    access_token: String,
    expires_at: i64,
}

/// OAuth2 access-token provider for a Google service account
///
/// One provider per scope; the FCM and Firestore clients each hold their
/// own. Tokens are cached until 60 seconds before expiry.
pub struct OauthTokenProvider {
    credentials: Arc<ServiceAccountKey>,
    scope: String,
    token_cache: Arc<Mutex<Option<TokenCache>>>,
    http_client: reqwest::Client,
}

impl OauthTokenProvider {
    pub fn new(credentials: Arc<ServiceAccountKey>, scope: impl Into<String>) -> Self {
        Self {
            credentials,
            scope: scope.into(),
            token_cache: Arc::new(Mutex::new(None)),
            http_client: reqwest::Client::new(),
        }
    }

    /// Get an access token, reusing the cached one while it is still valid
    pub async fn access_token(&self) -> Result<String, GcpAuthError> {
        {
            let cache = self.token_cache.lock().expect("Token cache lock poisoned");
            if let Some(cached) = cache.as_ref() {
                let now = Utc::now().timestamp();
                if cached.expires_at > now + 60 {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        let assertion = self.sign_assertion()?;

        let params = [
            ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
            ("assertion", &assertion),
        ];

        let response = self
            .http_client
            .post(&self.credentials.token_uri)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GcpAuthError::TokenRejected(response.status()));
        }

        let token_response: GoogleTokenResponse = response.json().await?;

        let expires_at = Utc::now().timestamp() + token_response.expires_in;
        {
            let mut cache = self.token_cache.lock().expect("Token cache lock poisoned");
            *cache = Some(TokenCache {
                access_token: token_response.access_token.clone(),
                expires_at,
            });
        }

        Ok(token_response.access_token)
    }

    fn sign_assertion(&self) -> Result<String, GcpAuthError> {
        let now = Utc::now();
        let claims = AssertionClaims {
            iss: self.credentials.client_email.clone(),
            sub: self.credentials.client_email.clone(),
            scope: self.scope.clone(),
            aud: self.credentials.token_uri.clone(),
            exp: (now + Duration::hours(1)).timestamp(),
            iat: now.timestamp(),
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.credentials.private_key.as_bytes())
            .map_err(|e| GcpAuthError::KeyParse(e.to_string()))?;

        encode(&Header::new(jsonwebtoken::Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| GcpAuthError::Assertion(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> ServiceAccountKey {
        ServiceAccountKey {
            project_id: "test-project".to_string(),
            private_key_id: "key-id".to_string(),
            private_key: "not-a-real-key".to_string(),
            client_email: "test@test.iam.gserviceaccount.com".to_string(),
            client_id: "123456".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
        }
    }

    #[test]
    fn test_provider_creation() {
        let provider = OauthTokenProvider::new(
            Arc::new(test_credentials()),
            "https://www.googleapis.com/auth/cloud-platform",
        );
        assert_eq!(provider.scope, "https://www.googleapis.com/auth/cloud-platform");
    }

    #[test]
    fn test_sign_assertion_rejects_malformed_key() {
        let provider = OauthTokenProvider::new(
            Arc::new(test_credentials()),
            "https://www.googleapis.com/auth/datastore",
        );

        // The fixture key is not valid PEM, so signing must fail cleanly
        let result = provider.sign_assertion();
        assert!(matches!(result, Err(GcpAuthError::KeyParse(_))));
    }
}
