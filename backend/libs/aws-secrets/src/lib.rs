//! AWS Secrets Manager integration library with caching
//!
//! This library provides a high-level interface to AWS Secrets Manager with:
//! - Automatic caching with configurable TTL
//! - Graceful error handling
//! - Integration with Kubernetes IRSA (IAM Roles for Service Accounts)
//!
//! All credential material used by the service (payment gateway keys, the
//! RTC application certificate, the Google service-account key) is resolved
//! through this crate at startup; nothing secret lives in source or env files.
//!
//! # Example
//!
//! ```no_run
//! use aws_secrets::{PaymentCredentials, SecretManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create manager (uses AWS credentials from environment/IRSA)
//!     let manager = SecretManager::new().await?;
//!
//!     // Fetch payment gateway credentials
//!     let raw = manager.get_secret("prod/payments/razorpay").await?;
//!     let creds = PaymentCredentials::from_json(&raw)?;
//!
//!     Ok(())
//! }
//! ```

use anyhow::Result;
use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::Client as SecretsClient;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Secret not found: {0}")]
    NotFound(String),

    #[error("Access denied to secret: {0}")]
    AccessDenied(String),

    #[error("Secret decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Invalid secret format: {0}")]
    InvalidFormat(String),

    #[error("AWS SDK error: {0}")]
    AwsSdk(String),
}

/// Cached secret value with metadata
#[derive(Clone, Debug)]
struct CachedSecret {
    value: String,
    version_id: Option<String>,
    fetched_at: chrono::DateTime<chrono::Utc>,
}

/// Payment gateway API credentials stored in AWS Secrets Manager
///
/// Stored as JSON: `{"key_id": "rzp_live_...", "key_secret": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCredentials {
    pub key_id: String,
    pub key_secret: String,
}

impl PaymentCredentials {
    pub fn from_json(json: &str) -> Result<Self, SecretError> {
        serde_json::from_str(json).map_err(|e| {
            SecretError::InvalidFormat(format!("Failed to parse payment credentials: {}", e))
        })
    }
}

/// RTC application identity and certificate stored in AWS Secrets Manager
///
/// Stored as JSON: `{"app_id": "...", "app_certificate": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RtcAppConfig {
    pub app_id: String,
    pub app_certificate: String,
}

impl RtcAppConfig {
    pub fn from_json(json: &str) -> Result<Self, SecretError> {
        serde_json::from_str(json).map_err(|e| {
            SecretError::InvalidFormat(format!("Failed to parse RTC app config: {}", e))
        })
    }
}

/// AWS Secrets Manager client with caching
pub struct SecretManager {
    client: SecretsClient,
    cache: Cache<String, CachedSecret>,
}

impl SecretManager {
    /// Create a new SecretManager with default AWS configuration
    ///
    /// Uses AWS credentials from:
    /// 1. Environment variables (AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY)
    /// 2. AWS credentials file (~/.aws/credentials)
    /// 3. IAM instance profile (EC2)
    /// 4. IAM Roles for Service Accounts (EKS/Kubernetes)
    pub async fn new() -> Result<Self> {
        Self::with_cache_ttl(Duration::from_secs(300)).await // 5 minutes default TTL
    }

    /// Create a new SecretManager with custom cache TTL
    pub async fn with_cache_ttl(cache_ttl: Duration) -> Result<Self> {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let client = SecretsClient::new(&config);

        info!(
            "Initialized AWS Secrets Manager client with cache TTL: {:?}",
            cache_ttl
        );

        let cache = Cache::builder()
            .max_capacity(100)
            .time_to_live(cache_ttl)
            .build();

        Ok(Self { client, cache })
    }

    /// Get a secret by name (with caching)
    ///
    /// Returns the secret string value. Cached values are automatically refreshed
    /// after the configured TTL expires.
    pub async fn get_secret(&self, secret_name: &str) -> Result<String, SecretError> {
        // Check cache first
        if let Some(cached) = self.cache.get(secret_name).await {
            debug!(
                secret_name = %secret_name,
                version_id = ?cached.version_id,
                cached_at = %cached.fetched_at,
                "Secret retrieved from cache"
            );
            return Ok(cached.value);
        }

        // Fetch from AWS
        debug!(secret_name = %secret_name, "Fetching secret from AWS Secrets Manager");
        self.fetch_secret(secret_name).await
    }

    /// Fetch secret from AWS Secrets Manager and update cache
    async fn fetch_secret(&self, secret_name: &str) -> Result<String, SecretError> {
        let response = self
            .client
            .get_secret_value()
            .secret_id(secret_name)
            .send()
            .await
            .map_err(|e| {
                let error_msg = e.to_string();
                if error_msg.contains("ResourceNotFoundException") {
                    SecretError::NotFound(secret_name.to_string())
                } else if error_msg.contains("AccessDeniedException") {
                    SecretError::AccessDenied(secret_name.to_string())
                } else if error_msg.contains("DecryptionFailure") {
                    SecretError::DecryptionFailed(secret_name.to_string())
                } else {
                    SecretError::AwsSdk(error_msg)
                }
            })?;

        let secret_string = response
            .secret_string()
            .ok_or_else(|| SecretError::InvalidFormat("Secret is binary, not string".to_string()))?
            .to_string();

        let version_id = response.version_id().map(|s| s.to_string());

        // Cache the fetched secret
        let cached = CachedSecret {
            value: secret_string.clone(),
            version_id: version_id.clone(),
            fetched_at: chrono::Utc::now(),
        };

        self.cache.insert(secret_name.to_string(), cached).await;

        info!(
            secret_name = %secret_name,
            version_id = ?version_id,
            "Secret fetched and cached from AWS Secrets Manager"
        );

        Ok(secret_string)
    }

    /// Invalidate cache for a specific secret (useful for manual rotation)
    pub async fn invalidate_cache(&self, secret_name: &str) {
        self.cache.invalidate(secret_name).await;
        info!(secret_name = %secret_name, "Secret cache invalidated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_credentials_parsing() {
        let json = r#"{
            "key_id": "rzp_test_abc123",
            "key_secret": "shhh"
        }"#;

        let creds = PaymentCredentials::from_json(json).unwrap();
        assert_eq!(creds.key_id, "rzp_test_abc123");
        assert_eq!(creds.key_secret, "shhh");
    }

    #[test]
    fn test_payment_credentials_parsing_invalid() {
        let json = r#"{"invalid": "json"}"#;
        assert!(PaymentCredentials::from_json(json).is_err());
    }

    #[test]
    fn test_rtc_app_config_parsing() {
        let json = r#"{
            "app_id": "rtc-app-id",
            "app_certificate": "rtc-app-certificate"
        }"#;

        let config = RtcAppConfig::from_json(json).unwrap();
        assert_eq!(config.app_id, "rtc-app-id");
        assert_eq!(config.app_certificate, "rtc-app-certificate");
    }

    #[test]
    fn test_rtc_app_config_parsing_invalid() {
        assert!(RtcAppConfig::from_json("not json").is_err());
    }
}
