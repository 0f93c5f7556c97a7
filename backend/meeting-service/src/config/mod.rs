use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub firestore: FirestoreConfig,
    pub fcm: FcmConfig,
    pub payments: PaymentConfig,
    pub secrets: SecretNames,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirestoreConfig {
    pub project_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FcmConfig {
    pub project_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    pub base_url: String,
}

/// Names of the secrets resolved from the secret store at startup.
/// Only names live in configuration; values never touch env files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretNames {
    pub service_account_key: String,
    pub rtc_app_config: String,
    pub payment_credentials: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let firestore_project = std::env::var("FIRESTORE_PROJECT_ID")?;

        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                port: std::env::var("APP_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()?,
            },
            fcm: FcmConfig {
                // The push project is the Firestore project unless split out
                project_id: std::env::var("FCM_PROJECT_ID")
                    .unwrap_or_else(|_| firestore_project.clone()),
            },
            firestore: FirestoreConfig {
                project_id: firestore_project,
            },
            payments: PaymentConfig {
                base_url: std::env::var("PAYMENT_GATEWAY_URL")
                    .unwrap_or_else(|_| "https://api.razorpay.com".to_string()),
            },
            secrets: SecretNames {
                service_account_key: std::env::var("SECRET_SERVICE_ACCOUNT_KEY")
                    .unwrap_or_else(|_| "meetlink/gcp/service-account".to_string()),
                rtc_app_config: std::env::var("SECRET_RTC_APP_CONFIG")
                    .unwrap_or_else(|_| "meetlink/rtc/app-config".to_string()),
                payment_credentials: std::env::var("SECRET_PAYMENT_CREDENTIALS")
                    .unwrap_or_else(|_| "meetlink/payments/razorpay".to_string()),
            },
        })
    }
}
