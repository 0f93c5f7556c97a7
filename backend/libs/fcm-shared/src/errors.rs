use gcp_auth::GcpAuthError;
use thiserror::Error;

/// FCM Client Error Types
#[derive(Error, Debug)]
pub enum FcmError {
    #[error("failed to obtain access token: {0}")]
    Auth(#[from] GcpAuthError),

    #[error("FCM send request failed: {0}")]
    SendRequest(#[from] reqwest::Error),

    #[error("FCM API error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}
