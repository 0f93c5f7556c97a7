use gcp_auth::GcpAuthError;
use thiserror::Error;

/// Firestore Client Error Types
#[derive(Error, Debug)]
pub enum FirestoreError {
    #[error("failed to obtain access token: {0}")]
    Auth(#[from] GcpAuthError),

    #[error("document request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Firestore API error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}
