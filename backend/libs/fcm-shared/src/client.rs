use gcp_auth::{OauthTokenProvider, ServiceAccountKey};
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::FcmError;
use crate::models::*;

const FCM_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

/// Firebase Cloud Messaging Client
///
/// Sends push notifications to a single registered device token over the
/// FCM HTTP v1 API. Stateless across sends apart from the cached OAuth2
/// access token held by the token provider.
pub struct FcmClient {
    pub project_id: String,
    token_provider: OauthTokenProvider,
    http_client: reqwest::Client,
}

impl FcmClient {
    /// Create new FCM client
    ///
    /// # Arguments
    /// * `project_id` - Firebase project ID
    /// * `credentials` - Service account key with OAuth2 credentials
    pub fn new(project_id: String, credentials: Arc<ServiceAccountKey>) -> Self {
        Self {
            project_id,
            token_provider: OauthTokenProvider::new(credentials, FCM_SCOPE),
            http_client: reqwest::Client::new(),
        }
    }

    /// Send a notification to a single device
    pub async fn send(
        &self,
        device_token: &str,
        title: &str,
        body: &str,
    ) -> Result<FcmSendResult, FcmError> {
        let access_token = self.token_provider.access_token().await?;

        let message = FcmMessage {
            message: FcmMessageContent {
                token: device_token.to_string(),
                notification: FcmNotification {
                    title: title.to_string(),
                    body: body.to_string(),
                },
                data: None,
            },
        };

        let url = format!(
            "https://fcm.googleapis.com/v1/projects/{}/messages:send",
            self.project_id
        );

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .header("Content-Type", "application/json")
            .json(&message)
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let fcm_response: FcmApiResponse = response.json().await?;

                Ok(FcmSendResult {
                    message_id: fcm_response
                        .name
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    success: true,
                    error: None,
                })
            }
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());

                Err(FcmError::Api { status, body })
            }
        }
    }
}
