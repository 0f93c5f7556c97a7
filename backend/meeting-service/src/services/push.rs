use async_trait::async_trait;
use fcm_shared::FcmClient;
use std::sync::Arc;

/// Push delivery seam; the production implementation is FCM
#[async_trait]
pub trait PushGateway: Send + Sync {
    /// Deliver one message to one device token; returns the gateway
    /// message id
    async fn send(&self, device_token: &str, title: &str, body: &str) -> Result<String, String>;
}

pub struct FcmPushGateway {
    client: Arc<FcmClient>,
}

impl FcmPushGateway {
    pub fn new(client: Arc<FcmClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PushGateway for FcmPushGateway {
    async fn send(&self, device_token: &str, title: &str, body: &str) -> Result<String, String> {
        let result = self
            .client
            .send(device_token, title, body)
            .await
            .map_err(|e| e.to_string())?;

        Ok(result.message_id)
    }
}
