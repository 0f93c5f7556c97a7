use std::sync::Arc;
use tracing::{error, info, warn};

use crate::models::NotificationRecord;
use crate::services::{PushGateway, TokenLookup, UserDirectory};

/// Dispatches one push message per created notification record
///
/// Fire-and-forget by contract: the invoker (the event delivery) gets no
/// failure signal, so every terminal path logs and returns. Nothing is
/// written back to the store and nothing is retried.
pub struct NotificationDispatcher {
    users: Arc<dyn UserDirectory>,
    push: Arc<dyn PushGateway>,
}

impl NotificationDispatcher {
    pub fn new(users: Arc<dyn UserDirectory>, push: Arc<dyn PushGateway>) -> Self {
        Self { users, push }
    }

    /// Handle a document-created event carrying the record's field map
    pub async fn dispatch(&self, payload: &serde_json::Value) {
        let record: NotificationRecord = match serde_json::from_value(payload.clone()) {
            Ok(record) => record,
            Err(e) => {
                info!("No readable notification data in event: {}", e);
                return;
            }
        };

        let Some(user_id) = record.user_id() else {
            info!("Missing userId in notification record");
            return;
        };

        let token = match self.users.fcm_token(user_id).await {
            Ok(TokenLookup::Token(token)) => token,
            Ok(TokenLookup::UserNotFound) => {
                info!(%user_id, "User does not exist");
                return;
            }
            Ok(TokenLookup::NoToken) => {
                info!(%user_id, "User does not have any FCM token");
                return;
            }
            Err(e) => {
                warn!(%user_id, "Failed to look up user: {}", e);
                return;
            }
        };

        match self.push.send(&token, record.title(), record.message()).await {
            Ok(message_id) => {
                info!(%user_id, %message_id, "Notification sent successfully");
            }
            Err(e) => {
                error!(%user_id, "Error sending notification: {}", e);
            }
        }
    }
}
