use async_trait::async_trait;
use firestore_client::FirestoreClient;
use std::sync::Arc;

const USERS_COLLECTION: &str = "users";
const FCM_TOKEN_FIELD: &str = "fcmToken";

/// Outcome of resolving a user's push registration token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenLookup {
    /// No user document exists for this id
    UserNotFound,
    /// User exists but carries no usable token
    NoToken,
    Token(String),
}

/// Read-side seam over the user collection
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn fcm_token(&self, user_id: &str) -> Result<TokenLookup, String>;
}

/// Resolves push tokens from `users/{userId}` in Firestore
pub struct FirestoreUserDirectory {
    store: Arc<FirestoreClient>,
}

impl FirestoreUserDirectory {
    pub fn new(store: Arc<FirestoreClient>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserDirectory for FirestoreUserDirectory {
    async fn fcm_token(&self, user_id: &str) -> Result<TokenLookup, String> {
        let document = self
            .store
            .get_document(USERS_COLLECTION, user_id)
            .await
            .map_err(|e| e.to_string())?;

        let Some(document) = document else {
            return Ok(TokenLookup::UserNotFound);
        };

        // Empty-string tokens are written by clients that unregistered
        match document.string_field(FCM_TOKEN_FIELD) {
            Some(token) if !token.is_empty() => Ok(TokenLookup::Token(token.to_string())),
            _ => Ok(TokenLookup::NoToken),
        }
    }
}
