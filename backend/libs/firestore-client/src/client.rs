use gcp_auth::{OauthTokenProvider, ServiceAccountKey};
use std::sync::Arc;

use crate::document::Document;
use crate::errors::FirestoreError;

const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";

/// Firestore REST client scoped to single-document reads
pub struct FirestoreClient {
    pub project_id: String,
    token_provider: OauthTokenProvider,
    http_client: reqwest::Client,
}

impl FirestoreClient {
    pub fn new(project_id: String, credentials: Arc<ServiceAccountKey>) -> Self {
        Self {
            project_id,
            token_provider: OauthTokenProvider::new(credentials, DATASTORE_SCOPE),
            http_client: reqwest::Client::new(),
        }
    }

    /// Fetch a document by collection and id
    ///
    /// Returns `Ok(None)` when the document does not exist.
    pub async fn get_document(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<Option<Document>, FirestoreError> {
        let access_token = self.token_provider.access_token().await?;

        let url = format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents/{}/{}",
            self.project_id, collection, document_id
        );

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let document: Document = response.json().await?;
                Ok(Some(document))
            }
            reqwest::StatusCode::NOT_FOUND => {
                tracing::debug!(%collection, %document_id, "Document not found");
                Ok(None)
            }
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());

                Err(FirestoreError::Api { status, body })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let credentials = ServiceAccountKey {
            project_id: "test-project".to_string(),
            private_key_id: "key-id".to_string(),
            private_key: "private-key".to_string(),
            client_email: "test@test.iam.gserviceaccount.com".to_string(),
            client_id: "123456".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
        };

        let client = FirestoreClient::new("test-project".to_string(), Arc::new(credentials));
        assert_eq!(client.project_id, "test-project");
    }
}
