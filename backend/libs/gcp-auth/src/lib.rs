/// Google Cloud service-account authentication
///
/// Shared OAuth2 plumbing for the Google-backed clients (FCM push,
/// Firestore reads). Signs a JWT-bearer assertion with the service
/// account's RSA key, exchanges it for an access token, and caches the
/// token in-process until shortly before expiry.

pub mod credentials;
pub mod token_provider;

pub use credentials::ServiceAccountKey;
pub use token_provider::{GcpAuthError, OauthTokenProvider};
