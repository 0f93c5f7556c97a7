/// Meetlink FCM Shared Library
///
/// Firebase Cloud Messaging (FCM) client for delivering push
/// notifications to registered device tokens.
///
/// It handles:
/// - OAuth2 token generation using Google service accounts (via gcp-auth)
/// - Single message delivery over the FCM HTTP v1 API

pub mod client;
pub mod errors;
pub mod models;

pub use client::FcmClient;
pub use errors::FcmError;
pub use models::FcmSendResult;
