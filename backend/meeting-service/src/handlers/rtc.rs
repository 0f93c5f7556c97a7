use crate::error::AppError;
/// Channel access token issuance
use actix_web::{web, HttpResponse};
use rtc_token::RtcTokenIssuer;
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
    /// Kept as a raw string: absent and non-numeric both coerce to uid 0
    pub uid: Option<String>,
}

/// Issue a publisher token for a channel
///
/// GET /rtc/token?channelId=<string>&uid=<int>
pub async fn issue_token(
    issuer: web::Data<Arc<RtcTokenIssuer>>,
    query: web::Query<TokenQuery>,
) -> Result<HttpResponse, AppError> {
    let channel_id = match query.channel_id.as_deref() {
        Some(channel_id) if !channel_id.is_empty() => channel_id,
        _ => return Err(AppError::MissingParameter("channelId is required")),
    };

    let uid: u32 = query
        .uid
        .as_deref()
        .and_then(|uid| uid.parse().ok())
        .unwrap_or(0);

    let token = issuer.issue(channel_id, uid).map_err(|e| {
        error!(%channel_id, "Failed to sign channel token: {}", e);
        AppError::TokenSigning
    })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "token": token })))
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/rtc").route("/token", web::get().to(issue_token)));
}
