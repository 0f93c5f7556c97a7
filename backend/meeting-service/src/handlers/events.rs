use crate::services::NotificationDispatcher;
/// Document-created event delivery
use actix_web::{web, HttpResponse, Result as ActixResult};
use std::sync::Arc;

/// Handle a created notification record
///
/// POST /events/notifications
///
/// The platform pushes the new record's field map here once per created
/// document. Always acknowledges with 204: the dispatcher logs its own
/// failures and the platform must not retry on our behalf.
pub async fn notification_created(
    dispatcher: web::Data<Arc<NotificationDispatcher>>,
    payload: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    dispatcher.dispatch(&payload).await;
    Ok(HttpResponse::NoContent().finish())
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/events")
            .route("/notifications", web::post().to(notification_created)),
    );
}
