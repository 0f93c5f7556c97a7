use crate::error::AppError;
use crate::services::razorpay::{to_minor_units, OrderRequest, CURRENCY_INR};
use crate::services::PaymentGateway;
/// Payment order creation
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

/// Request to create a payment order (amount in major units, rupees)
#[derive(Debug, Deserialize)]
pub struct CreateOrderPayload {
    #[serde(rename = "meetingId")]
    pub meeting_id: Option<String>,
    pub amount: Option<f64>,
}

/// Create an order at the payment gateway and relay it verbatim
///
/// POST /payments/orders
pub async fn create_order(
    gateway: web::Data<Arc<dyn PaymentGateway>>,
    payload: web::Json<CreateOrderPayload>,
) -> Result<HttpResponse, AppError> {
    let (Some(meeting_id), Some(amount)) = (payload.meeting_id.as_deref(), payload.amount)
    else {
        return Err(AppError::MissingParameter(
            "meetingId and amount are required",
        ));
    };

    let order = OrderRequest {
        amount: to_minor_units(amount),
        currency: CURRENCY_INR.to_string(),
        receipt: meeting_id.to_string(),
    };

    match gateway.create_order(&order).await {
        Ok(order) => Ok(HttpResponse::Ok().json(order)),
        Err(e) => {
            error!(%meeting_id, "Failed to create payment order: {}", e);
            Err(AppError::PaymentGateway)
        }
    }
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/payments").route("/orders", web::post().to(create_order)));
}
