use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Handler-boundary errors
///
/// Display is the response body, so the payment and token variants carry
/// no detail; the cause is logged at the call site and never leaked.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingParameter(&'static str),

    #[error("Payment order failed")]
    PaymentGateway,

    #[error("Token generation failed")]
    TokenSigning,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::PaymentGateway | AppError::TokenSigning => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::MissingParameter("channelId is required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::PaymentGateway.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_payment_error_body_is_fixed() {
        assert_eq!(AppError::PaymentGateway.to_string(), "Payment order failed");
    }
}
