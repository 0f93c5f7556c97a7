use async_trait::async_trait;
use aws_secrets::PaymentCredentials;
use serde::Serialize;

/// Orders are always created in Indian rupees; the gateway takes paise
pub const CURRENCY_INR: &str = "INR";

/// Order-creation request in the gateway's terms (minor currency units)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
}

/// Payment gateway seam; the production implementation is Razorpay
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order and return the gateway's order object verbatim
    async fn create_order(&self, order: &OrderRequest) -> Result<serde_json::Value, String>;
}

/// Razorpay Orders API client
///
/// The order entity lives at the gateway; this client never stores a
/// local copy.
pub struct RazorpayClient {
    base_url: String,
    credentials: PaymentCredentials,
    http_client: reqwest::Client,
}

impl RazorpayClient {
    pub fn new(base_url: impl Into<String>, credentials: PaymentCredentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    async fn create_order(&self, order: &OrderRequest) -> Result<serde_json::Value, String> {
        let url = format!("{}/v1/orders", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.credentials.key_id, Some(&self.credentials.key_secret))
            .json(order)
            .send()
            .await
            .map_err(|e| format!("order request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("gateway rejected order: {} - {}", status, body));
        }

        response
            .json()
            .await
            .map_err(|e| format!("failed to parse order response: {}", e))
    }
}

/// Convert a major-unit amount (rupees) to the gateway's minor units
/// (paise). Rounds so fractional inputs like 99.99 keep their last paisa.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
