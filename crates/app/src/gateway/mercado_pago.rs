//! Mercado Pago payments client.

use async_trait::async_trait;
use jiff::Timestamp;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::gateway::{
    GatewayError, PaymentGateway,
    models::{Charge, ChargeRequest, ChargeStatus},
};

/// Production API address.
pub const DEFAULT_BASE_URL: &str = "https://api.mercadopago.com";

/// Configuration for connecting to Mercado Pago.
#[derive(Debug, Clone)]
pub struct MercadoPagoConfig {
    /// API address, e.g. `"https://api.mercadopago.com"`.
    pub base_url: String,

    /// Seller access token.
    pub access_token: String,
}

/// HTTP client for the Mercado Pago payments API.
#[derive(Debug, Clone)]
pub struct MercadoPagoGateway {
    config: MercadoPagoConfig,
    http: Client,
}

impl MercadoPagoGateway {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: MercadoPagoConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for MercadoPagoGateway {
    async fn charge(&self, request: ChargeRequest) -> Result<Charge, GatewayError> {
        let url = format!("{}/v1/payments", self.config.base_url.trim_end_matches('/'));

        let body = PaymentBody::from(&request);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .header("X-Idempotency-Key", Uuid::now_v7().to_string())
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            warn!(%status, "payment gateway rejected charge: {text}");

            return Err(GatewayError::Rejected {
                status,
                message: error_message(&text),
            });
        }

        let parsed: PaymentResponse = response.json().await?;

        debug!(charge_id = parsed.id, status = %parsed.status, "payment gateway responded");

        Ok(parsed.into())
    }
}

/// Pull the human readable message out of a gateway error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(ToString::to_string)
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| "payment could not be processed".to_string())
}

#[derive(Debug, Serialize)]
struct PaymentBody<'a> {
    #[serde(with = "rust_decimal::serde::float")]
    transaction_amount: Decimal,
    token: &'a str,
    description: &'a str,
    installments: i32,
    payment_method_id: &'a str,
    payer: PayerBody<'a>,
}

#[derive(Debug, Serialize)]
struct PayerBody<'a> {
    email: &'a str,
    identification: IdentificationBody<'a>,
}

#[derive(Debug, Serialize)]
struct IdentificationBody<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<&'a str>,
}

impl<'a> From<&'a ChargeRequest> for PaymentBody<'a> {
    fn from(request: &'a ChargeRequest) -> Self {
        Self {
            transaction_amount: request.amount,
            token: &request.token,
            description: &request.description,
            installments: request.installments,
            payment_method_id: &request.payment_method_id,
            payer: PayerBody {
                email: &request.payer.email,
                identification: IdentificationBody {
                    kind: &request.payer.identification_type,
                    number: request.payer.identification_number.as_deref(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct PaymentResponse {
    id: i64,
    status: ChargeStatus,
    status_detail: Option<String>,
    transaction_amount: Decimal,
    transaction_details: Option<TransactionDetails>,
    payer: Option<PayerResponse>,
    payment_method_id: Option<String>,
    payment_type_id: Option<String>,
    card: Option<CardResponse>,
    description: Option<String>,
    installments: Option<i32>,
    date_created: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TransactionDetails {
    net_received_amount: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
struct PayerResponse {
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CardResponse {
    last_four_digits: Option<String>,
}

impl From<PaymentResponse> for Charge {
    fn from(response: PaymentResponse) -> Self {
        Self {
            id: response.id.to_string(),
            status: response.status,
            status_detail: response.status_detail,
            amount: response.transaction_amount,
            net_amount: response
                .transaction_details
                .and_then(|details| details.net_received_amount),
            payer_email: response.payer.and_then(|payer| payer.email),
            payment_method_id: response.payment_method_id,
            payment_type_id: response.payment_type_id,
            card_last_four: response.card.and_then(|card| card.last_four_digits),
            description: response.description,
            installments: response.installments,
            created_at: response
                .date_created
                .and_then(|date| date.parse::<Timestamp>().ok()),
        }
    }
}
