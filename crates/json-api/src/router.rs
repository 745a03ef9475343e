//! App Router

use salvo::{
    cors::{Any, Cors},
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE, HeaderName},
    },
    prelude::*,
};

use crate::{confirmations, healthcheck, payments, sales, transfers, webhooks};

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

pub(crate) fn app_router() -> Router {
    Router::new()
        .get(healthcheck::liveness)
        .push(Router::with_path("health").get(healthcheck::detailed_health))
        .push(Router::with_path("process-payment").post(payments::create::handler))
        .push(Router::with_path("bank-transfers").post(transfers::create::handler))
        .push(Router::with_path("send-confirmation-email").post(confirmations::create::handler))
        .push(Router::with_path("webhooks/payments").post(webhooks::create::handler))
        .push(
            Router::with_path("sales")
                .get(sales::index::handler)
                .push(Router::with_path("{sale}").get(sales::get::handler)),
        )
}

/// Browser storefronts call the API from any origin.
pub(crate) fn cors() -> impl Handler {
    Cors::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![CONTENT_TYPE, AUTHORIZATION, X_REQUESTED_WITH])
        .into_handler()
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;

    use crate::test_helpers::{Mocks, service};

    use super::*;

    #[tokio::test]
    async fn test_preflight_allows_any_origin() {
        let service = service(Mocks::default(), app_router()).hoop(cors());

        let res = TestClient::options("http://example.com/process-payment")
            .add_header("origin", "https://shop.example.com", true)
            .add_header("access-control-request-method", "POST", true)
            .send(&service)
            .await;

        let allowed_origin = res
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok());

        assert_eq!(allowed_origin, Some("*"));
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let res = TestClient::get("http://example.com/checkout")
            .send(&service(Mocks::default(), app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
