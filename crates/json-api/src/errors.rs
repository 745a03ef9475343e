//! HTTP error mapping for checkout and purchase failures.

use salvo::http::StatusError;
use tracing::{error, warn};

use storefront_app::domain::{checkout::CheckoutError, purchases::PersistenceError};

pub(crate) fn persistence_status_error(error: PersistenceError) -> StatusError {
    if let Some(constraint) = error.constraint() {
        warn!(constraint, "purchase write rejected: {error}");
    }

    match error {
        PersistenceError::AlreadyExists(_) => {
            StatusError::conflict().brief("Payment has already been recorded")
        }
        PersistenceError::InvalidReference(_)
        | PersistenceError::MissingRequiredData(_)
        | PersistenceError::InvalidData(_) => {
            StatusError::bad_request().brief("Invalid purchase data")
        }
        PersistenceError::NotFound => StatusError::not_found().brief("Sale not found"),
        PersistenceError::Sql(source) => {
            error!("purchase store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn checkout_status_error(error: CheckoutError) -> StatusError {
    match error {
        CheckoutError::Validation(source) => StatusError::bad_request()
            .brief("Invalid request")
            .detail(source.to_string()),
        CheckoutError::Gateway(source) => {
            error!("payment gateway failure: {source}");

            StatusError::bad_gateway()
                .brief("Error processing payment")
                .detail(source.detail())
        }
        CheckoutError::Persistence(source) => persistence_status_error(source),
        CheckoutError::Notification(source) => {
            error!("notification failure: {source}");

            StatusError::bad_gateway().brief("Email could not be sent")
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use storefront_app::{
        domain::{checkout::ValidationError, notifications::NotificationError},
        gateway::GatewayError,
    };

    use super::*;

    #[test]
    fn persistence_errors_map_to_statuses() {
        let cause = || sqlx::Error::Protocol("constraint violated".to_string());

        let cases = [
            (PersistenceError::AlreadyExists(cause()), StatusCode::CONFLICT),
            (PersistenceError::InvalidData(cause()), StatusCode::BAD_REQUEST),
            (
                PersistenceError::MissingRequiredData(cause()),
                StatusCode::BAD_REQUEST,
            ),
            (
                PersistenceError::InvalidReference(cause()),
                StatusCode::BAD_REQUEST,
            ),
            (PersistenceError::NotFound, StatusCode::NOT_FOUND),
            (
                PersistenceError::Sql(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(persistence_status_error(error).code, expected);
        }
    }

    #[test]
    fn checkout_errors_map_to_statuses() {
        let validation = checkout_status_error(ValidationError::Missing("token").into());
        let gateway = checkout_status_error(
            GatewayError::Rejected {
                status: StatusCode::BAD_REQUEST,
                message: "invalid card token".to_string(),
            }
            .into(),
        );
        let notification = checkout_status_error(
            NotificationError::UnexpectedResponse("down".to_string()).into(),
        );

        assert_eq!(validation.code, StatusCode::BAD_REQUEST);
        assert_eq!(validation.detail.as_deref(), Some("token is required"));
        assert_eq!(gateway.code, StatusCode::BAD_GATEWAY);
        assert_eq!(gateway.detail.as_deref(), Some("invalid card token"));
        assert_eq!(notification.code, StatusCode::BAD_GATEWAY);
    }
}
