//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Map any error to a logged internal server error.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn error_detail_is_not_leaked() {
        let result: Result<(), &str> = Err("connection refused");

        let error = result.or_500("failed to load sales").err();

        assert_eq!(
            error.as_ref().map(|error| error.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
        assert_eq!(error.and_then(|error| error.detail), None);
    }
}
