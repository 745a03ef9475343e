//! State

use std::sync::Arc;

use storefront_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Deployment environment name reported by the health endpoints.
    pub(crate) environment: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, environment: impl Into<String>) -> Self {
        Self {
            app,
            environment: environment.into(),
        }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, environment: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(app, environment))
    }
}
