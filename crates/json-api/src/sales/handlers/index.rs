//! Sales Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::persistence_status_error, extensions::*, sales::get::SaleResponse};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SalesResponse {
    /// Always `success`
    pub status: String,

    /// Sales, newest purchase date first
    pub sales: Vec<SaleResponse>,
}

/// Sales Index Handler
///
/// Returns every recorded sale with its line items, newest first.
#[endpoint(tags("sales"), summary = "List Sales")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SalesResponse>, StatusError> {
    let state = depot.state()?;

    let sales = state
        .app
        .purchases
        .list_sales()
        .await
        .map_err(persistence_status_error)?;

    Ok(Json(SalesResponse {
        status: "success".to_string(),
        sales: sales.into_iter().map(Into::into).collect(),
    }))
}
