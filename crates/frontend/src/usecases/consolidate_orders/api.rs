use async_trait::async_trait;
use contracts::{DeleteRequest, DeleteResponse, OrderRef, SubmitPayload, SubmitResponse};
use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::shared::api_utils::api_url;

/// Failure of a call to the order-management backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-200 response; the plain-text body is the whole error message and
    /// is surfaced to the operator verbatim.
    #[error("{body}")]
    Status { body: String },
    /// The request produced no usable response (network failure, malformed
    /// body).
    #[error("{0}")]
    Transport(String),
}

/// Seam between the submission workflow and the network, so the workflow
/// state machine can be driven by a mock in tests.
#[async_trait(?Send)]
pub trait ConsolidationApi {
    async fn submit(&self, payload: &SubmitPayload) -> Result<SubmitResponse, ApiError>;
    async fn delete_orders(&self, request: &DeleteRequest) -> Result<DeleteResponse, ApiError>;
}

/// Live implementation talking to the backend over `fetch`.
pub struct HttpApi;

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn status_error(response: Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    ApiError::Status { body }
}

/// Loads the open sales orders shown in the available list.
pub async fn fetch_open_orders() -> Result<Vec<OrderRef>, ApiError> {
    let response = Request::get(&api_url("/open_sales_orders"))
        .send()
        .await
        .map_err(transport)?;
    if response.status() != 200 {
        return Err(status_error(response).await);
    }
    response.json::<Vec<OrderRef>>().await.map_err(transport)
}

#[async_trait(?Send)]
impl ConsolidationApi for HttpApi {
    async fn submit(&self, payload: &SubmitPayload) -> Result<SubmitResponse, ApiError> {
        let response = Request::post(&api_url("/submit_selected_orders"))
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if response.status() != 200 {
            return Err(status_error(response).await);
        }
        response.json::<SubmitResponse>().await.map_err(transport)
    }

    async fn delete_orders(&self, request: &DeleteRequest) -> Result<DeleteResponse, ApiError> {
        let response = Request::post(&api_url("/delete_source_orders"))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if response.status() != 200 {
            return Err(status_error(response).await);
        }
        response.json::<DeleteResponse>().await.map_err(transport)
    }
}
