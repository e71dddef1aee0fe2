//! # Transport
//!
//! The adapters that turn a built operation into exactly one HTTP POST, and the raw
//! protocol native reply back. Nothing here retries or interprets a result; faults are
//! returned as data and classified later by [`crate::error`].
//!
//! The network itself sits behind the [`HttpClient`] trait. [`ReqwestClient`] is the
//! default implementation; tests substitute an in-memory one.
mod envelope;
mod http;
mod jsonrpc;
mod reqwest_client;
mod xmlrpc;

pub use envelope::*;
pub use reqwest_client::ReqwestClient;

pub(crate) use self::http::HttpAdapter;
pub(crate) use self::jsonrpc::JsonRpcAdapter;
pub(crate) use self::xmlrpc::XmlRpcAdapter;

use crate::BoxError;
use crate::xmlrpc::XmlRpcError;
use ::http::{Request, Response, StatusCode};
use std::future::Future;

/// The capability to POST a fully built request and collect the whole reply.
///
/// Implementations must not retry and must not treat non-2xx statuses as errors;
/// status handling belongs to the adapters.
pub trait HttpClient: Send + Sync {
    fn post(
        &self,
        request: Request<Vec<u8>>,
    ) -> impl Future<Output = Result<Response<Vec<u8>>, BoxError>> + Send;
}

/// Errors raised before a well formed reply was received.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to build request for '{0}': {1}")]
    InvalidRequest(String, #[source] ::http::Error),
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to reach '{0}': {1}")]
    Connection(String, #[source] BoxError),
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("Failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Response envelope has neither 'result' nor 'error'")]
    MalformedEnvelope,
    #[error("Failed to decode XML-RPC response: {0}")]
    XmlRpc(#[from] XmlRpcError),
}

/// One wire family: sends an operation, returns the raw reply.
pub(crate) trait Adapter {
    type Operation;
    type Raw;

    async fn send(&self, operation: &Self::Operation) -> Result<Self::Raw, TransportError>;
}

/// Posts `request` and returns the body of a 2xx reply.
async fn post<C: HttpClient>(http: &C, request: Request<Vec<u8>>) -> Result<Vec<u8>, TransportError> {
    let url = request.uri().to_string();
    tracing::debug!(%url, bytes = request.body().len(), "posting request");

    let response = http
        .post(request)
        .await
        .map_err(|e| TransportError::Connection(url.clone(), e))?;

    let status = response.status();
    let body = response.into_body();

    if !status.is_success() {
        tracing::debug!(%url, %status, "request rejected");
        return Err(TransportError::UnexpectedStatus {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(body)
}
