use super::HttpClient;
use crate::BoxError;
use http::{Request, Response};

/// The default [`HttpClient`], backed by a shared [`reqwest::Client`].
///
/// Timeouts, proxies and TLS roots are whatever the wrapped client was built with.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

impl HttpClient for ReqwestClient {
    async fn post(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, BoxError> {
        let (parts, body) = request.into_parts();

        let reply = self
            .inner
            .post(parts.uri.to_string())
            .headers(parts.headers)
            .body(body)
            .send()
            .await?;

        let status = reply.status();
        let headers = reply.headers().clone();
        let body = reply.bytes().await?;

        let mut response = Response::new(body.to_vec());
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}
