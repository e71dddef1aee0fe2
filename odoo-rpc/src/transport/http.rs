use super::{Adapter, HttpClient, JsonRpcError, JsonRpcRequest, TransportError, decode_response, post};
use crate::config::{ClientOptions, SessionHeader};
use crate::operation::HttpOperation;
use http::Request;
use http::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;

/// Posts HTTP family operations to their `/web/...` route.
pub(crate) struct HttpAdapter<'a, C> {
    http: &'a C,
    options: &'a ClientOptions,
    session_header: SessionHeader,
}

impl<'a, C: HttpClient> HttpAdapter<'a, C> {
    pub(crate) fn new(http: &'a C, options: &'a ClientOptions, session_header: SessionHeader) -> Self {
        Self {
            http,
            options,
            session_header,
        }
    }

    fn request(&self, operation: &HttpOperation) -> Result<Request<Vec<u8>>, TransportError> {
        let url = self.options.url_for(operation.endpoint());
        let body = serde_json::to_vec(&JsonRpcRequest::call(operation.params()))
            .map_err(TransportError::Encode)?;

        let mut builder = Request::post(url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(token) = operation.session_token() {
            let (name, value) = self.session_header.header(token);
            builder = builder.header(name, value);
        }

        builder
            .body(body)
            .map_err(|e| TransportError::InvalidRequest(url, e))
    }
}

impl<C: HttpClient> Adapter for HttpAdapter<'_, C> {
    type Operation = HttpOperation;
    type Raw = Result<Value, JsonRpcError>;

    async fn send(&self, operation: &HttpOperation) -> Result<Self::Raw, TransportError> {
        let request = self.request(operation)?;
        let body = post(self.http, request).await?;
        decode_response(&body)
    }
}
