use super::{
    Adapter, HttpClient, JsonRpcError, JsonRpcRequest, ServiceParams, TransportError,
    decode_response, post,
};
use crate::config::ClientOptions;
use crate::operation::JsonRpcOperation;
use http::Request;
use http::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;

/// Posts service calls to `/jsonrpc` as `{service, method, args}`.
pub(crate) struct JsonRpcAdapter<'a, C> {
    http: &'a C,
    options: &'a ClientOptions,
}

impl<'a, C: HttpClient> JsonRpcAdapter<'a, C> {
    pub(crate) fn new(http: &'a C, options: &'a ClientOptions) -> Self {
        Self { http, options }
    }
}

impl<C: HttpClient> Adapter for JsonRpcAdapter<'_, C> {
    type Operation = JsonRpcOperation;
    type Raw = Result<Value, JsonRpcError>;

    async fn send(&self, operation: &JsonRpcOperation) -> Result<Self::Raw, TransportError> {
        let call = operation.call();
        let params = ServiceParams {
            service: call.service(),
            method: call.method(),
            args: call.positional(),
        };
        let body = serde_json::to_vec(&JsonRpcRequest::call(params)).map_err(TransportError::Encode)?;

        let url = self.options.url_for(operation.endpoint());
        let request = Request::post(url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .map_err(|e| TransportError::InvalidRequest(url, e))?;

        decode_response(&post(self.http, request).await?)
    }
}
