use super::{Adapter, HttpClient, TransportError, post};
use crate::config::ClientOptions;
use crate::operation::XmlRpcOperation;
use crate::xmlrpc::{MethodResponse, XmlRpcError, decode_method_response, encode_method_call};
use http::Request;
use http::header::{ACCEPT, CONTENT_TYPE};

/// Posts `<methodCall>` documents to the `/xmlrpc/2/...` service paths.
pub(crate) struct XmlRpcAdapter<'a, C> {
    http: &'a C,
    options: &'a ClientOptions,
}

impl<'a, C: HttpClient> XmlRpcAdapter<'a, C> {
    pub(crate) fn new(http: &'a C, options: &'a ClientOptions) -> Self {
        Self { http, options }
    }
}

impl<C: HttpClient> Adapter for XmlRpcAdapter<'_, C> {
    type Operation = XmlRpcOperation;
    type Raw = MethodResponse;

    async fn send(&self, operation: &XmlRpcOperation) -> Result<MethodResponse, TransportError> {
        let call = operation.call();
        let body = encode_method_call(call.method(), &call.positional());

        let url = self.options.url_for(operation.endpoint());
        let request = Request::post(url.as_str())
            .header(CONTENT_TYPE, "text/xml")
            .header(ACCEPT, "text/xml")
            .body(body.into_bytes())
            .map_err(|e| TransportError::InvalidRequest(url, e))?;

        let reply = String::from_utf8(post(self.http, request).await?).map_err(XmlRpcError::from)?;
        Ok(decode_method_response(&reply)?)
    }
}
