use super::TransportError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The request envelope shared by the HTTP and JSON-RPC families.
///
/// Serializes as `{"jsonrpc":"2.0","method":"call","params":...}`. The server does not
/// need an `id`, so none is sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcRequest<P> {
    jsonrpc: &'static str,
    method: &'static str,
    params: P,
}

impl<P: Serialize> JsonRpcRequest<P> {
    pub fn call(params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "call",
            params,
        }
    }
}

/// `params` of a `/jsonrpc` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceParams<'a> {
    pub service: &'a str,
    pub method: &'a str,
    pub args: Vec<Value>,
}

/// The `error` member of a reply envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<JsonRpcErrorData>,
}

/// Server side details of a fault.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct JsonRpcErrorData {
    pub name: Option<String>,
    pub message: Option<String>,
    pub exception_type: Option<String>,
    pub debug: Option<String>,
    pub arguments: Vec<Value>,
}

/// Parses a reply envelope.
///
/// # Returns
///
/// * `Ok(Ok(result))` - The envelope carries a `result`, possibly `null`.
/// * `Ok(Err(error))` - The envelope carries an `error`.
/// * `Err(TransportError)` - The body is not JSON, or has neither member.
pub fn decode_response(body: &[u8]) -> Result<Result<Value, JsonRpcError>, TransportError> {
    let mut envelope: Map<String, Value> = serde_json::from_slice(body)?;

    match envelope.remove("error") {
        Some(Value::Null) | None => {}
        Some(error) => return Ok(Err(serde_json::from_value(error)?)),
    }

    envelope
        .remove("result")
        .map(Ok)
        .ok_or(TransportError::MalformedEnvelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_has_no_id() {
        let body = serde_json::to_string(&JsonRpcRequest::call(json!({}))).unwrap();
        assert_eq!(body, r#"{"jsonrpc":"2.0","method":"call","params":{}}"#);
    }

    #[test]
    fn null_result_is_a_success() {
        let reply = decode_response(br#"{"jsonrpc":"2.0","id":null,"result":null}"#).unwrap();
        assert_eq!(reply, Ok(Value::Null));
    }

    #[test]
    fn error_member_wins() {
        let reply = decode_response(
            br#"{"jsonrpc":"2.0","error":{"code":200,"message":"Odoo Server Error","data":{"exception_type":"user_error","message":"m","debug":"d","name":"odoo.exceptions.UserError","arguments":["m"]}}}"#,
        )
        .unwrap();

        let error = reply.unwrap_err();
        assert_eq!(error.code, 200);
        let data = error.data.unwrap();
        assert_eq!(data.exception_type.as_deref(), Some("user_error"));
        assert_eq!(data.arguments, vec![json!("m")]);
    }

    #[test]
    fn envelope_without_result_or_error_is_malformed() {
        match decode_response(br#"{"jsonrpc":"2.0","id":1}"#) {
            Err(TransportError::MalformedEnvelope) => {}
            other => panic!("Expected malformed envelope, got {other:?}"),
        }
    }

    #[test]
    fn non_json_body_fails_to_decode() {
        match decode_response(b"<html>Bad Gateway</html>") {
            Err(TransportError::Decode(_)) => {}
            other => panic!("Expected decode error, got {other:?}"),
        }
    }
}
