use super::service::*;
use super::types::{Credentials, ServiceCall};
use super::{Authorization, Endpoint, OperationKind};

/// An operation posted to `/jsonrpc`.
///
/// The request `params` are `{service, method, args}`, where `args` is the flat
/// positional argument list of the remote method.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRpcOperation(ServiceOperation);

impl JsonRpcOperation {
    pub fn kind(&self) -> OperationKind {
        self.0.kind()
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::JsonRpc
    }

    pub fn path(&self) -> &'static str {
        self.endpoint().as_str()
    }

    pub fn call(&self) -> &ServiceCall {
        self.0.call()
    }

    pub fn authorization(&self) -> Authorization<'_> {
        self.0.authorization()
    }
}

impl From<ServiceOperation> for JsonRpcOperation {
    fn from(operation: ServiceOperation) -> Self {
        Self(operation)
    }
}

/// Builders for the JSON-RPC family.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRpcController;

impl JsonRpcController {
    pub fn common() -> CommonBuilder<JsonRpcOperation> {
        CommonBuilder::new()
    }

    pub fn database() -> DatabaseBuilder<JsonRpcOperation> {
        DatabaseBuilder::new()
    }

    pub fn database_with_password(
        admin_password: impl Into<String>,
    ) -> ProtectedDatabaseBuilder<JsonRpcOperation> {
        ProtectedDatabaseBuilder::new(admin_password.into())
    }

    pub fn object(credentials: Credentials) -> ObjectBuilder<JsonRpcOperation> {
        ObjectBuilder::new(credentials)
    }
}
