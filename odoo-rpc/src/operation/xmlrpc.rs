use super::service::*;
use super::types::{Credentials, ServiceCall};
use super::{Authorization, Endpoint, OperationKind};

/// An XML-RPC method call.
///
/// The remote service is selected by the path (`/xmlrpc/2/common`, `/xmlrpc/2/db`
/// or `/xmlrpc/2/object`), the method and its positional arguments travel in the
/// `<methodCall>` document.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlRpcOperation(ServiceOperation);

impl XmlRpcOperation {
    pub fn kind(&self) -> OperationKind {
        self.0.kind()
    }

    pub fn endpoint(&self) -> Endpoint {
        match self.0.call() {
            ServiceCall::Common { .. } => Endpoint::XmlRpcCommon,
            ServiceCall::Database(_) => Endpoint::XmlRpcDatabase,
            ServiceCall::Object(_) => Endpoint::XmlRpcObject,
        }
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

impl From<ServiceOperation> for XmlRpcOperation {
    fn from(operation: ServiceOperation) -> Self {
        Self(operation)
    }
}

/// Builders for the XML-RPC family.
///
/// Same grouping and argument orders as [`JsonRpcController`](super::JsonRpcController).
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlRpcController;

impl XmlRpcController {
    pub fn common() -> CommonBuilder<XmlRpcOperation> {
        CommonBuilder::new()
    }

    pub fn database() -> DatabaseBuilder<XmlRpcOperation> {
        DatabaseBuilder::new()
    }

    pub fn database_with_password(
        admin_password: impl Into<String>,
    ) -> ProtectedDatabaseBuilder<XmlRpcOperation> {
        ProtectedDatabaseBuilder::new(admin_password.into())
    }

    pub fn object(credentials: Credentials) -> ObjectBuilder<XmlRpcOperation> {
        ObjectBuilder::new(credentials)
    }
}
