//! # Operations
//!
//! An [`Operation`] is an immutable description of exactly one remote call. It is built
//! without any I/O by one of the three protocol controllers and later handed to the
//! [`Client`](crate::client::Client) for execution.
//!
//! Every operation knows, from the moment it is built:
//!
//! * its wire family ([`ControllerType`]),
//! * the remote subsystem it targets ([`ServiceType`]),
//! * the specific action ([`OperationKind`]),
//! * the endpoint it is posted to ([`Endpoint`]),
//! * the payload, already in the positional order the remote expects.
//!
//! ## Example
//!
//! ```rust
//! use odoo_rpc::operation::{Credentials, JsonRpcController, SearchParams};
//! use serde_json::json;
//!
//! let object = JsonRpcController::object(Credentials::new("acme", 2, "secret"));
//! let operation = object.search(
//!     SearchParams::new("res.partner", vec![json!(["is_company", "=", true])]).with_limit(10),
//! );
//!
//! assert_eq!(operation.path(), "/jsonrpc");
//! ```
mod http;
mod jsonrpc;
mod params;
mod service;
mod types;
mod xmlrpc;

pub use self::http::*;
pub use self::jsonrpc::*;
pub use self::params::*;
pub use self::service::*;
pub use self::types::*;
pub use self::xmlrpc::*;

use std::fmt;

/// The wire family an operation is lowered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerType {
    /// JSON envelopes posted to the `/web/...` routes.
    Http,
    /// JSON-RPC 2.0 envelopes posted to `/jsonrpc`.
    JsonRpc,
    /// XML-RPC method calls posted to `/xmlrpc/2/...`.
    XmlRpc,
}

impl ControllerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControllerType::Http => "http",
            ControllerType::JsonRpc => "jsonrpc",
            ControllerType::XmlRpc => "xmlrpc",
        }
    }
}

impl fmt::Display for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The remote subsystem an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Session,
    Model,
    Database,
}

impl ServiceType {
    /// The name the given wire family uses for this subsystem.
    pub fn remote_name(&self, controller: ControllerType) -> &'static str {
        match (controller, self) {
            (ControllerType::Http, ServiceType::Session) => "session",
            (ControllerType::Http, ServiceType::Model) => "model",
            (ControllerType::Http, ServiceType::Database) => "db",
            (_, ServiceType::Session) => "common",
            (_, ServiceType::Model) => "object",
            (_, ServiceType::Database) => "db",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKind {
    Authenticate,
    Version,
    Modules,
    SessionInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Create,
    Delete,
    Read,
    Search,
    SearchCount,
    SearchRead,
    NameSearch,
    Update,
    DefaultGet,
    FieldsGet,
    NameGet,
    OnChange,
    CallMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseKind {
    Exist,
    List,
    Create,
    Duplicate,
    Drop,
}

/// The specific action of an operation, closed per [`ServiceType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Session(SessionKind),
    Model(ModelKind),
    Database(DatabaseKind),
}

impl OperationKind {
    pub fn service_type(&self) -> ServiceType {
        match self {
            OperationKind::Session(_) => ServiceType::Session,
            OperationKind::Model(_) => ServiceType::Model,
            OperationKind::Database(_) => ServiceType::Database,
        }
    }
}

impl From<SessionKind> for OperationKind {
    fn from(kind: SessionKind) -> Self {
        OperationKind::Session(kind)
    }
}

impl From<ModelKind> for OperationKind {
    fn from(kind: ModelKind) -> Self {
        OperationKind::Model(kind)
    }
}

impl From<DatabaseKind> for OperationKind {
    fn from(kind: DatabaseKind) -> Self {
        OperationKind::Database(kind)
    }
}

/// Every fixed route an operation may be posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    VersionInfo,
    Authenticate,
    Modules,
    SessionInfo,
    CallKw,
    SearchRead,
    JsonRpc,
    XmlRpcCommon,
    XmlRpcDatabase,
    XmlRpcObject,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::VersionInfo => "/web/webclient/version_info",
            Endpoint::Authenticate => "/web/session/authenticate",
            Endpoint::Modules => "/web/session/modules",
            Endpoint::SessionInfo => "/web/session/get_session_info",
            Endpoint::CallKw => "/web/dataset/call_kw",
            Endpoint::SearchRead => "/web/dataset/search_read",
            Endpoint::JsonRpc => "/jsonrpc",
            Endpoint::XmlRpcCommon => "/xmlrpc/2/common",
            Endpoint::XmlRpcDatabase => "/xmlrpc/2/db",
            Endpoint::XmlRpcObject => "/xmlrpc/2/object",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authorization an operation carries, at most one per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization<'a> {
    None,
    SessionToken(&'a str),
    Credentials(&'a Credentials),
    AdminPassword(&'a str),
}

/// A fully built remote call, tagged with its wire family.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Http(HttpOperation),
    JsonRpc(JsonRpcOperation),
    XmlRpc(XmlRpcOperation),
}

impl Operation {
    pub fn controller_type(&self) -> ControllerType {
        match self {
            Operation::Http(_) => ControllerType::Http,
            Operation::JsonRpc(_) => ControllerType::JsonRpc,
            Operation::XmlRpc(_) => ControllerType::XmlRpc,
        }
    }

    pub fn service_type(&self) -> ServiceType {
        self.kind().service_type()
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Http(op) => op.kind(),
            Operation::JsonRpc(op) => op.kind(),
            Operation::XmlRpc(op) => op.kind(),
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Operation::Http(op) => op.endpoint(),
            Operation::JsonRpc(op) => op.endpoint(),
            Operation::XmlRpc(op) => op.endpoint(),
        }
    }

    pub fn path(&self) -> &'static str {
        self.endpoint().as_str()
    }

    pub fn authorization(&self) -> Authorization<'_> {
        match self {
            Operation::Http(op) => op.authorization(),
            Operation::JsonRpc(op) => op.authorization(),
            Operation::XmlRpc(op) => op.authorization(),
        }
    }
}

impl From<HttpOperation> for Operation {
    fn from(op: HttpOperation) -> Self {
        Operation::Http(op)
    }
}

impl From<JsonRpcOperation> for Operation {
    fn from(op: JsonRpcOperation) -> Self {
        Operation::JsonRpc(op)
    }
}

impl From<XmlRpcOperation> for Operation {
    fn from(op: XmlRpcOperation) -> Self {
        Operation::XmlRpc(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_names_follow_the_wire_family() {
        assert_eq!(ServiceType::Session.remote_name(ControllerType::Http), "session");
        assert_eq!(ServiceType::Session.remote_name(ControllerType::JsonRpc), "common");
        assert_eq!(ServiceType::Model.remote_name(ControllerType::XmlRpc), "object");
        assert_eq!(ServiceType::Database.remote_name(ControllerType::JsonRpc), "db");
    }

    #[test]
    fn operation_accessors_come_from_the_built_value() {
        let operation = Operation::from(HttpController::session_with_token("t0k3n").modules());

        assert_eq!(operation.controller_type(), ControllerType::Http);
        assert_eq!(operation.service_type(), ServiceType::Session);
        assert_eq!(operation.kind(), OperationKind::Session(SessionKind::Modules));
        assert_eq!(operation.path(), "/web/session/modules");
        assert_eq!(operation.authorization(), Authorization::SessionToken("t0k3n"));
    }
}
