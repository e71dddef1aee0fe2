//! # Client
//!
//! The dispatch façade. A [`Client`] pairs a built [`Operation`] with the matching
//! transport adapter, performs the single request, and classifies the outcome.
//!
//! The façade only branches on the operation's wire family. All kind specific
//! knowledge (method names, argument order, paths) was fixed by the builder, and the
//! success payload is handed back exactly as the server sent it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use odoo_rpc::client::Client;
//! use odoo_rpc::config::ClientOptions;
//! use odoo_rpc::operation::{AuthenticateParams, HttpController, Operation};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(ClientOptions::secure("erp.example.com"));
//!
//! let login = HttpController::session().authenticate(AuthenticateParams::new("acme", "admin", "secret"));
//! let session = client.execute(&Operation::from(login)).await?;
//!
//! println!("{session}");
//! # Ok(())
//! # }
//! ```
use crate::config::{ClientConfig, ClientOptions, SessionHeader};
use crate::error::{DispatchError, normalize_json_fault, normalize_xmlrpc_fault};
use crate::operation::{HttpOperation, JsonRpcOperation, Operation, XmlRpcOperation};
use crate::transport::{Adapter, HttpAdapter, HttpClient, JsonRpcAdapter, ReqwestClient, XmlRpcAdapter};
use crate::xmlrpc::MethodResponse;
use serde_json::Value;

/// Whatever the server returned under a success envelope.
pub type ServiceOperationResult = Value;

/// Executes operations against one connection target.
///
/// The generic parameter `C` is the injected [`HttpClient`]; it defaults to
/// [`ReqwestClient`].
#[derive(Debug, Clone)]
pub struct Client<C = ReqwestClient> {
    http: C,
    options: ClientOptions,
    session_header: SessionHeader,
}

impl Client<ReqwestClient> {
    pub fn new(options: ClientOptions) -> Self {
        Self::with_http_client(ReqwestClient::new(), options)
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::new(config.options).with_session_header(config.session_header)
    }
}

impl<C: HttpClient> Client<C> {
    /// Creates a client sending its requests through `http`.
    pub fn with_http_client(http: C, options: ClientOptions) -> Self {
        Self {
            http,
            options,
            session_header: SessionHeader::default(),
        }
    }

    /// Selects how session tokens are attached to HTTP family requests.
    pub fn with_session_header(mut self, session_header: SessionHeader) -> Self {
        self.session_header = session_header;
        self
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn session_header(&self) -> SessionHeader {
        self.session_header
    }

    /// Executes a single operation.
    ///
    /// # Arguments
    ///
    /// * `operation` - The operation to send, as produced by one of the controllers.
    ///
    /// # Returns
    ///
    /// * `Ok(ServiceOperationResult)` - The server's result, verbatim.
    /// * `Err(DispatchError::Service)` - The server answered with a JSON fault.
    /// * `Err(DispatchError::Legacy)` - The server answered with an XML-RPC fault.
    /// * `Err(DispatchError::Transport)` - No well formed reply was received.
    pub async fn execute(&self, operation: &Operation) -> Result<ServiceOperationResult, DispatchError> {
        tracing::debug!(
            controller = %operation.controller_type(),
            kind = ?operation.kind(),
            path = operation.path(),
            "executing operation"
        );

        match operation {
            Operation::Http(op) => self.execute_http(op).await,
            Operation::JsonRpc(op) => self.execute_jsonrpc(op).await,
            Operation::XmlRpc(op) => self.execute_xmlrpc(op).await,
        }
    }

    pub async fn execute_http(&self, operation: &HttpOperation) -> Result<ServiceOperationResult, DispatchError> {
        let adapter = HttpAdapter::new(&self.http, &self.options, self.session_header);
        let reply = adapter.send(operation).await?;
        reply.map_err(|fault| normalize_json_fault(fault).into())
    }

    pub async fn execute_jsonrpc(
        &self,
        operation: &JsonRpcOperation,
    ) -> Result<ServiceOperationResult, DispatchError> {
        let adapter = JsonRpcAdapter::new(&self.http, &self.options);
        let reply = adapter.send(operation).await?;
        reply.map_err(|fault| normalize_json_fault(fault).into())
    }

    pub async fn execute_xmlrpc(
        &self,
        operation: &XmlRpcOperation,
    ) -> Result<ServiceOperationResult, DispatchError> {
        let adapter = XmlRpcAdapter::new(&self.http, &self.options);
        match adapter.send(operation).await? {
            MethodResponse::Success(value) => Ok(value),
            MethodResponse::Fault(fault) => Err(normalize_xmlrpc_fault(fault).into()),
        }
    }
}
