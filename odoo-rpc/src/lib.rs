//! # Odoo RPC
//!
//! `odoo-rpc` is a typed client for Odoo servers. It speaks the three wire families the
//! server exposes, and hides their differences behind a single dispatch call.
//!
//! ## Key Components
//!
//! * **[`operation`]:** Immutable operation values and the per family controllers
//!   ([`HttpController`](operation::HttpController),
//!   [`JsonRpcController`](operation::JsonRpcController),
//!   [`XmlRpcController`](operation::XmlRpcController)) that build them. Builders fix the
//!   remote method name and positional argument order; they never perform I/O.
//! * **[`Client`]:** The dispatch façade. It sends one operation through the matching
//!   adapter and returns the server result verbatim, or a classified error.
//! * **[`error`]:** The two fault taxonomies ([`ServiceOperationError`] for JSON replies,
//!   [`LegacyServiceError`] for XML-RPC faults) and their normalizers.
//! * **[`transport`]:** The adapters and the injectable [`HttpClient`](transport::HttpClient)
//!   capability, with a `reqwest` backed default.
//! * **[`xmlrpc`]:** The XML-RPC encoder and decoder used by the legacy family.
//!
//! ## Example
//!
//! ```rust,no_run
//! use odoo_rpc::Client;
//! use odoo_rpc::config::ClientOptions;
//! use odoo_rpc::operation::{Credentials, JsonRpcController, Operation, SearchReadParams};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(ClientOptions::insecure("localhost", 8069));
//!
//! let partners = JsonRpcController::object(Credentials::new("acme", 2, "secret"))
//!     .search_read(SearchReadParams::new("res.partner", vec![]).with_fields(vec!["name".into()]));
//!
//! let page = client.execute(&Operation::from(partners)).await?;
//! println!("{page}");
//! # Ok(())
//! # }
//! ```
//!
//! The crate logs through `tracing` and never installs a subscriber.
pub mod client;
pub mod config;
pub mod error;
pub mod operation;
pub mod transport;
pub mod xmlrpc;

pub use client::{Client, ServiceOperationResult};
pub use error::{DispatchError, LegacyServiceError, ServiceOperationError};

/// Type alias for the boxed error returned by [`HttpClient`](transport::HttpClient) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
