//! # Errors
//!
//! Two closed fault taxonomies, one per remote fault vocabulary, plus the transport
//! level failures that mean the remote could not be reached at all.
//!
//! * [`ServiceOperationError`]: faults reported inside a JSON envelope (HTTP and
//!   JSON-RPC families), classified by the server's `exception_type`.
//! * [`LegacyServiceError`]: XML-RPC faults, classified by their numeric `faultCode`.
//! * [`TransportError`](crate::transport::TransportError): everything that happened
//!   before a well formed reply was received. These are never normalized.
//!
//! The normalizers are total: a fault the taxonomy does not know about lands in a
//! catch-all member and is logged, it is never turned into a panic.
use crate::transport::{JsonRpcError, TransportError};
use crate::xmlrpc::XmlRpcFault;
use std::fmt;

/// The status code the server uses for an expired or missing session.
const SESSION_EXPIRED_CODE: i64 = 100;

const UNKNOWN_LEGACY_FAULT_MESSAGE: &str =
    "An unknown error occurred! The server might have introduced a new kind of fault.";

/// Fault kinds reported by the JSON families.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    UserError,
    Warning,
    AccessError,
    MissingError,
    AccessDenied,
    ValidationError,
    ExceptOrm,
    AuthenticationError,
    /// An `exception_type` this crate does not know, kept verbatim.
    Unknown(String),
}

impl ServiceErrorKind {
    /// Maps a server `exception_type` 1:1 onto the taxonomy.
    pub fn from_exception_type(exception_type: &str) -> Self {
        match exception_type {
            "user_error" => ServiceErrorKind::UserError,
            "warning" => ServiceErrorKind::Warning,
            "access_error" => ServiceErrorKind::AccessError,
            "missing_error" => ServiceErrorKind::MissingError,
            "access_denied" => ServiceErrorKind::AccessDenied,
            "validation_error" => ServiceErrorKind::ValidationError,
            "except_orm" => ServiceErrorKind::ExceptOrm,
            "authentication_error" => ServiceErrorKind::AuthenticationError,
            other => ServiceErrorKind::Unknown(other.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ServiceErrorKind::Unknown(_))
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceErrorKind::UserError => f.write_str("userError"),
            ServiceErrorKind::Warning => f.write_str("warning"),
            ServiceErrorKind::AccessError => f.write_str("accessError"),
            ServiceErrorKind::MissingError => f.write_str("missingError"),
            ServiceErrorKind::AccessDenied => f.write_str("accessDenied"),
            ServiceErrorKind::ValidationError => f.write_str("validationError"),
            ServiceErrorKind::ExceptOrm => f.write_str("exceptORM"),
            ServiceErrorKind::AuthenticationError => f.write_str("authenticationError"),
            ServiceErrorKind::Unknown(exception_type) => write!(f, "unknown({exception_type})"),
        }
    }
}

/// A fault returned by the server inside a JSON envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ServiceOperationError {
    pub kind: ServiceErrorKind,
    pub message: String,
    pub debug: String,
}

/// Fault kinds reported by the XML-RPC family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyErrorKind {
    Application,
    Warning,
    AccessDenied,
    AccessError,
    UnknownError,
}

impl LegacyErrorKind {
    pub fn from_fault_code(code: i64) -> Self {
        match code {
            1 => LegacyErrorKind::Application,
            2 => LegacyErrorKind::Warning,
            3 => LegacyErrorKind::AccessDenied,
            4 => LegacyErrorKind::AccessError,
            _ => LegacyErrorKind::UnknownError,
        }
    }
}

impl fmt::Display for LegacyErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LegacyErrorKind::Application => "application",
            LegacyErrorKind::Warning => "warning",
            LegacyErrorKind::AccessDenied => "accessDenied",
            LegacyErrorKind::AccessError => "accessError",
            LegacyErrorKind::UnknownError => "unknownError",
        })
    }
}

/// An XML-RPC fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct LegacyServiceError {
    pub kind: LegacyErrorKind,
    pub message: String,
}

/// Classifies a JSON envelope fault.
///
/// A `code` of `100` always yields [`ServiceErrorKind::AuthenticationError`], whatever
/// `exception_type` the payload claims. Otherwise the `exception_type` decides, and a
/// missing or unrecognized one yields [`ServiceErrorKind::Unknown`].
pub fn normalize_json_fault(error: JsonRpcError) -> ServiceOperationError {
    let JsonRpcError {
        code,
        message,
        data,
    } = error;
    let data = data.unwrap_or_default();

    let kind = if code == SESSION_EXPIRED_CODE {
        ServiceErrorKind::AuthenticationError
    } else {
        ServiceErrorKind::from_exception_type(data.exception_type.as_deref().unwrap_or_default())
    };

    if let ServiceErrorKind::Unknown(exception_type) = &kind {
        tracing::warn!(
            code,
            exception_type = %exception_type,
            "unrecognized server exception type"
        );
    }

    ServiceOperationError {
        kind,
        message: data.message.unwrap_or(message),
        debug: data.debug.unwrap_or_default(),
    }
}

/// Classifies an XML-RPC fault by its `faultCode`.
pub fn normalize_xmlrpc_fault(fault: XmlRpcFault) -> LegacyServiceError {
    match LegacyErrorKind::from_fault_code(fault.fault_code) {
        LegacyErrorKind::UnknownError => {
            tracing::warn!(
                fault_code = fault.fault_code,
                fault_string = %fault.fault_string,
                "unrecognized XML-RPC fault code"
            );
            LegacyServiceError {
                kind: LegacyErrorKind::UnknownError,
                message: UNKNOWN_LEGACY_FAULT_MESSAGE.to_string(),
            }
        }
        kind => LegacyServiceError {
            kind,
            message: fault.fault_string,
        },
    }
}

/// Errors returned by [`Client::execute`](crate::client::Client::execute).
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Service error: {0}")]
    Service(#[from] ServiceOperationError),
    #[error("XML-RPC fault: {0}")]
    Legacy(#[from] LegacyServiceError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
