//! # Configuration
//!
//! Describes where requests go ([`ClientOptions`]) and how a session token travels
//! ([`SessionHeader`]). Both are plain serde types, so a whole [`ClientConfig`] can be
//! loaded from JSON:
//!
//! ```rust
//! use odoo_rpc::config::{ClientConfig, ClientOptions, SessionHeader};
//!
//! let config = ClientConfig::from_json(
//!     r#"{"options": {"kind": "insecure", "host": "localhost", "port": 8069}, "session_header": "cookie"}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.options, ClientOptions::insecure("localhost", 8069));
//! assert_eq!(config.session_header, SessionHeader::Cookie);
//! ```
use crate::operation::Endpoint;
use http::Uri;
use http::header::{COOKIE, HeaderName};
use serde::{Deserialize, Serialize};

static OPENERP_SESSION_ID: HeaderName = HeaderName::from_static("x-openerp-session-id");

/// Errors that can occur while building a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, #[source] http::uri::InvalidUri),
    #[error("Unsupported URL '{0}': {1}")]
    UnsupportedUrl(String, &'static str),
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// The connection target.
///
/// A secure target always uses TLS on the implicit port, an insecure target uses
/// plain HTTP on an explicit port.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClientOptions {
    Secure { host: String },
    Insecure { host: String, port: u16 },
}

impl ClientOptions {
    pub fn secure(host: impl Into<String>) -> Self {
        ClientOptions::Secure { host: host.into() }
    }

    pub fn insecure(host: impl Into<String>, port: u16) -> Self {
        ClientOptions::Insecure {
            host: host.into(),
            port,
        }
    }

    /// Parses `https://host` or `http://host:port`.
    ///
    /// A plain `http` URL without a port targets port 80. A path, if any, is ignored.
    ///
    /// # Returns
    ///
    /// * `Ok(ClientOptions)` - The parsed target.
    /// * `Err(ConfigError)` - If the URL does not parse, has no host, or uses another scheme.
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let uri: Uri = url
            .parse()
            .map_err(|e| ConfigError::InvalidUrl(url.to_string(), e))?;

        let authority = uri
            .authority()
            .ok_or_else(|| ConfigError::UnsupportedUrl(url.to_string(), "missing host"))?;

        match uri.scheme_str() {
            Some("https") => Ok(ClientOptions::secure(authority.as_str())),
            Some("http") => Ok(ClientOptions::insecure(
                authority.host(),
                authority.port_u16().unwrap_or(80),
            )),
            _ => Err(ConfigError::UnsupportedUrl(
                url.to_string(),
                "scheme must be http or https",
            )),
        }
    }

    /// `https://host` or `http://host:port`, without a trailing slash.
    pub fn base_url(&self) -> String {
        match self {
            ClientOptions::Secure { host } => format!("https://{host}"),
            ClientOptions::Insecure { host, port } => format!("http://{host}:{port}"),
        }
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url(), endpoint.as_str())
    }
}

/// How a session token is attached to HTTP family requests.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionHeader {
    /// `X-Openerp-Session-Id: <token>`
    #[default]
    OpenerpSessionId,
    /// `Cookie: session_id=<token>`
    Cookie,
}

impl SessionHeader {
    /// The header name and value carrying `token`.
    pub fn header(&self, token: &str) -> (HeaderName, String) {
        match self {
            SessionHeader::OpenerpSessionId => (OPENERP_SESSION_ID.clone(), token.to_string()),
            SessionHeader::Cookie => (COOKIE, format!("session_id={token}")),
        }
    }
}

/// Everything a [`Client`](crate::client::Client) needs besides its HTTP client.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub options: ClientOptions,
    #[serde(default)]
    pub session_header: SessionHeader,
}

impl ClientConfig {
    pub fn new(options: ClientOptions) -> Self {
        Self {
            options,
            session_header: SessionHeader::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_the_transport_kind() {
        let secure = ClientOptions::secure("h");
        let insecure = ClientOptions::insecure("localhost", 8069);

        assert_eq!(secure.url_for(Endpoint::Authenticate), "https://h/web/session/authenticate");
        assert_eq!(insecure.url_for(Endpoint::JsonRpc), "http://localhost:8069/jsonrpc");
    }

    #[test]
    fn from_url_parses_both_schemes() {
        assert_eq!(
            ClientOptions::from_url("https://erp.example.com").unwrap(),
            ClientOptions::secure("erp.example.com")
        );
        assert_eq!(
            ClientOptions::from_url("http://localhost:8069/web").unwrap(),
            ClientOptions::insecure("localhost", 8069)
        );
        assert_eq!(
            ClientOptions::from_url("http://localhost").unwrap(),
            ClientOptions::insecure("localhost", 80)
        );
    }

    #[test]
    fn from_url_rejects_other_schemes() {
        match ClientOptions::from_url("ftp://localhost") {
            Err(ConfigError::UnsupportedUrl(url, _)) => assert_eq!(url, "ftp://localhost"),
            other => panic!("Expected unsupported URL, got {other:?}"),
        }
    }

    #[test]
    fn session_header_defaults_when_absent() {
        let config = ClientConfig::from_json(r#"{"options": {"kind": "secure", "host": "h"}}"#).unwrap();

        assert_eq!(config, ClientConfig::new(ClientOptions::secure("h")));
        assert_eq!(config.session_header, SessionHeader::OpenerpSessionId);
    }

    #[test]
    fn session_header_variants() {
        let (name, value) = SessionHeader::Cookie.header("abc");
        assert_eq!(name, COOKIE);
        assert_eq!(value, "session_id=abc");

        let (name, value) = SessionHeader::OpenerpSessionId.header("abc");
        assert_eq!(name.as_str(), "x-openerp-session-id");
        assert_eq!(value, "abc");
    }
}
