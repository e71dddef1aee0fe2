use super::params::*;
use super::types::ModelCall;
use super::{Authorization, Endpoint, ModelKind, OperationKind, SessionKind};
use serde::Serialize;

/// The `params` member of an HTTP family request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HttpParams {
    /// Serialized as `{}`.
    Empty(NoParams),
    Authenticate(AuthenticateParams),
    CallKw(ModelCall),
    SearchRead(SearchReadPayload),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NoParams {}

/// An operation targeting one of the `/web/...` routes.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpOperation {
    kind: OperationKind,
    endpoint: Endpoint,
    params: HttpParams,
    session_token: Option<String>,
}

impl HttpOperation {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn path(&self) -> &'static str {
        self.endpoint.as_str()
    }

    pub fn params(&self) -> &HttpParams {
        &self.params
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub fn authorization(&self) -> Authorization<'_> {
        match &self.session_token {
            Some(token) => Authorization::SessionToken(token),
            None => Authorization::None,
        }
    }
}

/// Builders for the HTTP family.
///
/// Operations are grouped the way the server groups its routes: the public session
/// routes, the session routes that need a token, and the dataset routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpController;

impl HttpController {
    /// Session operations that need no session.
    pub fn session() -> SessionBuilder {
        SessionBuilder
    }

    /// Session operations scoped to an existing session.
    pub fn session_with_token(token: impl Into<String>) -> SessionTokenBuilder {
        SessionTokenBuilder {
            token: token.into(),
        }
    }

    /// Model operations scoped to an existing session.
    pub fn dataset(token: impl Into<String>) -> DatasetBuilder {
        DatasetBuilder {
            token: token.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionBuilder;

impl SessionBuilder {
    pub fn authenticate(&self, params: AuthenticateParams) -> HttpOperation {
        HttpOperation {
            kind: SessionKind::Authenticate.into(),
            endpoint: Endpoint::Authenticate,
            params: HttpParams::Authenticate(params),
            session_token: None,
        }
    }

    pub fn version(&self) -> HttpOperation {
        HttpOperation {
            kind: SessionKind::Version.into(),
            endpoint: Endpoint::VersionInfo,
            params: HttpParams::Empty(NoParams {}),
            session_token: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionTokenBuilder {
    token: String,
}

impl SessionTokenBuilder {
    pub fn modules(&self) -> HttpOperation {
        self.empty(SessionKind::Modules, Endpoint::Modules)
    }

    pub fn session_info(&self) -> HttpOperation {
        self.empty(SessionKind::SessionInfo, Endpoint::SessionInfo)
    }

    fn empty(&self, kind: SessionKind, endpoint: Endpoint) -> HttpOperation {
        HttpOperation {
            kind: kind.into(),
            endpoint,
            params: HttpParams::Empty(NoParams {}),
            session_token: Some(self.token.clone()),
        }
    }
}

/// Model operations posted to `/web/dataset/call_kw`, except `search_read`
/// which has a dedicated route.
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    token: String,
}

impl DatasetBuilder {
    fn call_kw<P: ModelParams>(&self, params: P) -> HttpOperation {
        HttpOperation {
            kind: P::KIND.into(),
            endpoint: Endpoint::CallKw,
            params: HttpParams::CallKw(params.into_model_call()),
            session_token: Some(self.token.clone()),
        }
    }

    pub fn create(&self, params: CreateParams) -> HttpOperation {
        self.call_kw(params)
    }

    pub fn delete(&self, params: DeleteParams) -> HttpOperation {
        self.call_kw(params)
    }

    pub fn read(&self, params: ReadParams) -> HttpOperation {
        self.call_kw(params)
    }

    pub fn search(&self, params: SearchParams) -> HttpOperation {
        self.call_kw(params)
    }

    pub fn search_count(&self, params: SearchCountParams) -> HttpOperation {
        self.call_kw(params)
    }

    pub fn search_read(&self, params: SearchReadParams) -> HttpOperation {
        HttpOperation {
            kind: ModelKind::SearchRead.into(),
            endpoint: Endpoint::SearchRead,
            params: HttpParams::SearchRead(params.into_payload()),
            session_token: Some(self.token.clone()),
        }
    }

    pub fn name_search(&self, params: NameSearchParams) -> HttpOperation {
        self.call_kw(params)
    }

    pub fn update(&self, params: UpdateParams) -> HttpOperation {
        self.call_kw(params)
    }

    pub fn default_get(&self, params: DefaultGetParams) -> HttpOperation {
        self.call_kw(params)
    }

    pub fn fields_get(&self, params: FieldsGetParams) -> HttpOperation {
        self.call_kw(params)
    }

    pub fn name_get(&self, params: NameGetParams) -> HttpOperation {
        self.call_kw(params)
    }

    pub fn onchange(&self, params: OnChangeParams) -> HttpOperation {
        self.call_kw(params)
    }

    pub fn call_method(&self, params: CallMethodParams) -> HttpOperation {
        self.call_kw(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn public_session_routes_carry_no_token() {
        let version = HttpController::session().version();

        assert_eq!(version.path(), "/web/webclient/version_info");
        assert_eq!(version.authorization(), Authorization::None);
        assert_eq!(to_value(version.params()).unwrap(), json!({}));
    }

    #[test]
    fn search_read_uses_dedicated_route_without_kwargs() {
        let op = HttpController::dataset("tok").search_read(
            SearchReadParams::new("res.partner", vec![])
                .with_fields(vec!["name".into()])
                .with_limit(5),
        );

        assert_eq!(op.endpoint(), Endpoint::SearchRead);
        assert_eq!(
            serde_json::to_string(op.params()).unwrap(),
            r#"{"model":"res.partner","fields":["name"],"offset":0,"limit":5,"domain":[],"sort":"","context":{}}"#
        );
    }

    #[test]
    fn call_kw_body_keeps_model_method_args_kwargs_order() {
        let op = HttpController::dataset("tok").delete(DeleteParams::new("res.partner", vec![7]));

        assert_eq!(op.path(), "/web/dataset/call_kw");
        assert_eq!(
            serde_json::to_string(op.params()).unwrap(),
            r#"{"model":"res.partner","method":"unlink","args":[[7]],"kwargs":{}}"#
        );
    }
}
