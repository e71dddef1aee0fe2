//! # Operation Parameters
//!
//! The semantic inputs a caller provides for each kind of remote call.
//!
//! Each struct exposes a `new` constructor taking the required inputs and
//! `with_*` methods for the optional ones. Defaults mirror what the remote
//! server assumes when the argument is omitted (`offset = 0`, `limit = false`,
//! `kwargs = {}`, ...).
//!
//! Model parameters lower into a protocol independent [`ModelCall`] through
//! [`ModelParams::into_model_call`]; this is the only place where the remote
//! method names and positional argument orders of model methods live.
use super::ModelKind;
use super::types::{Kwargs, Limit, ModelCall};
use serde::Serialize;
use serde_json::Value;

/// Model operation parameters that lower into a [`ModelCall`].
pub trait ModelParams {
    /// The operation kind produced by these parameters.
    const KIND: ModelKind;

    fn into_model_call(self) -> ModelCall;
}

fn model_call(model: String, method: &str, args: Vec<Value>, kwargs: Kwargs) -> ModelCall {
    ModelCall {
        model,
        method: method.to_string(),
        args,
        kwargs,
    }
}

fn strings(values: Vec<String>) -> Value {
    Value::Array(values.into_iter().map(Value::String).collect())
}

fn ids(ids: Vec<i64>) -> Value {
    Value::Array(ids.into_iter().map(Value::from).collect())
}

/// Login parameters for `authenticate`.
///
/// Serializes as `{db, login, password}`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateParams {
    pub db: String,
    pub login: String,
    pub password: String,
}

impl AuthenticateParams {
    pub fn new(
        db: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            db: db.into(),
            login: login.into(),
            password: password.into(),
        }
    }

    /// Positional form used by the `common` service:
    /// `[db, login, password, user_agent_env]`, with an empty environment.
    pub fn positional(&self) -> Vec<Value> {
        vec![
            Value::from(self.db.as_str()),
            Value::from(self.login.as_str()),
            Value::from(self.password.as_str()),
            Value::Object(Kwargs::new()),
        ]
    }
}

/// `create`: `[fields_values]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateParams {
    pub model: String,
    pub values: Value,
    pub kwargs: Kwargs,
}

impl CreateParams {
    pub fn new(model: impl Into<String>, values: Value) -> Self {
        Self {
            model: model.into(),
            values,
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

impl ModelParams for CreateParams {
    const KIND: ModelKind = ModelKind::Create;

    fn into_model_call(self) -> ModelCall {
        model_call(self.model, "create", vec![self.values], self.kwargs)
    }
}

/// `unlink`: `[ids]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteParams {
    pub model: String,
    pub ids: Vec<i64>,
    pub kwargs: Kwargs,
}

impl DeleteParams {
    pub fn new(model: impl Into<String>, ids: Vec<i64>) -> Self {
        Self {
            model: model.into(),
            ids,
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

impl ModelParams for DeleteParams {
    const KIND: ModelKind = ModelKind::Delete;

    fn into_model_call(self) -> ModelCall {
        model_call(self.model, "unlink", vec![ids(self.ids)], self.kwargs)
    }
}

/// `read`: `[ids, fields]`. An empty field list reads every field.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadParams {
    pub model: String,
    pub ids: Vec<i64>,
    pub fields: Vec<String>,
    pub kwargs: Kwargs,
}

impl ReadParams {
    pub fn new(model: impl Into<String>, ids: Vec<i64>) -> Self {
        Self {
            model: model.into(),
            ids,
            fields: Vec::new(),
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

impl ModelParams for ReadParams {
    const KIND: ModelKind = ModelKind::Read;

    fn into_model_call(self) -> ModelCall {
        model_call(
            self.model,
            "read",
            vec![ids(self.ids), strings(self.fields)],
            self.kwargs,
        )
    }
}

/// `search`: `[domain, offset, limit, order, count]`.
///
/// A missing `order` keeps its slot as `null` so the later arguments do not
/// shift.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub model: String,
    pub domain: Vec<Value>,
    pub offset: u32,
    pub limit: Limit,
    pub order: Option<String>,
    pub count: bool,
    pub kwargs: Kwargs,
}

impl SearchParams {
    pub fn new(model: impl Into<String>, domain: Vec<Value>) -> Self {
        Self {
            model: model.into(),
            domain,
            offset: 0,
            limit: Limit::Unbounded,
            order: None,
            count: false,
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Limit::Records(limit);
        self
    }

    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn with_count(mut self, count: bool) -> Self {
        self.count = count;
        self
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

impl ModelParams for SearchParams {
    const KIND: ModelKind = ModelKind::Search;

    fn into_model_call(self) -> ModelCall {
        let args = vec![
            Value::Array(self.domain),
            Value::from(self.offset),
            Value::from(self.limit),
            self.order.map(Value::String).unwrap_or(Value::Null),
            Value::Bool(self.count),
        ];
        model_call(self.model, "search", args, self.kwargs)
    }
}

/// `search_count`: `[domain]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCountParams {
    pub model: String,
    pub domain: Vec<Value>,
    pub kwargs: Kwargs,
}

impl SearchCountParams {
    pub fn new(model: impl Into<String>, domain: Vec<Value>) -> Self {
        Self {
            model: model.into(),
            domain,
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

impl ModelParams for SearchCountParams {
    const KIND: ModelKind = ModelKind::SearchCount;

    fn into_model_call(self) -> ModelCall {
        model_call(
            self.model,
            "search_count",
            vec![Value::Array(self.domain)],
            self.kwargs,
        )
    }
}

/// `search_read`.
///
/// Over HTTP this targets the dedicated `/web/dataset/search_read` route and
/// `context` is sent while `kwargs` is not. On the `object` service it goes
/// through `search_read_pagination` with `[fields, offset, limit, domain, sort]`,
/// because plain `search_read` does not report the total match count needed
/// to paginate; there `kwargs` is sent and `context` is not.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReadParams {
    pub model: String,
    pub domain: Vec<Value>,
    pub fields: Vec<String>,
    pub offset: u32,
    pub limit: Limit,
    pub sort: String,
    pub context: Kwargs,
    pub kwargs: Kwargs,
}

impl SearchReadParams {
    pub fn new(model: impl Into<String>, domain: Vec<Value>) -> Self {
        Self {
            model: model.into(),
            domain,
            fields: Vec::new(),
            offset: 0,
            limit: Limit::Unbounded,
            sort: String::new(),
            context: Kwargs::new(),
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Limit::Records(limit);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn with_context(mut self, context: Kwargs) -> Self {
        self.context = context;
        self
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }

    /// The body of the dedicated HTTP route.
    pub(crate) fn into_payload(self) -> SearchReadPayload {
        SearchReadPayload {
            model: self.model,
            fields: self.fields,
            offset: self.offset,
            limit: self.limit,
            domain: self.domain,
            sort: self.sort,
            context: self.context,
        }
    }
}

impl ModelParams for SearchReadParams {
    const KIND: ModelKind = ModelKind::SearchRead;

    fn into_model_call(self) -> ModelCall {
        let args = vec![
            strings(self.fields),
            Value::from(self.offset),
            Value::from(self.limit),
            Value::Array(self.domain),
            Value::String(self.sort),
        ];
        model_call(self.model, "search_read_pagination", args, self.kwargs)
    }
}

/// Parameters of `/web/dataset/search_read`, serialized in this field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReadPayload {
    pub model: String,
    pub fields: Vec<String>,
    pub offset: u32,
    pub limit: Limit,
    pub domain: Vec<Value>,
    pub sort: String,
    pub context: Kwargs,
}

/// `name_search`: `[name, domain, operator, limit]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NameSearchParams {
    pub model: String,
    pub name: String,
    pub domain: Vec<Value>,
    pub operator: String,
    pub limit: u32,
    pub kwargs: Kwargs,
}

impl NameSearchParams {
    pub fn new(model: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            name: name.into(),
            domain: Vec::new(),
            operator: "ilike".to_string(),
            limit: 100,
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_domain(mut self, domain: Vec<Value>) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

impl ModelParams for NameSearchParams {
    const KIND: ModelKind = ModelKind::NameSearch;

    fn into_model_call(self) -> ModelCall {
        let args = vec![
            Value::String(self.name),
            Value::Array(self.domain),
            Value::String(self.operator),
            Value::from(self.limit),
        ];
        model_call(self.model, "name_search", args, self.kwargs)
    }
}

/// `write`: `[ids, fields_values]`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParams {
    pub model: String,
    pub ids: Vec<i64>,
    pub values: Value,
    pub kwargs: Kwargs,
}

impl UpdateParams {
    pub fn new(model: impl Into<String>, ids: Vec<i64>, values: Value) -> Self {
        Self {
            model: model.into(),
            ids,
            values,
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

impl ModelParams for UpdateParams {
    const KIND: ModelKind = ModelKind::Update;

    fn into_model_call(self) -> ModelCall {
        model_call(
            self.model,
            "write",
            vec![ids(self.ids), self.values],
            self.kwargs,
        )
    }
}

/// `default_get`: `[fields_names]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultGetParams {
    pub model: String,
    pub fields: Vec<String>,
    pub kwargs: Kwargs,
}

impl DefaultGetParams {
    pub fn new(model: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            model: model.into(),
            fields,
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

impl ModelParams for DefaultGetParams {
    const KIND: ModelKind = ModelKind::DefaultGet;

    fn into_model_call(self) -> ModelCall {
        model_call(
            self.model,
            "default_get",
            vec![strings(self.fields)],
            self.kwargs,
        )
    }
}

/// `fields_get`: `[fields_names, attributes]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldsGetParams {
    pub model: String,
    pub fields: Vec<String>,
    pub attributes: Vec<String>,
    pub kwargs: Kwargs,
}

impl FieldsGetParams {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            fields: Vec::new(),
            attributes: Vec::new(),
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<String>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

impl ModelParams for FieldsGetParams {
    const KIND: ModelKind = ModelKind::FieldsGet;

    fn into_model_call(self) -> ModelCall {
        model_call(
            self.model,
            "fields_get",
            vec![strings(self.fields), strings(self.attributes)],
            self.kwargs,
        )
    }
}

/// `name_get`: `[ids]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NameGetParams {
    pub model: String,
    pub ids: Vec<i64>,
    pub kwargs: Kwargs,
}

impl NameGetParams {
    pub fn new(model: impl Into<String>, ids: Vec<i64>) -> Self {
        Self {
            model: model.into(),
            ids,
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

impl ModelParams for NameGetParams {
    const KIND: ModelKind = ModelKind::NameGet;

    fn into_model_call(self) -> ModelCall {
        model_call(self.model, "name_get", vec![ids(self.ids)], self.kwargs)
    }
}

/// `onchange`: `[[], values, field_names, field_onchange]`.
///
/// The leading empty list is the record id slot, always empty for a record
/// being created.
#[derive(Debug, Clone, PartialEq)]
pub struct OnChangeParams {
    pub model: String,
    pub values: Value,
    pub field_names: Vec<String>,
    pub field_onchange: Value,
    pub kwargs: Kwargs,
}

impl OnChangeParams {
    pub fn new(
        model: impl Into<String>,
        values: Value,
        field_names: Vec<String>,
        field_onchange: Value,
    ) -> Self {
        Self {
            model: model.into(),
            values,
            field_names,
            field_onchange,
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

impl ModelParams for OnChangeParams {
    const KIND: ModelKind = ModelKind::OnChange;

    fn into_model_call(self) -> ModelCall {
        let args = vec![
            Value::Array(Vec::new()),
            self.values,
            strings(self.field_names),
            self.field_onchange,
        ];
        model_call(self.model, "onchange", args, self.kwargs)
    }
}

/// An arbitrary model method, arguments forwarded verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CallMethodParams {
    pub model: String,
    pub method: String,
    pub args: Vec<Value>,
    pub kwargs: Kwargs,
}

impl CallMethodParams {
    pub fn new(model: impl Into<String>, method: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            model: model.into(),
            method: method.into(),
            args,
            kwargs: Kwargs::new(),
        }
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

impl ModelParams for CallMethodParams {
    const KIND: ModelKind = ModelKind::CallMethod;

    fn into_model_call(self) -> ModelCall {
        ModelCall {
            model: self.model,
            method: self.method,
            args: self.args,
            kwargs: self.kwargs,
        }
    }
}

/// `create_database`:
/// `[admin_password, name, demo, lang, user_password, login, country_code]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDatabaseParams {
    pub name: String,
    pub demo: bool,
    pub lang: String,
    pub user_password: String,
    pub login: String,
    pub country_code: String,
}

impl CreateDatabaseParams {
    /// A database without demo data, in `en_US`, whose administrator logs in as `admin`.
    pub fn new(name: impl Into<String>, user_password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            demo: false,
            lang: "en_US".to_string(),
            user_password: user_password.into(),
            login: "admin".to_string(),
            country_code: String::new(),
        }
    }

    pub fn with_demo(mut self, demo: bool) -> Self {
        self.demo = demo;
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = login.into();
        self
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    pub(crate) fn positional(self) -> Vec<Value> {
        vec![
            Value::String(self.name),
            Value::Bool(self.demo),
            Value::String(self.lang),
            Value::String(self.user_password),
            Value::String(self.login),
            Value::String(self.country_code),
        ]
    }
}

/// `duplicate_database`: `[admin_password, original_name, name]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateDatabaseParams {
    pub original_name: String,
    pub name: String,
}

impl DuplicateDatabaseParams {
    pub fn new(original_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            original_name: original_name.into(),
            name: name.into(),
        }
    }

    pub(crate) fn positional(self) -> Vec<Value> {
        vec![Value::String(self.original_name), Value::String(self.name)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(call: ModelCall) -> Value {
        Value::Array(call.args)
    }

    #[test]
    fn search_keeps_a_null_hole_for_missing_order() {
        let call = SearchParams::new("res.partner", vec![]).into_model_call();

        assert_eq!(call.method, "search");
        assert_eq!(call.args.len(), 5);
        assert_eq!(args(call), json!([[], 0, false, null, false]));
    }

    #[test]
    fn search_read_on_object_service_paginates() {
        let call = SearchReadParams::new("res.partner", vec![json!(["active", "=", true])])
            .with_fields(vec!["name".into()])
            .with_offset(20)
            .with_limit(10)
            .with_sort("name asc")
            .into_model_call();

        assert_eq!(call.method, "search_read_pagination");
        assert_eq!(
            args(call),
            json!([["name"], 20, 10, [["active", "=", true]], "name asc"])
        );
    }

    #[test]
    fn name_search_defaults() {
        let call = NameSearchParams::new("res.partner", "Azure").into_model_call();
        assert_eq!(args(call), json!(["Azure", [], "ilike", 100]));
    }

    #[test]
    fn onchange_leads_with_empty_id_list() {
        let call = OnChangeParams::new(
            "sale.order",
            json!({"partner_id": 3}),
            vec!["partner_id".into()],
            json!({"partner_id": "1"}),
        )
        .into_model_call();

        assert_eq!(
            args(call),
            json!([[], {"partner_id": 3}, ["partner_id"], {"partner_id": "1"}])
        );
    }

    #[test]
    fn call_method_forwards_arguments_verbatim() {
        let mut kwargs = Kwargs::new();
        kwargs.insert("context".into(), json!({"lang": "fr_FR"}));

        let call = CallMethodParams::new("res.partner", "action_archive", vec![json!([1, 2])])
            .with_kwargs(kwargs.clone())
            .into_model_call();

        assert_eq!(call.method, "action_archive");
        assert_eq!(call.args, vec![json!([1, 2])]);
        assert_eq!(call.kwargs, kwargs);
    }

    #[test]
    fn authenticate_serializes_in_fixed_key_order() {
        let params = AuthenticateParams::new("acme", "admin", "secret");

        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"db":"acme","login":"admin","password":"secret"}"#
        );
        assert_eq!(
            Value::Array(params.positional()),
            json!(["acme", "admin", "secret", {}])
        );
    }
}
