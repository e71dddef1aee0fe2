use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Keyword arguments forwarded to a model method.
pub type Kwargs = Map<String, Value>;

/// The credential triple used by the `object` service.
///
/// The remote side reads these as the first three *positional* arguments of
/// `execute_kw`, so they are modelled as a fixed-field struct and lowered by
/// [`Credentials::positional`] rather than through map iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub db: String,
    pub uid: i64,
    pub password: String,
}

impl Credentials {
    pub fn new(db: impl Into<String>, uid: i64, password: impl Into<String>) -> Self {
        Self {
            db: db.into(),
            uid,
            password: password.into(),
        }
    }

    /// Returns `[db, uid, password]`.
    pub fn positional(&self) -> Vec<Value> {
        vec![
            Value::from(self.db.as_str()),
            Value::from(self.uid),
            Value::from(self.password.as_str()),
        ]
    }
}

/// Maximum number of records a search may return.
///
/// The remote encodes "no limit" as the literal `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    #[default]
    Unbounded,
    Records(u32),
}

impl From<Limit> for Value {
    fn from(limit: Limit) -> Self {
        match limit {
            Limit::Unbounded => Value::Bool(false),
            Limit::Records(n) => Value::from(n),
        }
    }
}

impl From<u32> for Limit {
    fn from(n: u32) -> Self {
        Limit::Records(n)
    }
}

impl Serialize for Limit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Limit::Unbounded => serializer.serialize_bool(false),
            Limit::Records(n) => serializer.serialize_u32(*n),
        }
    }
}

/// A model method invocation, independent of the wire family carrying it.
///
/// Serializes as the `call_kw` parameter object `{model, method, args, kwargs}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCall {
    pub model: String,
    pub method: String,
    pub args: Vec<Value>,
    pub kwargs: Kwargs,
}

/// A model call scoped by a credential triple (the `object` service).
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectCall {
    pub credentials: Credentials,
    pub call: ModelCall,
}

impl ObjectCall {
    /// Lowers to the `execute_kw` argument list:
    /// `[db, uid, password, model, method, args, kwargs]`.
    pub fn positional(&self) -> Vec<Value> {
        let mut args = self.credentials.positional();
        args.push(Value::from(self.call.model.as_str()));
        args.push(Value::from(self.call.method.as_str()));
        args.push(Value::Array(self.call.args.clone()));
        args.push(Value::Object(self.call.kwargs.clone()));
        args
    }
}

/// A call against the `db` service.
///
/// Protected calls carry the master password, which always travels as the
/// first positional argument.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseCall {
    pub method: &'static str,
    pub admin_password: Option<String>,
    pub args: Vec<Value>,
}

impl DatabaseCall {
    pub fn positional(&self) -> Vec<Value> {
        self.admin_password
            .iter()
            .map(|password| Value::from(password.as_str()))
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// A call against one of the three named remote services
/// (`common`, `db`, `object`).
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    Common {
        method: &'static str,
        args: Vec<Value>,
    },
    Database(DatabaseCall),
    Object(ObjectCall),
}

impl ServiceCall {
    /// The name of the remote service handling this call.
    pub fn service(&self) -> &'static str {
        match self {
            ServiceCall::Common { .. } => "common",
            ServiceCall::Database(_) => "db",
            ServiceCall::Object(_) => "object",
        }
    }

    /// The remote method name (`execute_kw` for every object call).
    pub fn method(&self) -> &str {
        match self {
            ServiceCall::Common { method, .. } => *method,
            ServiceCall::Database(call) => call.method,
            ServiceCall::Object(_) => "execute_kw",
        }
    }

    /// The flat positional argument list sent to the remote method.
    pub fn positional(&self) -> Vec<Value> {
        match self {
            ServiceCall::Common { args, .. } => args.clone(),
            ServiceCall::Database(call) => call.positional(),
            ServiceCall::Object(call) => call.positional(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn credentials_lower_in_fixed_order() {
        let credentials = Credentials::new("acme", 2, "secret");
        assert_eq!(credentials.positional(), vec![json!("acme"), json!(2), json!("secret")]);
    }

    #[test]
    fn object_call_spreads_credentials_first() {
        let call = ObjectCall {
            credentials: Credentials::new("acme", 2, "secret"),
            call: ModelCall {
                model: "res.partner".into(),
                method: "read".into(),
                args: vec![json!([1, 2]), json!(["name"])],
                kwargs: Kwargs::new(),
            },
        };

        assert_eq!(
            Value::Array(call.positional()),
            json!(["acme", 2, "secret", "res.partner", "read", [[1, 2], ["name"]], {}])
        );
    }

    #[test]
    fn admin_password_leads_database_arguments() {
        let call = DatabaseCall {
            method: "drop",
            admin_password: Some("master".into()),
            args: vec![json!("old")],
        };
        assert_eq!(call.positional(), vec![json!("master"), json!("old")]);

        let public = DatabaseCall {
            method: "db_exist",
            admin_password: None,
            args: vec![json!("acme")],
        };
        assert_eq!(public.positional(), vec![json!("acme")]);
    }

    #[test]
    fn limit_serializes_false_when_unbounded() {
        assert_eq!(Value::from(Limit::Unbounded), json!(false));
        assert_eq!(serde_json::to_value(Limit::Records(80)).unwrap(), json!(80));
    }
}
