//! Builders shared by the two service oriented families (JSON-RPC and XML-RPC).
//!
//! Both families talk to the same three remote services (`common`, `db`, `object`)
//! with the same method names and positional arguments; they only differ in the
//! envelope. The builders here produce a [`ServiceOperation`] and convert it into
//! the family specific operation type `O`.
use super::params::*;
use super::types::{Credentials, DatabaseCall, ObjectCall, ServiceCall};
use super::{Authorization, DatabaseKind, OperationKind, SessionKind};
use serde_json::Value;
use std::marker::PhantomData;

/// A call against a named remote service, tagged with the action it performs.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOperation {
    kind: OperationKind,
    call: ServiceCall,
}

impl ServiceOperation {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn call(&self) -> &ServiceCall {
        &self.call
    }

    pub fn authorization(&self) -> Authorization<'_> {
        match &self.call {
            ServiceCall::Common { .. } => Authorization::None,
            ServiceCall::Database(DatabaseCall {
                admin_password: Some(password),
                ..
            }) => Authorization::AdminPassword(password),
            ServiceCall::Database(_) => Authorization::None,
            ServiceCall::Object(call) => Authorization::Credentials(&call.credentials),
        }
    }
}

/// `common` service: `authenticate` and `version`.
#[derive(Debug, Clone)]
pub struct CommonBuilder<O> {
    family: PhantomData<fn() -> O>,
}

impl<O: From<ServiceOperation>> CommonBuilder<O> {
    pub(crate) fn new() -> Self {
        Self {
            family: PhantomData,
        }
    }

    /// `authenticate(db, login, password, {})`.
    pub fn authenticate(&self, params: AuthenticateParams) -> O {
        common(SessionKind::Authenticate, "authenticate", params.positional())
    }

    pub fn version(&self) -> O {
        common(SessionKind::Version, "version", Vec::new())
    }
}

fn common<O: From<ServiceOperation>>(kind: SessionKind, method: &'static str, args: Vec<Value>) -> O {
    O::from(ServiceOperation {
        kind: kind.into(),
        call: ServiceCall::Common { method, args },
    })
}

fn database<O: From<ServiceOperation>>(
    kind: DatabaseKind,
    method: &'static str,
    admin_password: Option<String>,
    args: Vec<Value>,
) -> O {
    O::from(ServiceOperation {
        kind: kind.into(),
        call: ServiceCall::Database(DatabaseCall {
            method,
            admin_password,
            args,
        }),
    })
}

/// Public `db` service calls.
#[derive(Debug, Clone)]
pub struct DatabaseBuilder<O> {
    family: PhantomData<fn() -> O>,
}

impl<O: From<ServiceOperation>> DatabaseBuilder<O> {
    pub(crate) fn new() -> Self {
        Self {
            family: PhantomData,
        }
    }

    /// `db_exist(name)`.
    pub fn exist(&self, name: impl Into<String>) -> O {
        database(
            DatabaseKind::Exist,
            "db_exist",
            None,
            vec![Value::String(name.into())],
        )
    }

    /// `list()`.
    pub fn list(&self) -> O {
        database(DatabaseKind::List, "list", None, Vec::new())
    }
}

/// `db` service calls guarded by the master password.
#[derive(Debug, Clone)]
pub struct ProtectedDatabaseBuilder<O> {
    admin_password: String,
    family: PhantomData<fn() -> O>,
}

impl<O: From<ServiceOperation>> ProtectedDatabaseBuilder<O> {
    pub(crate) fn new(admin_password: String) -> Self {
        Self {
            admin_password,
            family: PhantomData,
        }
    }

    pub fn create(&self, params: CreateDatabaseParams) -> O {
        self.protected(DatabaseKind::Create, "create_database", params.positional())
    }

    pub fn duplicate(&self, params: DuplicateDatabaseParams) -> O {
        self.protected(
            DatabaseKind::Duplicate,
            "duplicate_database",
            params.positional(),
        )
    }

    pub fn drop(&self, name: impl Into<String>) -> O {
        self.protected(DatabaseKind::Drop, "drop", vec![Value::String(name.into())])
    }

    fn protected(&self, kind: DatabaseKind, method: &'static str, args: Vec<Value>) -> O {
        database(kind, method, Some(self.admin_password.clone()), args)
    }
}

/// `object` service calls, all lowered to `execute_kw`.
#[derive(Debug, Clone)]
pub struct ObjectBuilder<O> {
    credentials: Credentials,
    family: PhantomData<fn() -> O>,
}

impl<O: From<ServiceOperation>> ObjectBuilder<O> {
    pub(crate) fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            family: PhantomData,
        }
    }

    fn execute_kw<P: ModelParams>(&self, params: P) -> O {
        O::from(ServiceOperation {
            kind: P::KIND.into(),
            call: ServiceCall::Object(ObjectCall {
                credentials: self.credentials.clone(),
                call: params.into_model_call(),
            }),
        })
    }

    pub fn create(&self, params: CreateParams) -> O {
        self.execute_kw(params)
    }

    pub fn delete(&self, params: DeleteParams) -> O {
        self.execute_kw(params)
    }

    pub fn read(&self, params: ReadParams) -> O {
        self.execute_kw(params)
    }

    pub fn search(&self, params: SearchParams) -> O {
        self.execute_kw(params)
    }

    pub fn search_count(&self, params: SearchCountParams) -> O {
        self.execute_kw(params)
    }

    /// Goes through `search_read_pagination` so the reply includes the total count.
    pub fn search_read(&self, params: SearchReadParams) -> O {
        self.execute_kw(params)
    }

    pub fn name_search(&self, params: NameSearchParams) -> O {
        self.execute_kw(params)
    }

    pub fn update(&self, params: UpdateParams) -> O {
        self.execute_kw(params)
    }

    pub fn default_get(&self, params: DefaultGetParams) -> O {
        self.execute_kw(params)
    }

    pub fn fields_get(&self, params: FieldsGetParams) -> O {
        self.execute_kw(params)
    }

    pub fn name_get(&self, params: NameGetParams) -> O {
        self.execute_kw(params)
    }

    pub fn onchange(&self, params: OnChangeParams) -> O {
        self.execute_kw(params)
    }

    pub fn call_method(&self, params: CallMethodParams) -> O {
        self.execute_kw(params)
    }
}
