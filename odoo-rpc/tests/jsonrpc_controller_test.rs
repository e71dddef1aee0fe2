use odoo_rpc::config::ClientOptions;
use odoo_rpc::error::ServiceErrorKind;
use odoo_rpc::operation::{
    AuthenticateParams, CreateDatabaseParams, CreateParams, Credentials, DuplicateDatabaseParams,
    FieldsGetParams, JsonRpcController, SearchCountParams, SearchParams, SearchReadParams,
    UpdateParams,
};
use odoo_rpc::{Client, DispatchError};
use recording_server::RecordingServer;
use serde_json::{Value, json};


fn client(server: &RecordingServer) -> Client<RecordingServer> {
    Client::with_http_client(server.clone(), ClientOptions::insecure("localhost", 8069))
}

fn credentials() -> Credentials {
    Credentials::new("acme", 2, "secret")
}

/// Executes `operation` against a server answering `null` and returns the posted `params`.
async fn posted_params(operation: odoo_rpc::operation::JsonRpcOperation) -> Value {
    let server = RecordingServer::new().reply_json(json!({"jsonrpc": "2.0", "id": null, "result": null}));
    client(&server).execute(&operation.into()).await.unwrap();

    let request = server.single_request();
    assert_eq!(request.url, "http://localhost:8069/jsonrpc");

    let mut body = request.body_json();
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["method"], "call");
    assert!(body.get("id").is_none());
    body["params"].take()
}

#[tokio::test]
async fn test_search_spreads_credentials_first() {
    let server = RecordingServer::new().reply_json(json!({"result": [1, 2]}));

    let operation = JsonRpcController::object(credentials()).search(SearchParams::new("res.partner", vec![]));
    client(&server).execute(&operation.into()).await.unwrap();

    assert_eq!(
        server.single_request().body_str(),
        r#"{"jsonrpc":"2.0","method":"call","params":{"service":"object","method":"execute_kw","args":["acme",2,"secret","res.partner","search",[[],0,false,null,false],{}]}}"#
    );
}

#[tokio::test]
async fn test_search_with_every_option() {
    let params = posted_params(
        JsonRpcController::object(credentials()).search(
            SearchParams::new("res.partner", vec![json!(["is_company", "=", true])])
                .with_offset(40)
                .with_limit(20)
                .with_order("name desc")
                .with_count(true),
        ),
    )
    .await;

    assert_eq!(
        params["args"][5],
        json!([[["is_company", "=", true]], 40, 20, "name desc", true])
    );
}

#[tokio::test]
async fn test_search_read_goes_through_pagination_method() {
    let params = posted_params(
        JsonRpcController::object(credentials()).search_read(
            SearchReadParams::new("res.partner", vec![])
                .with_fields(vec!["name".into(), "email".into()])
                .with_limit(80),
        ),
    )
    .await;

    assert_eq!(params["args"][4], "search_read_pagination");
    assert_eq!(params["args"][5], json!([["name", "email"], 0, 80, [], ""]));
}

#[tokio::test]
async fn test_model_methods_and_argument_order() {
    let object = JsonRpcController::object(credentials());

    let params = posted_params(object.create(CreateParams::new("res.partner", json!({"name": "Azure"})))).await;
    assert_eq!(params["args"][4], "create");
    assert_eq!(params["args"][5], json!([{"name": "Azure"}]));

    let params = posted_params(object.update(UpdateParams::new("res.partner", vec![7], json!({"name": "Deco"})))).await;
    assert_eq!(params["args"][4], "write");
    assert_eq!(params["args"][5], json!([[7], {"name": "Deco"}]));

    let params = posted_params(object.search_count(SearchCountParams::new("res.partner", vec![]))).await;
    assert_eq!(params["args"][4], "search_count");
    assert_eq!(params["args"][5], json!([[]]));

    let params = posted_params(
        object.fields_get(FieldsGetParams::new("res.partner").with_attributes(vec!["string".into(), "type".into()])),
    )
    .await;
    assert_eq!(params["args"][4], "fields_get");
    assert_eq!(params["args"][5], json!([[], ["string", "type"]]));
}

#[tokio::test]
async fn test_common_service_calls() {
    let params = posted_params(
        JsonRpcController::common().authenticate(AuthenticateParams::new("acme", "admin", "secret")),
    )
    .await;
    assert_eq!(
        params,
        json!({"service": "common", "method": "authenticate", "args": ["acme", "admin", "secret", {}]})
    );

    let params = posted_params(JsonRpcController::common().version()).await;
    assert_eq!(params, json!({"service": "common", "method": "version", "args": []}));
}

#[tokio::test]
async fn test_database_calls_put_admin_password_first() {
    let protected = JsonRpcController::database_with_password("master");

    let params = posted_params(
        protected.create(
            CreateDatabaseParams::new("acme2", "admin-pw")
                .with_demo(true)
                .with_lang("fr_FR")
                .with_country_code("FR"),
        ),
    )
    .await;
    assert_eq!(
        params,
        json!({
            "service": "db",
            "method": "create_database",
            "args": ["master", "acme2", true, "fr_FR", "admin-pw", "admin", "FR"]
        })
    );

    let params = posted_params(protected.duplicate(DuplicateDatabaseParams::new("acme", "acme-copy"))).await;
    assert_eq!(params["method"], "duplicate_database");
    assert_eq!(params["args"], json!(["master", "acme", "acme-copy"]));

    let params = posted_params(protected.drop("acme-copy")).await;
    assert_eq!(params["method"], "drop");
    assert_eq!(params["args"], json!(["master", "acme-copy"]));

    let params = posted_params(JsonRpcController::database().exist("acme")).await;
    assert_eq!(params, json!({"service": "db", "method": "db_exist", "args": ["acme"]}));

    let params = posted_params(JsonRpcController::database().list()).await;
    assert_eq!(params, json!({"service": "db", "method": "list", "args": []}));
}

#[tokio::test]
async fn test_result_is_returned_verbatim() {
    let page = json!({"length": 1, "records": [{"id": 1, "name": "Azure Interior"}]});
    let server = RecordingServer::new().reply_json(json!({"jsonrpc": "2.0", "result": page.clone()}));

    let operation = JsonRpcController::object(credentials()).search_read(SearchReadParams::new("res.partner", vec![]));
    let result = client(&server).execute(&operation.into()).await.unwrap();

    assert_eq!(result, page);
}

#[tokio::test]
async fn test_unknown_exception_type_is_caught() {
    let server = RecordingServer::new().reply_json(json!({
        "error": {
            "code": 200,
            "message": "Odoo Server Error",
            "data": {"exception_type": "redirect_warning", "message": "go elsewhere", "debug": ""}
        }
    }));

    let operation = JsonRpcController::database().list();
    let error = client(&server).execute(&operation.into()).await.unwrap_err();

    match error {
        DispatchError::Service(error) => {
            assert_eq!(error.kind, ServiceErrorKind::Unknown("redirect_warning".into()));
            assert_eq!(error.message, "go elsewhere");
        }
        other => panic!("Expected a service error, got {other:?}"),
    }
}
