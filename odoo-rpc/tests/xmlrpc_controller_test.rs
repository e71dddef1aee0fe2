use odoo_rpc::config::ClientOptions;
use odoo_rpc::error::LegacyErrorKind;
use odoo_rpc::operation::{Credentials, NameSearchParams, ReadParams, XmlRpcController};
use odoo_rpc::transport::TransportError;
use odoo_rpc::{Client, DispatchError, LegacyServiceError};
use recording_server::RecordingServer;
use serde_json::json;


fn client(server: &RecordingServer) -> Client<RecordingServer> {
    Client::with_http_client(server.clone(), ClientOptions::secure("h"))
}

fn fault(code: &str, message: &str) -> String {
    format!(
        "<?xml version=\"1.0\"?><methodResponse><fault><value><struct>\
         <member><name>faultCode</name><value><int>{code}</int></value></member>\
         <member><name>faultString</name><value><string>{message}</string></value></member>\
         </struct></value></fault></methodResponse>"
    )
}

#[tokio::test]
async fn test_access_denied_fault() {
    let server = RecordingServer::new().reply_xml(&fault("3", "denied"));

    let operation = XmlRpcController::object(Credentials::new("acme", 2, "wrong"))
        .read(ReadParams::new("res.partner", vec![1]));
    let error = client(&server).execute(&operation.into()).await.unwrap_err();

    match error {
        DispatchError::Legacy(error) => assert_eq!(
            error,
            LegacyServiceError {
                kind: LegacyErrorKind::AccessDenied,
                message: "denied".into(),
            }
        ),
        other => panic!("Expected a legacy fault, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_fault_code_is_caught() {
    let server = RecordingServer::new().reply_xml(&fault("99", "boom"));

    let error = client(&server)
        .execute(&XmlRpcController::common().version().into())
        .await
        .unwrap_err();

    match error {
        DispatchError::Legacy(error) => {
            assert_eq!(error.kind, LegacyErrorKind::UnknownError);
            assert_ne!(error.message, "boom");
        }
        other => panic!("Expected a legacy fault, got {other:?}"),
    }
}

#[tokio::test]
async fn test_object_call_document_and_path() {
    let server = RecordingServer::new().reply_xml(
        "<?xml version=\"1.0\"?><methodResponse><params><param><value><array><data>\
         <value><array><data><value><int>9</int></value><value><string>Azure Interior</string></value></data></array></value>\
         </data></array></value></param></params></methodResponse>",
    );

    let operation = XmlRpcController::object(Credentials::new("acme", 2, "secret"))
        .name_search(NameSearchParams::new("res.partner", "Azure").with_limit(5));
    let result = client(&server).execute(&operation.into()).await.unwrap();

    assert_eq!(result, json!([[9, "Azure Interior"]]));

    let request = server.single_request();
    assert_eq!(request.url, "https://h/xmlrpc/2/object");
    assert_eq!(request.header("content-type"), Some("text/xml"));
    assert_eq!(
        request.body_str(),
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><methodCall><methodName>execute_kw</methodName><params>",
            "<param><value><string>acme</string></value></param>",
            "<param><value><int>2</int></value></param>",
            "<param><value><string>secret</string></value></param>",
            "<param><value><string>res.partner</string></value></param>",
            "<param><value><string>name_search</string></value></param>",
            "<param><value><array><data>",
            "<value><string>Azure</string></value>",
            "<value><array><data></data></array></value>",
            "<value><string>ilike</string></value>",
            "<value><int>5</int></value>",
            "</data></array></value></param>",
            "<param><value><struct></struct></value></param>",
            "</params></methodCall>"
        )
    );
}

#[tokio::test]
async fn test_database_calls_use_db_path() {
    let server = RecordingServer::new()
        .reply_xml("<methodResponse><params><param><value><boolean>1</boolean></value></param></params></methodResponse>");

    let result = client(&server)
        .execute(&XmlRpcController::database().exist("acme").into())
        .await
        .unwrap();

    assert_eq!(result, json!(true));
    assert_eq!(server.single_request().url, "https://h/xmlrpc/2/db");
}

#[tokio::test]
async fn test_garbage_reply_is_a_transport_error() {
    let server = RecordingServer::new().reply_xml("<html><body>Bad Gateway</body></html>");

    let error = client(&server)
        .execute(&XmlRpcController::common().version().into())
        .await
        .unwrap_err();

    match error {
        DispatchError::Transport(TransportError::XmlRpc(_)) => {}
        other => panic!("Expected an XML-RPC decode error, got {other:?}"),
    }
}
