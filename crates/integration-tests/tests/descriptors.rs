mod harness;

use axum::routing::post;
use axum::{Json, Router};
use harness::config::ConfigBuilder;
use harness::server::TestServer;
use serde_json::{Map, Value, json};
use throwlhos_core::{ErrorDescriptor, I18nMessage};
use throwlhos_server::{ErrorResponse, Throw};

async fn missing_resource(throw: Throw) -> Json<ErrorDescriptor> {
    Json(throw.not_found(
        Some("Sorry, something is missing!"),
        Some(json!({ "tryToFind": "whereIHaveBeen" })),
        None,
    ))
}

async fn broken_resource(throw: Throw) -> Json<ErrorDescriptor> {
    Json(throw.internal_server_error(None, None, None))
}

async fn unreadable_resource(throw: Throw) -> Json<ErrorDescriptor> {
    Json(throw.not_found(None, Some(json!(["HardToReadException"])), None))
}

async fn custom_resource(throw: Throw) -> Json<ErrorDescriptor> {
    Json(throw.custom("This is a custom error!", 500, Some(json!({ "fruit": "banana" })), None))
}

async fn localized_resource(throw: Throw) -> Json<ErrorDescriptor> {
    let mut options = Map::new();
    options.insert("x".to_owned(), json!(1));

    Json(throw.bad_request(
        Some("msg"),
        Some(json!({ "a": 1 })),
        Some(I18nMessage::new("k").with_options(options)),
    ))
}

fn check_access(throw: &Throw, granted: bool, errors: Option<Value>) -> Result<(), ErrorDescriptor> {
    if granted {
        Ok(())
    } else {
        Err(throw.forbidden(Some("Acesso negado!"), errors, None))
    }
}

async fn guarded_resource(throw: Throw) -> Result<Json<Value>, ErrorResponse> {
    check_access(&throw, false, Some(json!({ "access": false })))?;
    Ok(Json(json!({ "success": true })))
}

async fn guarded_resource_without_errors(throw: Throw) -> Result<Json<Value>, ErrorResponse> {
    Err(throw.forbidden(Some("Acesso negado!!"), None, None).into())
}

async fn open_resource(throw: Throw) -> Result<Json<Value>, ErrorResponse> {
    check_access(&throw, true, None)?;
    Ok(Json(json!({ "success": true })))
}

fn routes() -> Router {
    Router::new()
        .route("/resources/missing", post(missing_resource))
        .route("/resources/broken", post(broken_resource))
        .route("/resources/unreadable", post(unreadable_resource))
        .route("/resources/custom", post(custom_resource))
        .route("/resources/localized", post(localized_resource))
        .route("/resources/guarded", post(guarded_resource))
        .route("/resources/guarded-bare", post(guarded_resource_without_errors))
        .route("/resources/open", post(open_resource))
}

async fn start() -> TestServer {
    TestServer::with_routes(ConfigBuilder::new().build(), routes()).await.unwrap()
}

async fn post_json(server: &TestServer, path: &str) -> (u16, Value) {
    let resp = server.client().post(server.url(path)).send().await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn returns_correctly_formatted_object() {
    let server = start().await;

    let (status, body) = post_json(&server, "/resources/missing").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "message": "Sorry, something is missing!",
            "code": 404,
            "status": "NOT_FOUND",
            "errors": { "tryToFind": "whereIHaveBeen" }
        })
    );
}

#[tokio::test]
async fn returns_defaults_when_no_params_are_given() {
    let server = start().await;

    let (_, body) = post_json(&server, "/resources/broken").await;

    assert_eq!(
        body,
        json!({ "code": 500, "status": "INTERNAL_SERVER_ERROR", "message": "Internal Server Error" })
    );
}

#[tokio::test]
async fn missing_message_falls_back_to_status_text() {
    let server = start().await;

    let (_, body) = post_json(&server, "/resources/unreadable").await;

    assert_eq!(
        body,
        json!({
            "code": 404,
            "status": "NOT_FOUND",
            "message": "Not Found",
            "errors": ["HardToReadException"]
        })
    );
}

#[tokio::test]
async fn custom_error_keeps_caller_code() {
    let server = start().await;

    let (_, body) = post_json(&server, "/resources/custom").await;

    assert_eq!(
        body,
        json!({
            "code": 500,
            "status": "CUSTOM_ERROR",
            "message": "This is a custom error!",
            "errors": { "fruit": "banana" }
        })
    );
}

#[tokio::test]
async fn i18n_directive_reaches_the_wire_verbatim() {
    let server = start().await;

    let (_, body) = post_json(&server, "/resources/localized").await;

    assert_eq!(body["i18n"], json!({ "key": "k", "options": { "x": 1 } }));
    assert_eq!(body["message"], json!("msg"));
    assert_eq!(body["errors"], json!({ "a": 1 }));
}

#[tokio::test]
async fn propagated_descriptor_becomes_error_response() {
    let server = start().await;

    let (status, body) = post_json(&server, "/resources/guarded").await;

    assert_eq!(status, 403);
    assert_eq!(
        body,
        json!({
            "code": 403,
            "status": "FORBIDDEN",
            "message": "Acesso negado!",
            "errors": { "access": false },
            "success": false
        })
    );
}

#[tokio::test]
async fn propagated_descriptor_without_errors() {
    let server = start().await;

    let (status, body) = post_json(&server, "/resources/guarded-bare").await;

    assert_eq!(status, 403);
    assert_eq!(
        body,
        json!({ "code": 403, "status": "FORBIDDEN", "message": "Acesso negado!!", "success": false })
    );
}

#[tokio::test]
async fn handlers_that_do_not_fail_are_untouched() {
    let server = start().await;

    let (status, body) = post_json(&server, "/resources/open").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "success": true }));
}
