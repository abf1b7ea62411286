//! End-to-end scenarios driven through axum-test.

use axum::Router;
use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use ui_assets::{AssetsError, StaticAssetServer};

mod common;
use common::{APP_JS, FAVICON, INDEX_HTML, ui_build};

fn test_server(root: &str) -> TestServer {
    let assets = StaticAssetServer::new(root).expect("construct asset server");
    TestServer::new(assets.register_routes(Router::new())).expect("start test server")
}

#[tokio::test]
async fn test_ui_build_with_favicon() {
    let dir = ui_build(true);
    let server = test_server(dir.path().to_str().unwrap());

    let response = server.get("/static/app.js").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), APP_JS);

    let response = server.get("/unknown/route").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), INDEX_HTML);

    let response = server.get("/favicon.ico").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.as_bytes().to_vec(), FAVICON);

    let response = server
        .get("/unknown/route")
        .add_header(
            header::IF_MODIFIED_SINCE,
            HeaderValue::from_static("Fri, 01 Jan 2100 00:00:00 GMT"),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), INDEX_HTML);
}

#[tokio::test]
async fn test_ui_build_without_favicon() {
    let dir = ui_build(false);
    let server = test_server(dir.path().to_str().unwrap());

    let response = server.get("/favicon.ico").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server.get("/trace/abc123").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), INDEX_HTML);
}

#[tokio::test]
async fn test_root_without_entry_document_never_serves() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("app.js"), APP_JS).unwrap();

    let err = StaticAssetServer::new(dir.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, AssetsError::AssetRootInvalid { .. }));
}
