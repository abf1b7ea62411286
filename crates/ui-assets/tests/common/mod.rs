//! Test utilities and common setup.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use axum::Router;
use tempfile::TempDir;
use ui_assets::StaticAssetServer;

pub const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"root\"></div></body></html>";
pub const APP_JS: &str = "console.log(\"app\");";
pub const FAVICON: &[u8] = &[0x00, 0x00, 0x01, 0x00, 0x01, 0x00];

/// A built UI on disk: `index.html` and `static/app.js`, plus `favicon.ico` if asked.
pub fn ui_build(with_favicon: bool) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    write(dir.path(), "index.html", INDEX_HTML.as_bytes());
    write(dir.path(), "static/app.js", APP_JS.as_bytes());
    if with_favicon {
        write(dir.path(), "favicon.ico", FAVICON);
    }
    dir
}

pub fn write(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, contents).expect("write fixture");
}

/// Router with only the static routes registered on it.
pub fn test_app(root: &Path) -> Router {
    let server = StaticAssetServer::new(root.to_str().expect("utf-8 temp path"))
        .expect("construct asset server");
    server.register_routes(Router::new())
}
