//! The static asset server: root resolution, route registration and the
//! entry-document fallback.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{Method, header},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, info};

use crate::config::{AssetsConfig, DEFAULT_ASSETS_ROOT, ENTRY_DOCUMENT};
use crate::error::AssetsError;

/// Serves a built single-page UI from a directory on disk.
///
/// The server is immutable once constructed. Handlers registered through
/// [`StaticAssetServer::register_routes`] capture owned copies of the paths
/// they serve, so they can run concurrently without synchronization.
#[derive(Debug, Clone)]
pub struct StaticAssetServer {
    root: String,
    asset_prefix: String,
    root_files: Vec<String>,
}

impl StaticAssetServer {
    /// Create a server for `requested_root`, or [`DEFAULT_ASSETS_ROOT`] when it is empty.
    pub fn new(requested_root: &str) -> Result<Self, AssetsError> {
        Self::with_default_root(requested_root, DEFAULT_ASSETS_ROOT)
    }

    /// Like [`StaticAssetServer::new`] with an explicit fallback root.
    pub fn with_default_root(requested_root: &str, default_root: &str) -> Result<Self, AssetsError> {
        Self::from_config(&AssetsConfig {
            root: requested_root.to_string(),
            default_root: default_root.to_string(),
            ..AssetsConfig::default()
        })
    }

    /// Create a server from a full configuration.
    ///
    /// Fails with [`AssetsError::AssetRootInvalid`] if the entry document
    /// cannot be read from the resolved root.
    pub fn from_config(config: &AssetsConfig) -> Result<Self, AssetsError> {
        config.validate()?;

        let root = normalize_root(&config.root, &config.default_root);
        let entry = Path::new(&root).join(ENTRY_DOCUMENT);
        if let Err(source) = std::fs::read(&entry) {
            return Err(AssetsError::AssetRootInvalid {
                path: entry,
                source,
            });
        }

        info!("Serving static assets from: {}", root);

        Ok(Self {
            root,
            asset_prefix: config.asset_prefix.trim_end_matches('/').to_string(),
            root_files: config.root_files.clone(),
        })
    }

    /// The asset root, always ending in a path separator.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// URL prefix of the asset subtree, without a trailing slash.
    pub fn asset_prefix(&self) -> &str {
        &self.asset_prefix
    }

    /// Files served at `/<name>` directly from the root.
    pub fn root_files(&self) -> &[String] {
        &self.root_files
    }

    /// Path of the document served for unmatched routes.
    pub fn entry_document(&self) -> PathBuf {
        Path::new(&self.root).join(ENTRY_DOCUMENT)
    }

    /// Add the static routes and the entry-document fallback to `router`.
    ///
    /// Registers a prefix route for the asset subtree, one exact route per
    /// root file, and the router's fallback. axum always prefers a matching
    /// route over the fallback, so routes added to the returned router later
    /// still take precedence.
    ///
    /// Call this once per router: axum panics on overlapping routes.
    pub fn register_routes<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let root = Path::new(&self.root);

        // Nested services see the path with the prefix stripped, so root the
        // directory service at the matching subdirectory.
        let asset_dir = root.join(self.asset_prefix.trim_start_matches('/'));
        let mut router = router.nest_service(&self.asset_prefix, ServeDir::new(asset_dir));

        for file in &self.root_files {
            router = router.route_service(&format!("/{file}"), ServeFile::new(root.join(file)));
        }

        let entry = self.entry_document();
        router.fallback(move |request: Request| serve_entry_document(entry.clone(), request))
    }
}

/// Serve the entry document for a request no route matched.
///
/// The conditional headers are dropped first: a browser holding an old
/// entry document must not get a 304, or it keeps loading bundles that may
/// have been replaced on disk. Any method gets the document; only HEAD
/// keeps its meaning.
async fn serve_entry_document(entry: PathBuf, request: Request) -> Response {
    debug!(
        method = %request.method(),
        path = %request.uri().path(),
        "serving entry document for unmatched route"
    );

    let request = entry_document_request(request);
    match ServeFile::new(entry).oneshot(request).await {
        Ok(response) => response.map(Body::new).into_response(),
        Err(never) => match never {},
    }
}

/// Rebuild the request as a plain GET (or HEAD) without the headers that can
/// produce "304 Not Modified".
fn entry_document_request(request: Request) -> Request {
    let (mut parts, body) = request.into_parts();
    if parts.method != Method::HEAD {
        parts.method = Method::GET;
    }
    parts.headers.remove(header::IF_MODIFIED_SINCE);
    parts.headers.remove(header::IF_NONE_MATCH);
    Request::from_parts(parts, body)
}

fn normalize_root(requested: &str, default_root: &str) -> String {
    let mut root = if requested.is_empty() {
        default_root.to_string()
    } else {
        requested.to_string()
    };
    if !root.ends_with(std::path::is_separator) {
        root.push(MAIN_SEPARATOR);
    }
    root
}
