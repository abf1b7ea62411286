//! Static asset serving for single-page web UIs.
//!
//! Serves a directory of built UI assets through an axum router. Paths under
//! the asset prefix and a few well-known root files are served from disk;
//! every other path gets the entry document so client-side routes resolve.

pub mod config;
pub mod error;
pub mod server;

pub use config::{ASSET_PREFIX, AssetsConfig, DEFAULT_ASSETS_ROOT, ENTRY_DOCUMENT, STATIC_ROOT_FILES};
pub use error::AssetsError;
pub use server::StaticAssetServer;
