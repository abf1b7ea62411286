use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::AssetsError;

/// Asset root used when the caller does not request one.
pub const DEFAULT_ASSETS_ROOT: &str = "web/dist/";

/// URL prefix under which the bulk of the built assets is served.
pub const ASSET_PREFIX: &str = "/static";

/// Files served at their own path directly under the site root.
pub const STATIC_ROOT_FILES: &[&str] = &["favicon.ico"];

/// The document served for every client-side route.
pub const ENTRY_DOCUMENT: &str = "index.html";

/// Static asset configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetsConfig {
    /// Requested asset root; empty means "use `default_root`"
    #[serde(default)]
    pub root: String,

    /// Root used when `root` is empty
    #[serde(default = "default_default_root")]
    pub default_root: String,

    /// URL prefix for the asset subtree
    #[serde(default = "default_asset_prefix")]
    pub asset_prefix: String,

    /// Files served at `/<name>` straight from the asset root
    #[serde(default = "default_root_files")]
    pub root_files: Vec<String>,
}

fn default_default_root() -> String {
    DEFAULT_ASSETS_ROOT.to_string()
}

fn default_asset_prefix() -> String {
    ASSET_PREFIX.to_string()
}

fn default_root_files() -> Vec<String> {
    STATIC_ROOT_FILES.iter().copied().map(String::from).collect()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: String::new(),
            default_root: default_default_root(),
            asset_prefix: default_asset_prefix(),
            root_files: default_root_files(),
        }
    }
}

impl AssetsConfig {
    /// Default config with `root` set to the given override.
    pub fn with_root(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, AssetsError> {
        let content = std::fs::read_to_string(path).map_err(|source| AssetsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| AssetsError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check the URL-facing fields. The filesystem side is checked at construction.
    ///
    /// Everything accepted here registers on an axum router without conflicts.
    pub fn validate(&self) -> Result<(), AssetsError> {
        let prefix = self.asset_prefix.trim_end_matches('/');
        if !prefix.starts_with('/') || prefix.starts_with("//") || prefix.len() < 2 {
            return Err(AssetsError::InvalidConfig(format!(
                "asset prefix must be an absolute path with at least one segment, got {:?}",
                self.asset_prefix
            )));
        }
        if prefix[1..].split('/').any(is_route_pattern) {
            return Err(AssetsError::InvalidConfig(format!(
                "asset prefix must not contain route parameters or wildcards, got {:?}",
                self.asset_prefix
            )));
        }

        let prefix_head = prefix[1..].split('/').next().unwrap_or_default();
        let mut seen = HashSet::new();
        for file in &self.root_files {
            if file.is_empty() || file.contains('/') || file == "." || file == ".." {
                return Err(AssetsError::InvalidConfig(format!(
                    "root file must be a plain file name, got {file:?}"
                )));
            }
            if is_route_pattern(file) {
                return Err(AssetsError::InvalidConfig(format!(
                    "root file must not contain route parameters or wildcards, got {file:?}"
                )));
            }
            if file == prefix_head {
                return Err(AssetsError::InvalidConfig(format!(
                    "root file {file:?} collides with asset prefix {:?}",
                    self.asset_prefix
                )));
            }
            if !seen.insert(file.as_str()) {
                return Err(AssetsError::InvalidConfig(format!(
                    "root file {file:?} listed more than once"
                )));
            }
        }

        Ok(())
    }
}

/// Path segments axum would read as a capture or wildcard, or refuse outright.
fn is_route_pattern(segment: &str) -> bool {
    segment.contains(['{', '}', '*']) || segment.starts_with(':')
}
