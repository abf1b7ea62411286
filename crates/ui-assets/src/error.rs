use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetsError {
    #[error("Cannot read {}, static assets root may be incorrect: {source}", .path.display())]
    AssetRootInvalid {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid assets configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl AssetsError {
    /// Whether this error came from the entry-document readability check.
    pub fn is_asset_root_invalid(&self) -> bool {
        matches!(self, AssetsError::AssetRootInvalid { .. })
    }
}
