//! Editor configuration

use perk_core::CampaignKind;
use perk_repository::RepositoryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, SdkError};

/// Where projected reach comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReachSource {
    /// The same reach for every audience
    Fixed { reach: u64 },
    /// Count matches in a JSON file of member profiles
    MemberPool { path: PathBuf },
}

/// Editor configuration
///
/// Every field has a default, so an empty configuration is valid: an
/// in-memory store, the commerce attribute catalog, no coupons and no
/// reach estimator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Store and catalog sources
    pub repository: RepositoryConfig,

    /// Reach estimator; reach stays unavailable when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reach: Option<ReachSource>,

    /// Kind of the draft a fresh session starts with
    pub default_kind: CampaignKind,
}

impl EditorConfig {
    /// Load configuration from `.env`, `config/editor.*` and `PERK_*`
    /// environment variables
    ///
    /// Nested keys use a double underscore, e.g.
    /// `PERK_REPOSITORY__STORE__TYPE=file_system`.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/editor").required(false))
            .add_source(config::Environment::with_prefix("PERK").separator("__"))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| SdkError::ConfigError(format!("Failed to deserialize config: {}", e))),
            Err(_) => {
                info!("No editor config found, using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a single file; the format follows the extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                SdkError::ConfigError(format!("Failed to load {}: {}", path.display(), e))
            })
    }
}
