//! Repository configuration types
//!
//! Selects where published campaigns are stored and where the attribute and
//! coupon catalogs come from.

use perk_core::BuiltinCatalog;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    CampaignStore, FileSystemCampaignStore, MemoryCampaignStore, RepositoryResult,
};

/// Default directory for file-backed campaigns
pub const DEFAULT_CAMPAIGN_DIR: &str = "campaigns";

/// Campaign storage backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreSource {
    /// Campaigns live only for the lifetime of the process
    Memory,
    /// One JSON file per campaign under `path`
    FileSystem {
        #[serde(default = "default_campaign_dir")]
        path: PathBuf,
    },
}

impl Default for StoreSource {
    fn default() -> Self {
        Self::Memory
    }
}

fn default_campaign_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CAMPAIGN_DIR)
}

/// Where the attribute catalog is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeCatalogSource {
    /// One of the catalogs shipped with `perk-core`
    Builtin { catalog: BuiltinCatalog },
    /// A YAML catalog file
    File { path: PathBuf },
}

impl Default for AttributeCatalogSource {
    fn default() -> Self {
        Self::Builtin {
            catalog: BuiltinCatalog::Commerce,
        }
    }
}

/// Repository configuration
///
/// # Examples
///
/// ```rust
/// use perk_repository::RepositoryConfig;
///
/// // Everything in memory, commerce attributes, no coupons
/// let config = RepositoryConfig::memory();
///
/// // Campaigns persisted as JSON files
/// let config = RepositoryConfig::file_system("campaigns")
///     .with_coupon_catalog("config/coupons.yaml");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Campaign storage backend
    #[serde(default)]
    pub store: StoreSource,

    /// Attribute catalog source
    #[serde(default)]
    pub attribute_catalog: AttributeCatalogSource,

    /// Optional YAML coupon catalog; no coupons when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_catalog: Option<PathBuf>,
}

impl RepositoryConfig {
    /// In-memory store with the default builtin catalog
    pub fn memory() -> Self {
        Self::default()
    }

    /// File-backed store rooted at `path`
    pub fn file_system(path: impl Into<PathBuf>) -> Self {
        Self {
            store: StoreSource::FileSystem { path: path.into() },
            ..Self::default()
        }
    }

    /// Use a builtin attribute catalog
    pub fn with_builtin_catalog(mut self, catalog: BuiltinCatalog) -> Self {
        self.attribute_catalog = AttributeCatalogSource::Builtin { catalog };
        self
    }

    /// Load attributes from a YAML file
    pub fn with_attribute_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.attribute_catalog = AttributeCatalogSource::File { path: path.into() };
        self
    }

    /// Load coupons from a YAML file
    pub fn with_coupon_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.coupon_catalog = Some(path.into());
        self
    }

    /// Build the configured campaign store
    pub async fn open_store(&self) -> RepositoryResult<Arc<dyn CampaignStore>> {
        match &self.store {
            StoreSource::Memory => Ok(Arc::new(MemoryCampaignStore::new())),
            StoreSource::FileSystem { path } => {
                Ok(Arc::new(FileSystemCampaignStore::open(path).await?))
            }
        }
    }
}
