//! Catalog loading from YAML files

use perk_core::{AttributeCatalog, CouponCatalog};
use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::config::{AttributeCatalogSource, RepositoryConfig};
use crate::{RepositoryError, RepositoryResult};

/// Parse an attribute catalog from a YAML file
///
/// Catalog invariants are checked while deserializing, so a file with an
/// invalid definition fails here rather than at condition-building time.
pub async fn load_attribute_catalog(path: impl AsRef<Path>) -> RepositoryResult<AttributeCatalog> {
    let path = path.as_ref();
    let content = read_catalog_file(path).await?;
    let catalog: AttributeCatalog = serde_yaml::from_str(&content)?;
    info!(
        "Loaded attribute catalog '{}' ({} attributes) from {}",
        catalog.name(),
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Parse a coupon catalog from a YAML file
pub async fn load_coupon_catalog(path: impl AsRef<Path>) -> RepositoryResult<CouponCatalog> {
    let path = path.as_ref();
    let content = read_catalog_file(path).await?;
    let catalog: CouponCatalog = serde_yaml::from_str(&content)?;
    info!("Loaded {} coupons from {}", catalog.len(), path.display());
    Ok(catalog)
}

async fn read_catalog_file(path: &Path) -> RepositoryResult<String> {
    if !path.exists() {
        return Err(RepositoryError::InvalidPath {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path).await?)
}

/// Both catalogs described by a configuration
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub attributes: AttributeCatalog,
    pub coupons: CouponCatalog,
}

impl Catalogs {
    /// Resolve the configured attribute and coupon sources
    pub async fn load(config: &RepositoryConfig) -> RepositoryResult<Self> {
        let attributes = match &config.attribute_catalog {
            AttributeCatalogSource::Builtin { catalog } => catalog.catalog()?,
            AttributeCatalogSource::File { path } => load_attribute_catalog(path).await?,
        };

        let coupons = match &config.coupon_catalog {
            Some(path) => load_coupon_catalog(path).await?,
            None => CouponCatalog::default(),
        };

        Ok(Self {
            attributes,
            coupons,
        })
    }
}
