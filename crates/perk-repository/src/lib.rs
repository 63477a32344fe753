//! Perk Repository
//!
//! Collaborators of the campaign editor that live outside the editing model:
//!
//! - **Campaign stores**: [`MemoryCampaignStore`] and the JSON-file backed
//!   [`FileSystemCampaignStore`], both behind [`CampaignStore`]
//! - **Reach estimators**: [`FixedReach`] and [`MemberPoolEstimator`], behind
//!   [`ReachEstimator`]
//! - **Catalog loading**: attribute and coupon catalogs from YAML files
//!
//! # Example
//!
//! ```rust,no_run
//! use perk_repository::{Catalogs, RepositoryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RepositoryConfig::file_system("campaigns")
//!         .with_coupon_catalog("config/coupons.yaml");
//!
//!     let catalogs = Catalogs::load(&config).await?;
//!     let store = config.open_store().await?;
//!
//!     println!("{} coupons, {} campaigns", catalogs.coupons.len(), store.list().await?.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod file_system;
pub mod loader;
pub mod memory;
pub mod reach;
pub mod traits;

pub use config::{AttributeCatalogSource, RepositoryConfig, StoreSource, DEFAULT_CAMPAIGN_DIR};
pub use error::{RepositoryError, RepositoryResult};
pub use file_system::FileSystemCampaignStore;
pub use loader::{load_attribute_catalog, load_coupon_catalog, Catalogs};
pub use memory::MemoryCampaignStore;
pub use reach::{FixedReach, MemberPoolEstimator};
pub use traits::{CampaignStore, ReachEstimator};
