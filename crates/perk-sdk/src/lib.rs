//! Perk SDK - campaign editing sessions
//!
//! Ties the data model, the condition builder and the repository
//! collaborators into a single [`CampaignEditor`] per draft.
//!
//! # Example
//!
//! ```rust,no_run
//! use perk_core::{CampaignKind, RewardPatch, RewardType};
//! use perk_sdk::{CampaignEditorBuilder, EditorConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut editor = CampaignEditorBuilder::new()
//!         .with_config(EditorConfig::load()?)
//!         .build()
//!         .await?;
//!
//!     editor.set_kind(CampaignKind::Standard);
//!     editor.draft_mut().name = "Double points weekend".to_string();
//!     let rewards = editor.draft_mut().flat_rewards_mut()?;
//!     let id = rewards.add(RewardType::Multiplier);
//!     rewards.update(&id, RewardPatch::value(2.0))?;
//!
//!     let campaign = editor.publish().await?;
//!     println!("Published {}", campaign.id);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod editor;
pub mod error;

pub use builder::CampaignEditorBuilder;
pub use config::{EditorConfig, ReachSource};
pub use editor::CampaignEditor;
pub use error::{Result, SdkError};

// Re-export the collaborator types most callers need
pub use perk_builder::{Diagnostic, Severity, SimulationReport, ValidationReport};
pub use perk_repository::{
    CampaignStore, FileSystemCampaignStore, FixedReach, MemberPoolEstimator, MemoryCampaignStore,
    ReachEstimator, RepositoryConfig,
};
