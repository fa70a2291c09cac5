//! Composition root.

use std::sync::Arc;

use commons_core::CommonsError;
use commons_core::community::{CommunityDraft, CommunityRepository, CommunitySummary};
use commons_core::config::CommonsConfig;
use commons_core::error::Result;
use commons_core::id::{CommunityId, SharedIdGenerator, default_id_generator};
use commons_infrastructure::{ConfigService, TomlCommunityRepository};
use tracing::info;

use crate::community_view::CommunityView;
use crate::create_community::CreateCommunityUseCase;

/// Configuration, id generation and the community use case, wired together.
pub struct CommonsApp {
    config: CommonsConfig,
    ids: SharedIdGenerator,
    communities: CreateCommunityUseCase,
}

impl CommonsApp {
    /// Builds the app from the loaded configuration with TOML storage.
    pub fn from_config_service(service: &ConfigService) -> Result<Self> {
        let config = service.get_config();
        let ids = default_id_generator();
        let repository =
            TomlCommunityRepository::new(config.storage.data_dir.as_deref(), ids.clone())?;
        info!("Community storage at {}", repository.path().display());
        Ok(Self::with_repository(config, Arc::new(repository), ids))
    }

    pub fn with_repository(
        config: CommonsConfig,
        repository: Arc<dyn CommunityRepository>,
        ids: SharedIdGenerator,
    ) -> Self {
        Self {
            config,
            ids,
            communities: CreateCommunityUseCase::new(repository),
        }
    }

    pub fn config(&self) -> &CommonsConfig {
        &self.config
    }

    pub fn communities(&self) -> &CreateCommunityUseCase {
        &self.communities
    }

    /// A blank authoring page using the configured limits.
    pub fn new_draft(&self) -> CommunityDraft {
        CommunityDraft::new(self.config.limits, self.ids.clone())
    }

    pub async fn create_community(&self, draft: &CommunityDraft) -> Result<CommunityId> {
        self.communities.execute(draft).await
    }

    pub fn open_community(&self, summary: CommunitySummary) -> CommunityView {
        CommunityView::open(summary, &self.config.view, self.ids.clone())
    }

    /// Opens a stored community by id.
    pub async fn open_stored(&self, id: &CommunityId) -> Result<CommunityView> {
        let community = self
            .communities
            .find(id)
            .await?
            .ok_or_else(|| CommonsError::not_found("Community", id.as_str()))?;
        Ok(self.open_community(community.to_summary()))
    }
}
