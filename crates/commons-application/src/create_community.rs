//! The "create community" use case.

use std::sync::Arc;

use commons_core::community::{Community, CommunityDraft, CommunityRepository};
use commons_core::error::Result;
use commons_core::id::CommunityId;
use tracing::debug;

/// Hands a finished [`CommunityDraft`] to the persistence collaborator.
pub struct CreateCommunityUseCase {
    repository: Arc<dyn CommunityRepository>,
}

impl CreateCommunityUseCase {
    pub fn new(repository: Arc<dyn CommunityRepository>) -> Self {
        Self { repository }
    }

    /// Validates `draft` and persists it.
    ///
    /// An incomplete draft is rejected with `CommonsError::Validation` before
    /// the repository is touched.
    pub async fn execute(&self, draft: &CommunityDraft) -> Result<CommunityId> {
        let community = draft.to_new_community().inspect_err(|e| {
            debug!("Community not created: {}", e);
        })?;
        self.repository.create_community(&community).await
    }

    pub async fn find(&self, id: &CommunityId) -> Result<Option<Community>> {
        self.repository.find_by_id(id).await
    }

    pub async fn list_communities(&self) -> Result<Vec<Community>> {
        self.repository.list_all().await
    }
}
