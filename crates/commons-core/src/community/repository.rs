//! Community repository trait.

use async_trait::async_trait;

use super::model::{Community, NewCommunity};
use crate::error::Result;
use crate::id::CommunityId;

/// The persistence collaborator communities are created through.
///
/// The core never calls it while editing; only the "create community" use
/// case hands a finished schema over.
#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// Persists a new community and returns the id it was stored under.
    async fn create_community(&self, community: &NewCommunity) -> Result<CommunityId>;

    /// Finds a community by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Community))`: Community found
    /// - `Ok(None)`: Community not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, id: &CommunityId) -> Result<Option<Community>>;

    /// Lists all stored communities in creation order.
    async fn list_all(&self) -> Result<Vec<Community>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::CommunityDraft;
    use crate::config::CommunityLimits;
    use crate::field::FieldType;
    use crate::id::SequentialIdGenerator;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    // In-memory repository for exercising the trait contract
    #[derive(Default)]
    struct MockCommunityRepository {
        communities: Mutex<Vec<Community>>,
    }

    #[async_trait]
    impl CommunityRepository for MockCommunityRepository {
        async fn create_community(&self, community: &NewCommunity) -> Result<CommunityId> {
            let mut communities = self.communities.lock().unwrap();
            let id = CommunityId::new(format!("community-{}", communities.len() + 1));
            communities.push(Community::from_new(id.clone(), community, Utc::now()));
            Ok(id)
        }

        async fn find_by_id(&self, id: &CommunityId) -> Result<Option<Community>> {
            let communities = self.communities.lock().unwrap();
            Ok(communities.iter().find(|c| &c.id == id).cloned())
        }

        async fn list_all(&self) -> Result<Vec<Community>> {
            Ok(self.communities.lock().unwrap().clone())
        }
    }

    fn finished_draft() -> CommunityDraft {
        let mut draft = CommunityDraft::new(
            CommunityLimits::default(),
            Arc::new(SequentialIdGenerator::new("field")),
        );
        draft.set_title("Istanbul Climate Lab");
        draft.set_description("Neighbourhood heat mapping");
        let fields = draft.fields_mut();
        fields.begin_definition(FieldType::SingleChoice);
        fields.add_option("Balcony sensor");
        fields.commit_definition("What can you host?");
        draft
    }

    #[tokio::test]
    async fn test_created_community_round_trips_through_summary() {
        let repository: Arc<dyn CommunityRepository> =
            Arc::new(MockCommunityRepository::default());
        let new_community = finished_draft().to_new_community().unwrap();

        let id = repository.create_community(&new_community).await.unwrap();
        let stored = repository.find_by_id(&id).await.unwrap().unwrap();
        let summary = stored.to_summary();

        assert_eq!(summary.id, id);
        assert_eq!(summary.display_title(), "Istanbul Climate Lab");
        assert_eq!(summary.fields.as_deref(), Some(new_community.fields.as_slice()));
        assert!(summary.inputs.is_none());
    }

    #[tokio::test]
    async fn test_missing_community_is_none() {
        let repository = MockCommunityRepository::default();
        assert!(repository
            .find_by_id(&CommunityId::new("unknown"))
            .await
            .unwrap()
            .is_none());
        assert!(repository.list_all().await.unwrap().is_empty());
    }
}
