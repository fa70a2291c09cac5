//! TOML-based CommunityRepository implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use commons_core::community::{Community, CommunityRepository, NewCommunity};
use commons_core::error::Result;
use commons_core::id::{CommunityId, SharedIdGenerator};
use commons_core::CommonsError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::paths::CommonsPaths;
use crate::storage::AtomicTomlFile;

/// On-disk layout of `communities.toml`: one `[[community]]` table per entry.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CommunityStore {
    #[serde(default, rename = "community")]
    communities: Vec<Community>,
}

/// Stores created communities in a single TOML file.
///
/// Writes go through [`AtomicTomlFile::update`], so concurrent creators never
/// lose each other's entries. File access runs on the blocking pool.
#[derive(Clone)]
pub struct TomlCommunityRepository {
    file: AtomicTomlFile<CommunityStore>,
    ids: SharedIdGenerator,
}

impl TomlCommunityRepository {
    /// Uses the platform data directory, or `data_dir` when configured.
    pub fn new(data_dir: Option<&Path>, ids: SharedIdGenerator) -> Result<Self> {
        let path = CommonsPaths::communities_file(data_dir)?;
        Ok(Self::with_path(path, ids))
    }

    /// Uses a specific file (for testing).
    pub fn with_path(path: PathBuf, ids: SharedIdGenerator) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
            ids,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn load_all(&self) -> Result<Vec<Community>> {
        let file = self.file.clone();
        let store = tokio::task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| CommonsError::internal(format!("Storage task failed: {}", e)))??;
        Ok(store.map(|s| s.communities).unwrap_or_default())
    }
}

impl std::fmt::Debug for TomlCommunityRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TomlCommunityRepository")
            .field("path", &self.file.path())
            .finish()
    }
}

#[async_trait]
impl CommunityRepository for TomlCommunityRepository {
    async fn create_community(&self, community: &NewCommunity) -> Result<CommunityId> {
        let id = CommunityId::new(self.ids.next_id());
        let record = Community::from_new(id.clone(), community, Utc::now());
        let file = self.file.clone();

        tokio::task::spawn_blocking(move || {
            file.update(CommunityStore::default(), |store| {
                store.communities.push(record)
            })
        })
        .await
        .map_err(|e| CommonsError::internal(format!("Storage task failed: {}", e)))??;

        info!(
            community_id = %id,
            fields = community.fields.len(),
            "Created community '{}'",
            community.title
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: &CommunityId) -> Result<Option<Community>> {
        debug!(community_id = %id, "Looking up community");
        Ok(self.load_all().await?.into_iter().find(|c| &c.id == id))
    }

    async fn list_all(&self) -> Result<Vec<Community>> {
        self.load_all().await
    }
}
