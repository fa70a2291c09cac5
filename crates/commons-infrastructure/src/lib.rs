pub mod config_service;
pub mod paths;
pub mod storage;
pub mod toml_community_repository;

pub use crate::config_service::ConfigService;
pub use crate::paths::CommonsPaths;
pub use crate::toml_community_repository::TomlCommunityRepository;
