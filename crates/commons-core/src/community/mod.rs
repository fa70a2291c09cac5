//! Community domain: the authoring draft, the summary handed over by
//! navigation, the persistence contract and the demonstration dataset.

pub mod demo;
mod draft;
mod model;
mod repository;

pub use draft::CommunityDraft;
pub use model::{Community, CommunitySummary, NewCommunity};
pub use repository::CommunityRepository;
