//! Application layer for Commons.
//!
//! Wires the domain types to storage and configuration: the authoring flow
//! ends in [`CreateCommunityUseCase`], the contribution flow runs inside a
//! [`CommunityView`], and [`CommonsApp`] builds both from configuration.

pub mod app;
pub mod community_view;
pub mod create_community;
pub mod logging;

pub use app::CommonsApp;
pub use community_view::CommunityView;
pub use create_community::CreateCommunityUseCase;
