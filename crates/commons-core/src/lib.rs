//! Commons domain layer.
//!
//! Community owners author an input schema with [`field::FieldDefinitionStore`];
//! contributors answer it through [`composer::ResponseComposer`], and the
//! answers are listed by [`response::ResponseCollection`].

pub mod community;
pub mod composer;
pub mod config;
pub mod error;
pub mod field;
pub mod id;
pub mod response;

// Re-export common error type
pub use error::{CommonsError, ValidationError};
