//! Field definition domain: the input schema a community owner authors.
//!
//! # Module Structure
//!
//! - `model`: field types, committed definitions and the authoring draft
//! - `store`: `FieldDefinitionStore`, the schema builder with its edit-locks

mod model;
mod store;

pub use model::{DefinitionDraft, FieldDefinition, FieldType};
pub use store::{FieldDefinitionStore, OptionEdit, OptionOwner};
