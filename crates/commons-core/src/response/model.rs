//! Response domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::FieldType;
use crate::id::ResponseId;

/// One contributor's submitted value, rendered as a display string.
///
/// Immutable once appended to a `ResponseCollection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: ResponseId,
    pub creator_id: String,
    pub field_type: FieldType,
    pub created_at: DateTime<Utc>,
    pub details: String,
}

/// A response about to be appended; missing id and timestamp are assigned by
/// the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResponse {
    pub id: Option<ResponseId>,
    pub creator_id: String,
    pub field_type: FieldType,
    pub created_at: Option<DateTime<Utc>>,
    pub details: String,
}

impl NewResponse {
    pub fn new(
        creator_id: impl Into<String>,
        field_type: FieldType,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            creator_id: creator_id.into(),
            field_type,
            created_at: None,
            details: details.into(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_id(mut self, id: ResponseId) -> Self {
        self.id = Some(id);
        self
    }
}
