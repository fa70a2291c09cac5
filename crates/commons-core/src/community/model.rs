//! Community domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::FieldDefinition;
use crate::id::CommunityId;
use crate::response::Response;

const FALLBACK_TITLE: &str = "Community";
const FALLBACK_DESCRIPTION: &str = "No description provided.";

/// What the authoring page hands to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCommunity {
    pub title: String,
    pub description: String,
    pub fields: Vec<FieldDefinition>,
}

/// A community as stored by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: CommunityId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    pub created_at: DateTime<Utc>,
}

impl Community {
    pub fn from_new(id: CommunityId, community: &NewCommunity, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: community.title.clone(),
            description: community.description.clone(),
            fields: community.fields.clone(),
            created_at,
        }
    }

    /// The summary a navigation collaborator would pass to a community view.
    pub fn to_summary(&self) -> CommunitySummary {
        CommunitySummary {
            id: self.id.clone(),
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            inputs: None,
            fields: Some(self.fields.clone()),
        }
    }
}

/// The community object a view is opened with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunitySummary {
    pub id: CommunityId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Responses already submitted, most recent first.
    #[serde(default)]
    pub inputs: Option<Vec<Response>>,
    #[serde(default)]
    pub fields: Option<Vec<FieldDefinition>>,
}

impl CommunitySummary {
    pub fn new(id: CommunityId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            description: Some(description.into()),
            inputs: None,
            fields: None,
        }
    }

    pub fn display_title(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or(FALLBACK_TITLE)
    }

    pub fn display_description(&self) -> &str {
        non_blank(self.description.as_deref()).unwrap_or(FALLBACK_DESCRIPTION)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
