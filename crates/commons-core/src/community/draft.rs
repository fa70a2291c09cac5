//! The "create community" page state.

use super::model::NewCommunity;
use crate::config::CommunityLimits;
use crate::error::ValidationError;
use crate::field::FieldDefinitionStore;
use crate::id::SharedIdGenerator;

/// Title, description and input schema of a community being created.
#[derive(Debug)]
pub struct CommunityDraft {
    title: String,
    description: String,
    fields: FieldDefinitionStore,
    limits: CommunityLimits,
}

impl CommunityDraft {
    pub fn new(limits: CommunityLimits, ids: SharedIdGenerator) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            fields: FieldDefinitionStore::new(ids),
            limits,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn limits(&self) -> &CommunityLimits {
        &self.limits
    }

    pub fn fields(&self) -> &FieldDefinitionStore {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldDefinitionStore {
        &mut self.fields
    }

    /// Replaces the title. Values over the limit are ignored.
    pub fn set_title(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.chars().count() > self.limits.max_title_length {
            return false;
        }
        self.title = value;
        true
    }

    /// Replaces the description. Values over the limit are ignored.
    pub fn set_description(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.chars().count() > self.limits.max_description_length {
            return false;
        }
        self.description = value;
        true
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::BlankDescription);
        }
        if self.fields.is_empty() {
            return Err(ValidationError::NoFields);
        }
        Ok(())
    }

    pub fn can_create(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_new_community(&self) -> Result<NewCommunity, ValidationError> {
        self.validate()?;
        Ok(NewCommunity {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            fields: self.fields.definitions().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldType;
    use crate::id::SequentialIdGenerator;
    use std::sync::Arc;

    fn draft() -> CommunityDraft {
        CommunityDraft::new(
            CommunityLimits::default(),
            Arc::new(SequentialIdGenerator::new("field")),
        )
    }

    #[test]
    fn test_title_limit() {
        let mut draft = draft();
        assert!(draft.set_title("a".repeat(200)));
        assert!(!draft.set_title("b".repeat(201)));
        assert_eq!(draft.title(), "a".repeat(200));
    }

    #[test]
    fn test_limit_counts_characters() {
        let mut draft = CommunityDraft::new(
            CommunityLimits {
                max_title_length: 5,
                max_description_length: 3,
            },
            Arc::new(SequentialIdGenerator::default()),
        );
        assert!(draft.set_title("Ağaçö"));
        assert!(!draft.set_description("çöüş"));
        assert_eq!(draft.description(), "");
    }

    #[test]
    fn test_create_requirements() {
        let mut draft = draft();
        assert_eq!(draft.validate(), Err(ValidationError::BlankTitle));
        draft.set_title("Van School Rebuild Collective");
        assert_eq!(draft.validate(), Err(ValidationError::BlankDescription));
        draft.set_description("Chairs, heaters and volunteer carpenters.");
        assert_eq!(draft.validate(), Err(ValidationError::NoFields));
        assert!(!draft.can_create());

        draft.fields_mut().begin_definition(FieldType::FreeText);
        draft.fields_mut().commit_definition("Message");
        assert!(draft.can_create());

        let community = draft.to_new_community().unwrap();
        assert_eq!(community.title, "Van School Rebuild Collective");
        assert_eq!(community.fields.len(), 1);
        assert_eq!(community.fields[0].name, "Message");
    }
}
