//! Field definition domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::ValidationError;
use crate::id::FieldId;

/// Kind of value a field captures.
///
/// The serialized and displayed form is the label shown in the input type
/// selector (`"free text"`, `"dropdown list"`, `"multiple select"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum FieldType {
    /// A single line or paragraph of text.
    #[serde(rename = "free text")]
    #[strum(serialize = "free text")]
    FreeText,
    /// Exactly one value picked from the field's options.
    #[serde(rename = "dropdown list")]
    #[strum(serialize = "dropdown list")]
    SingleChoice,
    /// Any non-empty subset of the field's options.
    #[serde(rename = "multiple select")]
    #[strum(serialize = "multiple select")]
    MultiChoice,
}

impl FieldType {
    /// Returns true for the types that carry an option list.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultiChoice)
    }

    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// A named, typed slot in a community's input schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub name: String,
    /// Always empty for `FreeText`.
    #[serde(default)]
    pub options: Vec<String>,
}

impl FieldDefinition {
    pub fn free_text(id: FieldId, name: impl Into<String>) -> Self {
        Self {
            id,
            field_type: FieldType::FreeText,
            name: name.into(),
            options: Vec::new(),
        }
    }

    pub fn choice(
        id: FieldId,
        field_type: FieldType,
        name: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            id,
            field_type,
            name: name.into(),
            options,
        }
    }

    /// Checks the committed-definition invariants.
    pub fn is_valid(&self) -> bool {
        if self.name.trim().is_empty() {
            return false;
        }
        if self.field_type.is_choice() {
            !self.options.is_empty()
        } else {
            self.options.is_empty()
        }
    }
}

/// The definition currently being authored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionDraft {
    /// `None` until an input type has been selected.
    pub field_type: Option<FieldType>,
    pub name: String,
    pub options: Vec<String>,
}

impl DefinitionDraft {
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type: Some(field_type),
            ..Self::default()
        }
    }

    pub(crate) fn from_definition(definition: &FieldDefinition) -> Self {
        Self {
            field_type: Some(definition.field_type),
            name: definition.name.clone(),
            options: definition.options.clone(),
        }
    }

    /// Whether the draft shows the option list editor.
    pub fn accepts_options(&self) -> bool {
        self.field_type.is_some_and(FieldType::is_choice)
    }

    /// Validates the draft for a commit under `name`.
    pub fn validate(&self, name: &str) -> Result<FieldType, ValidationError> {
        let field_type = self.field_type.ok_or(ValidationError::MissingFieldType)?;
        if name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        if field_type.is_choice() && self.options.is_empty() {
            return Err(ValidationError::NoOptions(field_type.label()));
        }
        Ok(field_type)
    }

    /// Builds the committed form. FreeText definitions never keep options.
    pub(crate) fn to_definition(&self, id: FieldId, field_type: FieldType, name: &str) -> FieldDefinition {
        let options = if field_type.is_choice() {
            self.options.clone()
        } else {
            Vec::new()
        };
        FieldDefinition {
            id,
            field_type,
            name: name.trim().to_string(),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_field_type_labels() {
        assert_eq!(FieldType::FreeText.to_string(), "free text");
        assert_eq!(FieldType::SingleChoice.label(), "dropdown list");
        assert_eq!(
            FieldType::from_str("multiple select").unwrap(),
            FieldType::MultiChoice
        );
        assert_eq!(FieldType::iter().count(), 3);
    }

    #[test]
    fn test_field_type_serde_uses_labels() {
        let json = serde_json::to_string(&FieldType::SingleChoice).unwrap();
        assert_eq!(json, "\"dropdown list\"");
        let back: FieldType = serde_json::from_str("\"free text\"").unwrap();
        assert_eq!(back, FieldType::FreeText);
    }

    #[test]
    fn test_draft_validation_order() {
        let draft = DefinitionDraft::default();
        assert_eq!(draft.validate("Name"), Err(ValidationError::MissingFieldType));

        let draft = DefinitionDraft::new(FieldType::MultiChoice);
        assert_eq!(draft.validate("   "), Err(ValidationError::BlankName));
        assert_eq!(
            draft.validate("Skills"),
            Err(ValidationError::NoOptions("multiple select"))
        );

        let draft = DefinitionDraft::new(FieldType::FreeText);
        assert_eq!(draft.validate("Message"), Ok(FieldType::FreeText));
    }

    #[test]
    fn test_free_text_definition_drops_options() {
        let draft = DefinitionDraft {
            field_type: Some(FieldType::FreeText),
            name: String::new(),
            options: vec!["leftover".to_string()],
        };
        let def = draft.to_definition(FieldId::new("f1"), FieldType::FreeText, " Message ");
        assert!(def.options.is_empty());
        assert_eq!(def.name, "Message");
        assert!(def.is_valid());
    }
}
