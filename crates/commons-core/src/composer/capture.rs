//! Capture drafts, one variant per field type.

use crate::error::ValidationError;
use crate::field::{FieldDefinition, FieldType};

/// Joins a chosen option and its explanation.
pub const SINGLE_CHOICE_SEPARATOR: &str = " — ";

/// Leads the rendered list of checked options.
pub const MULTI_CHOICE_PREFIX: &str = "Skills: ";

/// The in-progress value of the form, shaped by the selected field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    FreeText {
        text: String,
    },
    SingleChoice {
        options: Vec<String>,
        selected: Option<usize>,
        explanation: String,
    },
    MultiChoice {
        options: Vec<String>,
        /// Parallel to `options`.
        checked: Vec<bool>,
    },
}

impl Capture {
    /// An empty capture for a field of `field_type` offering `options`.
    pub fn new(field_type: FieldType, options: &[String]) -> Self {
        match field_type {
            FieldType::FreeText => Self::FreeText {
                text: String::new(),
            },
            FieldType::SingleChoice => Self::SingleChoice {
                options: options.to_vec(),
                selected: None,
                explanation: String::new(),
            },
            FieldType::MultiChoice => Self::MultiChoice {
                options: options.to_vec(),
                checked: vec![false; options.len()],
            },
        }
    }

    pub fn for_definition(definition: &FieldDefinition) -> Self {
        Self::new(definition.field_type, &definition.options)
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Self::FreeText { .. } => FieldType::FreeText,
            Self::SingleChoice { .. } => FieldType::SingleChoice,
            Self::MultiChoice { .. } => FieldType::MultiChoice,
        }
    }

    /// Renders the captured value as a response's `details` string.
    pub fn compose(&self) -> Result<String, ValidationError> {
        match self {
            Self::FreeText { text } => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(ValidationError::BlankText);
                }
                Ok(text.to_string())
            }
            Self::SingleChoice {
                options,
                selected,
                explanation,
            } => {
                let option = selected
                    .and_then(|index| options.get(index))
                    .ok_or(ValidationError::NoOptionSelected)?;
                let explanation = explanation.trim();
                if explanation.is_empty() {
                    Ok(option.clone())
                } else {
                    Ok(format!("{option}{SINGLE_CHOICE_SEPARATOR}{explanation}"))
                }
            }
            Self::MultiChoice { options, checked } => {
                let picked: Vec<&str> = options
                    .iter()
                    .zip(checked)
                    .filter(|(_, checked)| **checked)
                    .map(|(option, _)| option.as_str())
                    .collect();
                if picked.is_empty() {
                    return Err(ValidationError::NoOptionsChecked);
                }
                Ok(format!("{MULTI_CHOICE_PREFIX}{}", picked.join(", ")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_free_text_is_trimmed() {
        let capture = Capture::FreeText {
            text: "  I can help on weekends \n".to_string(),
        };
        assert_eq!(capture.compose().unwrap(), "I can help on weekends");

        let blank = Capture::FreeText {
            text: "   ".to_string(),
        };
        assert_eq!(blank.compose(), Err(ValidationError::BlankText));
    }

    #[test]
    fn test_single_choice_with_and_without_explanation() {
        let mut capture = Capture::new(FieldType::SingleChoice, &options(&["Chair", "Heater"]));
        assert_eq!(capture.compose(), Err(ValidationError::NoOptionSelected));

        if let Capture::SingleChoice {
            selected,
            explanation,
            ..
        } = &mut capture
        {
            *selected = Some(0);
            *explanation = "  ".to_string();
        }
        assert_eq!(capture.compose().unwrap(), "Chair");

        if let Capture::SingleChoice { explanation, .. } = &mut capture {
            *explanation = " I can donate 10 ".to_string();
        }
        assert_eq!(capture.compose().unwrap(), "Chair — I can donate 10");
    }

    #[test]
    fn test_single_choice_stale_index_is_unselected() {
        let capture = Capture::SingleChoice {
            options: options(&["Chair"]),
            selected: Some(4),
            explanation: String::new(),
        };
        assert_eq!(capture.compose(), Err(ValidationError::NoOptionSelected));
    }

    #[test]
    fn test_multi_choice_uses_checklist_order() {
        let capture = Capture::MultiChoice {
            options: options(&["Carpentry", "Masonry", "Plumbing"]),
            checked: vec![true, false, true],
        };
        assert_eq!(capture.compose().unwrap(), "Skills: Carpentry, Plumbing");

        let none = Capture::new(FieldType::MultiChoice, &options(&["Carpentry"]));
        assert_eq!(none.compose(), Err(ValidationError::NoOptionsChecked));
    }

    #[test]
    fn test_field_type_follows_variant() {
        for field_type in [FieldType::FreeText, FieldType::SingleChoice, FieldType::MultiChoice] {
            assert_eq!(Capture::new(field_type, &[]).field_type(), field_type);
        }
    }
}
