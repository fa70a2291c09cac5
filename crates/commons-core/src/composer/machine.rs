//! Composer state machine.
//!
//! `Closed → TypeSelected → (FormOpen ⇄ ErrorShown) → Closed`

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::capture::Capture;
use crate::error::ValidationError;
use crate::field::{FieldDefinition, FieldType};
use crate::id::{FieldId, ResponseId};
use crate::response::{NewResponse, ResponseCollection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComposerPhase {
    #[default]
    Closed,
    TypeSelected,
    FormOpen,
    ErrorShown,
}

/// The response input form of one community view.
#[derive(Debug, Clone, Default)]
pub struct ResponseComposer {
    phase: ComposerPhase,
    field_id: Option<FieldId>,
    capture: Option<Capture>,
    error: Option<ValidationError>,
}

impl ResponseComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ComposerPhase {
        self.phase
    }

    pub fn capture(&self) -> Option<&Capture> {
        self.capture.as_ref()
    }

    /// The definition the form captures for, when selected by definition.
    pub fn field_id(&self) -> Option<&FieldId> {
        self.field_id.as_ref()
    }

    pub fn field_type(&self) -> Option<FieldType> {
        self.capture.as_ref().map(Capture::field_type)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// The inline message shown while in `ErrorShown`.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self.phase,
            ComposerPhase::FormOpen | ComposerPhase::ErrorShown
        )
    }

    // ============================================================================
    // Transitions
    // ============================================================================

    /// Selects a field to respond to. Always discards the in-progress draft.
    pub fn select_field(&mut self, definition: &FieldDefinition) {
        self.select(Some(definition.id.clone()), Capture::for_definition(definition));
    }

    /// Selects a bare field type with its option list.
    pub fn select_type(&mut self, field_type: FieldType, options: &[String]) {
        self.select(None, Capture::new(field_type, options));
    }

    pub fn open_form(&mut self) {
        if self.phase == ComposerPhase::TypeSelected {
            self.phase = ComposerPhase::FormOpen;
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    // ============================================================================
    // Capture input
    // ============================================================================

    pub fn set_text(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        self.edit(|capture| match capture {
            Capture::FreeText { text } => {
                *text = value;
                true
            }
            _ => false,
        })
    }

    /// Picks option `index` of a single-choice field.
    pub fn choose(&mut self, index: usize) -> bool {
        self.edit(|capture| match capture {
            Capture::SingleChoice {
                options, selected, ..
            } if index < options.len() => {
                *selected = Some(index);
                true
            }
            _ => false,
        })
    }

    pub fn set_explanation(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        self.edit(|capture| match capture {
            Capture::SingleChoice { explanation, .. } => {
                *explanation = value;
                true
            }
            _ => false,
        })
    }

    /// Checks or unchecks option `index` of a multi-choice field.
    pub fn toggle(&mut self, index: usize) -> bool {
        self.edit(|capture| match capture {
            Capture::MultiChoice { checked, .. } => match checked.get_mut(index) {
                Some(flag) => {
                    *flag = !*flag;
                    true
                }
                None => false,
            },
            _ => false,
        })
    }

    // ============================================================================
    // Submission
    // ============================================================================

    /// Composes the response and appends it to `responses`.
    ///
    /// On success the composer returns to `Closed`. On failure nothing is
    /// appended, the form stays open and the error is kept for display.
    /// Submitting a form that is not open is refused without a phase change.
    pub fn submit(
        &mut self,
        creator_id: &str,
        responses: &mut ResponseCollection,
    ) -> Result<ResponseId, ValidationError> {
        let Some(capture) = self.capture.as_ref().filter(|_| self.phase != ComposerPhase::Closed)
        else {
            return Err(ValidationError::MissingFieldType);
        };
        if !self.is_open() {
            return Err(ValidationError::FormNotOpen);
        }

        match capture.compose() {
            Ok(details) => {
                let id = responses.append(NewResponse::new(
                    creator_id,
                    capture.field_type(),
                    details,
                ));
                self.close();
                Ok(id)
            }
            Err(err) => {
                debug!("Response rejected: {}", err);
                self.phase = ComposerPhase::ErrorShown;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn select(&mut self, field_id: Option<FieldId>, capture: Capture) {
        self.phase = ComposerPhase::TypeSelected;
        self.field_id = field_id;
        self.capture = Some(capture);
        self.error = None;
    }

    /// Applies an input change while the form is open; any shown error is
    /// dismissed.
    fn edit(&mut self, apply: impl FnOnce(&mut Capture) -> bool) -> bool {
        if !self.is_open() {
            return false;
        }
        let Some(capture) = self.capture.as_mut() else {
            return false;
        };
        let applied = apply(capture);
        if applied {
            self.phase = ComposerPhase::FormOpen;
            self.error = None;
        }
        applied
    }
}
