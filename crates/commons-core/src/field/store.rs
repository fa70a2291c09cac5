//! The schema builder.
//!
//! `FieldDefinitionStore` owns the committed definitions of one community
//! schema, the draft being authored, and the two edit-locks: the definition
//! currently loaded into the draft, and the single option item under edit.

use std::cmp::Ordering;

use tracing::debug;

use super::model::{DefinitionDraft, FieldDefinition, FieldType};
use crate::error::ValidationError;
use crate::id::{FieldId, SharedIdGenerator, default_id_generator};

/// Which option list an option edit-lock points into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionOwner {
    /// The options of the definition being authored.
    Draft,
    /// The options of an already committed definition.
    Definition(FieldId),
}

/// The option item under edit and its in-progress value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEdit {
    pub owner: OptionOwner,
    pub index: usize,
    pub value: String,
}

pub struct FieldDefinitionStore {
    definitions: Vec<FieldDefinition>,
    draft: DefinitionDraft,
    editing_definition: Option<FieldId>,
    option_edit: Option<OptionEdit>,
    ids: SharedIdGenerator,
}

impl Default for FieldDefinitionStore {
    fn default() -> Self {
        Self::new(default_id_generator())
    }
}

impl std::fmt::Debug for FieldDefinitionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDefinitionStore")
            .field("definitions", &self.definitions)
            .field("draft", &self.draft)
            .field("editing_definition", &self.editing_definition)
            .field("option_edit", &self.option_edit)
            .finish_non_exhaustive()
    }
}

impl FieldDefinitionStore {
    pub fn new(ids: SharedIdGenerator) -> Self {
        Self {
            definitions: Vec::new(),
            draft: DefinitionDraft::default(),
            editing_definition: None,
            option_edit: None,
            ids,
        }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    /// Committed definitions in authoring order.
    pub fn definitions(&self) -> &[FieldDefinition] {
        &self.definitions
    }

    pub fn get(&self, id: &FieldId) -> Option<&FieldDefinition> {
        self.definitions.iter().find(|d| &d.id == id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn draft(&self) -> &DefinitionDraft {
        &self.draft
    }

    /// The committed definition currently loaded into the draft, if any.
    pub fn editing_definition(&self) -> Option<&FieldId> {
        self.editing_definition.as_ref()
    }

    pub fn option_edit(&self) -> Option<&OptionEdit> {
        self.option_edit.as_ref()
    }

    // ============================================================================
    // Draft lifecycle
    // ============================================================================

    /// Starts a fresh definition of `field_type`, discarding the current draft.
    ///
    /// Any "under edit" marker is dropped as well, so the next commit appends.
    pub fn begin_definition(&mut self, field_type: FieldType) {
        self.reset_draft();
        self.editing_definition = None;
        self.draft = DefinitionDraft::new(field_type);
    }

    /// Changes the draft's type while keeping its name and options.
    ///
    /// This is how a definition under edit is switched to another type.
    pub fn set_field_type(&mut self, field_type: FieldType) {
        self.draft.field_type = Some(field_type);
        if !field_type.is_choice() {
            self.clear_option_edit_for(&OptionOwner::Draft);
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn validate_commit(&self, name: &str) -> Result<(), ValidationError> {
        self.draft.validate(name).map(|_| ())
    }

    pub fn can_commit(&self, name: &str) -> bool {
        self.validate_commit(name).is_ok()
    }

    /// Commits the draft under `name`.
    ///
    /// Replaces the definition under edit in place (same id, same position) or
    /// appends a new one. Returns `None` and leaves every committed definition
    /// untouched when the draft is not committable.
    pub fn commit_definition(&mut self, name: &str) -> Option<FieldId> {
        let field_type = match self.draft.validate(name) {
            Ok(field_type) => field_type,
            Err(err) => {
                debug!("Commit rejected: {}", err);
                return None;
            }
        };

        let target = self
            .editing_definition
            .as_ref()
            .and_then(|id| self.definitions.iter().position(|d| &d.id == id));

        let id = match target {
            Some(position) => {
                let id = self.definitions[position].id.clone();
                self.definitions[position] = self.draft.to_definition(id.clone(), field_type, name);
                id
            }
            None => {
                let id = FieldId::new(self.ids.next_id());
                self.definitions
                    .push(self.draft.to_definition(id.clone(), field_type, name));
                id
            }
        };

        self.reset_draft();
        self.editing_definition = None;
        Some(id)
    }

    /// Loads a committed definition into the draft and marks it under edit.
    pub fn edit_definition(&mut self, id: &FieldId) {
        let Some(definition) = self.get(id) else {
            debug!("Ignoring edit of unknown definition '{}'", id);
            return;
        };
        let draft = DefinitionDraft::from_definition(definition);
        self.clear_option_edit_for(&OptionOwner::Draft);
        self.clear_option_edit_for(&OptionOwner::Definition(id.clone()));
        self.draft = draft;
        self.editing_definition = Some(id.clone());
    }

    pub fn cancel_edit_definition(&mut self) {
        self.reset_draft();
        self.editing_definition = None;
    }

    pub fn delete_definition(&mut self, id: &FieldId) {
        let Some(position) = self.definitions.iter().position(|d| &d.id == id) else {
            debug!("Ignoring delete of unknown definition '{}'", id);
            return;
        };
        self.definitions.remove(position);
        self.clear_option_edit_for(&OptionOwner::Definition(id.clone()));
        if self.editing_definition.as_ref() == Some(id) {
            self.reset_draft();
            self.editing_definition = None;
        }
    }

    // ============================================================================
    // Draft options
    // ============================================================================

    /// Adds `value` to the draft's options, or stores it into the draft option
    /// under edit and releases the lock. Blank values are ignored.
    pub fn add_option(&mut self, value: &str) -> bool {
        if !self.draft.accepts_options() {
            debug!("Ignoring option for a draft without an option list");
            return false;
        }
        let value = value.trim();
        if value.is_empty() {
            return false;
        }

        match self.option_edit.take() {
            Some(edit) if edit.owner == OptionOwner::Draft => {
                if let Some(slot) = self.draft.options.get_mut(edit.index) {
                    *slot = value.to_string();
                }
            }
            other => {
                self.option_edit = other;
                self.draft.options.push(value.to_string());
            }
        }
        true
    }

    /// Locks the draft option at `index` for editing.
    pub fn edit_option(&mut self, index: usize) {
        let Some(value) = self.draft.options.get(index) else {
            debug!("Ignoring edit of draft option {} (out of range)", index);
            return;
        };
        self.option_edit = Some(OptionEdit {
            owner: OptionOwner::Draft,
            index,
            value: value.clone(),
        });
    }

    pub fn delete_option(&mut self, index: usize) {
        if index >= self.draft.options.len() {
            debug!("Ignoring delete of draft option {} (out of range)", index);
            return;
        }
        self.draft.options.remove(index);
        self.reconcile_option_edit(&OptionOwner::Draft, index);
    }

    // ============================================================================
    // Committed definition options
    // ============================================================================

    /// Locks option `index` of the committed definition `id` for editing.
    ///
    /// Refused while `id` is loaded into the draft; its options are edited
    /// through the draft until it is committed again.
    pub fn edit_committed_option(&mut self, id: &FieldId, index: usize) {
        if self.is_under_edit(id) {
            debug!("Ignoring option edit on '{}' while it is loaded into the draft", id);
            return;
        }
        let Some(value) = self.get(id).and_then(|d| d.options.get(index)) else {
            debug!("Ignoring edit of option {} on '{}'", index, id);
            return;
        };
        self.option_edit = Some(OptionEdit {
            owner: OptionOwner::Definition(id.clone()),
            index,
            value: value.clone(),
        });
    }

    /// Removes option `index` from the committed definition `id`.
    ///
    /// The last option of a committed choice definition cannot be removed, and
    /// a definition loaded into the draft is left alone.
    pub fn delete_committed_option(&mut self, id: &FieldId, index: usize) {
        if self.is_under_edit(id) {
            debug!("Ignoring option delete on '{}' while it is loaded into the draft", id);
            return;
        }
        let Some(definition) = self.definitions.iter_mut().find(|d| &d.id == id) else {
            debug!("Ignoring option delete on unknown definition '{}'", id);
            return;
        };
        if index >= definition.options.len() {
            debug!("Ignoring delete of option {} on '{}' (out of range)", index, id);
            return;
        }
        if definition.options.len() == 1 {
            debug!("Refusing to remove the last option of '{}'", id);
            return;
        }
        definition.options.remove(index);
        self.reconcile_option_edit(&OptionOwner::Definition(id.clone()), index);
    }

    // ============================================================================
    // Option edit-lock
    // ============================================================================

    /// Replaces the in-progress value of the option under edit.
    pub fn set_option_input(&mut self, value: impl Into<String>) {
        if let Some(edit) = self.option_edit.as_mut() {
            edit.value = value.into();
        }
    }

    /// Writes the in-progress value into the locked option and releases the
    /// lock. A blank value keeps the lock and changes nothing.
    pub fn save_option(&mut self) -> bool {
        let Some(edit) = self.option_edit.as_ref() else {
            return false;
        };
        let value = edit.value.trim().to_string();
        if value.is_empty() {
            return false;
        }

        let index = edit.index;
        let slot = match &edit.owner {
            OptionOwner::Draft => self.draft.options.get_mut(index),
            OptionOwner::Definition(id) => {
                let id = id.clone();
                self.definitions
                    .iter_mut()
                    .find(|d| d.id == id)
                    .and_then(|d| d.options.get_mut(index))
            }
        };
        let saved = match slot {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        };
        self.option_edit = None;
        saved
    }

    pub fn cancel_edit_option(&mut self) {
        self.option_edit = None;
    }

    // ============================================================================
    // Internal helpers
    // ============================================================================

    fn is_under_edit(&self, id: &FieldId) -> bool {
        self.editing_definition.as_ref() == Some(id)
    }

    fn reset_draft(&mut self) {
        self.clear_option_edit_for(&OptionOwner::Draft);
        self.draft = DefinitionDraft::default();
    }

    fn clear_option_edit_for(&mut self, owner: &OptionOwner) {
        if self.option_edit.as_ref().is_some_and(|e| &e.owner == owner) {
            self.option_edit = None;
        }
    }

    /// Keeps the option lock on the same item after `removed` left `owner`'s list.
    fn reconcile_option_edit(&mut self, owner: &OptionOwner, removed: usize) {
        let ordering = match &self.option_edit {
            Some(edit) if &edit.owner == owner => edit.index.cmp(&removed),
            _ => return,
        };
        match ordering {
            Ordering::Equal => self.option_edit = None,
            Ordering::Greater => {
                if let Some(edit) = self.option_edit.as_mut() {
                    edit.index -= 1;
                }
            }
            Ordering::Less => {}
        }
    }
}
