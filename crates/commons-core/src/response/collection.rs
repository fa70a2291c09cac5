//! The response store behind a community's response table.

use chrono::Utc;
use tracing::debug;

use super::model::{NewResponse, Response};
use super::view::{FieldFilter, SortColumn, SortFilterState};
use crate::id::{ResponseId, SharedIdGenerator, default_id_generator};

/// Submitted responses, most recent first, plus the table's view state and
/// the response opened in the detail view.
pub struct ResponseCollection {
    responses: Vec<Response>,
    state: SortFilterState,
    selected: Option<ResponseId>,
    ids: SharedIdGenerator,
}

impl Default for ResponseCollection {
    fn default() -> Self {
        Self::new(default_id_generator())
    }
}

impl std::fmt::Debug for ResponseCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCollection")
            .field("responses", &self.responses)
            .field("state", &self.state)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl ResponseCollection {
    pub fn new(ids: SharedIdGenerator) -> Self {
        Self {
            responses: Vec::new(),
            state: SortFilterState::default(),
            selected: None,
            ids,
        }
    }

    /// Creates a collection holding `responses` in the given order.
    pub fn with_responses(ids: SharedIdGenerator, responses: Vec<Response>) -> Self {
        Self {
            responses,
            ..Self::new(ids)
        }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Responses in storage order (most recently appended first).
    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.responses.iter()
    }

    /// Inserts a response at the head, assigning an id and `created_at` when
    /// absent. No deduplication.
    pub fn append(&mut self, response: NewResponse) -> ResponseId {
        let id = response
            .id
            .unwrap_or_else(|| ResponseId::new(self.ids.next_id()));
        let response = Response {
            id: id.clone(),
            creator_id: response.creator_id,
            field_type: response.field_type,
            created_at: response.created_at.unwrap_or_else(Utc::now),
            details: response.details,
        };
        debug!("Appending response '{}' ({})", id, response.field_type);
        self.responses.insert(0, response);
        id
    }

    /// Filters, then stably sorts, the responses for `state`.
    pub fn project(&self, state: &SortFilterState) -> Vec<&Response> {
        let mut rows: Vec<&Response> = self
            .responses
            .iter()
            .filter(|r| state.filter.matches(r))
            .collect();
        rows.sort_by(|a, b| state.compare(a, b));
        rows
    }

    /// Projection with the collection's own view state.
    pub fn rows(&self) -> Vec<&Response> {
        self.project(&self.state)
    }

    pub fn state(&self) -> &SortFilterState {
        &self.state
    }

    pub fn set_state(&mut self, state: SortFilterState) {
        self.state = state;
    }

    pub fn set_filter(&mut self, filter: FieldFilter) {
        self.state.filter = filter;
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.state.toggle_sort(column);
    }

    /// Looks up the full record of a response.
    pub fn get(&self, id: &ResponseId) -> Option<&Response> {
        self.responses.iter().find(|r| &r.id == id)
    }

    // ============================================================================
    // Detail view
    // ============================================================================

    pub fn select(&mut self, id: ResponseId) {
        self.selected = Some(id);
    }

    /// The selected response, or `None` once it no longer exists.
    pub fn selected(&self) -> Option<&Response> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
