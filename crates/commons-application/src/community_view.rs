//! The contribution page of a single community.

use commons_core::community::{CommunitySummary, demo};
use commons_core::composer::ResponseComposer;
use commons_core::config::ViewSettings;
use commons_core::error::ValidationError;
use commons_core::field::FieldDefinition;
use commons_core::id::{CommunityId, FieldId, ResponseId, SharedIdGenerator};
use commons_core::response::{Response, ResponseCollection};
use tracing::debug;

/// A community opened for contribution.
///
/// Owns the response table and the input form; nothing here is shared with
/// other open views.
#[derive(Debug)]
pub struct CommunityView {
    summary: CommunitySummary,
    fields: Vec<FieldDefinition>,
    responses: ResponseCollection,
    composer: ResponseComposer,
}

impl CommunityView {
    /// Opens `summary`.
    ///
    /// A community without responses shows the demonstration responses when
    /// `settings.seed_demo_responses` is set; one without a schema offers the
    /// demonstration field set.
    pub fn open(
        mut summary: CommunitySummary,
        settings: &ViewSettings,
        ids: SharedIdGenerator,
    ) -> Self {
        let inputs = summary.inputs.take().unwrap_or_default();
        let inputs = if inputs.is_empty() && settings.seed_demo_responses {
            debug!(community_id = %summary.id, "Seeding demonstration responses");
            demo::demo_responses()
        } else {
            inputs
        };
        let fields = summary.fields.take().unwrap_or_else(demo::demo_fields);

        Self {
            summary,
            fields,
            responses: ResponseCollection::with_responses(ids, inputs),
            composer: ResponseComposer::new(),
        }
    }

    pub fn id(&self) -> &CommunityId {
        &self.summary.id
    }

    pub fn title(&self) -> &str {
        self.summary.display_title()
    }

    pub fn description(&self) -> &str {
        self.summary.display_description()
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn field(&self, id: &FieldId) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| &f.id == id)
    }

    pub fn responses(&self) -> &ResponseCollection {
        &self.responses
    }

    pub fn responses_mut(&mut self) -> &mut ResponseCollection {
        &mut self.responses
    }

    /// The response table rows under the current filter and sort.
    pub fn rows(&self) -> Vec<&Response> {
        self.responses.rows()
    }

    pub fn composer(&self) -> &ResponseComposer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ResponseComposer {
        &mut self.composer
    }

    /// Points the form at one of this community's fields and opens it.
    ///
    /// Returns false for an unknown field.
    pub fn start_response(&mut self, field_id: &FieldId) -> bool {
        let Some(definition) = self.fields.iter().find(|f| &f.id == field_id) else {
            debug!(%field_id, "Field not found; form left unchanged");
            return false;
        };
        self.composer.select_field(definition);
        self.composer.open_form();
        true
    }

    /// Submits the open form into this view's response table.
    pub fn submit(&mut self, creator_id: &str) -> Result<ResponseId, ValidationError> {
        self.composer.submit(creator_id, &mut self.responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commons_core::field::FieldType;
    use commons_core::id::SequentialIdGenerator;
    use std::sync::Arc;

    fn ids() -> SharedIdGenerator {
        Arc::new(SequentialIdGenerator::new("response"))
    }

    fn summary() -> CommunitySummary {
        CommunitySummary::new(
            CommunityId::new("c1"),
            "Van School Rebuild Collective",
            "Rebuilding a primary school after the earthquake",
        )
    }

    #[test]
    fn test_open_seeds_demo_data() {
        let view = CommunityView::open(summary(), &ViewSettings::default(), ids());
        assert_eq!(view.responses().len(), 6);
        assert_eq!(view.fields().len(), 3);
        assert_eq!(view.title(), "Van School Rebuild Collective");
    }

    #[test]
    fn test_open_without_seeding() {
        let settings = ViewSettings {
            seed_demo_responses: false,
        };
        let view = CommunityView::open(summary(), &settings, ids());
        assert!(view.responses().is_empty());
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_open_keeps_existing_inputs_and_fields() {
        let mut summary = summary();
        let existing = demo::demo_responses().into_iter().take(2).collect::<Vec<_>>();
        summary.inputs = Some(existing.clone());
        summary.fields = Some(vec![FieldDefinition::free_text(
            FieldId::new("f1"),
            "Why do you care?",
        )]);

        let view = CommunityView::open(summary, &ViewSettings::default(), ids());
        assert_eq!(view.responses().iter().cloned().collect::<Vec<_>>(), existing);
        assert_eq!(view.fields().len(), 1);
    }

    #[test]
    fn test_empty_inputs_are_seeded() {
        let mut summary = summary();
        summary.inputs = Some(Vec::new());
        let view = CommunityView::open(summary, &ViewSettings::default(), ids());
        assert_eq!(view.responses().len(), 6);
    }

    #[test]
    fn test_submit_prepends_response() {
        let mut view = CommunityView::open(summary(), &ViewSettings::default(), ids());
        assert!(view.start_response(&FieldId::new("demo-field-1")));
        assert!(view.composer_mut().set_text("Count me in"));

        let id = view.submit("u7").unwrap();
        assert_eq!(id, ResponseId::new("response-1"));
        let first = view.responses().iter().next().unwrap();
        assert_eq!(first.details, "Count me in");
        assert_eq!(first.field_type, FieldType::FreeText);
        assert_eq!(view.responses().len(), 7);
        assert!(!view.composer().is_open());
    }

    #[test]
    fn test_start_response_unknown_field() {
        let mut view = CommunityView::open(summary(), &ViewSettings::default(), ids());
        assert!(!view.start_response(&FieldId::new("missing")));
        assert!(!view.composer().is_open());
        assert_eq!(view.submit("u7"), Err(ValidationError::MissingFieldType));
    }
}
