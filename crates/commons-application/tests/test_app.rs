use std::fs;

use commons_application::CommonsApp;
use commons_core::field::FieldType;
use commons_core::id::CommunityId;
use commons_core::response::{FieldFilter, SortColumn};
use commons_infrastructure::ConfigService;
use tempfile::TempDir;

fn app(temp_dir: &TempDir, extra: &str) -> CommonsApp {
    let config_path = temp_dir.path().join("config.toml");
    let data_dir = temp_dir.path().join("data");
    fs::write(
        &config_path,
        format!("[storage]\ndata_dir = {:?}\n{}", data_dir.display().to_string(), extra),
    )
    .unwrap();
    CommonsApp::from_config_service(&ConfigService::with_path(config_path)).unwrap()
}

#[tokio::test]
async fn test_authored_community_opens_with_its_schema() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(&temp_dir, "[view]\nseed_demo_responses = false\n");

    let mut draft = app.new_draft();
    assert!(draft.set_title("Van School Rebuild Collective"));
    assert!(draft.set_description("Rebuilding a primary school"));
    let fields = draft.fields_mut();
    fields.begin_definition(FieldType::MultiChoice);
    assert!(fields.add_option("Carpentry"));
    assert!(fields.add_option("Masonry"));
    let skills = fields.commit_definition("Skills").unwrap();
    fields.begin_definition(FieldType::FreeText);
    fields.commit_definition("Message").unwrap();

    let id = app.create_community(&draft).await.unwrap();
    assert!(temp_dir.path().join("data").join("communities.toml").exists());

    let mut view = app.open_stored(&id).await.unwrap();
    assert_eq!(view.title(), "Van School Rebuild Collective");
    assert_eq!(view.fields().len(), 2);
    assert!(view.responses().is_empty());

    assert!(view.start_response(&skills));
    assert!(view.composer_mut().toggle(1));
    assert!(view.composer_mut().toggle(0));
    view.submit("u1").unwrap();

    let rows = view.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].details, "Skills: Carpentry, Masonry");
}

#[tokio::test]
async fn test_open_stored_unknown_id_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(&temp_dir, "");

    let err = app
        .open_stored(&CommunityId::new("missing"))
        .await
        .err()
        .unwrap();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_seeded_view_filters_and_sorts() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(&temp_dir, "");

    let mut view = app.open_community(commons_core::community::CommunitySummary::new(
        CommunityId::new("c1"),
        "",
        "",
    ));
    assert_eq!(view.title(), "Community");
    assert_eq!(view.description(), "No description provided.");

    view.responses_mut().set_filter(FieldFilter::Only(FieldType::FreeText));
    view.responses_mut().toggle_sort(SortColumn::Creator);
    let creators: Vec<&str> = view.rows().iter().map(|r| r.creator_id.as_str()).collect();
    assert_eq!(creators, vec!["elif", "Zeynep"]);
}
