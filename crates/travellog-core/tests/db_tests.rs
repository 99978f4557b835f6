use jiff::Timestamp;
use tempfile::NamedTempFile;
use travellog_core::{
    models::draft::fields,
    params::{CreateLog, UpdateLog},
    Database, DraftFields, DraftId, LogbookError, Visibility, Writer,
};

fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn ana() -> Writer {
    Writer::new("ana@example.com", "ana")
}

fn log_params(plan_id: u64, title: &str) -> CreateLog {
    CreateLog {
        plan_id,
        title: title.to_string(),
        content: "<p>Content</p>".to_string(),
        visibility: Visibility::Private,
        images: vec![],
    }
}

#[test]
fn test_database_reopens_existing_file() {
    let (temp_file, mut db) = create_test_db();
    db.create_plan("Persisted").unwrap();
    drop(db);

    let db = Database::new(temp_file.path()).unwrap();
    let plans = db.list_plans().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].title, "Persisted");
}

#[test]
fn test_create_plan_rejects_empty_title() {
    let (_temp_file, mut db) = create_test_db();
    assert!(matches!(
        db.create_plan("  "),
        Err(LogbookError::InvalidInput { .. })
    ));
}

#[test]
fn test_create_log_validates_text() {
    let (_temp_file, mut db) = create_test_db();
    let plan = db.create_plan("Trip").unwrap();

    let mut params = log_params(plan.id, "");
    assert!(matches!(
        db.create_log(&ana(), &params),
        Err(LogbookError::InvalidInput { .. })
    ));

    params.title = "t".repeat(101);
    assert!(matches!(
        db.create_log(&ana(), &params),
        Err(LogbookError::InvalidInput { .. })
    ));

    params.title = "Fine".to_string();
    params.content = String::new();
    assert!(matches!(
        db.create_log(&ana(), &params),
        Err(LogbookError::InvalidInput { .. })
    ));
}

#[test]
fn test_images_keep_upload_order() {
    let (_temp_file, mut db) = create_test_db();
    let plan = db.create_plan("Trip").unwrap();
    let mut params = log_params(plan.id, "Photos");
    params.images = vec!["c.jpg".to_string(), "a.jpg".to_string(), "b.jpg".to_string()];

    let log = db.create_log(&ana(), &params).unwrap();
    let stored = db.get_log(log.id).unwrap().unwrap();
    assert_eq!(stored.images, params.images);

    let summaries = db.list_logs_by_writer(&ana().email).unwrap();
    assert_eq!(summaries[0].cover_image.as_deref(), Some("c.jpg"));
}

#[test]
fn test_images_limit() {
    let (_temp_file, mut db) = create_test_db();
    let plan = db.create_plan("Trip").unwrap();
    let mut params = log_params(plan.id, "Too many");
    params.images = (0..9).map(|i| format!("{i}.jpg")).collect();

    assert!(matches!(
        db.create_log(&ana(), &params),
        Err(LogbookError::InvalidInput { .. })
    ));
    assert!(db.list_logs_by_writer(&ana().email).unwrap().is_empty());
}

#[test]
fn test_update_to_missing_plan() {
    let (_temp_file, mut db) = create_test_db();
    let plan = db.create_plan("Trip").unwrap();
    let log = db.create_log(&ana(), &log_params(plan.id, "Move me")).unwrap();

    let result = db.update_log(&UpdateLog {
        id: log.id,
        plan_id: Some(42),
        ..Default::default()
    });
    assert!(matches!(result, Err(LogbookError::PlanNotFound { id: 42 })));
    assert_eq!(db.get_log(log.id).unwrap().unwrap().plan_id, plan.id);
}

#[test]
fn test_summary_excerpt_is_truncated() {
    let (_temp_file, mut db) = create_test_db();
    let plan = db.create_plan("Trip").unwrap();
    let mut params = log_params(plan.id, "Long");
    params.content = "x".repeat(500);
    db.create_log(&ana(), &params).unwrap();

    let summary = &db.list_logs_by_writer(&ana().email).unwrap()[0];
    assert_eq!(summary.excerpt.chars().count(), 203);
    assert!(summary.excerpt.ends_with("..."));
}

#[test]
fn test_drafts_round_trip_through_json() {
    let (_temp_file, db) = create_test_db();
    let id = DraftId::new("new-1");
    let fields = DraftFields::from([
        (fields::TITLE.to_string(), "Quote \"here\"".to_string()),
        (fields::CONTENT.to_string(), "<p>line\nbreak</p>".to_string()),
    ]);
    let saved_at = Timestamp::from_second(1641038400).unwrap();

    db.save_draft(&id, &fields, saved_at).unwrap();
    let draft = db.get_draft(&id).unwrap().unwrap();
    assert_eq!(draft.fields, fields);
    assert_eq!(draft.last_saved_at, Some(saved_at));

    assert!(db.delete_draft(&id).unwrap());
    assert!(!db.delete_draft(&id).unwrap());
    assert!(db.list_drafts().unwrap().is_empty());
}
