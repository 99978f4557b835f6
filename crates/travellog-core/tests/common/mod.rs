use tempfile::TempDir;
use travellog_core::{params::CreatePlan, Logbook, LogbookBuilder, Writer};

/// Creates a logbook in a fresh temporary directory with one plan.
pub async fn create_test_logbook() -> (TempDir, Logbook, u64) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let logbook = LogbookBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create logbook");
    let plan = logbook
        .create_plan(&CreatePlan {
            title: "Test Trip".to_string(),
        })
        .await
        .expect("Failed to create plan");
    (temp_dir, logbook, plan.id)
}

pub fn writer(name: &str) -> Writer {
    Writer::new(format!("{name}@example.com"), name)
}
