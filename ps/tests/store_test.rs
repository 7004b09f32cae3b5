//! Integration tests for the file-backed plan store

use planstore::{PlanStore, StoreError};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_store_survives_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("planner.db");

    let account_id = {
        let store = PlanStore::open(&db_path).expect("open store");
        let account = store.create_account("ada", "pw").unwrap();

        let tasks = json!([{"task": "Email the professor"}]);
        let schedule = json!({"Today": [{"task": "Email the professor"}], "Tomorrow": [], "Later": []});
        let blocks = json!([{"type": "Micro Task", "tasks": [{"task": "Email the professor"}]}]);
        store
            .save_plan(account.id, Some("inbox"), "email the professor", &tasks, &tasks, &schedule, &blocks)
            .unwrap();
        account.id
    };

    // Fresh handle over the same file sees the account and the plan.
    let store = PlanStore::open(&db_path).expect("reopen store");
    let account = store.authenticate("ada", "pw").unwrap().expect("account persisted");
    assert_eq!(account.id, account_id);

    let plans = store.list_recent(account.id, 5).unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].title, "inbox");
    assert_eq!(plans[0].transcript, "email the professor");

    let artifacts = plans[0].artifacts().unwrap();
    assert_eq!(artifacts.tasks, artifacts.prioritized);
    assert!(artifacts.schedule.is_object());
}

#[test]
fn test_store_creates_parent_directories() {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("nested").join("deeper").join("planner.db");

    let store = PlanStore::open(&db_path).expect("open with missing parents");
    assert!(db_path.exists());
    drop(store);
}

#[test]
fn test_duplicate_username_across_handles() {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("planner.db");

    PlanStore::open(&db_path).unwrap().create_account("ada", "pw").unwrap();

    let second = PlanStore::open(&db_path).unwrap();
    let err = second.create_account("ada", "other").unwrap_err();
    assert!(matches!(err, StoreError::DuplicateUsername(_)));
}
