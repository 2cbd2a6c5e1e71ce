use todo_core::{LoadOutcome, ServiceError, StoreError, TodoConfig, TodoService};

#[test]
fn session_roundtrips_through_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let config = TodoConfig::with_store_path(dir.path().join("todos.json"));

    let mut session = TodoService::open(&config).expect("missing store should open");
    session.add("write docs");
    session.add("review");
    session.complete(1).unwrap();
    session.save().unwrap();

    let mut reopened = TodoService::open(&config).unwrap();
    assert_eq!(reopened.list(), session.list());
    assert_eq!(reopened.reload().unwrap(), LoadOutcome::Loaded(2));

    let removed = reopened.delete(1).unwrap();
    assert_eq!(removed.title, "write docs");
    assert_eq!(reopened.list().len(), 1);
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = TodoConfig::with_store_path(dir.path().join("nope").join("todos.json"));

    let session = TodoService::open(&config).unwrap();
    let err = session.save().unwrap_err();
    assert!(matches!(err, ServiceError::Store(StoreError::Io(_))));
}

#[test]
fn invalid_config_is_rejected_before_loading() {
    let config = TodoConfig {
        report_limit: 0,
        ..TodoConfig::default()
    };
    let err = TodoService::open(&config).err().expect("zero limit should fail");
    assert!(matches!(err, ServiceError::Config(_)));
}
