//! End-to-end tests over an in-memory SQLite database
//!
//! Exercises migrations, the SeaORM store and real transaction rollback.

mod common;

use common::{candidate, dec, default_rows, print_test_header};
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter,
};
use settings_editor::contract::{
    CandidateSetting, ConfigurationSetting, SettingsEditorApi, SettingsError, SubmitOutcome,
};
use settings_editor::domain::SettingsStore;
use settings_editor::infra::storage::{entity, repositories::SeaOrmSettingsStore};
use settings_editor::{Config, SettingsEditorModule};
use std::sync::Arc;

async fn connect() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(options).await.unwrap()
}

async fn seed(db: &DatabaseConnection, rows: &[ConfigurationSetting]) {
    let models: Vec<entity::ActiveModel> = rows.iter().map(Into::into).collect();
    entity::Entity::insert_many(models).exec(db).await.unwrap();
}

async fn stored(db: &DatabaseConnection) -> Vec<ConfigurationSetting> {
    SeaOrmSettingsStore::new(Arc::new(db.clone()))
        .query()
        .await
        .unwrap()
}

/// Module over a migrated database seeded with `default_rows`
async fn setup() -> (SettingsEditorModule, DatabaseConnection) {
    let db = connect().await;
    let module = SettingsEditorModule::with_connection(Config::default(), db.clone())
        .await
        .unwrap();
    seed(&db, &default_rows()).await;
    (module, db)
}

#[tokio::test]
async fn test_load_returns_rows_in_storage_order() {
    print_test_header(
        "test_load_returns_rows_in_storage_order",
        "Rows come back in insertion order with scale 2",
    );

    let (module, _db) = setup().await;
    let rows = module.client().load().await.unwrap();

    assert_eq!(rows, default_rows());
    assert!(rows.iter().all(|row| row.value.scale() == 2));
    assert_eq!(rows[1].value.to_string(), "30.00");
    println!("✅ Loaded {} rows", rows.len());
}

#[tokio::test]
async fn test_accepted_edit_is_committed() {
    print_test_header(
        "test_accepted_edit_is_committed",
        "Timeout = 45.5 is visible to a fresh query after commit",
    );

    let (module, db) = setup().await;
    module.client().load().await.unwrap();

    let outcome = module
        .client()
        .submit(candidate(&[("MaxRetries", "3.00"), ("Timeout", "45.5")]))
        .await
        .unwrap();

    let expected = vec![
        ConfigurationSetting::new("MaxRetries", dec(300, 2)),
        ConfigurationSetting::new("Timeout", dec(4550, 2)),
    ];
    assert_eq!(outcome, SubmitOutcome::Accepted(expected.clone()));
    assert_eq!(stored(&db).await, expected);
    println!("✅ Committed");
}

#[tokio::test]
async fn test_round_trip_without_edits() {
    print_test_header(
        "test_round_trip_without_edits",
        "Submitting unchanged rows leaves the table identical",
    );

    let (module, db) = setup().await;
    let loaded = module.client().load().await.unwrap();
    let unchanged: Vec<CandidateSetting> = loaded.iter().map(Into::into).collect();

    let outcome = module.client().submit(unchanged).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Accepted(loaded.clone()));
    assert_eq!(stored(&db).await, loaded);
    println!("✅ Round trip stable");
}

#[tokio::test]
async fn test_rounding_is_persisted() {
    print_test_header("test_rounding_is_persisted", "12.345 lands in the table as 12.35");

    let (module, db) = setup().await;
    module.client().load().await.unwrap();

    let outcome = module
        .client()
        .submit(candidate(&[("MaxRetries", "12.345"), ("Timeout", "99999999.99")]))
        .await
        .unwrap();

    assert!(outcome.is_accepted(), "got {:?}", outcome);
    let rows = stored(&db).await;
    assert_eq!(rows[0].value, dec(1235, 2));
    assert_eq!(rows[1].value, dec(9_999_999_999, 2));
    println!("✅ Rounded value stored");
}

#[tokio::test]
async fn test_vanished_row_rolls_back_earlier_updates() {
    print_test_header(
        "test_vanished_row_rolls_back_earlier_updates",
        "An update matching zero rows undoes the updates before it",
    );

    let (module, db) = setup().await;
    module.client().load().await.unwrap();

    entity::Entity::delete_many()
        .filter(entity::Column::SettingKey.eq("Timeout"))
        .exec(&db)
        .await
        .unwrap();

    let outcome = module
        .client()
        .submit(candidate(&[("MaxRetries", "7"), ("Timeout", "70")]))
        .await
        .unwrap();

    match outcome {
        SubmitOutcome::PersistenceFailed(failure) => {
            assert_eq!(failure.key.as_deref(), Some("Timeout"));
            assert!(failure.reason.contains("affected 0 rows"));
        }
        other => panic!("expected PersistenceFailed, got {:?}", other),
    }
    assert_eq!(
        stored(&db).await,
        vec![ConfigurationSetting::new("MaxRetries", dec(300, 2))]
    );
    println!("✅ MaxRetries left at 3.00");
}

#[tokio::test]
async fn test_rejections_leave_table_untouched() {
    print_test_header(
        "test_rejections_leave_table_untouched",
        "Rename and validation rejections never write",
    );

    let (module, db) = setup().await;
    module.client().load().await.unwrap();

    let renamed = module
        .client()
        .submit(candidate(&[("MaxRetry", "5"), ("Timeout", "30")]))
        .await
        .unwrap();
    assert!(matches!(renamed, SubmitOutcome::RenameRejected(_)));

    let invalid = module
        .client()
        .submit(candidate(&[("MaxRetries", "5"), ("Timeout", "abc")]))
        .await
        .unwrap();
    assert!(matches!(
        invalid,
        SubmitOutcome::ValidationRejected { ref key, .. } if key == "Timeout"
    ));

    assert_eq!(stored(&db).await, default_rows());
    println!("✅ Table unchanged");
}

#[tokio::test]
async fn test_init_with_default_config() {
    print_test_header(
        "test_init_with_default_config",
        "init connects to in-memory SQLite and migrates an empty table",
    );

    let module = SettingsEditorModule::init(Config::default()).await.unwrap();
    let rows = module.client().load().await.unwrap();

    assert!(rows.is_empty());
    let outcome = module.client().submit(Vec::new()).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Accepted(Vec::new()));
    println!("✅ Empty table editable");
}

#[tokio::test]
async fn test_dropped_session_reports_connectivity() {
    print_test_header(
        "test_dropped_session_reports_connectivity",
        "Disconnecting the module session blocks loads until reconnected",
    );

    let (module, db) = setup().await;
    module.client().load().await.unwrap();

    module.session().disconnect();
    let err = module.client().load().await.unwrap_err();
    assert!(matches!(err, SettingsError::Connectivity { .. }));

    module
        .session()
        .connect(Arc::new(SeaOrmSettingsStore::new(Arc::new(db.clone()))));
    assert_eq!(module.client().load().await.unwrap(), default_rows());
    println!("✅ Reconnected");
}
