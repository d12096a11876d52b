use quiz_core::model::{AppSettings, Theme};
use storage::repository::AppSettingsRepository;
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn theme_round_trips_through_sqlite() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_theme?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get_settings().await.unwrap(), None);

    repo.save_settings(&AppSettings::new(Theme::Dark))
        .await
        .unwrap();
    let stored = repo.get_settings().await.unwrap().expect("stored");
    assert_eq!(stored.theme(), Theme::Dark);

    repo.save_settings(&stored.with_theme(Theme::Light))
        .await
        .unwrap();
    let stored = repo.get_settings().await.unwrap().expect("stored");
    assert_eq!(stored.theme(), Theme::Light);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite::memory:")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn unknown_stored_theme_is_reported() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_bad_theme?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    sqlx::query("INSERT INTO app_settings (key, value, updated_at) VALUES ('theme', 'sepia', '')")
        .execute(repo.pool())
        .await
        .unwrap();

    let result = repo.get_settings().await;
    assert!(matches!(
        result,
        Err(storage::StorageError::Serialization(_))
    ));
}

#[tokio::test]
async fn file_database_is_created_on_first_open() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("quiz.sqlite3").display());

    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo.save_settings(&AppSettings::new(Theme::Dark))
        .await
        .unwrap();
    drop(repo);

    let reopened = SqliteRepository::connect(&url).await.expect("reconnect");
    reopened.migrate().await.expect("migrate");
    let stored = reopened.get_settings().await.unwrap().expect("stored");
    assert_eq!(stored.theme(), Theme::Dark);
}
