use coursekit::KitError;
use coursekit::db::{Crud, SqlValue};
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_sqlite_path(prefix: &str) -> std::path::PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "coursekit-{prefix}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    temp_path
}

async fn open_with_people(prefix: &str) -> (Crud, std::path::PathBuf) {
    let temp_path = unique_sqlite_path(prefix);
    let database_url = format!("sqlite:{}", temp_path.display());
    let crud = Crud::open(&database_url).await.expect("open database");

    crud.create_table(
        "people",
        &[
            ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
            ("name", "TEXT NOT NULL"),
            ("email", "TEXT UNIQUE"),
            ("score", "REAL"),
        ],
    )
    .await
    .expect("create table");

    (crud, temp_path)
}

#[tokio::test]
async fn insert_fetch_update_delete_roundtrip() {
    let (crud, temp_path) = open_with_people("crud-roundtrip").await;

    let id = crud
        .insert_record(
            "people",
            &[
                ("name", "Ada".into()),
                ("email", "ada@example.com".into()),
                ("score", 9.5.into()),
            ],
        )
        .await
        .expect("insert");
    assert_eq!(id, 1);

    let rows = crud.fetch_all("people").await.expect("fetch all");
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.columns().collect::<Vec<_>>(), ["id", "name", "email", "score"]);
    assert_eq!(row.get("id"), Some(&SqlValue::Integer(1)));
    assert_eq!(row.get("name"), Some(&SqlValue::Text("Ada".to_string())));
    assert_eq!(row.get("score"), Some(&SqlValue::Real(9.5)));

    let updated = crud
        .update_record(
            "people",
            &[("name", "Ada Lovelace".into())],
            "id = ?",
            &[id.into()],
        )
        .await
        .expect("update");
    assert_eq!(updated, 1);

    let rows = crud
        .fetch_by_condition("people", "id = ?", &[id.into()])
        .await
        .expect("fetch by id");
    assert_eq!(
        rows[0].get("name").and_then(SqlValue::as_str),
        Some("Ada Lovelace")
    );

    let deleted = crud
        .delete_record_by_condition("people", "id = ?", &[id.into()])
        .await
        .expect("delete");
    assert_eq!(deleted, 1);

    let rows = crud
        .fetch_by_condition("people", "id = ?", &[id.into()])
        .await
        .expect("fetch after delete");
    assert!(rows.is_empty(), "deleted row still present: {rows:?}");

    crud.close().await;
    let _ = tokio::fs::remove_file(&temp_path).await;
}

#[tokio::test]
async fn null_values_and_condition_params() {
    let (crud, temp_path) = open_with_people("crud-nulls").await;

    for (name, score) in [("a", Some(1.0)), ("b", None), ("c", Some(3.0))] {
        crud.insert_record("people", &[("name", name.into()), ("score", score.into())])
            .await
            .expect("insert");
    }

    let rows = crud
        .fetch_by_condition("people", "score IS NULL", &[])
        .await
        .expect("fetch nulls");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("email"), Some(&SqlValue::Null));
    assert_eq!(rows[0].to_string(), "(2, 'b', NULL, NULL)");

    let rows = crud
        .fetch_by_condition("people", "score > ? AND name <> ?", &[0.5.into(), "c".into()])
        .await
        .expect("fetch with params");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("name").and_then(SqlValue::as_str), Some("a"));

    // No match is not an error.
    let affected = crud
        .update_record("people", &[("score", 0.0.into())], "id = ?", &[99_i64.into()])
        .await
        .expect("update nothing");
    assert_eq!(affected, 0);

    crud.close().await;
    let _ = tokio::fs::remove_file(&temp_path).await;
}

#[tokio::test]
async fn unique_violation_surfaces_as_database_error() {
    let (crud, temp_path) = open_with_people("crud-unique").await;

    let record = [("name", SqlValue::from("x")), ("email", "dup@example.com".into())];
    crud.insert_record("people", &record).await.expect("first insert");
    let err = crud
        .insert_record("people", &record)
        .await
        .expect_err("second insert must fail");
    assert!(matches!(err, KitError::DatabaseError(_)), "got {err:?}");

    assert_eq!(crud.fetch_all("people").await.expect("fetch").len(), 1);

    crud.close().await;
    let _ = tokio::fs::remove_file(&temp_path).await;
}

#[tokio::test]
async fn bad_identifiers_and_empty_records_are_rejected() {
    let (crud, temp_path) = open_with_people("crud-identifiers").await;

    let err = crud
        .fetch_all("people; DROP TABLE people")
        .await
        .expect_err("injection attempt");
    assert!(matches!(err, KitError::InvalidIdentifier(_)), "got {err:?}");

    let err = crud
        .insert_record("people", &[("name) VALUES ('x'); --", "y".into())])
        .await
        .expect_err("bad column");
    assert!(matches!(err, KitError::InvalidIdentifier(_)), "got {err:?}");

    let err = crud
        .insert_record("people", &[])
        .await
        .expect_err("empty insert");
    assert!(matches!(err, KitError::EmptyRecord { operation: "insert", .. }), "got {err:?}");

    let err = crud
        .update_record("people", &[], "id = ?", &[1_i64.into()])
        .await
        .expect_err("empty update");
    assert!(matches!(err, KitError::EmptyRecord { operation: "update", .. }), "got {err:?}");

    // The table survived.
    assert!(crud.fetch_all("people").await.expect("fetch").is_empty());

    crud.close().await;
    let _ = tokio::fs::remove_file(&temp_path).await;
}
