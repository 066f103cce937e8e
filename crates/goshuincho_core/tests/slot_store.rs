use goshuincho_core::db::migrations::latest_version;
use goshuincho_core::db::open_db_in_memory;
use goshuincho_core::{RepoError, SlotRepository, SqliteSlotRepository};
use rusqlite::Connection;

#[test]
fn unwritten_slot_reads_as_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    assert!(repo.read_slot("goshuin_records").unwrap().is_none());
}

#[test]
fn write_then_read_returns_latest_body() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    repo.write_slot("goshuin_records", "[]").unwrap();
    assert_eq!(
        repo.read_slot("goshuin_records").unwrap().as_deref(),
        Some("[]")
    );

    repo.write_slot("goshuin_records", "[1,2,3]").unwrap();
    assert_eq!(
        repo.read_slot("goshuin_records").unwrap().as_deref(),
        Some("[1,2,3]")
    );
}

#[test]
fn slots_are_independent_by_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    repo.write_slot("goshuin_records", "[]").unwrap();
    assert!(repo.read_slot("settings").unwrap().is_none());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteSlotRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_slots_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteSlotRepository::try_new(&conn);
    assert!(matches!(result, Err(RepoError::MissingRequiredTable("slots"))));
}

#[test]
fn repository_rejects_connection_missing_required_slot_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE slots (
            name TEXT PRIMARY KEY NOT NULL,
            body TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteSlotRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "slots",
            column: "updated_at"
        })
    ));
}
