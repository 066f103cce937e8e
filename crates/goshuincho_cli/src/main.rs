//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `goshuincho_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use goshuincho_core::db::migrations::latest_version;
use goshuincho_core::db::open_db_in_memory;
use goshuincho_core::{RecordStore, SqliteSlotRepository};

fn main() {
    println!("goshuincho_core version={}", goshuincho_core::core_version());
    println!("goshuincho_core schema_version={}", latest_version());

    // Probe the load path end to end against a throwaway database.
    match open_db_in_memory() {
        Ok(conn) => match SqliteSlotRepository::try_new(&conn) {
            Ok(repo) => {
                let store = RecordStore::load(repo);
                println!("goshuincho_core records={}", store.records().len());
            }
            Err(err) => eprintln!("slot repository unavailable: {err}"),
        },
        Err(err) => eprintln!("database bootstrap failed: {err}"),
    }
}
