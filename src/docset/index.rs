//! SQLite search index (`docSet.dsidx`).
//!
//! The store is rebuilt from scratch on every build:
//! - any existing file is removed first
//! - all rows go in through one prepared statement inside one transaction
//! - a failed write removes the partial file

use super::layout;
use crate::error::StoreFailure;
use crate::model::SymbolRecord;
use rusqlite::{params, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CREATE_INDEX_SQL: &str =
    "CREATE TABLE searchIndex(id INTEGER PRIMARY KEY, name TEXT, type TEXT, path TEXT)";

pub const INSERT_INDEX_SQL: &str = "INSERT INTO searchIndex(name, type, path) VALUES (?1, ?2, ?3)";

/// Create `docSet.dsidx` in `db_dir` and insert every record in order.
///
/// Returns the path of the created store.
pub fn create_index(records: &[SymbolRecord], db_dir: &Path) -> Result<PathBuf, StoreFailure> {
    let db_path = db_dir.join(layout::DB_FILE);

    if db_path.exists() {
        std::fs::remove_file(&db_path).map_err(|source| StoreFailure::Replace {
            path: db_path.clone(),
            source,
        })?;
    }

    let result = write_index(records, &db_path);
    if result.is_err() && db_path.exists() {
        if let Err(e) = std::fs::remove_file(&db_path) {
            warn!("Failed to remove partial search index {}: {}", db_path.display(), e);
        }
    }
    result?;

    info!("Created the SQLite search index with {} entries", records.len());
    Ok(db_path)
}

fn write_index(records: &[SymbolRecord], db_path: &Path) -> Result<(), StoreFailure> {
    let create_failed = |source| StoreFailure::CreateFailed {
        path: db_path.to_path_buf(),
        source,
    };
    let write_failed = |source| StoreFailure::WriteFailed {
        path: db_path.to_path_buf(),
        source,
    };

    // Connection is closed on drop, on every path out of this function
    let mut conn = Connection::open(db_path).map_err(create_failed)?;
    conn.execute(CREATE_INDEX_SQL, []).map_err(create_failed)?;

    let tx = conn.transaction().map_err(write_failed)?;
    {
        let mut stmt = tx.prepare(INSERT_INDEX_SQL).map_err(write_failed)?;
        for record in records {
            stmt.execute(params![record.name(), record.kind().as_str(), record.path()])
                .map_err(write_failed)?;
        }
    }
    tx.commit().map_err(write_failed)?;

    Ok(())
}

/// Row counts read back from an existing search index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub total: i64,
    /// (type, count), ordered by type name
    pub by_type: Vec<(String, i64)>,
}

/// Summarize the search index of the docset at `docset_root`.
pub fn summarize(docset_root: &Path) -> Result<IndexSummary, StoreFailure> {
    let db_path = layout::db_path(docset_root);
    let read_failed = |source| StoreFailure::ReadFailed {
        path: db_path.clone(),
        source,
    };

    let conn = Connection::open_with_flags(&db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(read_failed)?;

    let total: i64 = conn
        .query_row("SELECT COUNT(*) FROM searchIndex", [], |row| row.get(0))
        .map_err(read_failed)?;

    let mut stmt = conn
        .prepare("SELECT type, COUNT(*) FROM searchIndex GROUP BY type ORDER BY type")
        .map_err(read_failed)?;
    let by_type = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))
        .map_err(read_failed)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_failed)?;

    Ok(IndexSummary { total, by_type })
}
