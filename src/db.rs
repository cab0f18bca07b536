use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::Connection;
use thiserror::Error;

const DB_PATH: &str = "contacts.db";

/// Storage-layer failure. A unique-email conflict is not one of these;
/// `dedup_persist` silently skips conflicting rows.
#[derive(Debug, Error)]
#[error("database error: {0}")]
pub struct PersistError(#[from] rusqlite::Error);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub name: String,
    pub title: String,
    pub email: String,
}

/// Database location: `CONTACTS_DB` env override, else `contacts.db` in
/// the working directory.
pub fn db_path() -> PathBuf {
    env::var("CONTACTS_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DB_PATH))
}

pub fn connect(path: &Path) -> Result<Connection> {
    let conn =
        Connection::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL,
            title TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE
        );
        ",
    )?;
    Ok(())
}

/// Insert a batch of contacts in one transaction, skipping any row whose
/// email is already stored. The first row seen for an email keeps its
/// name and title; later conflicting rows are discarded, not errors.
/// Returns how many rows were actually new.
pub fn dedup_persist(conn: &Connection, rows: &[ContactRow]) -> Result<usize, PersistError> {
    let tx = conn.unchecked_transaction()?;
    let mut inserted = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO contacts (name, title, email) VALUES (?1, ?2, ?3)",
        )?;
        for row in rows {
            inserted += stmt.execute(rusqlite::params![row.name, row.title, row.email])?;
        }
    }
    tx.commit()?;
    Ok(inserted)
}

/// All stored contacts in insertion order.
pub fn fetch_contacts(conn: &Connection) -> Result<Vec<ContactRow>> {
    let mut stmt = conn.prepare("SELECT name, title, email FROM contacts ORDER BY id")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(ContactRow {
                name: row.get(0)?,
                title: row.get(1)?,
                email: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn count_contacts(conn: &Connection) -> Result<usize> {
    let count = conn.query_row("SELECT COUNT(*) FROM contacts", [], |r| r.get(0))?;
    Ok(count)
}

// ── Tests ──
