use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};

use crate::error::Result;
use crate::models::AppState;

/// Load/save boundary for the whole application snapshot.
///
/// The snapshot is opaque to the store: one JSON blob per owner, last write
/// wins. Callers must stay correct in memory when `save` fails.
pub trait StateStore {
    fn load(&self) -> Result<Option<AppState>>;
    fn save(&self, state: &AppState) -> Result<()>;
}

/// SQLite-backed store. One row per owner id in a `snapshots` table; the
/// owner id is configuration, not a constant, so tests can isolate owners.
pub struct SqliteStore {
    conn: Connection,
    owner_id: String,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P, owner_id: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn,
            owner_id: owner_id.to_string(),
        };
        store.init()?;
        Ok(store)
    }

    fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS snapshots (
                owner_id TEXT PRIMARY KEY,
                data TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }
}

impl StateStore for SqliteStore {
    fn load(&self) -> Result<Option<AppState>> {
        let row: rusqlite::Result<String> = self.conn.query_row(
            "SELECT data FROM snapshots WHERE owner_id = ?1",
            params![self.owner_id],
            |row| row.get(0),
        );

        match row {
            Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, state: &AppState) -> Result<()> {
        let data = serde_json::to_string(state)?;
        self.conn.execute(
            r#"
            INSERT INTO snapshots (owner_id, data, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(owner_id) DO UPDATE SET
                data = excluded.data,
                updated_at = excluded.updated_at
            "#,
            params![self.owner_id, data, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[cfg(test)]
pub struct MemStore {
    data: std::cell::RefCell<Option<String>>,
    pub fail_saves: std::cell::Cell<bool>,
}

#[cfg(test)]
impl MemStore {
    pub fn new() -> Self {
        Self {
            data: std::cell::RefCell::new(None),
            fail_saves: std::cell::Cell::new(false),
        }
    }

    pub fn with_snapshot(json: &str) -> Self {
        Self {
            data: std::cell::RefCell::new(Some(json.to_string())),
            fail_saves: std::cell::Cell::new(false),
        }
    }

    pub fn snapshot(&self) -> Option<String> {
        self.data.borrow().clone()
    }
}

#[cfg(test)]
impl StateStore for MemStore {
    fn load(&self) -> Result<Option<AppState>> {
        match &*self.data.borrow() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &AppState) -> Result<()> {
        if self.fail_saves.get() {
            return Err(rusqlite::Error::ExecuteReturnedResults.into());
        }
        *self.data.borrow_mut() = Some(serde_json::to_string(state)?);
        Ok(())
    }
}

// Lets a test hold onto the store it handed to a Session.
#[cfg(test)]
impl StateStore for std::rc::Rc<MemStore> {
    fn load(&self) -> Result<Option<AppState>> {
        (**self).load()
    }

    fn save(&self, state: &AppState) -> Result<()> {
        (**self).save(state)
    }
}
