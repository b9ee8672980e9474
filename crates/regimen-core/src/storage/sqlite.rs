//! SQLite-backed slot store.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use super::{DraftStore, StoredPayload};
use crate::error::{Result, StorageResultExt};

const UPSERT_SLOT_SQL: &str = "INSERT INTO draft_slots (slot, payload, saved_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(slot) DO UPDATE SET payload = excluded.payload, saved_at = excluded.saved_at";
const SELECT_SLOT_SQL: &str = "SELECT payload, saved_at FROM draft_slots WHERE slot = ?1";
const DELETE_SLOT_SQL: &str = "DELETE FROM draft_slots WHERE slot = ?1";

/// Draft slots stored in a single SQLite table.
pub struct SqliteDraftStore {
    connection: Connection,
}

impl SqliteDraftStore {
    /// Opens (or creates) the database at `path` and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).storage_context("Failed to open draft database")?;
        Self::from_connection(connection)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().storage_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initializes the schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .storage_context("Failed to initialize draft schema")
    }
}

impl DraftStore for SqliteDraftStore {
    fn write(&mut self, slot: &str, payload: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_SLOT_SQL, params![slot, payload, now])
            .storage_context("Failed to write draft slot")?;
        Ok(())
    }

    fn read(&self, slot: &str) -> Result<Option<StoredPayload>> {
        self.connection
            .query_row(SELECT_SLOT_SQL, params![slot], |row| {
                Ok(StoredPayload {
                    payload: row.get(0)?,
                    saved_at: row.get::<_, String>(1)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
                    })?,
                })
            })
            .optional()
            .storage_context("Failed to read draft slot")
    }

    fn remove(&mut self, slot: &str) -> Result<()> {
        self.connection
            .execute(DELETE_SLOT_SQL, params![slot])
            .storage_context("Failed to remove draft slot")?;
        Ok(())
    }
}
