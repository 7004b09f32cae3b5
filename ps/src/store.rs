//! SQLite-backed store for accounts and saved plans

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username already exists: {0}")]
    DuplicateUsername(String),

    #[error("stored plan {0} is corrupted")]
    Corrupted(i64),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("artifact serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Check if this is a per-plan corruption failure (non-fatal for the session)
    pub fn is_corrupted(&self) -> bool {
        matches!(self, StoreError::Corrupted(_))
    }
}

/// A registered account
///
/// Created at registration, read back at authentication. The credential hash
/// never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A saved plan row: transcript plus four serialized artifact blobs
///
/// Immutable once written. `prioritized_json` mirrors `tasks_json`; both
/// columns are kept for storage-format compatibility.
#[derive(Debug, Clone)]
pub struct SavedPlan {
    pub id: i64,
    pub account_id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub transcript: String,
    pub tasks_json: String,
    pub prioritized_json: String,
    pub schedule_json: String,
    pub blocks_json: String,
}

/// Structurally validated artifact blobs of a saved plan
///
/// Values are untyped JSON; the caller deserializes them into its own domain
/// types.
#[derive(Debug, Clone)]
pub struct PlanArtifacts {
    pub tasks: serde_json::Value,
    pub prioritized: serde_json::Value,
    pub schedule: serde_json::Value,
    pub blocks: serde_json::Value,
}

impl SavedPlan {
    /// Re-parse and structurally validate the four artifact blobs
    ///
    /// A plan whose blobs fail to parse, or where `tasks`/`prioritized`/
    /// `blocks` is not a list or `schedule` is not a mapping, is flagged as
    /// corrupted. This is a per-plan failure; it never invalidates anything
    /// outside this row.
    pub fn artifacts(&self) -> Result<PlanArtifacts, StoreError> {
        debug!(plan_id = self.id, "artifacts: decoding stored blobs");
        let corrupted = || StoreError::Corrupted(self.id);

        let tasks: serde_json::Value = serde_json::from_str(&self.tasks_json).map_err(|_| corrupted())?;
        let prioritized: serde_json::Value = serde_json::from_str(&self.prioritized_json).map_err(|_| corrupted())?;
        let schedule: serde_json::Value = serde_json::from_str(&self.schedule_json).map_err(|_| corrupted())?;
        let blocks: serde_json::Value = serde_json::from_str(&self.blocks_json).map_err(|_| corrupted())?;

        if !tasks.is_array() || !prioritized.is_array() || !schedule.is_object() || !blocks.is_array() {
            return Err(corrupted());
        }

        Ok(PlanArtifacts {
            tasks,
            prioritized,
            schedule,
            blocks,
        })
    }
}

/// One-way deterministic credential hash
///
/// The algorithm is not part of the storage contract; only hash-and-compare
/// behavior is.
fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// The plan store
pub struct PlanStore {
    conn: Connection,
}

impl PlanStore {
    /// Open or create a store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        debug!(path = %path.display(), "Opened plan store");
        Ok(store)
    }

    /// Open an in-memory store (tests)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS accounts (
                 id            INTEGER PRIMARY KEY,
                 username      TEXT NOT NULL UNIQUE,
                 password_hash TEXT NOT NULL,
                 created_at    TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS plans (
                 id               INTEGER PRIMARY KEY,
                 account_id       INTEGER NOT NULL REFERENCES accounts(id),
                 created_at       TEXT NOT NULL,
                 title            TEXT NOT NULL,
                 transcript       TEXT NOT NULL,
                 tasks_json       TEXT NOT NULL,
                 prioritized_json TEXT NOT NULL,
                 schedule_json    TEXT NOT NULL,
                 blocks_json      TEXT NOT NULL
             );
             CREATE INDEX IF NOT EXISTS idx_plans_account ON plans(account_id, created_at);",
        )?;
        Ok(())
    }

    /// Create a new account
    ///
    /// Fails with [`StoreError::DuplicateUsername`] if the username is taken;
    /// the existing account is left untouched.
    pub fn create_account(&self, username: &str, password: &str) -> Result<Account, StoreError> {
        debug!(%username, "create_account: called");
        let created_at = Utc::now();
        let result = self.conn.execute(
            "INSERT INTO accounts (username, password_hash, created_at) VALUES (?1, ?2, ?3)",
            params![username, hash_password(password), created_at],
        );

        match result {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                info!(%username, id, "Account created");
                Ok(Account {
                    id,
                    username: username.to_string(),
                    created_at,
                })
            }
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
                debug!(%username, "create_account: username taken");
                Err(StoreError::DuplicateUsername(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Authenticate an account by deterministic hash comparison
    ///
    /// Returns `None` for an unknown username or a wrong password; the two
    /// cases are deliberately indistinguishable to the caller.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<Account>, StoreError> {
        debug!(%username, "authenticate: called");
        let row = self
            .conn
            .query_row(
                "SELECT id, username, password_hash, created_at FROM accounts WHERE username = ?1",
                params![username],
                |row| {
                    Ok((
                        Account {
                            id: row.get(0)?,
                            username: row.get(1)?,
                            created_at: row.get(3)?,
                        },
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((account, stored_hash)) if stored_hash == hash_password(password) => Ok(Some(account)),
            _ => Ok(None),
        }
    }

    /// Save a plan snapshot for an account
    ///
    /// A missing or blank title defaults to a timestamp-derived one. All four
    /// artifact blobs land in a single row insert, so they persist together
    /// or not at all.
    pub fn save_plan(
        &self,
        account_id: i64,
        title: Option<&str>,
        transcript: &str,
        tasks: &impl Serialize,
        prioritized: &impl Serialize,
        schedule: &impl Serialize,
        blocks: &impl Serialize,
    ) -> Result<SavedPlan, StoreError> {
        let created_at = Utc::now();
        let title = match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => t.to_string(),
            None => created_at.format("Plan %Y-%m-%d %H:%M").to_string(),
        };

        let tasks_json = serde_json::to_string(tasks)?;
        let prioritized_json = serde_json::to_string(prioritized)?;
        let schedule_json = serde_json::to_string(schedule)?;
        let blocks_json = serde_json::to_string(blocks)?;

        self.conn.execute(
            "INSERT INTO plans (account_id, created_at, title, transcript,
                                tasks_json, prioritized_json, schedule_json, blocks_json)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                account_id,
                created_at,
                title,
                transcript,
                tasks_json,
                prioritized_json,
                schedule_json,
                blocks_json
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        info!(id, account_id, %title, "Plan saved");

        Ok(SavedPlan {
            id,
            account_id,
            created_at,
            title,
            transcript: transcript.to_string(),
            tasks_json,
            prioritized_json,
            schedule_json,
            blocks_json,
        })
    }

    /// List an account's most recent plans, newest first
    pub fn list_recent(&self, account_id: i64, limit: usize) -> Result<Vec<SavedPlan>, StoreError> {
        debug!(account_id, limit, "list_recent: called");
        let mut stmt = self.conn.prepare(
            "SELECT id, account_id, created_at, title, transcript,
                    tasks_json, prioritized_json, schedule_json, blocks_json
             FROM plans WHERE account_id = ?1
             ORDER BY created_at DESC, id DESC LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![account_id, limit as i64], row_to_plan)?;
        let mut plans = Vec::new();
        for row in rows {
            plans.push(row?);
        }
        Ok(plans)
    }

    /// Fetch one of an account's plans by id
    ///
    /// Scoped to the account: another account's plan id resolves to `None`.
    pub fn get_plan(&self, account_id: i64, plan_id: i64) -> Result<Option<SavedPlan>, StoreError> {
        let plan = self
            .conn
            .query_row(
                "SELECT id, account_id, created_at, title, transcript,
                        tasks_json, prioritized_json, schedule_json, blocks_json
                 FROM plans WHERE account_id = ?1 AND id = ?2",
                params![account_id, plan_id],
                row_to_plan,
            )
            .optional()?;
        Ok(plan)
    }
}

fn row_to_plan(row: &rusqlite::Row<'_>) -> rusqlite::Result<SavedPlan> {
    Ok(SavedPlan {
        id: row.get(0)?,
        account_id: row.get(1)?,
        created_at: row.get(2)?,
        title: row.get(3)?,
        transcript: row.get(4)?,
        tasks_json: row.get(5)?,
        prioritized_json: row.get(6)?,
        schedule_json: row.get(7)?,
        blocks_json: row.get(8)?,
    })
}
