// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite persistence layer for the firdesk case tracker.
//!
//! The store is a single `SQLite` database holding three tables
//! (`users`, `firs`, `investigations`) accessed through parameterized
//! statements only. On first open against a missing file the fixed
//! schema is created; re-running the bootstrap against an existing
//! store is a no-op.
//!
//! The only multi-statement atomic unit in the system is the
//! case-detail update: the status/assignment update and its
//! accompanying investigation note commit together or not at all.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use firdesk_domain::{
    CaseFilter, CaseListing, CaseRecord, CaseStatistics, CaseSummary, CaseUpdate,
    InvestigationNote, NewCase, Officer,
};
use rusqlite::Connection;
use tracing::{debug, info};

mod error;
mod mutations;
mod queries;
mod schema;

#[cfg(test)]
mod tests;

pub use error::StoreError;

/// Handle to the case store.
///
/// Each instance owns one database connection. The server wraps the
/// store in a mutex and every handler acquires it for the duration of
/// its statements, releasing it on every exit path before the
/// response is built.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Creates a store backed by an in-memory database.
    ///
    /// Used by the server when no database path is configured, and by
    /// tests for fast, isolated stores.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, StoreError> {
        let conn: Connection = Connection::open_in_memory()
            .map_err(|e| StoreError::InitializationError(e.to_string()))?;
        schema::initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates a store backed by a database file, creating and
    /// bootstrapping the file if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or
    /// initialized.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn: Connection = Connection::open(path.as_ref())
            .map_err(|e| StoreError::InitializationError(e.to_string()))?;

        // WAL mode for better read concurrency on file-backed stores
        let journal_mode: String = conn
            .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
            .map_err(|e| StoreError::InitializationError(e.to_string()))?;
        debug!(%journal_mode, "Configured journal mode");

        schema::initialize_schema(&conn)?;
        info!(path = %path.as_ref().display(), "Opened case store");

        Ok(Self { conn })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Retrieves the most-recently-updated cases for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent_cases(&self, limit: u32) -> Result<Vec<CaseSummary>, StoreError> {
        queries::recent_cases(&self.conn, limit)
    }

    /// Retrieves the filtered case listing with officer names joined.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_cases(&self, filter: &CaseFilter) -> Result<Vec<CaseListing>, StoreError> {
        queries::list_cases(&self.conn, filter)
    }

    /// Retrieves a single case by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CaseNotFound` if the id does not resolve.
    pub fn get_case(&self, case_id: i64) -> Result<CaseRecord, StoreError> {
        queries::get_case(&self.conn, case_id)
    }

    /// Retrieves all users with the officer role.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_officers(&self) -> Result<Vec<Officer>, StoreError> {
        queries::list_officers(&self.conn)
    }

    /// Retrieves a case's investigation notes, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_investigations(&self, fir_id: i64) -> Result<Vec<InvestigationNote>, StoreError> {
        queries::list_investigations(&self.conn, fir_id)
    }

    /// Computes the reporting aggregates over the FIR table.
    ///
    /// # Errors
    ///
    /// Returns an error if any aggregate query fails.
    pub fn case_statistics(&self) -> Result<CaseStatistics, StoreError> {
        queries::case_statistics(&self.conn)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Inserts a new case with status forced to `Open` and both
    /// timestamps set to the current time.
    ///
    /// # Returns
    ///
    /// The id assigned to the new case.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_case(&self, new_case: &NewCase) -> Result<i64, StoreError> {
        mutations::insert_case(&self.conn, new_case)
    }

    /// Applies a case-detail update atomically: the unconditional
    /// status/assignment/timestamp update, plus an investigation note
    /// when notes text is present.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CaseNotFound` if the id does not resolve
    /// (nothing is written), or a database error if either write
    /// fails (in which case neither is visible).
    pub fn apply_case_update(
        &mut self,
        case_id: i64,
        update: &CaseUpdate,
    ) -> Result<(), StoreError> {
        mutations::apply_case_update(&mut self.conn, case_id, update)
    }

    /// Inserts a user row. The web application never calls this;
    /// users are created out of band.
    ///
    /// # Returns
    ///
    /// The id assigned to the new user.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_user(&self, full_name: &str, role_id: i64) -> Result<i64, StoreError> {
        mutations::insert_user(&self.conn, full_name, role_id)
    }
}
