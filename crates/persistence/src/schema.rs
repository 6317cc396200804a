// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rusqlite::Connection;
use tracing::info;

use crate::error::StoreError;

/// Initializes the database schema.
///
/// This is an idempotent bootstrap, not a migration system: every
/// statement is `IF NOT EXISTS`, so re-running against an existing
/// store is harmless.
///
/// # Arguments
///
/// * `conn` - The database connection to initialize
///
/// # Errors
///
/// Returns an error if schema creation fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), StoreError> {
    info!("Initializing database schema");

    // Enable foreign key enforcement
    conn.execute("PRAGMA foreign_keys = ON", [])?;

    conn.execute_batch(
        "
        -- Read-only directory of people; officers carry role_id 2.
        -- Rows are created out of band: the application has no
        -- registration flow for users.
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name TEXT NOT NULL,
            role_id INTEGER NOT NULL
        );

        -- Case records. status and priority are free TEXT: the fixed
        -- enumerations are a UI concern, not a storage constraint.
        -- assigned_to is an informational officer reference with no
        -- foreign key, so unresolvable ids are representable.
        CREATE TABLE IF NOT EXISTS firs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            complainant_name TEXT NOT NULL,
            description TEXT,
            location TEXT NOT NULL,
            priority TEXT NOT NULL DEFAULT 'Medium',
            status TEXT NOT NULL DEFAULT 'Open',
            assigned_to INTEGER,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_firs_updated_at
            ON firs(updated_at DESC);

        -- Append-only investigation notes. officer stores the value
        -- the form submitted, unvalidated, with no foreign key.
        CREATE TABLE IF NOT EXISTS investigations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            fir_id INTEGER NOT NULL,
            officer INTEGER,
            notes TEXT NOT NULL,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(fir_id) REFERENCES firs(id)
        );

        CREATE INDEX IF NOT EXISTS idx_investigations_fir
            ON investigations(fir_id);
        ",
    )?;

    Ok(())
}
